use anyhow::Result;
use log::info;
use rusted_input::engine::frame_clock::MAX_FRAME_DELTA;
use rusted_input::engine::input::codes::{controller, key, mouse};
use rusted_input::{Application, Input, InputConfig};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

/// Keys reported by the demo when they change state
const WATCHED_KEYS: [(u32, &str); 6] = [
    (key::W, "W"),
    (key::A, "A"),
    (key::S, "S"),
    (key::D, "D"),
    (key::SPACE, "Space"),
    (key::ESCAPE, "Escape"),
];

fn log_frame(input: &dyn Input, max_controllers: u32) {
    for (code, name) in WATCHED_KEYS {
        if input.key_down(code) {
            info!("{} down", name);
        }
        if input.key_up(code) {
            info!("{} up", name);
        }
    }

    if input.mouse_button_down(mouse::LEFT) {
        let (x, y) = input.mouse_pos();
        info!("Left click at ({}, {})", x, y);
    }

    let connected = (0..max_controllers).filter(|device| input.is_controller_connected(*device));
    for device in connected {
        if input.cont_button_down(device, controller::A) {
            let stick = input.cont_analogue_stick(device, 0);
            info!("Controller {} A pressed, left stick {:?}", device, stick);
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting input demo...");

    let config = InputConfig::default();
    let max_controllers = u32::try_from(config.max_controllers)?;
    let app = Application::new(config)?;
    let input = app.input();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Input")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(
                    "Close requested after {} frames ({:.1} fps), shutting down...",
                    app.frame_count(),
                    app.fps()
                );
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let delta = app.frame();
                if delta.as_millis() >= MAX_FRAME_DELTA {
                    log::debug!("Slow frame: {:.3}s", delta.as_secs_f32());
                }
                log_frame(&*input, max_controllers);

                if input.key_down(key::ESCAPE) {
                    elwt.exit();
                }
            }
            Event::WindowEvent { event, .. } => app.handle_window_event(&event),
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
