// Engine modules: application driver, frame timing, input

pub mod app;
pub mod frame_clock;
pub mod input;
