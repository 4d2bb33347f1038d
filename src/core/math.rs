// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Apply a scaled dead zone to an analogue axis value.
///
/// Values with a magnitude below `dead_zone` collapse to zero; the remaining
/// range is rescaled so the output still reaches -1.0 and 1.0 at full tilt.
pub fn apply_dead_zone(value: f32, dead_zone: f32) -> f32 {
    let magnitude = value.abs();
    if magnitude < dead_zone || approx_equal(magnitude, 0.0, f32::EPSILON) {
        return 0.0;
    }

    let scaled = (magnitude - dead_zone) / (1.0 - dead_zone);
    clamp(scaled, 0.0, 1.0).copysign(value)
}
