//! Display-time unit conversion. Stored records stay metric.

/// Miles per hour in one meter per second, as shown on the wind card.
pub const MPS_TO_MPH: f64 = 2.237;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPS_TO_MPH
}

/// Round to `decimals` places, ties away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid printing "-0.0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Fixed-point string with `decimals` places, e.g. `format_fixed(22.37, 1) == "22.4"`.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round_to(value, decimals))
}
