/// Quintic smoother-step `6x^5 - 15x^4 + 10x^3`; exactly 0 at 0 and 1 at 1. Not clamped.
pub(crate) fn smootherstep(x: f64) -> f64 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Store a float into an 8-bit channel the way a clamped byte array does:
/// NaN becomes 0, values clamp to `[0, 255]`, ties round to even.
pub(crate) fn quantize_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Logical size scaled to whole device pixels (floored, negative and NaN become 0).
pub(crate) fn device_px(logical: f64, device_pixel_ratio: f64) -> u32 {
    (logical * device_pixel_ratio).floor() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
