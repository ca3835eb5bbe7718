use std::f64::consts::FRAC_PI_3;

use crate::{
    foundation::{
        core::{RasterBuffer, Rgba8, Vec2},
        math::{device_px, quantize_channel},
    },
    raster::bezel::{BezelBand, BezelShape},
};

/// Light direction used when the caller does not pick one.
pub const DEFAULT_SPECULAR_ANGLE: f64 = FRAC_PI_3;

/// Untouched specular pixels are fully transparent black.
pub const CLEAR_SPECULAR: Rgba8 = [0, 0, 0, 0];

/// Rasterize the rim-light layer of the bezel.
///
/// The buffer covers the object only. Intensity follows how squarely the outline faces the light
/// at `specular_angle` and is concentrated within about one device pixel of the outline; alpha
/// falls off faster than intensity.
pub fn rasterize_specular(
    shape: &BezelShape,
    specular_angle: f64,
    device_pixel_ratio: f64,
) -> RasterBuffer {
    let dpr = device_pixel_ratio;
    let buffer_w = device_px(shape.object.width, dpr);
    let buffer_h = device_px(shape.object.height, dpr);
    let mut out = RasterBuffer::filled(buffer_w, buffer_h, CLEAR_SPECULAR);

    let radius = shape.corner_radius * dpr;
    let bezel = shape.bezel_width * dpr;
    // One device pixel of anti-aliasing.
    let band = BezelBand::new(
        f64::from(buffer_w),
        f64::from(buffer_h),
        radius,
        bezel,
        dpr,
    );
    let light = Vec2::from_angle(specular_angle);

    for y in 0..buffer_h {
        for x in 0..buffer_w {
            let Some(hit) = band.classify(f64::from(x), f64::from(y)) else {
                continue;
            };

            // Viewed from above: y grows downwards on screen but upwards for the light.
            let facing = Vec2::new(hit.offset_x, -hit.offset_y) / hit.distance;
            let dot = facing.dot(light).abs();
            let coefficient = dot * rim_falloff(hit.distance_from_side / dpr);
            let color = 255.0 * coefficient;
            let alpha = color * coefficient * hit.opacity;

            let c = quantize_channel(color);
            out.put(x, y, [c, c, c, quantize_channel(alpha)]);
        }
    }

    out
}

/// `sqrt(1 - (1 - t)^2)`: 0 at the outline, 1 one device pixel in, 0 again at two.
fn rim_falloff(t: f64) -> f64 {
    let u = 1.0 - t;
    let v = 1.0 - u * u;
    if v > 0.0 { v.sqrt() } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/specular.rs"]
mod tests;
