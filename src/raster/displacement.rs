use crate::{
    foundation::{
        core::{RasterBuffer, Rgba8, Size},
        math::{device_px, quantize_channel},
    },
    raster::bezel::{BezelBand, BezelShape},
    refraction::RefractionSamples,
};

/// Encodes zero displacement: R and G at mid-range, fully opaque.
pub const NEUTRAL_DISPLACEMENT: Rgba8 = [128, 128, 0, 255];

// The displacement band gets one logical pixel of anti-aliasing, independent of the pixel ratio.
const DISPLACEMENT_AA_PAD: f64 = 1.0;

/// Rasterize the bezel refraction field into a displacement map.
///
/// The object is centered in a `canvas`-sized buffer. Each bezel pixel looks up the refraction
/// sample at its depth into the band and points it along the radial direction of the nearest
/// corner; R and G carry the x and y components normalized by `max_displacement`.
/// Everything outside the band keeps [`NEUTRAL_DISPLACEMENT`].
pub fn rasterize_bezel_displacement(
    canvas: Size,
    shape: &BezelShape,
    max_displacement: f64,
    samples: &RefractionSamples,
    device_pixel_ratio: f64,
) -> RasterBuffer {
    let dpr = device_pixel_ratio;
    let buffer_w = device_px(canvas.width, dpr);
    let buffer_h = device_px(canvas.height, dpr);
    let mut out = RasterBuffer::filled(buffer_w, buffer_h, NEUTRAL_DISPLACEMENT);

    let object_w = shape.object.width * dpr;
    let object_h = shape.object.height * dpr;
    let radius = shape.corner_radius * dpr;
    let bezel = shape.bezel_width * dpr;
    let band = BezelBand::new(object_w, object_h, radius, bezel, DISPLACEMENT_AA_PAD);

    let origin_x = ((f64::from(buffer_w) - object_w) / 2.0).floor() as i64;
    let origin_y = ((f64::from(buffer_h) - object_h) / 2.0).floor() as i64;
    let norm = if max_displacement.is_finite() && max_displacement != 0.0 {
        1.0 / max_displacement
    } else {
        0.0
    };
    let sample_len = samples.len() as f64;

    for y1 in 0..object_h.max(0.0).ceil() as u32 {
        let Ok(by) = u32::try_from(origin_y + i64::from(y1)) else {
            continue;
        };
        for x1 in 0..object_w.max(0.0).ceil() as u32 {
            let Ok(bx) = u32::try_from(origin_x + i64::from(x1)) else {
                continue;
            };
            let Some(hit) = band.classify(f64::from(x1), f64::from(y1)) else {
                continue;
            };

            let cos = hit.offset_x / hit.distance;
            let sin = hit.offset_y / hit.distance;
            let position = (hit.distance_from_side / bezel) * sample_len;
            let sample = if position >= 0.0 {
                samples.get(position as usize)
            } else {
                0.0
            };

            let dx = -cos * sample * norm;
            let dy = -sin * sample * norm;
            out.put(
                bx,
                by,
                [
                    quantize_channel(128.0 + dx * 127.0 * hit.opacity),
                    quantize_channel(128.0 + dy * 127.0 * hit.opacity),
                    0,
                    255,
                ],
            );
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/displacement.rs"]
mod tests;
