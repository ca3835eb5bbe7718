use crate::foundation::{
    core::{RasterBuffer, Size},
    math::{device_px, quantize_channel},
};

/// Radial displacement map for a magnifying lens covering the whole canvas.
///
/// Offsets from the canvas center are normalized by half the longer side and encoded with an
/// inverted sign, so a displacement filter samples towards the center and the content appears
/// zoomed in. Every pixel is fully opaque.
pub fn rasterize_magnification(canvas: Size, device_pixel_ratio: f64) -> RasterBuffer {
    let buffer_w = device_px(canvas.width, device_pixel_ratio);
    let buffer_h = device_px(canvas.height, device_pixel_ratio);
    let mut out = RasterBuffer::filled(buffer_w, buffer_h, [128, 128, 0, 255]);

    let half_w = f64::from(buffer_w) / 2.0;
    let half_h = f64::from(buffer_h) / 2.0;
    let ratio = half_w.max(half_h);

    for y in 0..buffer_h {
        let ny = (f64::from(y) - half_h) / ratio;
        for x in 0..buffer_w {
            let nx = (f64::from(x) - half_w) / ratio;
            out.put(
                x,
                y,
                [
                    quantize_channel(128.0 - nx * 127.0),
                    quantize_channel(128.0 - ny * 127.0),
                    0,
                    255,
                ],
            );
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/magnify.rs"]
mod tests;
