use crate::foundation::core::Size;

/// Rounded-rectangle bezel description in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BezelShape {
    /// Size of the glass object.
    pub object: Size,
    /// Corner radius of the rounded rectangle.
    pub corner_radius: f64,
    /// Width of the curved band along the outline.
    pub bezel_width: f64,
}

/// A pixel that falls inside the bezel band of a rounded corner or edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BezelHit {
    /// Offset from the nearest corner center; zero along the axis of a straight edge.
    pub offset_x: f64,
    pub offset_y: f64,
    pub distance: f64,
    /// Distance inwards from the outer outline (`radius - distance`).
    pub distance_from_side: f64,
    /// 1 inside the outline, ramping to 0 across the anti-alias pad.
    pub opacity: f64,
}

/// Device-pixel band classifier for a rounded rectangle.
///
/// The band is the half-open ring `[max(r - bezel, 0), r + pad]` around each corner center,
/// stretched along straight edges; the flat interior is never part of it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BezelBand {
    width: f64,
    height: f64,
    radius: f64,
    inner_sq: f64,
    radius_sq: f64,
    outer_sq: f64,
}

impl BezelBand {
    /// All lengths in device pixels; `pad` is the outer anti-alias width.
    pub(crate) fn new(width: f64, height: f64, radius: f64, bezel: f64, pad: f64) -> Self {
        let inner = (radius - bezel).max(0.0);
        Self {
            width,
            height,
            radius,
            inner_sq: inner * inner,
            radius_sq: radius * radius,
            outer_sq: (radius + pad) * (radius + pad),
        }
    }

    /// Classify the pixel at `(x, y)`, relative to the object's top-left corner.
    pub(crate) fn classify(&self, x: f64, y: f64) -> Option<BezelHit> {
        let offset_x = corner_offset(x, self.width, self.radius);
        let offset_y = corner_offset(y, self.height, self.radius);
        let dist_sq = offset_x * offset_x + offset_y * offset_y;
        if dist_sq < self.inner_sq || dist_sq > self.outer_sq || dist_sq == 0.0 {
            return None;
        }

        let distance = dist_sq.sqrt();
        let opacity = if dist_sq < self.radius_sq {
            1.0
        } else {
            let r = self.radius_sq.sqrt();
            1.0 - (distance - r) / (self.outer_sq.sqrt() - r)
        };

        Some(BezelHit {
            offset_x,
            offset_y,
            distance,
            distance_from_side: self.radius - distance,
            opacity,
        })
    }
}

fn corner_offset(p: f64, extent: f64, radius: f64) -> f64 {
    if p < radius {
        p - radius
    } else if p >= extent - radius {
        p - (extent - radius)
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bezel.rs"]
mod tests;
