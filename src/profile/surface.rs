use std::{fmt, str::FromStr};

use crate::foundation::{
    error::{GlassError, GlassResult},
    math::smootherstep,
};

/// Cross-section shape of the glass bezel.
///
/// A profile maps the normalized distance from the bezel's outer edge (`0.0`) to its inner edge
/// (`1.0`) onto a normalized surface height in `[0, 1]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceProfile {
    /// Quarter-circle arc.
    ConvexCircle,
    /// Quartic superellipse; meets the flat interior with a smoother tangent than the circle.
    #[default]
    ConvexSquircle,
    /// Vertical mirror of [`SurfaceProfile::ConvexCircle`].
    Concave,
    /// Raised rim falling into a shallow basin, blended with a quintic smoother-step.
    Lip,
}

impl SurfaceProfile {
    /// Every profile, in display order.
    pub const ALL: [SurfaceProfile; 4] = [
        SurfaceProfile::ConvexCircle,
        SurfaceProfile::ConvexSquircle,
        SurfaceProfile::Concave,
        SurfaceProfile::Lip,
    ];

    /// Profile evaluated at twice the speed for the outer half of a lip.
    pub const LIP_RIM: SurfaceProfile = SurfaceProfile::ConvexSquircle;
    /// Profile forming the inner basin of a lip.
    pub const LIP_BASIN: SurfaceProfile = SurfaceProfile::Concave;
    /// Height the lip basin is lifted by, so the interior does not touch the base plane.
    pub const LIP_BASIN_LIFT: f64 = 0.1;

    /// Surface height at normalized bezel position `x`.
    pub fn height(self, x: f64) -> f64 {
        match self {
            SurfaceProfile::ConvexCircle => convex_circle(x),
            SurfaceProfile::ConvexSquircle => (1.0 - (1.0 - x).powi(4)).powf(0.25),
            SurfaceProfile::Concave => 1.0 - convex_circle(x),
            SurfaceProfile::Lip => {
                let rim = Self::LIP_RIM.height(x * 2.0);
                let basin = Self::LIP_BASIN.height(x) + Self::LIP_BASIN_LIFT;
                let w = smootherstep(x);
                rim * (1.0 - w) + basin * w
            }
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            SurfaceProfile::ConvexCircle => "Convex Circle",
            SurfaceProfile::ConvexSquircle => "Convex Squircle",
            SurfaceProfile::Concave => "Concave",
            SurfaceProfile::Lip => "Lip",
        }
    }

    fn key(self) -> &'static str {
        match self {
            SurfaceProfile::ConvexCircle => "convex_circle",
            SurfaceProfile::ConvexSquircle => "convex_squircle",
            SurfaceProfile::Concave => "concave",
            SurfaceProfile::Lip => "lip",
        }
    }
}

fn convex_circle(x: f64) -> f64 {
    (1.0 - (1.0 - x).powi(2)).sqrt()
}

impl fmt::Display for SurfaceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SurfaceProfile {
    type Err = GlassError;

    fn from_str(s: &str) -> GlassResult<Self> {
        let kind = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match kind.as_str() {
            "convex_circle" | "circle" => Ok(SurfaceProfile::ConvexCircle),
            "convex_squircle" | "squircle" | "convex" => Ok(SurfaceProfile::ConvexSquircle),
            "concave" => Ok(SurfaceProfile::Concave),
            "lip" => Ok(SurfaceProfile::Lip),
            "" => Err(GlassError::validation("surface profile must be non-empty")),
            _ => Err(GlassError::validation(format!(
                "unknown surface profile '{}'",
                s.trim()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/surface.rs"]
mod tests;
