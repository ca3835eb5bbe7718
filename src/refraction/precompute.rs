use crate::{foundation::core::Vec2, profile::SurfaceProfile};

/// Number of bezel samples taken when the caller does not choose one.
pub const DEFAULT_SAMPLE_COUNT: usize = 128;

const DERIVATIVE_STEP: f64 = 1e-4;
// Refracted rays flatter than this never leave the bezel; treated like total internal reflection.
const GRAZING_EPSILON: f64 = 1e-9;

/// Physical inputs of the 1-D refraction pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RefractionParams {
    /// Thickness of the flat glass body, in logical pixels.
    pub thickness: f64,
    /// Width of the curved bezel, in logical pixels.
    pub bezel_width: f64,
    /// Bezel cross-section.
    pub profile: SurfaceProfile,
    /// Refractive index of the glass (air is 1.0).
    pub refractive_index: f64,
    /// Number of samples across the bezel.
    pub sample_count: usize,
}

/// Horizontal light displacement sampled across the bezel width.
///
/// Sample `i` corresponds to normalized bezel position `i / len`. A sample is exactly `0.0`
/// where no transmitted ray exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RefractionSamples {
    samples: Vec<f64>,
}

impl RefractionSamples {
    /// Wrap precomputed samples.
    pub fn from_vec(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// All samples in bezel order.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, or `0.0` when out of range.
    pub fn get(&self, index: usize) -> f64 {
        self.samples.get(index).copied().unwrap_or(0.0)
    }

    /// Largest absolute displacement; the normalizer for 8-bit channel encoding.
    pub fn max_abs(&self) -> f64 {
        self.samples.iter().fold(0.0, |acc, s| acc.max(s.abs()))
    }
}

/// Trace a straight-down ray through the bezel at `sample_count` evenly spaced positions and
/// record how far sideways it lands after crossing the glass.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(profile = %params.profile, samples = params.sample_count)
)]
pub fn precompute_refraction(params: &RefractionParams) -> RefractionSamples {
    let eta = 1.0 / params.refractive_index;
    let n = params.sample_count;

    let mut blocked = 0usize;
    let samples = (0..n)
        .map(|i| {
            let x = i as f64 / n as f64;
            let y = params.profile.height(x);
            let normal = surface_normal(params.profile, x, y);

            let Some(r) = refract_down(normal, eta) else {
                blocked += 1;
                return 0.0;
            };
            if r.y.abs() < GRAZING_EPSILON {
                blocked += 1;
                return 0.0;
            }

            let remaining = y * params.bezel_width + params.thickness;
            r.x * (remaining / r.y)
        })
        .collect::<Vec<_>>();

    tracing::debug!(blocked, "refraction samples computed");
    RefractionSamples::from_vec(samples)
}

fn surface_normal(profile: SurfaceProfile, x: f64, y: f64) -> Vec2 {
    let dx = if x < 1.0 {
        DERIVATIVE_STEP
    } else {
        -DERIVATIVE_STEP
    };
    let derivative = (profile.height(x + dx) - y) / dx;
    let magnitude = (derivative * derivative + 1.0).sqrt();
    Vec2::new(-derivative / magnitude, -1.0 / magnitude)
}

/// Snell refraction of the incident direction `(0, 1)`; `None` on total internal reflection.
fn refract_down(normal: Vec2, eta: f64) -> Option<Vec2> {
    let dot = normal.y;
    let k = 1.0 - eta * eta * (1.0 - dot * dot);
    if k < 0.0 {
        return None;
    }
    let t = eta * dot + k.sqrt();
    Some(Vec2::new(-t * normal.x, eta - t * normal.y))
}

#[cfg(test)]
#[path = "../../tests/unit/refraction/precompute.rs"]
mod tests;
