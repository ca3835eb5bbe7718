//! 1-D Snell refraction across the bezel.

pub(crate) mod precompute;

pub use precompute::{
    DEFAULT_SAMPLE_COUNT, RefractionParams, RefractionSamples, precompute_refraction,
};
