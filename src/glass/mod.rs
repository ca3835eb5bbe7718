//! Parameters and the one-shot map generation pipeline.

pub(crate) mod maps;
pub(crate) mod params;

pub use maps::{GlassMaps, generate_glass_maps};
pub use params::{
    DEFAULT_BLUR_STD_DEVIATION, DEFAULT_DEVICE_PIXEL_RATIO, DEFAULT_SCALE_RATIO,
    DEFAULT_SPECULAR_OPACITY, DEFAULT_SPECULAR_SATURATION, FilterSettings, GlassParams,
    MAX_BUFFER_SIDE,
};
