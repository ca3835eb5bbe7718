//! Liquid-glass map generation.
//!
//! This crate computes the raster inputs of a "liquid glass" SVG filter: a glass object with a
//! curved bezel that refracts, highlights and optionally magnifies what lies behind it.
//!
//! # Pipeline overview
//!
//! 1. **Profile**: a [`SurfaceProfile`] gives the bezel height across its width.
//! 2. **Refract**: [`precompute_refraction`] traces straight-down rays through that surface with
//!    Snell's law, producing [`RefractionSamples`].
//! 3. **Rasterize**: [`rasterize_bezel_displacement`] spreads the samples around a rounded
//!    rectangle; [`rasterize_specular`] and [`rasterize_magnification`] build the rim light and
//!    lens maps independently.
//! 4. **Assemble** (optional): [`assemble_filter`] wires the maps into an SVG filter chain,
//!    which [`FilterGraph::to_svg`] renders with PNG data URLs.
//!
//! [`generate_glass_maps`] runs steps 1-3 from a single [`GlassParams`].
//!
//! Constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: every stage is a deterministic function of its inputs; nothing is cached.
//! - **Degenerate, not fatal**: odd geometry renders an imperfect map instead of failing.
//!   Only parameter validation and encoding return errors.
#![forbid(unsafe_code)]

mod filter;
mod foundation;
mod glass;
mod profile;
mod raster;
mod refraction;

pub use filter::{
    ChannelSelector, FilterGraph, FilterInput, FilterPrimitive, MapKind, assemble_filter,
    encode_png, png_data_url,
};
pub use foundation::core::{RasterBuffer, Rgba8, Size, Vec2};
pub use foundation::error::{GlassError, GlassResult};
pub use glass::{
    DEFAULT_BLUR_STD_DEVIATION, DEFAULT_DEVICE_PIXEL_RATIO, DEFAULT_SCALE_RATIO,
    DEFAULT_SPECULAR_OPACITY, DEFAULT_SPECULAR_SATURATION, FilterSettings, GlassMaps, GlassParams,
    MAX_BUFFER_SIDE, generate_glass_maps,
};
pub use profile::SurfaceProfile;
pub use raster::{
    BezelShape, CLEAR_SPECULAR, DEFAULT_SPECULAR_ANGLE, NEUTRAL_DISPLACEMENT,
    rasterize_bezel_displacement, rasterize_magnification, rasterize_specular,
};
pub use refraction::{
    DEFAULT_SAMPLE_COUNT, RefractionParams, RefractionSamples, precompute_refraction,
};
