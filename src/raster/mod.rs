//! CPU rasterizers for the displacement, specular and magnification maps.
//!
//! Every rasterizer allocates its own [`RasterBuffer`](crate::RasterBuffer), fills it with the
//! map's neutral value and only touches pixels inside its active region.

pub(crate) mod bezel;
pub(crate) mod displacement;
pub(crate) mod magnify;
pub(crate) mod specular;

pub use bezel::BezelShape;
pub use displacement::{NEUTRAL_DISPLACEMENT, rasterize_bezel_displacement};
pub use magnify::rasterize_magnification;
pub use specular::{CLEAR_SPECULAR, DEFAULT_SPECULAR_ANGLE, rasterize_specular};
