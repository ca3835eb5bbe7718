//! Bezel cross-section shapes.

pub(crate) mod surface;

pub use surface::SurfaceProfile;
