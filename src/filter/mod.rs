//! Declarative filter chain consuming the generated maps.

pub(crate) mod encode;
pub(crate) mod graph;

pub use encode::{encode_png, png_data_url};
pub use graph::{
    ChannelSelector, FilterGraph, FilterInput, FilterPrimitive, MapKind, assemble_filter,
};
