use std::fmt;

use crate::{
    foundation::math::device_px,
    glass::{GlassMaps, GlassParams},
};

/// Which generated map an image primitive loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapKind {
    /// [`GlassMaps::displacement`], canvas sized.
    Displacement,
    /// [`GlassMaps::specular`], object sized.
    Specular,
    /// [`GlassMaps::magnifying`], canvas sized.
    Magnifying,
}

/// Color channel a displacement primitive reads offsets from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelSelector {
    /// Red; carries the x offset in every generated map.
    R,
    /// Green; carries the y offset.
    G,
}

impl fmt::Display for ChannelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChannelSelector::R => "R",
            ChannelSelector::G => "G",
        })
    }
}

/// Input of a filter primitive: the filtered element, or an earlier primitive's result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterInput {
    /// The element the filter is applied to.
    SourceGraphic,
    /// Output of the primitive with this `result` name.
    Result(&'static str),
}

impl fmt::Display for FilterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterInput::SourceGraphic => f.write_str("SourceGraphic"),
            FilterInput::Result(name) => f.write_str(name),
        }
    }
}

/// One step of the glass filter chain.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterPrimitive {
    /// Load a generated map, placed in logical pixels within the filter region.
    Image {
        map: MapKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        result: &'static str,
    },
    DisplacementMap {
        input: FilterInput,
        map: FilterInput,
        scale: f64,
        x_channel: ChannelSelector,
        y_channel: ChannelSelector,
        result: &'static str,
    },
    GaussianBlur {
        input: FilterInput,
        std_deviation: f64,
        result: &'static str,
    },
    Saturate {
        input: FilterInput,
        value: f64,
        result: &'static str,
    },
    /// Porter-Duff `in`: `input` where `mask` has coverage.
    CompositeIn {
        input: FilterInput,
        mask: FilterInput,
        result: &'static str,
    },
    /// Scale alpha linearly by `slope`.
    AlphaSlope {
        input: FilterInput,
        slope: f64,
        result: &'static str,
    },
    /// Normal blend of `top` over `bottom`.
    Blend {
        top: FilterInput,
        bottom: FilterInput,
        result: Option<&'static str>,
    },
}

/// Ordered filter chain; the last primitive's output is the filter output.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterGraph {
    /// Primitives in evaluation order.
    pub primitives: Vec<FilterPrimitive>,
}

impl FilterGraph {
    /// Maps referenced by image primitives, in chain order.
    pub fn referenced_maps(&self) -> Vec<MapKind> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                FilterPrimitive::Image { map, .. } => Some(*map),
                _ => None,
            })
            .collect()
    }
}

/// Wire the generated maps into the fixed glass chain:
/// magnify (optional), blur, bezel displacement, saturation, specular compositing.
pub fn assemble_filter(maps: &GlassMaps, params: &GlassParams) -> FilterGraph {
    let canvas = params.canvas();
    let object = params.object();
    let dpr = params.device_pixel_ratio;
    // Same whole-device-pixel offset the displacement rasterizer centers the object at.
    let origin = |region: f64, extent: f64| {
        ((f64::from(device_px(region, dpr)) - extent * dpr) / 2.0).floor() / dpr
    };
    let settings = &params.filter;
    let mut primitives = Vec::with_capacity(11);

    let blur_input = match (params.magnifying_scale, &maps.magnifying) {
        (Some(scale), Some(_)) => {
            primitives.push(FilterPrimitive::Image {
                map: MapKind::Magnifying,
                x: 0.0,
                y: 0.0,
                width: canvas.width,
                height: canvas.height,
                result: "magnifying_displacement_map",
            });
            primitives.push(FilterPrimitive::DisplacementMap {
                input: FilterInput::SourceGraphic,
                map: FilterInput::Result("magnifying_displacement_map"),
                scale,
                x_channel: ChannelSelector::R,
                y_channel: ChannelSelector::G,
                result: "magnified_source",
            });
            FilterInput::Result("magnified_source")
        }
        _ => FilterInput::SourceGraphic,
    };

    primitives.push(FilterPrimitive::GaussianBlur {
        input: blur_input,
        std_deviation: settings.blur_std_deviation,
        result: "blurred_source",
    });
    primitives.push(FilterPrimitive::Image {
        map: MapKind::Displacement,
        x: 0.0,
        y: 0.0,
        width: canvas.width,
        height: canvas.height,
        result: "displacement_map",
    });
    primitives.push(FilterPrimitive::DisplacementMap {
        input: FilterInput::Result("blurred_source"),
        map: FilterInput::Result("displacement_map"),
        scale: maps.max_displacement * settings.scale_ratio,
        x_channel: ChannelSelector::R,
        y_channel: ChannelSelector::G,
        result: "displaced",
    });
    primitives.push(FilterPrimitive::Saturate {
        input: FilterInput::Result("displaced"),
        value: settings.specular_saturation,
        result: "displaced_saturated",
    });
    primitives.push(FilterPrimitive::Image {
        map: MapKind::Specular,
        x: origin(canvas.width, object.width),
        y: origin(canvas.height, object.height),
        width: object.width,
        height: object.height,
        result: "specular_layer",
    });
    primitives.push(FilterPrimitive::CompositeIn {
        input: FilterInput::Result("displaced_saturated"),
        mask: FilterInput::Result("specular_layer"),
        result: "specular_saturated",
    });
    primitives.push(FilterPrimitive::AlphaSlope {
        input: FilterInput::Result("specular_layer"),
        slope: settings.specular_opacity,
        result: "specular_faded",
    });
    primitives.push(FilterPrimitive::Blend {
        top: FilterInput::Result("specular_saturated"),
        bottom: FilterInput::Result("displaced"),
        result: Some("with_saturation"),
    });
    primitives.push(FilterPrimitive::Blend {
        top: FilterInput::Result("specular_faded"),
        bottom: FilterInput::Result("with_saturation"),
        result: None,
    });

    FilterGraph { primitives }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/graph.rs"]
mod tests;
