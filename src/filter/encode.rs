use std::fmt::{self, Write as _};

use base64::Engine as _;
use image::ImageEncoder as _;

use crate::{
    filter::graph::{FilterGraph, FilterPrimitive, MapKind},
    foundation::{
        core::RasterBuffer,
        error::{GlassError, GlassResult},
    },
    glass::GlassMaps,
};

/// Encode a raster buffer as PNG bytes (RGBA8, straight alpha).
pub fn encode_png(buf: &RasterBuffer) -> GlassResult<Vec<u8>> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &buf.data,
            buf.width,
            buf.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| GlassError::encode(format!("png encode: {e}")))?;
    Ok(out)
}

/// `data:image/png;base64,...` URL of a raster buffer.
pub fn png_data_url(buf: &RasterBuffer) -> GlassResult<String> {
    let png = encode_png(buf)?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(png);
    Ok(format!("data:image/png;base64,{b64}"))
}

impl FilterGraph {
    /// Render the chain as an SVG `<filter>` element with the maps inlined as data URLs.
    pub fn to_svg(&self, maps: &GlassMaps, id: &str) -> GlassResult<String> {
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(GlassError::validation(format!(
                "filter id '{id}' must be non-empty and use only [A-Za-z0-9_-]"
            )));
        }

        let hrefs = self
            .referenced_maps()
            .into_iter()
            .map(|map| png_data_url(map_buffer(maps, map)?))
            .collect::<GlassResult<Vec<_>>>()?;

        let mut s = String::new();
        self.write_markup(id, &hrefs, &mut s)
            .map_err(|e| GlassError::encode(format!("svg markup: {e}")))?;
        Ok(s)
    }

    /// `hrefs` holds one data URL per image primitive, in chain order.
    fn write_markup(&self, id: &str, hrefs: &[String], s: &mut String) -> fmt::Result {
        writeln!(
            s,
            r#"<filter id="{id}" x="0%" y="0%" width="100%" height="100%" color-interpolation-filters="sRGB">"#
        )?;

        let mut hrefs = hrefs.iter();
        for prim in &self.primitives {
            match prim {
                FilterPrimitive::Image {
                    x,
                    y,
                    width,
                    height,
                    result,
                    ..
                } => {
                    let href = hrefs.next().ok_or(fmt::Error)?;
                    writeln!(
                        s,
                        r#"  <feImage href="{href}" x="{x}" y="{y}" width="{width}" height="{height}" result="{result}"/>"#
                    )?;
                }
                FilterPrimitive::DisplacementMap {
                    input,
                    map,
                    scale,
                    x_channel,
                    y_channel,
                    result,
                } => {
                    writeln!(
                        s,
                        r#"  <feDisplacementMap in="{input}" in2="{map}" scale="{scale}" xChannelSelector="{x_channel}" yChannelSelector="{y_channel}" result="{result}"/>"#
                    )?;
                }
                FilterPrimitive::GaussianBlur {
                    input,
                    std_deviation,
                    result,
                } => {
                    writeln!(
                        s,
                        r#"  <feGaussianBlur in="{input}" stdDeviation="{std_deviation}" result="{result}"/>"#
                    )?;
                }
                FilterPrimitive::Saturate {
                    input,
                    value,
                    result,
                } => {
                    writeln!(
                        s,
                        r#"  <feColorMatrix in="{input}" type="saturate" values="{value}" result="{result}"/>"#
                    )?;
                }
                FilterPrimitive::CompositeIn {
                    input,
                    mask,
                    result,
                } => {
                    writeln!(
                        s,
                        r#"  <feComposite in="{input}" in2="{mask}" operator="in" result="{result}"/>"#
                    )?;
                }
                FilterPrimitive::AlphaSlope {
                    input,
                    slope,
                    result,
                } => {
                    writeln!(
                        s,
                        r#"  <feComponentTransfer in="{input}" result="{result}">"#
                    )?;
                    writeln!(s, r#"    <feFuncA type="linear" slope="{slope}"/>"#)?;
                    writeln!(s, "  </feComponentTransfer>")?;
                }
                FilterPrimitive::Blend {
                    top,
                    bottom,
                    result,
                } => {
                    write!(s, r#"  <feBlend in="{top}" in2="{bottom}" mode="normal""#)?;
                    if let Some(result) = result {
                        write!(s, r#" result="{result}""#)?;
                    }
                    writeln!(s, "/>")?;
                }
            }
        }

        writeln!(s, "</filter>")
    }
}

fn map_buffer(maps: &GlassMaps, kind: MapKind) -> GlassResult<&RasterBuffer> {
    match kind {
        MapKind::Displacement => Ok(&maps.displacement),
        MapKind::Specular => Ok(&maps.specular),
        MapKind::Magnifying => maps.magnifying.as_ref().ok_or_else(|| {
            GlassError::validation("filter references the magnifying map but none was generated")
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/encode.rs"]
mod tests;
