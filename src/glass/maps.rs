use crate::{
    foundation::{core::RasterBuffer, error::GlassResult},
    glass::params::GlassParams,
    raster::{rasterize_bezel_displacement, rasterize_magnification, rasterize_specular},
    refraction::{RefractionSamples, precompute_refraction},
};

/// The raster buffers consumed by the glass filter, plus the data they were derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct GlassMaps {
    /// 1-D refraction profile across the bezel.
    pub refraction: RefractionSamples,
    /// Largest absolute refraction sample; the displacement map is normalized by it.
    pub max_displacement: f64,
    /// Bezel displacement map, canvas-sized.
    pub displacement: RasterBuffer,
    /// Rim-light layer, object-sized.
    pub specular: RasterBuffer,
    /// Magnifying displacement map, canvas-sized; present when a magnifying scale is set.
    pub magnifying: Option<RasterBuffer>,
}

/// Validate `params` and run every stage: refraction, displacement, specular and (optionally)
/// magnification.
///
/// Pure: identical parameters give bit-identical maps. Callers that re-render on parameter
/// changes should memoize on their own key.
#[tracing::instrument(
    skip_all,
    fields(
        width = params.width,
        height = params.height,
        profile = %params.profile,
        dpr = params.device_pixel_ratio
    )
)]
pub fn generate_glass_maps(params: &GlassParams) -> GlassResult<GlassMaps> {
    params.validate()?;

    let refraction = precompute_refraction(&params.refraction());
    let max_displacement = refraction.max_abs();
    let shape = params.shape();
    let canvas = params.canvas();
    let dpr = params.device_pixel_ratio;

    let displacement =
        rasterize_bezel_displacement(canvas, &shape, max_displacement, &refraction, dpr);
    let specular = rasterize_specular(&shape, params.specular_angle, dpr);
    let magnifying = params
        .magnifying_scale
        .map(|_| rasterize_magnification(canvas, dpr));

    tracing::debug!(
        max_displacement,
        displacement_px = %format_args!("{}x{}", displacement.width, displacement.height),
        specular_px = %format_args!("{}x{}", specular.width, specular.height),
        magnifying = magnifying.is_some(),
        "glass maps generated"
    );

    Ok(GlassMaps {
        refraction,
        max_displacement,
        displacement,
        specular,
        magnifying,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/glass/maps.rs"]
mod tests;
