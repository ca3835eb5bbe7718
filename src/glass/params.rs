use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::Size,
        error::{GlassError, GlassResult},
        math::device_px,
    },
    profile::SurfaceProfile,
    raster::{BezelShape, DEFAULT_SPECULAR_ANGLE},
    refraction::{DEFAULT_SAMPLE_COUNT, RefractionParams},
};

/// Largest buffer side, in device pixels, accepted by [`GlassParams::validate`].
pub const MAX_BUFFER_SIDE: u32 = 16_384;

/// Device pixels per logical pixel when none is configured.
pub const DEFAULT_DEVICE_PIXEL_RATIO: f64 = 1.0;
/// Default [`FilterSettings::blur_std_deviation`].
pub const DEFAULT_BLUR_STD_DEVIATION: f64 = 0.2;
/// Default [`FilterSettings::scale_ratio`].
pub const DEFAULT_SCALE_RATIO: f64 = 1.0;
/// Default [`FilterSettings::specular_opacity`].
pub const DEFAULT_SPECULAR_OPACITY: f64 = 0.4;
/// Default [`FilterSettings::specular_saturation`].
pub const DEFAULT_SPECULAR_SATURATION: f64 = 4.0;

/// Everything needed to generate one set of glass maps.
///
/// Lengths are logical pixels. Optional fields fall back to the `DEFAULT_*` constants when
/// deserialized.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlassParams {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub bezel_width: f64,
    pub glass_thickness: f64,
    pub refractive_index: f64,
    #[serde(default)]
    pub profile: SurfaceProfile,
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    #[serde(default = "default_specular_angle")]
    pub specular_angle: f64,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
    /// Presence enables the magnification stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnifying_scale: Option<f64>,
    /// Filter region width; defaults to `width`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_width: Option<f64>,
    /// Filter region height; defaults to `height`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_height: Option<f64>,
    #[serde(default)]
    pub filter: FilterSettings,
}

/// Tuning of the filter chain that consumes the maps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Standard deviation of the blur applied before bezel displacement.
    pub blur_std_deviation: f64,
    /// Multiplier applied to the maximum displacement to get the displacement scale.
    pub scale_ratio: f64,
    /// Alpha slope of the faded specular layer.
    pub specular_opacity: f64,
    /// Saturation applied to the refracted content under the specular rim.
    pub specular_saturation: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            blur_std_deviation: DEFAULT_BLUR_STD_DEVIATION,
            scale_ratio: DEFAULT_SCALE_RATIO,
            specular_opacity: DEFAULT_SPECULAR_OPACITY,
            specular_saturation: DEFAULT_SPECULAR_SATURATION,
        }
    }
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_specular_angle() -> f64 {
    DEFAULT_SPECULAR_ANGLE
}

fn default_device_pixel_ratio() -> f64 {
    DEFAULT_DEVICE_PIXEL_RATIO
}

impl GlassParams {
    /// Parameters with every optional field at its default.
    pub fn new(
        width: f64,
        height: f64,
        corner_radius: f64,
        bezel_width: f64,
        glass_thickness: f64,
        refractive_index: f64,
    ) -> Self {
        Self {
            width,
            height,
            corner_radius,
            bezel_width,
            glass_thickness,
            refractive_index,
            profile: SurfaceProfile::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            specular_angle: DEFAULT_SPECULAR_ANGLE,
            device_pixel_ratio: DEFAULT_DEVICE_PIXEL_RATIO,
            magnifying_scale: None,
            canvas_width: None,
            canvas_height: None,
            filter: FilterSettings::default(),
        }
    }

    /// Glass object size.
    pub fn object(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Filter region size; the object size unless overridden.
    pub fn canvas(&self) -> Size {
        Size::new(
            self.canvas_width.unwrap_or(self.width),
            self.canvas_height.unwrap_or(self.height),
        )
    }

    /// Rounded-rectangle outline shared by the displacement and specular rasterizers.
    pub fn shape(&self) -> BezelShape {
        BezelShape {
            object: self.object(),
            corner_radius: self.corner_radius,
            bezel_width: self.bezel_width,
        }
    }

    /// Inputs of the refraction precompute.
    pub fn refraction(&self) -> RefractionParams {
        RefractionParams {
            thickness: self.glass_thickness,
            bezel_width: self.bezel_width,
            profile: self.profile,
            refractive_index: self.refractive_index,
            sample_count: self.sample_count,
        }
    }

    /// Reject values that cannot be rasterized at all.
    ///
    /// Geometrically odd but finite input (a bezel wider than the corner radius, a negative
    /// radius) is accepted and renders a degenerate band.
    pub fn validate(&self) -> GlassResult<()> {
        let finite = [
            ("width", self.width),
            ("height", self.height),
            ("corner_radius", self.corner_radius),
            ("bezel_width", self.bezel_width),
            ("glass_thickness", self.glass_thickness),
            ("refractive_index", self.refractive_index),
            ("specular_angle", self.specular_angle),
            ("device_pixel_ratio", self.device_pixel_ratio),
            ("filter.blur_std_deviation", self.filter.blur_std_deviation),
            ("filter.scale_ratio", self.filter.scale_ratio),
            ("filter.specular_opacity", self.filter.specular_opacity),
            ("filter.specular_saturation", self.filter.specular_saturation),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(GlassError::validation(format!("{name} must be finite")));
            }
        }
        if self.magnifying_scale.is_some_and(|s| !s.is_finite()) {
            return Err(GlassError::validation("magnifying_scale must be finite"));
        }

        if self.device_pixel_ratio <= 0.0 {
            return Err(GlassError::validation("device_pixel_ratio must be > 0"));
        }
        if self.refractive_index <= 0.0 {
            return Err(GlassError::validation("refractive_index must be > 0"));
        }
        if self.sample_count == 0 {
            return Err(GlassError::validation("sample_count must be > 0"));
        }
        if self.filter.blur_std_deviation < 0.0 {
            return Err(GlassError::validation(
                "filter.blur_std_deviation must be >= 0",
            ));
        }

        let canvas = self.canvas();
        for (name, size) in [("object", self.object()), ("canvas", canvas)] {
            if !(size.width > 0.0 && size.height > 0.0) {
                return Err(GlassError::validation(format!(
                    "{name} width and height must be > 0"
                )));
            }
            if !(size.width.is_finite() && size.height.is_finite()) {
                return Err(GlassError::validation(format!("{name} size must be finite")));
            }
            let w = device_px(size.width, self.device_pixel_ratio);
            let h = device_px(size.height, self.device_pixel_ratio);
            if w > MAX_BUFFER_SIDE || h > MAX_BUFFER_SIDE {
                return Err(GlassError::validation(format!(
                    "{name} buffer {w}x{h} exceeds {MAX_BUFFER_SIDE} px per side"
                )));
            }
        }

        Ok(())
    }

    /// Parse parameters from JSON text.
    pub fn from_json_str(s: &str) -> GlassResult<Self> {
        serde_json::from_str(s).map_err(|e| GlassError::serde(e.to_string()))
    }

    /// Read parameters from a JSON file.
    pub fn from_json_file(path: &Path) -> GlassResult<Self> {
        let f = File::open(path)
            .map_err(|e| GlassError::serde(format!("open '{}': {e}", path.display())))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| GlassError::serde(format!("parse '{}': {e}", path.display())))
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> GlassResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GlassError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glass/params.rs"]
mod tests;
