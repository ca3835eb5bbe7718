use super::*;

fn base() -> GlassParams {
    GlassParams::new(200.0, 120.0, 40.0, 20.0, 60.0, 1.5)
}

#[test]
fn new_fills_defaults() {
    let p = base();
    assert_eq!(p.sample_count, 128);
    assert_eq!(p.specular_angle, std::f64::consts::FRAC_PI_3);
    assert_eq!(p.device_pixel_ratio, 1.0);
    assert_eq!(p.profile, SurfaceProfile::ConvexSquircle);
    assert_eq!(p.magnifying_scale, None);
    assert_eq!(p.filter, FilterSettings::default());
    assert!(p.validate().is_ok());
}

#[test]
fn canvas_defaults_to_object_size() {
    let mut p = base();
    assert_eq!(p.canvas(), Size::new(200.0, 120.0));
    p.canvas_width = Some(260.0);
    assert_eq!(p.canvas(), Size::new(260.0, 120.0));
}

#[test]
fn minimal_json_uses_defaults() {
    let p = GlassParams::from_json_str(
        r#"{
            "width": 200, "height": 120, "corner_radius": 40, "bezel_width": 20,
            "glass_thickness": 60, "refractive_index": 1.5
        }"#,
    )
    .unwrap();
    assert_eq!(p, base());
}

#[test]
fn json_roundtrip_preserves_optional_fields() {
    let mut p = base();
    p.profile = SurfaceProfile::Lip;
    p.magnifying_scale = Some(24.0);
    p.canvas_height = Some(150.0);
    p.filter.specular_opacity = 0.8;
    let json = p.to_json_string().unwrap();
    assert_eq!(GlassParams::from_json_str(&json).unwrap(), p);
}

#[test]
fn partial_filter_settings_fill_in_defaults() {
    let p = GlassParams::from_json_str(
        r#"{
            "width": 10, "height": 10, "corner_radius": 4, "bezel_width": 2,
            "glass_thickness": 5, "refractive_index": 1.5,
            "filter": { "scale_ratio": 2.0 }
        }"#,
    )
    .unwrap();
    assert_eq!(p.filter.scale_ratio, 2.0);
    assert_eq!(p.filter.blur_std_deviation, DEFAULT_BLUR_STD_DEVIATION);
}

#[test]
fn malformed_json_is_serde_error() {
    let err = GlassParams::from_json_str("{ \"width\": 1 }").unwrap_err();
    assert!(matches!(err, GlassError::Serde(_)));
}

#[test]
fn validate_rejects_unrenderable_values() {
    let cases: [fn(&mut GlassParams); 10] = [
        |p| p.width = 0.0,
        |p| p.height = f64::NAN,
        |p| p.device_pixel_ratio = 0.0,
        |p| p.refractive_index = 0.0,
        |p| p.sample_count = 0,
        |p| p.glass_thickness = f64::INFINITY,
        |p| p.magnifying_scale = Some(f64::NAN),
        |p| p.canvas_width = Some(-1.0),
        |p| p.filter.blur_std_deviation = -0.1,
        |p| p.width = 20_000.0,
    ];
    for (i, mutate) in cases.into_iter().enumerate() {
        let mut p = base();
        mutate(&mut p);
        assert!(
            matches!(p.validate(), Err(GlassError::Validation(_))),
            "case {i} should fail"
        );
    }
}

#[test]
fn validate_accepts_degenerate_geometry() {
    let mut p = base();
    p.bezel_width = 80.0;
    assert!(p.validate().is_ok());
    p.corner_radius = -3.0;
    assert!(p.validate().is_ok());
}

#[test]
fn pixel_ratio_counts_towards_buffer_limit() {
    let mut p = GlassParams::new(9000.0, 100.0, 10.0, 5.0, 10.0, 1.5);
    assert!(p.validate().is_ok());
    p.device_pixel_ratio = 2.0;
    assert!(p.validate().is_err());
}
