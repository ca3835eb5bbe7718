use super::*;
use crate::foundation::core::Size;

fn shape() -> BezelShape {
    BezelShape {
        object: Size::new(200.0, 200.0),
        corner_radius: 50.0,
        bezel_width: 25.0,
    }
}

#[test]
fn buffer_covers_object_only() {
    let s = BezelShape {
        object: Size::new(80.0, 30.0),
        corner_radius: 10.0,
        bezel_width: 5.0,
    };
    let buf = rasterize_specular(&s, DEFAULT_SPECULAR_ANGLE, 2.0);
    assert_eq!((buf.width, buf.height), (160, 60));
}

#[test]
fn left_rim_is_lit_by_horizontal_component() {
    let buf = rasterize_specular(&shape(), DEFAULT_SPECULAR_ANGLE, 1.0);
    // Offset (-49, 0) is one device pixel inside the outline, so the falloff peaks at 1.
    // dot = cos(pi/3) = 0.5 -> intensity 127.5, alpha 63.75.
    assert_eq!(buf.pixel(1, 100), Some([128, 128, 128, 64]));
}

#[test]
fn top_rim_is_lit_by_vertical_component() {
    let buf = rasterize_specular(&shape(), DEFAULT_SPECULAR_ANGLE, 1.0);
    // dot = sin(pi/3) ~ 0.866 -> intensity ~220.8, alpha ~191.2.
    assert_eq!(buf.pixel(100, 1), Some([221, 221, 221, 191]));
}

#[test]
fn highlight_is_confined_near_outline() {
    let buf = rasterize_specular(&shape(), DEFAULT_SPECULAR_ANGLE, 1.0);
    // Two or more device pixels in, the falloff is zero.
    for x in 2..=25u32 {
        assert_eq!(buf.pixel(x, 100), Some(CLEAR_SPECULAR), "x = {x}");
    }
}

#[test]
fn alpha_is_zero_outside_band() {
    let buf = rasterize_specular(&shape(), 0.7, 1.0);
    let band = BezelBand::new(200.0, 200.0, 50.0, 25.0, 1.0);
    for y in 0..200u32 {
        for x in 0..200u32 {
            if band.classify(f64::from(x), f64::from(y)).is_none() {
                assert_eq!(buf.pixel(x, y).unwrap()[3], 0, "({x}, {y})");
            }
        }
    }
}

#[test]
fn corner_pad_pixel_stays_clear() {
    let buf = rasterize_specular(&shape(), DEFAULT_SPECULAR_ANGLE, 1.0);
    // Offset (-36, -35) lies in the anti-alias pad, where the rim falloff is zero.
    let hit = BezelBand::new(200.0, 200.0, 50.0, 25.0, 1.0)
        .classify(14.0, 15.0)
        .unwrap();
    assert!(hit.opacity > 0.0);
    assert_eq!(buf.pixel(14, 15), Some(CLEAR_SPECULAR));
}

#[test]
fn light_perpendicular_to_edge_leaves_it_dark() {
    // Light straight along x: the top edge faces it edge-on.
    let buf = rasterize_specular(&shape(), 0.0, 1.0);
    assert_eq!(buf.pixel(100, 1), Some(CLEAR_SPECULAR));
    assert_eq!(buf.pixel(1, 100), Some([255, 255, 255, 255]));
}

#[test]
fn rim_falloff_profile() {
    assert_eq!(rim_falloff(0.0), 0.0);
    assert_eq!(rim_falloff(1.0), 1.0);
    assert_eq!(rim_falloff(2.0), 0.0);
    assert_eq!(rim_falloff(3.5), 0.0);
    assert_eq!(rim_falloff(-0.5), 0.0);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = rasterize_specular(&shape(), 1.1, 2.0);
    let b = rasterize_specular(&shape(), 1.1, 2.0);
    assert_eq!(a, b);
}
