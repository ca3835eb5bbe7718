use super::*;

#[test]
fn center_pixel_is_neutral() {
    let buf = rasterize_magnification(Size::new(200.0, 100.0), 1.0);
    assert_eq!((buf.width, buf.height), (200, 100));
    assert_eq!(buf.pixel(100, 50), Some([128, 128, 0, 255]));
}

#[test]
fn longer_axis_edges_reach_channel_extremes() {
    let buf = rasterize_magnification(Size::new(200.0, 100.0), 1.0);
    // x = 0 -> nx = -1 -> R = 255; x = 199 -> nx = 0.99 -> R = 2.
    assert_eq!(buf.pixel(0, 50).unwrap()[0], 255);
    assert_eq!(buf.pixel(199, 50).unwrap()[0], 2);
    // The shorter axis only spans half the range.
    assert_eq!(buf.pixel(100, 0).unwrap()[1], 192);
}

#[test]
fn every_pixel_is_opaque_with_empty_blue() {
    let buf = rasterize_magnification(Size::new(37.0, 51.0), 2.0);
    assert_eq!((buf.width, buf.height), (74, 102));
    assert!(buf.pixels().all(|p| p[2] == 0 && p[3] == 255));
}

#[test]
fn displacement_points_towards_center() {
    let buf = rasterize_magnification(Size::new(64.0, 64.0), 1.0);
    let left = buf.pixel(10, 32).unwrap();
    let right = buf.pixel(54, 32).unwrap();
    assert!(left[0] > 128);
    assert!(right[0] < 128);
    let top = buf.pixel(32, 10).unwrap();
    assert!(top[1] > 128);
}

#[test]
fn empty_canvas_yields_empty_buffer() {
    let buf = rasterize_magnification(Size::new(0.0, 0.0), 1.0);
    assert!(buf.data.is_empty());
}
