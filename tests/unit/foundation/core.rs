use super::*;

#[test]
fn filled_buffer_has_uniform_pixels() {
    let buf = RasterBuffer::filled(3, 2, [128, 128, 0, 255]);
    assert_eq!(buf.data.len(), 3 * 2 * 4);
    assert!(buf.pixels().all(|p| p == [128, 128, 0, 255]));
}

#[test]
fn pixel_access_is_bounds_checked() {
    let mut buf = RasterBuffer::filled(2, 2, [0, 0, 0, 0]);
    buf.put(1, 0, [1, 2, 3, 4]);
    buf.put(2, 0, [9, 9, 9, 9]);
    assert_eq!(buf.pixel(1, 0), Some([1, 2, 3, 4]));
    assert_eq!(buf.pixel(0, 1), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(2, 0), None);
    assert_eq!(buf.pixel(0, 2), None);
}

#[test]
fn zero_sized_buffer_is_empty() {
    let buf = RasterBuffer::filled(0, 5, [1, 1, 1, 1]);
    assert!(buf.data.is_empty());
    assert_eq!(buf.pixel(0, 0), None);
}
