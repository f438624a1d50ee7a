use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="6">
<rect width="10" height="6" fill="#ffffff"/>
<rect x="0" y="0" width="5" height="6" fill="#ff0000"/>
<rect x="5" y="0" width="5" height="6" fill="#0000ff" fill-opacity="0.5"/>
</svg>"##;

#[test]
fn rasterizes_at_scale() {
    let frame = rasterize_svg(SQUARE, 2.0).unwrap();
    assert_eq!((frame.width, frame.height), (20, 12));
    assert_eq!(frame.data.len(), 20 * 12 * 4);
    assert_eq!(frame.pixel(2, 2), Some([255, 0, 0, 255]));

    // Half-transparent blue over opaque white.
    let [r, g, b, a] = frame.pixel(17, 6).unwrap();
    assert_eq!(a, 255);
    assert!(b > 250 && (120..=135).contains(&r) && (120..=135).contains(&g));
    assert_eq!(frame.pixel(20, 0), None);
}

#[test]
fn rejects_bad_scale_and_markup() {
    assert!(matches!(rasterize_svg(SQUARE, 0.0), Err(SwatchError::Validation(_))));
    assert!(matches!(rasterize_svg(SQUARE, f64::NAN), Err(SwatchError::Validation(_))));
    assert!(rasterize_svg("<svg", 1.0).is_err());
    assert!(matches!(rasterize_svg(SQUARE, 5000.0), Err(SwatchError::Render(_))));
}

#[test]
fn png_round_trips_through_image() {
    let dir = std::path::PathBuf::from("target").join("unit_raster");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("square.png");

    let frame = rasterize_svg(SQUARE, 1.0).unwrap();
    write_png(&frame, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (10, 6));
    assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
}
