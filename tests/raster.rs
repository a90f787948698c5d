use deckmint::raster::{RasterError, rasterize_svg, svg_to_png};

const LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="32" viewBox="0 0 64 32">
    <rect width="32" height="32" fill="#F48024"/>
    <circle cx="48" cy="16" r="8" fill="#222426"/>
</svg>"##;

#[test]
fn svg_rendered_at_intrinsic_size() {
    let tmp = tempfile::tempdir().unwrap();
    let output = tmp.path().join("stack.png");

    svg_to_png(LOGO.as_bytes(), &output).unwrap();

    let img = image::open(&output).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (64, 32));
    assert_eq!(img.get_pixel(4, 4).0, [0xF4, 0x80, 0x24, 0xFF]);
    assert_eq!(img.get_pixel(48, 16).0, [0x22, 0x24, 0x26, 0xFF]);
    assert_eq!(img.get_pixel(63, 0)[3], 0);
}

#[test]
fn garbage_is_rejected() {
    let err = rasterize_svg(b"definitely not svg").unwrap_err();
    assert!(matches!(err, RasterError::Svg(_)));
}

#[cfg(feature = "fetch")]
#[test]
fn unreachable_host_is_a_network_error() {
    let tmp = tempfile::tempdir().unwrap();
    let output = tmp.path().join("stack.png");

    // Nothing listens on port 1 locally
    let err = deckmint::raster::convert_url_to_png("http://127.0.0.1:1/logo.svg", &output)
        .unwrap_err();
    assert!(matches!(err, RasterError::Http(_)));
    assert!(!output.exists());
}
