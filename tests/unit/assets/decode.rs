use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let prepared = decode_image(&png_bytes(1, 1, [100, 50, 200, 128])).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_an_error() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn svg_parse_ok_and_err() {
    let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
    parse_svg(ok).unwrap();
    assert!(parse_svg(br#"<svg"#).is_err());
}

#[test]
fn svg_rasterizes_to_longest_edge() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
        <rect width="20" height="10" fill="#000"/>
    </svg>"##;
    let img = decode_motif_source(svg, 64).unwrap();
    assert_eq!((img.width, img.height), (64, 32));
    let center = ((16 * 64 + 32) * 4) as usize;
    assert_eq!(img.rgba8_premul[center + 3], 255);
}

#[test]
fn motif_source_falls_back_to_raster() {
    let img = decode_motif_source(&png_bytes(3, 2, [0, 0, 0, 255]), 64).unwrap();
    assert_eq!((img.width, img.height), (3, 2));
}
