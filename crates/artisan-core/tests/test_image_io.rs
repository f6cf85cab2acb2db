mod common;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use artisan_core::error::ArtisanError;
use artisan_core::io::image_io::{decode_image, encode_png, load_image, save_image};
use artisan_core::io::payload::{decode_base64, strip_data_uri, to_base64, to_data_uri};
use artisan_core::source::ImageSource;

use common::{gradient_image, png_bytes};

#[test]
fn test_png_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.png");
    let source = gradient_image(17, 9);

    save_image(source.pixels(), &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(&loaded, source.pixels());
}

#[test]
fn test_jpeg_save_drops_alpha_but_keeps_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.jpg");
    let image = RgbaImage::from_pixel(12, 8, Rgba([100, 150, 200, 128]));

    save_image(&image, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.dimensions(), (12, 8));
    assert_eq!(loaded.get_pixel(0, 0).0[3], 255);
}

#[test]
fn test_decode_garbage_is_error() {
    assert!(matches!(
        decode_image(b"definitely not an image"),
        Err(ArtisanError::Decode(_))
    ));
}

#[test]
fn test_source_from_bytes_records_format() {
    let png = png_bytes(&gradient_image(4, 4));
    let source = ImageSource::from_bytes(&png).unwrap();
    assert_eq!(source.format(), Some(image::ImageFormat::Png));
    assert_eq!(source.mime_type(), "image/png");
    assert_eq!((source.natural_width(), source.natural_height()), (4, 4));
}

#[test]
fn test_source_from_data_uri() {
    let png = encode_png(gradient_image(5, 3).pixels()).unwrap();
    let uri = to_data_uri("image/png", &png);
    assert!(uri.starts_with("data:image/png;base64,"));

    let source = ImageSource::from_base64(&uri).unwrap();
    assert_eq!((source.natural_width(), source.natural_height()), (5, 3));
}

#[test]
fn test_open_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.png");
    std::fs::write(&path, png_bytes(&gradient_image(3, 7))).unwrap();

    let source = ImageSource::open(&path).unwrap();
    assert_eq!(source.natural_height(), 7);
    assert!(ImageSource::open(&dir.path().join("missing.png")).is_err());
}

#[test]
fn test_zero_area_source_is_rejected() {
    assert!(matches!(
        ImageSource::from_rgba(RgbaImage::new(0, 10)),
        Err(ArtisanError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_payload_prefix_handling() {
    let bytes = b"\x89PNG raw bytes";
    let bare = to_base64(bytes);
    assert_eq!(strip_data_uri(&bare), bare);
    assert_eq!(decode_base64(&bare).unwrap(), bytes);
    assert_eq!(decode_base64(&to_data_uri("image/png", bytes)).unwrap(), bytes);
}

#[test]
fn test_invalid_base64_is_decode_error() {
    assert!(matches!(
        decode_base64("@@not base64@@"),
        Err(ArtisanError::Decode(_))
    ));
}
