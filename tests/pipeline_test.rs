//! End-to-end pipeline tests: raw image bytes in, artifact out.

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};
use pretty_assertions::assert_eq;

use inkframe::bitmap::{self, HEADER_LEN};
use inkframe::fingerprint::from_base64;
use inkframe::{convert, Converter};

/// Encode an in-memory grayscale PNG to feed the decoder.
fn gray_png(width: u32, height: u32, value: u8) -> Vec<u8> {
    let img = GrayImage::from_pixel(width, height, Luma([value]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

/// A gradient PNG so dithering produces a mix of both levels.
fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) * 255 / (width + height).max(2)) as u8;
            img.put_pixel(x, y, Luma([v]));
        }
    }
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn repeated_conversions_are_byte_identical() {
    let data = gradient_png(40, 30);

    let first = convert(&data, 40, 30).unwrap();
    let second = convert(&data, 40, 30).unwrap();

    assert_eq!(first.bytes, second.bytes);
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(first.base64, second.base64);
}

#[test]
fn encoded_size_matches_invariant() {
    for (width, height) in [(1u32, 1u32), (7, 3), (8, 8), (9, 2), (10, 5), (16, 4), (17, 6)] {
        let data = gradient_png(width, height);
        let artifact = convert(&data, width, height).unwrap();

        let row_size = bitmap::padded_row_size(width as usize);
        assert_eq!(
            artifact.bytes.len(),
            HEADER_LEN + height as usize * row_size,
            "size invariant failed for {}x{}",
            width,
            height
        );
        assert_eq!(row_size % 4, 0);
    }
}

#[test]
fn header_round_trips_target_dimensions() {
    let artifact = convert(&gradient_png(33, 21), 33, 21).unwrap();
    let info = bitmap::read_info(&artifact.bytes).unwrap();

    assert_eq!(info.width, 33);
    assert_eq!(info.height, 21, "height reads back as the absolute value");
    assert!(info.top_down, "height is stored negative (top-down rows)");
}

#[test]
fn dithered_output_is_strictly_monochrome() {
    let artifact = convert(&gradient_png(20, 20), 20, 20).unwrap();
    let (_, luma) = bitmap::unpack(&artifact.bytes).unwrap();

    assert!(
        luma.iter().all(|&p| p == 0 || p == 255),
        "every decoded pixel must be exactly 0 or 255"
    );
}

#[test]
fn base64_round_trips_exactly() {
    let artifact = convert(&gradient_png(25, 10), 25, 10).unwrap();
    assert_eq!(from_base64(&artifact.base64).unwrap(), artifact.bytes);
}

#[test]
fn resized_conversion_hits_target_size() {
    // 100x80 source squeezed into a 40x30 frame
    let artifact = convert(&gradient_png(100, 80), 40, 30).unwrap();
    let info = bitmap::read_info(&artifact.bytes).unwrap();

    assert_eq!((info.width, info.height), (40, 30));
}

#[test]
fn converter_reuse_matches_one_shot() {
    let data = gradient_png(16, 16);
    let converter = Converter::new(16, 16);

    let reused = converter.convert(&data).unwrap();
    let one_shot = convert(&data, 16, 16).unwrap();
    assert_eq!(reused.bytes, one_shot.bytes);
}

#[test]
fn preview_matches_frame_dimensions() {
    let artifact = convert(&gray_png(12, 9, 127), 12, 9).unwrap();
    let png_bytes = inkframe::preview_png(&artifact.bytes).unwrap();

    let decoded = image::load_from_memory(&png_bytes).unwrap().to_luma8();
    assert_eq!(decoded.dimensions(), (12, 9));

    // Preview carries only the two output levels
    assert!(decoded.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}
