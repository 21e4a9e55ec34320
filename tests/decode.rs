//! End-to-end decode tests, built against hand-assembled PNG fixtures
//! (see `common`) since no external encoder is available here.

mod common;

use pngstream::sink::RowCollector;
use pngstream::{decode, info, ImageInfo};

fn collect(bytes: &[u8], scale: u8) -> Vec<Vec<u16>> {
    let mut rows = RowCollector::default();
    decode(bytes, scale, &mut rows).expect("decode should succeed");
    rows.rows
}

// S1: 1x1 RGB pixel (255, 128, 0), filter None.
#[test]
fn scenario_s1_single_rgb_pixel() {
    let scanlines = common::scanline(0, &[255, 128, 0]);
    let png = common::build_png(1, 1, 8, 2, None, &scanlines, 1);

    let rows = collect(&png, 1);
    assert_eq!(rows, vec![vec![0xFC00]]);
}

// S2: 2x2 grayscale, rows `00 80` / `FF FF`, filter None.
#[test]
fn scenario_s2_grayscale_rows() {
    let scanlines = common::concat_scanlines(&[common::scanline(0, &[0x00, 0x80]), common::scanline(0, &[0xFF, 0xFF])]);
    let png = common::build_png(2, 2, 8, 0, None, &scanlines, 1);

    let rows = collect(&png, 1);
    assert_eq!(rows, vec![vec![0x0000, 0x8410], vec![0xFFFF, 0xFFFF]]);
}

// S3: 4x4 indexed image, scale=2 box-filter downscale.
#[test]
fn scenario_s3_indexed_downscale() {
    let palette = [[0, 0, 0], [255, 0, 0], [0, 255, 0], [0, 0, 255]];
    let scanlines = common::concat_scanlines(&[
        common::scanline(0, &[0, 1, 2, 3]),
        common::scanline(0, &[1, 2, 3, 0]),
        common::scanline(0, &[2, 3, 0, 1]),
        common::scanline(0, &[3, 0, 1, 2]),
    ]);
    let png = common::build_png(4, 4, 8, 3, Some(&palette), &scanlines, 1);

    let rows = collect(&png, 2);
    assert_eq!(rows, vec![vec![0x79E0, 0x01EF], vec![0x01EF, 0x79E0]]);
}

// S4: 2x2 opaque-red RGBA, filter Sub on row 0, Up on row 1.
#[test]
fn scenario_s4_rgba_sub_then_up_filter() {
    let scanlines = common::concat_scanlines(&[
        common::scanline(1, &[255, 0, 0, 255, 0, 0, 0, 0]),
        common::scanline(2, &[0, 0, 0, 0, 0, 0, 0, 0]),
    ]);
    let png = common::build_png(2, 2, 8, 6, None, &scanlines, 1);

    let rows = collect(&png, 1);
    assert_eq!(rows, vec![vec![0xF800, 0xF800], vec![0xF800, 0xF800]]);
}

// S5: interlaced IHDR — info succeeds, decode fails.
#[test]
fn scenario_s5_interlaced_rejected_by_decode_only() {
    let mut png = common::build_png(1, 1, 8, 2, None, &common::scanline(0, &[1, 2, 3]), 1);
    // IHDR's interlace byte is the last of the 13 IHDR payload bytes,
    // which sit right after the 8-byte signature and 8-byte chunk
    // length+type prefix.
    let interlace_byte_offset = 8 + 8 + 12;
    png[interlace_byte_offset] = 1;

    assert_eq!(info(&png).unwrap(), ImageInfo { width: 1, height: 1 });

    let mut rows = RowCollector::default();
    assert!(decode(&png, 1, &mut rows).is_err());
}

// S6 / property 9: splitting the compressed stream across IDAT chunks
// must not change the decoded output.
#[test]
fn scenario_s6_split_idat_matches_single_idat() {
    let scanlines = common::concat_scanlines(&[
        common::scanline(0, &[10, 20, 30]),
        common::scanline(2, &[5, 5, 5]),
    ]);
    let whole = common::build_png(1, 2, 8, 2, None, &scanlines, 1);
    let split = common::build_png(1, 2, 8, 2, None, &scanlines, 3);

    assert_eq!(collect(&whole, 1), collect(&split, 1));
}

// Property 1: anything not starting with the PNG signature is rejected by
// both entry points.
#[test]
fn property_signature_gate() {
    let not_a_png = b"definitely not a png file at all";
    assert!(info(not_a_png).is_err());

    let mut rows = RowCollector::default();
    assert!(decode(not_a_png, 1, &mut rows).is_err());
}

// Property 2: info reports exactly the IHDR-declared dimensions.
#[test]
fn property_dimension_consistency() {
    let scanlines = common::scanline(0, &[9, 9, 9]);
    let png = common::build_png(1, 1, 8, 2, None, &scanlines, 1);
    let dims = info(&png).unwrap();
    assert_eq!((dims.width, dims.height), (1, 1));
}

// Property 3/4: row count and row width at every supported scale.
#[test]
fn property_row_count_and_width_at_every_scale() {
    let width = 4u32;
    let height = 4u32;
    let rows: Vec<Vec<u8>> = (0..height).map(|_| (0..width).map(|_| 0x40u8).collect()).collect();
    let scanlines = common::concat_scanlines(&rows.iter().map(|r| common::scanline(0, r)).collect::<Vec<_>>());
    let png = common::build_png(width, height, 8, 0, None, &scanlines, 1);

    for &scale in &[1u8, 2, 4] {
        let decoded = collect(&png, scale);
        let expected_rows = (height / u32::from(scale)) as usize;
        let expected_width = (width / u32::from(scale)) as usize;
        assert_eq!(decoded.len(), expected_rows, "row count mismatch at scale {scale}");
        for row in &decoded {
            assert_eq!(row.len(), expected_width, "row width mismatch at scale {scale}");
        }
    }
}

// Property 5: the same image encoded with different scanline filters
// decodes to identical RGB565 output at scale=1.
#[test]
fn property_filter_invariance() {
    // Reconstructed grayscale rows are constant: row0 = 0x10 everywhere,
    // row1 = 0x20 everywhere. Express them with every filter type and
    // confirm the decoded pixels match across encodings.
    let none_scanlines =
        common::concat_scanlines(&[common::scanline(0, &[0x10, 0x10, 0x10]), common::scanline(0, &[0x20, 0x20, 0x20])]);
    let sub_scanlines =
        common::concat_scanlines(&[common::scanline(1, &[0x10, 0x00, 0x00]), common::scanline(1, &[0x20, 0x00, 0x00])]);
    let up_scanlines =
        common::concat_scanlines(&[common::scanline(0, &[0x10, 0x10, 0x10]), common::scanline(2, &[0x10, 0x10, 0x10])]);
    let avg_scanlines = common::concat_scanlines(&[
        common::scanline(0, &[0x10, 0x10, 0x10]),
        common::scanline(3, &[0x18, 0x08, 0x08]),
    ]);
    let paeth_scanlines = common::concat_scanlines(&[
        common::scanline(0, &[0x10, 0x10, 0x10]),
        common::scanline(4, &[0x10, 0x00, 0x00]),
    ]);

    let expected = collect(&common::build_png(3, 2, 8, 0, None, &none_scanlines, 1), 1);
    for scanlines in [sub_scanlines, up_scanlines, avg_scanlines, paeth_scanlines] {
        let png = common::build_png(3, 2, 8, 0, None, &scanlines, 1);
        assert_eq!(collect(&png, 1), expected);
    }
}

// Property 6: a solid color image decodes identically across every
// supported color type that can express an opaque solid color.
#[test]
fn property_color_type_equivalence() {
    let (r, g, b) = (0x60u8, 0x90u8, 0xC0u8);

    // Luma has no way to express an arbitrary RGB triple, so this test
    // compares the three channel-carrying color types against each other.
    let rgb_scanlines = common::scanline(0, &[r, g, b, r, g, b]);
    let rgba_scanlines = common::scanline(0, &[r, g, b, 255, r, g, b, 255]);
    let palette = [[r, g, b]];
    let indexed_scanlines = common::scanline(0, &[0, 0]);

    let rgb_png = common::build_png(2, 1, 8, 2, None, &rgb_scanlines, 1);
    let rgba_png = common::build_png(2, 1, 8, 6, None, &rgba_scanlines, 1);
    let indexed_png = common::build_png(2, 1, 8, 3, Some(&palette), &indexed_scanlines, 1);

    let expected = collect(&rgb_png, 1);
    assert_eq!(collect(&rgba_png, 1), expected);
    assert_eq!(collect(&indexed_png, 1), expected);
}

// Property 7: a uniform-color image downscales to that same color at
// every supported scale.
#[test]
fn property_downscale_idempotence_of_uniform_image() {
    let width = 4u32;
    let height = 4u32;
    let rows: Vec<Vec<u8>> = (0..height).map(|_| (0..width * 3).map(|_| 0x80u8).collect()).collect();
    let scanlines = common::concat_scanlines(&rows.iter().map(|r| common::scanline(0, r)).collect::<Vec<_>>());
    let png = common::build_png(width, height, 8, 2, None, &scanlines, 1);

    // (0x80, 0x80, 0x80) packed to RGB565, cross-checked against the unit
    // test for `pack_rgb565` in `src/pixel.rs`.
    let expected = 0x8410u16;
    for &scale in &[1u8, 2, 4] {
        for row in collect(&png, scale) {
            for pixel in row {
                assert_eq!(pixel, expected, "scale {scale} produced a non-uniform pixel");
            }
        }
    }
}
