//! End-to-end conversion runs over synthetic sensor captures.

use std::path::Path;

use psii2png::discovery;
use psii2png::image_pipeline::{ConversionConfig, FrameGeometry, PsiiConversionPipeline};
use psii2png::metadata::CaptureMetadata;

const WIDTH: usize = 8;
const HEIGHT: usize = 6;

fn grayscale_lut() -> Vec<[u8; 3]> {
    (0..=255).map(|i| [i, i, i]).collect()
}

/// Writes one constant-valued 12-bit frame as the instrument would: a
/// headerless grid of little-endian 16-bit words.
fn write_frame(dir: &Path, sequence: usize, value: u16) {
    let mut bytes = Vec::with_capacity(WIDTH * HEIGHT * 2);
    for _ in 0..WIDTH * HEIGHT {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    std::fs::write(dir.join(format!("{:0>4}.bin", sequence)), bytes).unwrap();
}

fn test_pipeline() -> PsiiConversionPipeline<
    psii2png::image_pipeline::BinFrameReader,
    psii2png::image_pipeline::StandardFrameWriter,
> {
    let config = ConversionConfig::builder()
        .lut(grayscale_lut())
        .thumbnail_size((4, 3))
        .histogram_bins(16)
        .histogram_panel_size((64, 40))
        .build();
    PsiiConversionPipeline::new(config).unwrap()
}

fn geometry() -> FrameGeometry {
    FrameGeometry {
        width: WIDTH,
        height: HEIGHT,
        bits_per_sample: 12,
    }
}

/// 12-bit value through the pipeline's 8-bit remap.
fn normalize8(value: u16) -> u8 {
    ((value as u32 * 255 + 2047) / 4095) as u8
}

#[test]
fn converts_synthetic_capture_to_all_outputs() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let values = [10u16, 50, 100, 200];
    for (i, &value) in values.iter().enumerate() {
        write_frame(input.path(), i, value);
    }

    let sources = discovery::discover_frames(&[input.path().to_path_buf()]).unwrap();
    assert_eq!(sources.len(), 4);

    let summary = test_pipeline().run(&sources, &geometry(), output.path());
    assert!(summary.is_success());
    assert_eq!(summary.succeeded(), 4);

    // per-frame outputs, named from the source stem
    for i in 0..4 {
        assert!(output.path().join(format!("{:0>4}.png", i)).exists());
        assert!(output.path().join(format!("{:0>4}.tif", i)).exists());
    }

    // PNG carries the 8-bit remap exactly
    let png = image::open(output.path().join("0001.png")).unwrap().into_luma8();
    assert_eq!(png.dimensions(), (WIDTH as u32, HEIGHT as u32));
    assert!(png.pixels().all(|p| p.0[0] == normalize8(50)));

    // TIFF carries the source samples unchanged
    let file = std::fs::File::open(output.path().join("0000.tif")).unwrap();
    let mut decoder = tiff::decoder::Decoder::new(file).unwrap();
    match decoder.read_image().unwrap() {
        tiff::decoder::DecodingResult::U16(data) => {
            assert_eq!(data.len(), WIDTH * HEIGHT);
            assert!(data.iter().all(|&v| v == 10));
        }
        _ => panic!("unexpected decoding result"),
    }
}

#[test]
fn false_color_mosaic_cells_match_the_lut() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let values = [10u16, 50, 100, 200];
    for (i, &value) in values.iter().enumerate() {
        write_frame(input.path(), i, value);
    }
    let sources = discovery::discover_frames(&[input.path().to_path_buf()]).unwrap();

    let summary = test_pipeline().run(&sources, &geometry(), output.path());

    let mosaic = image::open(summary.false_color_mosaic.unwrap())
        .unwrap()
        .into_rgb8();
    // 4 thumbnails of 4x3 -> 2x2 grid
    assert_eq!(mosaic.dimensions(), (8, 6));

    let cells = [(0u32, 0u32), (1, 0), (0, 1), (1, 1)];
    for (&value, &(cx, cy)) in values.iter().zip(&cells) {
        let expected = normalize8(value);
        let center = mosaic.get_pixel(cx * 4 + 2, cy * 3 + 1);
        assert_eq!(
            center.0,
            [expected, expected, expected],
            "cell for value {value}"
        );
    }
}

#[test]
fn histogram_mosaic_tiles_fixed_panels() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    for (i, value) in [10u16, 50, 100].into_iter().enumerate() {
        write_frame(input.path(), i, value);
    }
    let sources = discovery::discover_frames(&[input.path().to_path_buf()]).unwrap();

    let summary = test_pipeline().run(&sources, &geometry(), output.path());

    let mosaic = image::open(summary.histogram_mosaic.unwrap())
        .unwrap()
        .into_rgb8();
    // 3 panels of 64x40 -> 2x2 grid with one background cell
    assert_eq!(mosaic.dimensions(), (128, 80));
}

#[test]
fn corrupt_frame_is_skipped_and_order_is_preserved() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_frame(input.path(), 0, 10);
    // truncated file: size no longer matches the declared geometry
    std::fs::write(input.path().join("0001.bin"), [0u8; 7]).unwrap();
    write_frame(input.path(), 2, 200);

    let sources = discovery::discover_frames(&[input.path().to_path_buf()]).unwrap();
    let summary = test_pipeline().run(&sources, &geometry(), output.path());

    assert_eq!(summary.succeeded(), 2);
    assert!(summary.is_success());
    assert!(!summary.frames[1].succeeded());

    // frames 0 and 2 keep their relative order; frame 1 gets no blank cell
    let mosaic = image::open(summary.false_color_mosaic.unwrap())
        .unwrap()
        .into_rgb8();
    assert_eq!(mosaic.dimensions(), (8, 3));
    assert_eq!(mosaic.get_pixel(2, 1).0, [normalize8(10); 3]);
    assert_eq!(mosaic.get_pixel(6, 1).0, [normalize8(200); 3]);
}

#[test]
fn metadata_record_drives_frame_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let metadata_path = dir.path().join("metadata.json");
    std::fs::write(
        &metadata_path,
        r#"{
            "sensor_fixed_metadata": {"camera_resolution": "8x6", "bits_per_sample": 12},
            "experiment": "S4_Lettuce",
            "timestamp": "2018-08-18T10:12:39"
        }"#,
    )
    .unwrap();

    let metadata = CaptureMetadata::load(&metadata_path).unwrap();
    let geometry = metadata.frame_geometry().unwrap();
    assert_eq!(geometry, self::geometry());
}
