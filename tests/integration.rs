use assert_fs::prelude::*;
use assert_fs::TempDir;
use imgresize::{
    resize_image, ErrorKind, ImageProcessor, ProcessConfig, Prompter, ResizeAlgorithm,
    ResizeRequest,
};
use std::io::Cursor;

fn write_gradient(path: &std::path::Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

#[test]
fn test_resize_image_keeps_aspect() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.child("test.png");
    write_gradient(input_path.path(), 300, 200);

    let output_path = temp_dir.child("test_resized.png");

    assert!(resize_image(input_path.path(), output_path.path(), 150, 150, true));
    assert!(output_path.path().exists());

    let resized = image::open(output_path.path()).unwrap();
    assert_eq!((resized.width(), resized.height()), (150, 100));
}

#[test]
fn test_resize_image_exact() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.child("test.jpg");
    write_gradient(input_path.path(), 64, 48);

    let output_path = temp_dir.child("stretched.jpg");

    assert!(resize_image(input_path.path(), output_path.path(), 10, 90, false));

    let resized = image::open(output_path.path()).unwrap();
    assert_eq!((resized.width(), resized.height()), (10, 90));
}

#[test]
fn test_resize_back_restores_dimensions() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.child("orig.png");
    write_gradient(input_path.path(), 120, 80);
    let small = temp_dir.child("small.png");
    let back = temp_dir.child("back.png");

    assert!(resize_image(input_path.path(), small.path(), 30, 20, false));
    assert!(resize_image(small.path(), back.path(), 120, 80, false));

    let restored = image::open(back.path()).unwrap();
    assert_eq!((restored.width(), restored.height()), (120, 80));
}

#[test]
fn test_output_format_follows_extension() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.child("photo.png");
    write_gradient(input_path.path(), 40, 40);
    let output_path = temp_dir.child("photo.bmp");

    assert!(resize_image(input_path.path(), output_path.path(), 20, 20, true));

    let format = image::ImageFormat::from_path(output_path.path()).unwrap();
    let bytes = std::fs::read(output_path.path()).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), format);
}

#[test]
fn test_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.child("output.png");

    assert!(!resize_image("/no/such.png", output_path.path(), 10, 10, true));
    assert!(!output_path.path().exists());
}

#[test]
fn test_huge_request_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.child("tiny.png");
    write_gradient(input_path.path(), 8, 8);
    let output_path = temp_dir.child("huge.png");

    assert!(!resize_image(input_path.path(), output_path.path(), u32::MAX, u32::MAX, false));
    assert!(!output_path.path().exists());
}

#[test]
fn test_failed_resize_keeps_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.child("photo.png");
    write_gradient(input_path.path(), 40, 40);
    let output_path = temp_dir.child("favicon.ico");
    output_path.write_binary(b"keep me").unwrap();

    // Icons are limited to 256 pixels per side, so encoding fails.
    assert!(!resize_image(input_path.path(), output_path.path(), 300, 300, false));
    assert_eq!(std::fs::read(output_path.path()).unwrap(), b"keep me");
}

#[test]
fn test_failure_kinds() {
    let temp_dir = TempDir::new().unwrap();
    let processor = ImageProcessor::new(ProcessConfig::default());

    let garbage = temp_dir.child("garbage.gif");
    garbage.write_binary(b"GIF89a").unwrap();
    let request =
        ResizeRequest::new(garbage.path(), temp_dir.child("a.png").path(), 5, 5, true).unwrap();
    assert_eq!(processor.process(&request).unwrap_err().kind(), ErrorKind::Decode);

    let input_path = temp_dir.child("ok.png");
    write_gradient(input_path.path(), 8, 8);
    let request =
        ResizeRequest::new(input_path.path(), temp_dir.child("a.unknown").path(), 5, 5, true)
            .unwrap();
    assert_eq!(
        processor.process(&request).unwrap_err().kind(),
        ErrorKind::UnsupportedFormat
    );

    let request = ResizeRequest::new(
        input_path.path(),
        temp_dir.child("no_dir/a.png").path(),
        5,
        5,
        true,
    )
    .unwrap();
    assert_eq!(processor.process(&request).unwrap_err().kind(), ErrorKind::Write);
}

#[test]
fn test_prompted_request_drives_resize() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.child("photo.png");
    write_gradient(input_path.path(), 200, 100);

    let answers = format!("{}\n\n-5\n50\n50\nyes\n", input_path.path().display());
    let mut prompter = Prompter::new(Cursor::new(answers.into_bytes()), Vec::new());
    let request = prompter.collect_request().unwrap();

    let config = ProcessConfig {
        algorithm: ResizeAlgorithm::Bilinear,
        ..Default::default()
    };
    let outcome = ImageProcessor::new(config).process(&request).unwrap();

    assert_eq!(outcome.output_path, temp_dir.child("photo_resized.png").path());
    assert_eq!(outcome.original, (200, 100));
    assert_eq!(outcome.resized, (50, 25));
    assert!(temp_dir.child("photo_resized.png").path().exists());
}
