//! End-to-end file pipeline tests.

use std::fs;
use std::path::PathBuf;

use bmpblur::{
    BlurError, DecodeRequest, EncodeRequest, Limits, PixelBuffer, ProcessRequest, Unstoppable,
    process_image,
};

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("bmpblur-test-{}-{name}", std::process::id()));
    path
}

fn write_gradient_bmp(path: &PathBuf, w: u32, h: u32) {
    let image = PixelBuffer::gradient(w, h).unwrap();
    let encoded = EncodeRequest::new().encode(&image, Unstoppable).unwrap();
    fs::write(path, encoded).unwrap();
}

#[test]
fn end_to_end_blur() {
    let input = temp_path("e2e-in.bmp");
    let output = temp_path("e2e-out.bmp");
    write_gradient_bmp(&input, 16, 12);

    process_image(&input, &output).unwrap();

    let bytes = fs::read(&output).unwrap();
    let blurred = DecodeRequest::new(&bytes).decode(Unstoppable).unwrap();
    assert_eq!(blurred.width(), 16);
    assert_eq!(blurred.height(), 12);
    // The gradient's blue channel is constant 128; blurring must keep it so.
    assert!(blurred.as_bytes().chunks_exact(3).all(|px| px[0] == 128));

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn custom_sigma_and_radius() {
    let input = temp_path("custom-in.bmp");
    let output = temp_path("custom-out.bmp");
    write_gradient_bmp(&input, 8, 8);

    ProcessRequest::new(&input, &output)
        .with_sigma(1.0)
        .with_radius(2)
        .run(Unstoppable)
        .unwrap();

    let bytes = fs::read(&output).unwrap();
    let blurred = DecodeRequest::new(&bytes).decode(Unstoppable).unwrap();
    assert_eq!((blurred.width(), blurred.height()), (8, 8));

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn missing_input_is_io_error() {
    let input = temp_path("does-not-exist.bmp");
    let output = temp_path("missing-out.bmp");

    match process_image(&input, &output) {
        Err(BlurError::Io(_)) => {}
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn bad_sigma_rejected_before_any_io() {
    // The input path doesn't exist either; the parameter error must win
    // because validation precedes file access.
    let input = temp_path("never-read.bmp");
    let output = temp_path("never-written.bmp");

    match ProcessRequest::new(&input, &output)
        .with_sigma(-2.0)
        .run(Unstoppable)
    {
        Err(BlurError::InvalidParameter(_)) => {}
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn no_partial_output_on_bad_input() {
    let input = temp_path("garbage-in.bin");
    let output = temp_path("garbage-out.bmp");
    fs::write(&input, b"certainly not a bitmap").unwrap();

    match process_image(&input, &output) {
        Err(BlurError::UnrecognizedFormat) => {}
        other => panic!("expected UnrecognizedFormat, got {other:?}"),
    }
    assert!(!output.exists(), "failure must not leave an output file");

    let _ = fs::remove_file(&input);
}

#[test]
fn limits_abort_before_output() {
    let input = temp_path("limited-in.bmp");
    let output = temp_path("limited-out.bmp");
    write_gradient_bmp(&input, 16, 12);

    let limits = Limits {
        max_pixels: Some(4),
        ..Default::default()
    };
    match ProcessRequest::new(&input, &output)
        .with_limits(&limits)
        .run(Unstoppable)
    {
        Err(BlurError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
    assert!(!output.exists());

    let _ = fs::remove_file(&input);
}

#[test]
fn output_replaces_existing_file() {
    let input = temp_path("replace-in.bmp");
    let output = temp_path("replace-out.bmp");
    write_gradient_bmp(&input, 6, 6);
    fs::write(&output, b"stale junk from an earlier run").unwrap();

    process_image(&input, &output).unwrap();

    let bytes = fs::read(&output).unwrap();
    let decoded = DecodeRequest::new(&bytes).decode(Unstoppable).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (6, 6));

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn unwritable_output_is_io_error() {
    let input = temp_path("unwritable-in.bmp");
    write_gradient_bmp(&input, 4, 4);
    let output = temp_path("no-such-dir").join("out.bmp");

    match process_image(&input, &output) {
        Err(BlurError::Io(_)) => {}
        other => panic!("expected Io, got {other:?}"),
    }

    let _ = fs::remove_file(&input);
}
