//! End-to-end tests for the `square-crop` binary.
//!
//! Each test builds synthetic images in a temp directory, runs the compiled
//! binary against them, and checks stdout, the exit code, and the files left
//! on disk.

use image::RgbImage;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_square-crop"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    bin().args(args).output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

/// Write a gradient PNG (or any format the extension implies) of the given size.
fn write_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
    })
    .save(&path)
    .unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("Usage:"));
}

#[test]
fn only_flags_is_an_error() {
    let out = run(&["--replace"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("No image files specified"));
}

#[test]
fn replace_and_output_conflict() {
    let tmp = TempDir::new().unwrap();
    let source = write_image(tmp.path(), "a.png", 20, 10);

    let out = run(&["--replace", "-o", "b.png", path_str(&source)]);
    assert_eq!(out.status.code(), Some(1));
    // Nothing was touched
    assert_eq!(image::image_dimensions(&source).unwrap(), (20, 10));
}

#[test]
fn output_with_several_inputs_is_rejected_before_any_work() {
    let tmp = TempDir::new().unwrap();
    let a = write_image(tmp.path(), "a.png", 20, 10);
    let b = write_image(tmp.path(), "b.png", 20, 10);
    let target = tmp.path().join("out.png");

    let out = run(&["-o", path_str(&target), path_str(&a), path_str(&b)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!target.exists());
}

#[test]
fn default_policy_writes_suffix_file_and_keeps_original() {
    let tmp = TempDir::new().unwrap();
    let source = write_image(tmp.path(), "diego.png", 200, 100);

    let out = run(&[path_str(&source)]);
    let text = stdout(&out);

    assert!(out.status.success());
    assert!(text.contains("Cropping 1 image(s) to square (1:1 aspect ratio)..."));
    assert!(text.contains("Processing diego.png: 200x100"));
    assert!(text.contains("Saved as diego_square.png: 100x100"));
    assert!(text.contains("Original files were preserved"));

    let cropped = tmp.path().join("diego_square.png");
    assert_eq!(image::image_dimensions(&cropped).unwrap(), (100, 100));
    assert_eq!(image::image_dimensions(&source).unwrap(), (200, 100));

    // Centered: the first kept column is x = 50
    let pixels = image::open(&cropped).unwrap().to_rgb8();
    assert_eq!(pixels.get_pixel(0, 0).0[0], 50);
}

#[test]
fn replace_flag_after_paths_overwrites_in_place() {
    let tmp = TempDir::new().unwrap();
    let source = write_image(tmp.path(), "rocio.png", 90, 120);

    let out = run(&[path_str(&source), "--replace"]);
    let text = stdout(&out);

    assert!(out.status.success());
    assert_eq!(image::image_dimensions(&source).unwrap(), (90, 90));
    assert!(!tmp.path().join("rocio_square.png").exists());
    assert!(!text.contains("Original files were preserved"));
}

#[test]
fn jpeg_input_round_trips_through_quality_encoder() {
    let tmp = TempDir::new().unwrap();
    let source = write_image(tmp.path(), "julian.jpg", 64, 48);

    let out = run(&[path_str(&source)]);

    assert!(out.status.success());
    assert_eq!(
        image::image_dimensions(tmp.path().join("julian_square.jpg")).unwrap(),
        (48, 48)
    );
}

#[test]
fn explicit_output_path() {
    let tmp = TempDir::new().unwrap();
    let source = write_image(tmp.path(), "me.png", 30, 50);
    let target = tmp.path().join("avatar.png");

    let out = run(&["--output", path_str(&target), path_str(&source)]);

    assert!(out.status.success());
    assert_eq!(image::image_dimensions(&target).unwrap(), (30, 30));
    assert!(stdout(&out).contains("Saved as avatar.png: 30x30"));
}

#[test]
fn missing_file_is_reported_and_the_batch_continues() {
    let tmp = TempDir::new().unwrap();
    let a = write_image(tmp.path(), "a.png", 40, 20);
    let b = write_image(tmp.path(), "b.png", 20, 40);
    let c = write_image(tmp.path(), "c.png", 33, 33);
    let missing = tmp.path().join("missing.png");

    let out = run(&[
        path_str(&a),
        path_str(&missing),
        path_str(&b),
        path_str(&c),
    ]);
    let text = stdout(&out);

    assert_eq!(out.status.code(), Some(0));
    assert!(text.contains(&format!("Error: File not found: {}", missing.display())));
    assert!(text.contains("Done! Saved 3 of 4 image(s) (1 failed)."));
    for name in ["a_square.png", "b_square.png", "c_square.png"] {
        assert!(tmp.path().join(name).exists(), "{name} should exist");
    }
}

#[test]
fn corrupt_file_is_reported_and_skipped() {
    let tmp = TempDir::new().unwrap();
    let broken = tmp.path().join("broken.png");
    std::fs::write(&broken, b"not really a png").unwrap();
    let good = write_image(tmp.path(), "good.png", 10, 12);

    let out = run(&[path_str(&broken), path_str(&good)]);
    let text = stdout(&out);

    assert!(out.status.success());
    assert!(text.contains(&format!("Error processing {}", broken.display())));
    assert!(!tmp.path().join("broken_square.png").exists());
    assert!(tmp.path().join("good_square.png").exists());
}

#[test]
fn dash_prefixed_filename_is_cropped() {
    let tmp = TempDir::new().unwrap();
    write_image(tmp.path(), "-me.png", 24, 16);

    let out = bin()
        .current_dir(tmp.path())
        .arg("-me.png")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Saved as -me_square.png: 16x16"));
    assert_eq!(
        image::image_dimensions(tmp.path().join("-me_square.png")).unwrap(),
        (16, 16)
    );
}

#[test]
fn unknown_option_is_treated_as_a_missing_file() {
    let tmp = TempDir::new().unwrap();
    let a = write_image(tmp.path(), "a.png", 20, 10);
    let b = write_image(tmp.path(), "b.png", 10, 20);

    let out = bin()
        .current_dir(tmp.path())
        .args([path_str(&a), "--typo", path_str(&b)])
        .output()
        .unwrap();
    let text = stdout(&out);

    assert_eq!(out.status.code(), Some(0));
    assert!(text.contains("Error: File not found: --typo"));
    assert!(tmp.path().join("a_square.png").exists());
    assert!(tmp.path().join("b_square.png").exists());
}
