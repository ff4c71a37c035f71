use image::ColorType;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs `app-icon-gen -o <tmp>/app_icon.png` and checks the written icon:
/// 1. The command succeeds and reports the size and mode
/// 2. The PNG is 1024×1024 RGBA
/// 3. The outermost corners are transparent and the large star is white
#[test]
fn test_default_icon_generation() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("app_icon.png");

    let output = run_app_icon_gen(&output_path);

    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("app-icon-gen command failed");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in [
        "Creating rounded gradient background...",
        "Creating star glow effect...",
        "Drawing crisp stars...",
        "Size: 1024x1024, Mode: RGBA",
    ] {
        assert!(stdout.contains(line), "stdout missing {:?}:\n{}", line, stdout);
    }

    assert!(
        output_path.exists(),
        "Icon should exist at: {}",
        output_path.display()
    );

    let icon = image::open(&output_path).expect("Failed to load generated icon");
    assert_eq!(icon.width(), 1024, "Icon width should be 1024");
    assert_eq!(icon.height(), 1024, "Icon height should be 1024");
    assert_eq!(icon.color(), ColorType::Rgba8, "Icon should be saved as RGBA");

    let rgba = icon.to_rgba8();
    for (x, y) in [(0, 0), (1023, 0), (0, 1023), (1023, 1023)] {
        assert_eq!(
            rgba.get_pixel(x, y)[3],
            0,
            "Corner ({}, {}) should be fully transparent",
            x,
            y
        );
    }

    assert_eq!(rgba.get_pixel(380, 380).0, [255, 255, 255, 255]);

    println!("✓ Icon generation test passed");
}

/// Two runs with the same inputs must produce the same bytes
#[test]
fn test_regeneration_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("app_icon.png");

    assert!(run_app_icon_gen(&output_path).status.success());
    let first = std::fs::read(&output_path).expect("Failed to read first icon");

    assert!(run_app_icon_gen(&output_path).status.success());
    let second = std::fs::read(&output_path).expect("Failed to read second icon");

    assert!(first == second, "Regenerated icon differs from the first run");
}

/// A missing output directory is an error, not something to create
#[test]
fn test_missing_output_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("no_such_dir").join("app_icon.png");

    let output = run_app_icon_gen(&output_path);

    assert!(
        !output.status.success(),
        "app-icon-gen should fail when the output directory is missing"
    );
    assert!(!output_path.exists());
    assert!(!temp_dir.path().join("no_such_dir").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to create PNG file"),
        "stderr should explain the failure:\n{}",
        stderr
    );
}

fn run_app_icon_gen(output_path: &Path) -> Output {
    Command::new(get_app_icon_gen_binary_path())
        .arg("-o")
        .arg(output_path)
        .output()
        .expect("Failed to run app-icon-gen command")
}

/// Gets the path to the app-icon-gen binary cargo built for this test run
fn get_app_icon_gen_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_app-icon-gen"))
}
