use std::io::Write;

use tempfile::NamedTempFile;
use zoomview_core::config::{ResampleFilter, ViewerConfig};
use zoomview_core::error::ZoomViewError;

#[test]
fn test_default_config_round_trips_through_toml() {
    let config = ViewerConfig::default();
    let text = config.to_toml_string().unwrap();
    let parsed = ViewerConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_default_values() {
    let config = ViewerConfig::default();
    assert_eq!(config.window.width, 800.0);
    assert_eq!(config.window.height, 600.0);
    assert_eq!(config.resolution_percent, 100);
    assert_eq!(config.filter, ResampleFilter::Triangle);
}

#[test]
fn test_partial_config_fills_defaults() {
    let config = ViewerConfig::from_toml_str(
        r#"
resolution_percent = 40
filter = "lanczos3"

[window]
width = 1024.0
"#,
    )
    .unwrap();

    assert_eq!(config.resolution_percent, 40);
    assert_eq!(config.filter, ResampleFilter::Lanczos3);
    assert_eq!(config.window.width, 1024.0);
    assert_eq!(config.window.height, 600.0);
    assert_eq!(config.overlay_color, ViewerConfig::default().overlay_color);
}

#[test]
fn test_out_of_range_percent_rejected() {
    let err = ViewerConfig::from_toml_str("resolution_percent = 150").unwrap_err();
    assert!(matches!(err, ZoomViewError::InvalidArgument(_)), "got: {err}");
}

#[test]
fn test_non_positive_window_rejected() {
    let err = ViewerConfig::from_toml_str("[window]\nwidth = 0.0").unwrap_err();
    assert!(matches!(err, ZoomViewError::InvalidArgument(_)), "got: {err}");
}

#[test]
fn test_malformed_toml_rejected() {
    let err = ViewerConfig::from_toml_str("filter = \"Bicubic\"").unwrap_err();
    assert!(matches!(err, ZoomViewError::Config(_)), "got: {err}");
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "resolution_percent = 25").unwrap();
    file.flush().unwrap();

    let config = ViewerConfig::load(file.path()).unwrap();
    assert_eq!(config.resolution_percent, 25);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = ViewerConfig::load(std::path::Path::new("/nonexistent/zoomview.toml")).unwrap_err();
    assert!(matches!(err, ZoomViewError::Io(_)), "got: {err}");
}

#[test]
fn test_filter_names_match_cli_spelling() {
    let cases = [
        ("nearest", ResampleFilter::Nearest),
        ("bilinear", ResampleFilter::Triangle),
        ("catmull-rom", ResampleFilter::CatmullRom),
        ("lanczos3", ResampleFilter::Lanczos3),
    ];
    for (name, filter) in cases {
        let config = ViewerConfig::from_toml_str(&format!("filter = \"{name}\"")).unwrap();
        assert_eq!(config.filter, filter, "{name}");
    }

    let text = ViewerConfig::default().to_toml_string().unwrap();
    assert!(text.contains("filter = \"bilinear\""), "got:\n{text}");
}

#[test]
fn test_filter_display() {
    assert_eq!(format!("{}", ResampleFilter::Triangle), "Bilinear");
    assert_eq!(format!("{}", ResampleFilter::CatmullRom), "Catmull-Rom");
    assert!(ResampleFilter::ALL.iter().filter(|f| !f.is_smooth()).count() == 1);
}
