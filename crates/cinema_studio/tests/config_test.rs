//! Tests for studio configuration loading.

use cinema_core::{
    AspectRatio, CameraAngle, CameraBody, FocalLength, ImageSize, LensType, ShotConfiguration,
};
use cinema_error::CinemaErrorKind;
use cinema_studio::StudioConfig;
use std::io::Write;
use std::path::Path;

fn write_config(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_bundled_defaults_match_studio_defaults() -> anyhow::Result<()> {
    let config = StudioConfig::bundled()?;

    assert_eq!(config.model(), "gemini-3-pro-image-preview");
    assert_eq!(config.output_dir(), Path::new("shots"));

    let seeded = config.default_configuration().build()?;
    assert_eq!(seeded, ShotConfiguration::default());
    Ok(())
}

#[test]
fn test_file_overrides_only_what_it_names() -> anyhow::Result<()> {
    let file = write_config(
        r#"
model = "gemini-2.5-flash-image"

[defaults]
camera = "RED_VRAPTOR"
focal_length = 85
angle = "THREE_QUARTER"
aspect_ratio = "9:16"
image_size = "4K"
anamorphic = true
"#,
    )?;

    let config = StudioConfig::from_file(file.path())?;

    assert_eq!(config.model(), "gemini-2.5-flash-image");
    assert_eq!(config.output_dir(), Path::new("shots"));
    let defaults = config.defaults();
    assert_eq!(*defaults.camera(), CameraBody::RedVraptor);
    assert_eq!(*defaults.lens(), LensType::ZeissUltra);
    assert_eq!(*defaults.focal_length(), FocalLength::Mm85);
    assert_eq!(*defaults.angle(), CameraAngle::ThreeQuarter);
    assert!(*defaults.angle_enabled());
    assert!(*defaults.anamorphic());
    assert_eq!(*defaults.aspect_ratio(), AspectRatio::Vertical);
    assert_eq!(*defaults.image_size(), ImageSize::FourK);
    Ok(())
}

#[test]
fn test_seeded_shot_keeps_per_shot_fields_open() -> anyhow::Result<()> {
    let file = write_config("[defaults]\nlens = \"PETZVAL\"\nangle_enabled = false\n")?;
    let config = StudioConfig::from_file(file.path())?;

    let shot = config
        .default_configuration()
        .subject("a portrait in a greenhouse")
        .custom_angle("slightly below chin")
        .build()?;

    assert_eq!(*shot.lens(), LensType::Petzval);
    assert_eq!(shot.active_angle(), None);
    assert_eq!(shot.subject(), "a portrait in a greenhouse");
    Ok(())
}

#[test]
fn test_unsupported_focal_length_is_rejected() -> anyhow::Result<()> {
    let file = write_config("[defaults]\nfocal_length = 40\n")?;

    let err = StudioConfig::from_file(file.path()).unwrap_err();

    match err.kind() {
        CinemaErrorKind::Config(e) => {
            assert!(e.message.contains("40mm"), "{}", e.message);
            assert_eq!(e.origin.as_deref(), Some(file.path().display().to_string().as_str()));
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn test_unknown_camera_is_rejected() -> anyhow::Result<()> {
    let file = write_config("[defaults]\ncamera = \"BOLEX_H16\"\n")?;
    let err = StudioConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), CinemaErrorKind::Config(_)));
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let err = StudioConfig::from_file("/nonexistent/cinema.toml").unwrap_err();
    assert!(matches!(err.kind(), CinemaErrorKind::Config(_)));
}
