//! Tests for resolving command-line shot options against configured defaults.

use cinema::{
    AspectRatio, CameraAngle, CameraBody, Cli, Commands, FocalLength, ImageSize, LensType,
    ShotArgs, ShotConfiguration, StudioConfig,
};
use clap::Parser;
use std::io::Write;

/// Config whose defaults disable angles and enable anamorphic rendering.
fn anamorphic_config() -> anyhow::Result<StudioConfig> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(
        br#"
[defaults]
lens = "COOKE_S4"
focal_length = 85
angle_enabled = false
angle = "HIGH_ANGLE"
anamorphic = true
"#,
    )?;
    Ok(StudioConfig::from_file(file.path())?)
}

fn prompt_args(args: &[&str]) -> anyhow::Result<ShotArgs> {
    let cli = Cli::try_parse_from(["cinema", "prompt"].iter().chain(args))?;
    match cli.command {
        Commands::Prompt { shot, .. } => Ok(shot),
        other => anyhow::bail!("parsed unexpected command: {other:?}"),
    }
}

fn resolve(config: &StudioConfig, args: &[&str]) -> anyhow::Result<ShotConfiguration> {
    Ok(prompt_args(args)?.to_configuration(config, Vec::new())?)
}

#[test]
fn test_unset_flags_fall_back_to_config_defaults() -> anyhow::Result<()> {
    let config = anamorphic_config()?;

    let shot = resolve(&config, &["a", "lone", "detective"])?;

    assert_eq!(*shot.camera(), CameraBody::ArriAlexa35);
    assert_eq!(*shot.lens(), LensType::CookeS4);
    assert_eq!(*shot.focal_length(), FocalLength::Mm85);
    assert_eq!(shot.active_angle(), None);
    assert!(*shot.anamorphic());
    assert_eq!(*shot.aspect_ratio(), AspectRatio::Widescreen);
    assert_eq!(*shot.image_size(), ImageSize::OneK);
    assert_eq!(shot.subject(), "a lone detective");
    assert!(shot.reference_images().is_empty());
    Ok(())
}

#[test]
fn test_spherical_overrides_anamorphic_default() -> anyhow::Result<()> {
    let config = anamorphic_config()?;

    let shot = resolve(&config, &["--spherical", "a harbor at dawn"])?;

    assert!(!*shot.anamorphic());
    Ok(())
}

#[test]
fn test_angle_flag_enables_angles() -> anyhow::Result<()> {
    let config = anamorphic_config()?;

    let shot = resolve(&config, &["--angle", "LOW_ANGLE", "a boxer"])?;
    assert_eq!(shot.active_angle(), Some(CameraAngle::LowAngle));

    let custom_only = resolve(&config, &["--custom-angle", "from the ropes", "a boxer"])?;
    assert_eq!(custom_only.active_angle(), None);
    Ok(())
}

#[test]
fn test_no_angle_overrides_enabled_default() -> anyhow::Result<()> {
    let config = StudioConfig::bundled()?;

    let plain = resolve(&config, &["a ferris wheel"])?;
    assert_eq!(plain.active_angle(), Some(CameraAngle::EyeLevel));
    assert!(!*plain.anamorphic());

    let shot = resolve(&config, &["--no-angle", "--anamorphic", "a ferris wheel"])?;
    assert_eq!(shot.active_angle(), None);
    assert!(*shot.anamorphic());
    Ok(())
}

#[test]
fn test_explicit_selections_win_over_defaults() -> anyhow::Result<()> {
    let config = anamorphic_config()?;

    let shot = resolve(
        &config,
        &[
            "--camera",
            "imax",
            "--lens",
            "Panavision C-Series",
            "--focal",
            "135mm",
            "--ratio",
            "9:16",
            "--size",
            "4k",
            "--angle",
            "OVER_SHOULDER",
            "--custom-angle",
            "  behind the railing ",
            "two spies on a bridge",
        ],
    )?;

    assert_eq!(*shot.camera(), CameraBody::Imax);
    assert_eq!(*shot.lens(), LensType::PanavisionC);
    assert_eq!(*shot.focal_length(), FocalLength::Mm135);
    assert_eq!(*shot.aspect_ratio(), AspectRatio::Vertical);
    assert_eq!(*shot.image_size(), ImageSize::FourK);
    assert_eq!(shot.active_angle(), Some(CameraAngle::OverShoulder));
    assert_eq!(shot.custom_position(), Some("behind the railing"));
    assert_eq!(shot.subject(), "two spies on a bridge");
    Ok(())
}

#[test]
fn test_conflicting_and_invalid_options_are_rejected() {
    assert!(prompt_args(&["--angle", "TOP_DOWN", "--no-angle", "a city"]).is_err());
    assert!(prompt_args(&["--anamorphic", "--spherical", "a city"]).is_err());
    assert!(prompt_args(&["--focal", "40", "a city"]).is_err());
    assert!(prompt_args(&["--camera", "BOLEX", "a city"]).is_err());
    assert!(prompt_args(&[]).is_err());
}
