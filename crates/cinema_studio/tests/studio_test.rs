//! Tests for the studio session using MockImageGenerator.

mod test_utils;

use cinema_composer::compose_prompt;
use cinema_core::{
    AspectRatio, CameraAngle, CameraBody, FocalLength, GeneratedImage, ImageSize, LensType,
    ReferenceImage,
};
use cinema_error::{CinemaErrorKind, GeminiErrorKind, StudioErrorKind};
use cinema_studio::{Studio, StudioStatus};
use test_utils::{MockImageGenerator, shot};

#[tokio::test]
async fn test_generate_files_shot_and_reports_capture() -> anyhow::Result<()> {
    let mut studio = Studio::new(MockImageGenerator::new_success());
    let config = shot("a lone detective in rain")
        .camera(CameraBody::ArriAlexa35)
        .lens(LensType::CookeS4)
        .focal_length(FocalLength::Mm85)
        .angle(CameraAngle::ThreeQuarter)
        .aspect_ratio(AspectRatio::Vertical)
        .image_size(ImageSize::TwoK)
        .build()?;

    let captured = studio.generate(&config).await?.clone();

    assert_eq!(captured.original_prompt(), "a lone detective in rain");
    assert_eq!(captured.composed_prompt(), &compose_prompt(&config));
    assert_eq!(captured.settings(), &config.settings());
    assert_eq!(captured.image().mime_type(), "image/png");
    assert_eq!(studio.status(), &StudioStatus::Captured);
    assert_eq!(studio.status().to_string(), "Cut! Shot captured.");
    assert_eq!(studio.reel().len(), 1);
    assert_eq!(studio.reel().latest(), Some(&captured));
    Ok(())
}

#[tokio::test]
async fn test_request_carries_prompt_frame_and_references() -> anyhow::Result<()> {
    let mock = MockImageGenerator::new_success();
    let mut studio = Studio::new(mock.clone());
    let reference = ReferenceImage::new("image/jpeg", vec![0xFF, 0xD8, 0xFF]);
    let config = shot("a violinist on a rooftop")
        .aspect_ratio(AspectRatio::Portrait)
        .image_size(ImageSize::FourK)
        .reference_images(vec![reference.clone()])
        .build()?;

    studio.generate(&config).await?;

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.prompt_text(), &compose_prompt(&config));
    assert_eq!(*req.aspect_ratio(), AspectRatio::Portrait);
    assert_eq!(*req.image_size(), ImageSize::FourK);
    assert_eq!(req.reference_images(), &vec![reference]);
    assert!(req.model().is_none());
    Ok(())
}

#[tokio::test]
async fn test_model_override_reaches_request() -> anyhow::Result<()> {
    let mock = MockImageGenerator::new_success();
    let mut studio = Studio::new(mock.clone()).with_model("gemini-2.5-flash-image");

    studio.generate(&shot("a glass of water").build()?).await?;

    assert_eq!(
        mock.requests()[0].model().as_deref(),
        Some("gemini-2.5-flash-image")
    );
    Ok(())
}

#[tokio::test]
async fn test_blank_subject_is_rejected_before_sending() -> anyhow::Result<()> {
    let mock = MockImageGenerator::new_success();
    let mut studio = Studio::new(mock.clone());

    for subject in ["", "   ", "\n\t"] {
        let err = studio.generate(&shot(subject).build()?).await.unwrap_err();
        match err.kind() {
            CinemaErrorKind::Studio(e) => assert_eq!(e.kind, StudioErrorKind::EmptySubject),
            other => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(mock.call_count(), 0);
    assert_eq!(studio.status(), &StudioStatus::Idle);
    assert!(studio.reel().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_generator_failure_sets_technical_error() -> anyhow::Result<()> {
    let mut studio = Studio::new(MockImageGenerator::new_error(GeminiErrorKind::EmptyResponse));

    let err = studio.generate(&shot("a comet over a desert").build()?).await.unwrap_err();

    assert!(matches!(err.kind(), CinemaErrorKind::Gemini(_)));
    assert_eq!(
        studio.status().to_string(),
        "Technical error: Render interrupted: response contained no candidates"
    );
    assert!(studio.reel().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_rejected_key_points_at_credentials() -> anyhow::Result<()> {
    let mut studio = Studio::new(MockImageGenerator::new_error(GeminiErrorKind::HttpError {
        status_code: 403,
        message: "API key not valid".to_string(),
    }));

    studio.generate(&shot("a red kite").build()?).await.unwrap_err();

    match studio.status() {
        StudioStatus::Failed(message) => {
            assert!(message.starts_with("HTTP 403 error: API key not valid"));
            assert!(message.contains("GEMINI_API_KEY"));
        }
        other => panic!("unexpected status: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_too_many_references_fails_without_sending() -> anyhow::Result<()> {
    let mock = MockImageGenerator::new_success();
    let mut studio = Studio::new(mock.clone());
    let references = (0..4)
        .map(|_| ReferenceImage::new("image/png", vec![0]))
        .collect::<Vec<_>>();

    let err = studio
        .generate(&shot("a crowded market").reference_images(references).build()?)
        .await
        .unwrap_err();

    match err.kind() {
        CinemaErrorKind::Studio(e) => {
            assert_eq!(e.kind, StudioErrorKind::TooManyReferences { count: 4, limit: 3 })
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mock.call_count(), 0);
    assert!(matches!(studio.status(), StudioStatus::Failed(_)));
    Ok(())
}

#[tokio::test]
async fn test_unsupported_reference_format_fails_without_sending() -> anyhow::Result<()> {
    let mock = MockImageGenerator::new_success();
    let mut studio = Studio::new(mock.clone());
    let references = vec![
        ReferenceImage::new("image/heic", vec![0]),
        ReferenceImage::new("image/gif", vec![0x47, 0x49, 0x46]),
    ];

    let err = studio
        .generate(&shot("a paper boat").reference_images(references).build()?)
        .await
        .unwrap_err();

    match err.kind() {
        CinemaErrorKind::Studio(e) => assert_eq!(
            e.kind,
            StudioErrorKind::UnsupportedReferenceFormat("image/gif".to_string())
        ),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mock.call_count(), 0);
    assert_eq!(
        studio.status().to_string(),
        "Technical error: Unsupported reference image format: image/gif"
    );
    Ok(())
}

#[tokio::test]
async fn test_recovery_after_failure_and_newest_first() -> anyhow::Result<()> {
    let jpeg = GeneratedImage::new("image/jpeg", vec![0xFF, 0xD8, 0xFF]);
    let png = GeneratedImage::new("image/png", vec![0x89, 0x50]);
    let mock = MockImageGenerator::new_sequence(vec![
        Ok(jpeg),
        Err(GeminiErrorKind::NoImageInResponse("SAFETY".to_string())),
        Ok(png),
    ]);
    let mut studio = Studio::new(mock.clone());

    studio.generate(&shot("first").build()?).await?;
    studio.generate(&shot("second").build()?).await.unwrap_err();
    assert_eq!(
        studio.status().to_string(),
        "Technical error: Response contained no image data (finish reason: SAFETY)"
    );
    studio.generate(&shot("third").build()?).await?;

    assert_eq!(studio.status(), &StudioStatus::Captured);
    let subjects: Vec<&str> = studio
        .reel()
        .iter()
        .map(|s| s.original_prompt().as_str())
        .collect();
    assert_eq!(subjects, vec!["third", "first"]);
    assert_eq!(mock.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_settings_snapshot_is_detached() -> anyhow::Result<()> {
    let mut studio = Studio::new(MockImageGenerator::new_success());
    let config = shot("a lighthouse")
        .focal_length(FocalLength::Mm18)
        .angle_enabled(false)
        .build()?;

    let id = *studio.generate(&config).await?.id();
    let later = shot("a lighthouse").focal_length(FocalLength::Mm135).build()?;
    studio.generate(&later).await?;

    let first = studio.reel().get(id).expect("first shot still on reel");
    assert_eq!(first.settings().focal_length, FocalLength::Mm18);
    assert_eq!(first.settings().angle, None);
    Ok(())
}

#[tokio::test]
async fn test_delete_and_clear() -> anyhow::Result<()> {
    let mut studio = Studio::new(MockImageGenerator::new_success());
    let first = *studio.generate(&shot("one").build()?).await?.id();
    let second = *studio.generate(&shot("two").build()?).await?.id();

    assert!(studio.delete_shot(first));
    assert!(!studio.delete_shot(first));
    assert_eq!(studio.reel().len(), 1);
    assert!(studio.reel().get(second).is_some());

    studio.clear_reel();
    assert!(studio.reel().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_save_shot_writes_image() -> anyhow::Result<()> {
    let mut studio = Studio::new(MockImageGenerator::new_success());
    let id = *studio.generate(&shot("a cat on a windowsill").build()?).await?.id();
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("shots");

    let path = studio.save_shot(id, &out).await?;

    assert_eq!(path, out.join(format!("{id}.png")));
    assert_eq!(std::fs::read(&path)?, vec![0x89u8, 0x50, 0x4E, 0x47]);
    Ok(())
}

#[tokio::test]
async fn test_save_unknown_shot() -> anyhow::Result<()> {
    let studio = Studio::new(MockImageGenerator::new_success());
    let dir = tempfile::tempdir()?;
    let id = uuid::Uuid::new_v4();

    let err = studio.save_shot(id, dir.path()).await.unwrap_err();

    match err.kind() {
        CinemaErrorKind::Studio(e) => {
            assert_eq!(e.kind, StudioErrorKind::ShotNotFound(id.to_string()))
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}
