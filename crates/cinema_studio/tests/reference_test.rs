//! Tests for loading reference images.

use cinema_error::{CinemaErrorKind, StudioErrorKind};
use cinema_studio::{load_reference, mime_type_for};

#[test]
fn test_mime_types_by_extension() {
    assert_eq!(mime_type_for("a.png"), Some("image/png"));
    assert_eq!(mime_type_for("a.jpeg"), Some("image/jpeg"));
    assert_eq!(mime_type_for("a.JPG"), Some("image/jpeg"));
    assert_eq!(mime_type_for("dir/a.webp"), Some("image/webp"));
    assert_eq!(mime_type_for("a.gif"), None);
    assert_eq!(mime_type_for("no_extension"), None);
}

#[tokio::test]
async fn test_load_reference_reads_bytes() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("mood.jpg");
    std::fs::write(&path, [0xFFu8, 0xD8, 0xFF])?;

    let image = load_reference(&path).await?;

    assert_eq!(image.mime_type(), "image/jpeg");
    assert_eq!(image.data(), &vec![0xFFu8, 0xD8, 0xFF]);
    assert_eq!(image.to_base64(), "/9j/");
    Ok(())
}

#[tokio::test]
async fn test_load_reference_errors() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let text = dir.path().join("notes.txt");
    std::fs::write(&text, "not an image")?;

    for path in [text, dir.path().join("missing.png")] {
        let err = load_reference(&path).await.unwrap_err();
        match err.kind() {
            CinemaErrorKind::Studio(e) => {
                assert!(matches!(e.kind, StudioErrorKind::ReferenceRead(_)))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    Ok(())
}
