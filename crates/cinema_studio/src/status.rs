//! The studio's one-line status.

use cinema_error::{CinemaError, CinemaErrorKind, GeminiErrorKind};

/// What the studio is doing, as shown to the user.
///
/// # Examples
///
/// ```
/// use cinema_studio::StudioStatus;
///
/// assert_eq!(StudioStatus::Developing.to_string(), "Developing negative...");
/// assert_eq!(
///     StudioStatus::Failed("quota exceeded".into()).to_string(),
///     "Technical error: quota exceeded"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::Display)]
pub enum StudioStatus {
    /// Nothing requested yet
    #[default]
    #[display("Ready")]
    Idle,
    /// Waiting on the image model
    #[display("Developing negative...")]
    Developing,
    /// Last request produced a shot
    #[display("Cut! Shot captured.")]
    Captured,
    /// Last request failed
    #[display("Technical error: {}", _0)]
    Failed(String),
}

/// Short user-facing description of a failure.
///
/// Drops source locations and wrapper prefixes, and points credential
/// failures at the API key.
pub fn failure_message(err: &CinemaError) -> String {
    match err.kind() {
        CinemaErrorKind::Gemini(e)
            if e.kind.is_auth_failure() && e.kind != GeminiErrorKind::MissingApiKey =>
        {
            format!("{} (check GEMINI_API_KEY)", e.kind)
        }
        CinemaErrorKind::Gemini(e) => e.kind.to_string(),
        CinemaErrorKind::Studio(e) => e.kind.to_string(),
        CinemaErrorKind::Taxonomy(e) => e.kind.to_string(),
        CinemaErrorKind::Builder(e) => e.kind().to_string(),
        CinemaErrorKind::Config(e) => e.message.clone(),
        CinemaErrorKind::Json(e) => e.message.clone(),
    }
}
