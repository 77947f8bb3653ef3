//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GeminiError, JsonError, StudioError, TaxonomyError};

/// Every error a Cinema Studio crate can surface.
///
/// # Examples
///
/// ```
/// use cinema_error::{CinemaError, ConfigError};
///
/// let config_err = ConfigError::new("Missing model name");
/// let err: CinemaError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CinemaErrorKind {
    /// A value outside one of the closed shot catalogs
    #[from(TaxonomyError)]
    Taxonomy(TaxonomyError),
    /// Gemini image generation error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Studio session error
    #[from(StudioError)]
    Studio(StudioError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Cinema Studio error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cinema_error::{CinemaErrorKind, CinemaResult, StudioError, StudioErrorKind};
///
/// fn might_fail() -> CinemaResult<()> {
///     Err(StudioError::new(StudioErrorKind::EmptySubject))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), CinemaErrorKind::Studio(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cinema Error: {}", _0)]
pub struct CinemaError(Box<CinemaErrorKind>);

impl CinemaError {
    /// Create a new error from a kind.
    pub fn new(kind: CinemaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CinemaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CinemaErrorKind
impl<T> From<T> for CinemaError
where
    T: Into<CinemaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Cinema Studio operations.
pub type CinemaResult<T> = std::result::Result<T, CinemaError>;
