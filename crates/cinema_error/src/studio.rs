//! Studio session error types.

/// Kinds of studio errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StudioErrorKind {
    /// Generation requested without a scene description
    #[display("Scene description is empty")]
    EmptySubject,
    /// No shot with the given id in the reel
    #[display("Shot not found: {}", _0)]
    ShotNotFound(String),
    /// Reference image could not be loaded
    #[display("Failed to read reference image: {}", _0)]
    ReferenceRead(String),
    /// Generated image could not be written
    #[display("Failed to write shot: {}", _0)]
    OutputWrite(String),
    /// Reference image in a format the provider does not accept
    #[display("Unsupported reference image format: {}", _0)]
    UnsupportedReferenceFormat(String),
    /// More reference images than the provider accepts
    #[display("Too many reference images: {} (limit {})", count, limit)]
    TooManyReferences {
        /// Images attached
        count: usize,
        /// Provider limit
        limit: usize,
    },
}

/// Studio error with location tracking.
///
/// # Examples
///
/// ```
/// use cinema_error::{StudioError, StudioErrorKind};
///
/// let err = StudioError::new(StudioErrorKind::ShotNotFound("abc".to_string()));
/// assert!(format!("{}", err).contains("Shot not found: abc"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Studio Error: {} at line {} in {}", kind, line, file)]
pub struct StudioError {
    /// The kind of error that occurred
    pub kind: StudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StudioError {
    /// Create a new studio error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
