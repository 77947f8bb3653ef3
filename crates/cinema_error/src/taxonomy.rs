//! Contract violations against the closed shot catalogs.

/// A value that does not belong to one of the closed catalogs.
///
/// These only arise where free text or integers cross into the typed core
/// (CLI arguments, config files, deserialized payloads). Once a value is a
/// catalog type it can no longer miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TaxonomyErrorKind {
    /// Camera body identifier not in the catalog
    #[display("Unknown camera body: {}", _0)]
    UnknownCamera(String),
    /// Lens identifier not in the catalog
    #[display("Unknown lens type: {}", _0)]
    UnknownLens(String),
    /// Camera angle identifier not in the catalog
    #[display("Unknown camera angle: {}", _0)]
    UnknownAngle(String),
    /// Focal length outside {8, 12, 18, 25, 35, 50, 75, 85, 100, 135}
    #[display("Unsupported focal length: {}mm", _0)]
    UnsupportedFocalLength(u16),
    /// Focal length text that is not a number of millimeters
    #[display("Malformed focal length: {}", _0)]
    MalformedFocalLength(String),
    /// Aspect ratio not in the catalog
    #[display("Unknown aspect ratio: {}", _0)]
    UnknownAspectRatio(String),
    /// Output size not in the catalog
    #[display("Unknown image size: {}", _0)]
    UnknownImageSize(String),
}

/// Taxonomy error with source location tracking.
///
/// # Examples
///
/// ```
/// use cinema_error::{TaxonomyError, TaxonomyErrorKind};
///
/// let err = TaxonomyError::new(TaxonomyErrorKind::UnsupportedFocalLength(40));
/// assert!(format!("{}", err).contains("40mm"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Taxonomy Error: {} at line {} in {}", kind, line, file)]
pub struct TaxonomyError {
    /// The kind of error that occurred
    pub kind: TaxonomyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TaxonomyError {
    /// Create a new TaxonomyError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TaxonomyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
