//! JSON output errors.

/// Failure to render studio data as JSON.
///
/// # Examples
///
/// ```
/// use cinema_error::JsonError;
///
/// let err = JsonError::new("lens catalog", "key must be a string");
/// assert!(err.to_string().starts_with("JSON Error: lens catalog: key must be a string"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {}: {} at line {} in {}", subject, message, line, file)]
pub struct JsonError {
    /// What was being serialized
    pub subject: String,
    /// Serializer message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError at the current location.
    #[track_caller]
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            subject: subject.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
