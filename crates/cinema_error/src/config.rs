//! Configuration errors.

/// Failure to load or interpret studio configuration.
///
/// `origin` names the file or layer that was being read, when known.
///
/// # Examples
///
/// ```
/// use cinema_error::ConfigError;
///
/// let err = ConfigError::new("unknown camera 'BOLEX'").with_origin("./cinema.toml");
/// assert_eq!(err.origin.as_deref(), Some("./cinema.toml"));
/// assert!(err.to_string().contains("(./cinema.toml)"));
/// ```
#[derive(Debug, Clone, derive_more::Error)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Config file or layer involved
    pub origin: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            origin: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the config file or layer the error came from.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration Error: {}", self.message)?;
        if let Some(origin) = &self.origin {
            write!(f, " ({})", origin)?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}
