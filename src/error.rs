//! Error types for ferro-nexus
//!
//! Two error kinds reach the search workflow and are shown to the user:
//! - [`NexusError::InvalidInput`]: the identifier failed validation and no
//!   request was made
//! - [`NexusError::NoResult`]: the annotation source rejected the identifier
//!   or returned nothing usable
//!
//! The remaining variants cover client construction, configuration and I/O.
//! Missing annotation fields are not errors at all; they resolve to `"N/A"`.

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Input errors (E1xxx)
    /// Empty or whitespace-only input
    EmptyInput = 1001,
    /// Unknown or missing chromosome
    InvalidChromosome = 1002,
    /// Missing or wrong coordinate prefix (expected `g.`)
    InvalidPrefix = 1003,
    /// Invalid position or range
    InvalidPosition = 1004,
    /// Invalid edit
    InvalidEdit = 1005,
    /// Trailing characters after a complete variant
    TrailingInput = 1006,

    // Lookup errors (E2xxx)
    /// No annotation found for the variant
    NoResult = 2001,

    // Ambient errors (E9xxx)
    /// HTTP client error
    HttpError = 9001,
    /// JSON parsing error
    JsonError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// File IO error
    IoError = 9004,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::EmptyInput => "empty input",
            ErrorCode::InvalidChromosome => "invalid chromosome",
            ErrorCode::InvalidPrefix => "expected genomic coordinate prefix",
            ErrorCode::InvalidPosition => "invalid position or range",
            ErrorCode::InvalidEdit => "invalid edit",
            ErrorCode::TrailingInput => "unexpected trailing characters",
            ErrorCode::NoResult => "no annotation found",
            ErrorCode::HttpError => "HTTP error",
            ErrorCode::JsonError => "JSON parsing error",
            ErrorCode::ConfigError => "configuration error",
            ErrorCode::IoError => "file I/O error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A span in the source input indicating error location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceSpan {
    /// Starting byte offset (0-indexed)
    pub start: usize,
    /// Ending byte offset (exclusive)
    pub end: usize,
}

impl SourceSpan {
    /// Create a new source span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Format the source with the error highlighted
    ///
    /// ```text
    /// 17:g.41242962_4124296insGA
    ///                    ^~~~~~~
    /// ```
    pub fn highlight(&self, source: &str) -> String {
        if source.is_empty() {
            return String::new();
        }

        let safe_start = self.start.min(source.len());
        let safe_end = self.end.min(source.len()).max(safe_start);

        let mut pointer = " ".repeat(safe_start);
        pointer.push('^');
        if safe_end > safe_start + 1 {
            pointer.push_str(&"~".repeat(safe_end - safe_start - 1));
        }

        format!("{}\n{}", source, pointer)
    }
}

/// Diagnostic information for an error
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostic {
    /// Error code
    pub code: Option<ErrorCode>,
    /// Source span for highlighting
    pub span: Option<SourceSpan>,
    /// The original input (for error display)
    pub source: Option<String>,
    /// Helpful hint
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a new empty diagnostic
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a source span
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Add the original source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Format the diagnostic as a detailed error message
    pub fn format(&self, primary_message: &str) -> String {
        let mut result = String::new();

        if let Some(code) = &self.code {
            result.push_str(&format!("[{}] ", code));
        }

        result.push_str(primary_message);

        if let (Some(span), Some(source)) = (&self.span, &self.source) {
            result.push_str("\n\n");
            result.push_str(&span.highlight(source));
        }

        if let Some(hint) = &self.hint {
            result.push_str("\n\nHint: ");
            result.push_str(hint);
        }

        result
    }
}

/// Main error type for ferro-nexus operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NexusError {
    /// The variant identifier is not well-formed
    #[error("Invalid variant '{input}' at position {pos}: {msg}")]
    InvalidInput {
        input: String,
        pos: usize,
        msg: String,
        /// Optional diagnostic with additional context
        diagnostic: Option<Box<Diagnostic>>,
    },

    /// The annotation source has nothing for this variant
    #[error("No annotation found for {variant}: {reason}")]
    NoResult { variant: String, reason: String },

    /// HTTP client error
    #[error("HTTP error: {msg}")]
    Http { msg: String },

    /// JSON parsing error
    #[error("JSON error: {msg}")]
    Json { msg: String },

    /// Configuration error
    #[error("Configuration error: {msg}")]
    Config { msg: String },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },
}

impl NexusError {
    /// Create an input error with diagnostic information
    pub fn invalid_input(
        input: impl Into<String>,
        pos: usize,
        msg: impl Into<String>,
        diagnostic: Diagnostic,
    ) -> Self {
        NexusError::InvalidInput {
            input: input.into(),
            pos,
            msg: msg.into(),
            diagnostic: Some(Box::new(diagnostic)),
        }
    }

    /// Create a no-result error
    pub fn no_result(variant: impl Into<String>, reason: impl Into<String>) -> Self {
        NexusError::NoResult {
            variant: variant.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code if available
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            NexusError::InvalidInput {
                diagnostic: Some(d),
                ..
            } => d.code,
            NexusError::InvalidInput { .. } => None,
            NexusError::NoResult { .. } => Some(ErrorCode::NoResult),
            NexusError::Http { .. } => Some(ErrorCode::HttpError),
            NexusError::Json { .. } => Some(ErrorCode::JsonError),
            NexusError::Config { .. } => Some(ErrorCode::ConfigError),
            NexusError::Io { .. } => Some(ErrorCode::IoError),
        }
    }

    /// Whether this error was raised before any request was made
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, NexusError::InvalidInput { .. })
    }

    /// Get a formatted error with full diagnostic output
    pub fn detailed_message(&self) -> String {
        match self {
            NexusError::InvalidInput {
                diagnostic: Some(d),
                ..
            } => d.format(&self.to_string()),
            _ => self.to_string(),
        }
    }
}

impl From<std::io::Error> for NexusError {
    fn from(err: std::io::Error) -> Self {
        NexusError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for NexusError {
    fn from(err: serde_json::Error) -> Self {
        NexusError::Json {
            msg: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NexusError {
    fn from(err: toml::de::Error) -> Self {
        NexusError::Config {
            msg: err.to_string(),
        }
    }
}

#[cfg(feature = "genome-nexus")]
impl From<reqwest::Error> for NexusError {
    fn from(err: reqwest::Error) -> Self {
        NexusError::Http {
            msg: err.to_string(),
        }
    }
}
