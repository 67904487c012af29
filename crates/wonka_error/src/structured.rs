//! Structured output decoding errors.

/// Reasons a completion could not be read as a list of items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StructuredErrorKind {
    /// The text is not valid JSON
    #[display("Invalid JSON: {}", _0)]
    InvalidJson(String),
    /// The JSON is valid but not an array of objects
    #[display("Expected a JSON array of objects, found {}", _0)]
    UnexpectedShape(String),
    /// The array parsed but contained no items
    #[display("The list contains no items")]
    EmptyList,
    /// An item had no usable title
    #[display("Item {} has no title", _0)]
    MissingTitle(usize),
}

/// Structured decoding error with source location tracking.
#[derive(Debug, Clone)]
pub struct StructuredError {
    /// The kind of error that occurred
    pub kind: StructuredErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StructuredError {
    /// Create a new StructuredError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StructuredErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Structured Output Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for StructuredError {}
