//! Provider invocation error types.

/// Specific error conditions raised while talking to a vendor service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// The descriptor carried an empty credential
    #[display("API key is missing")]
    MissingCredential,
    /// No implementation is registered under this provider name
    #[display("Unsupported provider '{}'", _0)]
    UnsupportedProvider(String),
    /// The outbound request could not be assembled
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Network-level failure (DNS, connect, TLS, body read)
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// The vendor rejected the credential (401/403)
    #[display("Authentication rejected (status {}): {}", status, message)]
    Authentication {
        /// HTTP status code
        status: u16,
        /// Error body returned by the vendor
        message: String,
    },
    /// The vendor throttled the request (429)
    #[display("Rate limit exceeded: {}", _0)]
    RateLimited(String),
    /// Any other non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the vendor
        message: String,
    },
    /// The vendor payload did not have the expected shape
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
    /// The vendor declined to generate content
    #[display("Content blocked by provider policy: {}", reason)]
    PolicyRejected {
        /// Vendor reason code, e.g. `SAFETY`
        reason: String,
    },
}

impl ProviderErrorKind {
    /// Classify a non-success HTTP status into an error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use wonka_error::ProviderErrorKind;
    ///
    /// let kind = ProviderErrorKind::from_status(429, "slow down");
    /// assert!(matches!(kind, ProviderErrorKind::RateLimited(_)));
    /// ```
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => ProviderErrorKind::Authentication { status, message },
            429 => ProviderErrorKind::RateLimited(message),
            _ => ProviderErrorKind::Api { status, message },
        }
    }

    /// Returns true when the vendor refused the request on policy grounds.
    pub fn is_policy_rejection(&self) -> bool {
        matches!(self, ProviderErrorKind::PolicyRejected { .. })
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use wonka_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::PolicyRejected {
///     reason: "SAFETY".to_string(),
/// });
/// assert!(format!("{}", err).contains("SAFETY"));
/// ```
#[derive(Debug, Clone)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Provider Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ProviderError {}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
