//! Feed fetch and parse error types.

/// Feed error kind variants.
///
/// `Transport` and `Status` both count as network failures; `Parse` covers a
/// body that is not valid JSON or whose elements are not feed records. Empty
/// feeds and feeds with no supported items are outcomes, not errors, and are
/// represented by `FeedOutcome` in the feed crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FeedErrorKind {
    /// Request never produced a response (DNS, connect, TLS, read failures)
    #[display("Request failed: {}", _0)]
    Transport(String),
    /// Response arrived with a non-success HTTP status
    #[display("Network response was not ok ({})", _0)]
    Status(u16),
    /// Response body was not parseable as a feed
    #[display("Failed to parse feed: {}", _0)]
    Parse(String),
}

/// Feed error with source location tracking.
///
/// # Examples
///
/// ```
/// use stargaze_error::{FeedError, FeedErrorKind};
///
/// let err = FeedError::new(FeedErrorKind::Status(404));
/// assert!(format!("{}", err).contains("404"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Feed Error: {} at line {} in {}", kind, line, file)]
pub struct FeedError {
    /// Error kind
    pub kind: FeedErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl FeedError {
    /// Create a new FeedError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FeedErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Short message suitable for the gallery error placeholder, without the
    /// source-location noise of the full `Display` output.
    pub fn user_message(&self) -> String {
        self.kind.to_string()
    }
}

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
