//! Top-level error wrapper types.

use crate::{ConfigError, FeedError, TuiError};

/// This is the foundation error enum, discriminating errors from each
/// Stargaze crate.
///
/// # Examples
///
/// ```
/// use stargaze_error::{StargazeError, FeedError, FeedErrorKind};
///
/// let feed_err = FeedError::new(FeedErrorKind::Status(500));
/// let err: StargazeError = feed_err.into();
/// assert!(format!("{}", err).contains("Feed Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StargazeErrorKind {
    /// Feed fetch or parse error
    #[from(FeedError)]
    Feed(FeedError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// TUI error
    #[from(TuiError)]
    Tui(TuiError),
}

/// Stargaze error with kind discrimination.
///
/// # Examples
///
/// ```
/// use stargaze_error::{StargazeResult, ConfigError};
///
/// fn might_fail() -> StargazeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Stargaze Error: {}", _0)]
pub struct StargazeError(Box<StargazeErrorKind>);

impl StargazeError {
    /// Create a new error from a kind.
    pub fn new(kind: StargazeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StargazeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StargazeErrorKind
impl<T> From<T> for StargazeError
where
    T: Into<StargazeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Stargaze operations.
///
/// # Examples
///
/// ```
/// use stargaze_error::{StargazeResult, FeedError, FeedErrorKind};
///
/// fn fetch_feed() -> StargazeResult<String> {
///     Err(FeedError::new(FeedErrorKind::Status(404)))?
/// }
/// ```
pub type StargazeResult<T> = std::result::Result<T, StargazeError>;
