use thiserror::Error;

/// Failure taxonomy for the whole pipeline.
///
/// Every variant is fatal for the run: there is no alternate join key when
/// the catalog drifts, and a partially resolved perk set would corrupt
/// matching without warning. Row-level lookup misses are deliberately NOT
/// errors; they are skip records on the diagnostic channel.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// An expected category, column, or structural field is absent.
    #[error("Schema drift: {0}")]
    SchemaDrift(String),
    /// A socket or plug item references an identifier absent from its table.
    #[error("Missing reference: {0}")]
    MissingReference(String),
    /// Transport, HTTP, or envelope failure while pulling reference data.
    #[error("Fetch failed: {0}")]
    Fetch(String),
    /// The spreadsheet export is malformed beyond repair.
    #[error("Sheet error: {0}")]
    Sheet(String),
    /// Missing or contradictory environment configuration.
    #[error("Config error: {0}")]
    Config(String),
    /// Local filesystem failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for WishlistError {
    fn from(error: std::io::Error) -> Self {
        WishlistError::Io(error.to_string())
    }
}

impl From<reqwest::Error> for WishlistError {
    fn from(error: reqwest::Error) -> Self {
        WishlistError::Fetch(error.to_string())
    }
}

pub type WishlistResult<T> = Result<T, WishlistError>;
