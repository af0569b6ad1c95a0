//! Crate error type
//!
//! Validation failures and request failures are ordinary data carried inside
//! `Result` and [`RemoteData`](crate::RemoteData); they never surface here.
//! `Error` only covers misuse detected while *building* a validator.

use thiserror::Error;

/// Failure to construct a validator.
#[derive(Debug, Error)]
pub enum Error {
    /// A pattern source did not compile to a regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// Why the regex engine rejected it.
        #[source]
        source: regex::Error,
    },
}

/// Result alias for validator construction.
pub type Result<T> = std::result::Result<T, Error>;
