use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Configured base URL cannot have path segments appended to it
    ///
    /// Happens for URLs such as `mailto:` or `data:` that are not hierarchical.
    #[error("Base URL '{0}' cannot be used to build API request paths")]
    UrlCannotBeABase(String),
}
