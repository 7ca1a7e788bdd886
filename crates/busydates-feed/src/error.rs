//! Error types for feed retrieval and parsing.

use thiserror::Error;

/// Errors raised while retrieving or parsing a calendar feed.
///
/// Every variant is fatal for the run: without a parsable feed there
/// are no events to recover. Per-event problems are handled further
/// down, inside the extractor.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The configured feed URL is not a valid URL.
    #[error("invalid feed url {url:?}: {reason}")]
    InvalidUrl {
        /// The offending value.
        url: String,
        /// Why it failed to parse.
        reason: String,
    },

    /// The HTTP request failed (connection, TLS, timeout).
    #[error("failed to fetch feed: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("feed server returned {status}")]
    Status {
        /// The HTTP status code of the response.
        status: reqwest::StatusCode,
    },

    /// The payload is not a parsable iCalendar document.
    #[error("failed to parse calendar feed: {0}")]
    Parse(String),
}

/// A specialized Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_display_names_the_value() {
        let err = FeedError::InvalidUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("not a url"));
        assert!(display.contains("relative URL"));
    }

    #[test]
    fn status_display_names_the_code() {
        let err = FeedError::Status {
            status: reqwest::StatusCode::FORBIDDEN,
        };
        assert!(format!("{}", err).contains("403"));
    }
}
