//! GBFS feed error types.

/// Errors that can occur when fetching a GBFS feed.
///
/// Callers of the board treat every variant the same way (the feed is
/// unavailable); the variants exist so logs say why.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Transport failure: connect, timeout, or reading the body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any status other than 200 OK
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// 200 OK with nothing (or JSON `null`) in the body
    #[error("empty response body")]
    EmptyBody,

    /// Body is not well-formed JSON
    #[error("JSON parse error: {message} (body: {body})")]
    Json { message: String, body: String },

    /// The configured client identifier is not a valid header value
    #[error("invalid client identifier header: {value:?}")]
    InvalidHeader { value: String },

    /// A mock feed file could not be read
    #[error("mock feed error: {message}")]
    Mock { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::Status { status: 503 };
        assert_eq!(err.to_string(), "unexpected status 503");

        let err = FeedError::EmptyBody;
        assert_eq!(err.to_string(), "empty response body");

        let err = FeedError::Json {
            message: "expected value at line 1 column 1".into(),
            body: "<html>".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("<html>"));
    }
}
