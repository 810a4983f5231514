//! Client error types
//!
//! Every failure the client can hit while talking to the signup service or
//! the browser's storage. All of them are recovered at the call site and
//! turned into a user-facing message; none is fatal.

use thiserror::Error;

/// Shown when the activity list cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";

/// Shown when a signup gets no usable response.
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";

/// Shown when the service rejects a signup without saying why.
pub const GENERIC_REJECTION_MESSAGE: &str = "An error occurred";

/// Errors that can occur in the client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// No response was received (connection refused, DNS, CORS, offline)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        detail: Option<String>,
    },

    /// The response body was not the JSON we expected
    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    /// Browser storage refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::MalformedBody(err.to_string())
    }
}

impl ClientError {
    /// Message to show after a failed signup.
    ///
    /// Server-provided detail wins; a rejection without detail gets the
    /// generic text; anything where we never got a readable answer is
    /// reported as a failed signup.
    pub fn signup_message(&self) -> String {
        match self {
            ClientError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::Rejected { detail: None, .. } => GENERIC_REJECTION_MESSAGE.to_string(),
            ClientError::Network(_) | ClientError::MalformedBody(_) | ClientError::Storage(_) => {
                SIGNUP_FAILED_MESSAGE.to_string()
            }
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Network("offline".to_string());
        assert_eq!(err.to_string(), "Network error: offline");

        let err = ClientError::Rejected {
            status: 404,
            detail: Some("Activity not found".to_string()),
        };
        assert_eq!(err.to_string(), "Request rejected with status 404");
    }

    #[test]
    fn test_signup_message_prefers_detail() {
        let err = ClientError::Rejected {
            status: 400,
            detail: Some("Activity full".to_string()),
        };
        assert_eq!(err.signup_message(), "Activity full");
    }

    #[test]
    fn test_signup_message_fallbacks() {
        let err = ClientError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(err.signup_message(), GENERIC_REJECTION_MESSAGE);

        let err = ClientError::Network("timeout".to_string());
        assert_eq!(err.signup_message(), SIGNUP_FAILED_MESSAGE);

        let err = ClientError::MalformedBody("expected value".to_string());
        assert_eq!(err.signup_message(), SIGNUP_FAILED_MESSAGE);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::MalformedBody(_)));
        assert_eq!(err.signup_message(), SIGNUP_FAILED_MESSAGE);
    }
}
