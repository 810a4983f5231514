//! Signup requests
//!
//! Builds the two service URLs and interprets signup responses. The HTTP
//! exchange itself lives in the browser app; everything here is pure.

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// A signup for one email on one activity, built at submit time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub activity: String,
}

impl SignupRequest {
    pub fn new(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            activity: activity.into(),
        }
    }

    /// `POST` target, with the activity name and email percent-encoded
    pub fn endpoint(&self, api_base: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            api_base.trim_end_matches('/'),
            urlencoding::encode(&self.activity),
            urlencoding::encode(&self.email)
        )
    }
}

/// `GET` target for the activity catalogue
pub fn activities_endpoint(api_base: &str) -> String {
    format!("{}/activities", api_base.trim_end_matches('/'))
}

#[derive(Debug, Deserialize)]
struct SignupAccepted {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SignupRejected {
    // Usually a string, but validation failures send a list of objects
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Turn a signup response into the confirmation message or an error.
///
/// Any body that is not the expected JSON counts as no answer at all.
pub fn interpret_signup_response(status: u16, body: &str) -> ClientResult<String> {
    if (200..300).contains(&status) {
        let accepted: SignupAccepted = serde_json::from_str(body)?;
        return Ok(accepted.message);
    }

    let rejected: SignupRejected = serde_json::from_str(body)?;
    let detail = rejected
        .detail
        .as_ref()
        .and_then(|d| d.as_str())
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Err(ClientError::Rejected { status, detail })
}
