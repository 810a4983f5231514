//! HTTP API Client
//!
//! The two calls the client makes: list activities, sign up for one.

use activity_signup::{
    activities_endpoint, interpret_signup_response, Activities, ClientError, ClientResult,
    SignupRequest,
};
use gloo_net::http::Request;

/// Fetch the activity catalogue
pub async fn fetch_activities(api_base: &str) -> ClientResult<Activities> {
    let response = Request::get(&activities_endpoint(api_base))
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::Rejected {
            status,
            detail: None,
        });
    }

    Activities::from_json(&body)
}

/// Sign `request.email` up for `request.activity`.
///
/// Returns the server's confirmation message.
pub async fn submit_signup(api_base: &str, request: &SignupRequest) -> ClientResult<String> {
    let response = Request::post(&request.endpoint(api_base))
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    interpret_signup_response(status, &body)
}
