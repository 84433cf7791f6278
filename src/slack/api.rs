//! Type definitions and helpers for the Slack Web API.

use super::auth::*;
use serde::Deserialize;

/// The base URL of the Slack API.
pub const API_BASE: &str = "https://slack.com/api";

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client]. The base URL is swappable so that tests can point it at
/// a mock server.
pub struct SlackClient {
    base: String,
    http: reqwest::Client,
}

impl SlackClient {
    pub fn new(base: String) -> Self {
        SlackClient {
            base: base.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a POST request to any Slack API endpoint, handling authentication.
    pub fn post<T: ToString>(&self, path: T, token: &SlackAccessToken) -> reqwest::RequestBuilder {
        self.http
            .post(self.base.to_owned() + &path.to_string())
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(token))
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "channel": "C024BE91L",
///     "ts": "1503435956.000247"
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "channel_not_found"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

/// The universal response in case of an unsuccessful request.
// `ok` is checked on both sides of `APIResult`, otherwise an error body could
// deserialise as a successful response with no fields of interest.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    pub error: String,
}
