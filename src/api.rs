// API client module: a small blocking HTTP client for the two webhook
// endpoints this tool knows about. Kept synchronous on purpose; each
// invocation performs at most one request, so there is nothing to overlap.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::ui::Progress;

/// Hard limit on message length, counted in characters.
pub const MAX_MESSAGE_CHARS: usize = 600;

/// Fixed timeout applied to every request; there are no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("message cannot exceed 600 characters")]
    MessageTooLong,

    #[error("could not send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response code: {status}, response: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

/// Payload for the send-message endpoint. Serialized with serde, so
/// newlines, quotes and backslashes in the message all arrive properly
/// escaped (the endpoint sees `\n` for each literal newline).
#[derive(Debug, Serialize)]
pub struct SendMessagePayload<'a> {
    pub message: &'a str,
}

/// Check a message against the endpoint's limits: non-empty and at most
/// [`MAX_MESSAGE_CHARS`] characters. Character count, not byte count, so
/// multibyte text is measured the way a person would count it.
pub fn validate_message(message: &str) -> Result<(), ApiError> {
    if message.is_empty() {
        return Err(ApiError::EmptyMessage);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::MessageTooLong);
    }
    Ok(())
}

/// Blocking client for the webhook API. Holds a reqwest client, the base
/// URL and the bearer token taken from the loaded config.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Build a client from a loaded config.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(ApiClient {
            client,
            base_url: config.api_url.clone(),
            token: config.bearer_token.clone(),
        })
    }

    /// POST the message to `/send-message`. Validation runs before the
    /// pacing spinner, so bad input fails immediately.
    pub fn send_message(&self, message: &str, progress: &Progress) -> Result<(), ApiError> {
        validate_message(message)?;

        let url = format!("{}/send-message", self.base_url);
        progress.pace("Sending");

        let res = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&SendMessagePayload { message })
            .send()?;
        Self::expect_ok(res)
    }

    /// GET `/reload`. What the endpoint reloads is its own business.
    pub fn reload(&self, progress: &Progress) -> Result<(), ApiError> {
        let url = format!("{}/reload", self.base_url);
        progress.pace("Reload");

        let res = self.client.get(url).bearer_auth(&self.token).send()?;
        Self::expect_ok(res)
    }

    /// Anything other than 200 is a failure; the whole response body goes
    /// into the error so the user sees what the server said.
    fn expect_ok(res: Response) -> Result<(), ApiError> {
        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(url: &str) -> Config {
        Config {
            bearer_token: "test-token".into(),
            api_url: url.into(),
        }
    }

    #[test]
    fn accepts_lengths_in_range() {
        assert!(validate_message("a").is_ok());
        assert!(validate_message(&"x".repeat(600)).is_ok());
    }

    #[test]
    fn rejects_empty_message() {
        assert!(matches!(validate_message(""), Err(ApiError::EmptyMessage)));
    }

    #[test]
    fn rejects_oversized_message() {
        let message = "x".repeat(601);
        assert!(matches!(
            validate_message(&message),
            Err(ApiError::MessageTooLong)
        ));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 600 three-byte characters: 1800 bytes but exactly at the limit.
        let message = "あ".repeat(600);
        assert!(validate_message(&message).is_ok());
    }

    #[test]
    fn payload_escapes_newlines() {
        let json = serde_json::to_string(&SendMessagePayload {
            message: "line one\nline two",
        })
        .unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(json, r#"{"message":"line one\nline two"}"#);
    }

    #[test]
    fn payload_escapes_quotes() {
        let json = serde_json::to_string(&SendMessagePayload {
            message: r#"say "hi""#,
        })
        .unwrap();
        assert_eq!(json, r#"{"message":"say \"hi\""}"#);
    }

    #[test]
    fn send_message_posts_with_auth_and_json() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/send-message")
            .match_header("authorization", "Bearer test-token")
            .match_header("content-type", "application/json")
            .match_body(r#"{"message":"hello"}"#)
            .with_status(200)
            .create();

        let api = ApiClient::new(&test_config(&server.url())).unwrap();
        api.send_message("hello", &Progress::Silent).unwrap();
        mock.assert();
    }

    #[test]
    fn reload_gets_with_auth() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/reload")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .create();

        let api = ApiClient::new(&test_config(&server.url())).unwrap();
        api.reload(&Progress::Silent).unwrap();
        mock.assert();
    }

    #[test]
    fn send_message_surfaces_status_and_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/send-message")
            .with_status(500)
            .with_body("boom")
            .create();

        let api = ApiClient::new(&test_config(&server.url())).unwrap();
        match api.send_message("hello", &Progress::Silent).unwrap_err() {
            ApiError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reload_surfaces_status_and_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/reload")
            .with_status(500)
            .with_body("boom")
            .create();

        let api = ApiClient::new(&test_config(&server.url())).unwrap();
        match api.reload(&Progress::Silent).unwrap_err() {
            ApiError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unreachable_server_is_a_transport_error() {
        // Nothing listens on the discard port.
        let api = ApiClient::new(&test_config("http://127.0.0.1:9")).unwrap();
        let err = api.reload(&Progress::Silent).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
