use crate::application::error::ApplicationError;
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a reqwest failure (connect, timeout, body read) to a transport error.
pub fn map_reqwest(err: reqwest::Error) -> ApplicationError {
    if err.is_timeout() {
        ApplicationError::transport("request timed out")
    } else if err.is_connect() {
        ApplicationError::transport(format!("could not reach backend: {err}"))
    } else {
        ApplicationError::transport(err.to_string())
    }
}

/// Describe a non-success response. Uses the `message` of an
/// `{error, message}` body when the server sent one.
pub fn status_message(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) if !parsed.message.trim().is_empty() => {
            format!("request failed with status code {}: {}", status.as_u16(), parsed.message)
        }
        _ => format!("request failed with status code {}", status.as_u16()),
    }
}
