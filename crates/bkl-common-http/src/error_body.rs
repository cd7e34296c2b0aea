//! Backlog error response bodies.

use reqwest::Response;
use serde::{Deserialize, Deserializer};

/// A single error reported by the Backlog API.
///
/// Missing or `null` fields take their default so that one sparse entry does
/// not hide the messages of the others.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default)]
    pub more_info: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a failed Backlog API call.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub errors: Vec<ApiError>,
}

impl ErrorResponse {
    /// Messages of all errors joined with `"; "`, in order.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Read `response` and summarize the Backlog errors it carries.
///
/// Best effort: a missing response, an unreadable body, a body that is not an
/// error document or one with no entries all yield an empty string. The body
/// is consumed.
pub async fn extract_error_message(response: Option<Response>) -> String {
    let Some(response) = response else {
        return String::new();
    };

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("failed to read error body: {e}");
            return String::new();
        }
    };

    match serde_json::from_slice::<ErrorResponse>(&body) {
        Ok(parsed) => parsed.summary(),
        Err(e) => {
            tracing::debug!("error body is not a Backlog error document: {e}");
            String::new()
        }
    }
}
