use thiserror::Error;

/// Fallback text when the server gave no usable detail.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(String),

    /// The bearer token was missing, expired or rejected.
    #[error("Unauthorized: {}", .detail.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Unauthorized { detail: Option<String> },

    /// Validation or business rule rejected by the server.
    #[error("Server error {status}: {}", .detail.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Server { status: u16, detail: Option<String> },

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-success status, pulling `detail` out of a JSON body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = detail_from_body(body);
        if status == 401 {
            ApiError::Unauthorized { detail }
        } else {
            ApiError::Server { status, detail }
        }
    }

    /// Text shown to the user: the server's detail verbatim, or a generic message.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Server { detail, .. } => {
                detail.as_deref().unwrap_or(UNKNOWN_ERROR)
            }
            ApiError::Transport(_) | ApiError::Decode(_) => UNKNOWN_ERROR,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        // Validation errors come back as a list of objects with a `msg` field.
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
