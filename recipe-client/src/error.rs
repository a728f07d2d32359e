use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl RecipeClientError {
    pub async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        RecipeClientError::Http { status, message }
    }

    /// Error code reported by the backend in `{"error": {"message": CODE}}`.
    pub fn backend_code(&self) -> Option<String> {
        match self {
            RecipeClientError::Http { message, .. } => {
                serde_json::from_str::<ErrorEnvelope>(message)
                    .ok()
                    .map(|envelope| envelope.error.message)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_code_is_read_from_error_body() {
        let err = RecipeClientError::Http {
            status: 400,
            message: r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#.to_string(),
        };
        assert_eq!(err.backend_code().as_deref(), Some("EMAIL_EXISTS"));
    }

    #[test]
    fn backend_code_is_absent_for_plain_text_body() {
        let err = RecipeClientError::Http {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.backend_code(), None);
        assert_eq!(RecipeClientError::Unauthorized.backend_code(), None);
    }
}
