use std::fmt::Display;

use reqwest::StatusCode;

/// Error envelope returned by the gateway on non-2xx responses.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug)]
pub enum GatewayError {
    Request(reqwest::Error),
    Gateway(ErrorDetail),
    Status { status: StatusCode, body: String },
    Decode(serde_json::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(value)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<ErrorBody> for GatewayError {
    fn from(value: ErrorBody) -> Self {
        Self::Gateway(value.error)
    }
}

impl std::error::Error for GatewayError {}

impl Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Request(e) => write!(f, "http request error: {e}"),
            GatewayError::Gateway(detail) => {
                write!(f, "{}: {}", detail.code, detail.description)?;
                if let Some(field) = &detail.field {
                    write!(f, " (field: {field})")?;
                }
                Ok(())
            }
            GatewayError::Status { status, body } => {
                write!(f, "unexpected gateway status {status}: {body}")
            }
            GatewayError::Decode(e) => write!(f, "gateway response deserialization: {e}"),
        }
    }
}
