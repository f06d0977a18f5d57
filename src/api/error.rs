use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::gateway::GatewayError;

/// Every failure ends the request with a 500 and a plain-text message.
#[derive(Debug)]
pub enum ApiError {
    LoadTemplate(std::io::Error),
    RenderTemplate(tera::Error),
    CreateOrder(GatewayError),
    /// Unreachable while `Order` wraps a `serde_json::Value`; kept for typed orders.
    MarshalOrder(serde_json::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::LoadTemplate(_) => f.write_str("Error loading template"),
            ApiError::RenderTemplate(_) => f.write_str("Error executing template"),
            ApiError::CreateOrder(e) => write!(f, "Error creating order: {e}"),
            ApiError::MarshalOrder(e) => write!(f, "Error marshalling order: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::LoadTemplate(e) => Some(e),
            ApiError::RenderTemplate(e) => Some(e),
            ApiError::CreateOrder(e) => Some(e),
            ApiError::MarshalOrder(e) => Some(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::LoadTemplate(err) => tracing::error!(?err, "template_load"),
            ApiError::RenderTemplate(err) => tracing::error!(?err, "template_render"),
            ApiError::CreateOrder(err) => tracing::error!(%err, "order_create"),
            ApiError::MarshalOrder(err) => tracing::error!(?err, "order_marshal"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
