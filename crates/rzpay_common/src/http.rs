// --- File: crates/rzpay_common/src/http.rs ---
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::warn;

use crate::error::{HttpStatusCode, RzpayError};

pub mod client;

/// Extension trait for RzpayError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for RzpayError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({ "error": self.client_message() }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for RzpayError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// JSON body extractor whose rejections are `400 {"error": "Cannot parse JSON"}`.
///
/// Axum's own `Json` answers with 415 or 422 depending on what went wrong;
/// clients of this service expect a single 400 for every undecodable body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RzpayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                let detail = rejection.body_text();
                warn!("rejecting request body: {}", detail);
                Err(RzpayError::ParseError(detail))
            }
        }
    }
}
