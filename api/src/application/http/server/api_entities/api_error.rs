use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bento_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// Body of every error response.
///
/// `code` is stable and machine readable, `message` is meant for the user and
/// `detail` carries the technical reason.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub detail: Option<String>,
    pub status: u16,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{1}")]
    Rejected(StatusCode, String),

    #[error("{0}")]
    Generation(CoreError),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        ApiError::Generation(error)
    }
}

fn generation_status(error: &CoreError) -> (StatusCode, &'static str) {
    match error {
        CoreError::TransportFailure(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "AIとの通信に失敗しました。しばらくしてからもう一度お試しください。",
        ),
        CoreError::MalformedPayload(_) | CoreError::SchemaViolation(_) => (
            StatusCode::BAD_GATEWAY,
            "献立の生成に失敗しました。もう一度お試しください。",
        ),
        CoreError::EmptyExtraction => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "写真から食材が見つかりませんでした。",
        ),
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected(status, _) => *status,
            ApiError::Generation(error) => generation_status(error).0,
        }
    }

    fn body(&self) -> ApiErrorResponse {
        let status = self.status().as_u16();
        match self {
            ApiError::BadRequest(message) => ApiErrorResponse {
                code: "bad_request".to_string(),
                message: message.clone(),
                detail: None,
                status,
            },
            ApiError::Rejected(_, message) => ApiErrorResponse {
                code: "request_rejected".to_string(),
                message: message.clone(),
                detail: None,
                status,
            },
            ApiError::Generation(error) => ApiErrorResponse {
                code: error.kind().to_string(),
                message: generation_status(error).1.to_string(),
                detail: Some(error.to_string()),
                status,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Generation(error) = &self {
            tracing::warn!(kind = error.kind(), "generation failed: {}", error);
        }
        (self.status(), Json(self.body())).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| match e {
                JsonRejection::JsonDataError(_)
                | JsonRejection::JsonSyntaxError(_)
                | JsonRejection::MissingJsonContentType(_) => ApiError::BadRequest(e.body_text()),
                // e.g. 413 when the body exceeds the route's limit
                other => ApiError::Rejected(other.status(), other.body_text()),
            })?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
