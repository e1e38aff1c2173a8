use axum::extract::State;
use bento_core::domain::menu::{
    ports::MenuService,
    value_objects::{AnalyzeImageInput, MenuInputs},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    menu::validators::{AnalyzeImageRequest, strip_data_url},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedItems {
    /// Items read from the photo, comma separated
    pub items: String,
    /// `current` with the items appended
    pub merged: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub data: ExtractedItems,
}

#[utoipa::path(
    post,
    path = "/extractions",
    tag = "menu",
    summary = "Read ingredients from a photo",
    description = "Reads ingredient names from a receipt or produce photo using LLM vision",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeImageRequest>,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let target = payload
        .extraction_target()
        .ok_or_else(|| ApiError::BadRequest("Missing target or field".to_string()))?;

    let items = state
        .service
        .analyze_image(AnalyzeImageInput {
            image_base64: strip_data_url(&payload.image_base64).to_string(),
            media_type: payload.media_type,
            target,
        })
        .await
        .map_err(ApiError::from)?;

    let merged = MenuInputs::merge_field(&payload.current, &items);

    Ok(Response::OK(AnalyzeImageResponse {
        data: ExtractedItems { items, merged },
    }))
}
