use axum::extract::State;
use bento_core::domain::menu::{
    entities::GenerationResult, ports::MenuService, value_objects::GenerateMenuInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    menu::validators::GenerateMenuRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateMenuResponse {
    pub data: GenerationResult,
}

#[utoipa::path(
    post,
    path = "/menus",
    tag = "menu",
    summary = "Generate a bento menu",
    description = "Generates either a five-weekday bento plan or five standalone menu ideas from the given ingredients. With no ingredients and no vegetables a week plan always includes a shopping list.",
    request_body = GenerateMenuRequest,
    responses(
        (status = 200, body = GenerateMenuResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse)
    ),
)]
pub async fn generate_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMenuRequest>,
) -> Result<Response<GenerateMenuResponse>, ApiError> {
    let result = state
        .service
        .generate_menu(GenerateMenuInput {
            mode: payload.mode,
            ingredients: payload.ingredients,
            priority_vegetables: payload.priority_vegetables,
            pantry_staples: payload.pantry_staples,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateMenuResponse { data: result }))
}
