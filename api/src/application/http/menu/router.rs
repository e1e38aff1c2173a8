use super::{
    handlers::{
        analyze_image::{__path_analyze_image, analyze_image},
        generate_menu::{__path_generate_menu, generate_menu},
    },
    validators::MAX_EXTRACTION_BODY_SIZE,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_menu, analyze_image))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menus", state.args.server.root_path),
            post(generate_menu),
        )
        .route(
            &format!("{}/extractions", state.args.server.root_path),
            // Photos arrive base64 encoded inside the JSON body
            post(analyze_image).layer(DefaultBodyLimit::max(MAX_EXTRACTION_BODY_SIZE)),
        )
}
