use crate::application::http::menu::router::MenuApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bento Planner API"
    ),
    tags(
        (name = "menu", description = "Menu generation and photo reading")
    )
)]
pub struct ApiDoc;

pub fn openapi_spec(root_path: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(MenuApiDoc::openapi());

    openapi.paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();

    openapi
}
