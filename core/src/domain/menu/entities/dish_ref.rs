use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A dish name with a link to a recipe. `recipe_url` is empty when the model had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishRef {
    pub name: String,
    pub recipe_url: String,
}
