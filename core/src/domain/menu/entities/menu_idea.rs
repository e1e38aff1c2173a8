use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::DishRef;

pub const IDEA_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuIdea {
    pub name: String,
    pub description: String,
    pub point: String,
    pub mains: Vec<DishRef>,
    pub sides: Vec<DishRef>,
    /// Whether the whole set keeps well enough to be cooked the day before.
    pub make_ahead: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FiveIdeasPlan {
    #[schema(value_type = Vec<MenuIdea>)]
    pub ideas: [MenuIdea; IDEA_COUNT],
}
