use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::DishRef;

pub const WEEK_DAYS: usize = 5;
pub const MAINS_PER_DAY: usize = 2;
pub const SIDES_PER_DAY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: String,
    #[schema(value_type = Vec<DishRef>)]
    pub mains: [DishRef; MAINS_PER_DAY],
    #[schema(value_type = Vec<DishRef>)]
    pub sides: [DishRef; SIDES_PER_DAY],
    pub point: String,
}

/// One bento per weekday, plus the weekend prep list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    #[schema(value_type = Vec<DayPlan>)]
    pub days: [DayPlan; WEEK_DAYS],
    pub prep_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_list: Option<Vec<String>>,
}
