use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::{FiveIdeasPlan, WeekPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum MenuMode {
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "five", alias = "five_ideas")]
    FiveIdeas,
}

impl MenuMode {
    pub fn as_str(&self) -> &str {
        match self {
            MenuMode::Week => "week",
            MenuMode::FiveIdeas => "five",
        }
    }
}

/// A validated plan. The variant always matches the mode it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "mode", content = "plan")]
pub enum GenerationResult {
    #[serde(rename = "week")]
    Week(WeekPlan),
    #[serde(rename = "five")]
    FiveIdeas(FiveIdeasPlan),
}

impl GenerationResult {
    pub fn mode(&self) -> MenuMode {
        match self {
            GenerationResult::Week(_) => MenuMode::Week,
            GenerationResult::FiveIdeas(_) => MenuMode::FiveIdeas,
        }
    }

    pub fn as_week(&self) -> Option<&WeekPlan> {
        match self {
            GenerationResult::Week(plan) => Some(plan),
            GenerationResult::FiveIdeas(_) => None,
        }
    }

    pub fn as_five_ideas(&self) -> Option<&FiveIdeasPlan> {
        match self {
            GenerationResult::FiveIdeas(plan) => Some(plan),
            GenerationResult::Week(_) => None,
        }
    }
}
