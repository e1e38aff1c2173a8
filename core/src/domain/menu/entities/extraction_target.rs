use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which kind of photo is being read. Only the prompt wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionTarget {
    Receipt,
    #[serde(rename = "food", alias = "food_photo")]
    FoodPhoto,
}

/// The free-text inputs a photo can be read into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IngredientField {
    Ingredients,
    PriorityVegetables,
}

impl IngredientField {
    /// Shopping goes in as receipts, vegetables from family come in as produce photos.
    pub fn extraction_target(&self) -> ExtractionTarget {
        match self {
            IngredientField::Ingredients => ExtractionTarget::Receipt,
            IngredientField::PriorityVegetables => ExtractionTarget::FoodPhoto,
        }
    }
}

impl From<IngredientField> for ExtractionTarget {
    fn from(field: IngredientField) -> Self {
        field.extraction_target()
    }
}
