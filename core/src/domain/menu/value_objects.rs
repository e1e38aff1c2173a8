use crate::domain::menu::entities::{ExtractionTarget, MenuMode};

/// What most households keep stocked. Used when the caller sends no pantry list.
pub const DEFAULT_PANTRY_STAPLES: &str = "卵, 醤油, 酒, みりん, 砂糖, 片栗粉, 油";

#[derive(Debug, Clone)]
pub struct GenerateMenuInput {
    pub mode: MenuMode,
    pub ingredients: String,
    pub priority_vegetables: String,
    pub pantry_staples: String,
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image_base64: String,
    pub media_type: String,
    pub target: ExtractionTarget,
}

/// Normalized free-text inputs for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuInputs {
    ingredients: String,
    priority_vegetables: String,
    pantry_staples: String,
}

impl MenuInputs {
    pub fn new(ingredients: &str, priority_vegetables: &str, pantry_staples: &str) -> Self {
        Self {
            ingredients: normalize_field(ingredients),
            priority_vegetables: normalize_field(priority_vegetables),
            pantry_staples: normalize_field(pantry_staples),
        }
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn priority_vegetables(&self) -> &str {
        &self.priority_vegetables
    }

    pub fn pantry_staples(&self) -> &str {
        &self.pantry_staples
    }

    /// Nothing on hand and nothing to use up: plan from scratch and shop for it.
    pub fn is_pre_shopping(&self) -> bool {
        self.ingredients.is_empty() && self.priority_vegetables.is_empty()
    }

    /// The model must return a shopping list for this mode and these inputs.
    pub fn requires_shopping_list(&self, mode: MenuMode) -> bool {
        mode == MenuMode::Week && self.is_pre_shopping()
    }

    /// Appends newly extracted items to an existing field value.
    pub fn merge_field(current: &str, extracted: &str) -> String {
        let current = current.trim();
        let extracted = extracted.trim();

        match (current.is_empty(), extracted.is_empty()) {
            (true, _) => extracted.to_string(),
            (false, true) => current.to_string(),
            (false, false) => format!("{current}, {extracted}"),
        }
    }
}

impl From<&GenerateMenuInput> for MenuInputs {
    fn from(input: &GenerateMenuInput) -> Self {
        MenuInputs::new(
            &input.ingredients,
            &input.priority_vegetables,
            &input.pantry_staples,
        )
    }
}

fn normalize_field(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
