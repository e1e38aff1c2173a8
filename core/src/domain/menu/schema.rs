use serde_json::json;

use crate::domain::menu::entities::{
    IDEA_COUNT, MAINS_PER_DAY, MenuMode, SIDES_PER_DAY, WEEK_DAYS,
};

fn dish_list_schema(min_items: usize, max_items: Option<usize>) -> serde_json::Value {
    let mut schema = json!({
        "type": "array",
        "minItems": min_items,
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "recipeUrl": { "type": "string" }
            },
            "required": ["name", "recipeUrl"]
        }
    });

    if let Some(max_items) = max_items {
        schema["maxItems"] = json!(max_items);
    }

    schema
}

/// Returns the JSON schema for five-weekday plan responses
pub fn get_week_plan_schema(require_shopping_list: bool) -> serde_json::Value {
    let mut required = vec!["days", "prepList"];
    if require_shopping_list {
        required.push("shoppingList");
    }

    json!({
        "type": "object",
        "properties": {
            "days": {
                "type": "array",
                "minItems": WEEK_DAYS,
                "maxItems": WEEK_DAYS,
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "string" },
                        "mains": dish_list_schema(MAINS_PER_DAY, Some(MAINS_PER_DAY)),
                        "sides": dish_list_schema(SIDES_PER_DAY, Some(SIDES_PER_DAY)),
                        "point": { "type": "string" }
                    },
                    "required": ["day", "mains", "sides", "point"]
                }
            },
            "prepList": {
                "type": "array",
                "items": { "type": "string" }
            },
            "shoppingList": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": required
    })
}

/// Returns the JSON schema for five standalone menu ideas
pub fn get_five_ideas_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ideas": {
                "type": "array",
                "minItems": IDEA_COUNT,
                "maxItems": IDEA_COUNT,
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "point": { "type": "string" },
                        "mains": dish_list_schema(1, None),
                        "sides": dish_list_schema(1, None),
                        "makeAhead": {
                            "type": "string",
                            "enum": ["可", "不可"]
                        }
                    },
                    "required": ["name", "description", "point", "mains", "sides", "makeAhead"]
                }
            }
        },
        "required": ["ideas"]
    })
}

pub fn get_menu_schema(mode: MenuMode, require_shopping_list: bool) -> serde_json::Value {
    match mode {
        MenuMode::Week => get_week_plan_schema(require_shopping_list),
        MenuMode::FiveIdeas => get_five_ideas_schema(),
    }
}

/// Returns the JSON schema for image extraction responses
pub fn get_extraction_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "items": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["items"]
    })
}
