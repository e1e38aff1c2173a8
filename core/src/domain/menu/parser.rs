use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::entities::{
        DayPlan, DishRef, FiveIdeasPlan, GenerationResult, MenuIdea, MenuMode, WeekPlan,
    },
};

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z]*[ \t]*\r?\n(.*?)\r?\n?\s*```\s*$")
        .expect("code fence pattern is valid")
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DishPayload {
    name: String,
    #[serde(default)]
    recipe_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DayPayload {
    day: String,
    mains: Vec<DishPayload>,
    sides: Vec<DishPayload>,
    point: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeekPayload {
    days: Vec<DayPayload>,
    prep_list: Vec<String>,
    #[serde(default)]
    shopping_list: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdeaPayload {
    name: String,
    description: String,
    point: String,
    mains: Vec<DishPayload>,
    sides: Vec<DishPayload>,
    make_ahead: String,
}

#[derive(Debug, Deserialize)]
struct FiveIdeasPayload {
    ideas: Vec<IdeaPayload>,
}

#[derive(Debug, Deserialize)]
struct ExtractionPayload {
    items: Vec<String>,
}

/// Parses a menu generation response for `mode`.
///
/// `require_shopping_list` is set when the prompt told the model it must
/// produce one; its absence is then a schema violation.
pub fn parse_menu_response(
    mode: MenuMode,
    raw: &str,
    require_shopping_list: bool,
) -> Result<GenerationResult, CoreError> {
    let value = extract_payload(raw)?;

    match mode {
        MenuMode::Week => {
            let payload: WeekPayload = decode(value, "week plan")?;
            validate_week(payload, require_shopping_list).map(GenerationResult::Week)
        }
        MenuMode::FiveIdeas => {
            let payload: FiveIdeasPayload = decode(value, "menu ideas")?;
            validate_five_ideas(payload).map(GenerationResult::FiveIdeas)
        }
    }
}

/// Parses an image extraction response into a comma-joined item list.
pub fn parse_extraction_response(raw: &str) -> Result<String, CoreError> {
    let payload: ExtractionPayload = decode(extract_payload(raw)?, "extraction")?;

    let items: Vec<&str> = payload
        .items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        return Err(CoreError::EmptyExtraction);
    }

    Ok(items.join(", "))
}

fn extract_payload(raw: &str) -> Result<serde_json::Value, CoreError> {
    let body = match CODE_FENCE.captures(raw).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => raw,
    };

    if body.trim().is_empty() {
        return Err(CoreError::MalformedPayload("empty response".to_string()));
    }

    serde_json::from_str(body).map_err(|e| CoreError::MalformedPayload(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: serde_json::Value, what: &str) -> Result<T, CoreError> {
    serde_json::from_value(value).map_err(|e| CoreError::schema(format!("{what}: {e}")))
}

fn exactly<T, const N: usize>(items: Vec<T>, path: &str) -> Result<[T; N], CoreError> {
    let len = items.len();
    items
        .try_into()
        .map_err(|_| CoreError::schema(format!("{path}: expected exactly {N}, got {len}")))
}

fn at_least_one<T>(items: Vec<T>, path: &str) -> Result<Vec<T>, CoreError> {
    if items.is_empty() {
        return Err(CoreError::schema(format!("{path}: expected at least 1, got 0")));
    }
    Ok(items)
}

fn required_text(value: String, path: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::schema(format!("{path}: must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn validate_dish(dish: DishPayload, path: &str) -> Result<DishRef, CoreError> {
    let name = required_text(dish.name, &format!("{path}.name"))?;
    let recipe_url = dish.recipe_url.unwrap_or_default().trim().to_string();

    if !recipe_url.is_empty() {
        let parsed = Url::parse(&recipe_url).map_err(|e| {
            CoreError::schema(format!("{path}.recipeUrl: invalid url {recipe_url:?}: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CoreError::schema(format!(
                "{path}.recipeUrl: unsupported scheme {:?}",
                parsed.scheme()
            )));
        }
    }

    Ok(DishRef { name, recipe_url })
}

fn validate_dishes(dishes: Vec<DishPayload>, path: &str) -> Result<Vec<DishRef>, CoreError> {
    dishes
        .into_iter()
        .enumerate()
        .map(|(i, dish)| validate_dish(dish, &format!("{path}[{i}]")))
        .collect()
}

fn validate_day(day: DayPayload, path: &str) -> Result<DayPlan, CoreError> {
    let mains_path = format!("{path}.mains");
    let sides_path = format!("{path}.sides");

    Ok(DayPlan {
        day: required_text(day.day, &format!("{path}.day"))?,
        mains: exactly(validate_dishes(day.mains, &mains_path)?, &mains_path)?,
        sides: exactly(validate_dishes(day.sides, &sides_path)?, &sides_path)?,
        point: required_text(day.point, &format!("{path}.point"))?,
    })
}

fn validate_week(payload: WeekPayload, require_shopping_list: bool) -> Result<WeekPlan, CoreError> {
    if require_shopping_list && payload.shopping_list.is_none() {
        return Err(CoreError::schema(
            "shoppingList: required when no ingredients were supplied",
        ));
    }

    let days = payload
        .days
        .into_iter()
        .enumerate()
        .map(|(i, day)| validate_day(day, &format!("days[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WeekPlan {
        days: exactly(days, "days")?,
        prep_list: payload.prep_list,
        shopping_list: payload.shopping_list,
    })
}

fn parse_make_ahead(token: &str, path: &str) -> Result<bool, CoreError> {
    match token.trim().to_ascii_lowercase().as_str() {
        "可" | "can make ahead" => Ok(true),
        "不可" | "cannot" => Ok(false),
        other => Err(CoreError::schema(format!(
            "{path}.makeAhead: unrecognized value {other:?}"
        ))),
    }
}

fn validate_idea(idea: IdeaPayload, path: &str) -> Result<MenuIdea, CoreError> {
    let mains_path = format!("{path}.mains");
    let sides_path = format!("{path}.sides");

    Ok(MenuIdea {
        name: required_text(idea.name, &format!("{path}.name"))?,
        description: required_text(idea.description, &format!("{path}.description"))?,
        point: required_text(idea.point, &format!("{path}.point"))?,
        mains: at_least_one(validate_dishes(idea.mains, &mains_path)?, &mains_path)?,
        sides: at_least_one(validate_dishes(idea.sides, &sides_path)?, &sides_path)?,
        make_ahead: parse_make_ahead(&idea.make_ahead, path)?,
    })
}

fn validate_five_ideas(payload: FiveIdeasPayload) -> Result<FiveIdeasPlan, CoreError> {
    let ideas = payload
        .ideas
        .into_iter()
        .enumerate()
        .map(|(i, idea)| validate_idea(idea, &format!("ideas[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FiveIdeasPlan {
        ideas: exactly(ideas, "ideas")?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn dish(name: &str) -> Value {
        json!({ "name": name, "recipeUrl": format!("https://cookpad.com/search/{name}") })
    }

    fn day(label: &str, mains: usize, sides: usize) -> Value {
        json!({
            "day": label,
            "mains": (0..mains).map(|i| dish(&format!("主菜{i}"))).collect::<Vec<_>>(),
            "sides": (0..sides).map(|i| dish(&format!("副菜{i}"))).collect::<Vec<_>>(),
            "point": "彩りよく",
        })
    }

    fn week(days: usize) -> Value {
        let labels = ["月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日"];
        json!({
            "days": labels.iter().take(days).map(|l| day(l, 2, 3)).collect::<Vec<_>>(),
            "prepList": ["にんじんを千切りにしておく"],
        })
    }

    fn idea(make_ahead: &str) -> Value {
        json!({
            "name": "鶏の照り焼き弁当",
            "description": "甘辛味でご飯が進む",
            "point": "タレは前日に",
            "mains": [dish("鶏の照り焼き")],
            "sides": [dish("卵焼き"), dish("ほうれん草のおひたし")],
            "makeAhead": make_ahead,
        })
    }

    fn ideas(count: usize) -> Value {
        json!({ "ideas": (0..count).map(|_| idea("可")).collect::<Vec<_>>() })
    }

    fn assert_schema_violation(result: Result<GenerationResult, CoreError>) {
        assert!(
            matches!(result, Err(CoreError::SchemaViolation(_))),
            "expected schema violation, got {result:?}"
        );
    }

    #[test]
    fn test_valid_week_plan() {
        let result = parse_menu_response(MenuMode::Week, &week(5).to_string(), false).unwrap();

        let plan = result.as_week().unwrap();
        assert_eq!(plan.days.len(), 5);
        assert_eq!(plan.days[0].day, "月曜日");
        assert_eq!(plan.days[4].mains.len(), 2);
        assert_eq!(plan.days[4].sides.len(), 3);
        assert_eq!(plan.prep_list, vec!["にんじんを千切りにしておく".to_string()]);
        assert!(plan.shopping_list.is_none());
    }

    #[test]
    fn test_week_with_wrong_day_count_is_rejected() {
        assert_schema_violation(parse_menu_response(MenuMode::Week, &week(4).to_string(), false));
        assert_schema_violation(parse_menu_response(MenuMode::Week, &week(6).to_string(), false));
    }

    #[test]
    fn test_week_with_wrong_dish_counts_is_rejected() {
        for (mains, sides) in [(1, 3), (3, 3), (2, 2), (2, 4), (0, 0)] {
            let mut payload = week(5);
            payload["days"][2] = day("水曜日", mains, sides);
            assert_schema_violation(parse_menu_response(
                MenuMode::Week,
                &payload.to_string(),
                false,
            ));
        }
    }

    #[test]
    fn test_missing_shopping_list_rejected_only_when_required() {
        let raw = week(5).to_string();
        assert_schema_violation(parse_menu_response(MenuMode::Week, &raw, true));
        assert!(parse_menu_response(MenuMode::Week, &raw, false).is_ok());
    }

    #[test]
    fn test_shopping_list_is_kept() {
        let mut payload = week(5);
        payload["shoppingList"] = json!(["鶏もも肉", "ブロッコリー"]);

        let result = parse_menu_response(MenuMode::Week, &payload.to_string(), true).unwrap();
        assert_eq!(
            result.as_week().unwrap().shopping_list,
            Some(vec!["鶏もも肉".to_string(), "ブロッコリー".to_string()])
        );
    }

    #[test]
    fn test_empty_required_strings_are_rejected() {
        let mut payload = week(5);
        payload["days"][0]["point"] = json!("   ");
        assert_schema_violation(parse_menu_response(MenuMode::Week, &payload.to_string(), false));

        let mut payload = week(5);
        payload["days"][1]["mains"][0]["name"] = json!("");
        assert_schema_violation(parse_menu_response(MenuMode::Week, &payload.to_string(), false));
    }

    #[test]
    fn test_recipe_url_may_be_empty_but_not_malformed() {
        let mut payload = week(5);
        payload["days"][0]["sides"][1]["recipeUrl"] = json!("");
        let result = parse_menu_response(MenuMode::Week, &payload.to_string(), false).unwrap();
        assert_eq!(result.as_week().unwrap().days[0].sides[1].recipe_url, "");

        payload["days"][0]["sides"][1]["recipeUrl"] = json!(null);
        let result = parse_menu_response(MenuMode::Week, &payload.to_string(), false).unwrap();
        assert_eq!(result.as_week().unwrap().days[0].sides[1].recipe_url, "");

        payload["days"][0]["sides"][1]["recipeUrl"] = json!("not a url");
        assert_schema_violation(parse_menu_response(MenuMode::Week, &payload.to_string(), false));

        payload["days"][0]["sides"][1]["recipeUrl"] = json!("javascript:alert(1)");
        assert_schema_violation(parse_menu_response(MenuMode::Week, &payload.to_string(), false));
    }

    #[test]
    fn test_valid_five_ideas() {
        let result =
            parse_menu_response(MenuMode::FiveIdeas, &ideas(5).to_string(), false).unwrap();

        let plan = result.as_five_ideas().unwrap();
        assert_eq!(plan.ideas.len(), 5);
        assert!(plan.ideas[0].make_ahead);
        assert_eq!(plan.ideas[0].sides.len(), 2);
    }

    #[test]
    fn test_five_ideas_with_wrong_count_is_rejected() {
        assert_schema_violation(parse_menu_response(
            MenuMode::FiveIdeas,
            &ideas(4).to_string(),
            false,
        ));
        assert_schema_violation(parse_menu_response(
            MenuMode::FiveIdeas,
            &ideas(6).to_string(),
            false,
        ));
    }

    #[test]
    fn test_idea_without_dishes_is_rejected() {
        let mut payload = ideas(5);
        payload["ideas"][3]["mains"] = json!([]);
        assert_schema_violation(parse_menu_response(
            MenuMode::FiveIdeas,
            &payload.to_string(),
            false,
        ));
    }

    #[test]
    fn test_make_ahead_tokens() {
        assert_eq!(parse_make_ahead("可", "i").unwrap(), true);
        assert_eq!(parse_make_ahead("不可", "i").unwrap(), false);
        assert_eq!(parse_make_ahead(" Can Make Ahead ", "i").unwrap(), true);
        assert_eq!(parse_make_ahead("cannot", "i").unwrap(), false);

        for token in ["maybe", "", "yes", "可能"] {
            assert!(matches!(
                parse_make_ahead(token, "i"),
                Err(CoreError::SchemaViolation(_))
            ));
        }

        let mut payload = ideas(5);
        payload["ideas"][1]["makeAhead"] = json!("sometimes");
        assert_schema_violation(parse_menu_response(
            MenuMode::FiveIdeas,
            &payload.to_string(),
            false,
        ));
    }

    #[test]
    fn test_not_json_is_malformed() {
        assert!(matches!(
            parse_menu_response(MenuMode::Week, "not json", false),
            Err(CoreError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_menu_response(MenuMode::FiveIdeas, "not json", false),
            Err(CoreError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_extraction_response("not json"),
            Err(CoreError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_extraction_response("   "),
            Err(CoreError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_wrong_shape_is_schema_violation_not_malformed() {
        assert_schema_violation(parse_menu_response(MenuMode::Week, "{\"foo\": 1}", false));
        assert_schema_violation(parse_menu_response(MenuMode::Week, "[]", false));
        assert_schema_violation(parse_menu_response(
            MenuMode::Week,
            &ideas(5).to_string(),
            false,
        ));
        assert!(matches!(
            parse_extraction_response("{\"items\": \"卵\"}"),
            Err(CoreError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut payload = week(5);
        payload["calories"] = json!(650);
        payload["days"][0]["note"] = json!("extra");
        payload["days"][0]["mains"][0]["difficulty"] = json!("easy");

        assert!(parse_menu_response(MenuMode::Week, &payload.to_string(), false).is_ok());
    }

    #[test]
    fn test_code_fence_is_stripped() {
        let raw = format!("```json\n{}\n```", ideas(5));
        assert!(parse_menu_response(MenuMode::FiveIdeas, &raw, false).is_ok());

        let raw = "```\n{\"items\": [\"卵\"]}\n```\n";
        assert_eq!(parse_extraction_response(raw).unwrap(), "卵");
    }

    #[test]
    fn test_text_around_payload_is_malformed() {
        let raw = format!("Here is your menu: {}", week(5));
        assert!(matches!(
            parse_menu_response(MenuMode::Week, &raw, false),
            Err(CoreError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_extraction_joins_items_in_order() {
        let raw = json!({ "items": ["卵", "牛乳"] }).to_string();
        assert_eq!(parse_extraction_response(&raw).unwrap(), "卵, 牛乳");

        let raw = json!({ "items": [" 卵 ", "", "卵", "キャベツ"] }).to_string();
        assert_eq!(parse_extraction_response(&raw).unwrap(), "卵, 卵, キャベツ");
    }

    #[test]
    fn test_extraction_without_items_is_empty() {
        assert_eq!(
            parse_extraction_response("{\"items\": []}"),
            Err(CoreError::EmptyExtraction)
        );
        assert_eq!(
            parse_extraction_response("{\"items\": [\"  \", \"\"]}"),
            Err(CoreError::EmptyExtraction)
        );
    }

    #[test]
    fn test_parsing_is_repeatable() {
        let raw = week(5).to_string();
        let first = parse_menu_response(MenuMode::Week, &raw, false).unwrap();
        let second = parse_menu_response(MenuMode::Week, &raw, false).unwrap();
        assert_eq!(first, second);

        let raw = ideas(5).to_string();
        assert_eq!(
            parse_menu_response(MenuMode::FiveIdeas, &raw, false),
            parse_menu_response(MenuMode::FiveIdeas, &raw, false)
        );
    }
}
