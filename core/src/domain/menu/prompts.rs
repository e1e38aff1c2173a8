use crate::domain::menu::{
    entities::{ExtractionTarget, MenuMode},
    value_objects::MenuInputs,
};

const ROLE: &str = "あなたは忙しい家庭のお弁当作りを支える管理栄養士です。\
冷めても美味しく、朝の調理が短時間で済む献立を考えてください。";

const DISH_FORMAT: &str = "料理は必ず {\"name\": 料理名, \"recipeUrl\": レシピのURL} の形式にしてください。\
recipeUrl は https:// で始まる実在しそうなレシピ検索ページのURLにし、分からなければ空文字にしてください。";

const JSON_ONLY: &str = "出力はJSONオブジェクトのみとし、説明文やコードブロックは付けないでください。";

const WEEK_SCHEMA: &str = "\
出力形式:
{
  \"days\": 月曜日から金曜日まで、ちょうど5件。各要素は
    { \"day\": 曜日名, \"mains\": 主菜ちょうど2品, \"sides\": 副菜ちょうど3品, \"point\": その日のお弁当のワンポイント }
  \"prepList\": 週末・前日にできる下準備の文字列の配列,
  \"shoppingList\": 買い物リストの文字列の配列
}";

const FIVE_SCHEMA: &str = "\
出力形式:
{
  \"ideas\": 献立案ちょうど5件。各要素は
    { \"name\": 献立名, \"description\": 一言説明, \"point\": ワンポイント,
      \"mains\": 主菜1品以上, \"sides\": 副菜1品以上, \"makeAhead\": 作り置きできるなら \"可\"、できないなら \"不可\" }
}";

/// Builds the instruction text for a menu generation call.
pub fn build_menu_prompt(mode: MenuMode, inputs: &MenuInputs) -> String {
    let mut sections = vec![ROLE.to_string()];

    if inputs.is_pre_shopping() {
        sections.push(pre_shopping_section(mode));
    } else {
        sections.push(on_hand_section(inputs));
    }

    if !inputs.pantry_staples().is_empty() {
        sections.push(format!(
            "常備している調味料・食材（買い物リストには含めない）: {}",
            inputs.pantry_staples()
        ));
    }

    sections.push(task_section(mode, inputs.requires_shopping_list(mode)));
    sections.push(DISH_FORMAT.to_string());
    sections.push(JSON_ONLY.to_string());

    sections.join("\n\n")
}

fn pre_shopping_section(mode: MenuMode) -> String {
    let mut section = String::from(
        "【買い物前モード】手元の食材の指定はありません。\
スーパーで手に入りやすい食材だけで、彩りと栄養のバランスが良い献立を組み立ててください。",
    );
    if mode == MenuMode::Week {
        section.push_str(
            "\n5日分で食材を使い回し、無駄が出ないようにしてください。\
必要な食材をまとめた shoppingList を必ず出力してください。",
        );
    }
    section
}

fn on_hand_section(inputs: &MenuInputs) -> String {
    let mut lines = Vec::new();
    if !inputs.priority_vegetables().is_empty() {
        lines.push(format!(
            "優先して使い切りたい野菜: {}",
            inputs.priority_vegetables()
        ));
    }
    if !inputs.ingredients().is_empty() {
        lines.push(format!("手元にある食材: {}", inputs.ingredients()));
    }
    lines.push("これらの食材を中心に献立を考えてください。".to_string());
    lines.join("\n")
}

fn task_section(mode: MenuMode, require_shopping_list: bool) -> String {
    match mode {
        MenuMode::Week => {
            let shopping = if require_shopping_list {
                "shoppingList は必須です。"
            } else {
                "足りない食材がある場合のみ shoppingList を付けてください。"
            };
            format!(
                "平日5日分（月曜日〜金曜日）のお弁当献立を作成してください。\
各日は主菜ちょうど2品、副菜ちょうど3品です。品数を増やしたり減らしたりしないでください。\
{shopping}\n\n{WEEK_SCHEMA}"
            )
        }
        MenuMode::FiveIdeas => format!(
            "それぞれ独立したお弁当の献立案をちょうど5つ提案してください。\n\n{FIVE_SCHEMA}"
        ),
    }
}

/// Builds the instruction text for reading a photo into an item list.
pub fn build_extraction_prompt(target: ExtractionTarget) -> String {
    let task = match target {
        ExtractionTarget::Receipt => {
            "この画像はスーパーのレシート、または買ってきた食材の写真です。\
お弁当作りに使える食材名だけを読み取ってください。\
値段、数量、店名、割引、レジ袋などの食材以外の行は除外してください。"
        }
        ExtractionTarget::FoodPhoto => {
            "この画像は届いた野菜や食材の写真です。\
写っている野菜・食材の名前を一般的な呼び方で読み取ってください。"
        }
    };

    format!(
        "{task}\n\n出力形式: {{\"items\": [食材名の文字列, ...]}}\n\
食材が一つも見つからない場合は {{\"items\": []}} を返してください。\n\n{JSON_ONLY}"
    )
}
