use tracing::{debug, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    menu::{
        entities::GenerationResult,
        parser::{parse_extraction_response, parse_menu_response},
        ports::{LLMClient, MenuService},
        prompts::{build_extraction_prompt, build_menu_prompt},
        schema::{get_extraction_schema, get_menu_schema},
        value_objects::{AnalyzeImageInput, GenerateMenuInput, MenuInputs},
    },
};

impl<LLM> MenuService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(mode = input.mode.as_str()))]
    async fn generate_menu(&self, input: GenerateMenuInput) -> Result<GenerationResult, CoreError> {
        // 1. Normalize inputs
        let inputs = MenuInputs::from(&input);
        let require_shopping_list = inputs.requires_shopping_list(input.mode);

        debug!(
            pre_shopping = inputs.is_pre_shopping(),
            require_shopping_list, "building menu prompt"
        );

        // 2. Build prompt and response schema
        let prompt = build_menu_prompt(input.mode, &inputs);
        let response_schema = get_menu_schema(input.mode, require_shopping_list);

        // 3. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_text(prompt, response_schema)
            .await?;

        // 4. Parse and validate response
        parse_menu_response(input.mode, &raw_response, require_shopping_list).inspect_err(|e| {
            warn!(kind = e.kind(), "Rejected menu response: {}", e);
        })
    }

    #[instrument(skip_all, fields(target = ?input.target, media_type = %input.media_type))]
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<String, CoreError> {
        let prompt = build_extraction_prompt(input.target);

        let raw_response = self
            .llm_client
            .generate_with_image(
                prompt,
                input.image_base64,
                input.media_type,
                get_extraction_schema(),
            )
            .await?;

        parse_extraction_response(&raw_response).inspect_err(|e| {
            warn!(kind = e.kind(), "Rejected extraction response: {}", e);
        })
    }
}
