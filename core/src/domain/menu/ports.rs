use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::GenerationResult,
        value_objects::{AnalyzeImageInput, GenerateMenuInput},
    },
};

/// LLM Client trait for calling AI models
///
/// Implementations return the model's raw text untouched. They never retry
/// and never cache: every call is a fresh generation.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// `media_type` is forwarded as given; it must describe `image_base64`.
    fn generate_with_image(
        &self,
        prompt: String,
        image_base64: String,
        media_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for menu generation and photo reading
#[cfg_attr(test, mockall::automock)]
pub trait MenuService: Send + Sync {
    fn generate_menu(
        &self,
        input: GenerateMenuInput,
    ) -> impl Future<Output = Result<GenerationResult, CoreError>> + Send;

    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
