use base64::{Engine as _, engine::general_purpose};
use bento_core::domain::menu::{
    entities::{ExtractionTarget, IngredientField, MenuMode},
    value_objects::DEFAULT_PANTRY_STAPLES,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Request body limit for `/extractions`: a base64 encoded `MAX_IMAGE_SIZE` image plus the
/// surrounding JSON.
pub const MAX_EXTRACTION_BODY_SIZE: usize = MAX_IMAGE_SIZE.div_ceil(3) * 4 + 1024 * 1024;

fn default_pantry_staples() -> String {
    DEFAULT_PANTRY_STAPLES.to_string()
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMenuRequest {
    pub mode: MenuMode,
    #[serde(default)]
    #[validate(length(max = 2000, message = "ingredients must be at most 2000 characters"))]
    pub ingredients: String,
    #[serde(default)]
    #[validate(length(
        max = 2000,
        message = "priorityVegetables must be at most 2000 characters"
    ))]
    pub priority_vegetables: String,
    #[serde(default = "default_pantry_staples")]
    #[validate(length(max = 1000, message = "pantryStaples must be at most 1000 characters"))]
    pub pantry_staples: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    /// Raw base64, or a `data:` URL as produced by browsers
    #[validate(custom(function = "validate_image_base64"))]
    pub image_base64: String,
    #[validate(custom(function = "validate_media_type"))]
    pub media_type: String,
    pub target: Option<ExtractionTarget>,
    /// The input field the photo is meant for; picks the target when none is given
    pub field: Option<IngredientField>,
    /// Current text of that field, the extracted items are appended to it
    #[serde(default)]
    pub current: String,
}

impl AnalyzeImageRequest {
    pub fn extraction_target(&self) -> Option<ExtractionTarget> {
        self.target
            .or_else(|| self.field.map(|field| field.extraction_target()))
    }
}

/// Strips a `data:<type>;base64,` prefix if present.
pub fn strip_data_url(value: &str) -> &str {
    let value = value.trim();
    if value.starts_with("data:") {
        if let Some((_, data)) = value.split_once(',') {
            return data;
        }
    }
    value
}

fn validate_image_base64(value: &str) -> Result<(), ValidationError> {
    let data = strip_data_url(value);
    if data.is_empty() {
        return Err(ValidationError::new("required").with_message("imageBase64 is required".into()));
    }

    let decoded = general_purpose::STANDARD.decode(data).map_err(|_| {
        ValidationError::new("invalid_base64").with_message("imageBase64 is not valid base64".into())
    })?;

    if decoded.len() > MAX_IMAGE_SIZE {
        return Err(ValidationError::new("too_large")
            .with_message(format!("Image too large. Max size is {MAX_IMAGE_SIZE} bytes").into()));
    }

    Ok(())
}

fn validate_media_type(value: &str) -> Result<(), ValidationError> {
    match value.strip_prefix("image/") {
        Some(subtype) if !subtype.is_empty() => Ok(()),
        _ => Err(ValidationError::new("invalid_media_type")
            .with_message("mediaType must be an image type such as image/jpeg".into())),
    }
}
