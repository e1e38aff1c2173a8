use crate::{
    domain::common::{BentoConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type BentoService = Service<GeminiLLMClient>;

pub fn create_service(config: BentoConfig) -> Result<BentoService, anyhow::Error> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;

    tracing::info!(model = %config.llm.gemini_model, "LLM client ready");

    Ok(Service::new(llm_client))
}
