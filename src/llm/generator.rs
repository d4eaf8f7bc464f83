use crate::error::{Result, SeTeukError};
use crate::input::SeTeukInput;
use crate::llm::client::GeminiClient;
use crate::llm::prompts::{self, build_parts, SYSTEM_INSTRUCTION};
use crate::llm::types::response_schema;
use crate::result::{parse_result, SeTeukResult};
use log::{debug, info};

/// Drives the whole pipeline for one submission: validate, build the request
/// parts, make a single model call with the declared output schema, and parse
/// the structured result.
pub struct SeTeukGenerator {
    client: GeminiClient,
    model: String,
}

impl SeTeukGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: prompts::MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub async fn generate(&self, input: &SeTeukInput) -> Result<SeTeukResult> {
        if !input.has_content() {
            return Err(SeTeukError::EmptySubmission);
        }

        let parts = build_parts(input);
        info!(
            "Generating SeTeuk draft: {} file(s), {} keyword(s)",
            input.files.len(),
            input.emphasis_keywords.len()
        );
        debug!("Request carries {} content part(s)", parts.len());

        let text = self
            .client
            .generate_content(
                &self.model,
                SYSTEM_INSTRUCTION,
                parts,
                Some(response_schema()),
                prompts::TEMPERATURE,
            )
            .await?;

        let result = parse_result(&text)?;
        debug!(
            "Draft received: {} chars / {} bytes",
            result.draft_char_count(),
            result.draft_byte_len()
        );
        Ok(result)
    }
}
