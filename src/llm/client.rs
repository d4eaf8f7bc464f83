use crate::error::{Result, SeTeukError};
use crate::llm::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Build a client from the `GEMINI_API_KEY` environment variable, the
    /// single credential this crate consumes.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| SeTeukError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(SeTeukError::MissingApiKey);
        }
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Issue one `generateContent` call and return the model's text payload.
    /// A single attempt is made; any failure is surfaced to the caller.
    pub(crate) async fn generate_content(
        &self,
        model: &str,
        system_instruction: &str,
        parts: Vec<Part>,
        response_schema: Option<serde_json::Value>,
        temperature: f64,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: vec![Content::user(parts)],
            system_instruction: Some(Content::user(vec![Part::text(system_instruction)])),
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
                temperature,
            },
        };

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(SeTeukError::Service(format!(
                "Gemini API error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let part = body
            .candidates
            .ok_or_else(|| SeTeukError::Service("No candidates returned".to_string()))?
            .into_iter()
            .next()
            .ok_or_else(|| SeTeukError::Service("Empty candidates list".to_string()))?
            .content
            .parts
            .into_iter()
            .next()
            .ok_or_else(|| SeTeukError::Service("No parts in content".to_string()))?;

        match part {
            Part::Text { text } => Ok(text),
            Part::InlineData { .. } => Err(SeTeukError::Service(
                "Model returned non-text content".to_string(),
            )),
        }
    }
}
