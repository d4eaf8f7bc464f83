use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: Blob {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

/// Base64-encoded media payload with its MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    pub temperature: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// The declared output schema for a SeTeuk generation call: an `analysis`
/// object (keywords, strengths, storyline) plus the `draft` text, all
/// required.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "analysis": {
                "type": "OBJECT",
                "properties": {
                    "keywords": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "3 core keywords representing the student"
                    },
                    "strengths": {
                        "type": "STRING",
                        "description": "Summary of observed strengths"
                    },
                    "storyline": {
                        "type": "STRING",
                        "description": "Brief explanation of the writing flow/narrative"
                    }
                },
                "required": ["keywords", "strengths", "storyline"]
            },
            "draft": {
                "type": "STRING",
                "description": "The complete Student Record (SeTeuk) draft text."
            }
        },
        "required": ["analysis", "draft"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_serialize_in_gemini_wire_format() {
        let text = serde_json::to_value(Part::text("hello")).unwrap();
        assert_eq!(text, json!({ "text": "hello" }));

        let blob = serde_json::to_value(Part::inline_data("image/png", "AAAA")).unwrap();
        assert_eq!(
            blob,
            json!({ "inlineData": { "mimeType": "image/png", "data": "AAAA" } })
        );
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text("hi")])],
            system_instruction: Some(Content::user(vec![Part::text("sys")])),
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(response_schema()),
                temperature: 0.6,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_some());
        let config = value.get("generationConfig").unwrap();
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["required"][1], "draft");
        assert_eq!(config["temperature"], 0.6);
    }

    #[test]
    fn schema_requires_all_contract_fields() {
        let schema = response_schema();
        let analysis = &schema["properties"]["analysis"];
        assert_eq!(
            analysis["required"],
            json!(["keywords", "strengths", "storyline"])
        );
        assert_eq!(schema["required"], json!(["analysis", "draft"]));
    }
}
