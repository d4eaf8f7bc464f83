use crate::error::{Result, SeTeukError};
use serde::{Deserialize, Serialize};

/// The model's analysis of the student. The prompt asks for exactly 3
/// keywords; the count is not enforced structurally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeTeukAnalysis {
    pub keywords: Vec<String>,
    pub strengths: String,
    pub storyline: String,
}

/// One successful generation: the analysis plus the SeTeuk draft itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeTeukResult {
    pub analysis: SeTeukAnalysis,
    pub draft: String,
}

impl SeTeukResult {
    /// Character count of the draft, spaces included.
    pub fn draft_char_count(&self) -> usize {
        self.draft.chars().count()
    }

    /// UTF-8 byte length of the draft, the unit the 세특 length limit is
    /// expressed in.
    pub fn draft_byte_len(&self) -> usize {
        self.draft.len()
    }
}

/// Parse the model's text payload against the output contract. Any missing
/// required field is a schema error; there is no partial-result recovery.
pub fn parse_result(text: &str) -> Result<SeTeukResult> {
    serde_json::from_str(text).map_err(|e| SeTeukError::Schema(e.to_string()))
}
