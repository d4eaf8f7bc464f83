use crate::error::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// A file selected by the teacher, fully read into memory and base64-encoded
/// before it can be attached to a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Base64 (standard alphabet) encoding of the raw file bytes.
    pub data: String,
    pub mime_type: String,
    pub name: String,
}

impl UploadedFile {
    pub fn from_bytes(name: impl Into<String>, mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            data: BASE64.encode(bytes),
            mime_type: mime_type.into(),
            name: name.into(),
        }
    }

    /// Read a file from disk, sniffing its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
            .to_string();
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        let bytes = fs::read(path).await?;
        Ok(Self::from_bytes(name, mime_type, bytes.as_slice()))
    }

    /// Decode the base64 payload back to raw bytes.
    pub fn decoded(&self) -> std::result::Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.data)
    }
}

/// Read several files concurrently. All reads are started at once and the
/// call resolves only when every file is in memory.
pub async fn read_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<UploadedFile>> {
    try_join_all(paths.iter().map(|p| UploadedFile::from_path(p))).await
}

/// The three fixed draft-length labels offered to the teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthOption {
    Short,
    #[default]
    Standard,
    Long,
}

impl LengthOption {
    pub fn label(self) -> &'static str {
        match self {
            LengthOption::Short => "짧게 (1000바이트/300자 내외)",
            LengthOption::Standard => "표준 (1500바이트/500자 내외)",
            LengthOption::Long => "길게 (2000바이트/700자 내외)",
        }
    }
}

/// Emphasis keywords in insertion order, without duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword. Blank and duplicate entries are ignored.
    pub fn push(&mut self, keyword: &str) {
        let keyword = keyword.trim();
        if keyword.is_empty() || self.0.iter().any(|k| k == keyword) {
            return;
        }
        self.0.push(keyword.to_string());
    }

    pub fn remove(&mut self, keyword: &str) {
        self.0.retain(|k| k != keyword);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        for keyword in iter {
            set.push(keyword.as_ref());
        }
        set
    }
}

/// Everything a single submission carries. Built fresh per submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeTeukInput {
    /// Free-text description of the student's activities.
    pub activity_data: String,
    /// The teacher's own observations and evaluation.
    pub teacher_comments: String,
    pub length_option: LengthOption,
    pub emphasis_keywords: KeywordSet,
    pub files: Vec<UploadedFile>,
}

impl SeTeukInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activity_data(mut self, text: impl Into<String>) -> Self {
        self.activity_data = text.into();
        self
    }

    pub fn with_teacher_comments(mut self, text: impl Into<String>) -> Self {
        self.teacher_comments = text.into();
        self
    }

    pub fn with_length_option(mut self, option: LengthOption) -> Self {
        self.length_option = option;
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.emphasis_keywords.push(keyword);
        self
    }

    pub fn with_file(mut self, file: UploadedFile) -> Self {
        self.files.push(file);
        self
    }

    /// A submission needs at least one of: non-blank activity text, non-blank
    /// teacher comments, or an uploaded file.
    pub fn has_content(&self) -> bool {
        !self.activity_data.trim().is_empty()
            || !self.teacher_comments.trim().is_empty()
            || !self.files.is_empty()
    }
}
