//! # SeTeuk Writer
//!
//! A library for drafting Korean student-record 세특 (세부능력 및 특기사항)
//! entries from a teacher's collected activity materials via the Gemini API.
//!
//! ## Pipeline
//!
//! - **Input collection**: free activity text, teacher comments, a draft
//!   length preference, emphasis keywords, and uploaded files (each read
//!   fully into memory and base64-encoded).
//! - **Request building**: text files are decoded and inlined into the prompt
//!   under a filename label; images, PDFs, and audio pass through as binary
//!   attachments with their MIME types.
//! - **One model call**: a fixed system instruction and a declared JSON
//!   output schema, single attempt, no retry.
//! - **Result**: three analysis keywords, a strengths summary, a storyline,
//!   and the draft itself with character/UTF-8-byte counts.
//!
//! ## Example
//!
//! ```rust,ignore
//! use seteuk_writer::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let generator = SeTeukGenerator::new(GeminiClient::from_env()?);
//!     let input = SeTeukInput::new()
//!         .with_activity_data("토론 동아리에서 기후 변화 주제로 발표함")
//!         .with_keyword("탐구력");
//!
//!     let mut session = Session::new();
//!     session.submit(&generator, &input).await?;
//!     if let Some(result) = session.result() {
//!         println!("{}", render::format_report(result));
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod input;
pub mod llm;
pub mod render;
pub mod result;
pub mod session;

pub use error::{Result, SeTeukError};
pub use input::{read_files, KeywordSet, LengthOption, SeTeukInput, UploadedFile};
pub use llm::{GeminiClient, SeTeukGenerator};
pub use result::{parse_result, SeTeukAnalysis, SeTeukResult};
pub use session::{Phase, Session, GENERIC_ERROR_MESSAGE};
