pub mod controller;
pub mod editor;
pub mod reveal;
pub mod theme;
pub mod toolbar;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use controller::{GenerateMode, GenerationToken, PageController};
pub use reveal::{REVEAL_STEP_MS, RevealFrames};
pub use theme::Theme;

pub const GENERATE_ENDPOINT: &str = "/api/generate";

#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("Please enter keywords first")]
	EmptyKeywords,
	#[error("Content generation failed")]
	GenerationFailed,
	#[error("Could not reach the essay server. Please check your connection.")]
	Network,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
	pub keywords: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
	pub content: String,
	pub references: Vec<String>,
}

impl GenerationResult {
	pub fn new(keywords: &str, content: String) -> Self {
		Self { content, references: references(keywords).into() }
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerErrorResponse {
	pub error: String,
}

/// Bibliography entries shown under every essay.
///
/// These are fixed templates with the keywords spliced in; nothing here is looked up
/// from a real citation source.
pub fn references(keywords: &str) -> [String; 2] {
	[format!("Academic Research on {keywords}, Global Studies Journal, 2024"), format!("Comprehensive {keywords} Analysis, International Review, 2024")]
}

pub fn essay_prompt(keywords: &str) -> String {
	format!(
		"Write a comprehensive, scholarly essay about {keywords}.
Provide an in-depth analysis with:
- Clear, academic language
- Substantive historical or contextual information
- Objective analysis
- Detailed exploration of the topic
Aim for 350-450 words, include potential source references within the text."
	)
}
