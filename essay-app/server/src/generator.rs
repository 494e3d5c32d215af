use async_trait::async_trait;
use bon::Builder;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use url::Url;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum GenerateError {
	#[error("GEMINI_API_KEY is not configured")]
	MissingApiKey,
	#[error("request to the generation service failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("generation service answered {status}: {body}")]
	Status { status: StatusCode, body: String },
	#[error("generation service returned no text")]
	EmptyResponse,
	#[error("generation was aborted")]
	Aborted,
}

/// Opaque prompt-in, text-out completion service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
	async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Google Generative Language `generateContent` client.
#[derive(Debug, Clone, Builder)]
pub struct GeminiClient {
	#[builder(default)]
	http: Client,
	api_key: Option<String>,
	#[builder(into)]
	model: String,
	base_url: Url,
}

impl GeminiClient {
	pub fn from_config(config: &Config) -> Self {
		Self::builder()
			.maybe_api_key(config.gemini_api_key.clone())
			.model(config.gemini_model.as_str())
			.base_url(config.gemini_base_url.clone())
			.build()
	}

	fn endpoint(&self) -> String {
		format!("{}/models/{}:generateContent", self.base_url.as_str().trim_end_matches('/'), self.model)
	}
}

#[async_trait]
impl TextGenerator for GeminiClient {
	async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
		let api_key = self.api_key.as_deref().ok_or(GenerateError::MissingApiKey)?;

		let res = self
			.http
			.post(self.endpoint())
			.query(&[("key", api_key)])
			.json(&json!({ "contents": [{ "parts": [{ "text": prompt }] }] }))
			.send()
			.await?;

		let status = res.status();
		if !status.is_success() {
			let body = res.text().await.unwrap_or_default();
			return Err(GenerateError::Status { status, body });
		}

		let payload: GenerateContentResponse = res.json().await?;
		payload.into_text().ok_or(GenerateError::EmptyResponse)
	}
}

// candidates[0].content.parts[*].text
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
	content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
	#[serde(default)]
	parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
	text: Option<String>,
}

impl GenerateContentResponse {
	fn into_text(self) -> Option<String> {
		let parts = self.candidates.into_iter().next()?.content?.parts;
		let text: String = parts.into_iter().filter_map(|p| p.text).collect();
		(!text.is_empty()).then_some(text)
	}
}
