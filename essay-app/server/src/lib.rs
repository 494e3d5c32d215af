pub mod config;
pub mod error;
pub mod generator;

use {
	axum::{
		Json, Router,
		body::Bytes,
		extract::State,
		routing::post,
	},
	common::{GENERATE_ENDPOINT, GenerationRequest, GenerationResult, essay_prompt},
	error::ServerAppError,
	generator::{GenerateError, TextGenerator},
	std::{error::Error as _, sync::Arc, time::Duration},
	tokio_util::{sync::CancellationToken, task::AbortOnDropHandle},
	tracing::{error, info, warn},
	uuid::Uuid,
};

pub use config::Config;
pub use generator::GeminiClient;

#[derive(Clone)]
pub struct AppState {
	pub generator: Arc<dyn TextGenerator>,
	pub generation_timeout: Duration,
}

impl AppState {
	pub fn new(generator: Arc<dyn TextGenerator>, generation_timeout: Duration) -> Self {
		Self { generator, generation_timeout }
	}
}

pub fn router(state: AppState) -> Router {
	Router::new().route(GENERATE_ENDPOINT, post(generate_handler)).with_state(state)
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn generate_handler(State(state): State<AppState>, body: Bytes) -> Result<Json<GenerationResult>, ServerAppError> {
	match generate(&state, &body).await {
		Ok(result) => Ok(Json(result)),
		Err(e @ ServerAppError::Interrupted) => {
			warn!(timeout = ?state.generation_timeout, "content generation interrupted");
			Err(e)
		},
		Err(e) => {
			error!(cause = %e.source().map(ToString::to_string).unwrap_or_default(), "content generation error");
			Err(e)
		},
	}
}

async fn generate(state: &AppState, body: &[u8]) -> Result<GenerationResult, ServerAppError> {
	let abort = CancellationToken::new();
	let _timer = AbortOnDropHandle::new(tokio::spawn({
		let abort = abort.clone();
		let timeout = state.generation_timeout;
		async move {
			tokio::time::sleep(timeout).await;
			abort.cancel();
		}
	}));

	let GenerationRequest { keywords } = serde_json::from_slice(body).map_err(ServerAppError::InvalidBody)?;
	info!(keywords_len = keywords.len(), "generating essay");

	let prompt = essay_prompt(&keywords);
	match abort.run_until_cancelled(state.generator.generate(&prompt)).await {
		Some(Ok(content)) => {
			info!(content_len = content.len(), "essay generated");
			Ok(GenerationResult::new(&keywords, content))
		},
		None | Some(Err(GenerateError::Aborted)) => Err(ServerAppError::Interrupted),
		Some(Err(e)) => Err(ServerAppError::Generation(e)),
	}
}
