use common::{AppError, GENERATE_ENDPOINT, GenerationRequest, GenerationResult};
use dioxus::logger::tracing::{debug, error};

const SERVER_URL: &str = env!("SERVER_URL");

/// Posts the keywords to the essay server. Any non-success status is reported as a
/// uniform generation failure; the server's error body is not shown to the user.
pub async fn request_generation(keywords: String) -> Result<GenerationResult, AppError> {
	debug!("requesting essay for {} chars of keywords", keywords.len());
	let res = reqwest::Client::new()
		.post(format!("{SERVER_URL}{GENERATE_ENDPOINT}"))
		.json(&GenerationRequest { keywords })
		.send()
		.await
		.map_err(|e| {
			error!("essay request failed: {e}");
			AppError::Network
		})?;

	if !res.status().is_success() {
		error!("essay server answered {}", res.status());
		return Err(AppError::GenerationFailed);
	}

	res.json::<GenerationResult>().await.map_err(|e| {
		error!("malformed essay response: {e}");
		AppError::GenerationFailed
	})
}
