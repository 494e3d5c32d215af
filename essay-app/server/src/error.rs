use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use common::ServerErrorResponse;
use thiserror::Error;

use crate::generator::GenerateError;

/// Nginx's "client closed request", used when a generation is aborted.
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

// Display strings are what the client sees, the source stays in the logs.
#[derive(Debug, Error)]
pub enum ServerAppError {
	#[error("Content generation was interrupted")]
	Interrupted,
	#[error("Failed to generate content")]
	Generation(#[source] GenerateError),
	#[error("Failed to generate content")]
	InvalidBody(#[source] serde_json::Error),
}

impl ServerAppError {
	pub fn status(&self) -> StatusCode {
		match self {
			Self::Interrupted => StatusCode::from_u16(CLIENT_CLOSED_REQUEST).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
			Self::Generation(_) | Self::InvalidBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServerAppError {
	fn into_response(self) -> Response {
		(self.status(), Json(ServerErrorResponse { error: self.to_string() })).into_response()
	}
}
