use {
	anyhow::{Context, Result},
	axum::http::{HeaderValue, Method, header},
	clap::Parser,
	server::{AppState, Config, GeminiClient, router},
	std::sync::Arc,
	tower_http::cors::{Any, CorsLayer},
	tracing::{info, warn},
	tracing_subscriber::{
		EnvFilter,
		fmt::{format::Writer, time::FormatTime},
	},
};

struct CustomTime;

impl FormatTime for CustomTime {
	fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
		write!(w, "{}", chrono::Local::now().format("%m-%d %H:%M:%S"))
	}
}

fn cors(allowed_origin: Option<&str>) -> Result<CorsLayer> {
	let layer = CorsLayer::new().allow_methods([Method::POST]).allow_headers([header::CONTENT_TYPE]);
	Ok(match allowed_origin {
		Some(origin) => layer.allow_origin(origin.parse::<HeaderValue>().context("ALLOWED_ORIGIN is not a valid origin")?),
		None => layer.allow_origin(Any),
	})
}

#[tokio::main]
async fn main() -> Result<()> {
	// a missing .env is fine, the environment may already carry everything
	let _ = dotenvy::dotenv();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_timer(CustomTime)
		.init();

	let config = Config::parse();
	if config.gemini_api_key.is_none() {
		warn!("GEMINI_API_KEY is not set, every generation will fail");
	}

	let state = AppState::new(Arc::new(GeminiClient::from_config(&config)), config.generation_timeout());
	let app = router(state).layer(cors(config.allowed_origin.as_deref())?);

	let addr = config.addr();
	let listener = tokio::net::TcpListener::bind(addr).await.with_context(|| format!("Failed to bind {addr}"))?;
	info!("Server listening on {}", addr);
	axum::serve(listener, app).await.context("Server stopped unexpectedly")?;
	Ok(())
}
