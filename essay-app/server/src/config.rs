use {
	clap::Parser,
	std::{
		net::{IpAddr, SocketAddr},
		time::Duration,
	},
	url::Url,
};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Parser, Debug, Clone)]
#[command(name = "essay-server", version, about = "HTTP backend for the academic essay generator", long_about = None)]
pub struct Config {
	/// Interface to bind
	#[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
	pub host: IpAddr,

	/// Port to listen on
	#[arg(long, env = "SERVER_PORT", default_value_t = 3001)]
	pub port: u16,

	/// API key for the Gemini generative language API
	#[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
	pub gemini_api_key: Option<String>,

	#[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
	pub gemini_model: String,

	#[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
	pub gemini_base_url: Url,

	/// Seconds before an in-flight generation is aborted
	#[arg(long, env = "GENERATION_TIMEOUT_SECS", default_value_t = 30)]
	pub generation_timeout_secs: u64,

	/// Origin allowed to call the API from a browser (any origin when unset)
	#[arg(long, env = "ALLOWED_ORIGIN")]
	pub allowed_origin: Option<String>,
}

impl Config {
	pub fn addr(&self) -> SocketAddr {
		SocketAddr::new(self.host, self.port)
	}

	pub fn generation_timeout(&self) -> Duration {
		Duration::from_secs(self.generation_timeout_secs)
	}
}
