fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");
	println!("cargo:rerun-if-env-changed=SERVER_URL");
	println!("cargo:rerun-if-env-changed=THEME");

	let server_url = std::env::var("SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:3001".to_string());
	let theme = std::env::var("THEME").unwrap_or_else(|_| "dark".to_string());

	println!("cargo:rustc-env=SERVER_URL={}", server_url.trim_end_matches('/'));
	println!("cargo:rustc-env=THEME={}", theme);
}
