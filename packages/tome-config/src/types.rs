use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
	pub covers: Covers,
	pub suggest: Suggest,
	pub session: Session,
	pub storage: Storage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
	pub api_base: String,
	pub search_path: String,
	/// Query issued for the initial/home load, when the user has typed nothing.
	pub default_query: String,
	pub result_limit: u32,
	pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Covers {
	pub api_base: String,
	/// Cover size letter accepted by the image service, e.g. "S", "M", or "L".
	pub size: String,
	pub placeholder_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Suggest {
	pub min_chars: usize,
	pub debounce_ms: u64,
	pub max_items: usize,
	pub fetch_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
	pub history_cap: usize,
	pub recents_cap: usize,
	pub blur_grace_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub data_dir: String,
}
