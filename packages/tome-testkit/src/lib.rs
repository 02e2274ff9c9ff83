use std::{collections::HashMap, sync::Mutex};

use tome_config::{Catalog, Config, Covers, Service, Session, Storage, Suggest};
use tome_domain::Book;
use tome_store::{KvStore, Result};

/// In-memory [`KvStore`]. Shared behind an `Arc`, it doubles as the
/// "persisted" state a fresh session reloads from, which is how the tests
/// simulate a process restart.
#[derive(Default)]
pub struct MemoryStore {
	values: Mutex<HashMap<String, String>>,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}
impl KvStore for MemoryStore {
	fn get(&self, name: &str) -> Result<Option<String>> {
		let values = self.values.lock().unwrap_or_else(|err| err.into_inner());

		Ok(values.get(name).cloned())
	}

	fn set(&self, name: &str, value: &str) -> Result<()> {
		let mut values = self.values.lock().unwrap_or_else(|err| err.into_inner());

		values.insert(name.to_string(), value.to_string());

		Ok(())
	}

	fn delete(&self, name: &str) -> Result<()> {
		let mut values = self.values.lock().unwrap_or_else(|err| err.into_inner());

		values.remove(name);

		Ok(())
	}
}

pub fn book(key: &str, title: &str) -> Book {
	Book {
		key: key.to_string(),
		title: title.to_string(),
		author_name: Vec::new(),
		cover_i: None,
		first_publish_year: None,
	}
}

/// A config with the stock thresholds: 2-character suggestion minimum, 300 ms
/// debounce, 6 suggestions, caps of 10, 120 ms blur grace.
pub fn sample_config() -> Config {
	Config {
		service: Service { log_level: "info".to_string() },
		catalog: Catalog {
			api_base: "https://openlibrary.test".to_string(),
			search_path: "/search.json".to_string(),
			default_query: "classic books".to_string(),
			result_limit: 50,
			timeout_ms: 1_000,
		},
		covers: Covers {
			api_base: "https://covers.openlibrary.test".to_string(),
			size: "M".to_string(),
			placeholder_url: "https://placeholder.test/none.jpg".to_string(),
		},
		suggest: Suggest { min_chars: 2, debounce_ms: 300, max_items: 6, fetch_limit: 20 },
		session: Session { history_cap: 10, recents_cap: 10, blur_grace_ms: 120 },
		storage: Storage { data_dir: "./data".to_string() },
	}
}
