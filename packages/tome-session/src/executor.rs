use std::sync::{Arc, Mutex};

use tome_config::Config;
use tome_domain::Book;

use crate::{CatalogProvider, lock};

/// Issues the primary catalog lookup and owns the result set plus the loading
/// flag. Concurrent lookups carry a generation token; only the latest issued
/// request may apply its response, so results land in submission order.
pub struct SearchExecutor {
	cfg: Arc<Config>,
	catalog: Arc<dyn CatalogProvider>,
	state: Arc<Mutex<ExecutorState>>,
}

#[derive(Default)]
struct ExecutorState {
	results: Vec<Book>,
	loading: bool,
	generation: u64,
}

impl SearchExecutor {
	pub fn new(cfg: Arc<Config>, catalog: Arc<dyn CatalogProvider>) -> Self {
		Self { cfg, catalog, state: Arc::new(Mutex::new(ExecutorState::default())) }
	}

	/// Run a lookup for `term`, falling back to the configured default query
	/// when the term is blank (the initial/home load). Success replaces the
	/// result set; failure logs and leaves the previous results on screen.
	/// Returns whether a fresh result set was applied.
	pub async fn execute(&self, term: &str) -> bool {
		let effective =
			if term.trim().is_empty() { self.cfg.catalog.default_query.as_str() } else { term };
		let token = {
			let mut state = lock(&self.state);

			state.generation += 1;
			state.loading = true;
			state.generation
		};
		let fetched =
			self.catalog.search(&self.cfg.catalog, effective, self.cfg.catalog.result_limit).await;
		let mut state = lock(&self.state);

		if state.generation != token {
			// Superseded while in flight; the newer request owns the state.
			return false;
		}

		state.loading = false;

		match fetched {
			Ok(books) => {
				state.results = books;

				true
			},
			Err(err) => {
				tracing::warn!(
					error = %err,
					query = effective,
					"Catalog lookup failed; keeping previous results."
				);

				false
			},
		}
	}

	pub fn results(&self) -> Vec<Book> {
		lock(&self.state).results.clone()
	}

	pub fn is_loading(&self) -> bool {
		lock(&self.state).loading
	}
}
