use std::{
	collections::HashSet,
	sync::{Arc, Mutex},
	time::Duration,
};

use tokio::time;

use tome_config::Config;
use tome_domain::Book;

use crate::{CatalogProvider, lock};

/// Debounced title-suggestion pipeline.
///
/// Every query edit bumps a generation counter. Edits at or above the minimum
/// length spawn a task that sleeps through the debounce window and then
/// re-checks the generation: a superseded task exits without fetching, so a
/// new edit implicitly cancels the pending one. The generation is checked
/// again when the response arrives, which discards stale responses from
/// lookups that were already in flight when a newer edit happened.
pub struct SuggestionPipeline {
	cfg: Arc<Config>,
	catalog: Arc<dyn CatalogProvider>,
	state: Arc<Mutex<PipelineState>>,
}

#[derive(Default)]
struct PipelineState {
	query: String,
	suggestions: Vec<String>,
	generation: u64,
}

impl SuggestionPipeline {
	pub fn new(cfg: Arc<Config>, catalog: Arc<dyn CatalogProvider>) -> Self {
		Self { cfg, catalog, state: Arc::new(Mutex::new(PipelineState::default())) }
	}

	/// Feed a query edit. Below the minimum length the suggestions clear
	/// immediately and any pending lookup is dropped; otherwise the debounce
	/// window restarts for the new value.
	pub fn on_query_change(&self, query: &str) {
		let token = {
			let mut state = lock(&self.state);

			state.query = query.to_string();
			state.generation += 1;

			if query.chars().count() < self.cfg.suggest.min_chars {
				state.suggestions.clear();

				return;
			}

			state.generation
		};

		tokio::spawn(debounced_lookup(
			self.cfg.clone(),
			self.catalog.clone(),
			self.state.clone(),
			token,
		));
	}

	/// Drop the current suggestions and invalidate anything pending or in
	/// flight. Used on submit, select, and home reset.
	pub fn clear(&self) {
		let mut state = lock(&self.state);

		state.suggestions.clear();
		state.generation += 1;
	}

	pub fn suggestions(&self) -> Vec<String> {
		lock(&self.state).suggestions.clone()
	}

	pub fn count(&self) -> usize {
		lock(&self.state).suggestions.len()
	}
}

async fn debounced_lookup(
	cfg: Arc<Config>,
	catalog: Arc<dyn CatalogProvider>,
	state: Arc<Mutex<PipelineState>>,
	token: u64,
) {
	time::sleep(Duration::from_millis(cfg.suggest.debounce_ms)).await;

	// The query at fire time; a newer edit means this timer was superseded.
	let query = {
		let state = lock(&state);

		if state.generation != token {
			return;
		}

		state.query.clone()
	};

	match catalog.search(&cfg.catalog, &query, cfg.suggest.fetch_limit).await {
		Ok(books) => {
			let titles = distinct_titles(&books, cfg.suggest.max_items);
			let mut state = lock(&state);

			if state.generation == token {
				state.suggestions = titles;
			}
		},
		// A failed lookup leaves whatever was on screen; no retry, no error
		// surface.
		Err(err) => tracing::warn!(error = %err, query, "Suggestion lookup failed."),
	}
}

fn distinct_titles(books: &[Book], max: usize) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut titles = Vec::new();

	for book in books {
		if book.title.is_empty() || !seen.insert(book.title.clone()) {
			continue;
		}

		titles.push(book.title.clone());

		if titles.len() == max {
			break;
		}
	}

	titles
}

#[cfg(test)]
mod tests {
	use super::*;

	fn book(title: &str) -> Book {
		Book {
			key: format!("/works/{title}"),
			title: title.to_string(),
			author_name: Vec::new(),
			cover_i: None,
			first_publish_year: None,
		}
	}

	#[test]
	fn distinct_titles_keeps_first_seen_order_and_caps() {
		let books = ["Dune", "Dune Messiah", "Dune", "", "Children of Dune"]
			.into_iter()
			.map(book)
			.collect::<Vec<_>>();
		let titles = distinct_titles(&books, 2);

		assert_eq!(titles, ["Dune".to_string(), "Dune Messiah".to_string()]);
	}

	#[test]
	fn distinct_titles_drops_empty_titles() {
		let books = ["", "Solaris"].into_iter().map(book).collect::<Vec<_>>();

		assert_eq!(distinct_titles(&books, 6), ["Solaris".to_string()]);
	}
}
