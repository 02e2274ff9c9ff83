use std::sync::Arc;

use tome_domain::BoundedList;
use tome_store::KvStore;

use crate::persist::{load_collection, persist_collection};

/// Logical name the search-term history persists under.
pub const HISTORY_STORE: &str = "search_history";

/// Bounded, deduplicated search-term history, persisted through the injected
/// store on every mutation. Terms compare by exact string match.
pub struct HistoryStore {
	list: BoundedList<String>,
	store: Arc<dyn KvStore>,
}
impl HistoryStore {
	pub fn load(store: Arc<dyn KvStore>, cap: usize) -> Self {
		let list = BoundedList::from_items(load_collection(store.as_ref(), HISTORY_STORE), cap);

		Self { list, store }
	}

	/// Record a searched term at the front. Blank terms are a no-op, not an
	/// error; a term already present moves to the front.
	pub fn push(&mut self, term: &str) {
		if term.trim().is_empty() {
			return;
		}

		self.list.push_front(term.to_string(), |existing| existing.clone());
		self.persist();
	}

	pub fn remove(&mut self, term: &str) {
		if self.list.remove_by(|existing| existing == term) {
			self.persist();
		}
	}

	pub fn clear(&mut self) {
		self.list.clear();

		if let Err(err) = self.store.delete(HISTORY_STORE) {
			tracing::warn!(error = %err, "Failed to delete persisted search history.");
		}
	}

	pub fn terms(&self) -> &[String] {
		self.list.items()
	}

	pub fn len(&self) -> usize {
		self.list.len()
	}

	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}

	fn persist(&self) {
		persist_collection(self.store.as_ref(), HISTORY_STORE, self.list.items());
	}
}
