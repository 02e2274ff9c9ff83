use std::sync::Arc;

use time::OffsetDateTime;

use tome_domain::{Book, BoundedList, RecentEntry};
use tome_store::KvStore;

use crate::persist::{load_collection, persist_collection};

/// Logical name the recently-viewed collection persists under.
pub const RECENTS_STORE: &str = "recent_books";

/// Bounded recently-viewed collection, keyed by catalog key and persisted on
/// every mutation. Viewing a book that is already present supersedes the old
/// entry: position and timestamp refresh, nothing duplicates.
pub struct RecentsStore {
	list: BoundedList<RecentEntry>,
	store: Arc<dyn KvStore>,
}
impl RecentsStore {
	pub fn load(store: Arc<dyn KvStore>, cap: usize) -> Self {
		let list = BoundedList::from_items(load_collection(store.as_ref(), RECENTS_STORE), cap);

		Self { list, store }
	}

	pub fn push(&mut self, book: Book, now: OffsetDateTime) {
		let entry = RecentEntry { book, viewed_at: now };

		self.list.push_front(entry, |existing| existing.book.key.clone());
		persist_collection(self.store.as_ref(), RECENTS_STORE, self.list.items());
	}

	pub fn clear(&mut self) {
		self.list.clear();

		if let Err(err) = self.store.delete(RECENTS_STORE) {
			tracing::warn!(error = %err, "Failed to delete persisted recents.");
		}
	}

	pub fn entries(&self) -> &[RecentEntry] {
		self.list.items()
	}

	pub fn len(&self) -> usize {
		self.list.len()
	}

	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}
}
