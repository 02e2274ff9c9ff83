use std::collections::HashMap;

use tome_domain::Book;

/// In-memory favorites membership, keyed by catalog key. Deliberately not
/// persisted; the set resets with the process.
#[derive(Default)]
pub struct FavoritesSet {
	order: Vec<String>,
	items: HashMap<String, Book>,
}
impl FavoritesSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Flip membership for the book's key and report the new state. Toggling
	/// twice restores the prior membership exactly.
	pub fn toggle(&mut self, book: Book) -> bool {
		if self.items.remove(&book.key).is_some() {
			self.order.retain(|key| key != &book.key);

			false
		} else {
			self.order.push(book.key.clone());
			self.items.insert(book.key.clone(), book);

			true
		}
	}

	pub fn has(&self, key: &str) -> bool {
		self.items.contains_key(key)
	}

	/// Favorited books in first-toggled order.
	pub fn books(&self) -> Vec<Book> {
		self.order.iter().filter_map(|key| self.items.get(key).cloned()).collect()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
