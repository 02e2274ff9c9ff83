/// An ordered collection with a fixed capacity. Insertion always lands at the
/// front; inserting a key that is already present moves it to the front
/// instead of duplicating it, and anything past the capacity falls off the
/// tail. Absence is a normal case for every operation.
#[derive(Clone, Debug)]
pub struct BoundedList<T> {
	items: Vec<T>,
	cap: usize,
}
impl<T> BoundedList<T> {
	pub fn new(cap: usize) -> Self {
		Self { items: Vec::new(), cap }
	}

	pub fn from_items(mut items: Vec<T>, cap: usize) -> Self {
		items.truncate(cap);

		Self { items, cap }
	}

	pub fn push_front<K>(&mut self, item: T, key_of: impl Fn(&T) -> K)
	where
		K: PartialEq,
	{
		let key = key_of(&item);

		self.items.retain(|existing| key_of(existing) != key);
		self.items.insert(0, item);
		self.items.truncate(self.cap);
	}

	pub fn remove_by(&mut self, matches: impl Fn(&T) -> bool) -> bool {
		let before = self.items.len();

		self.items.retain(|item| !matches(item));

		self.items.len() != before
	}

	pub fn clear(&mut self) {
		self.items.clear();
	}

	pub fn items(&self) -> &[T] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
