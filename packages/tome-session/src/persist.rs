use serde::{Serialize, de::DeserializeOwned};

use tome_store::KvStore;

/// Load a persisted collection, treating absence and unreadable data as an
/// empty collection. Never fatal.
pub(crate) fn load_collection<T>(store: &dyn KvStore, name: &str) -> Vec<T>
where
	T: DeserializeOwned,
{
	let raw = match store.get(name) {
		Ok(Some(raw)) => raw,
		Ok(None) => return Vec::new(),
		Err(err) => {
			tracing::warn!(error = %err, name, "Failed to read persisted collection.");

			return Vec::new();
		},
	};

	match serde_json::from_str(&raw) {
		Ok(items) => items,
		Err(err) => {
			tracing::warn!(error = %err, name, "Persisted collection is unreadable; starting empty.");

			Vec::new()
		},
	}
}

/// Overwrite the persisted form of a collection. Failures degrade silently to
/// in-memory-only state.
pub(crate) fn persist_collection<T>(store: &dyn KvStore, name: &str, items: &[T])
where
	T: Serialize,
{
	let raw = match serde_json::to_string(items) {
		Ok(raw) => raw,
		Err(err) => {
			tracing::error!(error = %err, name, "Failed to serialize collection.");

			return;
		},
	};

	if let Err(err) = store.set(name, &raw) {
		tracing::warn!(error = %err, name, "Failed to persist collection.");
	}
}
