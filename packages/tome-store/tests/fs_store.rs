use tome_store::{KvStore, fs::FsStore};

#[test]
fn get_of_an_unwritten_name_is_none() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let store = FsStore::new(dir.path());

	assert!(store.get("search_history").expect("Read must succeed.").is_none());
}

#[test]
fn set_then_get_round_trips_the_value() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let store = FsStore::new(dir.path().join("nested"));

	store.set("search_history", r#"["dune"]"#).expect("Write must succeed.");

	let raw = store.get("search_history").expect("Read must succeed.");

	assert_eq!(raw.as_deref(), Some(r#"["dune"]"#));
}

#[test]
fn set_overwrites_the_previous_value() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let store = FsStore::new(dir.path());

	store.set("recent_books", "[]").expect("Write must succeed.");
	store.set("recent_books", r#"[{"key":"/works/OL1W"}]"#).expect("Write must succeed.");

	let raw = store.get("recent_books").expect("Read must succeed.");

	assert_eq!(raw.as_deref(), Some(r#"[{"key":"/works/OL1W"}]"#));
}

#[test]
fn delete_removes_the_value_and_tolerates_absence() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let store = FsStore::new(dir.path());

	store.set("search_history", "[]").expect("Write must succeed.");
	store.delete("search_history").expect("Delete must succeed.");

	assert!(store.get("search_history").expect("Read must succeed.").is_none());

	// Deleting again is a no-op, not an error.
	store.delete("search_history").expect("Deleting an absent name must succeed.");
}
