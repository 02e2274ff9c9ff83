use std::{
	collections::HashMap,
	sync::{Arc, Mutex},
	time::Duration,
};

use tokio::time;

use tome_domain::Book;
use tome_session::{BoxFuture, CatalogProvider, Providers, Session};
use tome_testkit::{MemoryStore, book, sample_config};

struct ScriptedCatalog {
	script: HashMap<String, Script>,
	queries: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct Script {
	delay_ms: u64,
	books: Option<Vec<Book>>,
}

impl ScriptedCatalog {
	fn new(entries: impl IntoIterator<Item = (&'static str, Script)>) -> Self {
		Self {
			script: entries.into_iter().map(|(query, script)| (query.to_string(), script)).collect(),
			queries: Arc::new(Mutex::new(Vec::new())),
		}
	}

	fn queries(&self) -> Arc<Mutex<Vec<String>>> {
		self.queries.clone()
	}
}
impl CatalogProvider for ScriptedCatalog {
	fn search<'a>(
		&'a self,
		_cfg: &'a tome_config::Catalog,
		query: &'a str,
		_limit: u32,
	) -> BoxFuture<'a, tome_catalog::Result<Vec<Book>>> {
		self.queries.lock().expect("Query log must lock.").push(query.to_string());

		let script =
			self.script.get(query).cloned().unwrap_or(Script { delay_ms: 0, books: Some(Vec::new()) });

		Box::pin(async move {
			time::sleep(Duration::from_millis(script.delay_ms)).await;

			match script.books {
				Some(books) => Ok(books),
				None => Err(tome_catalog::Error::Unavailable("scripted outage".to_string())),
			}
		})
	}
}

fn session_with(catalog: ScriptedCatalog) -> (Session, Arc<Mutex<Vec<String>>>) {
	let queries = catalog.queries();
	let session = Session::with_providers(
		sample_config(),
		Arc::new(MemoryStore::new()),
		Providers::new(Arc::new(catalog)),
	);

	(session, queries)
}

#[tokio::test(start_paused = true)]
async fn home_runs_the_default_query_without_recording_history() {
	let (session, queries) = session_with(ScriptedCatalog::new([(
		"classic books",
		Script { delay_ms: 0, books: Some(vec![book("/works/OL1W", "Pride and Prejudice")]) },
	)]));

	session.home().await;

	assert_eq!(*queries.lock().expect("Query log must lock."), ["classic books".to_string()]);
	assert_eq!(session.results().len(), 1);
	assert!(session.history().is_empty());
	assert!(!session.is_loading());
}

#[tokio::test(start_paused = true)]
async fn a_successful_submit_applies_results_and_records_history() {
	let (session, _) = session_with(ScriptedCatalog::new([(
		"dune",
		Script { delay_ms: 0, books: Some(vec![book("/works/OL1W", "Dune")]) },
	)]));

	session.set_query("dune");
	session.submit().await;

	assert_eq!(session.results()[0].title, "Dune");
	assert_eq!(session.history(), ["dune".to_string()]);
	assert!(!session.is_loading());
}

#[tokio::test(start_paused = true)]
async fn a_blank_submit_is_a_no_op() {
	let (session, queries) = session_with(ScriptedCatalog::new([]));

	session.set_query("   ");
	session.submit().await;

	assert!(queries.lock().expect("Query log must lock.").is_empty());
	assert!(session.history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn a_failed_lookup_keeps_previous_results_and_skips_history() {
	let (session, _) = session_with(ScriptedCatalog::new([
		("dune", Script { delay_ms: 0, books: Some(vec![book("/works/OL1W", "Dune")]) }),
		("zzzz", Script { delay_ms: 0, books: None }),
	]));

	session.set_query("dune");
	session.submit().await;
	session.set_query("zzzz");
	session.submit().await;

	// The failed search leaves the previous results on screen and is not
	// recorded; the loading flag still settles.
	assert_eq!(session.results()[0].title, "Dune");
	assert_eq!(session.history(), ["dune".to_string()]);
	assert!(!session.is_loading());
}

#[tokio::test(start_paused = true)]
async fn an_empty_response_empties_the_results_and_still_counts() {
	let (session, _) = session_with(ScriptedCatalog::new([
		("dune", Script { delay_ms: 0, books: Some(vec![book("/works/OL1W", "Dune")]) }),
		("nothing here", Script { delay_ms: 0, books: Some(Vec::new()) }),
	]));

	session.set_query("dune");
	session.submit().await;
	session.set_query("nothing here");
	session.submit().await;

	assert!(session.results().is_empty());
	assert_eq!(session.history(), ["nothing here".to_string(), "dune".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn picking_a_history_term_moves_it_to_the_front() {
	let (session, _) = session_with(ScriptedCatalog::new([
		("dune", Script { delay_ms: 0, books: Some(vec![book("/works/OL1W", "Dune")]) }),
		("hobbit", Script { delay_ms: 0, books: Some(vec![book("/works/OL2W", "The Hobbit")]) }),
	]));

	session.set_query("dune");
	session.submit().await;
	session.set_query("hobbit");
	session.submit().await;
	session.pick_history("dune").await;

	assert_eq!(session.query(), "dune");
	assert_eq!(session.history(), ["dune".to_string(), "hobbit".to_string()]);
	assert_eq!(session.results()[0].title, "Dune");
}

#[tokio::test(start_paused = true)]
async fn a_superseded_lookup_never_overwrites_the_newer_results() {
	let (session, _) = session_with(ScriptedCatalog::new([
		("slow", Script { delay_ms: 500, books: Some(vec![book("/works/OL1W", "Slow")]) }),
		("fast", Script { delay_ms: 10, books: Some(vec![book("/works/OL2W", "Fast")]) }),
	]));

	tokio::join!(session.pick_history("slow"), session.pick_history("fast"));

	// The slow response arrived last but was issued first; submission order
	// wins, so only the fast lookup applied.
	assert_eq!(session.results()[0].title, "Fast");
	assert_eq!(session.history(), ["fast".to_string()]);
	assert!(!session.is_loading());
}
