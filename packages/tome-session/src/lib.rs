pub mod executor;
pub mod favorites;
pub mod history;
pub mod recents;
pub mod suggest;

mod persist;
mod session;

pub use executor::SearchExecutor;
pub use favorites::FavoritesSet;
pub use history::HistoryStore;
pub use recents::RecentsStore;
pub use session::Session;
pub use suggest::SuggestionPipeline;

use std::{
	future::Future,
	pin::Pin,
	sync::{Arc, Mutex, MutexGuard},
};

use tome_domain::Book;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The remote catalog seam. The session only ever sees this trait; the live
/// implementation forwards to [`tome_catalog`], tests substitute stubs.
pub trait CatalogProvider
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		cfg: &'a tome_config::Catalog,
		query: &'a str,
		limit: u32,
	) -> BoxFuture<'a, tome_catalog::Result<Vec<Book>>>;
}

struct DefaultProvider;
impl CatalogProvider for DefaultProvider {
	fn search<'a>(
		&'a self,
		cfg: &'a tome_config::Catalog,
		query: &'a str,
		limit: u32,
	) -> BoxFuture<'a, tome_catalog::Result<Vec<Book>>> {
		Box::pin(tome_catalog::search::search_books(cfg, query, limit))
	}
}

#[derive(Clone)]
pub struct Providers {
	pub catalog: Arc<dyn CatalogProvider>,
}
impl Providers {
	pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
		Self { catalog }
	}
}
impl Default for Providers {
	fn default() -> Self {
		Self { catalog: Arc::new(DefaultProvider) }
	}
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|err| err.into_inner())
}
