use std::{
	sync::{Arc, Mutex},
	time::Duration,
};

use time::OffsetDateTime;
use tokio::{task::JoinHandle, time as tokio_time};

use tome_config::Config;
use tome_domain::{Book, Dropdown, DropdownInputs, RecentEntry, ViewMode, derive_dropdown};
use tome_store::KvStore;

use crate::{
	FavoritesSet, HistoryStore, Providers, RecentsStore, SearchExecutor, SuggestionPipeline, lock,
};

/// The search/session controller. Owns the query text, the three bounded
/// collections, the suggestion pipeline, the search executor, and the UI
/// signals the dropdown derivation reads. All methods take `&self`; the
/// session is driven from one logical thread and spawns short-lived timer
/// tasks for debounce and blur grace.
pub struct Session {
	cfg: Arc<Config>,
	history: Mutex<HistoryStore>,
	recents: Mutex<RecentsStore>,
	favorites: Mutex<FavoritesSet>,
	suggest: SuggestionPipeline,
	executor: SearchExecutor,
	ui: Arc<Mutex<UiState>>,
	pending_blur: Mutex<Option<JoinHandle<()>>>,
}

#[derive(Default)]
struct UiState {
	query: String,
	focused: bool,
	hovered: bool,
	view: ViewMode,
}

impl Session {
	pub fn new(cfg: Config, store: Arc<dyn KvStore>) -> Self {
		Self::with_providers(cfg, store, Providers::default())
	}

	pub fn with_providers(cfg: Config, store: Arc<dyn KvStore>, providers: Providers) -> Self {
		let cfg = Arc::new(cfg);
		let history = HistoryStore::load(store.clone(), cfg.session.history_cap);
		let recents = RecentsStore::load(store, cfg.session.recents_cap);
		let suggest = SuggestionPipeline::new(cfg.clone(), providers.catalog.clone());
		let executor = SearchExecutor::new(cfg.clone(), providers.catalog);

		Self {
			cfg,
			history: Mutex::new(history),
			recents: Mutex::new(recents),
			favorites: Mutex::new(FavoritesSet::new()),
			suggest,
			executor,
			ui: Arc::new(Mutex::new(UiState::default())),
			pending_blur: Mutex::new(None),
		}
	}

	/// A typed edit: updates the query and feeds the suggestion pipeline.
	pub fn set_query(&self, text: &str) {
		{
			let mut ui = lock(&self.ui);

			ui.query = text.to_string();
		}

		self.suggest.on_query_change(text);
	}

	/// Explicit submit of the current query. Blank queries are a no-op.
	pub async fn submit(&self) {
		let term = lock(&self.ui).query.clone();

		if term.trim().is_empty() {
			return;
		}

		self.select_term(&term).await;
	}

	/// Pick a suggestion from the dropdown: the title becomes the query and
	/// runs as a search.
	pub async fn pick_suggestion(&self, title: &str) {
		{
			let mut ui = lock(&self.ui);

			ui.query = title.to_string();
		}

		self.select_term(title).await;
	}

	/// Pick a past term from the history dropdown. The term becomes the query
	/// without re-entering the suggestion pipeline.
	pub async fn pick_history(&self, term: &str) {
		{
			let mut ui = lock(&self.ui);

			ui.query = term.to_string();
		}

		self.select_term(term).await;
	}

	async fn select_term(&self, term: &str) {
		self.suggest.clear();

		if self.executor.execute(term).await {
			lock(&self.history).push(term);
		}
	}

	/// Reset to the default view: empty query, no suggestions, no dropdown,
	/// normal results from the default lookup. The implicit default load is
	/// not recorded in history.
	pub async fn home(&self) {
		{
			let mut ui = lock(&self.ui);

			ui.query.clear();
			ui.view = ViewMode::Normal;
			ui.focused = false;
			ui.hovered = false;
		}

		self.abort_pending_blur();
		self.suggest.clear();
		self.executor.execute("").await;
	}

	pub fn remove_history(&self, term: &str) {
		lock(&self.history).remove(term);
	}

	pub fn clear_history(&self) {
		lock(&self.history).clear();
	}

	/// Record that a book was opened: it moves to the front of recents with a
	/// fresh timestamp.
	pub fn view(&self, book: Book) {
		lock(&self.recents).push(book, OffsetDateTime::now_utc());
	}

	pub fn clear_recents(&self) {
		lock(&self.recents).clear();
	}

	/// Flip favorite membership; returns whether the book is now favorited.
	pub fn toggle_favorite(&self, book: Book) -> bool {
		lock(&self.favorites).toggle(book)
	}

	pub fn is_favorite(&self, key: &str) -> bool {
		lock(&self.favorites).has(key)
	}

	pub fn toggle_favorites_view(&self) -> ViewMode {
		let mut ui = lock(&self.ui);

		ui.view = ui.view.toggle_favorites();

		ui.view
	}

	pub fn toggle_recents_view(&self) -> ViewMode {
		let mut ui = lock(&self.ui);

		ui.view = ui.view.toggle_recents();

		ui.view
	}

	pub fn focus(&self) {
		self.abort_pending_blur();

		lock(&self.ui).focused = true;
	}

	/// Focus loss does not close the dropdown immediately: a grace task
	/// re-evaluates after the configured delay so a pointer-down selection
	/// inside the dropdown can run first. Hover at the deadline keeps the
	/// dropdown open.
	pub fn blur(&self) {
		let grace = self.cfg.session.blur_grace_ms;
		let ui = self.ui.clone();
		let task = tokio::spawn(async move {
			tokio_time::sleep(Duration::from_millis(grace)).await;

			let mut ui = lock(&ui);

			if !ui.hovered {
				ui.focused = false;
			}
		});

		if let Some(previous) = lock(&self.pending_blur).replace(task) {
			previous.abort();
		}
	}

	pub fn set_hover(&self, hovered: bool) {
		lock(&self.ui).hovered = hovered;
	}

	pub fn query(&self) -> String {
		lock(&self.ui).query.clone()
	}

	pub fn suggestions(&self) -> Vec<String> {
		self.suggest.suggestions()
	}

	pub fn results(&self) -> Vec<Book> {
		self.executor.results()
	}

	pub fn is_loading(&self) -> bool {
		self.executor.is_loading()
	}

	pub fn history(&self) -> Vec<String> {
		lock(&self.history).terms().to_vec()
	}

	pub fn recents(&self) -> Vec<RecentEntry> {
		lock(&self.recents).entries().to_vec()
	}

	pub fn favorites(&self) -> Vec<Book> {
		lock(&self.favorites).books()
	}

	pub fn view_mode(&self) -> ViewMode {
		lock(&self.ui).view
	}

	/// Which overlay panel is visible right now, derived fresh on every read.
	pub fn dropdown(&self) -> Dropdown {
		let (focused, hovered, query_chars) = {
			let ui = lock(&self.ui);

			(ui.focused, ui.hovered, ui.query.chars().count())
		};

		derive_dropdown(&DropdownInputs {
			focused,
			hovered,
			query_chars,
			min_query_chars: self.cfg.suggest.min_chars,
			suggestion_count: self.suggest.count(),
			history_count: lock(&self.history).len(),
		})
	}

	/// The books the results pane renders for the current view mode.
	pub fn displayed_books(&self) -> Vec<Book> {
		match self.view_mode() {
			ViewMode::Normal => self.results(),
			ViewMode::Favorites => self.favorites(),
			ViewMode::Recents => self.recents().into_iter().map(|entry| entry.book).collect(),
		}
	}

	fn abort_pending_blur(&self) {
		if let Some(task) = lock(&self.pending_blur).take() {
			task.abort();
		}
	}
}
