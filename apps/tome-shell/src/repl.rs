use std::{
	io::{self as std_io, Write},
	time::Duration,
};

use time::format_description::well_known::Rfc3339;
use tokio::{
	io::{self, AsyncBufReadExt, BufReader},
	time as tokio_time,
};

use tome_catalog::covers::cover_url;
use tome_config::Config;
use tome_domain::Dropdown;
use tome_session::Session;

const HELP: &str = "\
Commands:
  <text>            search for <text>
  ? <text>          type <text> into the search box and show the dropdown
  :pick <n>         search for suggestion <n>
  :hist <n>         search for history entry <n>
  :rm <term>        remove <term> from history
  :history          show the search history
  :clear-history    clear the search history
  :view <n>         open result <n> (records it under recents)
  :fav <n>          toggle result <n> as a favorite
  :favorites        toggle the favorites view
  :recents          toggle the recents view
  :clear-recents    clear the recently viewed list
  :home             reset to the default results
  :help             show this help
  :quit             exit";

pub async fn run(session: &Session, config: &Config) -> color_eyre::Result<()> {
	let mut lines = BufReader::new(io::stdin()).lines();

	println!("{HELP}");
	render_books(session, config);
	prompt()?;

	while let Some(line) = lines.next_line().await? {
		let line = line.trim();

		match line {
			"" => {},
			":q" | ":quit" => break,
			":help" => println!("{HELP}"),
			":home" => {
				session.home().await;
				render_books(session, config);
			},
			":history" => render_history(session),
			":clear-history" => {
				session.clear_history();
				println!("History cleared.");
			},
			":favorites" => {
				session.toggle_favorites_view();
				render_books(session, config);
			},
			":recents" => {
				session.toggle_recents_view();
				render_recents(session);
			},
			":clear-recents" => {
				session.clear_recents();
				println!("Recents cleared.");
			},
			_ =>
				if let Some(term) = line.strip_prefix("? ") {
					type_into_search(session, config, term).await;
				} else if let Some(raw) = line.strip_prefix(":pick ") {
					pick_suggestion(session, config, raw).await;
				} else if let Some(raw) = line.strip_prefix(":hist ") {
					pick_history(session, config, raw).await;
				} else if let Some(term) = line.strip_prefix(":rm ") {
					session.remove_history(term);
					render_history(session);
				} else if let Some(raw) = line.strip_prefix(":view ") {
					view_result(session, raw);
				} else if let Some(raw) = line.strip_prefix(":fav ") {
					toggle_favorite(session, raw);
				} else if line.starts_with(':') {
					println!("Unknown command; :help lists the commands.");
				} else {
					session.set_query(line);
					session.submit().await;
					render_books(session, config);
				},
		}

		prompt()?;
	}

	Ok(())
}

/// Simulates typing into the focused search box: feeds the pipeline, waits
/// out the debounce window, and shows whichever dropdown derives visible.
async fn type_into_search(session: &Session, config: &Config, text: &str) {
	session.focus();
	session.set_query(text);

	tokio_time::sleep(Duration::from_millis(config.suggest.debounce_ms + 50)).await;

	match session.dropdown() {
		Dropdown::Suggestions => {
			println!("Suggestions:");

			for (i, title) in session.suggestions().iter().enumerate() {
				println!("  [{i}] {title}");
			}
		},
		Dropdown::History => {
			println!("History:");

			for (i, term) in session.history().iter().enumerate() {
				println!("  [{i}] {term}");
			}
		},
		Dropdown::None => println!("(no dropdown)"),
	}
}

async fn pick_suggestion(session: &Session, config: &Config, raw: &str) {
	let Some(title) = parse_index(raw).and_then(|i| session.suggestions().get(i).cloned()) else {
		println!("No such suggestion.");

		return;
	};

	session.pick_suggestion(&title).await;
	render_books(session, config);
}

async fn pick_history(session: &Session, config: &Config, raw: &str) {
	let Some(term) = parse_index(raw).and_then(|i| session.history().get(i).cloned()) else {
		println!("No such history entry.");

		return;
	};

	session.pick_history(&term).await;
	render_books(session, config);
}

fn view_result(session: &Session, raw: &str) {
	let Some(book) = parse_index(raw).and_then(|i| session.displayed_books().get(i).cloned())
	else {
		println!("No such result.");

		return;
	};

	println!("Opened \"{}\".", book.title);
	session.view(book);
}

fn toggle_favorite(session: &Session, raw: &str) {
	let Some(book) = parse_index(raw).and_then(|i| session.displayed_books().get(i).cloned())
	else {
		println!("No such result.");

		return;
	};

	let title = book.title.clone();

	if session.toggle_favorite(book) {
		println!("Added \"{title}\" to favorites.");
	} else {
		println!("Removed \"{title}\" from favorites.");
	}
}

fn render_books(session: &Session, config: &Config) {
	let books = session.displayed_books();

	if books.is_empty() {
		println!("No books found.");

		return;
	}

	for (i, book) in books.iter().enumerate() {
		let star = if session.is_favorite(&book.key) { "*" } else { " " };
		let authors = if book.author_name.is_empty() {
			"Unknown Author".to_string()
		} else {
			book.author_name.join(", ")
		};
		let year = book
			.first_publish_year
			.map(|year| year.to_string())
			.unwrap_or_else(|| "N/A".to_string());

		println!("{star}[{i}] {} - {authors} ({year})", book.title);
		println!("      {}", cover_url(&config.covers, book.cover_i));
	}
}

fn render_recents(session: &Session) {
	let entries = session.recents();

	if entries.is_empty() {
		println!("No recent books viewed yet.");

		return;
	}

	for (i, entry) in entries.iter().enumerate() {
		let viewed = entry.viewed_at.format(&Rfc3339).unwrap_or_else(|_| "unknown".to_string());

		println!("[{i}] {} (viewed {viewed})", entry.book.title);
	}
}

fn render_history(session: &Session) {
	let terms = session.history();

	if terms.is_empty() {
		println!("No history found.");

		return;
	}

	for (i, term) in terms.iter().enumerate() {
		println!("[{i}] {term}");
	}
}

fn parse_index(raw: &str) -> Option<usize> {
	raw.trim().parse().ok()
}

fn prompt() -> std_io::Result<()> {
	let mut stdout = std_io::stdout();

	write!(stdout, "> ")?;
	stdout.flush()
}
