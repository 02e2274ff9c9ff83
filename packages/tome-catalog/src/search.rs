use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use tome_domain::Book;

use crate::Result;

/// Free-text lookup against the catalog search endpoint. Records the endpoint
/// cannot shape into a [`Book`] (missing key or title) are dropped rather than
/// failing the whole response.
pub async fn search_books(
	cfg: &tome_config::Catalog,
	query: &str,
	limit: u32,
) -> Result<Vec<Book>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.search_path);
	let res = client
		.get(url)
		.query(&[("q", query), ("limit", limit.to_string().as_str())])
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	Ok(parse_search_response(json))
}

fn parse_search_response(json: Value) -> Vec<Book> {
	// A body without a docs array is a normal empty result, not an error.
	let Some(docs) = json.get("docs").and_then(|v| v.as_array()) else {
		return Vec::new();
	};

	docs.iter().filter_map(|doc| serde_json::from_value::<Book>(doc.clone()).ok()).collect()
}
