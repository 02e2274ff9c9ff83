use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One catalog record. Field names follow the catalog wire shape; a record is
/// never mutated after it has been fetched.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Book {
	pub key: String,
	pub title: String,
	#[serde(default)]
	pub author_name: Vec<String>,
	pub cover_i: Option<i64>,
	pub first_publish_year: Option<i32>,
}

/// A [`Book`] the user opened, stamped with the moment it was viewed. Viewing
/// the same key again supersedes the old entry instead of duplicating it.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RecentEntry {
	#[serde(flatten)]
	pub book: Book,
	#[serde(with = "crate::time_serde")]
	pub viewed_at: OffsetDateTime,
}
