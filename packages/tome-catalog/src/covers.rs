use tome_config::Covers;

/// Resolve a cover id to a display image URL; a record without a cover id
/// maps to the configured placeholder.
pub fn cover_url(cfg: &Covers, cover_i: Option<i64>) -> String {
	match cover_i {
		Some(id) => format!("{}/b/id/{id}-{}.jpg", cfg.api_base, cfg.size),
		None => cfg.placeholder_url.clone(),
	}
}
