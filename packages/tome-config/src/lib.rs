mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, Covers, Service, Session, Storage, Suggest};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "catalog.api_base must be non-empty.".to_string(),
		});
	}
	if !cfg.catalog.search_path.starts_with('/') {
		return Err(Error::Validation {
			message: "catalog.search_path must start with a slash.".to_string(),
		});
	}
	if cfg.catalog.default_query.trim().is_empty() {
		return Err(Error::Validation {
			message: "catalog.default_query must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.result_limit == 0 {
		return Err(Error::Validation {
			message: "catalog.result_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.catalog.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "catalog.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.covers.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "covers.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.covers.size.trim().is_empty() {
		return Err(Error::Validation { message: "covers.size must be non-empty.".to_string() });
	}
	if cfg.covers.placeholder_url.trim().is_empty() {
		return Err(Error::Validation {
			message: "covers.placeholder_url must be non-empty.".to_string(),
		});
	}
	if cfg.suggest.min_chars == 0 {
		return Err(Error::Validation {
			message: "suggest.min_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.suggest.debounce_ms == 0 {
		return Err(Error::Validation {
			message: "suggest.debounce_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.suggest.max_items == 0 {
		return Err(Error::Validation {
			message: "suggest.max_items must be greater than zero.".to_string(),
		});
	}
	if cfg.suggest.fetch_limit < cfg.suggest.max_items as u32 {
		return Err(Error::Validation {
			message: "suggest.fetch_limit must be at least suggest.max_items.".to_string(),
		});
	}
	if cfg.session.history_cap == 0 {
		return Err(Error::Validation {
			message: "session.history_cap must be greater than zero.".to_string(),
		});
	}
	if cfg.session.recents_cap == 0 {
		return Err(Error::Validation {
			message: "session.recents_cap must be greater than zero.".to_string(),
		});
	}
	if cfg.storage.data_dir.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.data_dir must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.catalog.api_base.ends_with('/') {
		cfg.catalog.api_base.pop();
	}
	while cfg.covers.api_base.ends_with('/') {
		cfg.covers.api_base.pop();
	}
}
