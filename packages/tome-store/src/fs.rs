use std::{
	fs, io,
	path::PathBuf,
};

use crate::{KvStore, Result};

/// File-backed store: one `<name>.json` file per logical name under a data
/// directory. The directory is created lazily on first write.
pub struct FsStore {
	dir: PathBuf,
}
impl FsStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	fn path_of(&self, name: &str) -> PathBuf {
		self.dir.join(format!("{name}.json"))
	}
}
impl KvStore for FsStore {
	fn get(&self, name: &str) -> Result<Option<String>> {
		match fs::read_to_string(self.path_of(name)) {
			Ok(raw) => Ok(Some(raw)),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(err) => Err(err.into()),
		}
	}

	fn set(&self, name: &str, value: &str) -> Result<()> {
		fs::create_dir_all(&self.dir)?;
		fs::write(self.path_of(name), value)?;

		Ok(())
	}

	fn delete(&self, name: &str) -> Result<()> {
		match fs::remove_file(self.path_of(name)) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
			Err(err) => Err(err.into()),
		}
	}
}
