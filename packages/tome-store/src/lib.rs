pub mod fs;

mod error;

pub use error::{Error, Result};

/// Key-value persistence port. Values are full serialized collections kept
/// under fixed logical names; callers always overwrite, never merge, so
/// last-writer-wins is the intended semantics.
pub trait KvStore
where
	Self: Send + Sync,
{
	fn get(&self, name: &str) -> Result<Option<String>>;
	fn set(&self, name: &str, value: &str) -> Result<()>;
	fn delete(&self, name: &str) -> Result<()>;
}
