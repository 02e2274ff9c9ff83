pub mod book;
pub mod bounded;
pub mod time_serde;
pub mod view;

pub use book::{Book, RecentEntry};
pub use bounded::BoundedList;
pub use view::{Dropdown, DropdownInputs, ViewMode, derive_dropdown};
