//! Line-oriented text file storage for the todo manager.
//!
//! A [`LineStore`] wraps one text file and gates every read and write on
//! the [`OpenMode`] capabilities it was opened with.
//!
//! # Example
//!
//! ```no_run
//! use todo_store::{LineStore, OpenMode};
//!
//! let mut store = LineStore::open("store.txt", OpenMode::DEFAULT).unwrap();
//! store.write_line("Buy milk").unwrap();
//!
//! let lines = store.read_lines().unwrap();
//! assert_eq!(lines.last().map(String::as_str), Some("Buy milk"));
//! ```

pub mod error;
pub mod line_store;
pub mod mode;

pub use error::{Result, StoreError};
pub use line_store::LineStore;
pub use mode::OpenMode;
