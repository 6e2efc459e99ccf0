//! The todo session: an in-memory list bound to a line store.

use std::path::PathBuf;

use todo_models::{Entry, TodoList};
use todo_store::{LineStore, OpenMode};
use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};

/// Storage path used when none is configured.
pub const DEFAULT_STORE_PATH: &str = "store.txt";

/// Configuration for a [`TodoSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// File the list is loaded from and saved to.
    pub path: PathBuf,
}

impl SessionConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

/// The result of listing the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The list has no items.
    Empty,
    /// Items in ascending index order.
    Entries(Vec<Entry<'a>>),
}

/// An in-memory todo list and the store it persists to.
///
/// Commands mutate memory only. Nothing reaches the file until
/// [`save`](Self::save) is called.
pub struct TodoSession {
    list: TodoList,
    store: LineStore,
    /// Set when the store opened but its contents could not be read.
    load_failed: bool,
}

impl TodoSession {
    /// Opens the configured store and loads every line from it.
    ///
    /// If the store cannot be opened or read the session starts empty;
    /// the failure is logged, not returned.
    pub fn new(config: SessionConfig) -> Self {
        let mut store = LineStore::new(config.path);
        if let Err(e) = store.reopen_with(OpenMode::DEFAULT) {
            warn!(error = %e, "Could not open todo store");
        }
        Self::with_store(store)
    }

    /// Loads every line from an already constructed store.
    ///
    /// A store that is open but unreadable is never overwritten: the
    /// session starts empty and [`save`](Self::save) refuses to run.
    pub fn with_store(mut store: LineStore) -> Self {
        let mut load_failed = false;
        let list = match store.read_lines() {
            Ok(lines) => {
                info!(path = %store.path().display(), count = lines.len(), "Loaded todos");
                TodoList::from_items(lines)
            }
            Err(e) if e.is_not_open() => {
                warn!(error = %e, "Starting with an empty todo list");
                TodoList::new()
            }
            Err(e) => {
                warn!(error = %e, "Store unreadable, saving disabled");
                load_failed = true;
                TodoList::new()
            }
        };

        Self {
            list,
            store,
            load_failed,
        }
    }

    /// Adds a todo to the end of the list and returns its index.
    pub fn add_todo(&mut self, text: &str) -> Result<usize> {
        if text.is_empty() {
            return Err(SessionError::EmptyText);
        }
        let index = self.list.push(text);
        debug!(index, "Added todo");
        Ok(index)
    }

    /// Removes the todo at `index` and returns its text.
    ///
    /// Later todos shift down by one.
    pub fn remove_todo(&mut self, index: i64) -> Result<String> {
        let len = self.list.len();
        let removed = usize::try_from(index)
            .ok()
            .and_then(|i| self.list.remove(i))
            .ok_or(SessionError::OutOfBounds { index, len })?;
        debug!(index, "Removed todo");
        Ok(removed)
    }

    /// Returns the current todos with their indices.
    pub fn list_todo(&self) -> Listing<'_> {
        if self.list.is_empty() {
            Listing::Empty
        } else {
            Listing::Entries(self.list.entries().collect())
        }
    }

    /// Rewrites the store with the current list.
    ///
    /// The store is truncated, every item written in order, and then
    /// reopened with the default mode so later saves and reads still work.
    ///
    /// Fails with [`SessionError::LoadFailed`] without touching the file if
    /// the store could not be read at startup.
    pub fn save(&mut self) -> Result<()> {
        if self.load_failed {
            return Err(SessionError::LoadFailed {
                path: self.store.path().to_path_buf(),
            });
        }
        self.store.clear()?;
        self.store.write_lines(self.list.items())?;
        self.store.flush()?;
        self.store.reopen_with(OpenMode::DEFAULT)?;
        info!(
            path = %self.store.path().display(),
            count = self.list.len(),
            "Saved todos"
        );
        Ok(())
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn store(&self) -> &LineStore {
        &self.store
    }
}
