//! Todo CLI library.
//!
//! This crate provides the todo session, its single-letter command
//! language, and the interactive REPL that drives them.

pub mod cli;
pub mod command;
pub mod error;
pub mod input;
pub mod render;
pub mod repl;
pub mod session;

pub use command::Command;
pub use error::{Result, SessionError};
pub use session::{Listing, SessionConfig, TodoSession, DEFAULT_STORE_PATH};
