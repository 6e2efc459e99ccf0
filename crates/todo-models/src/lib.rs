//! Core data models for the todo manager.
//!
//! This crate holds the in-memory todo list and the notice types that
//! describe the outcome of each user command, independent of how they are
//! rendered.

pub mod list;
pub mod notice;

pub use list::{Entry, TodoList};
pub use notice::{Notice, NoticeLevel};
