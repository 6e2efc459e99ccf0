//! The in-memory todo list.
//!
//! Items are kept in insertion order. An item's index is its current
//! position, not a stored identifier: removing an item shifts every later
//! item down by one.

use serde::{Deserialize, Serialize};

/// An ordered sequence of free-text todo items.
///
/// Duplicates and empty strings are allowed here; rejecting empty input is
/// the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<String>,
}

/// A positioned view of one item, as shown in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from already-ordered items.
    pub fn from_items(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Appends an item and returns its index.
    pub fn push(&mut self, text: impl Into<String>) -> usize {
        self.items.push(text.into());
        self.items.len() - 1
    }

    /// Removes the item at `index`, shifting later items down.
    ///
    /// Returns `None` and leaves the list untouched if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Iterates over the items with their current 0-based indices.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, text)| Entry { index, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut list = TodoList::new();
        assert_eq!(list.push("Buy milk"), 0);
        assert_eq!(list.push("Walk dog"), 1);
        assert_eq!(list.push("Buy milk"), 2);

        let texts: Vec<_> = list.entries().map(|e| e.text).collect();
        assert_eq!(texts, vec!["Buy milk", "Walk dog", "Buy milk"]);
    }

    #[test]
    fn test_entries_have_contiguous_indices() {
        let list = TodoList::from_items(vec!["a".into(), "b".into(), "c".into()]);
        let indices: Vec<_> = list.entries().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_remove_shifts_later_items() {
        let mut list = TodoList::from_items(vec!["a".into(), "b".into(), "c".into(), "d".into()]);

        assert_eq!(list.remove(1), Some("b".to_string()));
        assert_eq!(list.len(), 3);
        assert_eq!(list.items(), &["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = TodoList::from_items(vec!["a".into()]);
        assert_eq!(list.remove(1), None);
        assert_eq!(list.items(), &["a".to_string()]);
    }

    #[test]
    fn test_from_items_keeps_blank_items() {
        let list = TodoList::from_items(vec!["x".into(), String::new(), "y".into()]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.items()[1], "");
    }

    #[test]
    fn test_serializes_as_array() {
        let list = TodoList::from_items(vec!["a".into(), "b".into()]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_entry_serialization() {
        let list = TodoList::from_items(vec!["Walk dog".into()]);
        let entries: Vec<_> = list.entries().collect();
        assert_eq!(
            serde_json::to_string(&entries).unwrap(),
            r#"[{"index":0,"text":"Walk dog"}]"#
        );
    }
}
