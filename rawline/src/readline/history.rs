// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::StdMutex;
use std::sync::{Arc, PoisonError};

/// Handle to one [`HistoryStore`] shared by the [`crate::LineEditor`] that owns it and
/// every session that editor creates. Sessions run one at a time, so the lock is never
/// contended; it exists so the handle can cross a thread boundary along with the editor.
pub type SafeHistory = Arc<StdMutex<HistoryStore>>;

/// Lock `safe_history`, ignoring poisoning. A panic in a previous session can't leave
/// the store in a state that breaks its own invariants, since every method is a single
/// `Vec` operation.
pub fn lock_history(
    safe_history: &SafeHistory,
) -> std::sync::MutexGuard<'_, HistoryStore> {
    safe_history.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory history of lines, oldest first. Lives as long as the editor that owns it;
/// nothing is persisted.
///
/// Entries are only ever appended. The one exception is the entry a session is
/// currently viewing, which that session overwrites in place on every edit, so that
/// navigating away and back again returns to the edited text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryStore {
    entries: Vec<String>,
}

impl HistoryStore {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Store pre-populated with `entries`, oldest first.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Append an empty entry and return its index. A new session starts here.
    pub fn start_new_entry(&mut self) -> usize {
        self.entries.push(String::new());
        self.entries.len() - 1
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range. Indices come from [`Self::start_new_entry`]
    /// and clamped navigation, so this is a bug in the caller.
    #[must_use]
    pub fn get(&self, index: usize) -> &str {
        assert!(
            index < self.entries.len(),
            "history index {index} out of range (len {})",
            self.entries.len()
        );
        &self.entries[index]
    }

    /// Overwrite the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, same as [`Self::get`].
    pub fn set(&mut self, index: usize, value: &str) {
        assert!(
            index < self.entries.len(),
            "history index {index} out of range (len {})",
            self.entries.len()
        );
        let entry = &mut self.entries[index];
        entry.clear();
        entry.push_str(value);
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Index of the newest entry, or `None` if the store is empty.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> { self.entries.len().checked_sub(1) }

    #[must_use]
    pub fn entries(&self) -> &[String] { &self.entries }
}
