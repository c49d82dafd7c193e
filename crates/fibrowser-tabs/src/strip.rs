//! Tab strip
//!
//! Ordered tabs with exactly one current. The strip is built around a first
//! tab and refuses to close its last one, so it is never empty.

use crate::error::TabError;
use crate::tab::{TabId, TabState};
use crate::Result;

#[derive(Debug)]
pub struct TabStrip {
    tabs: Vec<TabState>,
    current: usize,
}

impl TabStrip {
    pub fn new(first: TabState) -> Self {
        Self {
            tabs: vec![first],
            current: 0,
        }
    }

    /// Append a tab without changing the current one; returns its index
    pub fn push(&mut self, tab: TabState) -> usize {
        self.tabs.push(tab);
        self.tabs.len() - 1
    }

    /// Close the tab at `index`.
    ///
    /// When the current tab goes away, the tab sliding into its index (or
    /// the new last tab) becomes current.
    pub fn close(&mut self, index: usize) -> Result<TabState> {
        if index >= self.tabs.len() {
            return Err(TabError::IndexOutOfRange(index));
        }
        if self.tabs.len() == 1 {
            return Err(TabError::LastTab);
        }

        let tab = self.tabs.remove(index);
        if index < self.current || self.current == self.tabs.len() {
            self.current -= 1;
        }

        tracing::info!(tab_id = %tab.id(), index, "Closed tab");

        Ok(tab)
    }

    pub fn set_current(&mut self, index: usize) -> Result<&mut TabState> {
        if index >= self.tabs.len() {
            return Err(TabError::IndexOutOfRange(index));
        }
        self.current = index;
        Ok(&mut self.tabs[index])
    }

    /// Move to the next tab, wrapping around; returns the new index
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.tabs.len();
        self.current
    }

    /// Move to the previous tab, wrapping around; returns the new index
    pub fn previous(&mut self) -> usize {
        let count = self.tabs.len();
        self.current = (self.current + count - 1) % count;
        self.current
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &TabState {
        &self.tabs[self.current]
    }

    pub fn current_mut(&mut self) -> &mut TabState {
        &mut self.tabs[self.current]
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: TabId) -> Result<&TabState> {
        self.tabs
            .iter()
            .find(|t| t.id() == id)
            .ok_or(TabError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: TabId) -> Result<&mut TabState> {
        self.tabs
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TabError::NotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabState> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
