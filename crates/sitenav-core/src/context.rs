//! Host navigation context
//!
//! The router never touches `window`, `history` or `document` directly. A host
//! binding implements [`NavigationContext`] over the real browser; tests and
//! non-browser hosts use [`MemoryHistory`].

use crate::section::Section;
use crate::state::NavigationState;

/// Browser surface needed by the view router.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationContext {
    /// Path component of the current URL
    fn current_path(&self) -> String;

    /// Add a history entry (user-initiated navigation)
    fn push_entry(&mut self, state: &NavigationState, url: &str);

    /// Overwrite the current history entry
    fn replace_entry(&mut self, state: &NavigationState, url: &str);

    /// Reset the viewport to (0, 0)
    fn scroll_to_top(&mut self);

    /// Show the content block for `active` and hide every other block
    fn show_content(&mut self, active: Section);
}

/// A single recorded history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: Option<NavigationState>,
    pub url: String,
}

/// In-memory session history with back/forward traversal.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    scroll: (u32, u32),
    visible: Option<Section>,
}

impl MemoryHistory {
    /// Start a session on `path` with a state-less entry, as a fresh page load
    /// would.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                state: None,
                url: path.into(),
            }],
            cursor: 0,
            scroll: (0, 0),
            visible: None,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// State the browser would hand to a `popstate` listener
    pub fn current_state(&self) -> Option<NavigationState> {
        self.current().state.clone()
    }

    /// Move one entry back. Returns false at the start of the session.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one entry forward. Returns false at the end of the session.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn scroll_position(&self) -> (u32, u32) {
        self.scroll
    }

    pub fn scroll_to(&mut self, x: u32, y: u32) {
        self.scroll = (x, y);
    }

    /// Section whose block is currently shown, if any has been shown yet
    pub fn visible(&self) -> Option<Section> {
        self.visible
    }
}

impl NavigationContext for MemoryHistory {
    fn current_path(&self) -> String {
        self.current().url.clone()
    }

    fn push_entry(&mut self, state: &NavigationState, url: &str) {
        // Pushing discards any forward entries
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            state: Some(state.clone()),
            url: url.to_string(),
        });
        self.cursor = self.entries.len() - 1;
    }

    fn replace_entry(&mut self, state: &NavigationState, url: &str) {
        self.entries[self.cursor] = HistoryEntry {
            state: Some(state.clone()),
            url: url.to_string(),
        };
    }

    fn scroll_to_top(&mut self) {
        self.scroll = (0, 0);
    }

    fn show_content(&mut self, active: Section) {
        self.visible = Some(active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_one_stateless_entry() {
        let history = MemoryHistory::new("/terminos");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_path(), "/terminos");
        assert_eq!(history.current_state(), None);
    }

    #[test]
    fn test_push_moves_cursor() {
        let mut history = MemoryHistory::new("/");
        history.push_entry(&NavigationState::new(Section::Terms), "/terminos");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_path(), "/terminos");
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = MemoryHistory::new("/");
        history.push_entry(&NavigationState::new(Section::Terms), "/terminos");

        assert!(history.back());
        assert_eq!(history.current_path(), "/");
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(
            history.current_state(),
            Some(NavigationState::new(Section::Terms))
        );
        assert!(!history.forward());
    }

    #[test]
    fn test_push_after_back_drops_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push_entry(&NavigationState::new(Section::Terms), "/terminos");
        history.back();
        history.push_entry(&NavigationState::new(Section::Privacy), "/privacidad");

        assert_eq!(history.len(), 2);
        assert!(!history.forward());
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::new("/");
        history.replace_entry(&NavigationState::new(Section::Main), "/");
        assert_eq!(history.len(), 1);
        assert_eq!(
            history.current_state(),
            Some(NavigationState::new(Section::Main))
        );
    }

    #[test]
    fn test_scroll_to_top() {
        let mut history = MemoryHistory::new("/");
        history.scroll_to(0, 840);
        history.scroll_to_top();
        assert_eq!(history.scroll_position(), (0, 0));
    }
}
