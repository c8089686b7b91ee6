//! Mobile navigation menu toggle

/// Class added to the links container while the menu is open
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// The two elements the toggle touches: the links container's class list and
/// the toggle control's `aria-expanded` attribute.
#[cfg_attr(test, mockall::automock)]
pub trait MenuControls {
    /// Flip `class` on the links container, returning whether it is now set
    fn toggle_links_class(&mut self, class: &str) -> bool;

    fn is_expanded(&self) -> bool;

    fn set_expanded(&mut self, expanded: bool);
}

/// Handle a click on the menu toggle.
///
/// Flips the class on the links container and flips `aria-expanded` on the
/// toggle, so two clicks always restore both. Returns whether the class is
/// now set.
pub fn toggle_menu<M: MenuControls + ?Sized>(controls: &mut M, class: &str) -> bool {
    let shown = controls.toggle_links_class(class);
    let expanded = !controls.is_expanded();
    controls.set_expanded(expanded);
    tracing::debug!(shown, expanded, "menu toggled");
    shown
}

/// In-memory menu for tests and non-browser hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryMenu {
    pub classes: Vec<String>,
    pub expanded: bool,
}

impl MemoryMenu {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl MenuControls for MemoryMenu {
    fn toggle_links_class(&mut self, class: &str) -> bool {
        if let Some(pos) = self.classes.iter().position(|c| c == class) {
            self.classes.remove(pos);
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}
