//! View router: which section is shown, and how the URL and history follow it

use crate::context::NavigationContext;
use crate::error::Result;
use crate::routes::RouteTable;
use crate::section::Section;
use crate::state::NavigationState;

/// Routes between sections over an injected [`NavigationContext`].
///
/// `current` always holds exactly one section and only changes through
/// [`ViewRouter::activate_section`].
#[derive(Debug)]
pub struct ViewRouter<C> {
    routes: RouteTable,
    context: C,
    current: Section,
}

impl<C: NavigationContext> ViewRouter<C> {
    pub fn new(routes: RouteTable, context: C) -> Self {
        Self {
            routes,
            context,
            current: Section::default(),
        }
    }

    pub fn with_default_routes(context: C) -> Self {
        Self::new(RouteTable::default(), context)
    }

    pub fn current_section(&self) -> Section {
        self.current
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Show `section` and scroll to the top.
    ///
    /// With `record_history` set (direct user navigation) a single history
    /// entry is pushed for the section's path. Replays of existing history
    /// pass `false`.
    pub fn activate_section(&mut self, section: Section, record_history: bool) {
        self.current = section;
        self.context.show_content(section);

        if record_history {
            let url = self.routes.path_for(section).to_string();
            self.context.push_entry(&NavigationState::new(section), &url);
            tracing::debug!(section = %section, url = %url, "pushed history entry");
        }

        self.context.scroll_to_top();
    }

    /// Entry point for inline markup, e.g. `showSection('privacy')`.
    ///
    /// Unknown identifiers leave content, scroll and history untouched.
    pub fn activate_by_id(&mut self, id: &str, record_history: bool) -> Result<()> {
        match Section::parse(id) {
            Ok(section) => {
                self.activate_section(section, record_history);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Ignoring navigation to unknown section {:?}", id);
                Err(e)
            }
        }
    }

    /// Section for the current URL path, [`Section::Main`] when unmapped.
    pub fn resolve_section_from_path(&self) -> Section {
        self.routes.resolve(&self.context.current_path())
    }

    /// First page load: stamp the existing entry with its section, then show
    /// it without adding another entry.
    pub fn handle_initial_load(&mut self) {
        let path = self.context.current_path();
        let section = self.routes.resolve(&path);
        tracing::debug!(section = %section, path = %path, "initial load");

        self.context.replace_entry(&NavigationState::new(section), &path);
        self.activate_section(section, false);
    }

    /// Back/forward navigation.
    ///
    /// Entries without a usable stored section (created before state was
    /// recorded, or by other scripts) fall back to the URL.
    pub fn handle_pop_state(&mut self, state: Option<NavigationState>) {
        let section = match state.as_ref().and_then(NavigationState::section) {
            Some(section) => section,
            None => {
                if let Some(state) = &state {
                    tracing::debug!("Stored section {:?} not recognised", state.section);
                }
                self.resolve_section_from_path()
            }
        };
        tracing::debug!(section = %section, "history navigation");
        self.activate_section(section, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{MemoryHistory, MockNavigationContext};
    use crate::error::Error;

    fn router_at(path: &str) -> ViewRouter<MemoryHistory> {
        ViewRouter::with_default_routes(MemoryHistory::new(path))
    }

    #[test]
    fn test_starts_on_main() {
        assert_eq!(router_at("/privacidad").current_section(), Section::Main);
    }

    #[test]
    fn test_resolve_section_from_path() {
        assert_eq!(router_at("/terminos").resolve_section_from_path(), Section::Terms);
        assert_eq!(router_at("/unknown").resolve_section_from_path(), Section::Main);
        assert_eq!(router_at("/").resolve_section_from_path(), Section::Main);
    }

    #[test]
    fn test_resolve_has_no_side_effects() {
        let router = router_at("/privacidad");
        router.resolve_section_from_path();
        assert_eq!(router.context().len(), 1);
        assert_eq!(router.context().visible(), None);
    }

    #[test]
    fn test_activate_privacy_pushes_exactly_one_entry() {
        let mut ctx = MockNavigationContext::new();
        ctx.expect_show_content()
            .withf(|s| *s == Section::Privacy)
            .times(1)
            .return_const(());
        ctx.expect_push_entry()
            .withf(|state, url| state.section == "privacy" && url == "/privacidad")
            .times(1)
            .return_const(());
        ctx.expect_replace_entry().never();
        ctx.expect_scroll_to_top().times(1).return_const(());

        let mut router = ViewRouter::with_default_routes(ctx);
        router.activate_section(Section::Privacy, true);
        assert_eq!(router.current_section(), Section::Privacy);
    }

    #[test]
    fn test_activate_resets_scroll() {
        let mut router = router_at("/");
        router.context_mut().scroll_to(0, 1200);
        router.activate_section(Section::Privacy, true);
        assert_eq!(router.context().scroll_position(), (0, 0));
    }

    #[test]
    fn test_activate_without_recording_leaves_history_alone() {
        let mut ctx = MockNavigationContext::new();
        ctx.expect_show_content().times(1).return_const(());
        ctx.expect_push_entry().never();
        ctx.expect_replace_entry().never();
        ctx.expect_scroll_to_top().times(1).return_const(());

        let mut router = ViewRouter::with_default_routes(ctx);
        router.activate_section(Section::Terms, false);
        assert_eq!(router.current_section(), Section::Terms);
    }

    #[test]
    fn test_activate_section_missing_from_table_records_fallback_path() {
        let routes = RouteTable::new([(Section::Main, "/")]).unwrap();
        let mut router = ViewRouter::new(routes, MemoryHistory::new("/"));
        router.activate_section(Section::Terms, true);
        assert_eq!(router.context().current_path(), "/");
        assert_eq!(router.context().visible(), Some(Section::Terms));
    }

    #[test]
    fn test_activate_by_unknown_id_changes_nothing() {
        let mut router = router_at("/terminos");
        router.handle_initial_load();
        router.context_mut().scroll_to(0, 300);

        let err = router.activate_by_id("blog", true).unwrap_err();
        assert!(matches!(err, Error::UnknownSection { .. }));
        assert_eq!(router.current_section(), Section::Terms);
        assert_eq!(router.context().len(), 1);
        assert_eq!(router.context().scroll_position(), (0, 300));
    }

    #[test]
    fn test_initial_load_replaces_instead_of_pushing() {
        let mut ctx = MockNavigationContext::new();
        ctx.expect_current_path().return_const("/terminos".to_string());
        ctx.expect_replace_entry()
            .withf(|state, url| state.section == "terms" && url == "/terminos")
            .times(1)
            .return_const(());
        ctx.expect_push_entry().never();
        ctx.expect_show_content()
            .withf(|s| *s == Section::Terms)
            .times(1)
            .return_const(());
        ctx.expect_scroll_to_top().times(1).return_const(());

        let mut router = ViewRouter::with_default_routes(ctx);
        router.handle_initial_load();
        assert_eq!(router.current_section(), Section::Terms);
    }

    #[test]
    fn test_initial_load_on_unmapped_path_keeps_url() {
        let mut router = router_at("/unknown");
        router.handle_initial_load();

        let entry = router.context().current();
        assert_eq!(entry.url, "/unknown");
        assert_eq!(entry.state, Some(NavigationState::new(Section::Main)));
        assert_eq!(router.current_section(), Section::Main);
    }

    #[test]
    fn test_pop_state_with_stored_section() {
        let mut ctx = MockNavigationContext::new();
        ctx.expect_current_path().never();
        ctx.expect_push_entry().never();
        ctx.expect_replace_entry().never();
        ctx.expect_show_content()
            .withf(|s| *s == Section::Terms)
            .times(1)
            .return_const(());
        ctx.expect_scroll_to_top().times(1).return_const(());

        let mut router = ViewRouter::with_default_routes(ctx);
        router.handle_pop_state(Some(NavigationState::new(Section::Terms)));
        assert_eq!(router.current_section(), Section::Terms);
    }

    #[test]
    fn test_pop_state_without_state_uses_path() {
        let mut router = router_at("/privacidad");
        router.handle_pop_state(None);
        assert_eq!(router.current_section(), Section::Privacy);
        assert_eq!(router.context().len(), 1);
    }

    #[test]
    fn test_pop_state_with_unknown_section_uses_path() {
        let mut router = router_at("/terminos");
        router.handle_pop_state(Some(NavigationState {
            section: "blog".to_string(),
        }));
        assert_eq!(router.current_section(), Section::Terms);
    }
}
