//! # sitenav-core - Section Routing
//!
//! Host-independent logic behind the site's client-side navigation: which
//! content section is shown, how the address bar and session history follow
//! it, and the mobile menu toggle.
//!
//! The browser is reached only through the [`NavigationContext`] and
//! [`MenuControls`] traits, so everything here runs and is tested natively.
//!
//! ## Public API
//!
//! ### Routing (`router`, `routes`, `section`)
//! - [`ViewRouter`] - Owns the active section; handles initial load,
//!   user navigation and back/forward
//! - [`RouteTable`] - Validated section → path mapping
//! - [`Section`] - The closed set of content panels (main, terms, privacy)
//!
//! ### History (`state`, `context`)
//! - [`NavigationState`] - `{ section }` object stored with history entries
//! - [`NavigationContext`] - Host interface over location/history/scroll/DOM
//! - [`MemoryHistory`] - In-memory context for tests
//!
//! ### Menu (`menu`)
//! - [`toggle_menu()`] - Flip the links container and mirror `aria-expanded`
//!
//! ### Configuration (`config`)
//! - [`SiteConfig`] - `site.toml` with route and DOM overrides
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]

pub mod config;
pub mod context;
pub mod error;
pub mod menu;
pub mod prelude;
pub mod router;
pub mod routes;
pub mod section;
pub mod state;

pub use config::{load_site_config, ContentIds, DomSettings, RouteSettings, SiteConfig};
pub use context::{HistoryEntry, MemoryHistory, NavigationContext};
pub use error::{Error, Result, ResultExt};
pub use menu::{toggle_menu, MemoryMenu, MenuControls, DEFAULT_ACTIVE_CLASS};
pub use router::ViewRouter;
pub use routes::{RouteTable, DEFAULT_ROUTES, FALLBACK_PATH};
pub use section::Section;
pub use state::NavigationState;
