//! Site configuration (`site.toml`)
//!
//! Every field is optional; an empty document yields the built-in routes and
//! the DOM ids the site's markup uses.

use serde::{Deserialize, Serialize};

use crate::menu::DEFAULT_ACTIVE_CLASS;
use crate::prelude::*;
use crate::routes::{RouteTable, DEFAULT_ROUTES};
use crate::section::Section;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub routes: RouteSettings,

    #[serde(default)]
    pub dom: DomSettings,
}

/// Path overrides per section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteSettings {
    #[serde(default = "default_main_path")]
    pub main: String,

    #[serde(default = "default_terms_path")]
    pub terms: String,

    #[serde(default = "default_privacy_path")]
    pub privacy: String,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            main: default_main_path(),
            terms: default_terms_path(),
            privacy: default_privacy_path(),
        }
    }
}

impl RouteSettings {
    pub fn path(&self, section: Section) -> &str {
        match section {
            Section::Main => &self.main,
            Section::Terms => &self.terms,
            Section::Privacy => &self.privacy,
        }
    }
}

/// Element ids, selectors and classes the host binding looks up
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DomSettings {
    #[serde(default)]
    pub content_ids: ContentIds,

    /// CSS selector for the menu toggle control
    #[serde(default = "default_menu_toggle_selector")]
    pub menu_toggle_selector: String,

    #[serde(default = "default_nav_links_id")]
    pub nav_links_id: String,

    /// Class toggled on the links container
    #[serde(default = "default_active_class")]
    pub active_class: String,
}

impl Default for DomSettings {
    fn default() -> Self {
        Self {
            content_ids: ContentIds::default(),
            menu_toggle_selector: default_menu_toggle_selector(),
            nav_links_id: default_nav_links_id(),
            active_class: default_active_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentIds {
    #[serde(default = "default_main_content_id")]
    pub main: String,

    #[serde(default = "default_terms_content_id")]
    pub terms: String,

    #[serde(default = "default_privacy_content_id")]
    pub privacy: String,
}

impl Default for ContentIds {
    fn default() -> Self {
        Self {
            main: default_main_content_id(),
            terms: default_terms_content_id(),
            privacy: default_privacy_content_id(),
        }
    }
}

impl ContentIds {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Main => &self.main,
            Section::Terms => &self.terms,
            Section::Privacy => &self.privacy,
        }
    }
}

fn default_path(section: Section) -> String {
    DEFAULT_ROUTES
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, p)| (*p).to_string())
        .unwrap_or_else(|| "/".to_string())
}

fn default_main_path() -> String {
    default_path(Section::Main)
}

fn default_terms_path() -> String {
    default_path(Section::Terms)
}

fn default_privacy_path() -> String {
    default_path(Section::Privacy)
}

fn default_main_content_id() -> String {
    Section::Main.content_id().to_string()
}

fn default_terms_content_id() -> String {
    Section::Terms.content_id().to_string()
}

fn default_privacy_content_id() -> String {
    Section::Privacy.content_id().to_string()
}

fn default_menu_toggle_selector() -> String {
    ".menu-toggle".to_string()
}

fn default_nav_links_id() -> String {
    "navbarLinks".to_string()
}

fn default_active_class() -> String {
    DEFAULT_ACTIVE_CLASS.to_string()
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the route table described by `[routes]`
    pub fn route_table(&self) -> Result<RouteTable> {
        RouteTable::new(
            Section::ALL
                .into_iter()
                .map(|s| (s, self.routes.path(s).to_string())),
        )
    }

    fn validate(&self) -> Result<()> {
        self.route_table()?;

        if self.dom.active_class.trim().is_empty() {
            return Err(Error::config("dom.active_class must not be empty"));
        }
        if self.dom.menu_toggle_selector.trim().is_empty() {
            return Err(Error::config("dom.menu_toggle_selector must not be empty"));
        }
        for section in Section::ALL {
            if self.dom.content_ids.get(section).trim().is_empty() {
                return Err(Error::config(format!(
                    "dom.content_ids.{section} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Load configuration, falling back to defaults when it cannot be used.
pub fn load_site_config(content: &str) -> SiteConfig {
    match SiteConfig::from_toml_str(content) {
        Ok(config) => {
            debug!("Loaded site configuration");
            config
        }
        Err(e) => {
            warn!("Invalid site configuration, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}
