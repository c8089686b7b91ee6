//! [`MenuControls`] over the toggle button and the links container

use sitenav_core::{DomSettings, Error, MenuControls, Result};
use web_sys::{Document, Element};

use crate::browser::js_error;

pub struct DomMenu {
    toggle: Element,
    links: Element,
}

impl DomMenu {
    pub fn attach(document: &Document, dom: &DomSettings) -> Result<Self> {
        let toggle = document
            .query_selector(&dom.menu_toggle_selector)
            .map_err(|e| js_error("querySelector", e))?
            .ok_or_else(|| {
                Error::dom(format!(
                    "menu toggle {:?} not found",
                    dom.menu_toggle_selector
                ))
            })?;
        let links = document
            .get_element_by_id(&dom.nav_links_id)
            .ok_or_else(|| Error::dom(format!("links container #{} not found", dom.nav_links_id)))?;

        Ok(Self { toggle, links })
    }

    pub fn toggle_element(&self) -> &Element {
        &self.toggle
    }
}

impl MenuControls for DomMenu {
    fn toggle_links_class(&mut self, class: &str) -> bool {
        let list = self.links.class_list();
        match list.toggle(class) {
            Ok(present) => present,
            Err(e) => {
                log::warn!("{}", js_error("classList.toggle", e));
                list.contains(class)
            }
        }
    }

    fn is_expanded(&self) -> bool {
        self.toggle.get_attribute("aria-expanded").as_deref() == Some("true")
    }

    fn set_expanded(&mut self, expanded: bool) {
        let value = if expanded { "true" } else { "false" };
        if let Err(e) = self.toggle.set_attribute("aria-expanded", value) {
            log::warn!("{}", js_error("setAttribute(aria-expanded)", e));
        }
    }
}
