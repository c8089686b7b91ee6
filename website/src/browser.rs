//! [`NavigationContext`] over the real `window`, `history` and `document`

use sitenav_core::{
    ContentIds, Error, NavigationContext, NavigationState, Result, ResultExt, Section,
};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, History, Window};

pub(crate) fn js_error(what: &str, value: JsValue) -> Error {
    Error::dom(format!("{what} failed: {value:?}"))
}

/// Convert a history state object into the JS value `pushState` expects.
fn state_to_js(state: &NavigationState) -> Result<JsValue> {
    let json = state.to_json()?;
    js_sys::JSON::parse(&json).map_err(|e| js_error("JSON.parse", e))
}

/// Read the state handed to a `popstate` listener.
///
/// `null` (entries pushed before the router ran) and foreign shapes yield
/// `None`.
pub(crate) fn state_from_js(value: &JsValue) -> Option<NavigationState> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let json = js_sys::JSON::stringify(value).ok()?;
    NavigationState::from_json(&String::from(json))
}

pub struct BrowserContext {
    window: Window,
    document: Document,
    history: History,
    panels: Vec<(Section, Element)>,
}

impl BrowserContext {
    /// Look up every content block. Fails if any is missing from the page.
    pub fn attach(window: Window, content_ids: &ContentIds) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| Error::dom("window has no document"))?;
        let history = window
            .history()
            .map_err(|e| js_error("window.history", e))?;

        let mut panels = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let id = content_ids.get(section);
            let element = document
                .get_element_by_id(id)
                .ok_or_else(|| Error::dom(format!("content block #{id} not found")))?;
            panels.push((section, element));
        }

        Ok(Self {
            window,
            document,
            history,
            panels,
        })
    }

    fn write_entry(&self, state: &NavigationState, url: &str, replace: bool) -> Result<()> {
        let data = state_to_js(state)?;
        let title = self.document.title();
        if replace {
            self.history
                .replace_state_with_url(&data, &title, Some(url))
                .map_err(|e| js_error("history.replaceState", e))
        } else {
            self.history
                .push_state_with_url(&data, &title, Some(url))
                .map_err(|e| js_error("history.pushState", e))
        }
    }
}

impl NavigationContext for BrowserContext {
    fn current_path(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn push_entry(&mut self, state: &NavigationState, url: &str) {
        let _ = self
            .write_entry(state, url, false)
            .with_context(|| format!("Recording {url} in history"));
    }

    fn replace_entry(&mut self, state: &NavigationState, url: &str) {
        let _ = self
            .write_entry(state, url, true)
            .with_context(|| format!("Stamping {url} with its section"));
    }

    fn scroll_to_top(&mut self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn show_content(&mut self, active: Section) {
        for (section, element) in &self.panels {
            if let Err(e) = element.toggle_attribute_with_force("hidden", *section != active) {
                log::warn!("{}", js_error("toggleAttribute(hidden)", e));
            }
        }
    }
}
