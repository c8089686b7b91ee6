//! Browser binding for sitenav.
//!
//! Runs against pages that already contain every section's markup: on
//! `DOMContentLoaded` it attaches the view router to `history`/`popstate` and
//! the mobile menu toggle to its button, and exposes `showSection(id)` for the
//! navigation links' inline `onclick` handlers.

pub mod browser;
pub mod menu;

use std::cell::RefCell;

use browser::BrowserContext;
use menu::DomMenu;
use sitenav_core::{load_site_config, toggle_menu, Result, ResultExt, SiteConfig, ViewRouter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{PopStateEvent, Window};

const SITE_CONFIG: &str = include_str!("../site.toml");

thread_local! {
    static ROUTER: RefCell<Option<ViewRouter<BrowserContext>>> = const { RefCell::new(None) };
}

fn with_router<R>(f: impl FnOnce(&mut ViewRouter<BrowserContext>) -> R) -> Option<R> {
    ROUTER.with(|slot| slot.borrow_mut().as_mut().map(f))
}

/// Show a section and record it in history, e.g. `onclick="showSection('privacy')"`.
#[wasm_bindgen(js_name = showSection)]
pub fn show_section(section_id: &str) {
    match with_router(|router| router.activate_by_id(section_id, true)) {
        Some(Err(e)) if !e.is_recoverable() => {
            log::error!("showSection({:?}): {}", section_id, e)
        }
        Some(_) => {}
        None => log::warn!(
            "showSection({:?}) called before the page finished loading",
            section_id
        ),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let config = load_site_config(SITE_CONFIG);

    expose_show_section(&window)?;

    // The module may be loaded after DOMContentLoaded has already fired
    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(move || {
            on_dom_ready(&window, &config);
        }) as Box<dyn FnMut()>);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        on_dom_ready(&window, &config);
    }

    Ok(())
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(level);
}

/// Make `showSection` a plain global so inline markup can call it.
fn expose_show_section(window: &Window) -> std::result::Result<(), JsValue> {
    let callback =
        Closure::wrap(Box::new(|id: String| show_section(&id)) as Box<dyn FnMut(String)>);
    js_sys::Reflect::set(window, &JsValue::from_str("showSection"), callback.as_ref())?;
    callback.forget();
    Ok(())
}

fn on_dom_ready(window: &Window, config: &SiteConfig) {
    let _ = install_router(window, config).context("Section navigation disabled");
    let _ = install_menu_toggle(window, config).context("Menu toggle disabled");
}

fn install_router(window: &Window, config: &SiteConfig) -> Result<()> {
    let routes = config.route_table()?;
    let context = BrowserContext::attach(window.clone(), &config.dom.content_ids)?;

    let mut router = ViewRouter::new(routes, context);
    router.handle_initial_load();
    ROUTER.with(|slot| *slot.borrow_mut() = Some(router));

    let on_pop_state = Closure::wrap(Box::new(move |event: PopStateEvent| {
        let state = browser::state_from_js(&event.state());
        with_router(|router| router.handle_pop_state(state));
    }) as Box<dyn FnMut(PopStateEvent)>);
    window
        .add_event_listener_with_callback("popstate", on_pop_state.as_ref().unchecked_ref())
        .map_err(|e| browser::js_error("addEventListener(popstate)", e))?;
    on_pop_state.forget();

    log::info!("Section navigation ready");
    Ok(())
}

fn install_menu_toggle(window: &Window, config: &SiteConfig) -> Result<()> {
    let document = window
        .document()
        .ok_or_else(|| sitenav_core::Error::dom("window has no document"))?;
    let mut menu = DomMenu::attach(&document, &config.dom)?;
    let button = menu.toggle_element().clone();
    let class = config.dom.active_class.clone();

    let on_click = Closure::wrap(Box::new(move || {
        toggle_menu(&mut menu, &class);
    }) as Box<dyn FnMut()>);
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| browser::js_error("addEventListener(click)", e))?;
    on_click.forget();

    Ok(())
}
