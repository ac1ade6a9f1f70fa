//! Light/dark theme handling.
//!
//! The preference lives in localStorage under a single key. Without a stored
//! preference at load time the OS colour scheme decides, and any later OS
//! change is applied and saved, even over a toggle made since.

use contracts::enums::theme_mode::ThemeMode;
use contracts::shared::config::ThemeConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryListEvent};

use crate::shared::dom;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Load the stored preference, if any.
fn load_theme_from_storage(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Save theme to localStorage.
fn save_theme_to_storage(key: &str, mode: ThemeMode) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, mode.as_str());
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map_or(false, |mq| mq.matches())
}

/// Set `data-theme` on `<html>` and sync the toggle button and its icons.
fn apply_theme(mode: ThemeMode) {
    let Some(document) = dom::document() else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }

    let is_dark = mode.is_dark();
    if let Some(button) = document.get_element_by_id("themeToggle") {
        let _ = button.set_attribute("aria-pressed", if is_dark { "true" } else { "false" });
    }
    if let Some(moon) = document.get_element_by_id("iconMoon") {
        dom::set_display(&moon, if is_dark { "none" } else { "" });
    }
    if let Some(sun) = document.get_element_by_id("iconSun") {
        dom::set_display(&sun, if is_dark { "" } else { "none" });
    }
}

/// Current theme, shared by the toggle button and the OS listener.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
    }
}

/// Resolve the initial theme, keep the document in sync with the signal and
/// wire the `#themeToggle` button.
pub fn install(config: &ThemeConfig) {
    let storage_key = config.storage_key.clone();
    let stored = load_theme_from_storage(&storage_key);
    let initial = ThemeMode::initial(stored.as_deref(), system_prefers_dark());
    log::debug!("theme: initial mode {} (stored: {:?})", initial.as_str(), stored);

    let ctx = ThemeContext {
        mode: RwSignal::new(initial),
    };

    Effect::new(move |_| {
        let mode = ctx.mode.get();
        apply_theme(mode);
        save_theme_to_storage(&storage_key, mode);
    });

    if let Some(button) = dom::by_id("themeToggle") {
        dom::listen(&button, "click", move |_| ctx.toggle());
    }

    if stored.is_none() {
        follow_system_scheme(ctx);
    }
}

fn follow_system_scheme(ctx: ThemeContext) {
    let Some(query) = window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
        return;
    };
    dom::listen(&query, "change", move |event| {
        if let Some(change) = event.dyn_ref::<MediaQueryListEvent>() {
            ctx.mode.set(ThemeMode::from_dark(change.matches()));
        }
    });
}
