//! Hash router that swaps the `active` class between view elements.

use contracts::shared::routing::{
    active_entries, resolve, Navigation, RouterConfig, ScrollReset, ViewSet,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::layout::global_context::SiteContext;
use crate::layout::header;
use crate::shared::dom;

/// One router instance over a view set collected at install time
pub struct SectionRouter {
    name: String,
    config: RouterConfig,
    views: Vec<(String, Element)>,
    known: ViewSet,
    ctx: SiteContext,
}

impl SectionRouter {
    /// Collect `elements`, keyed by their `attribute` value.
    pub fn new(
        name: impl Into<String>,
        config: RouterConfig,
        elements: Vec<Element>,
        attribute: &str,
        ctx: SiteContext,
    ) -> Self {
        let views: Vec<(String, Element)> = elements
            .into_iter()
            .filter_map(|el| el.get_attribute(attribute).map(|id| (id, el)))
            .collect();
        let known = ViewSet::new(views.iter().map(|(id, _)| id.clone()));

        Self {
            name: name.into(),
            config,
            views,
            known,
            ctx,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_views(&self) -> bool {
        !self.known.is_empty()
    }

    /// Navigate to whatever `location.hash` currently holds.
    pub fn navigate_current(&self) -> Navigation {
        self.navigate(&current_fragment())
    }

    pub fn navigate(&self, fragment: &str) -> Navigation {
        let navigation = resolve(&self.config, fragment, &self.known);
        log::debug!(
            "router[{}]: {:?} -> view '{}'",
            self.name,
            fragment,
            navigation.view()
        );

        if let Some(url) = navigation.replace_url() {
            replace_fragment(url);
        }

        self.activate(navigation.view());

        if self.config.highlight_menu {
            header::apply_highlight(&active_entries(&navigation, &self.config.default_view));
        }

        self.ctx.close_drawer();

        match navigation.scroll_target() {
            Some(target) => scroll_into_view_after_paint(target.to_string()),
            None => reset_scroll(self.config.scroll_reset),
        }

        navigation
    }

    /// Deactivate every view, then activate the first one named `view`.
    fn activate(&self, view: &str) {
        for (_, element) in &self.views {
            dom::set_class(element, "active", false);
        }
        if let Some((_, element)) = self.views.iter().find(|(id, _)| id == view) {
            dom::set_class(element, "active", true);
        }
    }
}

pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Rewrite the visible URL without adding a history entry.
fn replace_fragment(url: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn reset_scroll(reset: ScrollReset) {
    match reset {
        ScrollReset::Immediate => scroll_to_top(),
        ScrollReset::AfterSettle => wasm_bindgen_futures::spawn_local(async {
            TimeoutFuture::new(0).await;
            scroll_to_top();
        }),
    }
}

/// Smooth-scroll the element matching `selector` once the view swap has
/// painted. Not cancelled by later navigations: the target captured here is
/// the one scrolled to.
fn scroll_into_view_after_paint(selector: String) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move || {
        let Some(target) = dom::query(&selector) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }) as Box<dyn FnMut()>);

    let _ = window.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>());
    callback.forget();
}
