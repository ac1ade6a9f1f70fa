//! Mobile navigation drawer.
//!
//! `#drawer` and `#overlay` are required; pages without them simply have no
//! drawer and `SiteContext::close_drawer` becomes a no-op for them.

use leptos::prelude::*;

use crate::layout::global_context::SiteContext;
use crate::shared::dom;

/// Hash links that navigate and therefore dismiss the drawer
fn is_navigating_href(href: &str) -> bool {
    href.starts_with("#/") || href.starts_with("#home-")
}

pub fn install(ctx: SiteContext) {
    let (Some(drawer), Some(overlay)) = (dom::by_id("drawer"), dom::by_id("overlay")) else {
        log::debug!("drawer: #drawer or #overlay missing, skipping");
        return;
    };

    {
        let drawer = drawer.clone();
        let overlay = overlay.clone();
        Effect::new(move |previous: Option<bool>| {
            let open = ctx.drawer_open.get();
            // leave the page untouched until the drawer is used
            if open || previous.is_some() {
                dom::set_class(&drawer, "open", open);
                dom::set_class(&overlay, "show", open);
                dom::set_body_overflow(if open { "hidden" } else { "" });
            }
            open
        });
    }

    if let Some(open_button) = dom::by_id("hamburger") {
        dom::listen(&open_button, "click", move |_| ctx.open_drawer());
    }
    if let Some(close_button) = dom::by_id("closeDrawer") {
        dom::listen(&close_button, "click", move |_| ctx.close_drawer());
    }
    dom::listen(&overlay, "click", move |_| ctx.close_drawer());

    // Sub-accordions: [data-mtoggle="x"] toggles #m-x
    for toggle in dom::query_all("[data-mtoggle]") {
        let Some(id) = toggle.get_attribute("data-mtoggle") else {
            continue;
        };
        dom::listen(&toggle, "click", move |_| {
            if let Some(panel) = dom::by_id(&format!("m-{}", id)) {
                let _ = panel.class_list().toggle("open");
            }
        });
    }

    for link in dom::query_all_in(&drawer, "a") {
        dom::listen(&link, "click", move |_| ctx.close_drawer());
    }

    let Some(document) = dom::document() else {
        return;
    };
    dom::listen(&document, "keydown", move |event| {
        if dom::key_of(&event) == "Escape" && ctx.drawer_open.get_untracked() {
            ctx.close_drawer();
        }
    });
    dom::listen(&document, "click", move |event| {
        let href = dom::event_element(&event)
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
            .and_then(|link| link.get_attribute("href"));
        if href.as_deref().map_or(false, is_navigating_href) {
            ctx.close_drawer();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigating_hrefs() {
        assert!(is_navigating_href("#/about"));
        assert!(is_navigating_href("#home-principal"));
        assert!(!is_navigating_href("#top"));
        assert!(!is_navigating_href("#"));
    }
}
