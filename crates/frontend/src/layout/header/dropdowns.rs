use leptos::prelude::*;
use web_sys::Element;

use crate::layout::global_context::SiteContext;
use crate::shared::dom;

const DROPDOWN_BUTTONS: &str = ".nav .has-dd > button";

/// A dropdown button and the `li` that receives the `open` class
struct Dropdown {
    button: Element,
    item: Option<Element>,
}

/// Wire the header dropdowns: exclusive open, click outside and Escape close.
pub fn install_dropdowns(ctx: SiteContext) {
    let dropdowns: Vec<Dropdown> = dom::query_all(DROPDOWN_BUTTONS)
        .into_iter()
        .map(|button| {
            if !button.has_attribute("aria-expanded") {
                let _ = button.set_attribute("aria-expanded", "false");
            }
            let item = button.closest("li").ok().flatten();
            Dropdown { button, item }
        })
        .collect();

    if dropdowns.is_empty() {
        log::debug!("header: no dropdown menus on this page");
        return;
    }
    log::debug!("header: {} dropdown menus", dropdowns.len());

    for (index, dropdown) in dropdowns.iter().enumerate() {
        dom::listen(&dropdown.button, "click", move |event| {
            event.prevent_default();
            ctx.dropdowns.update(|menu| menu.toggle(index));
        });
    }

    Effect::new(move |_| {
        let menu = ctx.dropdowns.get();
        for (index, dropdown) in dropdowns.iter().enumerate() {
            let open = menu.is_open(index);
            if let Some(item) = &dropdown.item {
                dom::set_class(item, "open", open);
            }
            let _ = dropdown
                .button
                .set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    });

    let Some(document) = dom::document() else {
        return;
    };
    dom::listen(&document, "click", move |event| {
        let inside_nav = dom::event_element(&event).map_or(false, |el| dom::within(&el, ".nav"));
        if !inside_nav {
            ctx.close_dropdowns();
        }
    });
    dom::listen(&document, "keydown", move |event| {
        if dom::key_of(&event) == "Escape" {
            ctx.close_dropdowns();
        }
    });
}
