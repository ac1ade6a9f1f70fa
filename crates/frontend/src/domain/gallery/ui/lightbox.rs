use std::rc::Rc;

use contracts::domain::gallery::Lightbox;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use crate::layout::global_context::SiteContext;
use crate::shared::dom;

struct LightboxElements {
    root: Element,
    image: Element,
    caption: Element,
}

/// Indices of the items not hidden by the current filter
fn visible_items(items: &[Element]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| dom::display_of(item) != "none")
        .map(|(index, _)| index)
        .collect()
}

fn step(ctx: SiteContext, forward: bool) {
    ctx.lightbox.update(|lightbox| {
        if let Some(lightbox) = lightbox {
            if forward {
                lightbox.next();
            } else {
                lightbox.prev();
            }
        }
    });
}

pub fn install(ctx: SiteContext, items: Vec<Element>) {
    let (Some(root), Some(image), Some(caption)) = (
        dom::by_id("lightbox"),
        dom::by_id("lightbox-image"),
        dom::by_id("lightbox-caption"),
    ) else {
        log::debug!("gallery: lightbox markup missing, items open as plain links");
        return;
    };
    let elements = LightboxElements {
        root,
        image,
        caption,
    };
    let items = Rc::new(items);

    for (index, item) in items.iter().enumerate() {
        let items = Rc::clone(&items);
        dom::listen(item, "click", move |event| {
            event.prevent_default();
            if let Some(lightbox) = Lightbox::open(visible_items(&items), index) {
                ctx.lightbox.set(Some(lightbox));
            }
        });
    }

    if let Some(close) = dom::by_id("lightbox-close") {
        dom::listen(&close, "click", move |_| ctx.lightbox.set(None));
    }
    if let Some(next) = dom::by_id("lightbox-next") {
        dom::listen(&next, "click", move |_| step(ctx, true));
    }
    if let Some(prev) = dom::by_id("lightbox-prev") {
        dom::listen(&prev, "click", move |_| step(ctx, false));
    }

    let backdrop = elements.root.clone();
    dom::listen(&elements.root, "click", move |event| {
        let on_backdrop = event
            .target()
            .map_or(false, |target| js_sys::Object::is(target.as_ref(), backdrop.as_ref()));
        if on_backdrop {
            ctx.lightbox.set(None);
        }
    });

    if let Some(document) = dom::document() {
        dom::listen(&document, "keydown", move |event| {
            if !ctx.lightbox_is_open() {
                return;
            }
            match dom::key_of(&event).as_str() {
                "Escape" => ctx.lightbox.set(None),
                "ArrowRight" => step(ctx, true),
                "ArrowLeft" => step(ctx, false),
                _ => {}
            }
        });
    }

    Effect::new(move |was_open: Option<bool>| {
        let current = ctx.lightbox.with(|lightbox| lightbox.as_ref().map(Lightbox::current_item));
        match current.and_then(|index| items.get(index)) {
            Some(item) => {
                show(&elements, item);
                true
            }
            None => {
                if was_open.unwrap_or(false) {
                    dom::set_class(&elements.root, "show", false);
                    dom::set_body_overflow("auto");
                }
                false
            }
        }
    });
}

fn show(elements: &LightboxElements, item: &Element) {
    let src = item.get_attribute("href").unwrap_or_default();
    let alt = item
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.alt())
        .unwrap_or_default();

    let _ = elements.image.set_attribute("src", &src);
    elements.caption.set_text_content(Some(&alt));
    dom::set_class(&elements.root, "show", true);
    dom::set_body_overflow("hidden");
}
