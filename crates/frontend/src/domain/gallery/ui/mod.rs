//! Gallery page: category filter buttons and the image lightbox.

pub mod lightbox;

use contracts::domain::gallery::GalleryFilter;
use web_sys::Element;

use crate::layout::global_context::SiteContext;
use crate::shared::dom;

pub fn install(ctx: SiteContext) {
    let items = dom::query_all(".gallery-item");
    if items.is_empty() {
        log::debug!("gallery: no items on this page");
        return;
    }

    install_filter(items.clone());
    lightbox::install(ctx, items);
}

fn install_filter(items: Vec<Element>) {
    let Some(controls) = dom::query(".filter-controls") else {
        return;
    };

    let controls_ref = controls.clone();
    dom::listen(&controls, "click", move |event| {
        let Some(button) = dom::event_element(&event) else {
            return;
        };
        if !button.class_list().contains("filter-btn") {
            return;
        }

        for active in dom::query_all_in(&controls_ref, ".active") {
            dom::set_class(&active, "active", false);
        }
        dom::set_class(&button, "active", true);

        let filter = GalleryFilter::from_attr(button.get_attribute("data-filter").as_deref());
        log::debug!("gallery: filter {:?}", filter);
        apply_filter(&items, &filter);
    });
}

fn apply_filter(items: &[Element], filter: &GalleryFilter) {
    for item in items {
        let category = item.get_attribute("data-category");
        let display = if filter.shows(category.as_deref()) {
            "block"
        } else {
            "none"
        };
        dom::set_display(item, display);
    }
}
