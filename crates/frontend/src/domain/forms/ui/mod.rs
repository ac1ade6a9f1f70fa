//! Acknowledge the site's static forms instead of submitting them.

use contracts::domain::forms::{FormKind, FormTraits};
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::shared::dom;

/// Inline `onsubmit` handlers would acknowledge a second time
pub fn remove_inline_handlers() {
    for form in dom::query_all("form[onsubmit]") {
        let _ = form.remove_attribute("onsubmit");
    }
}

fn traits_of(form: &HtmlFormElement) -> FormTraits {
    FormTraits {
        newsletter: form.class_list().contains("newsletter-form"),
        in_home_contact: dom::within(form, "#home-contact"),
        in_home_enroll: dom::within(form, "#home-enroll"),
        in_contact_page: dom::within(form, "[data-route=\"contact\"]"),
        in_enroll_page: dom::within(form, "[data-route=\"enroll\"]"),
    }
}

/// Delegated, capture-phase submit handler so forms inside swapped views
/// are covered too.
pub fn install() {
    let Some(document) = dom::document() else {
        return;
    };

    dom::listen_capture(&document, "submit", |event| {
        let Some(form) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let Some(kind) = FormKind::classify(&traits_of(&form)) else {
            return;
        };

        event.prevent_default();
        log::info!("forms: acknowledged {:?} submission", kind);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(kind.acknowledgement());
        }
        if kind.resets() {
            form.reset();
        }
    });
}
