use std::collections::BTreeSet;

use contracts::shared::routing::MenuEntry;

use crate::shared::dom;

const MENU_ITEMS: &str = ".nav a, .nav button";
const TOP_LINKS: &str = ".nav a[data-top]";
const CTA_LINK: &str = ".nav a.cta";

pub fn toggle_selector(toggle: &str) -> String {
    format!("[data-toggle=\"{}\"]", toggle)
}

/// Clear every `active` mark in the main menu, then mark `entries`.
pub fn apply_highlight(entries: &BTreeSet<MenuEntry>) {
    for item in dom::query_all(MENU_ITEMS) {
        dom::set_class(&item, "active", false);
    }

    for entry in entries {
        match entry {
            MenuEntry::Toggle(toggle) => {
                if let Some(button) = dom::query(&toggle_selector(toggle)) {
                    dom::set_class(&button, "active", true);
                }
            }
            MenuEntry::Top(route) => {
                for link in dom::query_all(TOP_LINKS) {
                    if link.get_attribute("data-top").as_deref() == Some(route.as_str()) {
                        dom::set_class(&link, "active", true);
                    }
                }
            }
            MenuEntry::CallToAction => {
                if let Some(link) = dom::query(CTA_LINK) {
                    dom::set_class(&link, "active", true);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selector() {
        assert_eq!(toggle_selector("school"), "[data-toggle=\"school\"]");
    }
}
