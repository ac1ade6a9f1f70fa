//! Which main-menu entries carry the `active` marker for a navigation.
//!
//! The set is recomputed from scratch on every navigation and applied
//! clear-then-set, so no highlight survives from a previous route.

use std::collections::BTreeSet;

use super::router::Navigation;

/// Route prefix → `data-toggle` value of the dropdown button it belongs to
pub const MENU_GROUPS: [(&str, &str); 3] = [
    ("about", "about"),
    ("academics", "academics"),
    ("school-life", "school"),
];

/// Top-level route that also lights up the call-to-action link
pub const CTA_ROUTE: &str = "enroll";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MenuEntry {
    /// Dropdown button, by its `data-toggle` value
    Toggle(&'static str),
    /// Top-level link, by its `data-top` value
    Top(String),
    CallToAction,
}

/// Menu entries to mark for `navigation`. `fallback_top` stands in for an
/// empty first path segment and for in-page anchors.
pub fn active_entries(navigation: &Navigation, fallback_top: &str) -> BTreeSet<MenuEntry> {
    let mut entries = BTreeSet::new();

    let route = match navigation {
        Navigation::Show { route, .. } => route.as_str(),
        Navigation::Anchor { .. } => {
            entries.insert(MenuEntry::Top(fallback_top.to_string()));
            return entries;
        }
    };

    for (prefix, toggle) in MENU_GROUPS {
        if route.starts_with(prefix) {
            entries.insert(MenuEntry::Toggle(toggle));
        }
    }

    let top = match route.split('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => fallback_top,
    };
    if top == CTA_ROUTE {
        entries.insert(MenuEntry::CallToAction);
    }
    entries.insert(MenuEntry::Top(top.to_string()));

    entries
}
