//! Hash fragment resolution for the section routers.
//!
//! One parameterized router serves the site-wide page sections (`#/<route>`)
//! and the jobs/news list-detail pages (bare `#<view>`). Resolution never
//! fails: anything unknown lands on the configured default view.

use std::collections::BTreeSet;

/// How a router reads the URL fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentConvention {
    /// `#/<route>[/<sub>]`, used by the site-wide router
    Path,
    /// `#<view>`, used by the jobs and news routers
    Bare,
}

impl FragmentConvention {
    pub fn prefix(&self) -> &'static str {
        match self {
            FragmentConvention::Path => "#/",
            FragmentConvention::Bare => "#",
        }
    }
}

/// When the viewport returns to the top after a view switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollReset {
    Immediate,
    /// After the current task, once the DOM has settled
    AfterSettle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    pub convention: FragmentConvention,
    pub default_view: String,
    /// Fragments with this prefix show the default view and scroll to an
    /// element inside it instead of switching views.
    pub anchor_prefix: Option<String>,
    pub highlight_menu: bool,
    pub scroll_reset: ScrollReset,
}

impl RouterConfig {
    /// Site-wide router over `[data-route]` sections
    pub fn site(default_view: impl Into<String>, anchor_prefix: Option<String>) -> Self {
        Self {
            convention: FragmentConvention::Path,
            default_view: default_view.into(),
            anchor_prefix,
            highlight_menu: true,
            scroll_reset: ScrollReset::Immediate,
        }
    }

    /// List/detail router over `.view[data-view]` panes
    pub fn sub(default_view: impl Into<String>) -> Self {
        Self {
            convention: FragmentConvention::Bare,
            default_view: default_view.into(),
            anchor_prefix: None,
            highlight_menu: false,
            scroll_reset: ScrollReset::AfterSettle,
        }
    }

    /// Fragment substituted when the URL has none
    pub fn default_fragment(&self) -> String {
        match self.convention {
            FragmentConvention::Path => format!("#/{}", self.default_view),
            FragmentConvention::Bare => self.default_view.clone(),
        }
    }
}

/// The closed set of view identifiers found in the document at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSet {
    ids: BTreeSet<String>,
}

impl ViewSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Outcome of resolving one fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Switch to `view`. `route` is the requested token, which may differ
    /// from `view` when it fell back to the default.
    Show {
        view: String,
        route: String,
        replace_url: Option<String>,
    },
    /// Show `view`, then scroll to the element matching `target`
    Anchor { view: String, target: String },
}

impl Navigation {
    pub fn view(&self) -> &str {
        match self {
            Navigation::Show { view, .. } | Navigation::Anchor { view, .. } => view,
        }
    }

    /// URL to write with `history.replaceState`, if the fragment was rejected
    pub fn replace_url(&self) -> Option<&str> {
        match self {
            Navigation::Show { replace_url, .. } => replace_url.as_deref(),
            Navigation::Anchor { .. } => None,
        }
    }

    pub fn scroll_target(&self) -> Option<&str> {
        match self {
            Navigation::Anchor { target, .. } => Some(target),
            Navigation::Show { .. } => None,
        }
    }
}

/// Resolve `fragment` (as read from `location.hash`) against `views`.
pub fn resolve(config: &RouterConfig, fragment: &str, views: &ViewSet) -> Navigation {
    match config.convention {
        FragmentConvention::Path => resolve_path(config, fragment, views),
        FragmentConvention::Bare => resolve_bare(config, fragment, views),
    }
}

fn resolve_path(config: &RouterConfig, fragment: &str, views: &ViewSet) -> Navigation {
    let prefix = config.convention.prefix();
    let default_fragment = config.default_fragment();

    let mut fragment = if fragment.is_empty() {
        default_fragment.clone()
    } else {
        fragment.to_string()
    };
    let mut replace_url = None;

    if !fragment.starts_with(prefix) {
        if let Some(anchor) = config.anchor_prefix.as_deref() {
            if fragment.starts_with(anchor) {
                return Navigation::Anchor {
                    view: config.default_view.clone(),
                    target: fragment,
                };
            }
        }
        replace_url = Some(default_fragment.clone());
        fragment = default_fragment;
    }

    let route = fragment[prefix.len()..].to_string();
    Navigation::Show {
        view: pick_view(config, &route, views),
        route,
        replace_url,
    }
}

fn resolve_bare(config: &RouterConfig, fragment: &str, views: &ViewSet) -> Navigation {
    let token = fragment.strip_prefix('#').unwrap_or(fragment);
    let route = if token.is_empty() {
        config.default_fragment()
    } else {
        token.to_string()
    };

    Navigation::Show {
        view: pick_view(config, &route, views),
        route,
        replace_url: None,
    }
}

fn pick_view(config: &RouterConfig, route: &str, views: &ViewSet) -> String {
    if views.contains(route) {
        route.to_string()
    } else {
        config.default_view.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> RouterConfig {
        RouterConfig::site("home", Some("#home-".to_string()))
    }

    fn site_views() -> ViewSet {
        ViewSet::new(["home", "about", "academics/timetable", "contact", "enroll"])
    }

    fn board_views() -> ViewSet {
        ViewSet::new(["list", "job-teacher", "job-librarian"])
    }

    #[test]
    fn test_known_route_is_shown() {
        let nav = resolve(&site(), "#/academics/timetable", &site_views());
        assert_eq!(nav.view(), "academics/timetable");
        assert_eq!(nav.replace_url(), None);
    }

    #[test]
    fn test_empty_fragment_uses_default() {
        let nav = resolve(&site(), "", &site_views());
        assert_eq!(
            nav,
            Navigation::Show {
                view: "home".to_string(),
                route: "home".to_string(),
                replace_url: None,
            }
        );
    }

    #[test]
    fn test_unknown_route_falls_back_without_rewrite() {
        let nav = resolve(&site(), "#/unknown-page", &site_views());
        assert_eq!(nav.view(), "home");
        assert_eq!(nav.replace_url(), None);
        match nav {
            Navigation::Show { route, .. } => assert_eq!(route, "unknown-page"),
            other => panic!("unexpected navigation: {:?}", other),
        }
    }

    #[test]
    fn test_foreign_fragment_is_rewritten_to_default() {
        let nav = resolve(&site(), "#contact", &site_views());
        assert_eq!(nav.view(), "home");
        assert_eq!(nav.replace_url(), Some("#/home"));
    }

    #[test]
    fn test_home_anchor_scrolls_inside_default_view() {
        let nav = resolve(&site(), "#home-principal", &site_views());
        assert_eq!(
            nav,
            Navigation::Anchor {
                view: "home".to_string(),
                target: "#home-principal".to_string(),
            }
        );
        assert_eq!(nav.replace_url(), None);
        assert_eq!(nav.scroll_target(), Some("#home-principal"));
    }

    #[test]
    fn test_route_match_is_case_sensitive() {
        let nav = resolve(&site(), "#/About", &site_views());
        assert_eq!(nav.view(), "home");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let views = site_views();
        for fragment in ["", "#/about", "#/nope", "#x", "#home-news", "#/"] {
            assert_eq!(
                resolve(&site(), fragment, &views),
                resolve(&site(), fragment, &views),
                "fragment {:?}",
                fragment
            );
        }
    }

    #[test]
    fn test_unknown_fragments_never_leave_default_behind() {
        let views = site_views();
        for fragment in ["#/", "#//", "#/home/extra", "#/ABOUT", "garbage", "#"] {
            assert_eq!(resolve(&site(), fragment, &views).view(), "home");
        }
    }

    #[test]
    fn test_bare_router_reads_view_name() {
        let config = RouterConfig::sub("list");
        let nav = resolve(&config, "#job-teacher", &board_views());
        assert_eq!(nav.view(), "job-teacher");
        assert_eq!(nav.replace_url(), None);
    }

    #[test]
    fn test_bare_router_defaults_to_list() {
        let config = RouterConfig::sub("list");
        assert_eq!(resolve(&config, "", &board_views()).view(), "list");
        assert_eq!(resolve(&config, "#", &board_views()).view(), "list");
        assert_eq!(resolve(&config, "#/home", &board_views()).view(), "list");
        assert_eq!(resolve(&config, "#job-janitor", &board_views()).view(), "list");
    }

    #[test]
    fn test_default_fragment_per_convention() {
        assert_eq!(site().default_fragment(), "#/home");
        assert_eq!(RouterConfig::sub("list").default_fragment(), "list");
    }
}
