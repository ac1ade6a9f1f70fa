use std::rc::Rc;

use contracts::shared::config::{SiteConfig, SubRouterConfig};
use web_sys::Element;

use super::section_router::SectionRouter;
use crate::layout::global_context::SiteContext;
use crate::shared::dom;

const SITE_VIEWS: &str = "[data-route]";
const SITE_VIEW_ATTR: &str = "data-route";
const BOARD_VIEWS: &str = ".view";
const BOARD_VIEW_ATTR: &str = "data-view";

/// Install the site router and the list/detail routers configured for this
/// page. A view belongs to the first router that collects it, and a router
/// left without views is not installed.
pub fn install(config: &SiteConfig, ctx: SiteContext) {
    let mut claimed = Vec::new();

    let site = SectionRouter::new(
        "site",
        config.site_router.router(),
        unclaimed(&mut claimed, dom::query_all(SITE_VIEWS)),
        SITE_VIEW_ATTR,
        ctx,
    );
    start(site, true);

    for sub in &config.sub_routers {
        let router = SectionRouter::new(
            sub.name.clone(),
            sub.router(),
            unclaimed(&mut claimed, board_views(sub)),
            BOARD_VIEW_ATTR,
            ctx,
        );
        start(router, false);
    }
}

fn board_views(sub: &SubRouterConfig) -> Vec<Element> {
    match sub.root.as_deref() {
        None => dom::query_all(BOARD_VIEWS),
        Some(root) => dom::query(root)
            .map(|root| dom::query_all_in(&root, BOARD_VIEWS))
            .unwrap_or_default(),
    }
}

/// Drop the views another router already owns and claim the rest.
fn unclaimed<T: PartialEq + Clone>(claimed: &mut Vec<T>, views: Vec<T>) -> Vec<T> {
    let fresh: Vec<T> = views
        .into_iter()
        .filter(|view| !claimed.contains(view))
        .collect();
    claimed.extend(fresh.iter().cloned());
    fresh
}

fn start(router: SectionRouter, on_load: bool) {
    if !router.has_views() {
        log::debug!("router[{}]: no views on this page", router.name());
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };

    let router = Rc::new(router);
    {
        let router = Rc::clone(&router);
        dom::listen(&window, "hashchange", move |_| {
            router.navigate_current();
        });
    }
    if on_load {
        let router = Rc::clone(&router);
        dom::listen(&window, "load", move |_| {
            router.navigate_current();
        });
    }

    router.navigate_current();
}
