use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

use crate::domain::{forms, gallery, jobs, timetable};
use crate::layout::global_context::SiteContext;
use crate::layout::{drawer, header};
use crate::routes;
use crate::shared::theme;

/// Root of the client. The page markup is static HTML, so the app renders
/// nothing itself: it owns the reactive state and attaches each feature to
/// the elements already on the page.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let ctx = SiteContext::new();

    forms::ui::remove_inline_handlers();
    header::install_dropdowns(ctx);
    drawer::install(ctx);
    routes::install(&config, ctx);
    timetable::ui::install();
    forms::ui::install();
    gallery::ui::install(ctx);
    jobs::ui::render_closing_dates(&config.jobs);

    theme::install(&config.theme);

    view! { <></> }
}
