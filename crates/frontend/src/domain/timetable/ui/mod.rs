//! Class timetable: `#tt-class` picks a class, `#tt-body` shows its week.
//!
//! The table body is a Leptos view mounted into the existing `<tbody>` once
//! a class is chosen; it re-renders from the selected label, so a new
//! selection always replaces the previous rows.

use std::cell::Cell;

use contracts::domain::timetable::{Schedule, TimetableRow, DAYS};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlSelectElement};

use crate::shared::dom;

#[component]
fn TimetableBody(selected: ReadSignal<Option<String>>) -> impl IntoView {
    let day_columns = DAYS.len().to_string();

    move || {
        let Some(schedule) = selected.with(|label| label.as_deref().and_then(Schedule::for_label))
        else {
            return view! { <></> }.into_any();
        };

        schedule
            .rows()
            .into_iter()
            .map(|row| match row {
                TimetableRow::Lesson { time, subjects } => view! {
                    <tr>
                        <td class="time">{time}</td>
                        {subjects
                            .into_iter()
                            .map(|subject| view! { <td>{subject}</td> })
                            .collect_view()}
                    </tr>
                }
                .into_any(),
                TimetableRow::Break { time, label } => view! {
                    <tr class="break">
                        <td class="time">{time}</td>
                        <td colspan=day_columns.clone()>{label}</td>
                    </tr>
                }
                .into_any(),
            })
            .collect_view()
            .into_any()
    }
}

fn has_schedule(label: Option<&str>) -> bool {
    label.and_then(Schedule::for_label).is_some()
}

/// Hook the class picker to the timetable. Needs `#tt-class`, `#tt-wrap`
/// and `#tt-body`; otherwise the page has no timetable.
///
/// The page is left as served until a class with a schedule is selected,
/// either restored by the browser or picked by the user.
pub fn install() {
    let (Some(select), Some(wrap), Some(body)) = (
        dom::by_id("tt-class"),
        dom::by_id("tt-wrap"),
        dom::by_id("tt-body"),
    ) else {
        log::debug!("timetable: picker or table missing, skipping");
        return;
    };
    let Ok(body) = body.dyn_into::<HtmlElement>() else {
        return;
    };

    let restored = select
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| select.value())
        .filter(|value| !value.is_empty());
    let (selected, set_selected) = signal(restored);
    let rows = RowsMount {
        body,
        mounted: Cell::new(false),
    };

    Effect::new(move |shown: Option<bool>| {
        let visible = selected.with(|label| has_schedule(label.as_deref()));
        if !visible && !shown.unwrap_or(false) {
            return false;
        }
        dom::set_display(&wrap, if visible { "" } else { "none" });
        true
    });

    if selected.with_untracked(|label| has_schedule(label.as_deref())) {
        rows.mount(selected);
    }

    dom::listen(&select, "change", move |event| {
        let label = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .filter(|value| !value.is_empty());
        log::debug!("timetable: class {:?}", label);
        let mount = has_schedule(label.as_deref());
        set_selected.set(label);
        if mount {
            rows.mount(selected);
        }
    });
}

/// `#tt-body`, taken over by [`TimetableBody`] the first time it is needed.
struct RowsMount {
    body: HtmlElement,
    mounted: Cell<bool>,
}

impl RowsMount {
    fn mount(&self, selected: ReadSignal<Option<String>>) {
        if self.mounted.replace(true) {
            return;
        }
        // Static placeholder rows make way for the generated ones
        self.body.set_inner_html("");
        leptos::mount::mount_to(self.body.clone(), move || view! { <TimetableBody selected=selected /> })
            .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_known_classes_take_over_the_table() {
        assert!(has_schedule(Some("Form 2B")));
        assert!(!has_schedule(None));
        assert!(!has_schedule(Some("")));
        assert!(!has_schedule(Some("Form 2E")));
    }
}
