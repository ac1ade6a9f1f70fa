use contracts::shared::config::JobsConfig;

use crate::shared::dom;

/// Fill the job board's "Closing: ..." labels.
pub fn render_closing_dates(config: &JobsConfig) {
    let schedule = config.schedule();

    let standard = dom::query_all(".closing-date");
    let extended = dom::query_all(".closing-date-extended");
    if standard.is_empty() && extended.is_empty() {
        return;
    }

    let standard_label = schedule.standard_label();
    for el in &standard {
        el.set_text_content(Some(&standard_label));
    }

    let extended_label = schedule.extended_label();
    for el in &extended {
        el.set_text_content(Some(&extended_label));
    }

    log::debug!(
        "jobs: {} closing labels, {} extended",
        standard.len(),
        extended.len()
    );
}
