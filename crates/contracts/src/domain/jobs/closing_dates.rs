use chrono::{Duration, NaiveDate};

/// Closing dates printed on the job board, counted from the posting date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingSchedule {
    pub posted_on: NaiveDate,
    pub standard_days: i64,
    pub extended_days: i64,
}

impl ClosingSchedule {
    pub fn standard(&self) -> NaiveDate {
        self.posted_on + Duration::days(self.standard_days)
    }

    pub fn extended(&self) -> NaiveDate {
        self.posted_on + Duration::days(self.extended_days)
    }

    pub fn standard_label(&self) -> String {
        closing_label(self.standard())
    }

    pub fn extended_label(&self) -> String {
        closing_label(self.extended())
    }
}

/// "Closing: September 17, 2025"
pub fn closing_label(date: NaiveDate) -> String {
    format!("Closing: {}", date.format("%B %-d, %Y"))
}
