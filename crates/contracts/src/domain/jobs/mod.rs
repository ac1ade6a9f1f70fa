pub mod closing_dates;

pub use closing_dates::ClosingSchedule;
