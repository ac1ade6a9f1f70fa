pub mod grade;
pub mod schedule;

pub use grade::GradeLabel;
pub use schedule::{Schedule, TimetableRow, DAYS};
