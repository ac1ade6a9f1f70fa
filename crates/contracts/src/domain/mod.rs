pub mod forms;
pub mod gallery;
pub mod jobs;
pub mod navigation;
pub mod timetable;
