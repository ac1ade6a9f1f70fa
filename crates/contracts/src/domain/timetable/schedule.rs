//! Weekly timetable derived from a class label.
//!
//! Every day shows the grade's six subjects rotated left by
//! `(day index + section offset) mod 6`, so each class gets a different but
//! complete week. The tables below are fixed data.

use super::grade::GradeLabel;

pub const DAYS: [&str; 5] = ["Saturday", "Sunday", "Monday", "Tuesday", "Wednesday"];

pub const LESSON_TIMES: [&str; 6] = [
    "07:30–08:10",
    "08:15–08:55",
    "09:00–09:40",
    "10:00–10:40",
    "10:45–11:25",
    "11:30–12:00",
];

pub const BREAK_TIME: &str = "09:40–10:00";
pub const BREAK_LABEL: &str = "Break";
/// Lesson rows rendered before the break
pub const BREAK_AFTER: usize = 3;

type Subjects = [&'static str; 6];

static FORM_1: Subjects = ["Qur’an", "Mathematics", "English", "Biology", "Geography", "Islamic"];
static FORM_2: Subjects = ["Mathematics", "Chemistry", "Arabic", "English", "Physics", "Islamic"];
static FORM_3: Subjects = ["Physics", "Mathematics", "English", "Chemistry", "Biology", "Arabic"];
static FORM_4: Subjects = ["Mathematics", "English", "Physics", "Chemistry", "ICT", "Islamic"];

/// Base subject order for a form; unknown forms use Form 1's
pub fn base_subjects(form: u8) -> &'static Subjects {
    match form {
        2 => &FORM_2,
        3 => &FORM_3,
        4 => &FORM_4,
        _ => &FORM_1,
    }
}

/// Move the first `k` items to the end, returning a new sequence
pub fn rotate<T: Clone>(items: &[T], k: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let k = k % items.len();
    items[k..].iter().chain(&items[..k]).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: &'static str,
    pub subjects: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub days: Vec<DaySchedule>,
}

/// One `<tr>` of the rendered timetable body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableRow {
    Lesson {
        time: &'static str,
        subjects: Vec<&'static str>,
    },
    Break {
        time: &'static str,
        label: &'static str,
    },
}

impl Schedule {
    pub fn for_grade(grade: &GradeLabel) -> Self {
        let base = base_subjects(grade.form);
        let offset = grade.section_offset();

        let days = DAYS
            .iter()
            .copied()
            .enumerate()
            .map(|(index, day)| DaySchedule {
                day,
                subjects: rotate(base, (index + offset) % base.len()),
            })
            .collect();

        Self { days }
    }

    /// `None` for empty or malformed labels
    pub fn for_label(label: &str) -> Option<Self> {
        GradeLabel::parse(label).map(|grade| Self::for_grade(&grade))
    }

    /// Subject at `row` on day `day_index`, empty when out of range
    pub fn subject(&self, day_index: usize, row: usize) -> &'static str {
        self.days
            .get(day_index)
            .and_then(|day| day.subjects.get(row))
            .copied()
            .unwrap_or("")
    }

    /// Table body rows in display order, with the break interleaved
    pub fn rows(&self) -> Vec<TimetableRow> {
        let mut rows = Vec::with_capacity(LESSON_TIMES.len() + 1);
        for (row, time) in LESSON_TIMES.iter().copied().enumerate() {
            if row == BREAK_AFTER {
                rows.push(TimetableRow::Break {
                    time: BREAK_TIME,
                    label: BREAK_LABEL,
                });
            }
            let subjects = (0..self.days.len())
                .map(|day| self.subject(day, row))
                .collect();
            rows.push(TimetableRow::Lesson { time, subjects });
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_labels() -> Vec<String> {
        let mut labels = Vec::new();
        for form in 1..=4 {
            for section in ['A', 'B', 'C', 'D'] {
                labels.push(format!("Form {}{}", form, section));
            }
        }
        labels
    }

    #[test]
    fn test_form_2b_saturday() {
        let schedule = Schedule::for_label("Form 2B").unwrap();
        assert_eq!(schedule.days[0].day, "Saturday");
        assert_eq!(
            schedule.days[0].subjects,
            vec!["Chemistry", "Arabic", "English", "Physics", "Islamic", "Mathematics"]
        );
    }

    #[test]
    fn test_rotate() {
        assert_eq!(rotate(&[1, 2, 3, 4], 1), vec![2, 3, 4, 1]);
        assert_eq!(rotate(&[1, 2, 3, 4], 0), vec![1, 2, 3, 4]);
        assert_eq!(rotate(&[1, 2, 3, 4], 6), vec![3, 4, 1, 2]);
        assert_eq!(rotate::<u8>(&[], 3), Vec::<u8>::new());
    }

    #[test]
    fn test_rotation_leaves_base_table_untouched() {
        let before = *base_subjects(3);
        let _ = Schedule::for_label("Form 3D");
        assert_eq!(*base_subjects(3), before);
    }

    #[test]
    fn test_subject_formula_for_every_class() {
        for label in all_labels() {
            let grade = GradeLabel::parse(&label).unwrap();
            let base = base_subjects(grade.form);
            let schedule = Schedule::for_grade(&grade);
            for day in 0..DAYS.len() {
                for row in 0..LESSON_TIMES.len() {
                    let expected = base[(row + day + grade.section_offset()) % 6];
                    assert_eq!(schedule.subject(day, row), expected, "{} day {} row {}", label, day, row);
                }
            }
        }
    }

    #[test]
    fn test_each_day_is_a_permutation_of_the_base() {
        for label in all_labels() {
            let grade = GradeLabel::parse(&label).unwrap();
            let mut base = base_subjects(grade.form).to_vec();
            base.sort_unstable();
            for day in Schedule::for_grade(&grade).days {
                let mut subjects = day.subjects.clone();
                subjects.sort_unstable();
                assert_eq!(subjects, base, "{} {}", label, day.day);
            }
        }
    }

    #[test]
    fn test_rows_shape() {
        for label in all_labels() {
            let rows = Schedule::for_label(&label).unwrap().rows();
            assert_eq!(rows.len(), 7);

            let lessons: Vec<_> = rows
                .iter()
                .filter_map(|row| match row {
                    TimetableRow::Lesson { subjects, .. } => Some(subjects),
                    TimetableRow::Break { .. } => None,
                })
                .collect();
            assert_eq!(lessons.len(), 6);
            assert!(lessons.iter().all(|subjects| subjects.len() == 5));

            assert_eq!(
                rows[3],
                TimetableRow::Break {
                    time: BREAK_TIME,
                    label: BREAK_LABEL
                }
            );
        }
    }

    #[test]
    fn test_lesson_times_in_order_around_break() {
        let rows = Schedule::for_label("Form 1A").unwrap().rows();
        let times: Vec<&str> = rows
            .iter()
            .map(|row| match row {
                TimetableRow::Lesson { time, .. } | TimetableRow::Break { time, .. } => *time,
            })
            .collect();
        assert_eq!(
            times,
            vec![
                "07:30–08:10",
                "08:15–08:55",
                "09:00–09:40",
                "09:40–10:00",
                "10:00–10:40",
                "10:45–11:25",
                "11:30–12:00",
            ]
        );
    }

    #[test]
    fn test_new_class_replaces_every_lesson_row() {
        let first = Schedule::for_label("Form 1A").unwrap().rows();
        let second = Schedule::for_label("Form 3C").unwrap().rows();
        assert_eq!(second.len(), first.len());
        assert_ne!(first, second);

        let expected = Schedule::for_grade(&GradeLabel::parse("Form 3C").unwrap());
        for (row, lesson) in second
            .iter()
            .filter_map(|row| match row {
                TimetableRow::Lesson { subjects, .. } => Some(subjects),
                TimetableRow::Break { .. } => None,
            })
            .enumerate()
        {
            let from_schedule: Vec<&str> =
                (0..DAYS.len()).map(|day| expected.subject(day, row)).collect();
            assert_eq!(*lesson, from_schedule, "row {}", row);
        }
    }

    #[test]
    fn test_unknown_form_uses_form_1_subjects() {
        let schedule = Schedule::for_label("Form 9A").unwrap();
        assert_eq!(schedule.days[0].subjects, FORM_1.to_vec());
    }

    #[test]
    fn test_malformed_label_has_no_schedule() {
        assert_eq!(Schedule::for_label(""), None);
        assert_eq!(Schedule::for_label("Form 2E"), None);
    }

    #[test]
    fn test_subject_out_of_range_is_empty() {
        let schedule = Schedule::for_label("Form 1A").unwrap();
        assert_eq!(schedule.subject(5, 0), "");
        assert_eq!(schedule.subject(0, 6), "");
    }
}
