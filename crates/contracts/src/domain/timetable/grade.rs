/// Class label selected in the timetable picker, e.g. `Form 2B`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeLabel {
    pub form: u8,
    pub section: char,
}

impl GradeLabel {
    /// Parse `Form<ws*><digit><A-D>`. Anything else is `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let rest = label.strip_prefix("Form")?.trim_start();

        let mut chars = rest.chars();
        let form = chars.next()?.to_digit(10)?;
        let section = chars.next().filter(|c| matches!(c, 'A'..='D'))?;
        if chars.next().is_some() {
            return None;
        }

        Some(Self {
            form: form as u8,
            section,
        })
    }

    /// Rotation offset contributed by the section letter
    pub fn section_offset(&self) -> usize {
        section_offset(self.section)
    }
}

pub fn section_offset(section: char) -> usize {
    match section {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        'D' => 3,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_labels() {
        assert_eq!(
            GradeLabel::parse("Form 2B"),
            Some(GradeLabel { form: 2, section: 'B' })
        );
        assert_eq!(
            GradeLabel::parse("Form4D"),
            Some(GradeLabel { form: 4, section: 'D' })
        );
        assert_eq!(
            GradeLabel::parse("Form \t1A"),
            Some(GradeLabel { form: 1, section: 'A' })
        );
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        for label in ["", "Form", "Form 2", "Form 2E", "form 2B", "Form 12B", "Form 2B ", " Form 2B", "Form 2b", "Grade 2B"] {
            assert_eq!(GradeLabel::parse(label), None, "label {:?}", label);
        }
    }

    #[test]
    fn test_any_single_digit_parses() {
        assert_eq!(GradeLabel::parse("Form 7C").map(|g| g.form), Some(7));
    }

    #[test]
    fn test_section_offsets() {
        let offsets: Vec<usize> = ['A', 'B', 'C', 'D'].into_iter().map(section_offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
        assert_eq!(section_offset('Z'), 0);
    }
}
