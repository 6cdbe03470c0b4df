//! Per-question marks

use crate::error::GradeError;

/// Labels of the five questions, in paper order
pub const QUESTION_LABELS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

/// Lowest mark a question can receive
pub const MIN_MARK: i64 = 0;

/// Highest mark a question can receive
pub const MAX_MARK: i64 = 100;

/// Check that a single mark lies within `MIN_MARK..=MAX_MARK`
#[inline]
#[must_use]
pub const fn mark_in_range(mark: i64) -> bool {
    mark >= MIN_MARK && mark <= MAX_MARK
}

/// A labelled mark for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub label: String,
    pub value: i64,
}

impl Mark {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Whether the label names one of the five questions (case-insensitive)
    #[must_use]
    pub fn has_known_label(&self) -> bool {
        QUESTION_LABELS
            .iter()
            .any(|label| label.eq_ignore_ascii_case(&self.label))
    }
}

/// Marks for exactly five questions, each within range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Questions {
    marks: [i64; 5],
}

impl Questions {
    /// Create a set of five marks
    ///
    /// # Errors
    /// Returns `GradeError::MarkOutOfRange` for the first mark below 0 or above 100.
    ///
    /// # Examples
    /// ```
    /// use competition::grading::Questions;
    ///
    /// assert!(Questions::new([67, 78, 30, 90, 89]).is_ok());
    /// assert!(Questions::new([67, 78, 130, 90, 89]).is_err());
    /// ```
    pub fn new(marks: [i64; 5]) -> Result<Self, GradeError> {
        for (&question, &mark) in QUESTION_LABELS.iter().zip(&marks) {
            if !mark_in_range(mark) {
                return Err(GradeError::MarkOutOfRange { question, mark });
            }
        }

        Ok(Self { marks })
    }

    /// Raw marks in question order
    #[must_use]
    pub const fn values(&self) -> [i64; 5] {
        self.marks
    }

    /// Marks paired with their question labels
    #[must_use]
    pub fn marks_list(&self) -> Vec<Mark> {
        QUESTION_LABELS
            .iter()
            .zip(self.marks)
            .map(|(&label, value)| Mark::new(label, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_marks_are_kept_in_order() {
        let questions = Questions::new([67, 78, 30, 90, 89]).unwrap();
        assert_eq!(questions.values(), [67, 78, 30, 90, 89]);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Questions::new([0, 100, 0, 100, 50]).is_ok());
    }

    #[test]
    fn out_of_range_names_the_question() {
        assert_eq!(
            Questions::new([10, 20, 101, 40, 50]),
            Err(GradeError::MarkOutOfRange {
                question: "third",
                mark: 101
            })
        );
        assert_eq!(
            Questions::new([-1, 20, 30, 40, 50]),
            Err(GradeError::MarkOutOfRange {
                question: "first",
                mark: -1
            })
        );
    }

    #[test]
    fn marks_list_is_labelled() {
        let list = Questions::new([1, 2, 3, 4, 5]).unwrap().marks_list();
        assert_eq!(list.len(), 5);
        assert_eq!(list[0], Mark::new("first", 1));
        assert_eq!(list[4], Mark::new("fifth", 5));
    }

    #[test]
    fn label_matching_ignores_case() {
        assert!(Mark::new("FIRST", 10).has_known_label());
        assert!(Mark::new("Fifth", 10).has_known_label());
        assert!(!Mark::new("sixth", 10).has_known_label());
    }

    #[test]
    fn range_check() {
        assert!(mark_in_range(0));
        assert!(mark_in_range(100));
        assert!(!mark_in_range(-2));
        assert!(!mark_in_range(105));
    }
}
