//! Exam grading
//!
//! The paper total is the average mark rounded up. Totals that sit on a range boundary
//! (multiples of ten, zero, or any total containing the digit 9) are always graded with
//! inclusive bounds; everything else uses exclusive bounds unless asked otherwise.

use super::questions::{MAX_MARK, MIN_MARK, Mark, QUESTION_LABELS, Questions, mark_in_range};
use crate::error::{GradeError, PromptError};
use crate::interactive::Prompter;
use crate::output::formatters::error_text;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::debug;

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

/// Grade ranges as `(grade, low, high)`, highest grade first
pub const GRADE_RANGES: [(Grade, i64, i64); 5] = [
    (Grade::A, 90, 100),
    (Grade::B, 80, 89),
    (Grade::C, 70, 79),
    (Grade::D, 60, 69),
    (Grade::F, 0, 60),
];

impl Grade {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Average of `marks`, rounded up
///
/// Returns `None` for no marks, or if the sum overflows `i64`.
#[must_use]
pub fn paper_total(marks: &[i64]) -> Option<i64> {
    if marks.is_empty() {
        return None;
    }

    let sum = marks.iter().try_fold(0i64, |acc, &mark| acc.checked_add(mark))?;
    let count = marks.len() as i64;
    // Truncating division already rounds negative quotients up
    Some(sum / count + i64::from(sum % count > 0))
}

/// Whether `total` sits where exclusive bounds would miss every range
fn forces_inclusive(total: i64) -> bool {
    total % 10 == 0 || total == 0 || total.to_string().contains('9')
}

/// Grade a set of raw marks
///
/// Returns `None` if there are no marks, their sum overflows, or the total falls outside
/// every range.
///
/// # Examples
/// ```
/// use competition::grading::{Grade, grade_marks};
///
/// assert_eq!(grade_marks(&[67, 78, 30, 90, 89], false), Some(Grade::C));
/// assert_eq!(grade_marks(&[100; 5], false), Some(Grade::A));
/// assert_eq!(grade_marks(&[], false), None);
/// ```
#[must_use]
pub fn grade_marks(marks: &[i64], inclusive: bool) -> Option<Grade> {
    let total = paper_total(marks)?;
    let forced = forces_inclusive(total);
    let inclusive = inclusive || forced;
    debug!(total, inclusive, forced, "grading paper");

    if inclusive {
        GRADE_RANGES
            .iter()
            .find(|&&(_, low, high)| (low..=high).contains(&total))
            .map(|&(grade, _, _)| grade)
    } else {
        GRADE_RANGES
            .iter()
            .rfind(|&&(_, low, high)| low < total && total < high)
            .map(|&(grade, _, _)| grade)
    }
}

/// An exam paper holding labelled marks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exam {
    marks: Vec<Mark>,
}

impl Exam {
    /// Create an exam from labelled marks
    ///
    /// An empty list creates an ungraded exam. Otherwise the marks must cover all five
    /// question labels and every mark must be within 0..=100.
    ///
    /// # Errors
    /// Checked in order:
    /// - `GradeError::IncompleteMarks` unless exactly five marks carry a question label
    /// - `GradeError::MarkTooHigh` for a mark above 100
    /// - `GradeError::MarkTooLow` for a mark below 0
    pub fn new(marks: Vec<Mark>) -> Result<Self, GradeError> {
        if !marks.is_empty() {
            let present = marks.iter().filter(|m| m.has_known_label()).count();
            if present != 5 {
                return Err(GradeError::IncompleteMarks(present));
            }
            if let Some(high) = marks.iter().find(|m| m.value > MAX_MARK) {
                return Err(GradeError::MarkTooHigh(high.value));
            }
            if let Some(low) = marks.iter().find(|m| m.value < MIN_MARK) {
                return Err(GradeError::MarkTooLow(low.value));
            }
        }

        Ok(Self { marks })
    }

    /// Exam built from already validated questions
    #[must_use]
    pub fn from_questions(questions: &Questions) -> Self {
        Self {
            marks: questions.marks_list(),
        }
    }

    /// Interactively ask for the mark of each of the five questions
    ///
    /// Entries that are not whole numbers or fall outside 0..=100 are rejected and asked
    /// again.
    ///
    /// # Errors
    /// Returns `PromptError` if input ends or the terminal cannot be written.
    pub fn collect_marks<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
    ) -> Result<Self, PromptError> {
        let mut marks = Vec::with_capacity(5);

        for (index, label) in QUESTION_LABELS.iter().enumerate() {
            loop {
                let answer = prompter.ask(&format!("Marks for question #{}: ", index + 1))?;

                match answer.parse::<i64>() {
                    Ok(mark) if mark_in_range(mark) => {
                        marks.push(Mark::new(*label, mark));
                        break;
                    }
                    Ok(_) => prompter.say(&error_text(
                        "ERR: Invalid amount! Marks are only between 0-100 \
                         (both values inclusive); try again!",
                    ))?,
                    Err(_) => prompter.say(&error_text(&format!(
                        "ERR: '{answer}' is not a whole number; try again!"
                    )))?,
                }
            }
        }

        Ok(Self { marks })
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Grade the paper from its own marks
    ///
    /// Returns `None` for an ungraded exam.
    #[must_use]
    pub fn grade_paper(&self, inclusive: bool) -> Option<Grade> {
        let values: Vec<i64> = self.marks.iter().map(|m| m.value).collect();
        grade_marks(&values, inclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn labelled(values: [i64; 5]) -> Vec<Mark> {
        QUESTION_LABELS
            .iter()
            .zip(values)
            .map(|(&label, value)| Mark::new(label, value))
            .collect()
    }

    #[test]
    fn sample_paper_is_c() {
        let questions = Questions::new([67, 78, 30, 90, 89]).unwrap();
        let exam = Exam::from_questions(&questions);
        assert_eq!(exam.grade_paper(false), Some(Grade::C));
    }

    #[test]
    fn perfect_paper_is_a() {
        let exam = Exam::new(labelled([100; 5])).unwrap();
        assert_eq!(exam.grade_paper(false), Some(Grade::A));
    }

    #[test]
    fn ungraded_exam_has_no_grade() {
        let exam = Exam::new(Vec::new()).unwrap();
        assert_eq!(exam.grade_paper(false), None);
        assert_eq!(Exam::default().grade_paper(true), None);
    }

    #[test]
    fn incomplete_marks_are_rejected() {
        let result = Exam::new(vec![Mark::new("first", 100)]);
        assert_eq!(result, Err(GradeError::IncompleteMarks(1)));
    }

    #[test]
    fn unknown_labels_do_not_count() {
        let mut marks = labelled([50; 5]);
        marks[2].label = "bonus".to_string();
        assert_eq!(Exam::new(marks), Err(GradeError::IncompleteMarks(4)));
    }

    #[test]
    fn high_mark_is_rejected() {
        let result = Exam::new(labelled([100, 105, 100, 100, 100]));
        assert_eq!(result, Err(GradeError::MarkTooHigh(105)));
    }

    #[test]
    fn low_mark_is_rejected() {
        let result = Exam::new(labelled([100, -2, 100, 100, 100]));
        assert_eq!(result, Err(GradeError::MarkTooLow(-2)));
    }

    #[test]
    fn total_rounds_up() {
        assert_eq!(paper_total(&[89, 90]), Some(90));
        assert_eq!(paper_total(&[67, 78, 30, 90, 89]), Some(71));
        assert_eq!(paper_total(&[80, 80]), Some(80));
        assert_eq!(paper_total(&[]), None);
    }

    #[test]
    fn overflowing_sum_has_no_total() {
        assert_eq!(paper_total(&[i64::MAX, 1]), None);
        assert_eq!(paper_total(&[i64::MIN, -1]), None);
        assert_eq!(grade_marks(&[i64::MAX, 1], false), None);
        assert_eq!(paper_total(&[i64::MAX, 0]), Some(i64::MAX / 2 + 1));
    }

    #[test]
    fn boundaries_use_inclusive_ranges() {
        assert_eq!(grade_marks(&[90], false), Some(Grade::A));
        assert_eq!(grade_marks(&[89], false), Some(Grade::B));
        assert_eq!(grade_marks(&[80], false), Some(Grade::B));
        assert_eq!(grade_marks(&[79], false), Some(Grade::C));
        assert_eq!(grade_marks(&[69], false), Some(Grade::D));
        assert_eq!(grade_marks(&[60], false), Some(Grade::D));
        assert_eq!(grade_marks(&[0], false), Some(Grade::F));
    }

    #[test]
    fn interior_totals_use_exclusive_ranges() {
        assert_eq!(grade_marks(&[95], false), Some(Grade::A));
        assert_eq!(grade_marks(&[85], false), Some(Grade::B));
        assert_eq!(grade_marks(&[61], false), Some(Grade::D));
        assert_eq!(grade_marks(&[42], false), Some(Grade::F));
    }

    #[test]
    fn inclusive_flag_agrees_everywhere() {
        for total in 0..=100 {
            assert_eq!(
                grade_marks(&[total], false),
                grade_marks(&[total], true),
                "total {total}"
            );
        }
    }

    #[test]
    fn every_total_gets_a_grade() {
        for total in 0..=100 {
            assert!(grade_marks(&[total], false).is_some(), "total {total}");
        }
    }

    #[test]
    fn grade_letters() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::F.letter(), 'F');
    }

    #[test]
    fn collect_marks_reprompts_on_bad_entries() {
        let input = "67\n150\n78\nabc\n30\n90\n89\n";
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());

        let exam = Exam::collect_marks(&mut prompter).unwrap();
        let values: Vec<i64> = exam.marks().iter().map(|m| m.value).collect();
        assert_eq!(values, vec![67, 78, 30, 90, 89]);
        assert_eq!(exam.marks()[1].label, "second");
        assert_eq!(exam.grade_paper(false), Some(Grade::C));

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("Marks for question #5: "));
        assert!(output.contains("Invalid amount"));
        assert!(output.contains("'abc' is not a whole number"));
    }

    #[test]
    fn collect_marks_fails_when_input_ends() {
        let mut prompter = Prompter::new(Cursor::new("50\n60\n"), Vec::new());
        assert!(matches!(
            Exam::collect_marks(&mut prompter),
            Err(PromptError::Closed)
        ));
    }
}
