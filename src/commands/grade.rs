//! Exam grading command

use crate::error::{InputError, PromptError};
use crate::grading::{Exam, Grade, Mark, Questions, paper_total};
use crate::interactive::Prompter;
use std::io::{BufRead, Write};

/// Configuration for grading a paper
pub struct GradeConfig {
    /// Marks in question order; empty means ask interactively
    pub marks: Vec<i64>,
    pub inclusive: bool,
}

impl GradeConfig {
    #[must_use]
    pub const fn new(marks: Vec<i64>, inclusive: bool) -> Self {
        Self { marks, inclusive }
    }

    /// Whether marks must be collected from the player
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.marks.is_empty()
    }

    /// The five marks as validated questions
    ///
    /// # Errors
    ///
    /// Returns `InputError::MarkCount` unless exactly five marks were given, or
    /// `InputError::Grade` if any mark is out of range.
    pub fn questions(&self) -> Result<Questions, InputError> {
        let marks: [i64; 5] = self
            .marks
            .as_slice()
            .try_into()
            .map_err(|_| InputError::MarkCount(self.marks.len()))?;
        Ok(Questions::new(marks)?)
    }
}

/// Result of grading a paper
pub struct GradeReport {
    pub marks: Vec<Mark>,
    pub total: Option<i64>,
    pub grade: Option<Grade>,
}

/// Grade an exam that already holds its marks
#[must_use]
pub fn grade_exam(exam: &Exam, inclusive: bool) -> GradeReport {
    let values: Vec<i64> = exam.marks().iter().map(|m| m.value).collect();

    GradeReport {
        marks: exam.marks().to_vec(),
        total: paper_total(&values),
        grade: exam.grade_paper(inclusive),
    }
}

/// Grade five marks given up front
///
/// # Errors
///
/// Returns an error if there are not exactly five marks or any mark is out of range.
pub fn run_grade(config: &GradeConfig) -> Result<GradeReport, InputError> {
    let questions = config.questions()?;
    Ok(grade_exam(&Exam::from_questions(&questions), config.inclusive))
}

/// Ask for each mark interactively, then grade
///
/// # Errors
///
/// Returns `PromptError` if input ends early or the terminal fails.
pub fn collect_and_grade<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    inclusive: bool,
) -> Result<GradeReport, PromptError> {
    let exam = Exam::collect_marks(prompter)?;
    Ok(grade_exam(&exam, inclusive))
}
