//! Canned demonstration cases
//!
//! Replays a fixed set of inputs through every drill and pairs each result with the value
//! it should produce.

use crate::core::Value;
use crate::error::GradeError;
use crate::grading::{Exam, Grade, Mark, QUESTION_LABELS, Questions};
use crate::output::formatters::optional_value;
use crate::ranking::{StrategyType, filter_integers, second_largest};

/// One demonstrated input and its outcome
pub struct DemoCase {
    /// Drill the case belongs to
    pub section: &'static str,
    pub data: String,
    pub arguments: String,
    pub result: String,
    pub expected: String,
    pub details: &'static str,
    pub passed: bool,
}

/// Second-largest computed independently: ascending std sort, second from the end
fn reference_second_largest(input: &Value) -> Option<i64> {
    let mut values = filter_integers(input.as_list()?);
    values.sort_unstable();
    values.len().checked_sub(2).map(|i| values[i])
}

fn rank_case(input: &Value, strategy: StrategyType, details: &'static str) -> DemoCase {
    let result = second_largest(input, &strategy);
    let expected = reference_second_largest(input);

    DemoCase {
        section: "Second largest int in list",
        data: input.to_string(),
        arguments: format!("strategy={strategy}"),
        result: optional_value(result),
        expected: optional_value(expected),
        details,
        passed: result == expected,
    }
}

fn grade_case(marks: [i64; 5], expected: char) -> DemoCase {
    let grade = Questions::new(marks)
        .ok()
        .and_then(|questions| Exam::from_questions(&questions).grade_paper(false));

    DemoCase {
        section: "Grading exam papers",
        data: format!("Questions{marks:?}"),
        arguments: "inclusive=false".to_string(),
        result: grade.map_or_else(|| "None".to_string(), |g| g.to_string()),
        expected: expected.to_string(),
        details: "None",
        passed: grade.map(Grade::letter) == Some(expected),
    }
}

fn invalid_exam_case(
    marks: Vec<Mark>,
    details: &'static str,
    is_expected: fn(&GradeError) -> bool,
) -> DemoCase {
    let data = marks
        .iter()
        .map(|m| format!("({}, {})", m.label, m.value))
        .collect::<Vec<_>>()
        .join(", ");
    let outcome = Exam::new(marks);

    DemoCase {
        section: "Grading exam papers",
        data: format!("[{data}]"),
        arguments: "None".to_string(),
        result: match &outcome {
            Ok(_) => "accepted".to_string(),
            Err(e) => format!("rejected: {e}"),
        },
        expected: "rejected".to_string(),
        details,
        passed: outcome.as_ref().err().is_some_and(is_expected),
    }
}

fn labelled(values: [i64; 5]) -> Vec<Mark> {
    QUESTION_LABELS
        .iter()
        .zip(values)
        .map(|(&label, value)| Mark::new(label, value))
        .collect()
}

/// Build and evaluate every demonstration case
#[must_use]
pub fn run_demo() -> Vec<DemoCase> {
    let sample = Value::List(vec![
        Value::from("xd"),
        Value::Integer(12),
        Value::Integer(5),
        Value::Integer(34),
        Value::Integer(75),
        Value::Integer(8),
        Value::Null,
        Value::Integer(11),
    ]);
    let no_integers = Value::List(vec![
        Value::from("xd"),
        Value::Null,
        Value::Other("object".to_string()),
        Value::Other("type".to_string()),
        Value::from("test!"),
    ]);
    let duplicate_max = Value::List(vec![Value::Integer(9), Value::Integer(9), Value::Integer(3)]);

    vec![
        rank_case(&sample, StrategyType::MergeSort, "None"),
        rank_case(&sample, StrategyType::Builtin, "None"),
        rank_case(
            &no_integers,
            StrategyType::MergeSort,
            "Provided a list with no integers",
        ),
        rank_case(
            &duplicate_max,
            StrategyType::MergeSort,
            "Duplicated maximum is the second position",
        ),
        grade_case([67, 78, 30, 90, 89], 'C'),
        grade_case([100; 5], 'A'),
        invalid_exam_case(
            vec![Mark::new("first", 100)],
            "Only one question marked",
            |e| matches!(e, GradeError::IncompleteMarks(_)),
        ),
        invalid_exam_case(
            labelled([100, 105, 100, 100, 100]),
            "Mark above 100",
            |e| matches!(e, GradeError::MarkTooHigh(_)),
        ),
        invalid_exam_case(
            labelled([100, -2, 100, 100, 100]),
            "Mark below 0",
            |e| matches!(e, GradeError::MarkTooLow(_)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_case_passes() {
        for case in run_demo() {
            assert!(
                case.passed,
                "{}: {} gave {}, expected {}",
                case.section, case.data, case.result, case.expected
            );
        }
    }

    #[test]
    fn covers_every_drill() {
        let cases = run_demo();
        assert_eq!(cases.len(), 9);
        assert_eq!(cases[0].result, "34");
        assert_eq!(cases[2].result, "None");
        assert_eq!(cases[3].result, "9");
        assert_eq!(cases[4].result, "C");
        assert!(cases[6].result.starts_with("rejected"));
    }

    #[test]
    fn reference_handles_short_inputs() {
        assert_eq!(reference_second_largest(&Value::List(vec![])), None);
        assert_eq!(
            reference_second_largest(&Value::List(vec![Value::Integer(1)])),
            None
        );
        assert_eq!(reference_second_largest(&Value::Integer(3)), None);
    }
}
