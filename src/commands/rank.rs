//! Second-largest command
//!
//! Parses a JSON sequence and runs the ranking pipeline with one or both strategies.

use crate::core::Value;
use crate::error::InputError;
use crate::ranking::{RankExtractor, RankReport, StrategyType};

/// Configuration for a ranking run
pub struct RankConfig {
    /// JSON text of the input sequence
    pub input: String,
    pub strategy: StrategyType,
    /// Run every strategy and report each
    pub compare: bool,
}

impl RankConfig {
    #[must_use]
    pub fn new(input: String) -> Self {
        Self {
            input,
            strategy: StrategyType::default(),
            compare: false,
        }
    }
}

/// Result of a ranking run
pub struct RankResult {
    pub input: Value,
    /// One report per strategy run, in run order
    pub reports: Vec<RankReport>,
}

impl RankResult {
    /// Answer from the first strategy run
    #[must_use]
    pub fn second_largest(&self) -> Option<i64> {
        self.reports.first().and_then(|r| r.second_largest)
    }

    /// Whether every strategy produced the same answer
    #[must_use]
    pub fn strategies_agree(&self) -> bool {
        self.reports
            .windows(2)
            .all(|pair| pair[0].second_largest == pair[1].second_largest)
    }
}

/// Parse JSON text into a `Value`
///
/// # Errors
///
/// Returns `InputError::Json` if the text is not valid JSON.
pub fn parse_sequence(json: &str) -> Result<Value, InputError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}

/// Run the ranking pipeline described by `config`
///
/// Valid JSON that is not an array is treated as a sequence with no integers.
///
/// # Errors
///
/// Returns `InputError::Json` if the input is not valid JSON.
pub fn run_rank(config: &RankConfig) -> Result<RankResult, InputError> {
    let input = parse_sequence(&config.input)?;
    let items = input.as_list().unwrap_or_default();

    let strategies: &[StrategyType] = if config.compare {
        &StrategyType::ALL
    } else {
        std::slice::from_ref(&config.strategy)
    };

    let reports = strategies
        .iter()
        .map(|&strategy| RankExtractor::new(strategy).report(items))
        .collect();

    Ok(RankResult { input, reports })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sequence() {
        let config = RankConfig::new(r#"["xd", 12, 5, 34, 75, 8, null, 11]"#.to_string());
        let result = run_rank(&config).unwrap();

        assert_eq!(result.second_largest(), Some(34));
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.reports[0].strategy, "merge-sort");
    }

    #[test]
    fn compare_runs_every_strategy() {
        let mut config = RankConfig::new("[9, 9, 3, true, 4.5]".to_string());
        config.compare = true;
        let result = run_rank(&config).unwrap();

        assert_eq!(result.reports.len(), 2);
        assert!(result.strategies_agree());
        assert_eq!(result.second_largest(), Some(9));
    }

    #[test]
    fn no_integers() {
        let config = RankConfig::new(r#"["xd", null, {"a": 1}, "test!"]"#.to_string());
        assert_eq!(run_rank(&config).unwrap().second_largest(), None);
    }

    #[test]
    fn non_array_json_is_absent() {
        let config = RankConfig::new("42".to_string());
        let result = run_rank(&config).unwrap();

        assert_eq!(result.input, Value::Integer(42));
        assert_eq!(result.second_largest(), None);
        assert!(result.reports[0].filtered.is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let config = RankConfig::new("[1, 2,".to_string());
        assert!(matches!(run_rank(&config), Err(InputError::Json(_))));
    }

    #[test]
    fn builtin_strategy_is_reported() {
        let mut config = RankConfig::new("[1, 2, 3]".to_string());
        config.strategy = StrategyType::Builtin;
        let result = run_rank(&config).unwrap();

        assert_eq!(result.reports[0].strategy, "builtin-sort");
        assert_eq!(result.second_largest(), Some(2));
    }
}
