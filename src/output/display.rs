//! Display functions for command results

use super::formatters::{join_values, optional_value};
use crate::commands::{DemoCase, GradeReport, RankResult};
use crate::puzzle::GameOutcome;
use colored::Colorize;

/// Print the result of a ranking run
pub fn print_rank_result(result: &RankResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Data: {}", result.input.to_string().bright_white());
    println!("{}", "─".repeat(60).cyan());

    for report in &result.reports {
        println!(
            "\n{} {}",
            "Strategy:".bright_cyan().bold(),
            report.strategy.bright_yellow()
        );

        if verbose {
            println!("  Integers:   {}", join_values(&report.filtered));
            println!("  Descending: {}", join_values(&report.sorted));
        }

        let answer = optional_value(report.second_largest);
        if report.second_largest.is_some() {
            println!("  Second largest: {}", answer.green().bold());
        } else {
            println!(
                "  Second largest: {} {}",
                answer.yellow().bold(),
                "(fewer than two integers)".bright_black()
            );
        }
    }

    if result.reports.len() > 1 {
        println!();
        if result.strategies_agree() {
            println!("{}", "✅ All strategies agree".green().bold());
        } else {
            println!("{}", "❌ Strategies disagree".red().bold());
        }
    }
}

/// Print the result of grading a paper
pub fn print_grade_report(report: &GradeReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EXAM RESULT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!();
    for mark in &report.marks {
        println!("   {:<8} {:>3}", mark.label, mark.value);
    }

    if let Some(total) = report.total {
        println!("\n   Total (avg, rounded up): {}", total.to_string().bright_white());
    }

    match report.grade {
        Some(grade) => println!(
            "   Grade:                   {}",
            grade.to_string().bright_yellow().bold()
        ),
        None => println!("   Grade:                   {}", "None".yellow()),
    }
}

/// Print the end of a puzzle-word game
pub fn print_game_outcome(outcome: &GameOutcome) {
    println!(
        "\nSolved with '{}' in {} {}",
        outcome.word.bright_white().bold(),
        outcome.attempts.to_string().bright_cyan().bold(),
        if outcome.attempts == 1 {
            "attempt"
        } else {
            "attempts"
        }
    );
}

/// Print every demonstration case with its verdict
pub fn print_demo(cases: &[DemoCase]) {
    let mut section = "";

    for case in cases {
        if case.section != section {
            section = case.section;
            println!("\n{}", "═".repeat(60).cyan());
            println!(" {} ", section.to_uppercase().bright_cyan().bold());
            println!("{}", "═".repeat(60).cyan());
        }

        let mark = if case.passed {
            "✅".to_string()
        } else {
            "❌".red().bold().to_string()
        };

        println!("\n{mark} Data: {}", case.data);
        println!("   Additional arguments: {}", case.arguments);
        println!("   Result:   {}", case.result.bright_white());
        println!("   Expected: {}", case.expected);
        println!("   Details:  {}", case.details.bright_black());
    }

    let passed = cases.iter().filter(|c| c.passed).count();
    let summary = format!("{passed}/{} cases as expected", cases.len());
    println!();
    if passed == cases.len() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red().bold());
    }
}
