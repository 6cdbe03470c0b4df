//! Competition drills - CLI
//!
//! Second-largest extraction, exam grading, and the puzzle-word game from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use competition::{
    commands::{
        GradeConfig, RankConfig, collect_and_grade, run_demo, run_grade, run_puzzle, run_rank,
    },
    error::InputError,
    interactive::Prompter,
    output::{print_demo, print_game_outcome, print_grade_report, print_rank_result},
    puzzle::PuzzleConfig,
    ranking::StrategyType,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "competition",
    about = "Second-largest extraction, exam grading, and a puzzle-word game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Second-largest integer of a JSON array
    Rank {
        /// JSON array, e.g. '["xd", 12, 5, 34, null]'
        input: String,

        /// Strategy: merge-sort (default) or builtin-sort
        #[arg(short, long, default_value = "merge-sort")]
        strategy: String,

        /// Run every strategy and check they agree
        #[arg(short, long)]
        compare: bool,
    },

    /// Grade an exam paper from five question marks
    Grade {
        /// Five marks (0-100); omit to be asked for each one
        #[arg(allow_negative_numbers = true)]
        marks: Vec<i64>,

        /// Treat grade range bounds as inclusive
        #[arg(short, long)]
        inclusive: bool,
    },

    /// Play the puzzle-word game
    Puzzle {
        /// Require matched letters to appear in the order shown
        #[arg(short, long)]
        affirm_order: bool,

        /// Seed for reproducible letters
        #[arg(long)]
        seed: Option<u64>,

        /// Number of letters to draw (2-26)
        #[arg(
            short = 'n',
            long,
            default_value = "5",
            value_parser = clap::value_parser!(u8).range(2..=26)
        )]
        letters: u8,
    },

    /// Run the built-in demonstration cases (default)
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Default to Demo mode if no command given
    let command = cli.command.unwrap_or(Commands::Demo);

    match command {
        Commands::Rank {
            input,
            strategy,
            compare,
        } => run_rank_command(input, &strategy, compare, cli.verbose),
        Commands::Grade { marks, inclusive } => run_grade_command(marks, inclusive),
        Commands::Puzzle {
            affirm_order,
            seed,
            letters,
        } => run_puzzle_command(affirm_order, seed, letters),
        Commands::Demo => {
            print_demo(&run_demo());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("competition=debug")
    } else {
        EnvFilter::new("competition=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run_rank_command(
    input: String,
    strategy_name: &str,
    compare: bool,
    verbose: bool,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name)
        .ok_or_else(|| InputError::UnknownStrategy(strategy_name.to_string()))?;

    let config = RankConfig {
        input,
        strategy,
        compare,
    };
    let result = run_rank(&config)?;

    print_rank_result(&result, verbose);
    Ok(())
}

fn run_grade_command(marks: Vec<i64>, inclusive: bool) -> Result<()> {
    let config = GradeConfig::new(marks, inclusive);

    let report = if config.is_interactive() {
        collect_and_grade(&mut Prompter::stdio(), config.inclusive)
            .context("failed to read marks")?
    } else {
        run_grade(&config)?
    };

    print_grade_report(&report);
    Ok(())
}

fn run_puzzle_command(affirm_order: bool, seed: Option<u64>, letters: u8) -> Result<()> {
    let config = PuzzleConfig {
        letter_count: usize::from(letters),
        ..PuzzleConfig::new(affirm_order)
    };
    config.validate()?;

    println!(
        "Puzzle-word game (letter order {})\n",
        if affirm_order { "enforced" } else { "ignored" }
    );

    let outcome = run_puzzle(config, seed).context("puzzle game did not finish")?;
    print_game_outcome(&outcome);
    Ok(())
}
