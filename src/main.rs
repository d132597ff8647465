//! Mastermind - CLI
//!
//! Play Mastermind against the computer, or watch the computer break codes.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mastermind::{
    commands::{PlayConfig, SolveConfig, run_benchmark, run_play, select_targets, solve_code},
    game::{GameConfig, PlayerKind},
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with human and computer players",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Computer code-breaker strategy: consistent (default) or minimax
    #[arg(short, long, global = true, default_value = "consistent")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default: you break the computer's code)
    Play {
        /// Who picks the secret code
        #[arg(short, long, value_enum, default_value_t = Side::Computer)]
        maker: Side,

        /// Who guesses the code
        #[arg(short, long, value_enum, default_value_t = Side::Human)]
        breaker: Side,

        /// Seed for the computer's random secret
        #[arg(long)]
        seed: Option<u64>,

        /// Keep the secret on screen after a human enters it
        #[arg(long)]
        no_clear: bool,
    },

    /// Let the computer break a specific code
    Solve {
        /// The secret code, e.g. 3456
        code: String,

        /// Show candidate counts for every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the computer code-breaker against many secrets
    Benchmark {
        /// Only test the first N codes
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test N randomly chosen codes instead
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for the random sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Human,
    Computer,
}

impl From<Side> for PlayerKind {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Self::Human,
            Side::Computer => Self::Computer,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        maker: Side::Computer,
        breaker: Side::Human,
        seed: None,
        no_clear: false,
    });

    match command {
        Commands::Play {
            maker,
            breaker,
            seed,
            no_clear,
        } => run_play_command(&cli.strategy, maker, breaker, seed, no_clear),
        Commands::Solve { code, verbose } => run_solve_command(&cli.strategy, &code, verbose),
        Commands::Benchmark {
            limit,
            sample,
            seed,
        } => {
            run_benchmark_command(&cli.strategy, limit, sample, seed);
            Ok(())
        }
    }
}

fn run_play_command(
    strategy_name: &str,
    maker: Side,
    breaker: Side,
    seed: Option<u64>,
    no_clear: bool,
) -> Result<()> {
    let config = PlayConfig {
        code_maker: maker.into(),
        code_breaker: breaker.into(),
        strategy: strategy_name.to_string(),
        seed,
        clear_screen: !no_clear,
        game: GameConfig::default(),
    };

    let outcome = run_play(&config)?;
    log::info!(
        "{} won after {} guess(es)",
        outcome.winner,
        outcome.guesses_used()
    );
    Ok(())
}

fn run_solve_command(strategy_name: &str, code: &str, verbose: bool) -> Result<()> {
    let config = SolveConfig::new(code.to_string());
    let result =
        solve_code(config, StrategyType::from_name(strategy_name)).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    limit: Option<usize>,
    sample: Option<usize>,
    seed: Option<u64>,
) {
    let mut rng = mastermind::commands::play::make_rng(seed);
    let targets = select_targets(limit, sample, &mut rng);

    let strategy = StrategyType::from_name(strategy_name);
    println!(
        "Running {} benchmark on {} codes...",
        strategy.name(),
        targets.len()
    );

    let result = run_benchmark(&targets, || strategy.clone(), true);
    print_benchmark_result(&result, strategy.name());
}
