//! Wordle Daily - CLI
//!
//! Play the daily or a random five-letter puzzle in the terminal, with hints,
//! saved daily progress and lifetime stats.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_daily::{
    commands::{run_evaluation, run_play, run_stats},
    daily::UtcClock,
    definitions::{DefinitionFile, DefinitionSource, NoDefinitions},
    output::print_evaluation_result,
    session::{Mode, Session},
    stats::StatsTracker,
    store::FileStore,
    wordlists::{SOLUTIONS, VALID_GUESSES, WordPools, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily five-letter word puzzle with hints, saved progress and stats",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved progress and stats
    #[arg(short, long, global = true, default_value = ".wordle_daily")]
    data_dir: PathBuf,

    /// Solution list file (default: embedded list)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Extra valid-guess list file (default: embedded list)
    #[arg(long, global = true)]
    valid: Option<PathBuf>,

    /// Tab-separated `WORD<TAB>definition` file shown after a win
    #[arg(long, global = true)]
    definitions: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); `RUST_LOG` overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Puzzle to start with
        #[arg(short, long, value_enum, default_value = "daily")]
        mode: ModeArg,

        /// Seed for random puzzles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show lifetime stats and today's daily status
    Stats,

    /// Play every solution with the hint engine and report the distribution
    Evaluate {
        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Daily,
    Random,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Daily => Self::Daily,
            ModeArg::Random => Self::Random,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Build the word pools from the list flags, falling back to the embedded lists
fn load_pools(solutions: Option<&Path>, valid: Option<&Path>) -> Result<WordPools> {
    let solutions = match solutions {
        Some(path) => load_from_file(path)
            .with_context(|| format!("reading solution list {}", path.display()))?,
        None => words_from_slice(SOLUTIONS),
    };
    let valid = match valid {
        Some(path) => load_from_file(path)
            .with_context(|| format!("reading valid-guess list {}", path.display()))?,
        None => words_from_slice(VALID_GUESSES),
    };
    Ok(WordPools::new(solutions, valid))
}

fn load_definitions(path: Option<&Path>) -> Result<Arc<dyn DefinitionSource + Send + Sync>> {
    match path {
        Some(path) => {
            let definitions = DefinitionFile::load(path)
                .with_context(|| format!("reading definitions {}", path.display()))?;
            tracing::debug!(count = definitions.len(), "loaded definitions");
            Ok(Arc::new(definitions))
        }
        None => Ok(Arc::new(NoDefinitions)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let pools = load_pools(cli.solutions.as_deref(), cli.valid.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        mode: ModeArg::Daily,
        seed: None,
    });

    match command {
        Commands::Play { mode, seed } => {
            let store = FileStore::open(&cli.data_dir)?;
            let definitions = load_definitions(cli.definitions.as_deref())?;
            let stats = StatsTracker::load(&store);
            let mut session = Session::new(&pools, stats, store, UtcClock);
            match seed {
                Some(seed) => run_play(
                    &mut session,
                    mode.into(),
                    definitions,
                    &mut StdRng::seed_from_u64(seed),
                ),
                None => run_play(&mut session, mode.into(), definitions, &mut rand::rng()),
            }
        }
        Commands::Stats => {
            let store = FileStore::open(&cli.data_dir)?;
            run_stats(&store, &UtcClock, &pools);
            Ok(())
        }
        Commands::Evaluate { limit } => {
            pools.check()?;
            let result = run_evaluation(&pools, limit);
            print_evaluation_result(&result);
            Ok(())
        }
    }
}
