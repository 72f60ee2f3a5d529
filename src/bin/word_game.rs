use clap::{Parser, ValueEnum};
use probing_hashtable::{
    log_error, GameConfig, HashAlgorithm, ProbeStrategyType, ProbeTableConfig, SecondaryStep,
    WordGame, DEFAULT_TABLE_SIZE,
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(name = "word_game", about = "Word scoring game backed by a probing hash table", version)]
struct Cli {
    /// Game files, each played with a fresh table
    files: Vec<PathBuf>,
    /// Entries listed in the report; defaults to the number of new words
    #[arg(long = "dump-limit")]
    dump_limit: Option<usize>,
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Ahash)]
    algorithm: AlgorithmArg,
    #[arg(long, default_value_t = DEFAULT_TABLE_SIZE)]
    capacity: usize,
    /// Tie the secondary hash prime to the current table length
    #[arg(long = "adaptive-step")]
    adaptive_step: bool,
    /// Probe with step 1 instead of double hashing
    #[arg(long)]
    linear: bool,
    /// Print table counters in Prometheus text format after each game
    #[arg(long)]
    metrics: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum AlgorithmArg {
    Ahash,
    Xxhash,
    Default,
}

impl From<AlgorithmArg> for HashAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Ahash => HashAlgorithm::AHash,
            AlgorithmArg::Xxhash => HashAlgorithm::XxHash,
            AlgorithmArg::Default => HashAlgorithm::Default,
        }
    }
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            dump_limit: self.dump_limit,
            table: ProbeTableConfig {
                initial_capacity: self.capacity,
                hash_algorithm: self.algorithm.into(),
                secondary_step: if self.adaptive_step {
                    SecondaryStep::Adaptive
                } else {
                    SecondaryStep::Fixed
                },
                strategy: if self.linear {
                    ProbeStrategyType::LinearProbe
                } else {
                    ProbeStrategyType::DoubleHash
                },
                ..ProbeTableConfig::default()
            },
            ..GameConfig::default()
        }
    }

    fn game_files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            (0..5).map(|i| PathBuf::from(format!("game{}.txt", i))).collect()
        } else {
            self.files.clone()
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut failed = false;
    for path in cli.game_files() {
        let result = WordGame::with_config(cli.game_config())
            .and_then(|mut game| game.play_file(&path).map(|report| (game, report)));

        match result {
            Ok((game, report)) => {
                println!();
                println!("Playing {}", report.name);
                print!("{}", report);
                if cli.metrics {
                    print!("{}", game.table().export_prometheus());
                }
            }
            Err(err) => {
                log_error!("game {} failed: {}", path.display(), err);
                eprintln!("{}: {}", path.display(), err);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
