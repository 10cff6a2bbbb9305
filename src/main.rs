use std::path::PathBuf;

use athena_study::{observability, Config, Feed, Quiz};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (needs `log_file` in the configuration)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take a quiz
    Quiz {
        /// JSON file to load the questions from
        #[arg(short, long)]
        questions: PathBuf,
    },

    /// Browse a video snippet feed
    Feed {
        /// JSON file to load the feed items from
        #[arg(short, long)]
        items: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> athena_study::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let _log_guard = observability::init_tracing(&config, cli.verbose);

    match cli.command {
        Commands::Quiz { questions } => Quiz::from_json(questions, &config)?.run(),
        Commands::Feed { items } => Feed::from_json(items, &config)?.run(),
    }
}
