mod commands;
mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shiftgrid",
    version,
    about = "Extract shift rosters from schedule tables and report per-worker statistics"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Calendar context and locale profile shared by the parsing commands.
#[derive(Args)]
pub struct ParseArgs {
    /// Year for day-number calendars (default: current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month(s) 1-12 for day-number calendars, comma separated (default: current month)
    #[arg(short, long, value_delimiter = ',', value_name = "MONTH")]
    pub months: Vec<u32>,

    /// Predefined profile: default, es, en
    #[arg(short, long, default_value = "default")]
    pub profile: String,

    /// Custom JSON profile file (overrides --profile)
    #[arg(long, value_name = "FILE")]
    pub profile_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract shift records from a schedule (PDF, spreadsheet, CSV or JSON grid)
    Parse {
        /// Path to the schedule document
        input_file: PathBuf,

        #[command(flatten)]
        args: ParseArgs,

        /// Output format: table (default), json or csv
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Extract shifts and report per-worker statistics
    Analyze {
        /// Path to the schedule document
        input_file: PathBuf,

        #[command(flatten)]
        args: ParseArgs,

        /// Merge worker spellings: --alias "LUIS H=LUIS" (case-insensitive match)
        #[arg(short, long = "alias", value_name = "FROM=TO")]
        alias: Vec<String>,

        /// Output format: table (default), json or csv
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Report the day-marker structure of a document's text
    Sniff {
        /// Path to the schedule document
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show the tables read from a document before any heuristics run
    Inspect {
        /// Path to the schedule document
        input_file: PathBuf,
    },
    /// Manage and inspect locale profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List predefined profiles
    List,
    /// Print a predefined profile as JSON
    Show {
        /// Preset name (e.g., "es")
        name: String,
    },
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("shiftgrid_core={default_level},shiftgrid={default_level}"))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            input_file,
            args,
            output,
            out,
        } => commands::parse::run(input_file, &args, &output, out),
        Commands::Analyze {
            input_file,
            args,
            alias,
            output,
            out,
        } => commands::analyze::run(input_file, &args, &alias, &output, out),
        Commands::Sniff { input_file, output } => commands::inspect::sniff(&input_file, &output),
        Commands::Inspect { input_file } => commands::inspect::tables(&input_file),
        Commands::Profile { action } => match action {
            ProfileAction::List => commands::profile::list(),
            ProfileAction::Show { name } => commands::profile::show(&name),
            ProfileAction::Validate { file } => commands::profile::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
