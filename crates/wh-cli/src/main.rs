//! CLI frontend for the WFRP session helper.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wh",
    about = "WFRP session helper: wallet, advance costs and conditions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the saved wallet and settings
    #[arg(long, global = true, env = "WH_DATA_DIR", default_value = wh_store::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// More log output on stderr (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Pennies, shillings and crowns as typed; anything unreadable counts as zero.
#[derive(clap::Args)]
struct AmountArgs {
    /// Pennies
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pennies: String,

    /// Shillings
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    shillings: String,

    /// Gold crowns
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    crowns: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stored wallet
    Wallet,

    /// Add money to or spend it from the stored wallet
    Apply {
        /// Operation: add or spend
        mode: String,

        #[command(flatten)]
        amount: AmountArgs,
    },

    /// Store an amount as the wallet
    Save {
        #[command(flatten)]
        amount: AmountArgs,
    },

    /// Empty the wallet
    Reset,

    /// Normalize an amount and show its value in pennies
    Convert {
        #[command(flatten)]
        amount: AmountArgs,
    },

    /// Print or write the wallet and settings as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a wallet from JSON
    Import {
        /// File to read, `-` for stdin (default: stdin)
        file: Option<PathBuf>,

        /// JSON given inline instead of a file
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
    },

    /// Show or change settings
    Settings {
        /// Commit applied operations to the wallet: on or off
        #[arg(long)]
        auto_apply: Option<String>,
    },

    /// Show advance costs or compute the cost of a range of advances
    Xp {
        /// Advance kind: characteristic or skill (default: both)
        #[arg(short, long)]
        kind: Option<String>,

        /// Advances already taken
        #[arg(long)]
        from: Option<u32>,

        /// Advances to reach
        #[arg(long)]
        to: Option<u32>,
    },

    /// List conditions and psychology states
    States {
        /// Filter by name or tag
        query: Option<String>,

        /// Sort order: name, name-desc or tag
        #[arg(long, default_value = "name")]
        sort: String,
    },

    /// Show one condition
    State {
        /// Condition name (case-insensitive)
        name: String,
    },

    /// Launch the interactive terminal UI
    Tui {
        /// Start on a specific tab (wallet, xp, states)
        #[arg(long, default_value = "wallet")]
        tab: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it gets no log output.
    if !matches!(cli.command, Commands::Tui { .. }) {
        init_logging(cli.verbose);
    }

    let data_dir = cli.data_dir.as_path();
    let result = match cli.command {
        Commands::Wallet => commands::wallet::run(data_dir),
        Commands::Apply { mode, amount } => commands::apply::run(data_dir, &mode, &amount.into()),
        Commands::Save { amount } => commands::save::run(data_dir, &amount.into()),
        Commands::Reset => commands::reset::run(data_dir),
        Commands::Convert { amount } => commands::convert::run(&amount.into()),
        Commands::Export { output } => commands::export::run(data_dir, output.as_deref()),
        Commands::Import { file, text } => {
            commands::import::run(data_dir, file.as_deref(), text.as_deref())
        }
        Commands::Settings { auto_apply } => {
            commands::settings::run(data_dir, auto_apply.as_deref())
        }
        Commands::Xp { kind, from, to } => commands::xp::run(kind.as_deref(), from, to),
        Commands::States { query, sort } => commands::states::run(query.as_deref(), &sort),
        Commands::State { name } => commands::state::run(&name),
        Commands::Tui { tab } => commands::tui::run(data_dir, &tab),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

impl From<AmountArgs> for wh_core::Money {
    fn from(args: AmountArgs) -> Self {
        wh_core::Money::from_fields(&args.pennies, &args.shillings, &args.crowns)
    }
}

/// Log to stderr. `WH_LOG` takes a full filter; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("WH_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
