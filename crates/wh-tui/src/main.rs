//! Standalone TUI binary for the WFRP helper.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use wh_store::{StoreConfig, Vault};
use wh_tui::tabs::TabId;

#[derive(Parser)]
#[command(
    name = "wh-tui",
    about = "Terminal UI for the WFRP session helper",
    version
)]
struct Args {
    /// Directory holding the saved wallet and settings
    #[arg(long, env = "WH_DATA_DIR", default_value = wh_store::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Start on a specific tab (wallet, xp, states)
    #[arg(long, default_value = "wallet")]
    tab: String,
}

fn main() {
    let args = Args::parse();

    let Some(tab) = TabId::from_name(&args.tab) else {
        eprintln!("error: unknown tab '{}' (expected wallet, xp or states)", args.tab);
        process::exit(1);
    };

    let vault = Vault::open(StoreConfig::default().with_data_dir(args.data_dir));
    let app = wh_tui::app::TuiApp::new(vault, tab);

    if let Err(e) = wh_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
