use std::path::Path;

use colored::Colorize;
use wh_core::Money;

pub fn run(data_dir: &Path, wallet: &Money) -> Result<(), String> {
    let mut vault = super::open_vault(data_dir);
    let written = vault
        .save_wallet(wallet)
        .map_err(|e| format!("could not save: {e}"))?;

    println!("  {} {}", "Wallet saved:".green(), written);
    if written != *wallet {
        println!("  {}", format!("(entered as {wallet})").dimmed());
    }

    Ok(())
}
