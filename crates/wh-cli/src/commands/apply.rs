use std::path::Path;

use colored::Colorize;
use wh_core::{Mode, Money, apply_operation};

pub fn run(data_dir: &Path, mode: &str, change: &Money) -> Result<(), String> {
    let mode = Mode::parse(mode)
        .ok_or_else(|| format!("unknown operation: \"{mode}\". Use: add, spend"))?;

    let mut vault = super::open_vault(data_dir);
    let settings = vault.load_settings();
    let wallet = vault
        .load_wallet_or_default()
        .map_err(|e| format!("cannot load wallet: {e}"))?;

    let applied = apply_operation(&wallet, change, mode).map_err(|e| {
        tracing::info!(%mode, error = %e, "operation rejected");
        e.to_string()
    })?;

    println!("  {} {}", applied.mode.past_tense(), applied.change.to_string().bold());
    println!("  Before: {}", applied.before);
    println!("  After:  {}", applied.after.to_string().bold());

    match applied.commit(&settings) {
        Some(after) => {
            vault
                .save_wallet(&after)
                .map_err(|e| format!("wallet updated but not saved: {e}"))?;
            tracing::info!(%mode, total = after.total(), "wallet committed");
            println!("  {}", "Wallet saved.".green());
        }
        None => {
            println!(
                "  {}",
                "Auto-apply is OFF: the wallet was not changed.".yellow()
            );
        }
    }

    Ok(())
}
