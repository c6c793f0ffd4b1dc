use std::path::Path;

use colored::Colorize;

pub fn run(data_dir: &Path) -> Result<(), String> {
    let vault = super::open_vault(data_dir);
    let stored = vault
        .load_wallet()
        .map_err(|e| format!("cannot load wallet: {e}"))?;

    let wallet = match stored {
        Some(money) => money,
        None => {
            println!("  {}", "No saved wallet, showing the starter purse.".dimmed());
            vault.config().starter_purse.normalized()
        }
    };

    println!("{}", super::money_table(&wallet));
    println!();
    println!("  {}  ({} P)", wallet.to_string().bold(), wallet.total());

    Ok(())
}
