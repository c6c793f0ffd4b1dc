use std::path::Path;

use colored::Colorize;
use wh_core::Money;

pub fn run(data_dir: &Path) -> Result<(), String> {
    let mut vault = super::open_vault(data_dir);
    vault
        .save_wallet(&Money::ZERO)
        .map_err(|e| format!("could not save: {e}"))?;

    println!("  {} {}", "Reset.".green(), Money::ZERO);
    Ok(())
}
