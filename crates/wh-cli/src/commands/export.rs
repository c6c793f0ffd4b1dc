use std::path::Path;

use wh_core::format_export;
use wh_store::write_payload;

pub fn run(data_dir: &Path, output: Option<&Path>) -> Result<(), String> {
    let vault = super::open_vault(data_dir);
    let wallet = vault
        .load_wallet_or_default()
        .map_err(|e| format!("cannot load wallet: {e}"))?;
    let settings = vault.load_settings();

    let content =
        format_export(&wallet, &settings).map_err(|e| format!("cannot encode export: {e}"))?;

    if let Some(path) = output {
        write_payload(path, &content).map_err(|e| e.to_string())?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
