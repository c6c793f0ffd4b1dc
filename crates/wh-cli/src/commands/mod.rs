pub mod apply;
pub mod convert;
pub mod export;
pub mod import;
pub mod reset;
pub mod save;
pub mod settings;
pub mod state;
pub mod states;
pub mod tui;
pub mod wallet;
pub mod xp;

use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use wh_core::Money;
use wh_store::{FileStore, StoreConfig, Vault};

/// Open the file-backed vault under `data_dir`.
fn open_vault(data_dir: &Path) -> Vault<FileStore> {
    tracing::debug!(dir = %data_dir.display(), "opening vault");
    Vault::open(StoreConfig::default().with_data_dir(data_dir))
}

/// One row per denomination plus the value in pennies.
fn money_table(money: &Money) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Denomination", "Amount"]);
    table.add_row(vec!["Pennies (P)".to_string(), money.pennies.to_string()]);
    table.add_row(vec!["Shillings (S)".to_string(), money.shillings.to_string()]);
    table.add_row(vec!["Gold crowns (GC)".to_string(), money.crowns.to_string()]);
    table
}
