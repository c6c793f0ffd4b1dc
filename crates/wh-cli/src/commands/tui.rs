use std::path::Path;

use wh_tui::app::TuiApp;
use wh_tui::tabs::TabId;

pub fn run(data_dir: &Path, tab: &str) -> Result<(), String> {
    let tab = TabId::from_name(tab)
        .ok_or_else(|| format!("unknown tab: \"{tab}\". Use: wallet, xp, states"))?;
    let vault = super::open_vault(data_dir);
    wh_tui::terminal::run(TuiApp::new(vault, tab))
}
