use std::path::Path;

use colored::Colorize;

pub fn run(data_dir: &Path, auto_apply: Option<&str>) -> Result<(), String> {
    let mut vault = super::open_vault(data_dir);
    let mut settings = vault.load_settings();

    if let Some(value) = auto_apply {
        let flag = parse_switch(value)
            .ok_or_else(|| format!("invalid value for --auto-apply: \"{value}\". Use: on, off"))?;
        settings = settings.with_auto_apply(flag);
        vault
            .save_settings(&settings)
            .map_err(|e| format!("could not save settings: {e}"))?;
        println!("  {}", "Saved.".green());
    }

    let label = settings.auto_apply_label();
    let label = if settings.auto_apply {
        label.green()
    } else {
        label.yellow()
    };
    println!("  Auto-apply: {label}");

    Ok(())
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
