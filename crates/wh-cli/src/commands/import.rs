use std::path::Path;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use colored::Colorize;
use miette::Diagnostic;
use wh_core::{ParseError, parse_import};
use wh_store::read_payload;

pub fn run(data_dir: &Path, file: Option<&Path>, text: Option<&str>) -> Result<(), String> {
    let (raw, origin) = match (text, file) {
        (Some(text), _) => (text.to_string(), "--text".to_string()),
        (None, Some(path)) => (
            read_payload(path).map_err(|e| e.to_string())?,
            path.display().to_string(),
        ),
        (None, None) => (
            read_payload(Path::new("-")).map_err(|e| e.to_string())?,
            "-".to_string(),
        ),
    };

    let imported = parse_import(&raw).map_err(|e| {
        eprint!("{}", render_parse_error(&e, raw.trim(), &origin));
        e.to_string()
    })?;

    let mut vault = super::open_vault(data_dir);
    let written = vault
        .save_wallet(&imported.wallet)
        .map_err(|e| format!("imported but not saved: {e}"))?;
    println!("  {} {}", "Imported.".green(), written.to_string().bold());

    if imported.auto_apply.is_some() {
        let settings = imported.merged_settings(vault.load_settings());
        vault
            .save_settings(&settings)
            .map_err(|e| format!("settings not saved: {e}"))?;
        println!("  Auto-apply: {}", settings.auto_apply_label());
    }

    tracing::info!(from = %origin, total = written.total(), "imported wallet");
    Ok(())
}

/// Point at the syntax error with ariadne, then print the help line.
/// The help line is printed even when the error has no position.
fn render_parse_error(err: &ParseError, source: &str, origin: &str) -> String {
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    let help_line = format!("  {} {}\n", "help:".dimmed(), help);

    match err
        .offset_in(source)
        .and_then(|offset| render_report(err, source, origin, offset))
    {
        Some(report) => report + &help_line,
        None => help_line,
    }
}

/// Spans are byte offsets, as serde_json reports them.
fn render_report(err: &ParseError, source: &str, origin: &str, offset: usize) -> Option<String> {
    let start = (0..=offset.min(source.len()))
        .rev()
        .find(|&i| source.is_char_boundary(i))
        .unwrap_or(0);
    let end = source[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());

    let message = match err {
        ParseError::Syntax { message, .. } => message.clone(),
        other => other.to_string(),
    };
    let mut output = Vec::new();
    Report::build(ReportKind::Error, (origin, start..end))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message("invalid JSON")
        .with_label(
            Label::new((origin, start..end))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .write((origin, Source::from(source)), &mut output)
        .ok()?;

    String::from_utf8(output).ok()
}
