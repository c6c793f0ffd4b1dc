use comfy_table::{ContentArrangement, Table};
use wh_reference::AdvanceKind;
use wh_reference::xp;

pub fn run(kind: Option<&str>, from: Option<u32>, to: Option<u32>) -> Result<(), String> {
    let kinds = match kind {
        Some(name) => vec![AdvanceKind::parse(name).ok_or_else(|| {
            format!("unknown advance kind: \"{name}\". Use: characteristic, skill")
        })?],
        None => vec![AdvanceKind::Characteristic, AdvanceKind::Skill],
    };

    match (from, to) {
        (Some(from), Some(to)) => {
            for kind in kinds {
                let cost = xp::cost_between(kind, from, to);
                println!("  {kind} {from} -> {to}: {cost} XP");
            }
        }
        (Some(from), None) => {
            let band = xp::band_for(from);
            for kind in kinds {
                println!(
                    "  next {kind} after {from} advances: {} XP (band {})",
                    xp::cost_of_next(kind, from),
                    band.label
                );
            }
        }
        (None, Some(_)) => return Err("--to needs --from".into()),
        (None, None) => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            let mut header = vec!["Advances".to_string()];
            header.extend(kinds.iter().map(|k| capitalize(&k.to_string())));
            table.set_header(header);
            for band in xp::bands() {
                let mut row = vec![band.label.to_string()];
                row.extend(kinds.iter().map(|k| band.cost(*k).to_string()));
                table.add_row(row);
            }
            println!("{table}");
        }
    }

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
