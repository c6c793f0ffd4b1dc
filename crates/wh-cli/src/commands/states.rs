use comfy_table::{ContentArrangement, Table};
use wh_reference::SortMode;
use wh_reference::states;

pub fn run(query: Option<&str>, sort: &str) -> Result<(), String> {
    let mode = SortMode::parse(sort)
        .ok_or_else(|| format!("unknown sort: \"{sort}\". Use: name, name-desc, tag"))?;

    let results = states::search(query.unwrap_or(""), mode);

    if results.is_empty() {
        println!("  No states found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Tag", "Summary"]);

    for condition in &results {
        let summary = if condition.text.chars().count() > 60 {
            let cut: String = condition.text.chars().take(57).collect();
            format!("{cut}...")
        } else {
            condition.text.to_string()
        };
        table.add_row(vec![condition.name, condition.tag, summary.as_str()]);
    }

    println!("{table}");
    println!();
    println!("  {}", states::visible_count(results.len()));

    Ok(())
}
