use colored::Colorize;
use wh_reference::states;

pub fn run(name: &str) -> Result<(), String> {
    let Some(condition) = states::find(name) else {
        return Err(match states::suggest(name) {
            Some(close) => format!("state not found: \"{name}\". Did you mean \"{}\"?", close.name),
            None => format!("state not found: \"{name}\""),
        });
    };

    println!("  {} [{}]", condition.name.bold(), condition.tag.dimmed());
    println!();
    println!("  {}", condition.text);

    Ok(())
}
