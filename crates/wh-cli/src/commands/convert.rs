use colored::Colorize;
use wh_core::Money;

pub fn run(amount: &Money) -> Result<(), String> {
    let normalized = amount.normalized();

    println!("{}", super::money_table(&normalized));
    println!();
    println!("  {}  ({} P)", normalized.to_string().bold(), normalized.total());

    Ok(())
}
