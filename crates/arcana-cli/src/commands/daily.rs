use colored::Colorize;

use arcana_core::DECK;
use arcana_core::daily::{daily_hash, daily_index, date_key};

pub fn run(date: Option<&str>) -> Result<(), String> {
    let today = super::calendar_for(date)
        .map_err(|e| e.to_string())?
        .today();

    let key = date_key(today);
    let hash = daily_hash(&key);
    let index = daily_index(today, DECK.len());
    let card = &DECK[index];

    println!("  Date:  {key}");
    println!("  Hash:  {hash}");
    println!("  Index: {index} of {}", DECK.len());
    println!();
    println!("  {}", card.name.bold());
    println!("  {}", card.keywords.dimmed());
    println!("  {}", card.meaning);

    Ok(())
}
