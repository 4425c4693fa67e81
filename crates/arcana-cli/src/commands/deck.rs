use comfy_table::{ContentArrangement, Table};

use arcana_core::DECK;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Id", "Name", "Keywords", "Meaning"]);

    for (i, card) in DECK.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            card.id.to_string(),
            card.name.to_string(),
            card.keywords.to_string(),
            card.meaning.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", DECK.len());
    Ok(())
}
