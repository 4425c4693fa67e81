use comfy_table::{ContentArrangement, Table};

use arcana_core::ZodiacSign;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Sign", "Vibe"]);

    for sign in ZodiacSign::ALL {
        table.add_row(vec![sign.name(), sign.affirmation()]);
    }

    println!("{table}");
    Ok(())
}
