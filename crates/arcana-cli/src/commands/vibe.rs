use colored::Colorize;

use arcana_core::affirmation_for;

pub fn run(sign: &str) -> Result<(), String> {
    let name = sign.trim();
    println!("  {}", format!("{name} vibe").to_uppercase().magenta().bold());
    println!("  {}", affirmation_for(name));
    Ok(())
}
