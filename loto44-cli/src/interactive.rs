use std::io::{self, Write};

use anyhow::{Context, Result};

use loto44_engine::store::ResultStore;

pub fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    Ok(input.trim().to_string())
}

/// Accepte « 05-07-23-38-41 » comme « 5 7 23 38 41 ».
fn parse_regular(input: &str) -> Option<Vec<u8>> {
    let nums: Result<Vec<u8>, _> = input
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u8>())
        .collect();
    nums.ok()
}

/// Saisie de `weeks` tirages historiques. Chaque semaine boucle jusqu'à
/// obtenir un tirage que le magasin accepte ; un rejet n'interrompt jamais
/// la session.
pub fn collect_draws(store: &mut ResultStore, weeks: u32) -> Result<()> {
    for week in 1..=weeks {
        println!("\nSemaine {} :", week);
        loop {
            let raw = prompt("5 numéros réguliers (ex: 05-07-23-38-41) : ")?;
            let Some(regular) = parse_regular(&raw) else {
                println!("Saisie illisible. Réessayez.");
                continue;
            };

            let hot_raw = prompt("Numéro chaud (1-16) : ")?;
            let Ok(hot) = hot_raw.parse::<u8>() else {
                println!("Numéro chaud illisible. Réessayez.");
                continue;
            };

            match store.append(&regular, hot) {
                Ok(()) => {
                    println!("Tirage enregistré.");
                    break;
                }
                Err(e) => println!("Erreur : {e}. Réessayez."),
            }
        }
    }
    Ok(())
}
