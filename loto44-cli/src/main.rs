mod display;
mod interactive;

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;

use loto44_engine::analysis::{chaos, frequency, patterns, rotor};
use loto44_engine::sampler;
use loto44_engine::store::ResultStore;

#[derive(Parser)]
#[command(name = "loto44", about = "Analyse et prédiction de tirages Loto 44")]
struct Cli {
    /// Nombre de tirages historiques à saisir
    #[arg(short, long, default_value = "3")]
    weeks: u32,

    /// Nombre de grilles à prédire
    #[arg(short, long, default_value = "3")]
    count: usize,

    /// Seed pour la reproductibilité (défaut : date du jour)
    #[arg(long)]
    seed: Option<u64>,
}

/// Seed déterministe basé sur la date du jour (YYYYMMDD).
fn date_seed() -> u64 {
    let today = chrono::Local::now().date_naive();
    let y = today.year() as u64;
    let m = today.month() as u64;
    let d = today.day() as u64;
    y * 10_000 + m * 100 + d
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("\n===== Analyse et prédiction Loto 44 =====");

    let mut store = ResultStore::new();
    interactive::collect_draws(&mut store, cli.weeks)?;

    println!("\n===== Analyse des données =====");

    let table = frequency::compute(&store);
    display::display_frequency(&table);

    match patterns::compute(&store) {
        Ok(sets) => display::display_patterns(&sets),
        Err(e) => println!("Motifs : {e}"),
    }

    match chaos::compute(&store) {
        Ok(signal) => display::display_chaos(&signal),
        Err(e) => println!("Analyse de chaos : {e}"),
    }

    match rotor::compute(&store) {
        Ok(analysis) => display::display_rotor(&analysis, store.all()),
        Err(e) => println!("Analyse rotor : {e}"),
    }

    println!("\n===== Prédictions pour la prochaine semaine =====");
    let seed = cli.seed.unwrap_or_else(date_seed);
    match sampler::predict(&store, cli.count, Some(seed)) {
        Ok(candidates) => display::display_predictions(&candidates, seed),
        Err(e) => println!("Prédictions : {e}"),
    }

    let answer = interactive::prompt("\nVisualiser les fréquences ? (o/n) : ")?;
    if answer.to_lowercase() == "o" {
        display::display_frequency_chart(&table);
    }

    println!("\n===== Fin de l'analyse =====");
    Ok(())
}
