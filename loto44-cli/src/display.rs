use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use textplots::Plot;

use loto44_engine::analysis::chaos::ChaosSignal;
use loto44_engine::analysis::frequency::FrequencyTable;
use loto44_engine::analysis::patterns::{
    self, BUCKET_COUNT, PatternSet, bucket_bounds,
};
use loto44_engine::analysis::rotor::RotorAnalysis;
use loto44_engine::models::{Draw, MAX_REGULAR, PredictionCandidate};

fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn display_frequency(table: &FrequencyTable) {
    println!("\n── Numéros réguliers les plus fréquents (top 10) ──");
    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence"]);
    for n in table.most_common_regular(10) {
        out.add_row(vec![
            format!("{:02}", n),
            table.regular[n as usize].to_string(),
        ]);
    }
    println!("{out}");

    println!("\n── Numéros chauds ──");
    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence"]);
    for n in table.most_common_hot(usize::MAX) {
        out.add_row(vec![format!("{:02}", n), table.hot[n as usize].to_string()]);
    }
    println!("{out}");
}

pub fn display_patterns(sets: &[PatternSet]) {
    println!("\n── Motifs structurels ──");

    let consecutive = sets.iter().filter(|p| p.has_consecutive).count();
    let hot_hits = sets.iter().filter(|p| p.hot_in_regular).count();
    let avg_range = patterns::average_range_distribution(sets);

    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Indicateur", "Valeur"]);
    out.add_row(vec![
        "Somme moyenne des réguliers".to_string(),
        format!("{:.2}", patterns::average_sum(sets)),
    ]);
    out.add_row(vec![
        "Proportion moyenne d'impairs".to_string(),
        format!("{:.2}", patterns::average_odd_ratio(sets)),
    ]);
    out.add_row(vec![
        "Tirages avec consécutifs".to_string(),
        format!("{} / {}", consecutive, sets.len()),
    ]);
    out.add_row(vec![
        "Numéro chaud parmi les réguliers".to_string(),
        format!("{} / {}", hot_hits, sets.len()),
    ]);
    for idx in 0..BUCKET_COUNT {
        let (min, max) = bucket_bounds(idx);
        out.add_row(vec![
            format!("Tranche {:02}-{:02} (moy. par tirage)", min, max),
            format!("{:.2}", avg_range[idx]),
        ]);
    }
    println!("{out}");
}

pub fn display_chaos(signal: &ChaosSignal) {
    println!("\n── Analyse de divergence (façon Lyapunov) ──");
    println!("  Indicateur : {:.4}", signal.lyapunov_estimate);
    println!(
        "  Comportement chaotique : {}",
        if signal.is_chaotic { "Oui" } else { "Non" }
    );
}

pub fn display_rotor(analysis: &RotorAnalysis, draws: &[Draw]) {
    println!("\n── Substitution par rotation (rotor) ──");
    println!(
        "  Décalage : somme du dernier tirage = {}, soit {} modulo 44",
        analysis.table.shift,
        analysis.table.shift % 44
    );

    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tirage", "Transformé"]);
    for (draw, transformed) in draws.iter().zip(analysis.transformed.iter()) {
        out.add_row(vec![
            format_numbers(&draw.regular),
            format_numbers(transformed),
        ]);
    }
    println!("{out}");
}

pub fn display_predictions(candidates: &[PredictionCandidate], seed: u64) {
    println!("\n🎲 Grilles suggérées (seed {})\n", seed);

    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Numéros réguliers", "Chaud"]);
    for (i, candidate) in candidates.iter().enumerate() {
        out.add_row(vec![
            format!("{}", i + 1),
            format_numbers(&candidate.regular),
            format!("{:02}", candidate.hot),
        ]);
    }
    println!("{out}");
}

pub fn display_frequency_chart(table: &FrequencyTable) {
    println!("\n── Fréquence des numéros réguliers ──");
    let points: Vec<(f32, f32)> = table
        .regular
        .iter()
        .enumerate()
        .map(|(n, &count)| (n as f32, count as f32))
        .collect();
    plot_bars(&points, 0.0, MAX_REGULAR as f32);

    println!("\n── Fréquence des numéros chauds ──");
    let points: Vec<(f32, f32)> = table
        .hot
        .iter()
        .enumerate()
        .skip(1)
        .map(|(n, &count)| (n as f32, count as f32))
        .collect();
    plot_bars(&points, 1.0, 16.0);
}

fn plot_bars(points: &[(f32, f32)], x_min: f32, x_max: f32) {
    let y_max = points.iter().map(|p| p.1).fold(0.0, f32::max) + 1.0;
    let shape = textplots::Shape::Bars(points);
    let mut chart = textplots::Chart::new_with_y_range(120, 40, x_min, x_max, 0.0, y_max);
    println!("{}", chart.lineplot(&shape));
}
