use std::collections::BTreeSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::analysis::{frequency, patterns};
use crate::error::EngineError;
use crate::models::{MAX_HOT, MAX_REGULAR, MIN_HOT, PredictionCandidate, REGULAR_COUNT};
use crate::store::ResultStore;

/// Nombre minimal de tirages pour générer des prédictions.
pub const MIN_DRAWS: usize = 3;
/// Taille du réservoir de numéros réguliers les plus fréquents.
const TOP_REGULAR: usize = 10;
/// Taille du réservoir de numéros chauds les plus fréquents.
const TOP_HOT: usize = 3;
/// Numéros puisés dans le réservoir des fréquents, avec remise
/// (les doublons fusionnent dans l'ensemble de destination).
const FREQUENT_PICKS: usize = 3;
/// Tentatives par case avant d'abandonner le tirage par tranche.
/// Plafond délibéré : on préfère passer à la complétion uniforme plutôt
/// que d'insister sur une tranche déjà saturée.
const MAX_BUCKET_ATTEMPTS: usize = 10;

/// Génère `count` grilles candidates en combinant fréquences et motifs.
/// Un seed fixe rend la sortie reproductible. `count = 0` renvoie une
/// séquence vide (pas une erreur), le plancher de données s'applique
/// dans tous les cas.
pub fn predict(
    store: &ResultStore,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<PredictionCandidate>, EngineError> {
    if store.len() < MIN_DRAWS {
        return Err(EngineError::InsufficientData {
            required: MIN_DRAWS,
            actual: store.len(),
        });
    }

    let table = frequency::compute(store);
    let pattern_sets = patterns::compute(store)?;

    let top_regular = table.most_common_regular(TOP_REGULAR);
    let top_hot = table.most_common_hot(TOP_HOT);
    let avg_range = patterns::average_range_distribution(&pattern_sets);
    let bucket_pool = build_bucket_pool(&avg_range);

    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut candidates = Vec::with_capacity(count);
    for _ in 0..count {
        candidates.push(generate_one(&top_regular, &top_hot, &bucket_pool, &mut rng));
    }
    Ok(candidates)
}

/// Réservoir d'indices de tranches : la tranche i apparaît
/// max(1, round(moyenne[i] × 2)) fois.
fn build_bucket_pool(avg_range: &[f64; patterns::BUCKET_COUNT]) -> Vec<usize> {
    let mut pool = Vec::new();
    for (idx, &avg) in avg_range.iter().enumerate() {
        let copies = ((avg * 2.0).round() as usize).max(1);
        pool.extend(std::iter::repeat(idx).take(copies));
    }
    pool
}

fn generate_one(
    top_regular: &[u8],
    top_hot: &[u8],
    bucket_pool: &[usize],
    rng: &mut StdRng,
) -> PredictionCandidate {
    let mut chosen: BTreeSet<u8> = BTreeSet::new();

    // Quelques numéros fréquents, tirés avec remise.
    for _ in 0..FREQUENT_PICKS {
        if let Some(&n) = top_regular.choose(rng) {
            chosen.insert(n);
        }
    }

    // Remplissage par tranche selon la répartition historique.
    let needed = REGULAR_COUNT.saturating_sub(chosen.len());
    for _ in 0..needed {
        if chosen.len() >= REGULAR_COUNT {
            break;
        }
        let Some(&bucket) = bucket_pool.choose(rng) else {
            break;
        };
        let (min_val, max_val) = patterns::bucket_bounds(bucket);
        for _ in 0..MAX_BUCKET_ATTEMPTS {
            let n = rng.random_range(min_val..=max_val);
            if chosen.insert(n) {
                break;
            }
        }
    }

    // Complétion uniforme inconditionnelle : garantit exactement 5 numéros
    // distincts même quand les étapes précédentes laissent l'ensemble court.
    while chosen.len() < REGULAR_COUNT {
        chosen.insert(rng.random_range(0..=MAX_REGULAR));
    }

    // Le BTreeSet restitue les numéros en ordre croissant.
    let mut regular = [0u8; REGULAR_COUNT];
    for (slot, &n) in regular.iter_mut().zip(chosen.iter()) {
        *slot = n;
    }

    let hot = match top_hot.choose(rng) {
        Some(&h) => h,
        None => rng.random_range(MIN_HOT..=MAX_HOT),
    };

    PredictionCandidate { regular, hot }
}
