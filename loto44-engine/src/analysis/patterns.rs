use crate::error::EngineError;
use crate::models::{Draw, MAX_REGULAR, REGULAR_COUNT};
use crate::store::ResultStore;

/// Nombre minimal de tirages pour l'analyse de motifs.
pub const MIN_DRAWS: usize = 2;
/// Nombre de tranches de l'histogramme de répartition.
pub const BUCKET_COUNT: usize = 4;
/// Largeur d'une tranche : 0-10, 11-21, 22-32, 33-43.
pub const BUCKET_WIDTH: u8 = 11;

/// Caractéristiques structurelles d'un tirage.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSet {
    pub sum_regular: u32,
    /// Proportion de numéros impairs (impairs / 5).
    pub odd_ratio: f64,
    pub range_histogram: [u32; BUCKET_COUNT],
    pub has_consecutive: bool,
    pub hot_in_regular: bool,
}

/// Indice de tranche d'un numéro régulier : min(3, n / 11).
pub fn bucket_index(n: u8) -> usize {
    ((n / BUCKET_WIDTH) as usize).min(BUCKET_COUNT - 1)
}

/// Bornes (min, max) incluses de la tranche `idx`, la dernière étant
/// écrêtée à 43.
pub fn bucket_bounds(idx: usize) -> (u8, u8) {
    let min = idx as u8 * BUCKET_WIDTH;
    let max = ((idx as u8 + 1) * BUCKET_WIDTH - 1).min(MAX_REGULAR);
    (min, max)
}

/// Un `PatternSet` par tirage, dans l'ordre du magasin. Le plancher de
/// 2 tirages est un choix d'analyse comparative, pas une nécessité du calcul.
pub fn compute(store: &ResultStore) -> Result<Vec<PatternSet>, EngineError> {
    if store.len() < MIN_DRAWS {
        return Err(EngineError::InsufficientData {
            required: MIN_DRAWS,
            actual: store.len(),
        });
    }
    Ok(store.all().iter().map(pattern_of).collect())
}

fn pattern_of(draw: &Draw) -> PatternSet {
    let odd_count = draw.regular.iter().filter(|&&n| n % 2 == 1).count();

    let mut range_histogram = [0u32; BUCKET_COUNT];
    for &n in &draw.regular {
        range_histogram[bucket_index(n)] += 1;
    }

    // Les réguliers sont déjà triés : un balayage des paires adjacentes
    // suffit, avec arrêt au premier écart de 1.
    let has_consecutive = draw.regular.windows(2).any(|pair| pair[1] - pair[0] == 1);

    PatternSet {
        sum_regular: draw.sum_regular(),
        odd_ratio: odd_count as f64 / REGULAR_COUNT as f64,
        range_histogram,
        has_consecutive,
        hot_in_regular: draw.regular.contains(&draw.hot),
    }
}

/// Moyenne par tranche de l'histogramme de répartition.
pub fn average_range_distribution(patterns: &[PatternSet]) -> [f64; BUCKET_COUNT] {
    let mut avg = [0.0f64; BUCKET_COUNT];
    if patterns.is_empty() {
        return avg;
    }
    for p in patterns {
        for (slot, &count) in avg.iter_mut().zip(p.range_histogram.iter()) {
            *slot += count as f64;
        }
    }
    for slot in &mut avg {
        *slot /= patterns.len() as f64;
    }
    avg
}

pub fn average_sum(patterns: &[PatternSet]) -> f64 {
    if patterns.is_empty() {
        return 0.0;
    }
    patterns.iter().map(|p| p.sum_regular as f64).sum::<f64>() / patterns.len() as f64
}

pub fn average_odd_ratio(patterns: &[PatternSet]) -> f64 {
    if patterns.is_empty() {
        return 0.0;
    }
    patterns.iter().map(|p| p.odd_ratio).sum::<f64>() / patterns.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> ResultStore {
        let mut store = ResultStore::new();
        store.append(&[5, 12, 23, 31, 40], 3).unwrap();
        store.append(&[2, 12, 19, 31, 38], 7).unwrap();
        store
    }

    #[test]
    fn test_floor_at_two_draws() {
        let mut store = ResultStore::new();
        assert_eq!(
            compute(&store),
            Err(EngineError::InsufficientData {
                required: 2,
                actual: 0
            })
        );

        store.append(&[5, 12, 23, 31, 40], 3).unwrap();
        assert!(compute(&store).is_err());

        store.append(&[2, 12, 19, 31, 38], 7).unwrap();
        assert_eq!(compute(&store).unwrap().len(), 2);
    }

    #[test]
    fn test_bucket_index() {
        assert_eq!(bucket_index(0), 0);
        assert_eq!(bucket_index(10), 0);
        assert_eq!(bucket_index(11), 1);
        assert_eq!(bucket_index(21), 1);
        assert_eq!(bucket_index(22), 2);
        assert_eq!(bucket_index(32), 2);
        assert_eq!(bucket_index(33), 3);
        assert_eq!(bucket_index(43), 3);
    }

    #[test]
    fn test_bucket_bounds() {
        assert_eq!(bucket_bounds(0), (0, 10));
        assert_eq!(bucket_bounds(1), (11, 21));
        assert_eq!(bucket_bounds(2), (22, 32));
        // La dernière tranche est écrêtée à 43.
        assert_eq!(bucket_bounds(3), (33, 43));
    }

    #[test]
    fn test_pattern_fields() {
        let patterns = compute(&sample_store()).unwrap();

        // [5, 12, 23, 31, 40] : somme 111, impairs 5/23/31, pas de consécutifs.
        assert_eq!(patterns[0].sum_regular, 111);
        assert!((patterns[0].odd_ratio - 0.6).abs() < 1e-12);
        assert_eq!(patterns[0].range_histogram, [1, 1, 2, 1]);
        assert!(!patterns[0].has_consecutive);
        assert!(!patterns[0].hot_in_regular);

        // [2, 12, 19, 31, 38] : somme 102.
        assert_eq!(patterns[1].sum_regular, 102);
        assert_eq!(patterns[1].range_histogram, [1, 2, 1, 1]);
    }

    #[test]
    fn test_consecutive_detection() {
        let mut store = ResultStore::new();
        store.append(&[7, 8, 20, 30, 40], 3).unwrap();
        store.append(&[1, 5, 10, 20, 43], 3).unwrap();
        let patterns = compute(&store).unwrap();
        assert!(patterns[0].has_consecutive);
        assert!(!patterns[1].has_consecutive);
    }

    #[test]
    fn test_hot_in_regular() {
        let mut store = ResultStore::new();
        store.append(&[3, 12, 23, 31, 40], 3).unwrap();
        store.append(&[2, 12, 19, 31, 38], 7).unwrap();
        let patterns = compute(&store).unwrap();
        assert!(patterns[0].hot_in_regular);
        assert!(!patterns[1].hot_in_regular);
    }

    #[test]
    fn test_average_range_distribution() {
        let patterns = compute(&sample_store()).unwrap();
        let avg = average_range_distribution(&patterns);
        assert_eq!(avg, [1.0, 1.5, 1.5, 1.0]);
        // Les moyennes par tranche totalisent 5 numéros par tirage.
        assert!((avg.iter().sum::<f64>() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_averages() {
        let patterns = compute(&sample_store()).unwrap();
        assert!((average_sum(&patterns) - 106.5).abs() < 1e-12);
        assert!((average_odd_ratio(&patterns) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let store = sample_store();
        assert_eq!(compute(&store).unwrap(), compute(&store).unwrap());
    }
}
