use crate::error::EngineError;
use crate::models::{MAX_REGULAR, REGULAR_COUNT};
use crate::store::ResultStore;

/// Taille du domaine des numéros réguliers (0-43).
pub const DOMAIN: usize = MAX_REGULAR as usize + 1;

/// Table de substitution par rotation modulaire, façon rotor d'Enigma :
/// i ↦ (i + S) mod 44, où S est la somme des réguliers du dernier tirage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    /// Décalage appliqué (somme des réguliers du tirage le plus récent).
    pub shift: u32,
    table: [u8; DOMAIN],
}

impl SubstitutionTable {
    fn from_shift(shift: u32) -> Self {
        let mut table = [0u8; DOMAIN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = ((i as u32 + shift) % DOMAIN as u32) as u8;
        }
        SubstitutionTable { shift, table }
    }

    pub fn apply(&self, n: u8) -> u8 {
        self.table[n as usize]
    }

    pub fn entries(&self) -> &[u8; DOMAIN] {
        &self.table
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorAnalysis {
    pub table: SubstitutionTable,
    /// Un quintuplé transformé par tirage historique, ordre du magasin préservé.
    pub transformed: Vec<[u8; REGULAR_COUNT]>,
}

/// Déterministe et sans état : recalculé à chaque appel puisque la table
/// dépend du dernier tirage enregistré.
pub fn compute(store: &ResultStore) -> Result<RotorAnalysis, EngineError> {
    let shift = store.last()?.sum_regular();
    let table = SubstitutionTable::from_shift(shift);

    let transformed = store
        .all()
        .iter()
        .map(|draw| {
            let mut out = [0u8; REGULAR_COUNT];
            for (slot, &n) in out.iter_mut().zip(draw.regular.iter()) {
                *slot = table.apply(n);
            }
            out
        })
        .collect();

    Ok(RotorAnalysis { table, transformed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_rejected() {
        assert_eq!(compute(&ResultStore::new()), Err(EngineError::EmptyStore));
    }

    #[test]
    fn test_table_is_modular_rotation() {
        let mut store = ResultStore::new();
        store.append(&[5, 12, 23, 31, 40], 3).unwrap();
        // S = 111, 111 mod 44 = 23.
        let analysis = compute(&store).unwrap();
        assert_eq!(analysis.table.shift, 111);
        for i in 0..DOMAIN {
            assert_eq!(
                analysis.table.apply(i as u8) as u32,
                (i as u32 + 111) % 44
            );
        }
        assert_eq!(analysis.table.apply(0), 23);
        assert_eq!(analysis.table.apply(43), 22);
    }

    #[test]
    fn test_table_keyed_by_most_recent_draw() {
        let mut store = ResultStore::new();
        store.append(&[5, 12, 23, 31, 40], 3).unwrap();
        store.append(&[0, 1, 2, 3, 4], 7).unwrap();
        // S = 10 pour le dernier tirage, pas 111.
        let analysis = compute(&store).unwrap();
        assert_eq!(analysis.table.shift, 10);
        assert_eq!(analysis.table.apply(0), 10);
        assert_eq!(analysis.table.apply(40), 6);
    }

    #[test]
    fn test_transformed_covers_all_draws_in_order() {
        let mut store = ResultStore::new();
        store.append(&[5, 12, 23, 31, 40], 3).unwrap();
        store.append(&[0, 1, 2, 3, 4], 7).unwrap();
        let analysis = compute(&store).unwrap();

        assert_eq!(analysis.transformed.len(), 2);
        // S = 10 : [5, 12, 23, 31, 40] ↦ [15, 22, 33, 41, 6].
        assert_eq!(analysis.transformed[0], [15, 22, 33, 41, 6]);
        assert_eq!(analysis.transformed[1], [10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_transformed_sum_consistency() {
        // Somme des transformés du dernier tirage ≡ (somme + 5·S) mod 44,
        // vérifiable par calcul direct.
        let mut store = ResultStore::new();
        store.append(&[5, 12, 23, 31, 40], 3).unwrap();
        let analysis = compute(&store).unwrap();
        let s = analysis.table.shift;
        let transformed_sum: u32 = analysis.transformed[0].iter().map(|&n| n as u32).sum();
        let direct: u32 = store.all()[0]
            .regular
            .iter()
            .map(|&n| (n as u32 + s) % 44)
            .sum();
        assert_eq!(transformed_sum, direct);
    }

    #[test]
    fn test_idempotent() {
        let mut store = ResultStore::new();
        store.append(&[5, 12, 23, 31, 40], 3).unwrap();
        store.append(&[2, 12, 19, 31, 38], 7).unwrap();
        assert_eq!(compute(&store).unwrap(), compute(&store).unwrap());
    }
}
