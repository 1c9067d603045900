use crate::models::{MAX_HOT, MAX_REGULAR};
use crate::store::ResultStore;

/// Comptages d'apparition, indexés par valeur de numéro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    /// regular[n] = nombre d'apparitions du numéro régulier n (0-43).
    pub regular: [u32; MAX_REGULAR as usize + 1],
    /// hot[n] = nombre d'apparitions du numéro chaud n (1-16, l'indice 0 reste à zéro).
    pub hot: [u32; MAX_HOT as usize + 1],
}

/// Fonction pure du contenu du magasin, recalculée à la demande.
pub fn compute(store: &ResultStore) -> FrequencyTable {
    let mut table = FrequencyTable {
        regular: [0; MAX_REGULAR as usize + 1],
        hot: [0; MAX_HOT as usize + 1],
    };

    for draw in store.all() {
        for &n in &draw.regular {
            table.regular[n as usize] += 1;
        }
        table.hot[draw.hot as usize] += 1;
    }

    table
}

impl FrequencyTable {
    /// Les `n` numéros réguliers les plus fréquents. Seuls les numéros déjà
    /// apparus sont retenus ; à fréquence égale, le plus petit numéro passe
    /// en premier (règle déterministe retenue pour le départage).
    pub fn most_common_regular(&self, n: usize) -> Vec<u8> {
        most_common(&self.regular, n)
    }

    /// Les `n` numéros chauds les plus fréquents, même règle de départage.
    pub fn most_common_hot(&self, n: usize) -> Vec<u8> {
        most_common(&self.hot, n)
    }
}

fn most_common(counts: &[u32], n: usize) -> Vec<u8> {
    let mut seen: Vec<(u8, u32)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(num, &count)| (num as u8, count))
        .collect();

    seen.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    seen.into_iter().take(n).map(|(num, _)| num).collect()
}
