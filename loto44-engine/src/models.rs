use crate::error::ValidationError;

/// Nombre de numéros réguliers par tirage.
pub const REGULAR_COUNT: usize = 5;
/// Numéro régulier maximal (domaine 0-43).
pub const MAX_REGULAR: u8 = 43;
/// Numéro chaud minimal.
pub const MIN_HOT: u8 = 1;
/// Numéro chaud maximal (domaine 1-16).
pub const MAX_HOT: u8 = 16;

/// Un résultat historique : 5 numéros réguliers distincts + 1 numéro chaud.
/// Les réguliers sont toujours stockés triés en ordre croissant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub regular: [u8; REGULAR_COUNT],
    pub hot: u8,
}

impl Draw {
    /// Valide et normalise un tirage. Aucun `Draw` partiellement valide
    /// n'existe : toute violation est rejetée à la construction.
    pub fn new(regular: &[u8], hot: u8) -> Result<Self, ValidationError> {
        if regular.len() != REGULAR_COUNT {
            return Err(ValidationError::WrongCount(regular.len()));
        }
        for &n in regular {
            if n > MAX_REGULAR {
                return Err(ValidationError::RegularOutOfRange(n));
            }
        }
        if hot < MIN_HOT || hot > MAX_HOT {
            return Err(ValidationError::HotOutOfRange(hot));
        }

        let mut sorted = [0u8; REGULAR_COUNT];
        sorted.copy_from_slice(regular);
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(ValidationError::DuplicateRegular(pair[0]));
            }
        }

        Ok(Draw {
            regular: sorted,
            hot,
        })
    }

    pub fn sum_regular(&self) -> u32 {
        self.regular.iter().map(|&n| n as u32).sum()
    }
}

/// Une grille synthétisée par le générateur. Jamais revalidée par le magasin :
/// le générateur garantit lui-même les invariants (5 numéros distincts dans
/// les bornes, numéro chaud dans les bornes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionCandidate {
    pub regular: [u8; REGULAR_COUNT],
    pub hot: u8,
}
