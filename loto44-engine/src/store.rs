use crate::error::EngineError;
use crate::models::Draw;

/// Historique des tirages, du plus ancien au plus récent.
/// Append-only : aucune modification ni suppression.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    draws: Vec<Draw>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Valide puis enregistre un tirage. En cas de rejet, l'historique
    /// reste strictement inchangé.
    pub fn append(&mut self, regular: &[u8], hot: u8) -> Result<(), EngineError> {
        let draw = Draw::new(regular, hot)?;
        self.draws.push(draw);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Vue ordonnée en lecture seule (le plus ancien en premier).
    pub fn all(&self) -> &[Draw] {
        &self.draws
    }

    /// Le tirage le plus récent.
    pub fn last(&self) -> Result<&Draw, EngineError> {
        self.draws.last().ok_or(EngineError::EmptyStore)
    }
}
