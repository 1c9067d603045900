use thiserror::Error;

/// Rejet d'un tirage mal formé à la construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("il faut exactement 5 numéros réguliers (reçu {0})")]
    WrongCount(usize),
    #[error("numéro régulier {0} hors limites (0-43)")]
    RegularOutOfRange(u8),
    #[error("numéro chaud {0} hors limites (1-16)")]
    HotOutOfRange(u8),
    #[error("numéro régulier en double : {0}")]
    DuplicateRegular(u8),
}

/// Erreurs renvoyées par le magasin, les analyses et le générateur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("tirage invalide : {0}")]
    Validation(#[from] ValidationError),
    #[error("données insuffisantes : au moins {required} tirages requis ({actual} enregistrés)")]
    InsufficientData { required: usize, actual: usize },
    #[error("aucun tirage enregistré")]
    EmptyStore,
}
