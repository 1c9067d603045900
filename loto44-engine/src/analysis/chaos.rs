use crate::error::EngineError;
use crate::store::ResultStore;

/// Nombre minimal de tirages pour l'estimation de divergence.
pub const MIN_DRAWS: usize = 3;

/// Estimation de divergence façon Lyapunov sur le flux aplati des numéros.
/// Heuristique illustrative, pas un exposant de Lyapunov rigoureux.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaosSignal {
    pub lyapunov_estimate: f64,
    pub is_chaotic: bool,
}

/// Aplati tous les tirages en un seul flux (5 réguliers croissants puis le
/// numéro chaud, tirage par tirage), puis moyenne ln(|écart|) sur les écarts
/// consécutifs. Un écart nul contribue 0 ; le dénominateur est le nombre
/// total d'écarts, nuls compris.
pub fn compute(store: &ResultStore) -> Result<ChaosSignal, EngineError> {
    if store.len() < MIN_DRAWS {
        return Err(EngineError::InsufficientData {
            required: MIN_DRAWS,
            actual: store.len(),
        });
    }

    let stream: Vec<f64> = store
        .all()
        .iter()
        .flat_map(|draw| {
            draw.regular
                .iter()
                .chain(std::iter::once(&draw.hot))
                .map(|&n| n as f64)
        })
        .collect();

    let mut total = 0.0;
    let mut count = 0usize;
    for pair in stream.windows(2) {
        let diff = (pair[1] - pair[0]).abs();
        if diff != 0.0 {
            total += diff.ln();
        }
        count += 1;
    }

    let lyapunov_estimate = total / count as f64;
    Ok(ChaosSignal {
        lyapunov_estimate,
        is_chaotic: lyapunov_estimate > 0.0,
    })
}
