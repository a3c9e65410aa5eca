use rand::Rng;

use super::models::{VisualizationKind, VisualizationPayload};

/// Keyword groups in priority order; the first group with a hit wins.
const KEYWORDS: [(VisualizationKind, &[&str]); 3] = [
    (VisualizationKind::Temperature, &["temperature", "temp"]),
    (VisualizationKind::Salinity, &["salinity", "salt"]),
    (VisualizationKind::Currents, &["current", "flow"]),
];

/// Maps free text to a visualization kind by case-insensitive substring match.
pub fn classify(text: &str) -> Option<VisualizationKind> {
    let query = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|word| query.contains(word)))
        .map(|(kind, _)| *kind)
}

/// Picks the payload for `text`, if any keyword matches.
///
/// `rng` is only consulted for the currents dataset.
pub fn select<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Option<VisualizationPayload> {
    let payload = match classify(text)? {
        VisualizationKind::Temperature => VisualizationPayload::temperature(),
        VisualizationKind::Salinity => VisualizationPayload::salinity(),
        VisualizationKind::Currents => VisualizationPayload::currents(rng),
    };
    Some(payload)
}
