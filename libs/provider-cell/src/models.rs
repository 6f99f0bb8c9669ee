use serde::{Deserialize, Serialize};

use shared_models::{Provider, SymptomsField};

/// Body of POST /providers/match.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub symptoms: SymptomsField,
    pub insurance: String,
    pub location: Option<String>,
    pub urgency: Option<String>,
    pub severity: Option<u8>,
}

/// A provider augmented with its computed relevance for one patient.
/// Derived and ephemeral, recomputed on every match request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMatch {
    #[serde(flatten)]
    pub provider: Provider,
    pub match_score: f32,
    pub specialty_match: bool,
    pub match_reasons: Vec<String>,
}
