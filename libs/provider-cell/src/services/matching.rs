use tracing::debug;

use shared_models::{PatientCriteria, Provider, Specialty};

use crate::models::ProviderMatch;

/// Fixed symptom-keyword -> eligible-specialty table. Keywords are
/// matched as case-insensitive substrings of the joined symptom text;
/// presence is boolean, multiple hits do not stack.
const SYMPTOM_SPECIALTIES: &[(&str, &[Specialty])] = &[
    ("rash", &[Specialty::Dermatologist]),
    ("skin", &[Specialty::Dermatologist]),
    ("acne", &[Specialty::Dermatologist]),
    (
        "chest pain",
        &[Specialty::Cardiologist, Specialty::GeneralPhysician],
    ),
    ("heart", &[Specialty::Cardiologist]),
    (
        "headache",
        &[Specialty::Neurologist, Specialty::GeneralPhysician],
    ),
    ("migraine", &[Specialty::Neurologist]),
    (
        "back pain",
        &[Specialty::OrthopedicSurgeon, Specialty::GeneralPhysician],
    ),
    ("joint pain", &[Specialty::OrthopedicSurgeon]),
    ("fever", &[Specialty::GeneralPhysician]),
    ("cough", &[Specialty::GeneralPhysician]),
    ("fatigue", &[Specialty::GeneralPhysician]),
];

const SPECIALTY_POINTS: f32 = 50.0;
const GENERAL_FALLBACK_POINTS: f32 = 20.0;
const RATING_MULTIPLIER: f32 = 10.0;

pub struct MatchingService {
    limit: usize,
}

impl MatchingService {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Score and rank providers for a patient. Pure over its inputs:
    /// same criteria and catalog always produce the same ranking.
    pub fn match_providers(
        &self,
        criteria: &PatientCriteria,
        providers: &[Provider],
    ) -> Vec<ProviderMatch> {
        let symptom_text = criteria.symptom_text();
        let relevant = eligible_specialties(&symptom_text);

        debug!(
            "Matching against {} providers, eligible specialties: {:?}",
            providers.len(),
            relevant
        );

        let mut matches: Vec<ProviderMatch> = providers
            .iter()
            .filter(|provider| provider.accepts(&criteria.insurance))
            .map(|provider| evaluate_provider(provider, &relevant))
            .collect();

        // Stable sort keeps catalog order for equal scores.
        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        matches.truncate(self.limit);

        debug!("Returning {} ranked matches", matches.len());
        matches
    }
}

/// Union of specialties whose keywords appear in the symptom text,
/// falling back to the general physician when nothing matches.
pub fn eligible_specialties(symptom_text: &str) -> Vec<Specialty> {
    let text = symptom_text.to_lowercase();
    let mut relevant = Vec::new();

    for (keyword, specialties) in SYMPTOM_SPECIALTIES {
        if text.contains(keyword) {
            for specialty in *specialties {
                if !relevant.contains(specialty) {
                    relevant.push(*specialty);
                }
            }
        }
    }

    if relevant.is_empty() {
        relevant.push(Specialty::GeneralPhysician);
    }

    relevant
}

fn evaluate_provider(provider: &Provider, relevant: &[Specialty]) -> ProviderMatch {
    let specialty_match = relevant.contains(&provider.specialty);
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if specialty_match {
        score += SPECIALTY_POINTS;
        reasons.push(format!("Specializes in {}", provider.specialty));
    } else if provider.specialty == Specialty::GeneralPhysician {
        score += GENERAL_FALLBACK_POINTS;
        reasons.push("General physician available for your symptoms".to_string());
    }

    score += provider.rating * RATING_MULTIPLIER;
    if provider.rating >= 4.0 {
        reasons.push(format!("Highly rated ({:.1}/5.0)", provider.rating));
    }

    let wait_points = wait_time_points(&provider.wait_time);
    score += wait_points;
    if wait_points >= 30.0 {
        reasons.push(format!("Short wait time ({})", provider.wait_time));
    }

    score += experience_points(&provider.experience);
    if let Some(years) = leading_int(&provider.experience) {
        if years >= 5 {
            reasons.push(format!("{} years of experience", years));
        }
    }

    ProviderMatch {
        provider: provider.clone(),
        match_score: score,
        specialty_match,
        match_reasons: reasons,
    }
}

/// Shorter waits score higher: <=15 min 30, <=30 min 20, <=60 min 10.
/// Unparseable wait-time text contributes nothing.
fn wait_time_points(wait_time: &str) -> f32 {
    match leading_int(wait_time) {
        Some(minutes) if minutes <= 15 => 30.0,
        Some(minutes) if minutes <= 30 => 20.0,
        Some(minutes) if minutes <= 60 => 10.0,
        _ => 0.0,
    }
}

/// Tiered experience bonus: >=15 years 10, >=10 years 7, >=5 years 5.
fn experience_points(experience: &str) -> f32 {
    match leading_int(experience) {
        Some(years) if years >= 15 => 10.0,
        Some(years) if years >= 10 => 7.0,
        Some(years) if years >= 5 => 5.0,
        _ => 0.0,
    }
}

/// Leading integer of free text like "20 mins" or "15 years".
fn leading_int(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
