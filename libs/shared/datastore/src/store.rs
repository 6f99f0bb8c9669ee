use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use shared_config::AppConfig;
use shared_models::{CptCode, InsurancePlan, Provider};

use crate::sample;

/// Immutable reference collections the engines run over. Loaded once at
/// startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    providers: Vec<Provider>,
    plans: Vec<InsurancePlan>,
    cpt_codes: Vec<CptCode>,
}

impl ReferenceStore {
    pub fn new(
        providers: Vec<Provider>,
        plans: Vec<InsurancePlan>,
        cpt_codes: Vec<CptCode>,
    ) -> Self {
        Self {
            providers,
            plans,
            cpt_codes,
        }
    }

    /// Built-in sample dataset.
    pub fn sample() -> Self {
        Self::new(
            sample::sample_providers(),
            sample::sample_insurance_plans(),
            sample::sample_cpt_codes(),
        )
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match &config.data_dir {
            Some(dir) => {
                let store = Self::load_from_dir(Path::new(dir))?;
                info!(
                    "Loaded reference data from {}: {} providers, {} plans, {} CPT codes",
                    dir,
                    store.providers.len(),
                    store.plans.len(),
                    store.cpt_codes.len()
                );
                Ok(store)
            }
            None => {
                info!("Serving built-in sample reference data");
                Ok(Self::sample())
            }
        }
    }

    /// Reads providers.json, insurance_plans.json, and cpt_codes.json
    /// from `dir`. Any missing or malformed file is a startup error.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let providers = read_collection(&dir.join("providers.json"))?;
        let plans = read_collection(&dir.join("insurance_plans.json"))?;
        let cpt_codes = read_collection(&dir.join("cpt_codes.json"))?;
        Ok(Self::new(providers, plans, cpt_codes))
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn provider(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn plans(&self) -> &[InsurancePlan] {
        &self.plans
    }

    pub fn plan_for_company(&self, company: &str) -> Option<&InsurancePlan> {
        self.plans.iter().find(|plan| plan.company == company)
    }

    pub fn cpt_codes(&self) -> &[CptCode] {
        &self.cpt_codes
    }

    pub fn cpt(&self, code: &str) -> Option<&CptCode> {
        self.cpt_codes.iter().find(|cpt| cpt.code == code)
    }

    /// Distinct insurance companies, in plan order. Used by intake
    /// validation to reject unknown insurers early.
    pub fn known_insurers(&self) -> Vec<&str> {
        let mut companies: Vec<&str> = Vec::new();
        for plan in &self.plans {
            if !companies.contains(&plan.company.as_str()) {
                companies.push(&plan.company);
            }
        }
        companies
    }
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_plans_have_coverage_fractions_in_unit_range() {
        let store = ReferenceStore::sample();
        for plan in store.plans() {
            for (code, fraction) in &plan.cpt_coverage {
                assert!(
                    (0.0..=1.0).contains(fraction),
                    "{} covers {} at {}",
                    plan.company,
                    code,
                    fraction
                );
            }
        }
    }

    #[test]
    fn sample_cpt_codes_are_five_digits() {
        let store = ReferenceStore::sample();
        assert!(!store.cpt_codes().is_empty());
        for cpt in store.cpt_codes() {
            assert_eq!(cpt.code.len(), 5);
            assert!(cpt.code.chars().all(|c| c.is_ascii_digit()));
            assert!(cpt.base_price > 0.0);
        }
    }

    #[test]
    fn sample_provider_ratings_are_bounded() {
        let store = ReferenceStore::sample();
        assert!(!store.providers().is_empty());
        for provider in store.providers() {
            assert!((0.0..=5.0).contains(&provider.rating));
            assert!(!provider.accepted_insurances.is_empty());
        }
    }

    #[test]
    fn known_insurers_are_distinct() {
        let store = ReferenceStore::sample();
        let insurers = store.known_insurers();
        for (i, company) in insurers.iter().enumerate() {
            assert!(!insurers[..i].contains(company));
        }
    }

    #[test]
    fn provider_lookup_by_id() {
        let store = ReferenceStore::sample();
        assert!(store.provider("prov_001").is_some());
        assert!(store.provider("prov_999").is_none());
    }
}
