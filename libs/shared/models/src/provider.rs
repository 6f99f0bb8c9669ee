use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of provider specialties. Reference data uses the
/// human-readable names; "Primary Care Physician" is accepted as a
/// legacy alias for the general-physician variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "General Physician", alias = "Primary Care Physician")]
    GeneralPhysician,
    Cardiologist,
    Dermatologist,
    Neurologist,
    #[serde(rename = "Orthopedic Surgeon")]
    OrthopedicSurgeon,
    Gynecologist,
    Pediatrician,
    #[serde(rename = "General Surgeon")]
    GeneralSurgeon,
    Ophthalmologist,
    #[serde(rename = "ENT Specialist")]
    EntSpecialist,
    Psychiatrist,
}

impl Specialty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::GeneralPhysician => "General Physician",
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Dermatologist => "Dermatologist",
            Specialty::Neurologist => "Neurologist",
            Specialty::OrthopedicSurgeon => "Orthopedic Surgeon",
            Specialty::Gynecologist => "Gynecologist",
            Specialty::Pediatrician => "Pediatrician",
            Specialty::GeneralSurgeon => "General Surgeon",
            Specialty::Ophthalmologist => "Ophthalmologist",
            Specialty::EntSpecialist => "ENT Specialist",
            Specialty::Psychiatrist => "Psychiatrist",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Immutable provider reference data, loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
    pub accepted_insurances: Vec<String>,
    pub location: GeoPoint,
    pub address: String,
    pub rating: f32,
    pub wait_time: String,
    pub phone: String,
    pub email: String,
    pub experience: String,
    pub education: Option<String>,
    pub hospital: Option<String>,
}

impl Provider {
    /// Exact-match in-network check against the patient's insurance company.
    pub fn accepts(&self, insurance: &str) -> bool {
        self.accepted_insurances.iter().any(|name| name == insurance)
    }
}
