pub mod criteria;
pub mod error;
pub mod insurance;
pub mod provider;

pub use criteria::{PatientCriteria, SymptomsField};
pub use error::AppError;
pub use insurance::{CptCode, InsurancePlan};
pub use provider::{GeoPoint, Provider, Specialty};
