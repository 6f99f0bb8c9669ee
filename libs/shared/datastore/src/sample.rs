//! Built-in reference dataset used when no data directory is configured.

use std::collections::HashMap;

use shared_models::{CptCode, GeoPoint, InsurancePlan, Provider, Specialty};

#[allow(clippy::too_many_arguments)]
fn provider(
    id: &str,
    name: &str,
    specialty: Specialty,
    accepted_insurances: &[&str],
    lat: f64,
    lng: f64,
    address: &str,
    rating: f32,
    wait_time: &str,
    phone: &str,
    email: &str,
    experience: &str,
    education: &str,
    hospital: &str,
) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        specialty,
        accepted_insurances: accepted_insurances.iter().map(|s| s.to_string()).collect(),
        location: GeoPoint { lat, lng },
        address: address.to_string(),
        rating,
        wait_time: wait_time.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        experience: experience.to_string(),
        education: Some(education.to_string()),
        hospital: Some(hospital.to_string()),
    }
}

pub fn sample_providers() -> Vec<Provider> {
    vec![
        provider(
            "prov_001",
            "Dr. Jayanth Kotte",
            Specialty::Cardiologist,
            &["Apollo Munich", "Bajaj Allianz", "ICICI Lombard"],
            16.3067,
            80.4365,
            "Apollo Hospital, MG Road, Guntur, Andhra Pradesh",
            4.8,
            "20 mins",
            "+91 863 234 5678",
            "dr.rajesh@apollohospital.com",
            "15 years",
            "AIIMS Delhi",
            "Apollo Hospital, Guntur",
        ),
        provider(
            "prov_002",
            "Dr. Priya Reddy",
            Specialty::Dermatologist,
            &["Star Health", "HDFC ERGO", "Max Bupa"],
            16.5062,
            80.6480,
            "Care Hospital, Benz Circle, Vijayawada, Andhra Pradesh",
            4.9,
            "15 mins",
            "+91 866 345 6789",
            "dr.priya@carehospital.com",
            "12 years",
            "CMC Vellore",
            "Care Hospital, Vijayawada",
        ),
        provider(
            "prov_003",
            "Dr. Harish Annem",
            Specialty::OrthopedicSurgeon,
            &["Apollo Munich", "Religare", "Cigna TTK"],
            16.4300,
            80.5500,
            "KIMS Hospital, Mangalagiri, Andhra Pradesh",
            4.7,
            "30 mins",
            "+91 864 456 7890",
            "dr.suresh@kimshospital.com",
            "18 years",
            "Osmania Medical College",
            "KIMS Hospital, Mangalagiri",
        ),
        provider(
            "prov_004",
            "Dr. Lakshmi Devi",
            Specialty::Gynecologist,
            &["Bajaj Allianz", "Star Health", "HDFC ERGO"],
            16.4800,
            80.6000,
            "Fernandez Hospital, Tadepalli, Andhra Pradesh",
            4.6,
            "25 mins",
            "+91 865 567 8901",
            "dr.lakshmi@fernandezhospital.com",
            "14 years",
            "Gandhi Medical College",
            "Fernandez Hospital, Tadepalli",
        ),
        provider(
            "prov_005",
            "Dr. Visesh Gurram",
            Specialty::Neurologist,
            &["ICICI Lombard", "Max Bupa", "Religare"],
            16.3067,
            80.4365,
            "NIMS Hospital, Brodipet, Guntur, Andhra Pradesh",
            4.9,
            "40 mins",
            "+91 863 678 9012",
            "dr.venkatesh@nimshospital.com",
            "22 years",
            "NIMS Hyderabad",
            "NIMS Hospital, Guntur",
        ),
        provider(
            "prov_006",
            "Dr. Anjali Bollapalli",
            Specialty::Pediatrician,
            &["Apollo Munich", "Star Health", "Cigna TTK"],
            16.5062,
            80.6480,
            "Rainbow Children's Hospital, Vijayawada, Andhra Pradesh",
            4.8,
            "20 mins",
            "+91 866 789 0123",
            "dr.anjali@rainbowhospital.com",
            "16 years",
            "KEM Hospital Mumbai",
            "Rainbow Children's Hospital, Vijayawada",
        ),
        provider(
            "prov_007",
            "Dr. Arjun Reddy",
            Specialty::GeneralSurgeon,
            &["Bajaj Allianz", "HDFC ERGO", "Max Bupa"],
            16.4300,
            80.5500,
            "Sri Sai Hospital, Mangalagiri, Andhra Pradesh",
            5.0,
            "15 mins",
            "+91 864 890 1234",
            "dr.mohan@srisaihospital.com",
            "20 years",
            "AIIMS Delhi",
            "AIIMS, Mangalagiri",
        ),
        provider(
            "prov_008",
            "Dr. Geetha Kumari",
            Specialty::Ophthalmologist,
            &["Apollo Munich", "ICICI Lombard", "Religare"],
            16.4800,
            80.6000,
            "Lakshmi Eye Hospital, Tadepalli, Andhra Pradesh",
            4.7,
            "30 mins",
            "+91 865 901 2345",
            "dr.geetha@lakshmieyehospital.com",
            "13 years",
            "Sankara Nethralaya",
            "Lakshmi Eye Hospital, Tadepalli",
        ),
        provider(
            "prov_009",
            "Dr. Ramesh Babu",
            Specialty::EntSpecialist,
            &["Star Health", "Bajaj Allianz", "Cigna TTK"],
            16.3067,
            80.4365,
            "ENT Care Center, Guntur, Andhra Pradesh",
            4.6,
            "25 mins",
            "+91 863 012 3456",
            "dr.ramesh@entcarecenter.com",
            "17 years",
            "MAMC Delhi",
            "ENT Care Center, Guntur",
        ),
        provider(
            "prov_010",
            "Dr. Sunita Reddy",
            Specialty::Psychiatrist,
            &["HDFC ERGO", "Max Bupa", "Religare"],
            16.5062,
            80.6480,
            "Mind Wellness Clinic, Vijayawada, Andhra Pradesh",
            4.8,
            "45 mins",
            "+91 866 123 4567",
            "dr.sunita@mindwellnessclinic.com",
            "19 years",
            "NIMHANS Bangalore",
            "Mind Wellness Clinic, Vijayawada",
        ),
    ]
}

fn plan(id: &str, company: &str, plan_name: &str, coverage: &[(&str, f64)]) -> InsurancePlan {
    InsurancePlan {
        id: id.to_string(),
        company: company.to_string(),
        plan: plan_name.to_string(),
        cpt_coverage: coverage
            .iter()
            .map(|(code, fraction)| (code.to_string(), *fraction))
            .collect::<HashMap<_, _>>(),
    }
}

pub fn sample_insurance_plans() -> Vec<InsurancePlan> {
    vec![
        plan(
            "ins_001",
            "Apollo Munich",
            "Optima Restore",
            &[("99213", 0.85), ("80050", 0.75), ("99214", 0.90), ("99215", 0.95)],
        ),
        plan(
            "ins_002",
            "Bajaj Allianz",
            "Health Guard",
            &[("99213", 0.80), ("80050", 0.70), ("99214", 0.85), ("99215", 0.90)],
        ),
        plan(
            "ins_003",
            "ICICI Lombard",
            "Health Booster",
            &[("99213", 0.75), ("80050", 0.65), ("99214", 0.80), ("99215", 0.85)],
        ),
        plan(
            "ins_004",
            "Star Health",
            "Medi Classic",
            &[("99213", 0.90), ("80050", 0.80), ("99214", 0.95), ("99215", 0.95)],
        ),
        plan(
            "ins_005",
            "HDFC ERGO",
            "Health Suraksha",
            &[("99213", 0.82), ("80050", 0.72), ("99214", 0.87), ("99215", 0.92)],
        ),
        plan(
            "ins_006",
            "Max Bupa",
            "Health Companion",
            &[("99213", 0.78), ("80050", 0.68), ("99214", 0.83), ("99215", 0.88)],
        ),
        plan(
            "ins_007",
            "Religare",
            "Care",
            &[("99213", 0.88), ("80050", 0.78), ("99214", 0.93), ("99215", 0.93)],
        ),
        plan(
            "ins_008",
            "Cigna TTK",
            "ProHealth",
            &[("99213", 0.85), ("80050", 0.75), ("99214", 0.90), ("99215", 0.90)],
        ),
    ]
}

fn cpt(code: &str, description: &str, base_price: f64) -> CptCode {
    CptCode {
        code: code.to_string(),
        description: description.to_string(),
        base_price,
    }
}

pub fn sample_cpt_codes() -> Vec<CptCode> {
    vec![
        cpt(
            "99213",
            "Office or other outpatient visit, established patient, 20-29 minutes",
            800.0,
        ),
        cpt(
            "99214",
            "Office or other outpatient visit, established patient, 30-39 minutes",
            1200.0,
        ),
        cpt(
            "99215",
            "Office or other outpatient visit, established patient, 40-54 minutes",
            1600.0,
        ),
        cpt("80050", "General health panel", 600.0),
        cpt(
            "99203",
            "Office or other outpatient visit, new patient, 30-44 minutes",
            1000.0,
        ),
        cpt(
            "99204",
            "Office or other outpatient visit, new patient, 45-59 minutes",
            1400.0,
        ),
    ]
}
