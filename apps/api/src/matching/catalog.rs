//! Career catalog: the immutable, ordered set of career profiles the ranker scores against.
//!
//! Built once at startup (hardcoded or from a JSON file) and shared by reference.
//! All integrity checks run here so request-time code can trust the data.

use std::collections::HashSet;
use std::path::Path;

use crate::errors::DataError;
use crate::models::career::{CareerProfile, CivilianTranslation, DifficultyLevel, PromotionStep};

#[derive(Debug, Clone)]
pub struct CareerCatalog {
    profiles: Vec<CareerProfile>,
}

impl CareerCatalog {
    /// Validates and wraps `profiles`, preserving their order.
    ///
    /// Rejects duplicate ids, profiles without keywords, and blank keywords.
    pub fn new(profiles: Vec<CareerProfile>) -> Result<Self, DataError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(DataError::DuplicateCareerId(profile.id.clone()));
            }
            if profile.match_keywords.is_empty() {
                return Err(DataError::EmptyKeywords(profile.id.clone()));
            }
            if profile.match_keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(DataError::BlankKeyword(profile.id.clone()));
            }
        }
        Ok(Self { profiles })
    }

    /// Loads a JSON array of profiles from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let profiles: Vec<CareerProfile> =
            serde_json::from_str(&raw).map_err(|source| DataError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(profiles)
    }

    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CareerProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn get(&self, id: &str) -> Option<&CareerProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Case-insensitive filter on branch and service type. `None` matches everything.
    pub fn filter(&self, branch: Option<&str>, service_type: Option<&str>) -> Vec<&CareerProfile> {
        self.profiles
            .iter()
            .filter(|p| branch.map_or(true, |b| p.branch.eq_ignore_ascii_case(b)))
            .filter(|p| service_type.map_or(true, |s| p.service_type.eq_ignore_ascii_case(s)))
            .collect()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn promotion(steps: &[(&str, &str, &str)]) -> Vec<PromotionStep> {
    steps
        .iter()
        .map(|(rank, timeframe, pay_grade)| PromotionStep {
            rank: rank.to_string(),
            timeframe: timeframe.to_string(),
            pay_grade: pay_grade.to_string(),
        })
        .collect()
}

fn builtin_profiles() -> Vec<CareerProfile> {
    vec![
        CareerProfile {
            id: "cyber-operations".to_string(),
            title: "Cybersecurity Specialist".to_string(),
            branch: "Air Force".to_string(),
            service_type: "Active Duty".to_string(),
            description: "Protect military networks from cyber threats, conduct digital investigations, and implement security protocols.".to_string(),
            requirements: strings(&["High school diploma", "Security clearance eligible", "Strong analytical skills"]),
            training_duration: "6-12 months".to_string(),
            civilian_translation: CivilianTranslation {
                job_titles: strings(&["Cybersecurity Analyst", "Information Security Manager", "SOC Analyst"]),
                average_salary: "$85,000 - $140,000".to_string(),
                growth_outlook: "Excellent (22% growth)".to_string(),
                certifications: strings(&["Security+", "CISSP", "CEH"]),
            },
            match_keywords: strings(&["cyber", "technology", "computer", "security", "IT", "networks"]),
            difficulty_level: DifficultyLevel::Moderate,
            promotion_timeline: promotion(&[
                ("Airman Basic", "0-6 months", "E-1"),
                ("Senior Airman", "2-3 years", "E-4"),
                ("Staff Sergeant", "4-6 years", "E-5"),
            ]),
        },
        CareerProfile {
            id: "aviation-mechanic".to_string(),
            title: "Aircraft Maintenance Technician".to_string(),
            branch: "Navy".to_string(),
            service_type: "Active Duty".to_string(),
            description: "Maintain and repair military aircraft to ensure flight safety and mission readiness.".to_string(),
            requirements: strings(&["High school diploma", "Mechanical aptitude", "Attention to detail"]),
            training_duration: "4-6 months".to_string(),
            civilian_translation: CivilianTranslation {
                job_titles: strings(&["Aircraft Mechanic", "Aviation Technician", "Maintenance Supervisor"]),
                average_salary: "$65,000 - $95,000".to_string(),
                growth_outlook: "Good (5% growth)".to_string(),
                certifications: strings(&["A&P License", "FAA Certifications"]),
            },
            match_keywords: strings(&["aviation", "aircraft", "mechanical", "repair", "maintenance", "hands-on"]),
            difficulty_level: DifficultyLevel::Moderate,
            promotion_timeline: promotion(&[
                ("Seaman Recruit", "0-9 months", "E-1"),
                ("Petty Officer 3rd Class", "2-3 years", "E-4"),
                ("Petty Officer 2nd Class", "4-6 years", "E-5"),
            ]),
        },
        CareerProfile {
            id: "combat-medic".to_string(),
            title: "Combat Medic / Healthcare Specialist".to_string(),
            branch: "Army".to_string(),
            service_type: "Active Duty".to_string(),
            description: "Provide emergency medical care in field conditions and support medical operations.".to_string(),
            requirements: strings(&["High school diploma", "Physical fitness", "Emotional resilience"]),
            training_duration: "4-6 months".to_string(),
            civilian_translation: CivilianTranslation {
                job_titles: strings(&["Paramedic", "Emergency Medical Technician", "Medical Assistant"]),
                average_salary: "$45,000 - $75,000".to_string(),
                growth_outlook: "Excellent (15% growth)".to_string(),
                certifications: strings(&["EMT", "Paramedic License", "NREMT"]),
            },
            match_keywords: strings(&["medical", "healthcare", "help people", "emergency", "first aid"]),
            difficulty_level: DifficultyLevel::Challenging,
            promotion_timeline: Vec::new(),
        },
        CareerProfile {
            id: "intelligence-analyst".to_string(),
            title: "Intelligence Analyst".to_string(),
            branch: "Air Force".to_string(),
            service_type: "Active Duty".to_string(),
            description: "Analyze data and information to support military operations and national security.".to_string(),
            requirements: strings(&["High school diploma", "Top Secret clearance eligible", "Analytical mindset"]),
            training_duration: "6-8 months".to_string(),
            civilian_translation: CivilianTranslation {
                job_titles: strings(&["Data Analyst", "Intelligence Specialist", "Research Analyst"]),
                average_salary: "$70,000 - $120,000".to_string(),
                growth_outlook: "Very Good (8% growth)".to_string(),
                certifications: strings(&["Security+", "Certified Intelligence Professional"]),
            },
            match_keywords: strings(&["analysis", "research", "investigation", "data", "intelligence", "problem-solving"]),
            difficulty_level: DifficultyLevel::Challenging,
            promotion_timeline: Vec::new(),
        },
        CareerProfile {
            id: "logistics-specialist".to_string(),
            title: "Supply Chain / Logistics Specialist".to_string(),
            branch: "Army".to_string(),
            service_type: "Active Duty".to_string(),
            description: "Manage supply chains, coordinate equipment distribution, and ensure operational readiness.".to_string(),
            requirements: strings(&["High school diploma", "Organizational skills", "Attention to detail"]),
            training_duration: "3-4 months".to_string(),
            civilian_translation: CivilianTranslation {
                job_titles: strings(&["Supply Chain Manager", "Logistics Coordinator", "Operations Manager"]),
                average_salary: "$55,000 - $90,000".to_string(),
                growth_outlook: "Good (7% growth)".to_string(),
                certifications: strings(&["APICS", "Supply Chain Certification"]),
            },
            match_keywords: strings(&["logistics", "organization", "management", "coordination", "planning"]),
            difficulty_level: DifficultyLevel::Easy,
            promotion_timeline: Vec::new(),
        },
    ]
}
