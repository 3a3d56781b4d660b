use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::career::CareerProfile;

pub const MAX_FORECAST_YEARS: u8 = 4;

#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    pub career_path_id: String,
    /// Range-checked by `build_forecast`.
    #[serde(default = "default_service_years")]
    pub service_years: i64,
}

fn default_service_years() -> i64 {
    i64::from(MAX_FORECAST_YEARS)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForecastYear {
    pub year: u8,
    pub milestone: String,
    pub rank: String,
    pub estimated_pay: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CivilianOutcome {
    pub readiness: String,
    pub expected_salary: String,
    pub job_opportunities: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CareerForecast {
    pub career_path: String,
    pub branch: String,
    pub service_type: String,
    pub timeline: Vec<ForecastYear>,
    pub civilian_outcome: CivilianOutcome,
}

/// (milestone, promotion step used for rank, fallback rank, pay band, skills)
const YEARS: [(&str, usize, &str, &str, [&str; 3]); 4] = [
    (
        "Basic Training & Technical School",
        0,
        "Entry Level",
        "$25,000 - $30,000",
        ["Basic military training", "Technical foundations", "Security clearance"],
    ),
    (
        "First Duty Assignment",
        0,
        "Junior Enlisted",
        "$30,000 - $40,000",
        ["On-the-job experience", "Specialized training", "Leadership basics"],
    ),
    (
        "Advanced Training & Promotion",
        1,
        "Mid-Level",
        "$40,000 - $50,000",
        ["Advanced technical skills", "Mentoring junior personnel", "Professional development"],
    ),
    (
        "Leadership Role & Specialization",
        2,
        "Senior Enlisted",
        "$50,000 - $65,000",
        ["Team leadership", "Project management", "Industry certifications"],
    ),
];

/// Builds a year-by-year forecast covering the first `service_years` years (1..=4).
pub fn build_forecast(profile: &CareerProfile, service_years: i64) -> Result<CareerForecast, AppError> {
    if !(1..=i64::from(MAX_FORECAST_YEARS)).contains(&service_years) {
        return Err(AppError::Validation(format!(
            "service_years must be between 1 and {MAX_FORECAST_YEARS}"
        )));
    }

    let timeline = YEARS
        .iter()
        .zip(1u8..)
        .take(service_years as usize)
        .map(|((milestone, step, fallback, pay, skills), year)| ForecastYear {
            year,
            milestone: milestone.to_string(),
            rank: profile
                .promotion_timeline
                .get(*step)
                .map(|s| s.rank.clone())
                .unwrap_or_else(|| fallback.to_string()),
            estimated_pay: pay.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    let civilian = &profile.civilian_translation;
    Ok(CareerForecast {
        career_path: profile.title.clone(),
        branch: profile.branch.clone(),
        service_type: profile.service_type.clone(),
        timeline,
        civilian_outcome: CivilianOutcome {
            readiness: "High".to_string(),
            expected_salary: civilian.average_salary.clone(),
            job_opportunities: civilian.job_titles.clone(),
            certifications: civilian.certifications.clone(),
        },
    })
}
