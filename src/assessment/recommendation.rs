use super::domain::{RiskLevel, SurveyType};

const LOW_RISK: [&str; 2] = [
    "Take the \"Substance Awareness\" course to build on your knowledge",
    "Keep up a healthy lifestyle and continue steering clear of addictive substances",
];

const MODERATE_RISK: [&str; 3] = [
    "Take the \"Refusal Skills\" course to practice prevention techniques",
    "Book an appointment with a counselor for more tailored support",
    "Join a community program to stay connected with peer support",
];

const HIGH_RISK: [&str; 3] = [
    "Book an urgent appointment with a counselor for immediate support",
    "Take the \"Relapse Prevention\" course",
    "Reach out to professional support services",
];

/// Next-step suggestions for a risk tier, in presentation order.
///
/// Deterministic: the catalog is fixed per tier and currently shared across
/// all survey types, so two assessments landing in the same tier always see
/// the same list.
pub fn recommendations_for(level: RiskLevel, survey_type: SurveyType) -> Vec<String> {
    let catalog: &[&str] = match survey_type {
        SurveyType::Assist | SurveyType::Crafft | SurveyType::Custom => match level {
            RiskLevel::Low => &LOW_RISK,
            RiskLevel::Moderate => &MODERATE_RISK,
            RiskLevel::High => &HIGH_RISK,
        },
    };

    catalog.iter().map(|entry| entry.to_string()).collect()
}
