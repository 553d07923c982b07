use std::sync::Arc;

use crate::assessment::domain::{Question, Survey, SurveyId, SurveyType};
use crate::assessment::repository::{
    InMemorySurveyRepository, RepositoryError, SurveyRepository, SurveySummary,
};
use crate::assessment::risk::RiskThresholds;
use crate::assessment::service::AssessmentService;
use crate::assessment::session::{AssessmentSession, StepAdvance};

pub(super) fn question(id: &str, text: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: vec![
            "Never".to_string(),
            "Once or twice".to_string(),
            "Monthly".to_string(),
            "Weekly or more".to_string(),
        ],
        scores: vec![0, 1, 2, 3],
    }
}

/// Three questions, four options each, scores 0..=3 per question.
pub(super) fn screening_survey() -> Survey {
    Survey {
        id: SurveyId("assist-screen".to_string()),
        title: "Substance use screening".to_string(),
        description: "Short screening questionnaire".to_string(),
        survey_type: SurveyType::Assist,
        questions: vec![
            question("q1", "How often have you used tobacco products?"),
            question("q2", "How often have you used alcohol?"),
            question("q3", "How often have you used other substances?"),
        ],
        thresholds: None,
    }
}

pub(super) fn survey_with_override(moderate: u32, high: u32) -> Survey {
    let mut survey = screening_survey();
    survey.id = SurveyId("custom-screen".to_string());
    survey.survey_type = SurveyType::Custom;
    survey.thresholds = Some(RiskThresholds { moderate, high });
    survey
}

pub(super) fn session() -> AssessmentSession {
    AssessmentSession::start(Arc::new(screening_survey()), RiskThresholds::default())
        .expect("screening survey is well formed")
}

/// Drive a session to completion with one pick per question.
pub(super) fn answer_all(session: &mut AssessmentSession, picks: &[usize]) {
    for &pick in picks {
        session.select_answer(pick).expect("pick in range");
        session.next().expect("current question answered");
    }
}

pub(super) fn seeded_repository() -> Arc<InMemorySurveyRepository> {
    let repository = InMemorySurveyRepository::new();
    repository
        .insert(screening_survey())
        .expect("seed survey inserts");
    Arc::new(repository)
}

pub(super) fn build_service() -> AssessmentService<InMemorySurveyRepository> {
    AssessmentService::new(seeded_repository(), RiskThresholds::default())
}

pub(super) struct UnavailableRepository;

impl SurveyRepository for UnavailableRepository {
    fn survey(&self, _id: &SurveyId) -> Result<Arc<Survey>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn list(&self) -> Result<Vec<SurveySummary>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }
}

pub(super) fn assert_completed(advance: StepAdvance) {
    assert_eq!(advance, StepAdvance::Completed);
}
