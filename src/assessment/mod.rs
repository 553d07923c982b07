//! Self-assessment questionnaire flow: survey definitions, the step-by-step
//! session state machine, and the scoring → risk → recommendation pipeline
//! that runs when a session completes.

pub mod domain;
pub mod recommendation;
pub mod repository;
pub mod risk;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerSet, AssessmentOutcome, MalformedSurvey, Question, RiskLevel, ScoredAnswer, Survey,
    SurveyId, SurveyType,
};
pub use recommendation::recommendations_for;
pub use repository::{
    InMemorySurveyRepository, RepositoryError, SurveyLoadError, SurveyRepository, SurveySummary,
};
pub use risk::RiskThresholds;
pub use scoring::{ScoreCard, ScoringError};
pub use service::{AssessmentService, AssessmentServiceError};
pub use session::{AssessmentSession, SessionError, SessionProgress, StepAdvance};
