//! Assessment session and risk scoring engine for the counseling platform.
//!
//! The surrounding application owns survey authoring, accounts, scheduling,
//! and every screen the user sees. This crate owns the one part with real
//! decision logic: the self-assessment wizard. A [`SurveyRepository`] hands
//! out validated survey definitions, an [`AssessmentSession`] walks the user
//! through them one question at a time, and on completion the session reduces
//! the answers to a score, a risk tier, and a set of recommended next steps.

pub mod assessment;
pub mod config;
pub mod telemetry;

pub use assessment::domain::{
    AnswerSet, AssessmentOutcome, MalformedSurvey, Question, RiskLevel, ScoredAnswer, Survey,
    SurveyId, SurveyType,
};
pub use assessment::recommendation::recommendations_for;
pub use assessment::repository::{
    InMemorySurveyRepository, RepositoryError, SurveyLoadError, SurveyRepository, SurveySummary,
};
pub use assessment::risk::RiskThresholds;
pub use assessment::scoring::{ScoreCard, ScoringError};
pub use assessment::service::{AssessmentService, AssessmentServiceError};
pub use assessment::session::{
    AssessmentSession, SessionError, SessionProgress, StepAdvance,
};
