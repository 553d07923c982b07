use std::sync::Arc;

use tracing::info;

use super::domain::{MalformedSurvey, SurveyId};
use super::repository::{RepositoryError, SurveyRepository, SurveySummary};
use super::risk::RiskThresholds;
use super::session::AssessmentSession;

/// Composition root wiring the survey store to the session state machine.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    thresholds: RiskThresholds,
}

impl<R> AssessmentService<R>
where
    R: SurveyRepository + 'static,
{
    /// `thresholds` are the global risk bands applied to surveys without a
    /// per-survey override.
    pub fn new(repository: Arc<R>, thresholds: RiskThresholds) -> Self {
        Self {
            repository,
            thresholds,
        }
    }

    /// Fetch a survey and open a fresh session over it.
    pub fn start_session(
        &self,
        id: &SurveyId,
    ) -> Result<AssessmentSession, AssessmentServiceError> {
        let survey = self.repository.survey(id)?;
        let session = AssessmentSession::start(survey, self.thresholds)?;

        info!(
            survey = %id.0,
            questions = session.progress().total,
            "assessment session started"
        );

        Ok(session)
    }

    /// Catalog of surveys available to take.
    pub fn surveys(&self) -> Result<Vec<SurveySummary>, AssessmentServiceError> {
        Ok(self.repository.list()?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Survey(#[from] MalformedSurvey),
}
