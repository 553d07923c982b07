use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::domain::{MalformedSurvey, Survey, SurveyId, SurveyType};

/// Storage abstraction for survey definitions.
///
/// The engine only ever asks "give me a survey by id"; where the definition
/// actually lives (REST backend, seeded fixtures, admin CMS) is the
/// implementor's business.
pub trait SurveyRepository: Send + Sync {
    fn survey(&self, id: &SurveyId) -> Result<Arc<Survey>, RepositoryError>;
    fn list(&self) -> Result<Vec<SurveySummary>, RepositoryError>;
}

/// Error enumeration for survey store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("survey not found")]
    NotFound,
    #[error("survey already exists")]
    Conflict,
    #[error(transparent)]
    Malformed(#[from] MalformedSurvey),
    #[error("survey store unavailable: {0}")]
    Unavailable(String),
}

/// Catalog row describing an available survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveySummary {
    pub id: SurveyId,
    pub title: String,
    pub survey_type: SurveyType,
    pub question_count: usize,
}

/// In-memory survey store.
///
/// Every survey is validated on the way in, so a malformed definition fails
/// at load time instead of surfacing later as a wrong score.
#[derive(Debug, Default)]
pub struct InMemorySurveyRepository {
    surveys: Mutex<BTreeMap<SurveyId, Arc<Survey>>>,
}

impl InMemorySurveyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON array of survey definitions, the format the
    /// content collaborator delivers.
    pub fn from_json(payload: &str) -> Result<Self, SurveyLoadError> {
        let surveys: Vec<Survey> = serde_json::from_str(payload)?;
        let store = Self::new();
        for survey in surveys {
            store.insert(survey)?;
        }
        Ok(store)
    }

    pub fn insert(&self, survey: Survey) -> Result<(), RepositoryError> {
        survey.validate()?;
        let mut guard = self.lock()?;
        if guard.contains_key(&survey.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(survey.id.clone(), Arc::new(survey));
        Ok(())
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<SurveyId, Arc<Survey>>>, RepositoryError> {
        self.surveys
            .lock()
            .map_err(|_| RepositoryError::Unavailable("survey store lock poisoned".to_string()))
    }
}

impl SurveyRepository for InMemorySurveyRepository {
    fn survey(&self, id: &SurveyId) -> Result<Arc<Survey>, RepositoryError> {
        let guard = self.lock()?;
        guard.get(id).cloned().ok_or(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<SurveySummary>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .values()
            .map(|survey| SurveySummary {
                id: survey.id.clone(),
                title: survey.title.clone(),
                survey_type: survey.survey_type,
                question_count: survey.questions.len(),
            })
            .collect())
    }
}

/// Failure while loading a batch of survey definitions.
#[derive(Debug, thiserror::Error)]
pub enum SurveyLoadError {
    #[error("survey payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}
