use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{AnswerSet, AssessmentOutcome, MalformedSurvey, Survey};
use super::recommendation::recommendations_for;
use super::risk::RiskThresholds;
use super::scoring::{self, ScoringError};

/// The wizard state machine driving a single pass through one survey.
///
/// A session starts at question 0 with every answer blank, enforces
/// answer-before-advance, and allows moving back without losing prior
/// selections. Reaching the end runs the scoring pipeline exactly once and
/// caches the [`AssessmentOutcome`]; a completed session accepts no further
/// mutation. Starting over means constructing a fresh session.
#[derive(Debug)]
pub struct AssessmentSession {
    survey: Arc<Survey>,
    thresholds: RiskThresholds,
    answers: AnswerSet,
    current: usize,
    state: SessionState,
}

#[derive(Debug)]
enum SessionState {
    InProgress,
    Completed(AssessmentOutcome),
}

/// What `next()` did: moved to another question, or finished the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAdvance {
    Question(usize),
    Completed,
}

/// Wizard position for progress displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub current: usize,
    pub total: usize,
}

impl SessionProgress {
    pub const fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        (self.current * 100 / self.total) as u32
    }
}

impl AssessmentSession {
    /// Begin a session over a validated survey.
    ///
    /// `fallback` supplies the risk bands for surveys that carry no
    /// per-survey override.
    pub fn start(survey: Arc<Survey>, fallback: RiskThresholds) -> Result<Self, MalformedSurvey> {
        survey.validate()?;
        let thresholds = survey.thresholds.unwrap_or(fallback);
        let answers = AnswerSet::new(survey.questions.len());

        Ok(Self {
            survey,
            thresholds,
            answers,
            current: 0,
            state: SessionState::InProgress,
        })
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    /// Record an answer for the current question without advancing.
    ///
    /// Re-selecting simply overwrites the earlier choice.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        self.ensure_in_progress()?;

        let available = self.survey.questions[self.current].options.len();
        if option >= available {
            return Err(SessionError::InvalidSelection {
                index: self.current,
                selected: option,
                available,
            });
        }

        self.answers.select(self.current, option);
        Ok(())
    }

    /// Advance to the next question, or complete the assessment from the
    /// last one. The current question must be answered first; failing that
    /// leaves the session untouched so the caller can re-prompt.
    pub fn next(&mut self) -> Result<StepAdvance, SessionError> {
        self.ensure_in_progress()?;

        if !self.answers.answered(self.current) {
            return Err(SessionError::UnansweredStep {
                index: self.current,
            });
        }

        if self.current + 1 < self.survey.questions.len() {
            self.current += 1;
            return Ok(StepAdvance::Question(self.current));
        }

        let outcome = self.complete()?;
        self.state = SessionState::Completed(outcome);
        Ok(StepAdvance::Completed)
    }

    /// Step back to the previous question. Earlier selections stay put, so
    /// revisiting a step shows the prior choice.
    pub fn back(&mut self) -> Result<usize, SessionError> {
        self.ensure_in_progress()?;

        if self.current == 0 {
            return Err(SessionError::AtFirstQuestion);
        }

        self.current -= 1;
        Ok(self.current)
    }

    /// Current wizard position; pure read, valid in any state.
    pub fn progress(&self) -> SessionProgress {
        let total = self.survey.questions.len();
        let current = match self.state {
            SessionState::InProgress => self.current,
            SessionState::Completed(_) => total,
        };
        SessionProgress { current, total }
    }

    /// Option previously selected for the current question, if any.
    pub fn current_selection(&self) -> Option<usize> {
        self.answers.selected(self.current)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Completed(_))
    }

    /// The cached outcome of a completed assessment.
    pub fn result(&self) -> Result<&AssessmentOutcome, SessionError> {
        match &self.state {
            SessionState::Completed(outcome) => Ok(outcome),
            SessionState::InProgress => Err(SessionError::SessionNotComplete),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::InProgress => Ok(()),
            SessionState::Completed(_) => Err(SessionError::SessionComplete),
        }
    }

    fn complete(&self) -> Result<AssessmentOutcome, SessionError> {
        let card = scoring::score(&self.survey, &self.answers)?;
        let risk_level = self.thresholds.classify(card.total);
        let recommendations = recommendations_for(risk_level, self.survey.survey_type);

        info!(
            survey = %self.survey.id.0,
            total = card.total,
            max = card.max,
            risk = risk_level.label(),
            "assessment completed"
        );

        Ok(AssessmentOutcome {
            total_score: card.total,
            max_score: card.max,
            risk_level,
            recommendations,
            answers: card.answers,
            completed_at: Utc::now(),
        })
    }
}

/// Failures raised by session operations. All are synchronous and leave the
/// session state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("option {selected} is out of range for question {index} ({available} options)")]
    InvalidSelection {
        index: usize,
        selected: usize,
        available: usize,
    },
    #[error("question {index} must be answered before advancing")]
    UnansweredStep { index: usize },
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("assessment is not complete yet")]
    SessionNotComplete,
    #[error("assessment is already complete")]
    SessionComplete,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
