use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::risk::RiskThresholds;

/// Identifier wrapper for survey definitions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SurveyId(pub String);

/// Screening instrument family a survey belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyType {
    Assist,
    Crafft,
    Custom,
}

impl SurveyType {
    pub const fn label(self) -> &'static str {
        match self {
            SurveyType::Assist => "ASSIST",
            SurveyType::Crafft => "CRAFFT",
            SurveyType::Custom => "custom",
        }
    }
}

/// Risk tier derived from a completed assessment's total score.
///
/// Ordered so that a higher tier compares greater than a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }

    /// Summary message shown alongside the result for this tier.
    pub const fn advisory(self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Your substance-use risk is low. Keep up a healthy lifestyle \
                 and stay informed."
            }
            RiskLevel::Moderate => {
                "Your substance-use risk is moderate. Review the suggestions \
                 below and consider speaking with a counselor."
            }
            RiskLevel::High => {
                "Your substance-use risk is high. Please contact a counselor \
                 right away for support."
            }
        }
    }
}

/// A single prompt with mutually exclusive options.
///
/// `options` and `scores` are parallel: the option at index `i` carries the
/// score at index `i`. [`Survey::validate`] rejects definitions where the
/// two fall out of step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub scores: Vec<u32>,
}

impl Question {
    /// Highest score any option of this question can contribute.
    pub fn max_score(&self) -> u32 {
        self.scores.iter().copied().max().unwrap_or(0)
    }
}

/// Immutable questionnaire definition delivered by the content repository.
///
/// `thresholds` lets an individual survey override the global risk bands;
/// most surveys leave it unset and inherit the configured defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub id: SurveyId,
    pub title: String,
    pub description: String,
    pub survey_type: SurveyType,
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<RiskThresholds>,
}

impl Survey {
    /// Check the structural invariants an authored survey must satisfy.
    ///
    /// Runs before any session is constructed so a malformed definition
    /// fails at load time, never as a silently wrong score.
    pub fn validate(&self) -> Result<(), MalformedSurvey> {
        if self.questions.is_empty() {
            return Err(MalformedSurvey::NoQuestions {
                survey: self.id.clone(),
            });
        }

        for question in &self.questions {
            if question.options.len() != question.scores.len() {
                return Err(MalformedSurvey::OptionScoreMismatch {
                    question: question.id.clone(),
                    options: question.options.len(),
                    scores: question.scores.len(),
                });
            }
            if question.options.len() < 2 {
                return Err(MalformedSurvey::TooFewOptions {
                    question: question.id.clone(),
                    count: question.options.len(),
                });
            }
        }

        if let Some(thresholds) = self.thresholds {
            if !thresholds.is_ordered() {
                return Err(MalformedSurvey::InvalidThresholds {
                    moderate: thresholds.moderate,
                    high: thresholds.high,
                });
            }
        }

        Ok(())
    }
}

/// Data-integrity failure in a survey delivered by the content collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedSurvey {
    #[error("survey '{}' has no questions", survey.0)]
    NoQuestions { survey: SurveyId },
    #[error("question '{question}' has {options} option(s) but {scores} score(s)")]
    OptionScoreMismatch {
        question: String,
        options: usize,
        scores: usize,
    },
    #[error("question '{question}' needs at least 2 options, found {count}")]
    TooFewOptions { question: String, count: usize },
    #[error("risk thresholds are inverted: moderate {moderate} must be below high {high}")]
    InvalidThresholds { moderate: u32, high: u32 },
}

/// Per-question answer record for an in-progress assessment.
///
/// One slot per survey question, `None` until the user picks an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    slots: Vec<Option<usize>>,
}

impl AnswerSet {
    pub fn new(questions: usize) -> Self {
        Self {
            slots: vec![None; questions],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn select(&mut self, index: usize, option: usize) {
        self.slots[index] = Some(option);
    }

    pub fn selected(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied().flatten()
    }

    pub fn answered(&self, index: usize) -> bool {
        self.selected(index).is_some()
    }

    pub fn unanswered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

/// How one answered question contributed to the total score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_id: String,
    pub selected_option: usize,
    pub score: u32,
}

/// Final result of a completed assessment, computed once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub total_score: u32,
    pub max_score: u32,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub answers: Vec<ScoredAnswer>,
    pub completed_at: DateTime<Utc>,
}
