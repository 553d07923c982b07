use super::domain::{AnswerSet, ScoredAnswer, Survey};

/// Totals and per-question breakdown for a fully answered survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub total: u32,
    pub max: u32,
    pub answers: Vec<ScoredAnswer>,
}

/// Reduce a completed answer set to its totals.
///
/// Pure: no state, no side effects. The session gate guarantees every slot
/// is answered before this runs; the checks here defend against direct
/// misuse rather than silently producing a wrong score.
pub fn score(survey: &Survey, answers: &AnswerSet) -> Result<ScoreCard, ScoringError> {
    let missing = answers.unanswered_count();
    if missing > 0 {
        return Err(ScoringError::Incomplete { missing });
    }

    let mut total = 0u32;
    let mut max = 0u32;
    let mut scored = Vec::with_capacity(survey.questions.len());

    for (index, question) in survey.questions.iter().enumerate() {
        let selected = answers
            .selected(index)
            .ok_or(ScoringError::Incomplete { missing: 1 })?;
        let score = *question
            .scores
            .get(selected)
            .ok_or(ScoringError::SelectionOutOfRange {
                question: index,
                selected,
            })?;

        total += score;
        max += question.max_score();
        scored.push(ScoredAnswer {
            question_id: question.id.clone(),
            selected_option: selected,
            score,
        });
    }

    Ok(ScoreCard {
        total,
        max,
        answers: scored,
    })
}

/// Invariant violation detected while scoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("assessment incomplete: {missing} unanswered question(s)")]
    Incomplete { missing: usize },
    #[error("question {question} has no option at index {selected}")]
    SelectionOutOfRange { question: usize, selected: usize },
}
