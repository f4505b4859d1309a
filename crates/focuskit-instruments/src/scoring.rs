use std::collections::BTreeMap;

use focuskit_core::models::category::Category;
use focuskit_core::models::question::Question;
use focuskit_core::models::response::ResponseOption;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AssessmentError;

/// Severity band for a single category subscore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CategoryBand {
    Minimal,
    Mild,
    Moderate,
    Elevated,
}

impl CategoryBand {
    /// Thresholds are checked high to low; first match wins.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            CategoryBand::Elevated
        } else if percentage >= 50.0 {
            CategoryBand::Moderate
        } else if percentage >= 30.0 {
            CategoryBand::Mild
        } else {
            CategoryBand::Minimal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
    /// 3 × number of questions in the category.
    pub max: u32,
}

impl CategoryScore {
    pub fn percentage(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.score) * 100.0 / f64::from(self.max)
    }

    pub fn band(&self) -> CategoryBand {
        CategoryBand::from_percentage(self.percentage())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub total: u32,
    pub max_total: u32,
    /// Number of questions that had a response.
    pub answered: usize,
    pub question_count: usize,
    /// One entry per category present in the question set, in category order.
    pub category_scores: Vec<CategoryScore>,
}

impl ScoreResult {
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.category_scores.iter().find(|c| c.category == category)
    }

    pub fn is_complete(&self) -> bool {
        self.answered == self.question_count
    }
}

/// Highest achievable total for a question set.
pub fn max_total(questions: &[Question]) -> u32 {
    questions.len() as u32 * u32::from(ResponseOption::MAX_VALUE)
}

/// Responses must pair one-to-one with questions.
pub(crate) fn check_len<T>(responses: &[T], questions: &[Question]) -> Result<(), AssessmentError> {
    if responses.len() != questions.len() {
        return Err(AssessmentError::InvalidInput(format!(
            "expected {} responses, got {}",
            questions.len(),
            responses.len()
        )));
    }
    Ok(())
}

/// Sum responses into a total and per-category subscores.
///
/// Unanswered entries count as 0. `responses` must line up one-to-one with
/// `questions`.
pub fn score(
    responses: &[Option<ResponseOption>],
    questions: &[Question],
) -> Result<ScoreResult, AssessmentError> {
    check_len(responses, questions)?;

    let max_per_item = u32::from(ResponseOption::MAX_VALUE);
    let mut categories: BTreeMap<Category, CategoryScore> = BTreeMap::new();
    let mut total = 0;
    let mut answered = 0;

    for (question, response) in questions.iter().zip(responses) {
        let value = response.map_or(0, |o| u32::from(o.value()));
        if response.is_some() {
            answered += 1;
        }
        total += value;

        let entry = categories
            .entry(question.category)
            .or_insert_with(|| CategoryScore {
                category: question.category,
                score: 0,
                max: 0,
            });
        entry.score += value;
        entry.max += max_per_item;
    }

    Ok(ScoreResult {
        total,
        max_total: max_total(questions),
        answered,
        question_count: questions.len(),
        category_scores: categories.into_values().collect(),
    })
}

/// Like [`score`], but takes raw integers and rejects anything off the 0–3
/// scale.
pub fn score_values(
    responses: &[Option<u8>],
    questions: &[Question],
) -> Result<ScoreResult, AssessmentError> {
    let options = parse_values(responses)?;
    score(&options, questions)
}

pub fn parse_values(responses: &[Option<u8>]) -> Result<Vec<Option<ResponseOption>>, AssessmentError> {
    responses
        .iter()
        .map(|r| r.map(ResponseOption::try_from).transpose())
        .collect::<Result<Vec<_>, _>>()
        .map_err(AssessmentError::from)
}
