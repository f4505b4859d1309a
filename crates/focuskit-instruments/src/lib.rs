//! focuskit-instruments
//!
//! Self-report screening instruments and the logic around them: the fixed
//! question bank, scoring into totals and category subscores, likelihood
//! classification, and the session state machine that walks a respondent
//! through the questions. Pure logic, no I/O.

pub mod classification;
pub mod error;
pub mod instruments;
pub mod outcome;
pub mod scoring;
pub mod session;

use std::collections::BTreeMap;

use focuskit_core::models::category::Category;
use focuskit_core::models::question::Question;
use focuskit_core::models::response::ResponseOption;

use error::AssessmentError;
use scoring::ScoreResult;

/// Trait implemented by each self-report instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "adhd_self_report").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The questions in presentation order.
    fn questions(&self) -> &[Question];

    /// Shown alongside every result.
    fn disclaimer(&self) -> &str;

    fn max_total(&self) -> u32 {
        scoring::max_total(self.questions())
    }

    /// Score a response vector against this instrument's questions.
    fn score(&self, responses: &[Option<ResponseOption>]) -> Result<ScoreResult, AssessmentError> {
        scoring::score(responses, self.questions())
    }

    /// Format answered questions as structured text, grouped by category,
    /// for use as context in an assistant prompt. `responses` must line up
    /// one-to-one with [`Instrument::questions`].
    fn to_structured_input(
        &self,
        responses: &[Option<ResponseOption>],
    ) -> Result<String, AssessmentError> {
        scoring::check_len(responses, self.questions())?;

        let mut grouped: BTreeMap<Category, Vec<(&Question, ResponseOption)>> = BTreeMap::new();
        for (question, response) in self.questions().iter().zip(responses) {
            if let Some(option) = response {
                grouped
                    .entry(question.category)
                    .or_default()
                    .push((question, *option));
            }
        }

        let mut output = format!("## {}\n\n", self.name());
        for (category, answers) in grouped {
            output.push_str(&format!("### {category}\n"));
            for (question, option) in answers {
                output.push_str(&format!(
                    "- {} {} ({})\n",
                    question.text,
                    option.label(),
                    option.value()
                ));
            }
            output.push('\n');
        }
        Ok(output)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::adhd_self_report::AdhdSelfReport)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, AssessmentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| AssessmentError::UnknownInstrument(id.to_string()))
}
