use focuskit_core::models::response::ResponseOption;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::classification::{self, Classification};
use crate::error::AssessmentError;
use crate::scoring::ScoreResult;

/// Final result of a completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentOutcome {
    pub instrument_id: String,
    pub instrument_name: String,
    pub responses: Vec<Option<ResponseOption>>,
    pub score: ScoreResult,
    pub classification: Classification,
    pub disclaimer: String,
}

/// Run the scoring → classification pipeline for one response vector.
pub fn evaluate(
    instrument: &dyn Instrument,
    responses: &[Option<ResponseOption>],
) -> Result<AssessmentOutcome, AssessmentError> {
    let score = instrument.score(responses)?;
    let classification = classification::classify(score.total, score.max_total)?;

    tracing::info!(
        instrument = instrument.id(),
        total = score.total,
        max_total = score.max_total,
        answered = score.answered,
        percentage = classification.percentage,
        tier = %classification.tier,
        "assessment evaluated"
    );

    Ok(AssessmentOutcome {
        instrument_id: instrument.id().to_string(),
        instrument_name: instrument.name().to_string(),
        responses: responses.to_vec(),
        score,
        classification,
        disclaimer: instrument.disclaimer().to_string(),
    })
}
