use std::fmt;

use focuskit_core::models::question::Question;
use focuskit_core::models::response::ResponseOption;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::error::AssessmentError;
use crate::instruments::adhd_self_report::AdhdSelfReport;
use crate::outcome::{self, AssessmentOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionState::NotStarted => "not started",
            SessionState::InProgress => "in progress",
            SessionState::Completed => "completed",
        })
    }
}

/// Session operations that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Answer,
    Next,
    Previous,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Answer => "answer",
            Operation::Next => "advance",
            Operation::Previous => "go back",
        })
    }
}

/// Whether `next()` may leave a question unanswered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NavigationPolicy {
    /// An unanswered question blocks advancement.
    #[default]
    Strict,
    /// Advancement is always allowed; gaps score as 0.
    Lenient,
}

/// Where the session ended up after a successful `next()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Question(usize),
    Completed,
}

/// Read-only snapshot for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionView {
    pub state: SessionState,
    pub current_index: usize,
    pub question_count: usize,
    pub current_question: Option<Question>,
    pub current_response: Option<ResponseOption>,
    pub progress: f64,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub outcome: Option<AssessmentOutcome>,
}

/// A single respondent's pass through an instrument.
///
/// `NotStarted → InProgress → Completed`. `current_index` always points at
/// a valid question; advancing past the last one completes the session
/// instead.
pub struct AssessmentSession {
    instrument: Box<dyn Instrument>,
    policy: NavigationPolicy,
    state: SessionState,
    responses: Vec<Option<ResponseOption>>,
    current_index: usize,
    outcome: Option<AssessmentOutcome>,
}

impl AssessmentSession {
    pub fn new(instrument: Box<dyn Instrument>) -> Result<Self, AssessmentError> {
        if instrument.questions().is_empty() {
            return Err(AssessmentError::InvalidInput(format!(
                "instrument '{}' has no questions",
                instrument.id()
            )));
        }
        Ok(Self::from_instrument(instrument))
    }

    fn from_instrument(instrument: Box<dyn Instrument>) -> Self {
        let count = instrument.questions().len();
        Self {
            instrument,
            policy: NavigationPolicy::default(),
            state: SessionState::NotStarted,
            responses: vec![None; count],
            current_index: 0,
            outcome: None,
        }
    }

    pub fn with_policy(mut self, policy: NavigationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Begin (or restart) the assessment from the first question.
    pub fn start(&mut self) {
        if self.state != SessionState::NotStarted {
            tracing::debug!(state = %self.state, "restarting session");
        }
        self.clear();
        self.state = SessionState::InProgress;
        tracing::debug!(instrument = self.instrument.id(), "session started");
    }

    /// Record a raw 0–3 value for the current question.
    pub fn answer(&mut self, value: u8) -> Result<(), AssessmentError> {
        self.require_in_progress(Operation::Answer)?;
        let option = ResponseOption::try_from(value)?;
        self.answer_option(option)
    }

    pub fn answer_option(&mut self, option: ResponseOption) -> Result<(), AssessmentError> {
        self.require_in_progress(Operation::Answer)?;
        self.responses[self.current_index] = Some(option);
        tracing::debug!(index = self.current_index, value = option.value(), "answer recorded");
        Ok(())
    }

    /// Move to the next question, or complete the session from the last one.
    pub fn next(&mut self) -> Result<Step, AssessmentError> {
        self.require_in_progress(Operation::Next)?;

        if self.policy == NavigationPolicy::Strict && self.responses[self.current_index].is_none() {
            return Err(self.reject(Operation::Next, "current question is unanswered"));
        }

        if self.current_index + 1 < self.question_count() {
            self.current_index += 1;
            tracing::debug!(index = self.current_index, "advanced");
            return Ok(Step::Question(self.current_index));
        }

        let outcome = outcome::evaluate(self.instrument.as_ref(), &self.responses)?;
        self.outcome = Some(outcome);
        self.state = SessionState::Completed;
        Ok(Step::Completed)
    }

    /// Step back one question. Answers are kept.
    pub fn previous(&mut self) -> Result<usize, AssessmentError> {
        self.require_in_progress(Operation::Previous)?;
        if self.current_index == 0 {
            return Err(self.reject(Operation::Previous, "already at the first question"));
        }
        self.current_index -= 1;
        tracing::debug!(index = self.current_index, "went back");
        Ok(self.current_index)
    }

    /// Return to `NotStarted`, discarding all progress. Valid in any state.
    pub fn reset(&mut self) {
        self.clear();
        self.state = SessionState::NotStarted;
        tracing::debug!("session reset");
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn policy(&self) -> NavigationPolicy {
        self.policy
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    pub fn question_count(&self) -> usize {
        self.responses.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question on screen; `None` unless the session is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress => self.instrument.questions().get(self.current_index),
            _ => None,
        }
    }

    pub fn current_response(&self) -> Option<ResponseOption> {
        self.responses[self.current_index]
    }

    pub fn responses(&self) -> &[Option<ResponseOption>] {
        &self.responses
    }

    /// `(current_index + 1) / question_count`.
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.question_count() as f64
    }

    pub fn progress_percent(&self) -> u32 {
        (self.progress() * 100.0).round() as u32
    }

    /// 1-based position, e.g. `(3, 15)` for "Question 3 of 15".
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.question_count())
    }

    pub fn can_advance(&self) -> bool {
        self.state == SessionState::InProgress
            && (self.policy == NavigationPolicy::Lenient
                || self.responses[self.current_index].is_some())
    }

    pub fn can_go_back(&self) -> bool {
        self.state == SessionState::InProgress && self.current_index > 0
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.question_count()
    }

    pub fn outcome(&self) -> Option<&AssessmentOutcome> {
        self.outcome.as_ref()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            state: self.state,
            current_index: self.current_index,
            question_count: self.question_count(),
            current_question: self.current_question().cloned(),
            current_response: self.current_response(),
            progress: self.progress(),
            can_advance: self.can_advance(),
            can_go_back: self.can_go_back(),
            outcome: self.outcome.clone(),
        }
    }

    fn clear(&mut self) {
        self.responses.fill(None);
        self.current_index = 0;
        self.outcome = None;
    }

    fn require_in_progress(&self, operation: Operation) -> Result<(), AssessmentError> {
        if self.state == SessionState::InProgress {
            Ok(())
        } else {
            Err(self.reject(operation, "session must be in progress"))
        }
    }

    fn reject(&self, operation: Operation, reason: &str) -> AssessmentError {
        tracing::warn!(%operation, state = %self.state, index = self.current_index, reason, "operation rejected");
        AssessmentError::InvalidStateTransition {
            operation,
            state: self.state,
            reason: reason.to_string(),
        }
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::from_instrument(Box::new(AdhdSelfReport))
    }
}
