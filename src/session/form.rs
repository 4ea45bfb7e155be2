use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Lifecycle of a single form. A result and an in-flight submission never coexist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Finished(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a submission is already in progress")]
pub struct AlreadySubmitting;

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            SubmitPhase::Finished(o) => Some(*o),
            _ => None,
        }
    }

    /// Enter `Submitting`, dropping any previous result.
    pub fn begin(&mut self) -> Result<(), AlreadySubmitting> {
        if self.is_submitting() {
            return Err(AlreadySubmitting);
        }
        *self = SubmitPhase::Submitting;
        Ok(())
    }

    /// Record the outcome of the in-flight submission. Returns false when nothing
    /// was in flight.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if !self.is_submitting() {
            return false;
        }
        *self = SubmitPhase::Finished(outcome);
        true
    }

    /// Back to idle without a result (dropped or cancelled submission).
    pub fn abandon(&mut self) {
        if self.is_submitting() {
            *self = SubmitPhase::Idle;
        }
    }
}
