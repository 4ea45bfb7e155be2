use crate::models::LeadSubmission;
use super::form::{AlreadySubmitting, Outcome, SubmitPhase};

pub const LEAD_SUCCESS_MESSAGE: &str = "Thanks! We'll be in touch shortly.";
pub const LEAD_FAILURE_MESSAGE: &str = "We're sorry, something went wrong. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    /// What the visitor last typed; survives a failed submit.
    pub draft: LeadSubmission,
    pub phase: SubmitPhase,
}

impl LeadForm {
    /// Start a submission and hand back the payload to send.
    pub fn begin(&mut self, submitted: LeadSubmission) -> Result<LeadSubmission, AlreadySubmitting> {
        self.phase.begin()?;
        self.draft = submitted.clone();
        Ok(submitted)
    }

    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if !self.phase.finish(outcome) {
            return false;
        }
        if outcome == Outcome::Success {
            self.draft = LeadSubmission::default();
        }
        true
    }

    pub fn message(&self) -> Option<&'static str> {
        self.phase.outcome().map(|o| match o {
            Outcome::Success => LEAD_SUCCESS_MESSAGE,
            Outcome::Failure => LEAD_FAILURE_MESSAGE,
        })
    }

    pub fn button_label(&self) -> &'static str {
        if self.phase.is_submitting() {
            "Submitting..."
        } else {
            "Send"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> LeadSubmission {
        LeadSubmission {
            name: "Alex Johnson".into(),
            email: "alex@email.com".into(),
            phone: "(555) 555-5555".into(),
            message: "Franchise in Austin".into(),
        }
    }

    #[test]
    fn success_clears_the_fields() {
        let mut form = LeadForm::default();
        form.begin(alex()).unwrap();
        assert_eq!(form.button_label(), "Submitting...");
        assert!(form.finish(Outcome::Success));
        assert_eq!(form.draft, LeadSubmission::default());
        assert_eq!(form.message(), Some(LEAD_SUCCESS_MESSAGE));
    }

    #[test]
    fn failure_keeps_the_fields() {
        let mut form = LeadForm::default();
        form.begin(alex()).unwrap();
        form.finish(Outcome::Failure);
        assert_eq!(form.draft, alex());
        assert_eq!(form.message(), Some(LEAD_FAILURE_MESSAGE));
        assert_eq!(form.button_label(), "Send");
    }

    #[test]
    fn no_message_while_submitting() {
        let mut form = LeadForm::default();
        form.begin(alex()).unwrap();
        form.finish(Outcome::Failure);
        form.begin(alex()).unwrap();
        assert_eq!(form.message(), None);
    }
}
