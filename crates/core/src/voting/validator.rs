//! Draft vote validation

use chrono::NaiveDate;
use datevote_common::validation::{EmailShapeValidator, FieldValidator, NonBlankValidator};
use datevote_domain::{DraftVote, ValidationFailure};

/// Checks a draft vote before anything is written.
///
/// Reports the first failure only, in this order: name, responses, email.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoteValidator {
    name: NonBlankValidator,
    email: EmailShapeValidator,
}

impl VoteValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self, draft: &DraftVote, dates: &[NaiveDate]) -> Result<(), ValidationFailure> {
        if !self.name.is_valid(draft.name.as_str()) {
            return Err(ValidationFailure::MissingName);
        }

        let missing: Vec<NaiveDate> = draft.unanswered(dates).into_iter().copied().collect();
        if !missing.is_empty() {
            return Err(ValidationFailure::IncompleteResponses { missing });
        }

        // Empty email is allowed; anything else must look like an address.
        if !draft.email.is_empty() && !self.email.is_valid(draft.email.as_str()) {
            return Err(ValidationFailure::InvalidEmail);
        }

        Ok(())
    }
}
