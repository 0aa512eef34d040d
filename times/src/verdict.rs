use serde::Serialize;

use crate::entry::CandidateEntry;
use crate::verify::{verify, Acceptance, FieldName, Violation};
use crate::Date;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

impl From<Violation> for FieldError {
    fn from(violation: Violation) -> Self {
        Self {
            field: violation.field(),
            message: violation.to_string(),
        }
    }
}

/// The accept/reject decision sent back to the client.
///
/// `errors` holds one entry per broken rule. The rule chain stops at the first one, but
/// consumers should not rely on the length.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Verdict {
    pub status: Status,
    pub errors: Vec<FieldError>,
}

impl Verdict {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl From<Result<Acceptance, Violation>> for Verdict {
    fn from(result: Result<Acceptance, Violation>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(violation) => Self {
                status: Status::Error,
                errors: vec![violation.into()],
            },
        }
    }
}

#[must_use]
pub fn validate(entry: &CandidateEntry, today: Date) -> Verdict {
    verify(entry, today).into()
}
