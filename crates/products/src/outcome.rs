use serde::{Deserialize, Serialize};

use vanity_core::ValueObject;

pub const SUCCESS_MESSAGE: &str = "Product Successfully Added";
pub const QUEEN_QUALITY_FAILURE: &str = "Error - failed quality check for Queen Range";

/// Kind of rejection, with its stable status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Business rule: unknown category, failed top-tier quality check.
    BusinessRule,
    /// A required field is empty.
    MissingField,
    /// Weight outside physical bounds.
    PhysicalConstraint,
}

impl RejectionKind {
    pub const fn status_code(self) -> i32 {
        match self {
            RejectionKind::BusinessRule => -1,
            RejectionKind::MissingField => -2,
            RejectionKind::PhysicalConstraint => -3,
        }
    }
}

/// Result handed back to the caller of an intake.
///
/// `status_code == 0` means the product was stored and `assigned_id` is the
/// store's identifier; negative codes are rejections and leave `assigned_id` at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeResult {
    pub assigned_id: u64,
    pub status_code: i32,
    pub message: String,
}

impl OutcomeResult {
    /// The "nothing failed" sentinel produced by a passing validation.
    pub fn passed() -> Self {
        Self {
            assigned_id: 0,
            status_code: 0,
            message: String::new(),
        }
    }

    pub fn success(assigned_id: u64) -> Self {
        Self {
            assigned_id,
            status_code: 0,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn rejected(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self {
            assigned_id: 0,
            status_code: kind.status_code(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 0
    }
}

impl ValueObject for OutcomeResult {}

impl core::fmt::Display for OutcomeResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Response{{id={}, status={}, message='{}'}}",
            self.assigned_id, self.status_code, self.message
        )
    }
}
