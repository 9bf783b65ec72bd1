//! Ordered rejection rules.
//!
//! Rules are evaluated in registration order and evaluation stops at the first
//! match. Rules overlap, so reordering them changes which failure a caller sees.

use std::collections::BTreeSet;

use crate::category::{BLUSHER, CategoryRegistry, LIPSTICK};
use crate::outcome::{OutcomeResult, QUEEN_QUALITY_FAILURE, RejectionKind};
use crate::submission::{ClassifiedSubmission, Tier};

type Predicate = Box<dyn Fn(&ClassifiedSubmission<'_>) -> bool + Send + Sync>;

/// Message attached to a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionMessage {
    Fixed(&'static str),
    /// `prefix` followed by the submitted category.
    WithCategory(&'static str),
}

impl RejectionMessage {
    fn render(self, classified: &ClassifiedSubmission<'_>) -> String {
        match self {
            RejectionMessage::Fixed(msg) => msg.to_string(),
            RejectionMessage::WithCategory(prefix) => {
                format!("{prefix}{}", classified.submission.category)
            }
        }
    }
}

/// A predicate plus the rejection it produces.
pub struct ValidationRule {
    name: &'static str,
    predicate: Predicate,
    kind: RejectionKind,
    message: RejectionMessage,
}

impl ValidationRule {
    pub fn new(
        name: &'static str,
        predicate: impl Fn(&ClassifiedSubmission<'_>) -> bool + Send + Sync + 'static,
        kind: RejectionKind,
        message: RejectionMessage,
    ) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
            kind,
            message,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn check(&self, classified: &ClassifiedSubmission<'_>) -> Option<OutcomeResult> {
        (self.predicate)(classified)
            .then(|| OutcomeResult::rejected(self.kind, self.message.render(classified)))
    }
}

impl core::fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct ValidationChain {
    rules: Vec<ValidationRule>,
}

impl ValidationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shop's rule set, with `registry` as the set of known categories.
    pub fn standard(registry: &CategoryRegistry) -> Self {
        Self::with_known_categories(registry.names().map(str::to_string))
    }

    pub fn with_known_categories(known: impl IntoIterator<Item = String>) -> Self {
        let known: BTreeSet<String> = known.into_iter().collect();

        Self::new()
            .rule(ValidationRule::new(
                "missing_name",
                |c| c.submission.name.is_empty(),
                RejectionKind::MissingField,
                RejectionMessage::Fixed("Missing Name"),
            ))
            .rule(ValidationRule::new(
                "missing_category",
                |c| c.submission.category.is_empty(),
                RejectionKind::MissingField,
                RejectionMessage::Fixed("Missing Type"),
            ))
            .rule(ValidationRule::new(
                "light_premium_lipstick",
                |c| {
                    let s = c.submission;
                    s.category == LIPSTICK
                        && s.suggested_price > 20.0
                        && s.weight > 0.0
                        && s.weight < 10.0
                },
                RejectionKind::BusinessRule,
                RejectionMessage::Fixed(QUEEN_QUALITY_FAILURE),
            ))
            .rule(ValidationRule::new(
                "negative_weight",
                |c| c.submission.weight < 0.0,
                RejectionKind::PhysicalConstraint,
                RejectionMessage::Fixed("Weight error"),
            ))
            .rule(ValidationRule::new(
                "heavy_blusher",
                |c| c.submission.category == BLUSHER && c.submission.weight > 10.0,
                RejectionKind::PhysicalConstraint,
                RejectionMessage::Fixed("Error - weight too high"),
            ))
            .rule(ValidationRule::new(
                "unknown_category",
                move |c| !known.contains(&c.submission.category),
                RejectionKind::BusinessRule,
                RejectionMessage::WithCategory("Unknown product type "),
            ))
            .rule(ValidationRule::new(
                "queen_without_recyclable_packaging",
                |c| !c.submission.packaging_recyclable && c.tier == Tier::Queen,
                RejectionKind::BusinessRule,
                RejectionMessage::Fixed(QUEEN_QUALITY_FAILURE),
            ))
    }

    /// Append a rule after the existing ones.
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// First failing rule's rejection, or `None` when every rule passes.
    pub fn validate(&self, classified: &ClassifiedSubmission<'_>) -> Option<OutcomeResult> {
        self.rules.iter().find_map(|rule| rule.check(classified))
    }

    /// Like [`validate`](Self::validate), but reports a pass as the zero-status sentinel.
    pub fn evaluate(&self, classified: &ClassifiedSubmission<'_>) -> OutcomeResult {
        self.validate(classified).unwrap_or_else(OutcomeResult::passed)
    }
}
