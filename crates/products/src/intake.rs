//! Intake orchestration: classify, validate, build, persist.

use thiserror::Error;
use tracing::{debug, error, info};

use vanity_core::{DomainError, DomainResult};

use crate::category::CategoryRegistry;
use crate::classifier::RangeClassifier;
use crate::outcome::OutcomeResult;
use crate::product::{Product, ProductFactory};
use crate::store::ProductStore;
use crate::submission::{ClassifiedSubmission, Submission, Tier};
use crate::validation::ValidationChain;

/// Faults raised by [`IntakeEngine::submit`].
///
/// Rejected submissions are not errors; they come back as an `Ok` outcome with
/// a negative status code.
#[derive(Debug, Error)]
pub enum IntakeError<E> {
    /// The store failed. Carries the store's own error.
    #[error("product store failed to persist product")]
    Store(#[source] E),

    /// Validation accepted a submission the factory cannot build.
    #[error("intake invariant violated: {0}")]
    Invariant(DomainError),
}

/// The intake pipeline. Holds only immutable rule data, so one engine can serve
/// any number of callers.
#[derive(Debug)]
pub struct IntakeEngine {
    classifier: RangeClassifier,
    validation: ValidationChain,
    factory: ProductFactory,
}

impl IntakeEngine {
    /// Standard rules over `registry`. Validation and the factory share it.
    pub fn new(registry: CategoryRegistry) -> Self {
        Self {
            classifier: RangeClassifier::standard(),
            validation: ValidationChain::standard(&registry),
            factory: ProductFactory::new(registry),
        }
    }

    pub fn standard() -> Self {
        Self::new(CategoryRegistry::standard())
    }

    pub fn from_parts(
        classifier: RangeClassifier,
        validation: ValidationChain,
        factory: ProductFactory,
    ) -> Self {
        Self {
            classifier,
            validation,
            factory,
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        self.factory.registry()
    }

    pub fn classify(&self, submission: &Submission) -> Tier {
        self.classifier.classify(submission)
    }

    pub fn validate(&self, classified: &ClassifiedSubmission<'_>) -> Option<OutcomeResult> {
        self.validation.validate(classified)
    }

    pub fn build(&self, category: &str, submission: &Submission, tier: Tier) -> DomainResult<Product> {
        self.factory.build(category, submission, tier)
    }

    /// Run one submission through the pipeline and persist it when accepted.
    pub fn submit<S>(&self, raw: &Submission, store: &S) -> Result<OutcomeResult, IntakeError<S::Error>>
    where
        S: ProductStore + ?Sized,
    {
        let tier = self.classify(raw);
        debug!(category = %raw.category, %tier, "classified submission");

        let classified = ClassifiedSubmission::new(raw, tier);
        if let Some(rejection) = self.validate(&classified) {
            info!(
                category = %raw.category,
                status_code = rejection.status_code,
                message = %rejection.message,
                "submission rejected"
            );
            return Ok(rejection);
        }

        let product = self.build(&raw.category, raw, tier).map_err(|e| {
            error!(category = %raw.category, error = %e, "validated category missing from registry");
            IntakeError::Invariant(e)
        })?;

        let assigned_id = store.persist(product).map_err(|e| {
            error!(category = %raw.category, error = %e, "product store failed");
            IntakeError::Store(e)
        })?;

        info!(assigned_id, category = %raw.category, %tier, "product stored");
        Ok(OutcomeResult::success(assigned_id))
    }
}

impl Default for IntakeEngine {
    fn default() -> Self {
        Self::standard()
    }
}
