//! Cosmetic product intake domain.
//!
//! Decides whether a submitted product is accepted, which tier it belongs to,
//! and what canonical record gets stored. Pure, deterministic domain logic: the
//! only side effect is the call into the injected [`ProductStore`].

pub mod category;
pub mod classifier;
pub mod intake;
pub mod outcome;
pub mod product;
pub mod store;
pub mod submission;
pub mod validation;

pub use category::{CategoryDefinition, CategoryRegistry, ProductFamily};
pub use classifier::{RangeClassifier, TierOverride};
pub use intake::{IntakeEngine, IntakeError};
pub use outcome::{OutcomeResult, RejectionKind};
pub use product::{Product, ProductFactory};
pub use store::ProductStore;
pub use submission::{ClassifiedSubmission, Submission, Tier};
pub use validation::{RejectionMessage, ValidationChain, ValidationRule};
