//! Tier classification.
//!
//! Every submission starts at a baseline tier (raised by recyclable packaging)
//! and then runs through the overrides registered for its category, in order.
//! Each matching override replaces the running tier, so the most specific
//! condition for a category is registered last.

use std::collections::HashMap;

use crate::category::{EYESHADOW, FOUNDATION, LIPSTICK, MASCARA};
use crate::submission::{Submission, Tier};

/// A single category-scoped override: when `applies` holds, the tier becomes `tier`.
#[derive(Debug, Clone, Copy)]
pub struct TierOverride {
    pub applies: fn(&Submission) -> bool,
    pub tier: Tier,
}

impl TierOverride {
    pub const fn new(applies: fn(&Submission) -> bool, tier: Tier) -> Self {
        Self { applies, tier }
    }
}

/// Maps submissions to tiers. Pure and total.
#[derive(Debug, Clone)]
pub struct RangeClassifier {
    overrides: HashMap<String, Vec<TierOverride>>,
}

impl RangeClassifier {
    /// A classifier with no category overrides (baseline only).
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// The shop's tier rules.
    pub fn standard() -> Self {
        Self::empty()
            .with_overrides(
                EYESHADOW,
                [TierOverride::new(|s| s.name.contains("Queen"), Tier::Queen)],
            )
            .with_overrides(
                FOUNDATION,
                [TierOverride::new(|s| s.suggested_price > 10.0, Tier::Professional)],
            )
            .with_overrides(
                LIPSTICK,
                [
                    TierOverride::new(|s| s.suggested_price > 10.0, Tier::Professional),
                    TierOverride::new(|s| s.suggested_price > 20.0, Tier::Queen),
                ],
            )
            .with_overrides(
                MASCARA,
                [
                    TierOverride::new(|s| s.suggested_price > 15.0, Tier::Professional),
                    TierOverride::new(
                        |s| s.suggested_price > 25.0 && s.packaging_recyclable,
                        Tier::Queen,
                    ),
                ],
            )
    }

    /// Append overrides for `category`, after any already registered for it.
    pub fn with_overrides(
        mut self,
        category: impl Into<String>,
        overrides: impl IntoIterator<Item = TierOverride>,
    ) -> Self {
        self.overrides
            .entry(category.into())
            .or_default()
            .extend(overrides);
        self
    }

    pub fn baseline(submission: &Submission) -> Tier {
        if submission.packaging_recyclable {
            Tier::Professional
        } else {
            Tier::Budget
        }
    }

    pub fn classify(&self, submission: &Submission) -> Tier {
        let baseline = Self::baseline(submission);
        let Some(overrides) = self.overrides.get(&submission.category) else {
            return baseline;
        };
        overrides
            .iter()
            .filter(|o| (o.applies)(submission))
            .fold(baseline, |_, o| o.tier)
    }
}

impl Default for RangeClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::BLUSHER;

    fn submission(name: &str, category: &str, price: f64, recyclable: bool) -> Submission {
        Submission::new(name, category, 1.0, price, recyclable)
    }

    #[test]
    fn baseline_depends_on_packaging() {
        let classifier = RangeClassifier::standard();
        assert_eq!(classifier.classify(&submission("Foo", "Bar", 0.0, false)), Tier::Budget);
        assert_eq!(classifier.classify(&submission("Foo", "Bar", 0.0, true)), Tier::Professional);
        assert_eq!(classifier.classify(&submission("Foo", BLUSHER, 99.0, false)), Tier::Budget);
    }

    #[test]
    fn eyeshadow_named_queen_is_queen() {
        let classifier = RangeClassifier::standard();
        assert_eq!(
            classifier.classify(&submission("Drag Queen Palette", EYESHADOW, 0.0, false)),
            Tier::Queen
        );
        assert_eq!(
            classifier.classify(&submission("queen", EYESHADOW, 0.0, false)),
            Tier::Budget
        );
        assert_eq!(
            classifier.classify(&submission("Foo", EYESHADOW, 0.0, true)),
            Tier::Professional
        );
    }

    #[test]
    fn foundation_above_ten_is_professional() {
        let classifier = RangeClassifier::standard();
        assert_eq!(classifier.classify(&submission("Foo", FOUNDATION, 10.0, false)), Tier::Budget);
        assert_eq!(
            classifier.classify(&submission("Foo", FOUNDATION, 10.5, false)),
            Tier::Professional
        );
    }

    #[test]
    fn lipstick_overrides_accumulate() {
        let classifier = RangeClassifier::standard();
        assert_eq!(classifier.classify(&submission("Foo", LIPSTICK, 10.0, false)), Tier::Budget);
        assert_eq!(
            classifier.classify(&submission("Foo", LIPSTICK, 11.0, false)),
            Tier::Professional
        );
        assert_eq!(classifier.classify(&submission("Foo", LIPSTICK, 21.0, false)), Tier::Queen);
    }

    #[test]
    fn mascara_queen_needs_recyclable_packaging() {
        let classifier = RangeClassifier::standard();
        assert_eq!(
            classifier.classify(&submission("Foo", MASCARA, 16.0, false)),
            Tier::Professional
        );
        assert_eq!(
            classifier.classify(&submission("Foo", MASCARA, 26.0, false)),
            Tier::Professional
        );
        assert_eq!(classifier.classify(&submission("Foo", MASCARA, 26.0, true)), Tier::Queen);
    }

    #[test]
    fn later_override_wins_even_when_weaker() {
        let classifier = RangeClassifier::empty().with_overrides(
            "Lipgloss",
            [
                TierOverride::new(|_| true, Tier::Queen),
                TierOverride::new(|_| true, Tier::Budget),
            ],
        );
        assert_eq!(
            classifier.classify(&submission("Foo", "Lipgloss", 0.0, true)),
            Tier::Budget
        );
    }
}
