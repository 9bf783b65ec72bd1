use serde::{Deserialize, Serialize};

use vanity_core::ValueObject;

/// Pricing/quality tier assigned to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Budget,
    Professional,
    Queen,
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Tier::Budget => "BUDGET",
            Tier::Professional => "PROFESSIONAL",
            Tier::Queen => "QUEEN",
        };
        f.write_str(s)
    }
}

/// Raw product data as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub name: String,
    pub category: String,
    pub weight: f64,
    pub suggested_price: f64,
    pub packaging_recyclable: bool,
}

impl Submission {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        weight: f64,
        suggested_price: f64,
        packaging_recyclable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            weight,
            suggested_price,
            packaging_recyclable,
        }
    }
}

impl ValueObject for Submission {}

/// A submission paired with the tier the classifier assigned it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedSubmission<'a> {
    pub submission: &'a Submission,
    pub tier: Tier,
}

impl<'a> ClassifiedSubmission<'a> {
    pub fn new(submission: &'a Submission, tier: Tier) -> Self {
        Self { submission, tier }
    }
}

impl ValueObject for ClassifiedSubmission<'_> {}
