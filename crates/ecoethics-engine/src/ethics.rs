// SPDX-License-Identifier: PMPL-1.0-or-later
//! Ethical risk heuristic.
//!
//! A 0-10 proxy for bias and transparency risk derived only from parameter
//! count and architecture. It is not a measured property of any model.

use ecoethics_metrics::ModelType;
use serde::{Deserialize, Serialize};

const MAX_SCORE: f64 = 10.0;

/// Size brackets as (exclusive upper bound in billions, base score)
const SIZE_BRACKETS: [(f64, f64); 5] = [
    (1.0, 2.0),
    (10.0, 4.0),
    (50.0, 6.0),
    (100.0, 7.0),
    (500.0, 8.0),
];
const LARGEST_BRACKET_SCORE: f64 = 9.0;

/// Risk score from parameter count bracket plus the architecture's modifier,
/// capped at 10 and rounded to one decimal.
pub fn ethical_risk(params_b: f64, model_type: ModelType) -> f64 {
    let base = SIZE_BRACKETS
        .iter()
        .find(|(upper, _)| params_b < *upper)
        .map(|(_, score)| *score)
        .unwrap_or(LARGEST_BRACKET_SCORE);

    let score = (base + model_type.profile().risk_modifier).min(MAX_SCORE);
    round_one_decimal(score)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Qualitative bracket of an ethical risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    Elevated,
    High,
}

impl RiskLevel {
    /// Brackets are inclusive on their upper end
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            RiskLevel::Low
        } else if score <= 5.0 {
            RiskLevel::Moderate
        } else if score <= 7.0 {
            RiskLevel::Elevated
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk",
            RiskLevel::Moderate => "Moderate risk",
            RiskLevel::Elevated => "Elevated risk",
            RiskLevel::High => "High risk",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Low risk - Small models with limited capacity for amplifying biases."
            }
            RiskLevel::Moderate => {
                "Moderate risk - Medium models may contain biases from training data."
            }
            RiskLevel::Elevated => {
                "Elevated risk - Large models can amplify biases and lack transparency."
            }
            RiskLevel::High => {
                "High risk - Very large models have significant bias amplification potential and limited interpretability."
            }
        }
    }
}

/// Explanation sentence for a score
pub fn ethical_explanation(score: f64) -> &'static str {
    RiskLevel::from_score(score).explanation()
}

/// Score with its explanation, as carried on a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalAssessment {
    pub score: f64,
    pub explanation: String,
}

impl EthicalAssessment {
    pub fn assess(params_b: f64, model_type: ModelType) -> Self {
        let score = ethical_risk(params_b, model_type);
        Self {
            score,
            explanation: ethical_explanation(score).to_string(),
        }
    }

    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_scores() {
        assert_eq!(ethical_risk(0.5, ModelType::Dense), 2.0);
        assert_eq!(ethical_risk(1.0, ModelType::Dense), 4.0);
        assert_eq!(ethical_risk(9.99, ModelType::Dense), 4.0);
        assert_eq!(ethical_risk(10.0, ModelType::Dense), 6.0);
        assert_eq!(ethical_risk(50.0, ModelType::Dense), 7.0);
        assert_eq!(ethical_risk(100.0, ModelType::Dense), 8.0);
        assert_eq!(ethical_risk(499.9, ModelType::Dense), 8.0);
        assert_eq!(ethical_risk(500.0, ModelType::Dense), 9.0);
        assert_eq!(ethical_risk(10_000.0, ModelType::Dense), 9.0);
    }

    #[test]
    fn test_moe_modifier() {
        assert_eq!(ethical_risk(0.5, ModelType::MixtureOfExperts), 2.5);
        assert_eq!(ethical_risk(500.0, ModelType::MixtureOfExperts), 9.5);
    }

    #[test]
    fn test_explanation_brackets() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3.1), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(5.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(7.0), RiskLevel::Elevated);
        assert_eq!(RiskLevel::from_score(7.5), RiskLevel::High);
        assert!(ethical_explanation(2.0).starts_with("Low risk"));
        assert!(ethical_explanation(9.5).starts_with("High risk"));
    }

    #[test]
    fn test_assessment_pairs_score_and_text() {
        let assessment = EthicalAssessment::assess(70.0, ModelType::Dense);
        assert_eq!(assessment.score, 7.0);
        assert_eq!(assessment.level(), RiskLevel::Elevated);
        assert_eq!(assessment.explanation, RiskLevel::Elevated.explanation());
    }
}
