// SPDX-License-Identifier: PMPL-1.0-or-later
//! Per-phase and total figures of one calculation

use crate::ethics::EthicalAssessment;
use chrono::{DateTime, Utc};
use ecoethics_metrics::PhaseImpact;
use serde::{Deserialize, Serialize};

/// Element-wise sum of the training and inference quadruples
pub fn aggregate(training: &PhaseImpact, inference: &PhaseImpact) -> PhaseImpact {
    *training + *inference
}

/// Outcome of [`crate::calculate_all`].
///
/// `total` always equals `training + inference` field by field; build
/// results through [`CalculationResult::new`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub training: PhaseImpact,
    pub inference: PhaseImpact,
    pub total: PhaseImpact,
    pub ethical: EthicalAssessment,
    /// Creation instant; informational only
    pub timestamp: DateTime<Utc>,
}

impl CalculationResult {
    pub fn new(training: PhaseImpact, inference: PhaseImpact, ethical: EthicalAssessment) -> Self {
        Self {
            total: aggregate(&training, &inference),
            training,
            inference,
            ethical,
            timestamp: Utc::now(),
        }
    }

    /// True when both results carry the same figures, ignoring the timestamp
    pub fn same_figures(&self, other: &CalculationResult) -> bool {
        self.training == other.training
            && self.inference == other.inference
            && self.total == other.total
            && self.ethical == other.ethical
    }
}
