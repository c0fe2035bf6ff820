// SPDX-License-Identifier: PMPL-1.0-or-later
//! Rule-based recommendations.
//!
//! Rules are independent checks evaluated in a fixed order; any number of
//! them may fire.

use ecoethics_engine::{CalculationInput, CalculationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Total CO2 above which model compression is suggested, kg
pub const HIGH_CO2_THRESHOLD_KG: f64 = 10_000.0;
pub const HIGH_PUE_THRESHOLD: f64 = 2.0;
/// Grid intensity above which relocation is suggested, gCO2e/kWh
pub const HIGH_CARBON_INTENSITY: f64 = 400.0;
pub const HIGH_ETHICAL_SCORE: f64 = 7.0;
/// Parameter count above which a smaller model is suggested, billions
pub const LARGE_MODEL_PARAMS_B: f64 = 100.0;
pub const LOW_RENEWABLE_PCT: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Model Size")]
    ModelSize,
    Infrastructure,
    Location,
    Ethics,
    Efficiency,
    Sustainability,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::ModelSize => "Model Size",
            Category::Infrastructure => "Infrastructure",
            Category::Location => "Location",
            Category::Ethics => "Ethics",
            Category::Efficiency => "Efficiency",
            Category::Sustainability => "Sustainability",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: Category,
    pub message: String,
}

impl Recommendation {
    fn new(priority: Priority, category: Category, message: impl Into<String>) -> Self {
        Self {
            priority,
            category,
            message: message.into(),
        }
    }
}

/// Evaluate every rule against a result and the input that produced it.
///
/// An empty list means no rule fired.
pub fn generate_recommendations(
    result: &CalculationResult,
    input: &CalculationInput,
) -> Vec<Recommendation> {
    let location = input.location.profile();
    let mut recommendations = Vec::new();

    if result.total.co2_kg.0 > HIGH_CO2_THRESHOLD_KG {
        recommendations.push(Recommendation::new(
            Priority::High,
            Category::ModelSize,
            "Consider model compression techniques or distillation to reduce size",
        ));
    }

    if input.pue > HIGH_PUE_THRESHOLD {
        recommendations.push(Recommendation::new(
            Priority::Medium,
            Category::Infrastructure,
            "Data center PUE is high - consider more efficient facilities",
        ));
    }

    if location.carbon_intensity > HIGH_CARBON_INTENSITY {
        recommendations.push(Recommendation::new(
            Priority::Medium,
            Category::Location,
            "Consider data centers in regions with renewable energy (lower carbon intensity)",
        ));
    }

    if result.ethical.score >= HIGH_ETHICAL_SCORE {
        recommendations.push(Recommendation::new(
            Priority::High,
            Category::Ethics,
            "Implement robust bias testing, fairness audits, and transparency measures",
        ));
    }

    if input.params_billions > LARGE_MODEL_PARAMS_B {
        recommendations.push(Recommendation::new(
            Priority::Medium,
            Category::Efficiency,
            "Evaluate if a smaller model could achieve similar performance",
        ));
    }

    if location.renewable_pct < LOW_RENEWABLE_PCT {
        recommendations.push(Recommendation::new(
            Priority::Low,
            Category::Sustainability,
            format!(
                "Current location uses only {}% renewable energy",
                location.renewable_pct
            ),
        ));
    }

    for rec in &recommendations {
        debug!(priority = rec.priority.as_str(), category = %rec.category, "Recommendation");
    }

    recommendations
}
