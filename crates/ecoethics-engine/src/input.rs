// SPDX-License-Identifier: PMPL-1.0-or-later
//! Calculation input and its validation boundary

use crate::error::{InputError, Result};
use ecoethics_metrics::{Hardware, Location, ModelType};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const PARAMS_BILLIONS_MAX: f64 = 10_000.0;
pub const TRAINING_HOURS_RANGE: (u64, u64) = (1, 1_000_000);
pub const TOKENS_PER_DAY_MAX: u64 = 10_000_000_000;
pub const INFERENCE_DAYS_RANGE: (u32, u32) = (1, 3650);
pub const PUE_RANGE: (f64, f64) = (1.0, 3.0);

/// Validated parameters of one estimate.
///
/// Serializes with the human-readable keys used by the JSON export
/// (`"Model Parameters (B)"`, `"PUE"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    #[serde(rename = "Model Parameters (B)")]
    pub params_billions: f64,
    #[serde(rename = "Model Type")]
    pub model_type: ModelType,
    /// Accelerator-hours spent training
    #[serde(rename = "Training Hours")]
    pub training_hours: u64,
    #[serde(rename = "Tokens per Day")]
    pub tokens_per_day: u64,
    #[serde(rename = "Inference Days")]
    pub inference_days: u32,
    #[serde(rename = "Location")]
    pub location: Location,
    #[serde(rename = "Hardware")]
    pub hardware: Hardware,
    /// Power Usage Effectiveness of the facility
    #[serde(rename = "PUE")]
    pub pue: f64,
}

impl CalculationInput {
    /// Check every numeric field against its domain.
    ///
    /// Table references are already resolved by construction.
    pub fn validate(&self) -> Result<()> {
        finite("params_billions", self.params_billions)?;
        finite("pue", self.pue)?;

        if self.params_billions <= 0.0 || self.params_billions > PARAMS_BILLIONS_MAX {
            return Err(InputError::OutOfRange {
                field: "params_billions",
                value: self.params_billions,
                range: "(0, 10000]",
            });
        }

        let (min_hours, max_hours) = TRAINING_HOURS_RANGE;
        if !(min_hours..=max_hours).contains(&self.training_hours) {
            return Err(InputError::OutOfRange {
                field: "training_hours",
                value: self.training_hours as f64,
                range: "[1, 1000000]",
            });
        }

        if self.tokens_per_day > TOKENS_PER_DAY_MAX {
            return Err(InputError::OutOfRange {
                field: "tokens_per_day",
                value: self.tokens_per_day as f64,
                range: "[0, 10000000000]",
            });
        }

        let (min_days, max_days) = INFERENCE_DAYS_RANGE;
        if !(min_days..=max_days).contains(&self.inference_days) {
            return Err(InputError::OutOfRange {
                field: "inference_days",
                value: f64::from(self.inference_days),
                range: "[1, 3650]",
            });
        }

        let (min_pue, max_pue) = PUE_RANGE;
        if !(min_pue..=max_pue).contains(&self.pue) {
            return Err(InputError::OutOfRange {
                field: "pue",
                value: self.pue,
                range: "[1.0, 3.0]",
            });
        }

        Ok(())
    }

    /// Total tokens served over the deployment
    pub fn total_tokens(&self) -> f64 {
        self.tokens_per_day as f64 * f64::from(self.inference_days)
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NotFinite { field })
    }
}

/// Unvalidated, string-named form of an input as found in scenario and
/// config files.
///
/// Missing keys take the defaults of the interactive calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub params_billions: f64,
    pub model_type: String,
    pub training_hours: u64,
    pub tokens_per_day: u64,
    pub inference_days: u32,
    pub location: String,
    pub hardware: String,
    pub pue: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            params_billions: 7.0,
            model_type: ModelType::Dense.name().to_string(),
            training_hours: 1000,
            tokens_per_day: 10_000_000,
            inference_days: 365,
            location: Location::ALL[0].name().to_string(),
            hardware: Hardware::ALL[0].name().to_string(),
            pue: 1.5,
        }
    }
}

impl Scenario {
    /// Resolve table names and validate ranges
    pub fn resolve(&self) -> Result<CalculationInput> {
        let input = CalculationInput {
            params_billions: self.params_billions,
            model_type: self.model_type.parse()?,
            training_hours: self.training_hours,
            tokens_per_day: self.tokens_per_day,
            inference_days: self.inference_days,
            location: self.location.parse()?,
            hardware: self.hardware.parse()?,
            pue: self.pue,
        };
        input.validate()?;
        debug!(?input, "Resolved scenario");
        Ok(input)
    }
}

impl TryFrom<&Scenario> for CalculationInput {
    type Error = InputError;

    fn try_from(scenario: &Scenario) -> Result<Self> {
        scenario.resolve()
    }
}

impl From<&CalculationInput> for Scenario {
    fn from(input: &CalculationInput) -> Self {
        Self {
            params_billions: input.params_billions,
            model_type: input.model_type.name().to_string(),
            training_hours: input.training_hours,
            tokens_per_day: input.tokens_per_day,
            inference_days: input.inference_days,
            location: input.location.name().to_string(),
            hardware: input.hardware.name().to_string(),
            pue: input.pue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_resolves() {
        let input = Scenario::default().resolve().unwrap();
        assert_eq!(input.params_billions, 7.0);
        assert_eq!(input.model_type, ModelType::Dense);
        assert_eq!(input.location, Location::UsWest);
        assert_eq!(input.hardware, Hardware::NvidiaA100);
        assert_eq!(input.total_tokens(), 3_650_000_000.0);
    }

    #[test]
    fn test_unknown_names() {
        let scenario = Scenario {
            location: "Atlantis".to_string(),
            ..Scenario::default()
        };
        assert_eq!(
            scenario.resolve(),
            Err(InputError::UnknownLocation("Atlantis".to_string()))
        );

        let scenario = Scenario {
            hardware: "Abacus".to_string(),
            ..Scenario::default()
        };
        assert!(matches!(scenario.resolve(), Err(InputError::UnknownHardware(_))));

        let scenario = Scenario {
            model_type: "Sparse".to_string(),
            ..Scenario::default()
        };
        assert!(matches!(scenario.resolve(), Err(InputError::UnknownModelType(_))));
    }

    #[test]
    fn test_range_boundaries() {
        let base = Scenario::default().resolve().unwrap();

        let ok = [
            CalculationInput { params_billions: PARAMS_BILLIONS_MAX, ..base },
            CalculationInput { params_billions: 0.01, ..base },
            CalculationInput { training_hours: 1, ..base },
            CalculationInput { tokens_per_day: 0, ..base },
            CalculationInput { tokens_per_day: TOKENS_PER_DAY_MAX, ..base },
            CalculationInput { inference_days: 3650, ..base },
            CalculationInput { pue: 1.0, ..base },
            CalculationInput { pue: 3.0, ..base },
        ];
        for input in ok {
            assert!(input.validate().is_ok(), "{:?} should be accepted", input);
        }

        let rejected = [
            (CalculationInput { params_billions: 0.0, ..base }, "params_billions"),
            (CalculationInput { params_billions: -1.0, ..base }, "params_billions"),
            (CalculationInput { params_billions: 10_000.5, ..base }, "params_billions"),
            (CalculationInput { training_hours: 0, ..base }, "training_hours"),
            (CalculationInput { training_hours: 1_000_001, ..base }, "training_hours"),
            (CalculationInput { tokens_per_day: TOKENS_PER_DAY_MAX + 1, ..base }, "tokens_per_day"),
            (CalculationInput { inference_days: 0, ..base }, "inference_days"),
            (CalculationInput { inference_days: 3651, ..base }, "inference_days"),
            (CalculationInput { pue: 0.9, ..base }, "pue"),
            (CalculationInput { pue: 3.1, ..base }, "pue"),
        ];
        for (input, expected_field) in rejected {
            match input.validate() {
                Err(InputError::OutOfRange { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected OutOfRange for {}, got {:?}", expected_field, other),
            }
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let base = Scenario::default().resolve().unwrap();
        let input = CalculationInput { pue: f64::NAN, ..base };
        assert_eq!(input.validate(), Err(InputError::NotFinite { field: "pue" }));

        let input = CalculationInput { params_billions: f64::INFINITY, ..base };
        assert_eq!(
            input.validate(),
            Err(InputError::NotFinite { field: "params_billions" })
        );
    }

    #[test]
    fn test_scenario_round_trip_through_input() {
        let scenario = Scenario {
            params_billions: 175.0,
            model_type: "moe".to_string(),
            location: "eu-north".to_string(),
            hardware: "h100".to_string(),
            ..Scenario::default()
        };
        let input = CalculationInput::try_from(&scenario).unwrap();
        let back = Scenario::from(&input);
        assert_eq!(back.model_type, "MoE (Mixture of Experts)");
        assert_eq!(back.location, "EU-North (Finland)");
        assert_eq!(back.hardware, "NVIDIA H100");
        assert_eq!(back.resolve().unwrap(), input);
    }

    #[test]
    fn test_input_serializes_with_export_keys() {
        let input = Scenario::default().resolve().unwrap();
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["Model Parameters (B)"], 7.0);
        assert_eq!(json["Model Type"], "Dense");
        assert_eq!(json["Training Hours"], 1000);
        assert_eq!(json["Location"], "US-West (Oregon)");
        assert_eq!(json["Hardware"], "NVIDIA A100");
        assert_eq!(json["PUE"], 1.5);
    }
}
