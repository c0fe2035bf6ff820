// SPDX-License-Identifier: PMPL-1.0-or-later

//! # EcoEthics Engine
//!
//! Estimates the carbon, energy, water and monetary footprint of training
//! and serving a large AI model, plus a heuristic ethical risk score.
//!
//! ```no_run
//! use ecoethics_engine::{calculate_all, Scenario};
//!
//! let input = Scenario::default().resolve()?;
//! let result = calculate_all(&input)?;
//! println!("{:.1} kg CO2e", result.total.co2_kg.0);
//! # Ok::<(), ecoethics_engine::InputError>(())
//! ```

pub mod calculator;
pub mod error;
pub mod ethics;
pub mod input;
pub mod result;

pub use calculator::{calculate_all, cost, inference_carbon, training_carbon, water_usage};
pub use error::{InputError, Result};
pub use ethics::{ethical_explanation, ethical_risk, EthicalAssessment, RiskLevel};
pub use input::{CalculationInput, Scenario};
pub use result::{aggregate, CalculationResult};
