// SPDX-License-Identifier: PMPL-1.0-or-later

//! # EcoEthics Metrics
//!
//! Core data types for estimating the footprint of training and serving a
//! large AI model: unit-tagged quantities, the per-phase impact quadruple,
//! and the fixed reference tables (data-center locations, accelerators,
//! model architectures).

pub mod reference;

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

pub use reference::{
    Hardware, HardwareSpec, Location, LocationProfile, ModelType, ModelTypeProfile, UnknownName,
};

/// Kilograms per metric tonne
const KG_PER_TONNE: f64 = 1000.0;
/// kWh per MWh
const KWH_PER_MWH: f64 = 1000.0;
/// US gallons per liter
const GALLONS_PER_LITER: f64 = 0.264172;

/// Carbon emissions in kilograms of CO2 equivalent
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Carbon(pub f64);

impl Carbon {
    pub const ZERO: Self = Carbon(0.0);

    pub fn kilograms_co2e(kg: f64) -> Self {
        Carbon(kg)
    }

    pub fn grams_co2e(g: f64) -> Self {
        Carbon(g / 1000.0)
    }

    pub fn tonnes(&self) -> f64 {
        self.0 / KG_PER_TONNE
    }
}

impl Add for Carbon {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Carbon(self.0 + rhs.0)
    }
}

impl Mul<f64> for Carbon {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Carbon(self.0 * rhs)
    }
}

/// Electrical energy in kilowatt-hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Energy(pub f64);

impl Energy {
    pub const ZERO: Self = Energy(0.0);

    pub fn kilowatt_hours(kwh: f64) -> Self {
        Energy(kwh)
    }

    pub fn megawatt_hours(&self) -> f64 {
        self.0 / KWH_PER_MWH
    }
}

impl Add for Energy {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Energy(self.0 + rhs.0)
    }
}

impl Mul<f64> for Energy {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Energy(self.0 * rhs)
    }
}

/// Cooling water consumption in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Water(pub f64);

impl Water {
    pub const ZERO: Self = Water(0.0);

    pub fn liters(l: f64) -> Self {
        Water(l)
    }

    pub fn us_gallons(&self) -> f64 {
        self.0 * GALLONS_PER_LITER
    }
}

impl Add for Water {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Water(self.0 + rhs.0)
    }
}

/// Monetary cost in US dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(pub f64);

impl Cost {
    pub const ZERO: Self = Cost(0.0);

    pub fn usd(amount: f64) -> Self {
        Cost(amount)
    }
}

impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Cost(self.0 + rhs.0)
    }
}

/// Carbon, energy, water and cost of one lifecycle phase (or of their sum).
///
/// Field names double as the keys of the JSON export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseImpact {
    pub co2_kg: Carbon,
    pub energy_kwh: Energy,
    pub water_liters: Water,
    pub cost_usd: Cost,
}

impl PhaseImpact {
    pub fn zero() -> Self {
        PhaseImpact {
            co2_kg: Carbon::ZERO,
            energy_kwh: Energy::ZERO,
            water_liters: Water::ZERO,
            cost_usd: Cost::ZERO,
        }
    }
}

impl Default for PhaseImpact {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for PhaseImpact {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        PhaseImpact {
            co2_kg: self.co2_kg + rhs.co2_kg,
            energy_kwh: self.energy_kwh + rhs.energy_kwh,
            water_liters: self.water_liters + rhs.water_liters,
            cost_usd: self.cost_usd + rhs.cost_usd,
        }
    }
}
