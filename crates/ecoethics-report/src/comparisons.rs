// SPDX-License-Identifier: PMPL-1.0-or-later
//! Real-world equivalents of a result's totals.
//!
//! Plain division by fixed constants; rounding is left to the renderer.

use ecoethics_engine::CalculationResult;
use serde::{Deserialize, Serialize};

/// Average passenger car, kg CO2e per km
pub const CAR_CO2_PER_KM: f64 = 0.12;
/// One transatlantic flight, kg CO2e
pub const FLIGHT_TRANSATLANTIC_CO2: f64 = 1000.0;
/// CO2 absorbed by one tree in a year, kg
pub const TREE_CO2_ABSORPTION_PER_YEAR: f64 = 20.0;
/// Liters in a standard water bottle
pub const BOTTLE_LITERS: f64 = 0.5;
/// Daily household water use, liters
pub const HOUSEHOLD_WATER_PER_DAY: f64 = 300.0;
/// Yearly US household electricity use, kWh
pub const US_HOME_ENERGY_PER_YEAR: f64 = 10_800.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonEquivalents {
    pub car_km: f64,
    pub flights_transatlantic: f64,
    pub trees_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterEquivalents {
    pub bottles_500ml: f64,
    pub households_day: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEquivalents {
    pub homes_year: f64,
}

/// Totals expressed in everyday units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparisons {
    pub carbon: CarbonEquivalents,
    pub water: WaterEquivalents,
    pub energy: EnergyEquivalents,
}

pub fn generate_comparisons(result: &CalculationResult) -> Comparisons {
    let co2 = result.total.co2_kg.0;
    let water = result.total.water_liters.0;
    let energy = result.total.energy_kwh.0;

    Comparisons {
        carbon: CarbonEquivalents {
            car_km: co2 / CAR_CO2_PER_KM,
            flights_transatlantic: co2 / FLIGHT_TRANSATLANTIC_CO2,
            trees_year: co2 / TREE_CO2_ABSORPTION_PER_YEAR,
        },
        water: WaterEquivalents {
            bottles_500ml: water / BOTTLE_LITERS,
            households_day: water / HOUSEHOLD_WATER_PER_DAY,
        },
        energy: EnergyEquivalents {
            homes_year: energy / US_HOME_ENERGY_PER_YEAR,
        },
    }
}
