// SPDX-License-Identifier: PMPL-1.0-or-later
//! Impact calculator.
//!
//! Every function here is a pure function of its arguments and the
//! reference tables. The coefficients are illustrative, not calibrated.

use crate::error::Result;
use crate::ethics::EthicalAssessment;
use crate::input::CalculationInput;
use crate::result::CalculationResult;
use ecoethics_metrics::{
    Carbon, Cost, Energy, Hardware, HardwareSpec, ModelType, PhaseImpact, Water,
};
use tracing::{debug, info};

/// Base training emissions per billion parameters, kg CO2e
pub const CO2_PER_BILLION_PARAMS: f64 = 2.0;
/// Inference emissions per 1000 tokens before size scaling, grams CO2e
pub const INFERENCE_CO2_PER_1K_TOKENS: f64 = 0.5;
/// Electricity price, USD per kWh
pub const ENERGY_COST_PER_KWH: f64 = 0.10;
/// Accelerator time per generated token
pub const SECONDS_PER_TOKEN: f64 = 0.001;

/// Training-phase emissions and energy.
///
/// The returned energy is *not* scaled by the model type's efficiency
/// multiplier; only the CO2 figure is.
pub fn training_carbon(
    params_b: f64,
    training_hours: f64,
    hardware: Hardware,
    pue: f64,
    carbon_intensity: f64,
    model_type: ModelType,
) -> (Carbon, Energy) {
    let base_co2 = params_b * CO2_PER_BILLION_PARAMS;

    let hw = hardware.spec();
    let model_efficiency = model_type.profile().efficiency_multiplier;

    let energy_kwh = (hw.tdp_watts * training_hours * pue) / 1000.0;
    // gCO2e/kWh -> kg
    let carbon_from_energy = (energy_kwh * carbon_intensity) / 1000.0;

    let total_co2 =
        Carbon::kilograms_co2e(base_co2 + carbon_from_energy) * hw.efficiency * model_efficiency;

    (total_co2, Energy::kilowatt_hours(energy_kwh))
}

/// Inference-phase emissions and energy.
///
/// Emissions come from a per-token coefficient scaled by model size, so the
/// grid intensity does not enter; it is accepted for symmetry with
/// [`training_carbon`].
pub fn inference_carbon(
    tokens_per_day: f64,
    days: f64,
    params_b: f64,
    hardware: Hardware,
    pue: f64,
    _carbon_intensity: f64,
    model_type: ModelType,
) -> (Carbon, Energy) {
    let size_factor = 1.0 + params_b / 100.0;
    let model_efficiency = model_type.profile().efficiency_multiplier;

    let co2_per_1k_tokens = INFERENCE_CO2_PER_1K_TOKENS * size_factor;
    let total_tokens = tokens_per_day * days;

    let grams = (total_tokens / 1000.0) * co2_per_1k_tokens;
    let carbon = Carbon::grams_co2e(grams) * model_efficiency;

    let compute_hours = (total_tokens * SECONDS_PER_TOKEN) / 3600.0;
    let energy =
        Energy::kilowatt_hours((hardware.spec().tdp_watts * compute_hours * pue) / 1000.0)
            * model_efficiency;

    (carbon, energy)
}

/// Cooling water for a phase, from that phase's energy
pub fn water_usage(energy: Energy, water_per_kwh: f64) -> Water {
    Water::liters(energy.0 * water_per_kwh)
}

/// Accelerator rental plus electricity cost for a phase
pub fn cost(energy: Energy, hardware: Hardware) -> Cost {
    cost_for_spec(energy, &hardware.spec())
}

/// [`cost`] against an explicit spec. Zero TDP yields zero compute hours.
pub fn cost_for_spec(energy: Energy, spec: &HardwareSpec) -> Cost {
    let tdp_kw = spec.tdp_watts / 1000.0;

    let compute_hours = if tdp_kw > 0.0 { energy.0 / tdp_kw } else { 0.0 };

    let compute_cost = compute_hours * spec.cost_per_hour;
    let energy_cost = energy.0 * ENERGY_COST_PER_KWH;

    Cost::usd(compute_cost + energy_cost)
}

/// Validate `input` and run the full pipeline: location, training,
/// inference, totals, ethical score.
pub fn calculate_all(input: &CalculationInput) -> Result<CalculationResult> {
    input.validate()?;

    let location = input.location.profile();
    debug!(
        location = %input.location,
        carbon_intensity = location.carbon_intensity,
        water_intensity = location.water_intensity,
        "Resolved location"
    );

    let (training_co2, training_energy) = training_carbon(
        input.params_billions,
        input.training_hours as f64,
        input.hardware,
        input.pue,
        location.carbon_intensity,
        input.model_type,
    );
    let training = PhaseImpact {
        co2_kg: training_co2,
        energy_kwh: training_energy,
        water_liters: water_usage(training_energy, location.water_intensity),
        cost_usd: cost(training_energy, input.hardware),
    };
    debug!(
        co2_kg = training.co2_kg.0,
        energy_kwh = training.energy_kwh.0,
        water_liters = training.water_liters.0,
        cost_usd = training.cost_usd.0,
        "Training phase"
    );

    debug!(total_tokens = input.total_tokens(), "Inference volume");
    let (inference_co2, inference_energy) = inference_carbon(
        input.tokens_per_day as f64,
        f64::from(input.inference_days),
        input.params_billions,
        input.hardware,
        input.pue,
        location.carbon_intensity,
        input.model_type,
    );
    let inference = PhaseImpact {
        co2_kg: inference_co2,
        energy_kwh: inference_energy,
        water_liters: water_usage(inference_energy, location.water_intensity),
        cost_usd: cost(inference_energy, input.hardware),
    };
    debug!(
        co2_kg = inference.co2_kg.0,
        energy_kwh = inference.energy_kwh.0,
        water_liters = inference.water_liters.0,
        cost_usd = inference.cost_usd.0,
        "Inference phase"
    );

    let ethical = EthicalAssessment::assess(input.params_billions, input.model_type);
    let result = CalculationResult::new(training, inference, ethical);
    debug!(
        co2_kg = result.total.co2_kg.0,
        energy_kwh = result.total.energy_kwh.0,
        "Aggregated totals"
    );
    debug!(score = result.ethical.score, "Ethical risk");

    info!(
        total_co2_kg = result.total.co2_kg.0,
        ethical_score = result.ethical.score,
        "Calculation complete"
    );
    Ok(result)
}
