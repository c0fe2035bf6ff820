// SPDX-License-Identifier: PMPL-1.0-or-later
//! Human-readable terminal output

use ecoethics_engine::{CalculationInput, CalculationResult};
use ecoethics_metrics::{Hardware, Location, ModelType, PhaseImpact};
use ecoethics_report::format::{currency, percentage, signed_percentage, thousands};
use ecoethics_report::{generate_comparisons, Recommendation, ScenarioComparison};

pub const NO_RECOMMENDATIONS: &str =
    "Your configuration shows relatively efficient resource usage!";

pub const ETHICS_NOTE: &str = "Note: This score is a simplified proxy based on model size and \
complexity. Actual ethical risks depend on training data, deployment context, safeguards, and \
ongoing monitoring. Larger models tend to amplify biases present in training data and have \
reduced interpretability.";

/// Traffic light shown next to the ethical risk score
pub fn risk_indicator(score: f64) -> &'static str {
    if score <= 3.0 {
        "🟢"
    } else if score <= 6.0 {
        "🟡"
    } else {
        "🔴"
    }
}

fn phase_row(label: &str, phase: &PhaseImpact) -> String {
    format!(
        "  {:<10} {:>14} {:>16} {:>14} {:>14}\n",
        label,
        thousands(phase.co2_kg.0, 1),
        thousands(phase.energy_kwh.0, 1),
        thousands(phase.water_liters.0, 1),
        currency(phase.cost_usd.0),
    )
}

/// Full text report of one calculation
pub fn calculation_text(
    input: &CalculationInput,
    result: &CalculationResult,
    recommendations: &[Recommendation],
) -> String {
    let mut out = String::new();
    let location = input.location.profile();
    let total = &result.total;

    out.push_str("AI Model Eco & Ethics Calculator\n");
    out.push_str("================================\n\n");

    out.push_str("Configuration:\n");
    out.push_str(&format!(
        "  Model:       {}B parameters, {}\n",
        input.params_billions, input.model_type
    ));
    out.push_str(&format!(
        "  Training:    {} hours on {} ({})\n",
        thousands(input.training_hours as f64, 0),
        input.hardware,
        input.hardware.generation()
    ));
    out.push_str(&format!(
        "  Inference:   {} tokens/day for {} days\n",
        thousands(input.tokens_per_day as f64, 0),
        input.inference_days
    ));
    out.push_str(&format!(
        "  Location:    {} ({} gCO2e/kWh, {}% renewable)\n",
        input.location, location.carbon_intensity, location.renewable_pct
    ));
    out.push_str(&format!("  PUE:         {}\n", input.pue));

    out.push_str("\nTotals:\n");
    out.push_str(&format!(
        "  CO2:         {} kg ({} t)\n",
        thousands(total.co2_kg.0, 0),
        thousands(total.co2_kg.tonnes(), 2)
    ));
    out.push_str(&format!(
        "  Energy:      {} kWh ({} MWh)\n",
        thousands(total.energy_kwh.0, 0),
        thousands(total.energy_kwh.megawatt_hours(), 2)
    ));
    out.push_str(&format!(
        "  Water:       {} L ({} gal)\n",
        thousands(total.water_liters.0, 0),
        thousands(total.water_liters.us_gallons(), 0)
    ));
    out.push_str(&format!("  Cost:        {}\n", currency(total.cost_usd.0)));

    out.push_str("\nBreakdown:\n");
    out.push_str(&format!(
        "  {:<10} {:>14} {:>16} {:>14} {:>14}\n",
        "Phase", "CO2 (kg)", "Energy (kWh)", "Water (L)", "Cost (USD)"
    ));
    out.push_str(&phase_row("Training", &result.training));
    out.push_str(&phase_row("Inference", &result.inference));
    out.push_str(&phase_row("Total", total));

    let cmp = generate_comparisons(result);
    out.push_str("\nReal-world equivalents:\n");
    out.push_str(&format!(
        "  {} km driven by an average car\n",
        thousands(cmp.carbon.car_km, 0)
    ));
    out.push_str(&format!(
        "  {} transatlantic flights\n",
        thousands(cmp.carbon.flights_transatlantic, 1)
    ));
    out.push_str(&format!(
        "  {} trees absorbing CO2 for a year\n",
        thousands(cmp.carbon.trees_year, 0)
    ));
    out.push_str(&format!(
        "  {} bottles of water (500 ml)\n",
        thousands(cmp.water.bottles_500ml, 0)
    ));
    out.push_str(&format!(
        "  {} days of household water use\n",
        thousands(cmp.water.households_day, 1)
    ));
    out.push_str(&format!(
        "  {} US homes powered for a year\n",
        thousands(cmp.energy.homes_year, 2)
    ));

    let score = result.ethical.score;
    out.push_str("\nEthical risk:\n");
    out.push_str(&format!(
        "  {} {:.1}/10 ({})\n",
        risk_indicator(score),
        score,
        result.ethical.level().label()
    ));
    out.push_str(&format!("  {}\n", result.ethical.explanation));
    out.push_str(&format!("  {}\n", ETHICS_NOTE));

    out.push_str("\nRecommendations:\n");
    if recommendations.is_empty() {
        out.push_str(&format!("  ✅ {}\n", NO_RECOMMENDATIONS));
    } else {
        for rec in recommendations {
            out.push_str(&format!(
                "  {} [{}] {}: {}\n",
                rec.priority.icon(),
                rec.priority.as_str(),
                rec.category,
                rec.message
            ));
        }
    }

    out
}

fn describe(input: &CalculationInput) -> String {
    format!(
        "{}B {} on {} in {}, PUE {}",
        input.params_billions, input.model_type, input.hardware, input.location, input.pue
    )
}

/// Baseline versus alternative table
pub fn comparison_text(cmp: &ScenarioComparison) -> String {
    let mut out = String::new();

    out.push_str("Scenario comparison\n");
    out.push_str("===================\n\n");
    out.push_str(&format!("  Baseline:    {}\n", describe(&cmp.baseline_input)));
    out.push_str(&format!("  Alternative: {}\n\n", describe(&cmp.alternative_input)));

    out.push_str(&format!(
        "  {:<14} {:>16} {:>16} {:>10}\n",
        "Metric", "Baseline", "Alternative", "Change"
    ));
    for delta in &cmp.deltas {
        let (baseline, alternative) = if delta.metric == "cost_usd" {
            (currency(delta.baseline), currency(delta.alternative))
        } else {
            (thousands(delta.baseline, 1), thousands(delta.alternative, 1))
        };
        out.push_str(&format!(
            "  {:<14} {:>16} {:>16} {:>10}\n",
            delta.metric,
            baseline,
            alternative,
            signed_percentage(delta.change_pct)
        ));
    }

    out
}

/// Listing of the built-in reference tables
pub fn tables_text() -> String {
    let mut out = String::new();

    out.push_str("Locations:\n");
    out.push_str(&format!(
        "  {:<26} {:<10} {:>12} {:>10} {:>10}\n",
        "Name", "Key", "gCO2e/kWh", "L/kWh", "Renewable"
    ));
    for location in Location::ALL {
        let p = location.profile();
        out.push_str(&format!(
            "  {:<26} {:<10} {:>12} {:>10} {:>10}\n",
            location.name(),
            location.slug(),
            p.carbon_intensity,
            p.water_intensity,
            percentage(f64::from(p.renewable_pct))
        ));
    }

    out.push_str("\nHardware:\n");
    out.push_str(&format!(
        "  {:<14} {:<8} {:>8} {:>11} {:>8} {:<10}\n",
        "Name", "Key", "TDP (W)", "Efficiency", "$/hour", "Generation"
    ));
    for hardware in Hardware::ALL {
        let s = hardware.spec();
        out.push_str(&format!(
            "  {:<14} {:<8} {:>8} {:>11} {:>8} {:<10}\n",
            hardware.name(),
            hardware.slug(),
            s.tdp_watts,
            s.efficiency,
            currency(s.cost_per_hour),
            s.generation
        ));
    }

    out.push_str("\nModel types:\n");
    out.push_str(&format!(
        "  {:<26} {:<6} {:>11} {:>14}\n",
        "Name", "Key", "Efficiency", "Risk modifier"
    ));
    for model_type in ModelType::ALL {
        let p = model_type.profile();
        out.push_str(&format!(
            "  {:<26} {:<6} {:>11} {:>14}\n",
            model_type.name(),
            model_type.slug(),
            p.efficiency_multiplier,
            p.risk_modifier
        ));
    }

    out
}
