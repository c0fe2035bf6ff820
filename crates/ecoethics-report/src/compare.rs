// SPDX-License-Identifier: PMPL-1.0-or-later
//! Side-by-side comparison of two configurations

use ecoethics_engine::{calculate_all, CalculationInput, CalculationResult};
use serde::Serialize;

/// Relative change from `old` to `new` in percent; zero when `old` is zero.
pub fn percentage_change(old: f64, new: f64) -> f64 {
    if old == 0.0 {
        return 0.0;
    }
    ((new - old) / old) * 100.0
}

/// Change of one headline figure between baseline and alternative
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDelta {
    pub metric: &'static str,
    pub baseline: f64,
    pub alternative: f64,
    pub change_pct: f64,
}

impl MetricDelta {
    fn new(metric: &'static str, baseline: f64, alternative: f64) -> Self {
        Self {
            metric,
            baseline,
            alternative,
            change_pct: percentage_change(baseline, alternative),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioComparison {
    pub baseline_input: CalculationInput,
    pub alternative_input: CalculationInput,
    pub baseline: CalculationResult,
    pub alternative: CalculationResult,
    pub deltas: Vec<MetricDelta>,
}

impl ScenarioComparison {
    /// Run both configurations through the engine and diff their totals
    pub fn between(
        baseline_input: &CalculationInput,
        alternative_input: &CalculationInput,
    ) -> ecoethics_engine::Result<Self> {
        let baseline = calculate_all(baseline_input)?;
        let alternative = calculate_all(alternative_input)?;

        let (b, a) = (&baseline.total, &alternative.total);
        let deltas = vec![
            MetricDelta::new("co2_kg", b.co2_kg.0, a.co2_kg.0),
            MetricDelta::new("energy_kwh", b.energy_kwh.0, a.energy_kwh.0),
            MetricDelta::new("water_liters", b.water_liters.0, a.water_liters.0),
            MetricDelta::new("cost_usd", b.cost_usd.0, a.cost_usd.0),
            MetricDelta::new(
                "ethical_score",
                baseline.ethical.score,
                alternative.ethical.score,
            ),
        ];

        Ok(Self {
            baseline_input: *baseline_input,
            alternative_input: *alternative_input,
            baseline,
            alternative,
            deltas,
        })
    }

    pub fn delta(&self, metric: &str) -> Option<&MetricDelta> {
        self.deltas.iter().find(|d| d.metric == metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoethics_engine::Scenario;
    use ecoethics_metrics::{Location, ModelType};

    #[test]
    fn test_percentage_change() {
        assert_eq!(percentage_change(100.0, 150.0), 50.0);
        assert_eq!(percentage_change(200.0, 100.0), -50.0);
        assert_eq!(percentage_change(0.0, 42.0), 0.0);
        assert_eq!(percentage_change(7.0, 7.0), 0.0);
    }

    #[test]
    fn test_greener_location_lowers_co2_only() {
        let baseline = Scenario::default().resolve().unwrap();
        let alternative = CalculationInput {
            location: Location::EuNorth,
            ..baseline
        };
        let cmp = ScenarioComparison::between(&baseline, &alternative).unwrap();

        assert!(cmp.delta("co2_kg").unwrap().change_pct < 0.0);
        // Energy and cost do not depend on location
        assert_eq!(cmp.delta("energy_kwh").unwrap().change_pct, 0.0);
        assert_eq!(cmp.delta("cost_usd").unwrap().change_pct, 0.0);
        assert!(cmp.delta("water_liters").unwrap().change_pct < 0.0);
        assert_eq!(cmp.delta("ethical_score").unwrap().change_pct, 0.0);
    }

    #[test]
    fn test_moe_raises_ethical_score() {
        let baseline = Scenario::default().resolve().unwrap();
        let alternative = CalculationInput {
            model_type: ModelType::MixtureOfExperts,
            ..baseline
        };
        let cmp = ScenarioComparison::between(&baseline, &alternative).unwrap();
        let ethics = cmp.delta("ethical_score").unwrap();
        assert_eq!(ethics.baseline, 4.0);
        assert_eq!(ethics.alternative, 4.5);
        assert_eq!(ethics.change_pct, 12.5);
    }

    #[test]
    fn test_invalid_alternative_is_rejected() {
        let baseline = Scenario::default().resolve().unwrap();
        let alternative = CalculationInput { pue: 4.0, ..baseline };
        assert!(ScenarioComparison::between(&baseline, &alternative).is_err());
    }
}
