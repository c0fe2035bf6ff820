// SPDX-License-Identifier: PMPL-1.0-or-later
//! JSON and CSV export of a calculation.
//!
//! Serialization only: every figure is taken from an already computed
//! [`CalculationResult`].

use crate::comparisons::{generate_comparisons, Comparisons};
use crate::error::{ReportError, Result};
use chrono::{DateTime, Utc};
use ecoethics_engine::{CalculationInput, CalculationResult};
use serde::{Deserialize, Serialize};

/// Export flavour, also used to name output files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Default file name, e.g. `ai_impact_report_20261018_142501.json`
    pub fn file_name(&self, at: DateTime<Utc>) -> String {
        let stem = match self {
            ExportFormat::Json => "ai_impact_report",
            ExportFormat::Csv => "ai_impact_summary",
        };
        format!("{}_{}.{}", stem, at.format("%Y%m%d_%H%M%S"), self.extension())
    }
}

/// Tool version and author written into the JSON metadata block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportMetadata {
    pub version: String,
    pub author: String,
}

impl Default for ExportMetadata {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            author: "EcoEthics contributors".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata<'a> {
    pub version: &'a str,
    pub author: &'a str,
    pub timestamp: DateTime<Utc>,
}

/// The full JSON export document
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport<'a> {
    pub metadata: ReportMetadata<'a>,
    pub input: &'a CalculationInput,
    pub results: &'a CalculationResult,
    pub comparisons: Comparisons,
}

impl<'a> ImpactReport<'a> {
    pub fn new(
        input: &'a CalculationInput,
        result: &'a CalculationResult,
        metadata: &'a ExportMetadata,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                version: &metadata.version,
                author: &metadata.author,
                timestamp: result.timestamp,
            },
            input,
            results: result,
            comparisons: generate_comparisons(result),
        }
    }
}

/// Pretty-printed JSON report
pub fn export_json(
    input: &CalculationInput,
    result: &CalculationResult,
    metadata: &ExportMetadata,
) -> Result<String> {
    let report = ImpactReport::new(input, result, metadata);
    Ok(serde_json::to_string_pretty(&report)?)
}

/// One-row summary table
#[derive(Debug, Clone, Serialize)]
struct SummaryRow {
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "Model_Parameters_B")]
    params_billions: f64,
    #[serde(rename = "Training_CO2_kg")]
    training_co2_kg: f64,
    #[serde(rename = "Inference_CO2_kg")]
    inference_co2_kg: f64,
    #[serde(rename = "Total_CO2_kg")]
    total_co2_kg: f64,
    #[serde(rename = "Total_Water_L")]
    total_water_liters: f64,
    #[serde(rename = "Total_Energy_kWh")]
    total_energy_kwh: f64,
    #[serde(rename = "Total_Cost_USD")]
    total_cost_usd: f64,
    #[serde(rename = "Ethical_Score")]
    ethical_score: f64,
}

/// CSV summary: header plus a single data row
pub fn export_csv(input: &CalculationInput, result: &CalculationResult) -> Result<String> {
    let row = SummaryRow {
        timestamp: result.timestamp.to_rfc3339(),
        params_billions: input.params_billions,
        training_co2_kg: result.training.co2_kg.0,
        inference_co2_kg: result.inference.co2_kg.0,
        total_co2_kg: result.total.co2_kg.0,
        total_water_liters: result.total.water_liters.0,
        total_energy_kwh: result.total.energy_kwh.0,
        total_cost_usd: result.total.cost_usd.0,
        ethical_score: result.ethical.score,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(row)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))?;

    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_names() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 14, 25, 1).unwrap();
        assert_eq!(
            ExportFormat::Json.file_name(at),
            "ai_impact_report_20261018_142501.json"
        );
        assert_eq!(
            ExportFormat::Csv.file_name(at),
            "ai_impact_summary_20261018_142501.csv"
        );
    }

    #[test]
    fn test_default_metadata() {
        let meta = ExportMetadata::default();
        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!meta.author.is_empty());
    }
}
