// SPDX-License-Identifier: PMPL-1.0-or-later

//! # EcoEthics Report
//!
//! Turns a calculation result into things people can act on: everyday
//! equivalents, rule-based recommendations, scenario deltas, and the
//! JSON/CSV export formats.

pub mod compare;
pub mod comparisons;
pub mod error;
pub mod export;
pub mod format;
pub mod recommendations;

pub use compare::{percentage_change, MetricDelta, ScenarioComparison};
pub use comparisons::{generate_comparisons, Comparisons};
pub use error::{ReportError, Result};
pub use export::{export_csv, export_json, ExportFormat, ExportMetadata, ImpactReport};
pub use recommendations::{generate_recommendations, Category, Priority, Recommendation};
