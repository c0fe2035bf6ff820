// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reference data tables.
//!
//! Each table is a closed enum whose variants carry a fixed coefficient
//! bundle. Variants are looked up by display name (`"EU-North (Finland)"`)
//! or by slug (`eu-north`), ASCII case-insensitive.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A name that does not resolve in its reference table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownName {
    #[error("unknown data center location: {0}")]
    Location(String),

    #[error("unknown hardware: {0}")]
    Hardware(String),

    #[error("unknown model type: {0}")]
    ModelType(String),
}

/// Grid and cooling characteristics of a data-center region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationProfile {
    /// gCO2e per kWh of grid electricity
    pub carbon_intensity: f64,
    /// Liters of cooling water per kWh
    pub water_intensity: f64,
    /// Share of renewable generation, 0-100
    pub renewable_pct: u8,
}

/// Data-center location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    UsWest,
    UsEast,
    EuWest,
    EuCentral,
    EuNorth,
    AsiaPacific,
    AsiaEast,
    GlobalAverage,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::UsWest,
        Location::UsEast,
        Location::EuWest,
        Location::EuCentral,
        Location::EuNorth,
        Location::AsiaPacific,
        Location::AsiaEast,
        Location::GlobalAverage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Location::UsWest => "US-West (Oregon)",
            Location::UsEast => "US-East (Virginia)",
            Location::EuWest => "EU-West (Ireland)",
            Location::EuCentral => "EU-Central (Germany)",
            Location::EuNorth => "EU-North (Finland)",
            Location::AsiaPacific => "Asia-Pacific (Singapore)",
            Location::AsiaEast => "Asia-East (Tokyo)",
            Location::GlobalAverage => "Global Average",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Location::UsWest => "us-west",
            Location::UsEast => "us-east",
            Location::EuWest => "eu-west",
            Location::EuCentral => "eu-central",
            Location::EuNorth => "eu-north",
            Location::AsiaPacific => "asia-pacific",
            Location::AsiaEast => "asia-east",
            Location::GlobalAverage => "global",
        }
    }

    pub fn profile(&self) -> LocationProfile {
        let (carbon_intensity, water_intensity, renewable_pct) = match self {
            Location::UsWest => (350.0, 2.5, 60),
            Location::UsEast => (450.0, 3.0, 40),
            Location::EuWest => (300.0, 2.0, 70),
            Location::EuCentral => (400.0, 2.8, 55),
            Location::EuNorth => (200.0, 1.8, 85),
            Location::AsiaPacific => (500.0, 4.5, 25),
            Location::AsiaEast => (480.0, 3.5, 30),
            Location::GlobalAverage => (450.0, 3.0, 40),
        };
        LocationProfile {
            carbon_intensity,
            water_intensity,
            renewable_pct,
        }
    }
}

/// Power, efficiency and rental cost of an accelerator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareSpec {
    /// Thermal design power in watts
    pub tdp_watts: f64,
    pub efficiency: f64,
    /// Rental price in USD per accelerator-hour
    pub cost_per_hour: f64,
    pub generation: &'static str,
}

/// Accelerator model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hardware {
    NvidiaA100,
    NvidiaH100,
    NvidiaV100,
    TpuV4,
    TpuV5,
}

impl Hardware {
    pub const ALL: [Hardware; 5] = [
        Hardware::NvidiaA100,
        Hardware::NvidiaH100,
        Hardware::NvidiaV100,
        Hardware::TpuV4,
        Hardware::TpuV5,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Hardware::NvidiaA100 => "NVIDIA A100",
            Hardware::NvidiaH100 => "NVIDIA H100",
            Hardware::NvidiaV100 => "NVIDIA V100",
            Hardware::TpuV4 => "TPU v4",
            Hardware::TpuV5 => "TPU v5",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Hardware::NvidiaA100 => "a100",
            Hardware::NvidiaH100 => "h100",
            Hardware::NvidiaV100 => "v100",
            Hardware::TpuV4 => "tpu-v4",
            Hardware::TpuV5 => "tpu-v5",
        }
    }

    pub fn spec(&self) -> HardwareSpec {
        let (tdp_watts, efficiency, cost_per_hour, generation) = match self {
            Hardware::NvidiaA100 => (400.0, 1.0, 3.0, "Ampere"),
            Hardware::NvidiaH100 => (700.0, 1.4, 8.0, "Hopper"),
            Hardware::NvidiaV100 => (300.0, 0.7, 2.0, "Volta"),
            Hardware::TpuV4 => (350.0, 1.2, 3.5, "TPU"),
            Hardware::TpuV5 => (400.0, 1.5, 4.5, "TPU"),
        };
        HardwareSpec {
            tdp_watts,
            efficiency,
            cost_per_hour,
            generation,
        }
    }

    pub fn generation(&self) -> &'static str {
        self.spec().generation
    }
}

/// Efficiency and risk modifiers of a model architecture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTypeProfile {
    pub efficiency_multiplier: f64,
    /// Added to the size-based ethical risk score
    pub risk_modifier: f64,
}

/// Model architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelType {
    Dense,
    MixtureOfExperts,
}

impl ModelType {
    pub const ALL: [ModelType; 2] = [ModelType::Dense, ModelType::MixtureOfExperts];

    pub fn name(&self) -> &'static str {
        match self {
            ModelType::Dense => "Dense",
            ModelType::MixtureOfExperts => "MoE (Mixture of Experts)",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ModelType::Dense => "dense",
            ModelType::MixtureOfExperts => "moe",
        }
    }

    pub fn profile(&self) -> ModelTypeProfile {
        match self {
            ModelType::Dense => ModelTypeProfile {
                efficiency_multiplier: 1.0,
                risk_modifier: 0.0,
            },
            ModelType::MixtureOfExperts => ModelTypeProfile {
                efficiency_multiplier: 0.8,
                risk_modifier: 0.5,
            },
        }
    }
}

/// Find a variant by display name or slug, ASCII case-insensitive
fn find_by_name<T: Copy>(
    all: &[T],
    name: &str,
    keys: impl Fn(&T) -> [&'static str; 2],
) -> Option<T> {
    let needle = name.trim();
    all.iter()
        .copied()
        .find(|v| keys(v).iter().any(|k| k.eq_ignore_ascii_case(needle)))
}

fn deserialize_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(de::Error::custom)
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Location {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&Location::ALL, s, |v| [v.name(), v.slug()])
            .ok_or_else(|| UnknownName::Location(s.to_string()))
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_name(deserializer)
    }
}

impl fmt::Display for Hardware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hardware {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&Hardware::ALL, s, |v| [v.name(), v.slug()])
            .ok_or_else(|| UnknownName::Hardware(s.to_string()))
    }
}

impl Serialize for Hardware {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Hardware {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_name(deserializer)
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelType {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&ModelType::ALL, s, |v| [v.name(), v.slug()])
            .ok_or_else(|| UnknownName::ModelType(s.to_string()))
    }
}

impl Serialize for ModelType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ModelType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_name(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_and_slug() {
        assert_eq!("EU-North (Finland)".parse::<Location>(), Ok(Location::EuNorth));
        assert_eq!("eu-north".parse::<Location>(), Ok(Location::EuNorth));
        assert_eq!("global average".parse::<Location>(), Ok(Location::GlobalAverage));
        assert_eq!("TPU V5".parse::<Hardware>(), Ok(Hardware::TpuV5));
        assert_eq!("MoE".parse::<ModelType>(), Ok(ModelType::MixtureOfExperts));
        assert_eq!(
            "MoE (Mixture of Experts)".parse::<ModelType>(),
            Ok(ModelType::MixtureOfExperts)
        );
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert_eq!(
            "Mars Base".parse::<Location>(),
            Err(UnknownName::Location("Mars Base".to_string()))
        );
        assert!(matches!("RTX 4090".parse::<Hardware>(), Err(UnknownName::Hardware(_))));
        assert!(matches!("Sparse".parse::<ModelType>(), Err(UnknownName::ModelType(_))));
    }

    #[test]
    fn test_names_round_trip() {
        for loc in Location::ALL {
            assert_eq!(loc.name().parse::<Location>(), Ok(loc));
            assert_eq!(loc.to_string(), loc.name());
        }
        for hw in Hardware::ALL {
            assert_eq!(hw.slug().parse::<Hardware>(), Ok(hw));
        }
    }

    #[test]
    fn test_table_values() {
        let finland = Location::EuNorth.profile();
        assert_eq!(finland.carbon_intensity, 200.0);
        assert_eq!(finland.water_intensity, 1.8);
        assert_eq!(finland.renewable_pct, 85);

        let h100 = Hardware::NvidiaH100.spec();
        assert_eq!(h100.tdp_watts, 700.0);
        assert_eq!(h100.efficiency, 1.4);
        assert_eq!(h100.cost_per_hour, 8.0);
        assert_eq!(Hardware::NvidiaV100.generation(), "Volta");

        assert_eq!(ModelType::Dense.profile().risk_modifier, 0.0);
        assert_eq!(ModelType::MixtureOfExperts.profile().efficiency_multiplier, 0.8);
    }

    #[test]
    fn test_no_zero_tdp_in_table() {
        assert!(Hardware::ALL.iter().all(|hw| hw.spec().tdp_watts > 0.0));
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Location::AsiaEast).unwrap();
        assert_eq!(json, "\"Asia-East (Tokyo)\"");

        let hw: Hardware = serde_json::from_str("\"tpu-v4\"").unwrap();
        assert_eq!(hw, Hardware::TpuV4);

        let err = serde_json::from_str::<ModelType>("\"Sparse\"").unwrap_err();
        assert!(err.to_string().contains("unknown model type"));
    }
}
