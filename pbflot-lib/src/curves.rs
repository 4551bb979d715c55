//! Built-in response curves for the Pb cleaner circuit.
//!
//! Each table is `(key, [attribute values...])` with values in the order of
//! the matching `*_ATTRIBUTES` slice.

use std::fmt;
use std::str::FromStr;

use pbflot_data::{CurvePackRecord, VersionRecord};
use serde::{Deserialize, Serialize};

use crate::error::{FlotationError, Result};
use crate::table::ResponseTable;

pub const COLLECTOR_ATTRIBUTES: &[&str] = &["recovery", "grade", "zn_activation", "fe_activation"];

/// Collector (xanthate) dosage in g/t.
pub const COLLECTOR_CURVE: &[(f64, &[f64])] = &[
    (0.0, &[10.0, 45.0, 0.1, 0.0]),
    (25.0, &[30.0, 48.0, 0.3, 0.05]),
    (50.0, &[46.0, 55.0, 0.6, 0.1]),
    (75.0, &[58.0, 45.0, 1.2, 0.2]),
    (100.0, &[70.0, 40.0, 2.0, 0.35]),
    (150.0, &[75.0, 30.0, 3.5, 0.6]),
];

pub const AIR_RATE_ATTRIBUTES: &[&str] = &["recovery", "grade", "zn_flotation", "fe_flotation"];

/// Air rate in L/min.
pub const AIR_RATE_CURVE: &[(f64, &[f64])] = &[
    (0.0, &[10.0, 35.0, 0.05, 0.0]),
    (25.0, &[35.0, 50.0, 0.15, 0.02]),
    (50.0, &[45.0, 52.0, 0.25, 0.05]),
    (75.0, &[65.0, 48.0, 0.4, 0.1]),
    (100.0, &[75.0, 30.0, 0.6, 0.15]),
];

pub const SMBS_ATTRIBUTES: &[&str] = &["recovery", "grade", "iron_rejection", "zn_depression"];

/// Sodium metabisulfite dosage in g/t. Recovery falls as grade rises.
pub const SMBS_CURVE: &[(f64, &[f64])] = &[
    (0.0, &[100.0, 45.0, 0.0, 0.0]),
    (50.0, &[99.0, 52.0, 15.0, 10.0]),
    (100.0, &[98.0, 58.0, 35.0, 25.0]),
    (150.0, &[92.0, 62.0, 50.0, 40.0]),
    (200.0, &[88.0, 65.0, 65.0, 55.0]),
    (300.0, &[85.0, 68.0, 80.0, 70.0]),
];

pub const PH_ATTRIBUTES: &[&str] = &["recovery_multiplier", "grade_bonus", "zn_selectivity"];

pub const PH_CURVE: &[(f64, &[f64])] = &[
    (7.0, &[1.0, -2.0, 1.2]),
    (7.5, &[1.0, 0.0, 1.0]),
    (8.0, &[1.0, 2.0, 0.9]),
    (8.5, &[1.0, 3.5, 0.8]),
    (9.0, &[1.0, 4.0, 0.7]),
    (9.5, &[0.85, 3.0, 0.6]),
    (10.0, &[0.70, 1.0, 0.5]),
];

pub const LUPROSET_ATTRIBUTES: &[&str] = &["carbon_rejection", "recovery_effect"];

/// Luproset (carbon depressant) dosage in g/t.
pub const LUPROSET_CURVE: &[(f64, &[f64])] = &[
    (0.0, &[0.0, 0.0]),
    (50.0, &[20.0, -0.5]),
    (100.0, &[35.0, -1.0]),
    (200.0, &[55.0, -2.0]),
    (300.0, &[70.0, -3.5]),
    (500.0, &[85.0, -5.0]),
];

/// 1 L/min of air is treated as 6 m³/h on the plant-scale convention.
const M3_PER_HOUR_PER_L_PER_MIN: f64 = 6.0;

/// Unit convention for the air-rate lever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirRateUnits {
    /// Bench scale, 0 to 100 L/min.
    #[default]
    LitresPerMinute,
    /// Plant scale, 0 to 600 m³/h.
    CubicMetresPerHour,
}

impl AirRateUnits {
    pub fn label(self) -> &'static str {
        match self {
            Self::LitresPerMinute => "L/min",
            Self::CubicMetresPerHour => "m3/h",
        }
    }

    fn key_scale(self) -> f64 {
        match self {
            Self::LitresPerMinute => 1.0,
            Self::CubicMetresPerHour => M3_PER_HOUR_PER_L_PER_MIN,
        }
    }
}

impl fmt::Display for AirRateUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LitresPerMinute => "litres_per_minute",
            Self::CubicMetresPerHour => "cubic_metres_per_hour",
        })
    }
}

impl FromStr for AirRateUnits {
    type Err = FlotationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "litres_per_minute" | "l/min" | "lpm" => Ok(Self::LitresPerMinute),
            "cubic_metres_per_hour" | "m3/h" | "m3h" => Ok(Self::CubicMetresPerHour),
            _ => Err(FlotationError::UnknownAirRateUnits(s.to_string())),
        }
    }
}

/// One of the five operator-controlled inputs, each backed by a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    Collector,
    AirRate,
    Smbs,
    Ph,
    Luproset,
}

impl Lever {
    pub const ALL: [Lever; 5] = [
        Lever::Collector,
        Lever::AirRate,
        Lever::Smbs,
        Lever::Ph,
        Lever::Luproset,
    ];

    /// Table name used in curve packs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Collector => "collector",
            Self::AirRate => "air_rate",
            Self::Smbs => "smbs",
            Self::Ph => "ph",
            Self::Luproset => "luproset",
        }
    }
}

impl fmt::Display for Lever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lever {
    type Err = FlotationError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase().replace('-', "_");
        Lever::ALL
            .into_iter()
            .find(|l| l.name() == lower)
            .or(match lower.as_str() {
                "air" => Some(Lever::AirRate),
                "smb" | "metabisulfite" => Some(Lever::Smbs),
                _ => None,
            })
            .ok_or_else(|| FlotationError::UnknownLever(s.to_string()))
    }
}

/// The five response tables a performance model combines.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub collector: ResponseTable,
    pub air_rate: ResponseTable,
    pub smbs: ResponseTable,
    pub ph: ResponseTable,
    pub luproset: ResponseTable,
}

impl CurveSet {
    /// The built-in curves, with the air-rate keys in `units`.
    pub fn standard(units: AirRateUnits) -> Self {
        let scale = units.key_scale();
        let air_points = AIR_RATE_CURVE
            .iter()
            .map(|(k, v)| (k * scale, v.to_vec()))
            .collect();

        CurveSet {
            collector: ResponseTable::from_rows("collector", "g/t", COLLECTOR_ATTRIBUTES, COLLECTOR_CURVE)
                .expect("built-in collector curve is valid"),
            air_rate: ResponseTable::new(
                "air_rate",
                units.label(),
                AIR_RATE_ATTRIBUTES.iter().map(|a| a.to_string()).collect(),
                air_points,
            )
            .expect("built-in air rate curve is valid"),
            smbs: ResponseTable::from_rows("smbs", "g/t", SMBS_ATTRIBUTES, SMBS_CURVE)
                .expect("built-in SMBS curve is valid"),
            ph: ResponseTable::from_rows("ph", "pH", PH_ATTRIBUTES, PH_CURVE)
                .expect("built-in pH curve is valid"),
            luproset: ResponseTable::from_rows("luproset", "g/t", LUPROSET_ATTRIBUTES, LUPROSET_CURVE)
                .expect("built-in Luproset curve is valid"),
        }
    }

    pub fn table(&self, lever: Lever) -> &ResponseTable {
        match lever {
            Lever::Collector => &self.collector,
            Lever::AirRate => &self.air_rate,
            Lever::Smbs => &self.smbs,
            Lever::Ph => &self.ph,
            Lever::Luproset => &self.luproset,
        }
    }

    /// Assembles a curve set from pack records, matching tables by name.
    pub fn from_record(record: &CurvePackRecord) -> Result<Self> {
        let find = |lever: Lever| -> Result<ResponseTable> {
            let table = record
                .tables
                .iter()
                .find(|t| t.name == lever.name())
                .ok_or_else(|| FlotationError::UnknownTable(lever.name().to_string()))?;
            ResponseTable::from_record(table)
        };

        Ok(CurveSet {
            collector: find(Lever::Collector)?,
            air_rate: find(Lever::AirRate)?,
            smbs: find(Lever::Smbs)?,
            ph: find(Lever::Ph)?,
            luproset: find(Lever::Luproset)?,
        })
    }

    pub fn to_record(&self) -> CurvePackRecord {
        CurvePackRecord {
            version: vec![VersionRecord {
                tag: env!("CARGO_PKG_VERSION").to_string(),
                notes: "exported curve set".to_string(),
            }],
            tables: Lever::ALL
                .iter()
                .map(|&l| self.table(l).to_record())
                .collect(),
        }
    }
}

impl Default for CurveSet {
    fn default() -> Self {
        Self::standard(AirRateUnits::default())
    }
}
