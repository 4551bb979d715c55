use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::curves::AirRateUnits;
use crate::error::{FlotationError, Result};

/// How iron reports to the concentrate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IronModel {
    /// Feed iron reduced by SMBS rejection only. Iron grade is capped at
    /// the feed grade.
    #[default]
    DepressionOnly,
    /// SMBS rejection plus collector activation and air-driven entrainment
    /// of iron sulfides. Iron grade is capped at 2.5x the feed grade.
    DepressionPlusActivation,
}

impl IronModel {
    /// Upper bound of iron grade as a multiple of feed iron grade.
    pub fn upper_clamp_factor(self) -> f64 {
        match self {
            Self::DepressionOnly => 1.0,
            Self::DepressionPlusActivation => 2.5,
        }
    }
}

impl fmt::Display for IronModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DepressionOnly => "depression_only",
            Self::DepressionPlusActivation => "depression_plus_activation",
        })
    }
}

impl FromStr for IronModel {
    type Err = FlotationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "depression_only" | "basic" => Ok(Self::DepressionOnly),
            "depression_plus_activation" | "extended" => Ok(Self::DepressionPlusActivation),
            _ => Err(FlotationError::UnknownIronModel(s.to_string())),
        }
    }
}

/// Model variant selection, loadable from JSON or any other serde format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub iron_model: IronModel,
    pub air_rate_units: AirRateUnits,
}
