pub mod config;
pub mod curves;
pub mod error;
pub mod interp;
pub mod model;
pub mod pack;
pub mod sweep;
pub mod table;

pub use config::{IronModel, ModelConfig};
pub use curves::{AirRateUnits, CurveSet, Lever};
pub use error::{FlotationError, Result};
pub use model::{OperatingPoint, PerformanceModel, PerformanceResult, evaluate, standard_model};
pub use sweep::{SweepPoint, linspace};
pub use table::{Response, ResponseTable};
pub use pbflot_data;
