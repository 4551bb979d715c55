use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::{IronModel, ModelConfig};
use crate::curves::{CurveSet, Lever};
use crate::error::Result;
use crate::table::ResponseTable;

/// Recovery share not attributable to any single reagent (%).
const BASELINE_RECOVERY: f64 = 65.0;
/// Grade share not attributable to any single reagent (%).
const BASELINE_GRADE: f64 = 52.0;
/// Concentrate-to-feed upgrading ratio for carbon.
const CARBON_UPGRADE_RATIO: f64 = 4.0;
/// Fraction of collector-activated iron that reports to the concentrate.
const FE_ACTIVATION_WEIGHT: f64 = 0.15;
/// Zinc may concentrate up to this multiple of feed grade.
const ZINC_UPGRADE_LIMIT: f64 = 2.0;

/// Reagent settings and feed grades for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// Collector dosage (g/t).
    pub collector: f64,
    /// Air rate, in the units of the model's air-rate table.
    pub air_rate: f64,
    /// SMBS dosage (g/t).
    pub smbs: f64,
    pub ph: f64,
    /// Luproset dosage (g/t).
    pub luproset: f64,
    /// Feed iron grade (%).
    pub fe_feed_grade: f64,
    /// Feed carbon grade (%).
    pub carbon_feed_grade: f64,
    /// Feed zinc grade (%).
    pub zn_feed_grade: f64,
}

impl OperatingPoint {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        collector: f64,
        air_rate: f64,
        smbs: f64,
        ph: f64,
        luproset: f64,
        fe_feed_grade: f64,
        carbon_feed_grade: f64,
        zn_feed_grade: f64,
    ) -> Self {
        Self {
            collector,
            air_rate,
            smbs,
            ph,
            luproset,
            fe_feed_grade,
            carbon_feed_grade,
            zn_feed_grade,
        }
    }

    pub fn lever(&self, lever: Lever) -> f64 {
        match lever {
            Lever::Collector => self.collector,
            Lever::AirRate => self.air_rate,
            Lever::Smbs => self.smbs,
            Lever::Ph => self.ph,
            Lever::Luproset => self.luproset,
        }
    }

    /// Copy of this point with one lever moved to `value`.
    pub fn with_lever(mut self, lever: Lever, value: f64) -> Self {
        match lever {
            Lever::Collector => self.collector = value,
            Lever::AirRate => self.air_rate = value,
            Lever::Smbs => self.smbs = value,
            Lever::Ph => self.ph = value,
            Lever::Luproset => self.luproset = value,
        }
        self
    }
}

impl Default for OperatingPoint {
    /// No reagents at pH 7.5 on an average feed.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 7.5, 0.0, 11.0, 4.5, 10.5)
    }
}

/// Predicted concentrate quality, every field within its physical range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// Lead recovery, 0 to 100 %.
    pub recovery: f64,
    /// Lead grade, 35 to 75 %.
    pub grade: f64,
    pub iron_grade: f64,
    pub carbon_grade: f64,
    pub zinc_grade: f64,
}

impl PerformanceResult {
    /// Pb/Zn selectivity index. Returns 100 when no zinc reports.
    pub fn selectivity(&self) -> f64 {
        if self.zinc_grade > 0.0 {
            self.grade / self.zinc_grade
        } else {
            100.0
        }
    }
}

/// Clamp to `[lo, hi]`. When the bounds cross, `lo` wins; NaN maps to a bound.
fn bound(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

#[derive(Debug, Clone, Copy)]
struct CollectorColumns {
    recovery: usize,
    grade: usize,
    zn_activation: usize,
}

#[derive(Debug, Clone, Copy)]
struct AirColumns {
    recovery: usize,
    grade: usize,
    zn_flotation: usize,
}

#[derive(Debug, Clone, Copy)]
struct SmbsColumns {
    recovery: usize,
    grade: usize,
    iron_rejection: usize,
    zn_depression: usize,
}

#[derive(Debug, Clone, Copy)]
struct PhColumns {
    recovery_multiplier: usize,
    grade_bonus: usize,
    zn_selectivity: usize,
}

#[derive(Debug, Clone, Copy)]
struct LuprosetColumns {
    carbon_rejection: usize,
    recovery_effect: usize,
}

/// Attribute positions resolved once so evaluation cannot fail.
#[derive(Debug, Clone, Copy)]
struct Columns {
    collector: CollectorColumns,
    air: AirColumns,
    smbs: SmbsColumns,
    ph: PhColumns,
    luproset: LuprosetColumns,
    /// `(collector fe_activation, air fe_flotation)`, present only for the
    /// activation iron model.
    fe_activation: Option<(usize, usize)>,
}

impl Columns {
    fn resolve(curves: &CurveSet, iron_model: IronModel) -> Result<Self> {
        let col = |t: &ResponseTable, a: &str| t.attribute_index(a);
        let fe_activation = match iron_model {
            IronModel::DepressionOnly => None,
            IronModel::DepressionPlusActivation => Some((
                col(&curves.collector, "fe_activation")?,
                col(&curves.air_rate, "fe_flotation")?,
            )),
        };

        Ok(Columns {
            collector: CollectorColumns {
                recovery: col(&curves.collector, "recovery")?,
                grade: col(&curves.collector, "grade")?,
                zn_activation: col(&curves.collector, "zn_activation")?,
            },
            air: AirColumns {
                recovery: col(&curves.air_rate, "recovery")?,
                grade: col(&curves.air_rate, "grade")?,
                zn_flotation: col(&curves.air_rate, "zn_flotation")?,
            },
            smbs: SmbsColumns {
                recovery: col(&curves.smbs, "recovery")?,
                grade: col(&curves.smbs, "grade")?,
                iron_rejection: col(&curves.smbs, "iron_rejection")?,
                zn_depression: col(&curves.smbs, "zn_depression")?,
            },
            ph: PhColumns {
                recovery_multiplier: col(&curves.ph, "recovery_multiplier")?,
                grade_bonus: col(&curves.ph, "grade_bonus")?,
                zn_selectivity: col(&curves.ph, "zn_selectivity")?,
            },
            luproset: LuprosetColumns {
                carbon_rejection: col(&curves.luproset, "carbon_rejection")?,
                recovery_effect: col(&curves.luproset, "recovery_effect")?,
            },
            fe_activation,
        })
    }
}

/// Combines the five reagent response curves into concentrate predictions.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone)]
pub struct PerformanceModel {
    curves: CurveSet,
    iron_model: IronModel,
    columns: Columns,
}

impl PerformanceModel {
    /// Builds a model over `curves`.
    ///
    /// Fails if a table lacks an attribute the formula (or the chosen iron
    /// model) reads.
    pub fn new(curves: CurveSet, iron_model: IronModel) -> Result<Self> {
        let columns = Columns::resolve(&curves, iron_model)?;
        log::debug!(
            "performance model ready: iron model {iron_model}, air rate in {}",
            curves.air_rate.unit()
        );
        Ok(Self {
            curves,
            iron_model,
            columns,
        })
    }

    /// Model over the built-in curves.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        Self::new(CurveSet::standard(config.air_rate_units), config.iron_model)
    }

    pub fn curves(&self) -> &CurveSet {
        &self.curves
    }

    pub fn iron_model(&self) -> IronModel {
        self.iron_model
    }

    pub fn evaluate(&self, point: &OperatingPoint) -> PerformanceResult {
        let c = self.curves.collector.interpolate(point.collector);
        let a = self.curves.air_rate.interpolate(point.air_rate);
        let s = self.curves.smbs.interpolate(point.smbs);
        let p = self.curves.ph.interpolate(point.ph);
        let l = self.curves.luproset.interpolate(point.luproset);
        let cols = &self.columns;

        let base_recovery = 0.55 * c[cols.collector.recovery]
            + 0.25 * a[cols.air.recovery]
            + 0.20 * s[cols.smbs.recovery]
            + 0.10 * BASELINE_RECOVERY;
        let recovery = base_recovery * p[cols.ph.recovery_multiplier]
            + l[cols.luproset.recovery_effect];

        let base_grade = 0.50 * c[cols.collector.grade]
            + 0.25 * a[cols.air.grade]
            + 0.25 * s[cols.smbs.grade]
            + 0.10 * BASELINE_GRADE;
        let grade = base_grade + p[cols.ph.grade_bonus];

        let fe = point.fe_feed_grade;
        let iron_rejection = s[cols.smbs.iron_rejection] / 100.0;
        let mut iron_grade = fe * (1.0 - iron_rejection);
        if let Some((fe_activation, fe_flotation)) = cols.fe_activation {
            iron_grade += c[fe_activation] * fe * FE_ACTIVATION_WEIGHT + a[fe_flotation] * fe;
        }

        let carbon_ceiling = point.carbon_feed_grade * CARBON_UPGRADE_RATIO;
        let carbon_rejection = l[cols.luproset.carbon_rejection] / 100.0;
        let carbon_grade = carbon_ceiling * (1.0 - carbon_rejection);

        let base_zn =
            (c[cols.collector.zn_activation] + a[cols.air.zn_flotation]) * point.zn_feed_grade;
        let zn_with_ph = base_zn * p[cols.ph.zn_selectivity];
        let zn_depression = s[cols.smbs.zn_depression] / 100.0;
        let zinc_grade = zn_with_ph * (1.0 - zn_depression);

        PerformanceResult {
            recovery: bound(recovery, 0.0, 100.0),
            grade: bound(grade, 35.0, 75.0),
            iron_grade: bound(iron_grade, 0.1, fe * self.iron_model.upper_clamp_factor()),
            carbon_grade: bound(carbon_grade, 0.1, carbon_ceiling),
            zinc_grade: bound(zinc_grade, 0.01, point.zn_feed_grade * ZINC_UPGRADE_LIMIT),
        }
    }
}

impl Default for PerformanceModel {
    fn default() -> Self {
        Self::new(CurveSet::default(), IronModel::default())
            .expect("built-in curves carry every attribute")
    }
}

static STANDARD_MODEL: OnceLock<PerformanceModel> = OnceLock::new();

/// The default model (built-in curves, air in L/min, depression-only iron).
pub fn standard_model() -> &'static PerformanceModel {
    STANDARD_MODEL.get_or_init(PerformanceModel::default)
}

/// Evaluates the default model at one operating point.
#[allow(clippy::too_many_arguments)]
pub fn evaluate(
    collector: f64,
    air_rate: f64,
    smbs: f64,
    ph: f64,
    luproset: f64,
    fe_feed_grade: f64,
    carbon_feed_grade: f64,
    zn_feed_grade: f64,
) -> PerformanceResult {
    standard_model().evaluate(&OperatingPoint::new(
        collector,
        air_rate,
        smbs,
        ph,
        luproset,
        fe_feed_grade,
        carbon_feed_grade,
        zn_feed_grade,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_prefers_lower_when_crossed() {
        assert_eq!(bound(5.0, 0.01, 0.0), 0.01);
        assert_eq!(bound(f64::NAN, 0.0, 100.0), 100.0);
        assert_eq!(bound(-3.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_with_lever_only_moves_one_input() {
        let base = OperatingPoint::default();
        let moved = base.with_lever(Lever::Ph, 9.0);
        assert_eq!(moved.ph, 9.0);
        assert_eq!(moved.with_lever(Lever::Ph, base.ph), base);
    }

    #[test]
    fn test_selectivity_without_zinc() {
        let r = PerformanceResult {
            recovery: 80.0,
            grade: 60.0,
            iron_grade: 5.0,
            carbon_grade: 2.0,
            zinc_grade: 0.0,
        };
        assert_eq!(r.selectivity(), 100.0);
    }

    #[test]
    fn test_model_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PerformanceModel>();
    }
}
