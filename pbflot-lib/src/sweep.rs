use serde::{Deserialize, Serialize};

use crate::curves::Lever;
use crate::model::{OperatingPoint, PerformanceModel, PerformanceResult};

/// One evaluation along a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub result: PerformanceResult,
}

/// `n` evenly spaced values from `start` to `end` inclusive (numpy.linspace).
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

impl PerformanceModel {
    /// Evaluates `base` with `lever` stepped across `[start, end]`.
    pub fn sweep(
        &self,
        base: &OperatingPoint,
        lever: Lever,
        start: f64,
        end: f64,
        steps: usize,
    ) -> Vec<SweepPoint> {
        linspace(start, end, steps)
            .into_iter()
            .map(|value| SweepPoint {
                value,
                result: self.evaluate(&base.with_lever(lever, value)),
            })
            .collect()
    }

    /// Sweeps `lever` across the authored domain of its table.
    pub fn sweep_domain(
        &self,
        base: &OperatingPoint,
        lever: Lever,
        steps: usize,
    ) -> Vec<SweepPoint> {
        let (lo, hi) = self.curves().table(lever).domain();
        self.sweep(base, lever, lo, hi, steps)
    }
}
