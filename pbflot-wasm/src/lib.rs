//! WASM bindings for the Pb cleaner flotation model.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p pbflot-wasm
//! ```
//!
//! Operating points cross the boundary as 8-element arrays:
//! `[collector, air_rate, smbs, ph, luproset, fe_feed, carbon_feed, zn_feed]`.
//! Results come back as `[recovery, grade, iron_grade, carbon_grade, zinc_grade]`.

use wasm_bindgen::prelude::*;

use pbflot::{
    FlotationError, Lever, ModelConfig, OperatingPoint, PerformanceModel, PerformanceResult,
    standard_model,
};

fn to_js(e: FlotationError) -> JsError {
    JsError::new(&e.to_string())
}

fn point_from_slice(inputs: &[f64]) -> pbflot::Result<OperatingPoint> {
    match *inputs {
        [collector, air_rate, smbs, ph, luproset, fe, c, zn] => Ok(OperatingPoint::new(
            collector, air_rate, smbs, ph, luproset, fe, c, zn,
        )),
        _ => Err(FlotationError::DataError(format!(
            "expected 8 inputs, got {}",
            inputs.len()
        ))),
    }
}

fn result_to_vec(r: &PerformanceResult) -> Vec<f64> {
    vec![r.recovery, r.grade, r.iron_grade, r.carbon_grade, r.zinc_grade]
}

fn model_for(iron_model: &str, air_units: &str) -> pbflot::Result<PerformanceModel> {
    PerformanceModel::from_config(&ModelConfig {
        iron_model: iron_model.parse()?,
        air_rate_units: air_units.parse()?,
    })
}

fn flat_sweep(
    model: &PerformanceModel,
    lever: &str,
    inputs: &[f64],
    steps: usize,
) -> pbflot::Result<Vec<f64>> {
    let lever: Lever = lever.parse()?;
    let base = point_from_slice(inputs)?;
    Ok(model
        .sweep_domain(&base, lever, steps)
        .iter()
        .flat_map(|p| {
            let mut row = vec![p.value];
            row.extend(result_to_vec(&p.result));
            row
        })
        .collect())
}

// ── Evaluation ──

/// Evaluates the standard model (depression-only iron, air in L/min).
#[allow(clippy::too_many_arguments)]
#[wasm_bindgen]
pub fn evaluate(
    collector: f64,
    air_rate: f64,
    smbs: f64,
    ph: f64,
    luproset: f64,
    fe_feed_grade: f64,
    carbon_feed_grade: f64,
    zn_feed_grade: f64,
) -> Vec<f64> {
    result_to_vec(&pbflot::evaluate(
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

/// Evaluates a chosen model variant.
///
/// `iron_model` is "depression_only" or "depression_plus_activation";
/// `air_units` is "l/min" or "m3/h".
#[wasm_bindgen]
pub fn evaluate_with(
    iron_model: &str,
    air_units: &str,
    inputs: &[f64],
) -> Result<Vec<f64>, JsError> {
    let model = model_for(iron_model, air_units).map_err(to_js)?;
    let point = point_from_slice(inputs).map_err(to_js)?;
    Ok(result_to_vec(&model.evaluate(&point)))
}

/// Pb/Zn selectivity index for a lead grade and zinc grade.
#[wasm_bindgen]
pub fn selectivity(grade: f64, zinc_grade: f64) -> f64 {
    PerformanceResult {
        recovery: 0.0,
        grade,
        iron_grade: 0.0,
        carbon_grade: 0.0,
        zinc_grade,
    }
    .selectivity()
}

// ── Curves ──

/// Interpolated response of one lever's table, in `curve_attributes` order.
#[wasm_bindgen]
pub fn interpolate_curve(lever: &str, x: f64) -> Result<Vec<f64>, JsError> {
    let lever: Lever = lever.parse().map_err(to_js)?;
    Ok(standard_model()
        .curves()
        .table(lever)
        .interpolate(x)
        .values()
        .to_vec())
}

/// Attribute names of one lever's table.
#[wasm_bindgen]
pub fn curve_attributes(lever: &str) -> Result<js_sys::Array, JsError> {
    let lever: Lever = lever.parse().map_err(to_js)?;
    Ok(standard_model()
        .curves()
        .table(lever)
        .attributes()
        .iter()
        .map(|a| JsValue::from_str(a))
        .collect())
}

/// Returns [min, max] of one lever's authored domain.
#[wasm_bindgen]
pub fn curve_domain(lever: &str) -> Result<Vec<f64>, JsError> {
    let lever: Lever = lever.parse().map_err(to_js)?;
    let (lo, hi) = standard_model().curves().table(lever).domain();
    Ok(vec![lo, hi])
}

// ── Sweeps ──

/// Sweeps a lever across its domain on the standard model.
///
/// Returns `steps` rows of `[value, recovery, grade, iron, carbon, zinc]`,
/// flattened.
#[wasm_bindgen]
pub fn sweep(lever: &str, inputs: &[f64], steps: usize) -> Result<Vec<f64>, JsError> {
    flat_sweep(standard_model(), lever, inputs, steps).map_err(to_js)
}
