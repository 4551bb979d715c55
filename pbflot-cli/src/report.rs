use std::fmt;

use anyhow::Result;
use serde::Serialize;

use pbflot::{Lever, OperatingPoint, PerformanceModel, PerformanceResult, ResponseTable, SweepPoint};

#[derive(Serialize)]
struct Evaluation<'a> {
    point: &'a OperatingPoint,
    result: &'a PerformanceResult,
    selectivity: f64,
}

pub fn evaluation_json(point: &OperatingPoint, result: &PerformanceResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Evaluation {
        point,
        result,
        selectivity: result.selectivity(),
    })?)
}

pub fn evaluation_text(
    model: &PerformanceModel,
    point: &OperatingPoint,
    result: &PerformanceResult,
) -> String {
    EvaluationReport {
        model,
        point,
        result,
    }
    .to_string()
}

pub fn sweep_text(lever: Lever, points: &[SweepPoint]) -> String {
    SweepReport { lever, points }.to_string()
}

pub fn table_text(table: &ResponseTable) -> String {
    TableReport(table).to_string()
}

pub fn response_text(table: &ResponseTable, x: f64) -> String {
    ResponseReport { table, x }.to_string()
}

struct EvaluationReport<'a> {
    model: &'a PerformanceModel,
    point: &'a OperatingPoint,
    result: &'a PerformanceResult,
}

impl fmt::Display for EvaluationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p, r) = (self.point, self.result);
        let air_unit = self.model.curves().air_rate.unit();
        writeln!(f, "Operating point ({} iron model)", self.model.iron_model())?;
        writeln!(f, "  Collector      {:>8.1} g/t", p.collector)?;
        writeln!(f, "  Air rate       {:>8.1} {air_unit}", p.air_rate)?;
        writeln!(f, "  SMBS           {:>8.1} g/t", p.smbs)?;
        writeln!(f, "  pH             {:>8.2}", p.ph)?;
        writeln!(f, "  Luproset       {:>8.1} g/t", p.luproset)?;
        writeln!(
            f,
            "  Feed Fe/C/Zn   {:.2} / {:.2} / {:.2} %",
            p.fe_feed_grade, p.carbon_feed_grade, p.zn_feed_grade
        )?;
        writeln!(f, "Concentrate")?;
        writeln!(f, "  Pb recovery    {:>8.1} %", r.recovery)?;
        writeln!(f, "  Pb grade       {:>8.1} %", r.grade)?;
        writeln!(f, "  Fe             {:>8.2} %", r.iron_grade)?;
        writeln!(f, "  C              {:>8.2} %", r.carbon_grade)?;
        writeln!(f, "  Zn             {:>8.2} %", r.zinc_grade)?;
        write!(f, "  Pb/Zn          {:>8.2}", r.selectivity())
    }
}

struct SweepReport<'a> {
    lever: Lever,
    points: &'a [SweepPoint],
}

impl fmt::Display for SweepReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10} {:>9} {:>8} {:>7} {:>7} {:>7} {:>7}",
            self.lever.name(),
            "recovery",
            "grade",
            "Fe",
            "C",
            "Zn",
            "Pb/Zn"
        )?;
        for p in self.points {
            let r = &p.result;
            write!(
                f,
                "\n{:>10.2} {:>9.2} {:>8.2} {:>7.2} {:>7.2} {:>7.2} {:>7.2}",
                p.value,
                r.recovery,
                r.grade,
                r.iron_grade,
                r.carbon_grade,
                r.zinc_grade,
                r.selectivity()
            )?;
        }
        Ok(())
    }
}

struct TableReport<'a>(&'a ResponseTable);

impl fmt::Display for TableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;
        write!(f, "{:>10}", format!("{} ({})", table.name(), table.unit()))?;
        for attr in table.attributes() {
            write!(f, " {attr:>16}")?;
        }
        for (key, response) in (0..table.len()).filter_map(|i| table.point(i)) {
            write!(f, "\n{key:>10.2}")?;
            for v in response.values() {
                write!(f, " {v:>16.3}")?;
            }
        }
        Ok(())
    }
}

struct ResponseReport<'a> {
    table: &'a ResponseTable,
    x: f64,
}

impl fmt::Display for ResponseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (table, x) = (self.table, self.x);
        let (lo, hi) = table.domain();
        write!(f, "{} at {x} {}", table.name(), table.unit())?;
        if x < lo || x > hi {
            write!(f, " (clamped to [{lo}, {hi}])")?;
        }
        for (attr, v) in table.interpolate(x).iter() {
            write!(f, "\n  {attr:<20} {v:.4}")?;
        }
        Ok(())
    }
}
