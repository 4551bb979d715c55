use std::collections::BTreeMap;
use std::ops::Index;

use pbflot_data::{ControlPointRecord, ResponseTableRecord};

use crate::error::{FlotationError, Result};
use crate::interp::{Bracket, lerp, locate};

/// An empirical response curve: named attributes sampled at strictly
/// increasing control-point keys.
///
/// Tables are validated once at construction and never mutated, so
/// interpolation cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseTable {
    name: String,
    unit: String,
    attributes: Vec<String>,
    keys: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl ResponseTable {
    /// Builds a table from `(key, values)` points.
    ///
    /// Points may be given in any order; they are sorted by key. Each point
    /// must carry exactly one value per attribute and keys must be finite
    /// and distinct.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        attributes: Vec<String>,
        mut points: Vec<(f64, Vec<f64>)>,
    ) -> Result<Self> {
        let name = name.into();

        if points.is_empty() {
            return Err(FlotationError::EmptyTable(name));
        }
        if attributes.is_empty() {
            return Err(FlotationError::NoAttributes(name));
        }
        for (i, attr) in attributes.iter().enumerate() {
            if attributes[..i].contains(attr) {
                return Err(FlotationError::DuplicateAttribute {
                    table: name,
                    attribute: attr.clone(),
                });
            }
        }
        for (key, values) in &points {
            if !key.is_finite() {
                return Err(FlotationError::NonFiniteKey { table: name, key: *key });
            }
            if values.len() != attributes.len() {
                return Err(FlotationError::RaggedPoint {
                    table: name,
                    key: *key,
                    expected: attributes.len(),
                    found: values.len(),
                });
            }
        }

        if !points.windows(2).all(|w| w[0].0 <= w[1].0) {
            log::trace!("sorting control points of table '{name}'");
            points.sort_by(|a, b| a.0.total_cmp(&b.0));
        }
        if let Some(w) = points.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(FlotationError::DuplicateKey {
                table: name,
                key: w[0].0,
            });
        }

        let (keys, rows) = points.into_iter().unzip();
        Ok(Self {
            name,
            unit: unit.into(),
            attributes,
            keys,
            rows,
        })
    }

    /// Builds a table from borrowed rows, as authored in constant tables.
    pub fn from_rows(
        name: &str,
        unit: &str,
        attributes: &[&str],
        rows: &[(f64, &[f64])],
    ) -> Result<Self> {
        Self::new(
            name,
            unit,
            attributes.iter().map(|a| a.to_string()).collect(),
            rows.iter().map(|(k, v)| (*k, v.to_vec())).collect(),
        )
    }

    pub fn from_record(record: &ResponseTableRecord) -> Result<Self> {
        Self::new(
            record.name.clone(),
            record.unit.clone(),
            record.attributes.clone(),
            record
                .points
                .iter()
                .map(|p| (p.key, p.values.clone()))
                .collect(),
        )
    }

    pub fn to_record(&self) -> ResponseTableRecord {
        ResponseTableRecord {
            name: self.name.clone(),
            unit: self.unit.clone(),
            attributes: self.attributes.clone(),
            points: self
                .keys
                .iter()
                .zip(&self.rows)
                .map(|(&key, values)| ControlPointRecord {
                    key,
                    values: values.clone(),
                })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// `(min_key, max_key)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.keys[0], self.keys[self.keys.len() - 1])
    }

    /// Position of `attribute` in every response of this table.
    pub fn attribute_index(&self, attribute: &str) -> Result<usize> {
        self.attributes
            .iter()
            .position(|a| a == attribute)
            .ok_or_else(|| FlotationError::MissingAttribute {
                table: self.name.clone(),
                attribute: attribute.to_string(),
            })
    }

    /// The authored response at control point `i`.
    pub fn point(&self, i: usize) -> Option<(f64, Response<'_>)> {
        let values = self.rows.get(i)?.clone();
        Some((
            self.keys[i],
            Response {
                attributes: &self.attributes,
                values,
            },
        ))
    }

    /// Interpolated response at `x`.
    ///
    /// Outside the key range the edge response is returned unchanged; the
    /// curve is never extrapolated.
    pub fn interpolate(&self, x: f64) -> Response<'_> {
        let values = match locate(x, &self.keys) {
            Bracket::Row(i) => self.rows[i].clone(),
            Bracket::Between { lo, weight } => self.rows[lo]
                .iter()
                .zip(&self.rows[lo + 1])
                .map(|(&a, &b)| lerp(a, b, weight))
                .collect(),
        };
        Response {
            attributes: &self.attributes,
            values,
        }
    }
}

/// Attribute values produced by a table lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<'a> {
    attributes: &'a [String],
    values: Vec<f64>,
}

impl<'a> Response<'a> {
    pub fn get(&self, attribute: &str) -> Option<f64> {
        self.attributes
            .iter()
            .position(|a| a == attribute)
            .map(|i| self.values[i])
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.attributes
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

impl Index<usize> for Response<'_> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}
