#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A complete set of response curves, as stored in a compressed curve pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePackRecord {
    pub version: Vec<VersionRecord>,
    pub tables: Vec<ResponseTableRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub tag: String,
    pub notes: String,
}

/// One response table. Every point carries one value per attribute, in
/// the same order as `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTableRecord {
    pub name: String,
    pub unit: String,
    pub attributes: Vec<String>,
    pub points: Vec<ControlPointRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPointRecord {
    pub key: f64,
    pub values: Vec<f64>,
}
