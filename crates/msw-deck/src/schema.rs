//! Deck file schema definitions.
//!
//! Quantities are expressed in the deck's unit system; conversion to SI
//! happens in [`crate::convert`].

use msw_core::UnitSystem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeckFile {
    pub version: u32,
    #[serde(default)]
    pub units: UnitSystem,
    #[serde(default)]
    pub wells: Vec<WellDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellDef {
    pub welsegs: WelsegsDef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sicd: Vec<SpiralIcdDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aicd: Vec<AutoIcdDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub valves: Vec<ValveDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<ConnectionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WelsegsDef {
    pub well: String,
    pub top_depth: f64,
    pub top_length: f64,
    pub wellbore_volume: f64,
    /// "INC" or "ABS".
    pub info_type: String,
    /// "HFA", "HF-" or "H--".
    #[serde(default = "default_pressure_components")]
    pub pressure_components: String,
    /// "HO" or "DF".
    #[serde(default = "default_flow_model")]
    pub flow_model: String,
    #[serde(default)]
    pub top_x: f64,
    #[serde(default)]
    pub top_y: f64,
    #[serde(default)]
    pub records: Vec<RecordDef>,
}

fn default_pressure_components() -> String {
    "HFA".to_string()
}

fn default_flow_model() -> String {
    "HO".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordDef {
    pub segment1: i32,
    pub segment2: i32,
    pub branch: i32,
    pub join_segment: i32,
    pub length: f64,
    pub depth: f64,
    pub diameter: f64,
    pub roughness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default)]
    pub length_x: f64,
    #[serde(default)]
    pub length_y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusDef {
    #[default]
    Open,
    Shut,
}

/// Calibration items shared by WSEGSICD and WSEGAICD entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IcdDef {
    pub segment: i32,
    pub strength: f64,
    pub length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_calibration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viscosity_calibration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_transition: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_viscosity_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_scaling_factor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_absolute_rate: Option<f64>,
    #[serde(default)]
    pub status: StatusDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpiralIcdDef {
    #[serde(flatten)]
    pub icd: IcdDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoIcdDef {
    #[serde(flatten)]
    pub icd: IcdDef,
    pub flow_rate_exponent: f64,
    pub viscosity_exponent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_flow_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_flow_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_flow_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_viscosity_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_viscosity_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_viscosity_fraction: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValveDef {
    pub segment: i32,
    pub flow_coefficient: f64,
    pub cross_area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipe_diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipe_roughness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipe_cross_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cross_area: Option<f64>,
    #[serde(default)]
    pub status: StatusDef,
}

/// A COMPSEGS entry. `perf_start` and `perf_end` are measured depths along
/// `branch`; `segment` and `center_depth` are found from the segment tree
/// when left out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConnectionDef {
    #[serde(default = "default_branch")]
    pub branch: i32,
    pub perf_start: f64,
    pub perf_end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_depth: Option<f64>,
}

fn default_branch() -> i32 {
    1
}

impl WellDef {
    pub fn name(&self) -> &str {
        &self.welsegs.well
    }
}
