//! WELSEGS keyword data as handed to the builder.
//!
//! All quantities are SI. Unit conversion from deck units happens before
//! records are built (see the `msw-deck` crate).

use crate::settings::{CompPressureDrop, GeometryMode, MultiPhaseModel};

/// First WELSEGS record: the well and its top segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WelsegsHeader {
    pub well: String,
    /// Depth of the top segment node (BHP reference depth).
    pub top_depth: f64,
    /// Length down the tubing to the top segment node.
    pub top_length: f64,
    /// Effective wellbore volume of the top segment.
    pub wellbore_volume: f64,
    pub info_type: GeometryMode,
    pub pressure_components: CompPressureDrop,
    pub flow_model: MultiPhaseModel,
    pub top_x: f64,
    pub top_y: f64,
}

impl WelsegsHeader {
    pub fn new(
        well: impl Into<String>,
        top_depth: f64,
        top_length: f64,
        wellbore_volume: f64,
        info_type: GeometryMode,
        pressure_components: CompPressureDrop,
    ) -> Self {
        Self {
            well: well.into(),
            top_depth,
            top_length,
            wellbore_volume,
            info_type,
            pressure_components,
            flow_model: MultiPhaseModel::default(),
            top_x: 0.0,
            top_y: 0.0,
        }
    }

    pub fn with_top_xy(mut self, x: f64, y: f64) -> Self {
        self.top_x = x;
        self.top_y = y;
        self
    }

    pub fn with_flow_model(mut self, model: MultiPhaseModel) -> Self {
        self.flow_model = model;
        self
    }
}

/// One range record: segments `segment1..=segment2` on `branch`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WelsegsRecord {
    pub segment1: i32,
    pub segment2: i32,
    pub branch: i32,
    /// Outlet of `segment1`.
    pub join_segment: i32,
    /// Length (INC: per segment; ABS: of the last segment in the range).
    pub length: f64,
    /// Depth (INC: change per segment; ABS: of the last segment in the range).
    pub depth: f64,
    pub diameter: f64,
    pub roughness: f64,
    /// Cross-sectional area; defaults to `pi * diameter^2 / 4`.
    pub area: Option<f64>,
    pub volume: Option<f64>,
    pub length_x: f64,
    pub length_y: f64,
}

impl WelsegsRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        segment1: i32,
        segment2: i32,
        branch: i32,
        join_segment: i32,
        length: f64,
        depth: f64,
        diameter: f64,
        roughness: f64,
    ) -> Self {
        Self {
            segment1,
            segment2,
            branch,
            join_segment,
            length,
            depth,
            diameter,
            roughness,
            area: None,
            volume: None,
            length_x: 0.0,
            length_y: 0.0,
        }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_node_xy(mut self, x: f64, y: f64) -> Self {
        self.length_x = x;
        self.length_y = y;
        self
    }

    pub(crate) fn cross_area(&self) -> f64 {
        self.area
            .unwrap_or_else(|| std::f64::consts::PI * self.diameter * self.diameter / 4.0)
    }
}

/// A complete WELSEGS keyword for one well.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Welsegs {
    pub header: WelsegsHeader,
    pub records: Vec<WelsegsRecord>,
}

impl Welsegs {
    pub fn well(&self) -> &str {
        &self.header.well
    }
}
