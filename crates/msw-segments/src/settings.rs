//! Well-level segment settings and build options.

use std::fmt;
use std::str::FromStr;

use msw_core::UnitSystem;

use crate::error::SegmentError;

/// How length and depth in WELSEGS range records are to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryMode {
    /// "INC": values are increments relative to the outlet segment.
    Incremental,
    /// "ABS": values are absolute and belong to the last segment of a range.
    Absolute,
}

impl GeometryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryMode::Incremental => "INC",
            GeometryMode::Absolute => "ABS",
        }
    }
}

/// Components of the pressure drop included in the segment calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompPressureDrop {
    /// "HFA": hydrostatic, friction and acceleration.
    #[default]
    FrictionAcceleration,
    /// "HF-": hydrostatic and friction.
    Friction,
    /// "H--": hydrostatic only.
    HydrostaticOnly,
}

impl CompPressureDrop {
    pub fn as_str(self) -> &'static str {
        match self {
            CompPressureDrop::FrictionAcceleration => "HFA",
            CompPressureDrop::Friction => "HF-",
            CompPressureDrop::HydrostaticOnly => "H--",
        }
    }

    /// Whether frictional pressure drop is part of the model.
    pub fn includes_friction(self) -> bool {
        !matches!(self, CompPressureDrop::HydrostaticOnly)
    }
}

/// Multiphase flow model of the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MultiPhaseModel {
    /// "HO": homogeneous flow.
    #[default]
    Homogeneous,
    /// "DF": drift flux.
    DriftFlux,
}

impl MultiPhaseModel {
    pub fn as_str(self) -> &'static str {
        match self {
            MultiPhaseModel::Homogeneous => "HO",
            MultiPhaseModel::DriftFlux => "DF",
        }
    }
}

impl fmt::Display for GeometryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CompPressureDrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MultiPhaseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryMode {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "INC" => Ok(GeometryMode::Incremental),
            "ABS" => Ok(GeometryMode::Absolute),
            other => Err(SegmentError::UnknownSetting {
                what: "length/depth type",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for CompPressureDrop {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "HFA" => Ok(CompPressureDrop::FrictionAcceleration),
            "HF-" => Ok(CompPressureDrop::Friction),
            "H--" => Ok(CompPressureDrop::HydrostaticOnly),
            other => Err(SegmentError::UnknownSetting {
                what: "pressure drop components",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for MultiPhaseModel {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "H0" is a common typo for "HO" and is accepted as such.
        match s.trim() {
            "HO" | "H0" => Ok(MultiPhaseModel::Homogeneous),
            "DF" => Ok(MultiPhaseModel::DriftFlux),
            other => Err(SegmentError::UnknownSetting {
                what: "multiphase model",
                value: other.to_string(),
            }),
        }
    }
}

/// Options that influence how a segment set is checked and reported.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildOptions {
    /// Unit system used when diagnostics print lengths.
    pub unit_system: UnitSystem,
    /// A segment is flagged when `|depth change| > depth_tolerance * length`.
    pub depth_tolerance: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            depth_tolerance: 1.001,
        }
    }
}
