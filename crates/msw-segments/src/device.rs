//! Inflow control devices that can be attached to a segment.
//!
//! A segment carries at most one device. Spiral and autonomous ICDs share
//! their calibration data and flow scaling through [`IcdParameters`].

use std::fmt;

use crate::error::{SegmentError, SegmentResult};

/// Operating status of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IcdStatus {
    #[default]
    Open,
    Shut,
}

/// Kind of segment, as determined by its attached device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentType {
    Regular,
    SpiralIcd,
    AutoIcd,
    Valve,
}

impl SegmentType {
    /// Integer type id used for segments in restart output.
    pub fn ecl_type_id(self) -> i32 {
        match self {
            SegmentType::Regular => -1,
            SegmentType::SpiralIcd => -7,
            SegmentType::AutoIcd => -8,
            SegmentType::Valve => -5,
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentType::Regular => "regular",
            SegmentType::SpiralIcd => "spiral ICD",
            SegmentType::AutoIcd => "autonomous ICD",
            SegmentType::Valve => "valve",
        };
        f.write_str(name)
    }
}

/// Calibration and scaling data shared by spiral and autonomous ICDs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IcdParameters {
    pub strength: f64,
    /// Device length; a negative value is an explicit scaling factor.
    pub length: f64,
    pub density_calibration: f64,
    pub viscosity_calibration: f64,
    /// Water fraction at which the emulsion viscosity model switches.
    pub critical_value: f64,
    pub width_transition_region: f64,
    pub max_viscosity_ratio: f64,
    /// Flow scaling method: -1, 0, 1 or 2.
    pub method_flow_scaling: i32,
    pub max_absolute_rate: Option<f64>,
    pub status: IcdStatus,
    scaling_factor: Option<f64>,
}

impl IcdParameters {
    /// Create device data with the keyword defaults for everything but
    /// strength and length.
    pub fn new(strength: f64, length: f64) -> Self {
        Self {
            strength,
            length,
            density_calibration: 1000.25,
            viscosity_calibration: 1.45e-3,
            critical_value: 0.5,
            width_transition_region: 0.05,
            max_viscosity_ratio: 5.0,
            method_flow_scaling: -1,
            max_absolute_rate: None,
            status: IcdStatus::Open,
            scaling_factor: None,
        }
    }

    pub fn with_method_flow_scaling(mut self, method: i32) -> Self {
        self.method_flow_scaling = method;
        self
    }

    pub fn with_status(mut self, status: IcdStatus) -> Self {
        self.status = status;
        self
    }

    /// Flow scaling factor, once computed.
    pub fn scaling_factor(&self) -> Option<f64> {
        self.scaling_factor
    }

    /// Compute the flow scaling factor.
    ///
    /// `outlet_segment_length` is the length of the outlet segment of the
    /// segment carrying the device and `completion_length` the summed
    /// perforation length of that segment's connections.
    pub fn update_scaling_factor(
        &mut self,
        outlet_segment_length: f64,
        completion_length: f64,
    ) -> SegmentResult<()> {
        let method = self.method_flow_scaling;
        let factor = match method {
            -1 => {
                if self.length > 0.0 {
                    self.length / outlet_segment_length
                } else if self.length < 0.0 {
                    self.length.abs()
                } else {
                    return Err(SegmentError::InvalidScalingFactor {
                        method,
                        reason: "zero device length",
                    });
                }
            }
            0 => {
                if self.length <= 0.0 {
                    return Err(SegmentError::InvalidScalingFactor {
                        method,
                        reason: "device length must be positive",
                    });
                }
                self.length / outlet_segment_length
            }
            1 => self.length.abs(),
            2 => {
                if completion_length == 0.0 {
                    return Err(SegmentError::InvalidScalingFactor {
                        method,
                        reason: "zero connection length",
                    });
                }
                self.length / completion_length
            }
            _ => {
                return Err(SegmentError::InvalidScalingFactor {
                    method,
                    reason: "unknown scaling method",
                });
            }
        };
        self.scaling_factor = Some(factor);
        Ok(())
    }
}

/// Spiral inflow control device (WSEGSICD).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIcd {
    pub params: IcdParameters,
}

impl SpiralIcd {
    pub fn new(params: IcdParameters) -> Self {
        Self { params }
    }
}

/// Autonomous inflow control device (WSEGAICD).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoIcd {
    pub params: IcdParameters,
    pub flow_rate_exponent: f64,
    pub viscosity_exponent: f64,
    pub oil_flow_fraction: f64,
    pub water_flow_fraction: f64,
    pub gas_flow_fraction: f64,
    pub oil_viscosity_fraction: f64,
    pub water_viscosity_fraction: f64,
    pub gas_viscosity_fraction: f64,
}

impl AutoIcd {
    /// Autonomous ICD with unit phase fractions.
    pub fn new(params: IcdParameters, flow_rate_exponent: f64, viscosity_exponent: f64) -> Self {
        Self {
            params,
            flow_rate_exponent,
            viscosity_exponent,
            oil_flow_fraction: 1.0,
            water_flow_fraction: 1.0,
            gas_flow_fraction: 1.0,
            oil_viscosity_fraction: 1.0,
            water_viscosity_fraction: 1.0,
            gas_viscosity_fraction: 1.0,
        }
    }
}

/// Sub-critical valve (WSEGVALV).
///
/// Pipe properties left as `None` are taken from the segment when the valve
/// is attached; see [`Segment::update_valve`](crate::Segment::update_valve).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valve {
    flow_coefficient: f64,
    cross_area: f64,
    max_cross_area: Option<f64>,
    pipe_additional_length: Option<f64>,
    pipe_diameter: Option<f64>,
    pipe_roughness: Option<f64>,
    pipe_cross_area: Option<f64>,
    status: IcdStatus,
}

impl Valve {
    /// Create an open valve with every pipe property defaulted.
    pub fn new(flow_coefficient: f64, cross_area: f64) -> Self {
        Self {
            flow_coefficient,
            cross_area,
            max_cross_area: None,
            pipe_additional_length: None,
            pipe_diameter: None,
            pipe_roughness: None,
            pipe_cross_area: None,
            status: IcdStatus::Open,
        }
    }

    pub fn with_max_cross_area(mut self, area: f64) -> Self {
        self.max_cross_area = Some(area);
        self
    }

    pub fn with_additional_length(mut self, length: f64) -> Self {
        self.pipe_additional_length = Some(length);
        self
    }

    pub fn with_pipe_diameter(mut self, diameter: f64) -> Self {
        self.pipe_diameter = Some(diameter);
        self
    }

    pub fn with_pipe_roughness(mut self, roughness: f64) -> Self {
        self.pipe_roughness = Some(roughness);
        self
    }

    pub fn with_pipe_cross_area(mut self, area: f64) -> Self {
        self.pipe_cross_area = Some(area);
        self
    }

    pub fn with_status(mut self, status: IcdStatus) -> Self {
        self.status = status;
        self
    }

    pub fn flow_coefficient(&self) -> f64 {
        self.flow_coefficient
    }

    pub fn cross_area(&self) -> f64 {
        self.cross_area
    }

    pub fn max_cross_area(&self) -> Option<f64> {
        self.max_cross_area
    }

    pub fn pipe_additional_length(&self) -> Option<f64> {
        self.pipe_additional_length
    }

    pub fn pipe_diameter(&self) -> Option<f64> {
        self.pipe_diameter
    }

    pub fn pipe_roughness(&self) -> Option<f64> {
        self.pipe_roughness
    }

    pub fn pipe_cross_area(&self) -> Option<f64> {
        self.pipe_cross_area
    }

    pub fn status(&self) -> IcdStatus {
        self.status
    }

    // Setters for the defaulted pipe properties, used on attachment.
    pub(crate) fn set_pipe_additional_length(&mut self, length: f64) {
        self.pipe_additional_length = Some(length);
    }

    pub(crate) fn set_pipe_diameter(&mut self, diameter: f64) {
        self.pipe_diameter = Some(diameter);
    }

    pub(crate) fn set_pipe_roughness(&mut self, roughness: f64) {
        self.pipe_roughness = Some(roughness);
    }

    pub(crate) fn set_pipe_cross_area(&mut self, area: f64) {
        self.pipe_cross_area = Some(area);
    }

    pub(crate) fn set_max_cross_area(&mut self, area: f64) {
        self.max_cross_area = Some(area);
    }
}

/// Device attached to a segment.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Device {
    #[default]
    Regular,
    SpiralIcd(SpiralIcd),
    AutoIcd(AutoIcd),
    Valve(Valve),
}

impl Device {
    pub fn segment_type(&self) -> SegmentType {
        match self {
            Device::Regular => SegmentType::Regular,
            Device::SpiralIcd(_) => SegmentType::SpiralIcd,
            Device::AutoIcd(_) => SegmentType::AutoIcd,
            Device::Valve(_) => SegmentType::Valve,
        }
    }

    /// ICD data for spiral and autonomous devices.
    pub fn icd_params_mut(&mut self) -> Option<&mut IcdParameters> {
        match self {
            Device::SpiralIcd(sicd) => Some(&mut sicd.params),
            Device::AutoIcd(aicd) => Some(&mut aicd.params),
            Device::Regular | Device::Valve(_) => None,
        }
    }
}

impl From<SpiralIcd> for Device {
    fn from(sicd: SpiralIcd) -> Self {
        Device::SpiralIcd(sicd)
    }
}

impl From<AutoIcd> for Device {
    fn from(aicd: AutoIcd) -> Self {
        Device::AutoIcd(aicd)
    }
}

impl From<Valve> for Device {
    fn from(valve: Valve) -> Self {
        Device::Valve(valve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecl_type_ids() {
        let ids: Vec<i32> = [
            SegmentType::Regular,
            SegmentType::SpiralIcd,
            SegmentType::AutoIcd,
            SegmentType::Valve,
        ]
        .into_iter()
        .map(SegmentType::ecl_type_id)
        .collect();
        assert_eq!(ids, vec![-1, -7, -8, -5]);
    }

    #[test]
    fn scaling_default_method_positive_length() {
        let mut icd = IcdParameters::new(0.001, 12.0);
        icd.update_scaling_factor(4.0, 0.0).unwrap();
        assert_eq!(icd.scaling_factor(), Some(3.0));
    }

    #[test]
    fn scaling_default_method_negative_length_is_factor() {
        let mut icd = IcdParameters::new(0.001, -0.7);
        icd.update_scaling_factor(4.0, 0.0).unwrap();
        assert_eq!(icd.scaling_factor(), Some(0.7));
    }

    #[test]
    fn scaling_zero_length_fails() {
        let mut icd = IcdParameters::new(0.001, 0.0);
        let err = icd.update_scaling_factor(4.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            SegmentError::InvalidScalingFactor { method: -1, .. }
        ));
        assert_eq!(icd.scaling_factor(), None);
    }

    #[test]
    fn scaling_by_completion_length() {
        let mut icd = IcdParameters::new(0.001, 10.0).with_method_flow_scaling(2);
        icd.update_scaling_factor(4.0, 25.0).unwrap();
        assert_eq!(icd.scaling_factor(), Some(0.4));

        let mut no_perf = IcdParameters::new(0.001, 10.0).with_method_flow_scaling(2);
        assert!(no_perf.update_scaling_factor(4.0, 0.0).is_err());
    }

    #[test]
    fn scaling_method_one_and_unknown() {
        let mut icd = IcdParameters::new(0.001, -2.5).with_method_flow_scaling(1);
        icd.update_scaling_factor(4.0, 0.0).unwrap();
        assert_eq!(icd.scaling_factor(), Some(2.5));

        let mut bad = IcdParameters::new(0.001, 1.0).with_method_flow_scaling(7);
        assert!(bad.update_scaling_factor(4.0, 1.0).is_err());
    }

    #[test]
    fn device_kinds() {
        let sicd: Device = SpiralIcd::new(IcdParameters::new(0.1, 1.0)).into();
        assert_eq!(sicd.segment_type(), SegmentType::SpiralIcd);
        let mut valve: Device = Valve::new(0.7, 1.0e-4).into();
        assert!(valve.icd_params_mut().is_none());
        assert_eq!(Device::default().segment_type(), SegmentType::Regular);
    }
}
