//! The segment value type.

use msw_core::INVALID_VALUE;

use crate::device::{AutoIcd, Device, SegmentType, SpiralIcd, Valve};

/// Maximum relative roughness (roughness / diameter).
///
/// Keeps the Haaland friction factor non-singular for Re >= 4000.
pub fn max_relative_roughness() -> f64 {
    3.7 * ((1.0 - 1.0e-3) - 6.9 / 4000.0_f64).powf(9.0 / 10.0)
}

/// Raw geometry of a segment as read from a record.
///
/// Any field may hold [`Segment::invalid_value`] until it is resolved.
/// Before resolution in INC mode, `length`, `depth`, `x` and `y` are
/// increments relative to the outlet segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentGeometry {
    pub length: f64,
    pub depth: f64,
    pub internal_diameter: f64,
    pub roughness: f64,
    pub cross_area: f64,
    pub volume: f64,
    pub x: f64,
    pub y: f64,
}

impl SegmentGeometry {
    /// Geometry with every quantity unknown and zero horizontal offset.
    pub fn unknown() -> Self {
        Self {
            length: INVALID_VALUE,
            depth: INVALID_VALUE,
            internal_diameter: INVALID_VALUE,
            roughness: INVALID_VALUE,
            cross_area: INVALID_VALUE,
            volume: INVALID_VALUE,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl Default for SegmentGeometry {
    fn default() -> Self {
        Self::unknown()
    }
}

/// One pipe element of a multi-segment well.
///
/// Segments are values: resolution passes build replacements through the
/// `with_*` functions and store them back into the owning
/// [`WellSegments`](crate::WellSegments).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    segment_number: i32,
    /// Branch number; the main bore (and the top segment) is branch 1.
    branch: i32,
    /// Outlet segment number; 0 for the top segment.
    outlet_segment: i32,
    inlet_segments: Vec<i32>,
    /// Length from the BHP reference point, once resolved.
    total_length: f64,
    depth: f64,
    internal_diameter: f64,
    roughness: f64,
    cross_area: f64,
    volume: f64,
    data_ready: bool,
    x: f64,
    y: f64,
    perf_length: Option<f64>,
    device: Device,
}

impl Segment {
    pub fn new(
        segment_number: i32,
        branch: i32,
        outlet_segment: i32,
        geometry: SegmentGeometry,
        data_ready: bool,
    ) -> Self {
        Self {
            segment_number,
            branch,
            outlet_segment,
            inlet_segments: Vec::new(),
            total_length: geometry.length,
            depth: geometry.depth,
            internal_diameter: geometry.internal_diameter,
            roughness: geometry.roughness,
            cross_area: geometry.cross_area,
            volume: geometry.volume,
            data_ready,
            x: geometry.x,
            y: geometry.y,
            perf_length: None,
            device: Device::Regular,
        }
    }

    /// Marker for values that are not known yet.
    pub fn invalid_value() -> f64 {
        INVALID_VALUE
    }

    /// Copy with absolute depth and length; marks the segment ready.
    pub fn with_depth_length(&self, depth: f64, length: f64) -> Self {
        Self {
            depth,
            total_length: length,
            data_ready: true,
            ..self.clone()
        }
    }

    /// Copy with absolute depth, length and node position.
    pub fn with_position(&self, depth: f64, length: f64, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..self.with_depth_length(depth, length)
        }
    }

    /// Copy with absolute depth, length, volume and node position.
    pub fn with_geometry(&self, depth: f64, length: f64, volume: f64, x: f64, y: f64) -> Self {
        Self {
            volume,
            ..self.with_position(depth, length, x, y)
        }
    }

    pub fn with_volume(&self, volume: f64) -> Self {
        Self {
            volume,
            ..self.clone()
        }
    }

    pub fn segment_number(&self) -> i32 {
        self.segment_number
    }

    pub fn branch_number(&self) -> i32 {
        self.branch
    }

    pub fn outlet_segment(&self) -> i32 {
        self.outlet_segment
    }

    pub fn inlet_segments(&self) -> &[i32] {
        &self.inlet_segments
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn internal_diameter(&self) -> f64 {
        self.internal_diameter
    }

    pub fn roughness(&self) -> f64 {
        self.roughness
    }

    pub fn cross_area(&self) -> f64 {
        self.cross_area
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn node_x(&self) -> f64 {
        self.x
    }

    pub fn node_y(&self) -> f64 {
        self.y
    }

    pub fn data_ready(&self) -> bool {
        self.data_ready
    }

    /// Summed perforation length, once assigned from the connections.
    pub fn perf_length(&self) -> Option<f64> {
        self.perf_length
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn segment_type(&self) -> SegmentType {
        self.device.segment_type()
    }

    pub fn ecl_type_id(&self) -> i32 {
        self.segment_type().ecl_type_id()
    }

    pub fn is_regular(&self) -> bool {
        matches!(self.device, Device::Regular)
    }

    pub fn is_spiral_icd(&self) -> bool {
        matches!(self.device, Device::SpiralIcd(_))
    }

    pub fn is_auto_icd(&self) -> bool {
        matches!(self.device, Device::AutoIcd(_))
    }

    pub fn is_valve(&self) -> bool {
        matches!(self.device, Device::Valve(_))
    }

    pub fn spiral_icd(&self) -> Option<&SpiralIcd> {
        match &self.device {
            Device::SpiralIcd(sicd) => Some(sicd),
            _ => None,
        }
    }

    pub fn auto_icd(&self) -> Option<&AutoIcd> {
        match &self.device {
            Device::AutoIcd(aicd) => Some(aicd),
            _ => None,
        }
    }

    pub fn valve(&self) -> Option<&Valve> {
        match &self.device {
            Device::Valve(valve) => Some(valve),
            _ => None,
        }
    }

    pub fn add_inlet_segment(&mut self, segment_number: i32) {
        if !self.inlet_segments.contains(&segment_number) {
            self.inlet_segments.push(segment_number);
        }
    }

    pub fn update_perf_length(&mut self, perf_length: f64) {
        self.perf_length = Some(perf_length);
    }

    pub fn update_spiral_icd(&mut self, sicd: SpiralIcd) {
        self.device = Device::SpiralIcd(sicd);
    }

    pub fn update_auto_icd(&mut self, aicd: AutoIcd) {
        self.device = Device::AutoIcd(aicd);
    }

    /// Attach a valve.
    ///
    /// Defaulted valve properties are completed from the segment: the
    /// additional pipe length from `segment_length`, the pipe diameter,
    /// roughness and area from the segment itself. Pipe properties given on
    /// the valve replace the segment's own. A defaulted maximum constriction
    /// area becomes the pipe area.
    ///
    /// Overriding diameter and roughness are stored as given. The bound of
    /// [`max_relative_roughness`] is only enforced on WELSEGS input, so a
    /// valve may leave the segment with a larger relative roughness.
    pub fn update_valve(&mut self, valve: Valve, segment_length: f64) {
        let mut valve = valve;

        if valve.pipe_additional_length().is_none() {
            valve.set_pipe_additional_length(segment_length);
        }

        match valve.pipe_diameter() {
            Some(diameter) => self.internal_diameter = diameter,
            None => valve.set_pipe_diameter(self.internal_diameter),
        }

        match valve.pipe_roughness() {
            Some(roughness) => self.roughness = roughness,
            None => valve.set_pipe_roughness(self.roughness),
        }

        match valve.pipe_cross_area() {
            Some(area) => self.cross_area = area,
            None => valve.set_pipe_cross_area(self.cross_area),
        }

        if valve.max_cross_area().is_none() {
            valve.set_max_cross_area(self.cross_area);
        }

        self.device = Device::Valve(valve);
    }

    /// Attach any device. Valves need the resolved segment length.
    pub fn update_device(&mut self, device: Device, segment_length: f64) {
        match device {
            Device::Valve(valve) => self.update_valve(valve, segment_length),
            other => self.device = other,
        }
    }
}
