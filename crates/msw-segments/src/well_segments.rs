//! The segment set of one multi-segment well.

use std::collections::BTreeSet;
use std::ops::Index;

use crate::connections::PerfLengthSource;
use crate::device::{AutoIcd, Device, SpiralIcd, Valve};
use crate::error::{SegmentError, SegmentResult};
use crate::indexing::SegmentIndex;
use crate::segment::Segment;
use crate::settings::{CompPressureDrop, MultiPhaseModel};

/// Number of the segment nearest the well head.
pub const TOP_SEGMENT: i32 = 1;

/// Segments of one well plus a segment number to position map.
///
/// Once resolved, segments are stored outlet-before-inlet with the top
/// segment at position 0.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WellSegments {
    pub(crate) well_name: String,
    pub(crate) comp_pressure_drop: CompPressureDrop,
    pub(crate) multiphase_model: MultiPhaseModel,
    pub(crate) segments: Vec<Segment>,
    pub(crate) index: SegmentIndex,
    pub(crate) resolved: bool,
}

impl WellSegments {
    pub fn new(
        well_name: impl Into<String>,
        comp_pressure_drop: CompPressureDrop,
        multiphase_model: MultiPhaseModel,
    ) -> Self {
        Self {
            well_name: well_name.into(),
            comp_pressure_drop,
            multiphase_model,
            ..Self::default()
        }
    }

    /// Unresolved set built by upserting `segments` in order.
    pub fn from_segments(
        well_name: impl Into<String>,
        comp_pressure_drop: CompPressureDrop,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Self {
        let mut set = Self::new(well_name, comp_pressure_drop, MultiPhaseModel::default());
        for seg in segments {
            set.add_segment(seg);
        }
        set
    }

    /// Insert a segment, or replace the one with the same number in place.
    pub fn add_segment(&mut self, segment: Segment) {
        match self.index.get(segment.segment_number()) {
            Some(idx) => self.segments[idx] = segment,
            None => {
                self.index
                    .insert(segment.segment_number(), self.segments.len());
                self.segments.push(segment);
            }
        }
    }

    pub fn well_name(&self) -> &str {
        &self.well_name
    }

    pub fn comp_pressure_drop(&self) -> CompPressureDrop {
        self.comp_pressure_drop
    }

    pub fn multiphase_model(&self) -> MultiPhaseModel {
        self.multiphase_model
    }

    /// True after a successful resolution pass.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn size(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, idx: usize) -> Option<&Segment> {
        self.segments.get(idx)
    }

    /// Segment at position 0.
    pub fn top_segment(&self) -> SegmentResult<&Segment> {
        self.segments
            .first()
            .ok_or_else(|| self.unknown_segment(TOP_SEGMENT))
    }

    pub fn depth_top_segment(&self) -> SegmentResult<f64> {
        Ok(self.top_segment()?.depth())
    }

    pub fn length_top_segment(&self) -> SegmentResult<f64> {
        Ok(self.top_segment()?.total_length())
    }

    pub fn volume_top_segment(&self) -> SegmentResult<f64> {
        Ok(self.top_segment()?.volume())
    }

    /// Largest segment number, 0 when empty.
    pub fn max_segment_id(&self) -> i32 {
        self.segments
            .iter()
            .map(Segment::segment_number)
            .max()
            .unwrap_or(0)
    }

    /// Largest branch number, 0 when empty.
    pub fn max_branch_id(&self) -> i32 {
        self.segments
            .iter()
            .map(Segment::branch_number)
            .max()
            .unwrap_or(0)
    }

    /// Segment numbers in storage order.
    pub fn segment_numbers(&self) -> Vec<i32> {
        self.segments.iter().map(Segment::segment_number).collect()
    }

    pub fn segment_number_to_index(&self, segment_number: i32) -> Option<usize> {
        self.index.get(segment_number)
    }

    pub fn get_from_segment_number(&self, segment_number: i32) -> SegmentResult<&Segment> {
        self.segment_number_to_index(segment_number)
            .map(|idx| &self.segments[idx])
            .ok_or_else(|| self.unknown_segment(segment_number))
    }

    /// Length of the segment itself: absolute for the top segment, the
    /// difference to its outlet's total length otherwise.
    pub fn segment_length(&self, segment_number: i32) -> SegmentResult<f64> {
        let seg = self.get_from_segment_number(segment_number)?;
        if segment_number == TOP_SEGMENT {
            return Ok(seg.total_length());
        }

        let outlet = self.get_from_segment_number(seg.outlet_segment())?;
        let length = seg.total_length() - outlet.total_length();
        if length <= 0.0 {
            return Err(SegmentError::NonPositiveSegmentLength {
                well: self.well_name.clone(),
                segment: segment_number,
                length,
            });
        }
        Ok(length)
    }

    /// Depth change across the segment: absolute depth for the top segment.
    pub fn segment_depth_change(&self, segment_number: i32) -> SegmentResult<f64> {
        let seg = self.get_from_segment_number(segment_number)?;
        if segment_number == TOP_SEGMENT {
            return Ok(seg.depth());
        }

        let outlet = self.get_from_segment_number(seg.outlet_segment())?;
        Ok(seg.depth() - outlet.depth())
    }

    pub fn branches(&self) -> BTreeSet<i32> {
        self.segments.iter().map(Segment::branch_number).collect()
    }

    /// Attach devices to segments.
    ///
    /// All targets are looked up before anything changes, so a failing call
    /// leaves the set untouched. Non-regular devices need a pressure drop
    /// model that includes friction.
    pub fn update_devices(
        &mut self,
        pairs: impl IntoIterator<Item = (i32, Device)>,
    ) -> SegmentResult<()> {
        let pairs: Vec<(i32, Device)> = pairs.into_iter().collect();
        self.require_friction(&pairs)?;

        let mut updated = Vec::with_capacity(pairs.len());
        for (segment_number, device) in pairs {
            let idx = self
                .segment_number_to_index(segment_number)
                .ok_or_else(|| self.unknown_segment(segment_number))?;
            let segment_length = match device {
                Device::Valve(_) => self.segment_length(segment_number)?,
                _ => 0.0,
            };

            let mut seg = self.segments[idx].clone();
            seg.update_device(device, segment_length);
            updated.push(seg);
        }

        for seg in updated {
            self.add_segment(seg);
        }
        Ok(())
    }

    pub fn update_spiral_icds(
        &mut self,
        pairs: impl IntoIterator<Item = (i32, SpiralIcd)>,
    ) -> SegmentResult<()> {
        self.update_devices(pairs.into_iter().map(|(n, d)| (n, Device::from(d))))
    }

    pub fn update_auto_icds(
        &mut self,
        pairs: impl IntoIterator<Item = (i32, AutoIcd)>,
    ) -> SegmentResult<()> {
        self.update_devices(pairs.into_iter().map(|(n, d)| (n, Device::from(d))))
    }

    pub fn update_valves(
        &mut self,
        pairs: impl IntoIterator<Item = (i32, Valve)>,
    ) -> SegmentResult<()> {
        self.update_devices(pairs.into_iter().map(|(n, d)| (n, Device::from(d))))
    }

    /// Attach devices after computing each ICD's flow scaling factor from
    /// the length of its outlet segment and its own perforated length.
    pub fn update_devices_scaled(
        &mut self,
        pairs: impl IntoIterator<Item = (i32, Device)>,
        connections: &dyn PerfLengthSource,
    ) -> SegmentResult<()> {
        let mut pairs: Vec<(i32, Device)> = pairs.into_iter().collect();
        self.require_friction(&pairs)?;

        for (segment_number, device) in pairs.iter_mut() {
            if let Some(params) = device.icd_params_mut() {
                let outlet = self.get_from_segment_number(*segment_number)?.outlet_segment();
                let outlet_length = self.segment_length(outlet)?;
                let perf_length = connections.segment_perf_length(*segment_number);
                params.update_scaling_factor(outlet_length, perf_length)?;
            }
        }

        self.update_devices(pairs)
    }

    /// Store each segment's summed perforation length.
    pub fn update_perf_length(&mut self, connections: &dyn PerfLengthSource) {
        for seg in self.segments.iter_mut() {
            let perf_length = connections.segment_perf_length(seg.segment_number());
            seg.update_perf_length(perf_length);
        }
    }

    fn require_friction(&self, pairs: &[(i32, Device)]) -> SegmentResult<()> {
        if self.comp_pressure_drop.includes_friction() {
            return Ok(());
        }
        match pairs.iter().find(|(_, d)| !matches!(d, Device::Regular)) {
            Some((_, device)) => Err(SegmentError::DeviceRequiresFrictionModel {
                well: self.well_name.clone(),
                device: device.segment_type(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn index_of(&self, segment_number: i32) -> SegmentResult<usize> {
        self.segment_number_to_index(segment_number)
            .ok_or_else(|| self.unknown_segment(segment_number))
    }

    pub(crate) fn unknown_segment(&self, segment_number: i32) -> SegmentError {
        SegmentError::UnknownSegment {
            well: self.well_name.clone(),
            segment: segment_number,
        }
    }
}

impl Index<usize> for WellSegments {
    type Output = Segment;

    fn index(&self, idx: usize) -> &Segment {
        &self.segments[idx]
    }
}

impl<'a> IntoIterator for &'a WellSegments {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
