//! COMPSEGS allocation: placing perforated intervals on resolved segments.
//!
//! Both operations read the resolved tree (total lengths, depths and inlet
//! lists), so they fail with [`SegmentError::NotResolved`] on a set that has
//! not been processed yet.

use crate::connections::{CompsegsRecord, Connection, WellConnections};
use crate::error::{SegmentError, SegmentResult};
use crate::segment::Segment;
use crate::well_segments::{TOP_SEGMENT, WellSegments};

impl WellSegments {
    /// Segment of `branch` whose node lies closest to `center_distance`.
    ///
    /// Distances are compared against each segment's total length. On a tie
    /// the segment stored first wins. Returns `None` if no segment lies on
    /// `branch`.
    pub fn segment_from_measured_depth(&self, branch: i32, center_distance: f64) -> Option<i32> {
        self.segments
            .iter()
            .filter(|seg| seg.branch_number() == branch)
            .min_by(|a, b| {
                let da = (center_distance - a.total_length()).abs();
                let db = (center_distance - b.total_length()).abs();
                da.total_cmp(&db)
            })
            .map(Segment::segment_number)
    }

    /// True vertical depth of a connection centered at `center_distance`.
    ///
    /// The depth is interpolated linearly between `segment_number` and its
    /// outlet, or, for a center beyond the segment node, the first inlet on
    /// the connection's `branch`. Returns `None` for the top segment, where
    /// the grid cell center depth applies.
    pub fn connection_center_depth(
        &self,
        segment_number: i32,
        branch: i32,
        center_distance: f64,
    ) -> SegmentResult<Option<f64>> {
        self.ensure_resolved()?;
        if segment_number == TOP_SEGMENT {
            return Ok(None);
        }

        let segment = self.get_from_segment_number(segment_number)?;
        let segment_length = segment.total_length();
        let segment_depth = segment.depth();

        let interpolation = if center_distance > segment_length {
            segment
                .inlet_segments()
                .iter()
                .filter_map(|&n| self.get_from_segment_number(n).ok())
                .find(|inlet| inlet.branch_number() == branch)
        } else {
            self.get_from_segment_number(segment.outlet_segment()).ok()
        };
        let interpolation = interpolation.ok_or_else(|| SegmentError::ConnectionNotAllocated {
            well: self.well_name.clone(),
            branch,
            perf_start: center_distance,
            perf_end: center_distance,
        })?;

        let length_change = segment_length - interpolation.total_length();
        if length_change == 0.0 {
            return Ok(Some(segment_depth));
        }
        let depth_change = segment_depth - interpolation.depth();
        Ok(Some(
            segment_depth + (center_distance - segment_length) / length_change * depth_change,
        ))
    }

    /// Allocate COMPSEGS records to segments.
    ///
    /// A record without a segment (or with segment 0) goes to the segment
    /// found by [`segment_from_measured_depth`](Self::segment_from_measured_depth).
    /// A record without a center depth (or with depth 0) gets the depth from
    /// [`connection_center_depth`](Self::connection_center_depth).
    pub fn allocate_connections(&self, records: &[CompsegsRecord]) -> SegmentResult<WellConnections> {
        self.ensure_resolved()?;
        records
            .iter()
            .map(|record| self.allocate_connection(record))
            .collect()
    }

    fn allocate_connection(&self, record: &CompsegsRecord) -> SegmentResult<Connection> {
        let center = record.center_distance();
        let segment = match record.segment.filter(|&n| n != 0) {
            Some(n) => {
                self.index_of(n)?;
                n
            }
            None => self
                .segment_from_measured_depth(record.branch, center)
                .ok_or_else(|| SegmentError::ConnectionNotAllocated {
                    well: self.well_name.clone(),
                    branch: record.branch,
                    perf_start: record.perf_start,
                    perf_end: record.perf_end,
                })?,
        };

        let depth = match record.center_depth.filter(|&d| d != 0.0) {
            Some(d) => Some(d),
            None => self.connection_center_depth(segment, record.branch, center)?,
        };

        tracing::trace!(
            well = %self.well_name,
            segment,
            start = record.perf_start,
            end = record.perf_end,
            "allocated connection"
        );

        let connection = Connection::new(segment, record.perf_start, record.perf_end);
        Ok(match depth {
            Some(d) => connection.with_center_depth(d),
            None => connection,
        })
    }

    fn ensure_resolved(&self) -> SegmentResult<()> {
        if self.resolved {
            Ok(())
        } else {
            Err(SegmentError::NotResolved {
                well: self.well_name.clone(),
            })
        }
    }
}
