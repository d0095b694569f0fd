//! Geometry resolution: turn raw records into absolute depth, length,
//! volume and node position.

use msw_core::{INVALID_VALUE, is_valid_value};

use crate::diagnostics::DiagnosticSink;
use crate::error::{SegmentError, SegmentResult};
use crate::settings::{BuildOptions, GeometryMode};
use crate::well_segments::{TOP_SEGMENT, WellSegments};

impl WellSegments {
    /// Order, resolve, link inlets and check the segment set.
    ///
    /// `top_depth` and `top_length` finalise the top segment in INC mode and
    /// are ignored in ABS mode. The set is left untouched on error.
    pub fn process(
        &mut self,
        mode: GeometryMode,
        top_depth: f64,
        top_length: f64,
        options: &BuildOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> SegmentResult<()> {
        let _span = tracing::debug_span!("process", well = %self.well_name, %mode).entered();

        let mut work = self.clone();
        match mode {
            GeometryMode::Absolute => work.resolve_absolute()?,
            GeometryMode::Incremental => work.resolve_incremental(top_depth, top_length)?,
        }
        work.link_inlets()?;
        work.check_depth_consistency(options, sink)?;
        work.resolved = true;

        sink.note(&format!(
            "Well {}: resolved {} segments on {} branches ({})",
            work.well_name,
            work.size(),
            work.branches().len(),
            mode
        ));
        *self = work;
        Ok(())
    }

    /// ABS: values are absolute for the last segment of each range; the
    /// segments in between are interpolated linearly from the outlet of the
    /// range.
    pub(crate) fn resolve_absolute(&mut self) -> SegmentResult<()> {
        self.order_segments()?;

        let count = self.segments.len();
        let mut current = 1;
        while current < count {
            if self.segments[current].data_ready() {
                current += 1;
                continue;
            }

            let range_begin = current;
            let outlet_idx = self.index_of(self.segments[range_begin].outlet_segment())?;
            let range_end = (range_begin + 1..count)
                .find(|&i| self.segments[i].data_ready())
                .ok_or_else(|| SegmentError::IncompleteRangeRecord {
                    well: self.well_name.clone(),
                    segment: self.segments[range_begin].segment_number(),
                })?;

            let number_segments = (range_end - range_begin + 1) as f64;
            let outlet = &self.segments[outlet_idx];
            let last = &self.segments[range_end];

            let (length_outlet, depth_outlet) = (outlet.total_length(), outlet.depth());
            let (x_outlet, y_outlet) = (outlet.node_x(), outlet.node_y());
            let length_inc = (last.total_length() - length_outlet) / number_segments;
            let depth_inc = (last.depth() - depth_outlet) / number_segments;
            let dx = (last.node_x() - x_outlet) / number_segments;
            let dy = (last.node_y() - y_outlet) / number_segments;
            // Shared by every gap member lacking a volume.
            let volume_segment = last.cross_area() * length_inc;

            for k in range_begin..=range_end {
                let old = &self.segments[k];
                let (length, depth, x, y) = if k == range_end {
                    (old.total_length(), old.depth(), old.node_x(), old.node_y())
                } else {
                    let num_inc = (k - range_begin + 1) as f64;
                    (
                        length_outlet + num_inc * length_inc,
                        depth_outlet + num_inc * depth_inc,
                        x_outlet + num_inc * dx,
                        y_outlet + num_inc * dy,
                    )
                };
                let volume = if old.volume() < 0.5 * INVALID_VALUE {
                    volume_segment
                } else {
                    old.volume()
                };

                let resolved = old.with_geometry(depth, length, volume, x, y);
                self.segments[k] = resolved;
            }

            current = range_end + 1;
        }

        // Individually specified segments without a volume.
        for i in 1..count {
            let seg = &self.segments[i];
            if is_valid_value(seg.volume()) {
                continue;
            }
            let outlet = &self.segments[self.index_of(seg.outlet_segment())?];
            let volume = seg.cross_area() * (seg.total_length() - outlet.total_length());
            let resolved = seg.with_volume(volume);
            self.segments[i] = resolved;
        }

        Ok(())
    }

    /// INC: every non-top segment carries increments relative to its outlet.
    pub(crate) fn resolve_incremental(
        &mut self,
        top_depth: f64,
        top_length: f64,
    ) -> SegmentResult<()> {
        let top_idx = self.index_of(TOP_SEGMENT)?;
        let top = self.segments[top_idx].with_depth_length(top_depth, top_length);
        self.segments[top_idx] = top;

        self.order_segments()?;

        for i in 1..self.segments.len() {
            let seg = &self.segments[i];
            if seg.data_ready() {
                continue;
            }
            let outlet = &self.segments[self.index_of(seg.outlet_segment())?];
            let resolved = seg.with_position(
                outlet.depth() + seg.depth(),
                outlet.total_length() + seg.total_length(),
                outlet.node_x() + seg.node_x(),
                outlet.node_y() + seg.node_y(),
            );
            self.segments[i] = resolved;
        }

        Ok(())
    }
}
