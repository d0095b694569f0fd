//! Record validation and geometry consistency checks.

use crate::diagnostics::DiagnosticSink;
use crate::error::{SegmentError, SegmentResult};
use crate::record::WelsegsRecord;
use crate::settings::{BuildOptions, GeometryMode};
use crate::well_segments::{TOP_SEGMENT, WellSegments};

/// Reject a range record before any of its segments is added.
pub(crate) fn validate_record(
    well: &str,
    mode: GeometryMode,
    record: &WelsegsRecord,
) -> SegmentResult<()> {
    let malformed = |reason: &'static str| SegmentError::MalformedRange {
        well: well.to_string(),
        segment1: record.segment1,
        segment2: record.segment2,
        reason,
    };

    if record.segment1 < 2 {
        return Err(malformed("segment 1 must be at least 2"));
    }
    if record.segment2 < record.segment1 {
        return Err(malformed("segment 2 is smaller than segment 1"));
    }
    if record.segment1 != record.segment2 && mode == GeometryMode::Absolute {
        return Err(malformed(
            "multiple segments in one record are not supported with ABS length and depth",
        ));
    }
    if record.branch < 1 {
        return Err(SegmentError::InvalidBranch {
            well: well.to_string(),
            branch: record.branch,
            segment1: record.segment1,
            segment2: record.segment2,
        });
    }
    Ok(())
}

impl WellSegments {
    /// Check every non-top segment for a positive length and a depth change
    /// no larger than its length.
    ///
    /// Non-positive lengths are fatal; steep segments only produce a warning
    /// with values in the unit system of `options`.
    pub fn check_depth_consistency(
        &self,
        options: &BuildOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> SegmentResult<()> {
        let units = options.unit_system;
        let unit_name = units.length_name();

        for seg in &self.segments {
            let number = seg.segment_number();
            if number == TOP_SEGMENT {
                continue;
            }

            let length = self.segment_length(number)?;
            let depth_change = self.segment_depth_change(number)?;
            if depth_change.abs() > options.depth_tolerance * length {
                sink.warning(&format!(
                    " Segment {} of well {} has a depth change of {} {}, but it has a length of {} {}, which is unphysical.",
                    number,
                    self.well_name,
                    units.length_from_si(depth_change),
                    unit_name,
                    units.length_from_si(length),
                    unit_name,
                ));
            }
        }
        Ok(())
    }
}
