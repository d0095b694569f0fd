//! Printable views of a resolved segment set.

use msw_core::UnitSystem;
use msw_segments::{Connection, Segment, SegmentResult, WellConnections, WellSegments};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WellSummary {
    pub well: String,
    pub segments: usize,
    pub branches: Vec<i32>,
    pub max_segment: i32,
    pub pressure_components: String,
    pub flow_model: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SegmentRow {
    pub segment: i32,
    pub branch: i32,
    pub outlet: i32,
    pub kind: String,
    /// Segment type id as written in restart files.
    pub type_id: i32,
    /// Lengths below are in the deck's length unit.
    pub length: f64,
    pub total_length: f64,
    pub depth: f64,
    pub diameter: f64,
    /// SI (m3).
    pub volume: f64,
    pub inlets: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectionRow {
    pub segment: i32,
    /// In the deck's length unit.
    pub perf_start: f64,
    pub perf_end: f64,
    /// `None` when the grid cell center depth applies.
    pub center_depth: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BranchRow {
    pub branch: i32,
    pub segments: Vec<i32>,
}

pub fn well_summary(set: &WellSegments) -> WellSummary {
    WellSummary {
        well: set.well_name().to_string(),
        segments: set.size(),
        branches: set.branches().into_iter().collect(),
        max_segment: set.max_segment_id(),
        pressure_components: set.comp_pressure_drop().to_string(),
        flow_model: set.multiphase_model().to_string(),
    }
}

fn segment_row(set: &WellSegments, seg: &Segment, units: UnitSystem) -> SegmentResult<SegmentRow> {
    Ok(SegmentRow {
        segment: seg.segment_number(),
        branch: seg.branch_number(),
        outlet: seg.outlet_segment(),
        kind: seg.segment_type().to_string(),
        type_id: seg.ecl_type_id(),
        length: units.length_from_si(set.segment_length(seg.segment_number())?),
        total_length: units.length_from_si(seg.total_length()),
        depth: units.length_from_si(seg.depth()),
        diameter: units.length_from_si(seg.internal_diameter()),
        volume: seg.volume(),
        inlets: seg.inlet_segments().to_vec(),
    })
}

/// One row per segment, in storage order.
pub fn segment_rows(set: &WellSegments, units: UnitSystem) -> SegmentResult<Vec<SegmentRow>> {
    set.iter().map(|seg| segment_row(set, seg, units)).collect()
}

fn connection_row(conn: &Connection, units: UnitSystem) -> ConnectionRow {
    ConnectionRow {
        segment: conn.segment,
        perf_start: units.length_from_si(conn.perf_start),
        perf_end: units.length_from_si(conn.perf_end),
        center_depth: conn.center_depth.map(|d| units.length_from_si(d)),
    }
}

pub fn connection_rows(connections: &WellConnections, units: UnitSystem) -> Vec<ConnectionRow> {
    connections
        .iter()
        .map(|conn| connection_row(conn, units))
        .collect()
}

/// Segments of each branch (or only `only`) in chain order.
pub fn branch_rows(set: &WellSegments, only: Option<i32>) -> SegmentResult<Vec<BranchRow>> {
    let branches: Vec<i32> = match only {
        Some(branch) => vec![branch],
        None => set.branches().into_iter().collect(),
    };
    branches
        .into_iter()
        .map(|branch| {
            Ok(BranchRow {
                branch,
                segments: set
                    .branch_segments(branch)?
                    .iter()
                    .map(Segment::segment_number)
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use msw_segments::{
        BuildOptions, CompPressureDrop, DiagnosticLog, GeometryMode, Welsegs, WelsegsHeader,
        WelsegsRecord,
    };

    fn forked_well() -> WellSegments {
        let welsegs = Welsegs {
            header: WelsegsHeader::new(
                "W1",
                1000.0,
                0.0,
                1.0,
                GeometryMode::Incremental,
                CompPressureDrop::Friction,
            ),
            records: vec![
                WelsegsRecord::new(2, 3, 1, 1, 10.0, 5.0, 0.2, 1.0e-4),
                WelsegsRecord::new(4, 4, 2, 2, 20.0, 0.0, 0.1, 1.0e-4),
            ],
        };
        let mut log = DiagnosticLog::default();
        WellSegments::from_welsegs(&welsegs, &BuildOptions::default(), &mut log).unwrap()
    }

    #[test]
    fn summary_lists_branches() {
        let summary = well_summary(&forked_well());
        assert_eq!(summary.segments, 4);
        assert_eq!(summary.branches, vec![1, 2]);
        assert_eq!(summary.pressure_components, "HF-");
    }

    #[test]
    fn rows_convert_lengths() {
        let rows = segment_rows(&forked_well(), UnitSystem::Lab).unwrap();
        let s4 = rows.iter().find(|r| r.segment == 4).unwrap();
        assert!((s4.length - 2000.0).abs() < 1e-6);
        assert_eq!(s4.kind, "regular");
        assert_eq!(s4.type_id, -1);
        assert_eq!(rows[0].segment, 1);
    }

    #[test]
    fn branch_rows_follow_chain() {
        let rows = branch_rows(&forked_well(), None).unwrap();
        assert_eq!(
            rows,
            vec![
                BranchRow {
                    branch: 1,
                    segments: vec![1, 2, 3],
                },
                BranchRow {
                    branch: 2,
                    segments: vec![4],
                },
            ]
        );
        assert!(branch_rows(&forked_well(), Some(7)).unwrap()[0].segments.is_empty());
    }

    #[test]
    fn connection_rows_keep_cell_depth_marker() {
        let connections: WellConnections = [
            Connection::new(1, 0.0, 30.48),
            Connection::new(2, 30.48, 60.96).with_center_depth(304.8),
        ]
        .into_iter()
        .collect();
        let rows = connection_rows(&connections, UnitSystem::Field);
        assert_eq!(rows[0].center_depth, None);
        assert!((rows[1].perf_end - 200.0).abs() < 1e-9);
        assert!((rows[1].center_depth.unwrap() - 1000.0).abs() < 1e-9);
    }
}
