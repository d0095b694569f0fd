//! WELSEGS ingestion.

use crate::diagnostics::DiagnosticSink;
use crate::error::{SegmentError, SegmentResult};
use crate::record::{Welsegs, WelsegsHeader, WelsegsRecord};
use crate::segment::{Segment, SegmentGeometry, max_relative_roughness};
use crate::settings::{BuildOptions, GeometryMode};
use crate::validate;
use crate::well_segments::{TOP_SEGMENT, WellSegments};

impl WellSegments {
    /// Build and resolve the segment set of one well.
    pub fn from_welsegs(
        welsegs: &Welsegs,
        options: &BuildOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> SegmentResult<Self> {
        let mut set = Self::default();
        set.load_welsegs(welsegs, options, sink)?;
        Ok(set)
    }

    /// Ingest a WELSEGS keyword, link inlets, resolve geometry and check it.
    ///
    /// The set is only replaced when every step succeeds. Loading into a set
    /// that already holds segments fails with
    /// [`SegmentError::AlreadyLoaded`].
    pub fn load_welsegs(
        &mut self,
        welsegs: &Welsegs,
        options: &BuildOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> SegmentResult<()> {
        if self.resolved || !self.is_empty() {
            return Err(SegmentError::AlreadyLoaded {
                well: self.well_name.clone(),
            });
        }

        let header = &welsegs.header;
        let mode = header.info_type;
        tracing::debug!(
            well = %header.well,
            mode = %mode,
            records = welsegs.records.len(),
            "loading WELSEGS"
        );

        let mut set = WellSegments::new(
            header.well.clone(),
            header.pressure_components,
            header.flow_model,
        );
        set.add_segment(top_segment(header));

        for record in &welsegs.records {
            validate::validate_record(&header.well, mode, record)?;
            for seg in record_segments(&header.well, mode, record, sink) {
                set.add_segment(seg);
            }
        }

        set.link_inlets()?;
        set.process(mode, header.top_depth, header.top_length, options, sink)?;

        *self = set;
        Ok(())
    }

    /// Register every segment as an inlet of its outlet.
    pub(crate) fn link_inlets(&mut self) -> SegmentResult<()> {
        let mut links = Vec::new();
        for seg in &self.segments {
            let outlet = seg.outlet_segment();
            if outlet <= 0 {
                continue;
            }
            let outlet_idx = self.segment_number_to_index(outlet).ok_or_else(|| {
                SegmentError::UnresolvableTopology {
                    well: self.well_name.clone(),
                    segments: vec![seg.segment_number()],
                }
            })?;
            links.push((outlet_idx, seg.segment_number()));
        }

        for (outlet_idx, inlet) in links {
            self.segments[outlet_idx].add_inlet_segment(inlet);
        }
        Ok(())
    }
}

fn top_segment(header: &WelsegsHeader) -> Segment {
    let invalid = Segment::invalid_value();
    let (length, depth, ready) = match header.info_type {
        // Finalised from the header in the INC resolver.
        GeometryMode::Incremental => (0.0, 0.0, false),
        GeometryMode::Absolute => (header.top_length, header.top_depth, true),
    };

    Segment::new(
        TOP_SEGMENT,
        1,
        0,
        SegmentGeometry {
            length,
            depth,
            internal_diameter: invalid,
            roughness: invalid,
            cross_area: invalid,
            volume: header.wellbore_volume,
            x: header.top_x,
            y: header.top_y,
        },
        ready,
    )
}

/// Expand a validated range record into its segments.
fn record_segments(
    well: &str,
    mode: GeometryMode,
    record: &WelsegsRecord,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Segment> {
    let area = record.cross_area();
    let volume = match (record.volume, mode) {
        (Some(volume), _) => volume,
        (None, GeometryMode::Incremental) => area * record.length,
        (None, GeometryMode::Absolute) => Segment::invalid_value(),
    };

    // Valve pipe overrides attached later are not clamped; see
    // `Segment::update_valve`.
    let diameter = record.diameter;
    let roughness = diameter * max_relative_roughness().min(record.roughness / diameter);
    if record.roughness > roughness {
        sink.warning(&format!(
            "Well {} WELSEGS segment {} to {}: Too high roughness {:.3e} is limited to {:.3e} to avoid singularity in friction factor calculation.",
            well, record.segment1, record.segment2, record.roughness, roughness
        ));
    }

    let geometry = SegmentGeometry {
        length: record.length,
        depth: record.depth,
        internal_diameter: diameter,
        roughness,
        cross_area: area,
        volume,
        x: record.length_x,
        y: record.length_y,
    };

    (record.segment1..=record.segment2)
        .map(|n| {
            let outlet = if n == record.segment1 {
                record.join_segment
            } else {
                n - 1
            };
            let ready = mode == GeometryMode::Absolute && n == record.segment2;
            Segment::new(n, record.branch, outlet, geometry, ready)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticLog;
    use crate::settings::CompPressureDrop;

    fn inc_header() -> WelsegsHeader {
        WelsegsHeader::new(
            "W1",
            1000.0,
            0.0,
            1.0,
            GeometryMode::Incremental,
            CompPressureDrop::Friction,
        )
    }

    #[test]
    fn top_segment_per_mode() {
        let inc = top_segment(&inc_header());
        assert!(!inc.data_ready());
        assert_eq!(inc.total_length(), 0.0);
        assert_eq!(inc.volume(), 1.0);

        let mut header = inc_header();
        header.info_type = GeometryMode::Absolute;
        header.top_length = 50.0;
        let abs = top_segment(&header);
        assert!(abs.data_ready());
        assert_eq!(abs.depth(), 1000.0);
        assert_eq!(abs.total_length(), 50.0);
        assert_eq!(abs.internal_diameter(), Segment::invalid_value());
    }

    #[test]
    fn range_expansion_chains_outlets() {
        let mut log = DiagnosticLog::default();
        let record = WelsegsRecord::new(2, 4, 1, 1, 10.0, 2.0, 0.2, 1.0e-4);
        let segs = record_segments("W1", GeometryMode::Incremental, &record, &mut log);

        let outlets: Vec<_> = segs.iter().map(|s| s.outlet_segment()).collect();
        assert_eq!(outlets, vec![1, 2, 3]);
        assert!(segs.iter().all(|s| !s.data_ready()));
        assert!((segs[0].volume() - record.cross_area() * 10.0).abs() < 1e-12);
        assert!(log.is_empty());
    }

    #[test]
    fn abs_volume_left_unknown() {
        let mut log = DiagnosticLog::default();
        let record = WelsegsRecord::new(2, 2, 1, 1, 10.0, 2.0, 0.2, 1.0e-4);
        let segs = record_segments("W1", GeometryMode::Absolute, &record, &mut log);
        assert_eq!(segs[0].volume(), Segment::invalid_value());
        assert!(segs[0].data_ready());

        let with_volume = record.with_volume(0.25);
        let segs = record_segments("W1", GeometryMode::Absolute, &with_volume, &mut log);
        assert_eq!(segs[0].volume(), 0.25);
    }

    #[test]
    fn roughness_is_clamped_with_warning() {
        let mut log = DiagnosticLog::default();
        let record = WelsegsRecord::new(2, 3, 1, 1, 10.0, 2.0, 0.1, 1.0);
        let segs = record_segments("W1", GeometryMode::Incremental, &record, &mut log);

        let limit = 0.1 * max_relative_roughness();
        assert!((segs[0].roughness() - limit).abs() < 1e-15);
        let warnings: Vec<_> = log.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(
            warnings[0]
                .message
                .starts_with("Well W1 WELSEGS segment 2 to 3: Too high roughness 1.000e0")
        );
    }

    #[test]
    fn missing_outlet_is_unresolvable() {
        let welsegs = Welsegs {
            header: inc_header(),
            records: vec![WelsegsRecord::new(2, 2, 1, 7, 10.0, 2.0, 0.2, 1.0e-4)],
        };
        let mut log = DiagnosticLog::default();
        let err = WellSegments::from_welsegs(&welsegs, &BuildOptions::default(), &mut log)
            .unwrap_err();
        assert_eq!(
            err,
            SegmentError::UnresolvableTopology {
                well: "W1".into(),
                segments: vec![2],
            }
        );
    }

    #[test]
    fn second_load_is_rejected() {
        let welsegs = Welsegs {
            header: inc_header(),
            records: vec![WelsegsRecord::new(2, 2, 1, 1, 10.0, 2.0, 0.2, 1.0e-4)],
        };
        let mut log = DiagnosticLog::default();
        let mut set =
            WellSegments::from_welsegs(&welsegs, &BuildOptions::default(), &mut log).unwrap();
        let before = set.clone();

        let err = set
            .load_welsegs(&welsegs, &BuildOptions::default(), &mut log)
            .unwrap_err();
        assert!(matches!(err, SegmentError::AlreadyLoaded { .. }));
        assert_eq!(set, before);
    }

    #[test]
    fn inlets_are_linked() {
        let welsegs = Welsegs {
            header: inc_header(),
            records: vec![
                WelsegsRecord::new(2, 3, 1, 1, 10.0, 2.0, 0.2, 1.0e-4),
                WelsegsRecord::new(4, 4, 2, 2, 10.0, 0.0, 0.2, 1.0e-4),
            ],
        };
        let mut log = DiagnosticLog::default();
        let set = WellSegments::from_welsegs(&welsegs, &BuildOptions::default(), &mut log).unwrap();

        assert_eq!(set.get_from_segment_number(1).unwrap().inlet_segments(), &[2]);
        assert_eq!(
            set.get_from_segment_number(2).unwrap().inlet_segments(),
            &[3, 4]
        );
        assert!(set.get_from_segment_number(4).unwrap().inlet_segments().is_empty());
    }
}
