//! msw-segments: multi-segment well topology for msw.
//!
//! Provides:
//! - The `Segment` value type and its optional inflow control devices
//! - `WellSegments`, which ingests WELSEGS records, orders the segment
//!   tree outlet-before-inlet and resolves absolute geometry
//! - Per-branch queries and schedule-time device / perforation updates
//! - COMPSEGS allocation of perforations to segments by measured depth
//!
//! # Example
//!
//! ```
//! use msw_segments::{
//!     BuildOptions, CompPressureDrop, DiagnosticLog, GeometryMode, WellSegments, Welsegs,
//!     WelsegsHeader, WelsegsRecord,
//! };
//!
//! let welsegs = Welsegs {
//!     header: WelsegsHeader::new(
//!         "PROD01",
//!         1000.0,
//!         0.0,
//!         1.0,
//!         GeometryMode::Incremental,
//!         CompPressureDrop::Friction,
//!     ),
//!     records: vec![WelsegsRecord::new(2, 2, 1, 1, 10.0, 5.0, 0.2, 1.0e-4)],
//! };
//!
//! let mut log = DiagnosticLog::default();
//! let segments = WellSegments::from_welsegs(&welsegs, &BuildOptions::default(), &mut log).unwrap();
//!
//! assert_eq!(segments.size(), 2);
//! assert_eq!(segments.get_from_segment_number(2).unwrap().depth(), 1005.0);
//! ```

pub mod builder;
pub mod compsegs;
pub mod connections;
pub mod device;
pub mod diagnostics;
pub mod error;
pub mod indexing;
pub mod order;
pub mod record;
pub mod resolve;
pub mod segment;
pub mod settings;
pub(crate) mod validate;
pub mod well_segments;

// Re-exports for ergonomics
pub use connections::{CompsegsRecord, Connection, PerfLengthSource, WellConnections};
pub use device::{AutoIcd, Device, IcdParameters, IcdStatus, SegmentType, SpiralIcd, Valve};
pub use diagnostics::{Diagnostic, DiagnosticLog, DiagnosticSink, Severity, TracingSink};
pub use error::{SegmentError, SegmentResult};
pub use indexing::SegmentIndex;
pub use record::{Welsegs, WelsegsHeader, WelsegsRecord};
pub use segment::{Segment, SegmentGeometry, max_relative_roughness};
pub use settings::{BuildOptions, CompPressureDrop, GeometryMode, MultiPhaseModel};
pub use well_segments::{TOP_SEGMENT, WellSegments};
