//! Segment-specific error types.

use thiserror::Error;

use crate::device::SegmentType;

/// Result type for segment model operations.
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Errors raised while building, resolving or updating a well's segments.
///
/// Every variant aborts processing of the well it names. Recoverable
/// conditions (roughness clamping, steep segments) are reported through a
/// [`DiagnosticSink`](crate::DiagnosticSink) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    /// Range record with `segment1 < 2`, `segment2 < segment1`, or a
    /// multi-segment range in ABS mode.
    #[error("Well {well}: illegal WELSEGS range {segment1}..{segment2}: {reason}")]
    MalformedRange {
        well: String,
        segment1: i32,
        segment2: i32,
        reason: &'static str,
    },

    #[error("Well {well}: illegal branch number {branch} for segments {segment1}..{segment2}")]
    InvalidBranch {
        well: String,
        branch: i32,
        segment1: i32,
        segment2: i32,
    },

    #[error("Well {well}: unknown segment number {segment}")]
    UnknownSegment { well: String, segment: i32 },

    /// No remaining segment has a placed outlet: broken outlet chain or cycle.
    #[error("Well {well}: could not resolve the outlet chain of segments {segments:?}")]
    UnresolvableTopology { well: String, segments: Vec<i32> },

    #[error(
        "Well {well}: segments {first} and {second} in branch {branch} share the same outlet segment"
    )]
    AmbiguousBranchOutlet {
        well: String,
        branch: i32,
        first: i32,
        second: i32,
    },

    #[error("Well {well}: non positive length {length} obtained for segment {segment}")]
    NonPositiveSegmentLength {
        well: String,
        segment: i32,
        length: f64,
    },

    /// ABS gap starting at `segment` is never closed by a segment with data.
    #[error("Well {well}: WELSEGS range starting at segment {segment} has no closing record")]
    IncompleteRangeRecord { well: String, segment: i32 },

    #[error(
        "Well {well}: to use {device} segments you have to activate the frictional pressure drop calculation in WELSEGS"
    )]
    DeviceRequiresFrictionModel { well: String, device: SegmentType },

    #[error("Well {well}: loop detected in the segment structure of branch {branch}")]
    BranchLoopDetected { well: String, branch: i32 },

    #[error(
        "Well {well}: connection at {perf_start}..{perf_end} on branch {branch} cannot be allocated to a well segment based on MD"
    )]
    ConnectionNotAllocated {
        well: String,
        branch: i32,
        perf_start: f64,
        perf_end: f64,
    },

    #[error("Well {well}: segment structure has not been resolved")]
    NotResolved { well: String },

    #[error("Well {well}: segment structure is already defined")]
    AlreadyLoaded { well: String },

    #[error("Unknown {what} value '{value}'")]
    UnknownSetting { what: &'static str, value: String },

    #[error("Cannot compute flow scaling factor for ICD (method {method}): {reason}")]
    InvalidScalingFactor { method: i32, reason: &'static str },
}
