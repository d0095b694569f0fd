//! Perforated connections of a well, as seen by its segments.

/// Source of the summed perforation length of each segment.
pub trait PerfLengthSource {
    /// Total perforated length attached to `segment_number`, zero if none.
    fn segment_perf_length(&self, segment_number: i32) -> f64;
}

/// One perforated interval, measured along the well, allocated to a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub segment: i32,
    pub perf_start: f64,
    pub perf_end: f64,
    /// `None` when the grid cell center depth applies.
    pub center_depth: Option<f64>,
}

impl Connection {
    pub fn new(segment: i32, perf_start: f64, perf_end: f64) -> Self {
        Self {
            segment,
            perf_start,
            perf_end,
            center_depth: None,
        }
    }

    pub fn with_center_depth(mut self, depth: f64) -> Self {
        self.center_depth = Some(depth);
        self
    }

    pub fn length(&self) -> f64 {
        self.perf_end - self.perf_start
    }
}

/// A COMPSEGS entry before it is allocated to a segment.
///
/// `perf_start` and `perf_end` are measured depths along `branch`. A
/// defaulted segment is found from the measured depth, and a defaulted (or
/// zero) center depth is interpolated from the segment tree; see
/// [`WellSegments::allocate_connections`](crate::WellSegments::allocate_connections).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompsegsRecord {
    pub branch: i32,
    pub perf_start: f64,
    pub perf_end: f64,
    pub segment: Option<i32>,
    pub center_depth: Option<f64>,
}

impl CompsegsRecord {
    pub fn new(branch: i32, perf_start: f64, perf_end: f64) -> Self {
        Self {
            branch,
            perf_start,
            perf_end,
            segment: None,
            center_depth: None,
        }
    }

    pub fn with_segment(mut self, segment: i32) -> Self {
        self.segment = Some(segment);
        self
    }

    pub fn with_center_depth(mut self, depth: f64) -> Self {
        self.center_depth = Some(depth);
        self
    }

    /// Measured depth of the middle of the perforation.
    pub fn center_distance(&self) -> f64 {
        (self.perf_start + self.perf_end) / 2.0
    }
}

/// All connections of one well.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WellConnections {
    connections: Vec<Connection>,
}

impl WellConnections {
    pub fn new(connections: Vec<Connection>) -> Self {
        Self { connections }
    }

    pub fn push(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl FromIterator<Connection> for WellConnections {
    fn from_iter<I: IntoIterator<Item = Connection>>(iter: I) -> Self {
        Self {
            connections: iter.into_iter().collect(),
        }
    }
}

impl PerfLengthSource for WellConnections {
    fn segment_perf_length(&self, segment_number: i32) -> f64 {
        self.connections
            .iter()
            .filter(|c| c.segment == segment_number)
            .map(Connection::length)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perf_length_sums_per_segment() {
        let conns: WellConnections = [
            Connection::new(2, 0.0, 5.0),
            Connection::new(2, 10.0, 12.5),
            Connection::new(3, 20.0, 30.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(conns.segment_perf_length(2), 7.5);
        assert_eq!(conns.segment_perf_length(3), 10.0);
        assert_eq!(conns.segment_perf_length(4), 0.0);
        assert_eq!(conns.len(), 3);
    }

    #[test]
    fn compsegs_record_midpoint() {
        let rec = CompsegsRecord::new(2, 110.0, 116.0).with_segment(4);
        assert_eq!(rec.center_distance(), 113.0);
        assert_eq!(rec.segment, Some(4));
        assert_eq!(rec.center_depth, None);
    }
}
