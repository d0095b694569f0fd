//! Segment number to storage position lookup.

use std::collections::HashMap;

use crate::segment::Segment;

/// Maps user-facing segment numbers to positions in the segment vector.
///
/// Segment numbers are sparse and need not start at 1, so a hash map is
/// used rather than a dense vector.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentIndex {
    number_to_idx: HashMap<i32, usize>,
}

impl SegmentIndex {
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut index = Self::default();
        index.rebuild(segments);
        index
    }

    pub fn get(&self, segment_number: i32) -> Option<usize> {
        self.number_to_idx.get(&segment_number).copied()
    }

    pub fn contains(&self, segment_number: i32) -> bool {
        self.number_to_idx.contains_key(&segment_number)
    }

    pub fn insert(&mut self, segment_number: i32, idx: usize) {
        self.number_to_idx.insert(segment_number, idx);
    }

    pub fn clear(&mut self) {
        self.number_to_idx.clear();
    }

    pub fn len(&self) -> usize {
        self.number_to_idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.number_to_idx.is_empty()
    }

    /// Recompute every entry from the current segment order.
    pub fn rebuild(&mut self, segments: &[Segment]) {
        self.number_to_idx.clear();
        for (i, seg) in segments.iter().enumerate() {
            self.number_to_idx.insert(seg.segment_number(), i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentGeometry;

    fn seg(n: i32) -> Segment {
        Segment::new(n, 1, n - 1, SegmentGeometry::unknown(), false)
    }

    #[test]
    fn rebuild_follows_vector_order() {
        let segments = vec![seg(1), seg(7), seg(3)];
        let index = SegmentIndex::from_segments(&segments);

        assert_eq!(index.len(), 3);
        assert_eq!(index.get(1), Some(0));
        assert_eq!(index.get(7), Some(1));
        assert_eq!(index.get(3), Some(2));
        assert_eq!(index.get(2), None);
        assert!(!index.contains(42));
    }

    #[test]
    fn clear_and_insert() {
        let mut index = SegmentIndex::from_segments(&[seg(1), seg(2)]);
        index.clear();
        assert!(index.is_empty());
        index.insert(1, 0);
        assert_eq!(index.get(1), Some(0));
    }
}
