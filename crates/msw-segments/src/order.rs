//! Outlet-before-inlet ordering of the segment vector.

use std::collections::HashSet;

use crate::error::{SegmentError, SegmentResult};
use crate::segment::Segment;
use crate::well_segments::{TOP_SEGMENT, WellSegments};

impl WellSegments {
    /// Reorder segments so that every outlet precedes its inlets and
    /// segments of one branch are stored consecutively.
    ///
    /// The top segment is moved to position 0. At each later position the
    /// first unplaced segment whose outlet is placed wins, unless a later
    /// one continues the branch of the previously placed segment. Two such
    /// continuations are ambiguous. On error the number to position map is
    /// rebuilt for the partially reordered vector.
    pub fn order_segments(&mut self) -> SegmentResult<()> {
        let result = self.order_in_place();
        if result.is_err() {
            self.index.rebuild(&self.segments);
        }
        result
    }

    fn order_in_place(&mut self) -> SegmentResult<()> {
        let top = self.index_of(TOP_SEGMENT)?;
        self.segments.swap(0, top);

        self.index.clear();
        self.index.insert(TOP_SEGMENT, 0);

        for current in 1..self.segments.len() {
            let last_branch = self.segments[current - 1].branch_number();
            let mut target: Option<usize> = None;

            for i in current..self.segments.len() {
                let candidate = &self.segments[i];
                if !self.index.contains(candidate.outlet_segment()) {
                    continue;
                }

                match target {
                    None => target = Some(i),
                    Some(held) if candidate.branch_number() == last_branch => {
                        let held = &self.segments[held];
                        if held.branch_number() == last_branch {
                            return Err(SegmentError::AmbiguousBranchOutlet {
                                well: self.well_name.clone(),
                                branch: last_branch,
                                first: held.segment_number(),
                                second: candidate.segment_number(),
                            });
                        }
                        target = Some(i);
                    }
                    Some(_) => {}
                }
            }

            let Some(target) = target else {
                return Err(SegmentError::UnresolvableTopology {
                    well: self.well_name.clone(),
                    segments: self.segments[current..]
                        .iter()
                        .map(Segment::segment_number)
                        .collect(),
                });
            };

            self.segments.swap(current, target);
            self.index
                .insert(self.segments[current].segment_number(), current);
        }

        Ok(())
    }

    /// Segments of `branch` ordered from the branch start along its own
    /// outlet chain.
    pub fn branch_segments(&self, branch: i32) -> SegmentResult<Vec<Segment>> {
        let mut segments: Vec<Segment> = self
            .segments
            .iter()
            .filter(|s| s.branch_number() == branch)
            .cloned()
            .collect();
        let mut pending: HashSet<i32> = segments.iter().map(Segment::segment_number).collect();

        for head in 0..segments.len() {
            if pending.contains(&segments[head].outlet_segment()) {
                let offset = segments[head..]
                    .iter()
                    .position(|s| !pending.contains(&s.outlet_segment()))
                    .ok_or_else(|| SegmentError::BranchLoopDetected {
                        well: self.well_name.clone(),
                        branch,
                    })?;
                segments.swap(head, head + offset);
            }
            pending.remove(&segments[head].segment_number());
        }

        Ok(segments)
    }
}
