//! Property tests for ordering and resolution of random segment trees.

use std::collections::HashSet;

use msw_segments::{
    BuildOptions, CompPressureDrop, DiagnosticLog, GeometryMode, WellSegments, Welsegs,
    WelsegsHeader, WelsegsRecord, max_relative_roughness,
};
use proptest::prelude::*;
use proptest::sample::Index;

/// One generated segment: outlet pick, whether to continue the outlet's
/// branch, length increment, depth fraction and roughness.
type Draw = (Index, bool, f64, f64, f64);

/// Turn draws into single-segment INC records forming a tree in which every
/// branch is a simple chain.
fn tree_records(draws: &[Draw]) -> Vec<WelsegsRecord> {
    // branch_of[n] and whether n is the current tail of its branch.
    let mut branch_of = vec![0, 1];
    let mut tail_of_branch = vec![0, 1];
    let mut next_branch = 2;
    let mut records = Vec::new();

    for (i, (pick, keep_branch, length, depth_frac, roughness)) in draws.iter().enumerate() {
        let n = i as i32 + 2;
        let outlet = pick.index(n as usize - 1) as i32 + 1;
        let outlet_branch = branch_of[outlet as usize];

        let branch = if *keep_branch && tail_of_branch[outlet_branch as usize] == outlet {
            outlet_branch
        } else {
            let b = next_branch;
            next_branch += 1;
            tail_of_branch.push(0);
            b
        };
        tail_of_branch[branch as usize] = n;
        branch_of.push(branch);

        records.push(WelsegsRecord::new(
            n,
            n,
            branch,
            outlet,
            *length,
            depth_frac * length,
            0.1,
            *roughness,
        ));
    }
    records
}

fn draws() -> impl Strategy<Value = Vec<Draw>> {
    prop::collection::vec(
        (
            any::<Index>(),
            any::<bool>(),
            0.5_f64..50.0,
            -1.0_f64..1.0,
            0.0_f64..1.0,
        ),
        1..40,
    )
}

proptest! {
    #[test]
    fn random_trees_resolve_in_order(
        records in draws().prop_map(|d| tree_records(&d)).prop_shuffle()
    ) {
        let welsegs = Welsegs {
            header: WelsegsHeader::new(
                "RAND",
                1000.0,
                10.0,
                0.5,
                GeometryMode::Incremental,
                CompPressureDrop::FrictionAcceleration,
            ),
            records,
        };
        let mut log = DiagnosticLog::default();
        let set = WellSegments::from_welsegs(&welsegs, &BuildOptions::default(), &mut log)
            .expect("chain-per-branch trees always resolve");

        // P1: map is a bijection onto 0..size.
        let positions: HashSet<usize> = set
            .segment_numbers()
            .into_iter()
            .map(|n| set.segment_number_to_index(n).unwrap())
            .collect();
        prop_assert_eq!(positions, (0..set.size()).collect::<HashSet<_>>());
        prop_assert_eq!(set[0].segment_number(), 1);

        for (idx, seg) in set.iter().enumerate().skip(1) {
            let outlet_idx = set.segment_number_to_index(seg.outlet_segment()).unwrap();
            let outlet = &set[outlet_idx];
            // P2: outlet stored first.
            prop_assert!(outlet_idx < idx);
            // P3: total length grows away from the top.
            prop_assert!(seg.total_length() > outlet.total_length());
            // P5: roughness within the relative bound.
            prop_assert!(seg.roughness() <= seg.internal_diameter() * max_relative_roughness());
        }
    }
}
