//! Property tests over randomly generated networks

use proptest::prelude::*;
use trunkline_core::{AreaCode, NetworkDirectory, PhoneAddress};

const BASE_AREA: AreaCode = 200;

#[derive(Debug, Clone)]
struct Topology {
    switchboards: usize,
    lines: Vec<(usize, usize)>,
    phones: Vec<(usize, u64)>,
}

fn topology() -> impl Strategy<Value = Topology> {
    (1usize..8).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..12),
            prop::collection::vec((0..n, 0u64..50), 0..12),
        )
            .prop_map(|(switchboards, lines, phones)| Topology {
                switchboards,
                lines,
                phones,
            })
    })
}

fn area(index: usize) -> AreaCode {
    BASE_AREA + index as AreaCode
}

fn build(topology: &Topology) -> NetworkDirectory {
    let mut directory = NetworkDirectory::new();
    for i in 0..topology.switchboards {
        directory.add_switchboard(area(i));
    }
    for &(a, b) in &topology.lines {
        directory.connect_switchboards(area(a), area(b));
    }
    for &(i, number) in &topology.phones {
        directory.add_phone(area(i), number);
    }
    directory
}

/// Reachability by repeated relaxation, independent of the graph search
fn closure(topology: &Topology) -> Vec<Vec<bool>> {
    let n = topology.switchboards;
    let mut reach = vec![vec![false; n]; n];
    for (i, row) in reach.iter_mut().enumerate() {
        row[i] = true;
    }
    for &(a, b) in &topology.lines {
        reach[a][b] = true;
        reach[b][a] = true;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if reach[i][k] && reach[k][j] {
                    reach[i][j] = true;
                }
            }
        }
    }
    reach
}

proptest! {
    #[test]
    fn trunk_lines_are_symmetric(topology in topology()) {
        let directory = build(&topology);
        for a in directory.area_codes() {
            for b in directory.trunk_lines(a) {
                prop_assert!(directory.trunk_lines(b).any(|peer| peer == a));
            }
        }
    }

    #[test]
    fn reachability_matches_transitive_closure(topology in topology()) {
        let directory = build(&topology);
        let expected = closure(&topology);
        for i in 0..topology.switchboards {
            for j in 0..topology.switchboards {
                prop_assert_eq!(directory.find_path(area(i), area(j)), expected[i][j]);
            }
        }
    }

    #[test]
    fn disconnecting_every_line_isolates_switchboards(topology in topology()) {
        let mut directory = build(&topology);
        for &(a, b) in &topology.lines {
            directory.disconnect_switchboards(area(a), area(b));
        }
        for i in 0..topology.switchboards {
            for j in 0..topology.switchboards {
                prop_assert_eq!(directory.find_path(area(i), area(j)), i == j);
            }
        }
    }

    #[test]
    fn round_trip_preserves_structure_and_idles_phones(topology in topology()) {
        let mut original = build(&topology);
        if let (Some(&(i, n)), Some(&(j, m))) = (topology.phones.first(), topology.phones.last()) {
            original.start_call(PhoneAddress::new(area(i), n), PhoneAddress::new(area(j), m));
        }

        let mut text = Vec::new();
        original.write_to(&mut text).unwrap();
        let restored = NetworkDirectory::from_reader(text.as_slice()).unwrap();

        prop_assert_eq!(
            restored.area_codes().collect::<Vec<_>>(),
            original.area_codes().collect::<Vec<_>>()
        );
        for a in original.area_codes() {
            let mut before: Vec<_> = original.trunk_lines(a).collect();
            let mut after: Vec<_> = restored.trunk_lines(a).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);

            let before: Vec<_> = original.switchboard(a).unwrap().phones().iter().map(|p| p.address()).collect();
            let after: Vec<_> = restored.switchboard(a).unwrap().phones().iter().map(|p| p.address()).collect();
            prop_assert_eq!(before, after);
        }
        prop_assert!(restored.switchboards().flat_map(|sb| sb.phones()).all(|p| !p.is_connected()));
    }
}
