use std::collections::BTreeMap;

use crate::model::routing::RoutingTable;
use crate::model::topology::{Cost, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostMismatch {
    pub source: NodeId,
    pub destination: NodeId,
    pub distance_vector: Cost,
    pub link_state: Cost,
}

/// Compares per-destination costs of two table sets. Rows missing from either
/// side (the link state self row) are skipped.
pub fn cost_disagreements(
    distance_vector: &[RoutingTable],
    link_state: &[RoutingTable],
) -> Vec<CostMismatch> {
    let by_router: BTreeMap<NodeId, &RoutingTable> = link_state
        .iter()
        .map(|table| (table.router_id(), table))
        .collect();

    let mut out = Vec::new();
    for dv_table in distance_vector {
        let Some(ls_table) = by_router.get(&dv_table.router_id()) else {
            continue;
        };
        for dv_entry in dv_table.entries() {
            let Some(ls_entry) = ls_table.get(dv_entry.destination) else {
                continue;
            };
            if dv_entry.cost != ls_entry.cost {
                out.push(CostMismatch {
                    source: dv_table.router_id(),
                    destination: dv_entry.destination,
                    distance_vector: dv_entry.cost,
                    link_state: ls_entry.cost,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::routing::{Protocol, RouteEntry};
    use crate::model::topology::CostMatrix;
    use crate::protocols::{DistanceVectorProtocol, LinkStateProtocol, RoutingProtocol};

    struct LcgRng {
        state: u64,
    }

    impl LcgRng {
        fn new(seed: u64) -> Self {
            Self { state: seed.max(1) }
        }

        fn next_u64(&mut self) -> u64 {
            self.state = self
                .state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1);
            self.state >> 33
        }
    }

    fn random_directed_matrix(seed: u64, nodes: usize) -> CostMatrix {
        let mut rng = LcgRng::new(seed);
        let rows = (0..nodes)
            .map(|i| {
                (0..nodes)
                    .map(|j| {
                        if i == j {
                            Cost::ZERO
                        } else if rng.next_u64() % 3 == 0 {
                            Cost::Finite(1 + rng.next_u64() % 20)
                        } else {
                            Cost::Unreachable
                        }
                    })
                    .collect()
            })
            .collect();
        CostMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn both_algorithms_agree_on_costs() {
        for seed in 1..=25 {
            let matrix = random_directed_matrix(seed, 7);
            let dv = DistanceVectorProtocol::default()
                .build_tables(&matrix)
                .unwrap();
            let ls = LinkStateProtocol::new().build_tables(&matrix).unwrap();
            assert!(cost_disagreements(&dv, &ls).is_empty(), "seed {seed}");
        }
    }

    #[test]
    fn mismatched_costs_are_reported() {
        let mut dv = RoutingTable::new(0, Protocol::DistanceVector);
        dv.insert(RouteEntry {
            destination: 0,
            cost: Cost::ZERO,
            next_hop: None,
        });
        dv.insert(RouteEntry {
            destination: 1,
            cost: Cost::Finite(3),
            next_hop: Some(1),
        });
        let mut ls = RoutingTable::new(0, Protocol::LinkState);
        ls.insert(RouteEntry {
            destination: 1,
            cost: Cost::Unreachable,
            next_hop: None,
        });

        let mismatches = cost_disagreements(&[dv], &[ls]);
        assert_eq!(
            mismatches,
            vec![CostMismatch {
                source: 0,
                destination: 1,
                distance_vector: Cost::Finite(3),
                link_state: Cost::Unreachable,
            }]
        );
    }
}
