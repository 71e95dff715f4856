use tracing::debug;

use super::{DvOutcome, DvRouteComputeEngine, DvTables, RouteComputeEngine};
use crate::error::RouteComputeError;
use crate::model::topology::CostMatrix;

impl RouteComputeEngine for DvRouteComputeEngine {
    type Input = CostMatrix;
    type Output = Result<DvOutcome, RouteComputeError>;

    fn compute(&self, input: &Self::Input) -> Self::Output {
        compute_distance_vector(input, self.max_passes)
    }
}

pub fn init_distance_vector(matrix: &CostMatrix) -> DvTables {
    let n = matrix.size();
    let next_hop = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| matrix.has_direct_link(i, j).then_some(j))
                .collect()
        })
        .collect();

    DvTables {
        dist: matrix.rows(),
        next_hop,
    }
}

/// One scan over every (i, j, k). Updates land in place, so later triples in
/// the same scan already see them. Returns the number of improvements.
pub fn relax_distance_vector_pass(tables: &mut DvTables) -> usize {
    let n = tables.size();
    let mut improvements = 0;

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let candidate = tables.dist[i][k] + tables.dist[k][j];
                if candidate < tables.dist[i][j] {
                    tables.dist[i][j] = candidate;
                    tables.next_hop[i][j] = tables.next_hop[i][k];
                    improvements += 1;
                }
            }
        }
    }

    improvements
}

pub fn compute_distance_vector(
    matrix: &CostMatrix,
    max_passes: Option<usize>,
) -> Result<DvOutcome, RouteComputeError> {
    let mut tables = init_distance_vector(matrix);
    let mut passes = 0;

    loop {
        if max_passes.is_some_and(|cap| passes >= cap) {
            return Err(RouteComputeError::NonConvergence { passes });
        }
        passes += 1;
        let improvements = relax_distance_vector_pass(&mut tables);
        debug!("dv pass {}: {} improvements", passes, improvements);
        if improvements == 0 {
            break;
        }
    }

    Ok(DvOutcome { tables, passes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::topology::{matrix_from_raw, Cost};

    const INF: u64 = 9999;

    fn chain() -> CostMatrix {
        matrix_from_raw(
            &[
                &[0, 1, INF, INF],
                &[1, 0, 2, INF],
                &[INF, 2, 0, 1],
                &[INF, INF, 1, 0],
            ],
            INF,
        )
    }

    #[test]
    fn init_only_points_at_direct_neighbors() {
        let tables = init_distance_vector(&chain());
        assert_eq!(tables.next_hop[0], vec![None, Some(1), None, None]);
        assert_eq!(tables.next_hop[2], vec![None, Some(1), None, Some(3)]);
        assert_eq!(tables.dist[0][3], Cost::Unreachable);
    }

    #[test]
    fn chain_converges_to_multi_hop_path() {
        let out = compute_distance_vector(&chain(), None).unwrap();
        assert_eq!(out.tables.dist[0][3], Cost::Finite(4));
        assert_eq!(out.tables.next_hop[0][3], Some(1));
        assert_eq!(out.tables.dist[3][0], Cost::Finite(4));
        assert_eq!(out.tables.next_hop[3][0], Some(2));
        assert_eq!(out.tables.dist[1][3], Cost::Finite(3));
        assert_eq!(out.tables.next_hop[1][3], Some(2));
    }

    #[test]
    fn self_entries_stay_zero_with_no_next_hop() {
        let out = compute_distance_vector(&chain(), None).unwrap();
        for i in 0..4 {
            assert_eq!(out.tables.dist[i][i], Cost::ZERO);
            assert_eq!(out.tables.next_hop[i][i], None);
        }
    }

    #[test]
    fn extra_pass_after_convergence_changes_nothing() {
        let mut out = compute_distance_vector(&chain(), None).unwrap();
        let before = out.tables.clone();
        assert_eq!(relax_distance_vector_pass(&mut out.tables), 0);
        assert_eq!(out.tables, before);
    }

    #[test]
    fn disconnected_nodes_stay_unreachable() {
        let matrix = matrix_from_raw(&[&[0, INF, INF], &[INF, 0, INF], &[INF, INF, 0]], INF);
        let out = compute_distance_vector(&matrix, None).unwrap();
        assert_eq!(out.passes, 1);
        for i in 0..3 {
            for j in 0..3 {
                if i == j {
                    continue;
                }
                assert_eq!(out.tables.dist[i][j], Cost::Unreachable);
                assert_eq!(out.tables.next_hop[i][j], None);
            }
        }
    }

    #[test]
    fn directed_costs_keep_their_direction() {
        let matrix = matrix_from_raw(&[&[0, 1, INF], &[INF, 0, 1], &[10, INF, 0]], INF);
        let out = compute_distance_vector(&matrix, None).unwrap();
        assert_eq!(out.tables.dist[0][2], Cost::Finite(2));
        assert_eq!(out.tables.dist[2][0], Cost::Finite(10));
        assert_eq!(out.tables.dist[1][0], Cost::Finite(11));
        assert_eq!(out.tables.next_hop[1][0], Some(2));
    }

    #[test]
    fn cheaper_indirect_path_replaces_direct_link() {
        let matrix = matrix_from_raw(&[&[0, 10, 1], &[10, 0, 1], &[1, 1, 0]], INF);
        let out = compute_distance_vector(&matrix, None).unwrap();
        assert_eq!(out.tables.dist[0][1], Cost::Finite(2));
        assert_eq!(out.tables.next_hop[0][1], Some(2));
    }

    #[test]
    fn pass_cap_reports_non_convergence() {
        let err = compute_distance_vector(&chain(), Some(1)).unwrap_err();
        assert_eq!(err, RouteComputeError::NonConvergence { passes: 1 });
    }

    #[test]
    fn engine_forwards_pass_cap() {
        let engine = DvRouteComputeEngine {
            max_passes: Some(8),
        };
        let out = engine.compute(&chain()).unwrap();
        assert!(out.passes <= 8);
        assert_eq!(out.tables.dist[0][2], Cost::Finite(3));
    }
}
