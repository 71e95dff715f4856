use tracing::debug;

use super::{RouteComputeEngine, SpfRouteComputeEngine, SpfTree};
use crate::error::RouteComputeError;
use crate::model::topology::{Cost, CostMatrix, NodeId};

impl RouteComputeEngine for SpfRouteComputeEngine {
    type Input = CostMatrix;
    type Output = Result<Vec<SpfTree>, RouteComputeError>;

    fn compute(&self, input: &Self::Input) -> Self::Output {
        (0..input.size())
            .map(|source| compute_spf_tree(input, source))
            .collect()
    }
}

impl SpfTree {
    pub fn cost(&self, destination: NodeId) -> Cost {
        self.dist[destination]
    }

    /// First node after `source` on the tree path to `destination`.
    pub fn first_hop(&self, destination: NodeId) -> Option<NodeId> {
        if destination == self.source {
            return None;
        }
        let mut hop = destination;
        loop {
            match self.prev[hop] {
                None => return None,
                Some(parent) if parent == self.source => return Some(hop),
                Some(parent) => hop = parent,
            }
        }
    }

    pub fn settled_count(&self) -> usize {
        self.visited.iter().filter(|settled| **settled).count()
    }
}

// Linear scan keeps the first minimum, so the lowest index wins ties.
fn select_closest_unvisited(dist: &[Cost], visited: &[bool]) -> Option<NodeId> {
    let mut best: Option<NodeId> = None;
    for (node, cost) in dist.iter().enumerate() {
        if visited[node] {
            continue;
        }
        match best {
            Some(current) if dist[current] <= *cost => {}
            _ => best = Some(node),
        }
    }
    best
}

pub fn compute_spf_tree(
    matrix: &CostMatrix,
    source: NodeId,
) -> Result<SpfTree, RouteComputeError> {
    let n = matrix.size();
    if source >= n {
        return Err(RouteComputeError::SourceOutOfRange {
            node: source,
            nodes: n,
        });
    }

    let mut dist = vec![Cost::Unreachable; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[source] = Cost::ZERO;

    for _ in 0..n {
        let Some(u) = select_closest_unvisited(&dist, &visited) else {
            break;
        };
        if !dist[u].is_reachable() {
            break;
        }
        visited[u] = true;

        for (v, edge_cost) in matrix.neighbors(u) {
            if visited[v] {
                continue;
            }
            let candidate = dist[u] + Cost::Finite(edge_cost);
            if candidate < dist[v] {
                dist[v] = candidate;
                prev[v] = Some(u);
            }
        }
    }

    let tree = SpfTree {
        source,
        dist,
        prev,
        visited,
    };
    debug!(
        "spf source={} settled {}/{} nodes",
        source,
        tree.settled_count(),
        n
    );
    Ok(tree)
}
