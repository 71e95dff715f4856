use tracing::info;

use crate::error::RouteComputeError;
use crate::model::routing::{Protocol, RouteEntry, RoutingTable};
use crate::model::topology::CostMatrix;
use crate::protocols::base::RoutingProtocol;
use crate::protocols::route_compute::{RouteComputeEngine, SpfRouteComputeEngine, SpfTree};

#[derive(Debug, Default, Clone, Copy)]
pub struct LinkStateProtocol {
    engine: SpfRouteComputeEngine,
}

impl LinkStateProtocol {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoutingProtocol for LinkStateProtocol {
    fn name(&self) -> &'static str {
        "link_state"
    }

    fn protocol(&self) -> Protocol {
        Protocol::LinkState
    }

    fn build_tables(&self, matrix: &CostMatrix) -> Result<Vec<RoutingTable>, RouteComputeError> {
        let trees = self.engine.compute(matrix)?;
        info!("link state trees computed: sources={}", trees.len());
        Ok(trees.iter().map(table_from_spf_tree).collect())
    }
}

/// Forwarding table for the tree's source. The source's own row is left out.
pub fn table_from_spf_tree(tree: &SpfTree) -> RoutingTable {
    let mut table = RoutingTable::new(tree.source, Protocol::LinkState);
    for destination in (0..tree.dist.len()).filter(|node| *node != tree.source) {
        table.insert(RouteEntry {
            destination,
            cost: tree.cost(destination),
            next_hop: tree.first_hop(destination),
        });
    }
    table
}
