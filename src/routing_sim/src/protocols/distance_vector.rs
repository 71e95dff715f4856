use tracing::info;

use crate::error::RouteComputeError;
use crate::model::routing::{Protocol, RouteEntry, RoutingTable};
use crate::model::topology::CostMatrix;
use crate::protocols::base::RoutingProtocol;
use crate::protocols::route_compute::{DvRouteComputeEngine, DvTables, RouteComputeEngine};

#[derive(Debug, Default, Clone, Copy)]
pub struct DistanceVectorProtocol {
    engine: DvRouteComputeEngine,
}

impl DistanceVectorProtocol {
    pub fn new(max_passes: Option<usize>) -> Self {
        Self {
            engine: DvRouteComputeEngine { max_passes },
        }
    }
}

impl RoutingProtocol for DistanceVectorProtocol {
    fn name(&self) -> &'static str {
        "distance_vector"
    }

    fn protocol(&self) -> Protocol {
        Protocol::DistanceVector
    }

    fn build_tables(&self, matrix: &CostMatrix) -> Result<Vec<RoutingTable>, RouteComputeError> {
        let outcome = self.engine.compute(matrix)?;
        info!(
            "distance vector converged: nodes={} passes={}",
            matrix.size(),
            outcome.passes
        );
        Ok(tables_from_distance_vector(&outcome.tables))
    }
}

pub fn tables_from_distance_vector(tables: &DvTables) -> Vec<RoutingTable> {
    let n = tables.size();
    (0..n)
        .map(|router_id| {
            let mut table = RoutingTable::new(router_id, Protocol::DistanceVector);
            for destination in 0..n {
                let next_hop = if destination == router_id {
                    None
                } else {
                    tables.next_hop[router_id][destination]
                };
                table.insert(RouteEntry {
                    destination,
                    cost: tables.dist[router_id][destination],
                    next_hop,
                });
            }
            table
        })
        .collect()
}
