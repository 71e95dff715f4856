use crate::error::RouteComputeError;
use crate::model::routing::{Protocol, RoutingTable};
use crate::model::topology::CostMatrix;

pub trait RoutingProtocol {
    fn name(&self) -> &'static str;
    fn protocol(&self) -> Protocol;
    /// One forwarding table per node, ordered by router id.
    fn build_tables(&self, matrix: &CostMatrix) -> Result<Vec<RoutingTable>, RouteComputeError>;
}
