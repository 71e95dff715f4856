pub mod base;
pub mod cross_check;
pub mod distance_vector;
pub mod link_state;
pub mod route_compute;

pub use base::RoutingProtocol;
pub use cross_check::{cost_disagreements, CostMismatch};
pub use distance_vector::DistanceVectorProtocol;
pub use link_state::LinkStateProtocol;
