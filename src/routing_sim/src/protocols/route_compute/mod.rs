mod dv;
mod spf;
mod traits;
mod types;

pub use dv::{compute_distance_vector, init_distance_vector, relax_distance_vector_pass};
pub use spf::compute_spf_tree;
pub use traits::RouteComputeEngine;
pub use types::{DvOutcome, DvRouteComputeEngine, DvTables, SpfRouteComputeEngine, SpfTree};
