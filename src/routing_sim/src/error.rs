use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::topology::NodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("negative cost {cost} on link {from}->{to}")]
    NegativeCost { from: NodeId, to: NodeId, cost: i64 },

    #[error("cost matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteComputeError {
    #[error("distance vector tables did not converge within {passes} passes")]
    NonConvergence { passes: usize },

    #[error("source node {node} out of range for {nodes} nodes")]
    SourceOutOfRange { node: NodeId, nodes: usize },
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{0}")]
    Usage(String),

    #[error("could not open file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    RouteCompute(#[from] RouteComputeError),
}
