use crate::model::topology::{Cost, NodeId};

/// All-pairs distance and next-hop tables, always mutated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DvTables {
    pub dist: Vec<Vec<Cost>>,
    pub next_hop: Vec<Vec<Option<NodeId>>>,
}

impl DvTables {
    pub fn size(&self) -> usize {
        self.dist.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DvOutcome {
    pub tables: DvTables,
    /// Relaxation passes run, counting the final pass that changed nothing.
    pub passes: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DvRouteComputeEngine {
    pub max_passes: Option<usize>,
}

/// Shortest-path tree rooted at `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpfTree {
    pub source: NodeId,
    pub dist: Vec<Cost>,
    pub prev: Vec<Option<NodeId>>,
    pub visited: Vec<bool>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SpfRouteComputeEngine;
