use std::collections::BTreeMap;
use std::fmt;

use crate::model::topology::{Cost, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Protocol {
    DistanceVector,
    LinkState,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::DistanceVector => "dvr",
            Protocol::LinkState => "lsr",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub destination: NodeId,
    pub cost: Cost,
    pub next_hop: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    router_id: NodeId,
    protocol: Protocol,
    entries: BTreeMap<NodeId, RouteEntry>,
}

impl RoutingTable {
    pub fn new(router_id: NodeId, protocol: Protocol) -> Self {
        Self {
            router_id,
            protocol,
            entries: BTreeMap::new(),
        }
    }

    pub fn router_id(&self) -> NodeId {
        self.router_id
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn insert(&mut self, entry: RouteEntry) -> Option<RouteEntry> {
        self.entries.insert(entry.destination, entry)
    }

    pub fn get(&self, destination: NodeId) -> Option<&RouteEntry> {
        self.entries.get(&destination)
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.values()
    }

    pub fn snapshot(&self) -> Vec<RouteEntry> {
        self.entries.values().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Destinations other than the router itself with a finite cost.
    pub fn reachable_count(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.destination != self.router_id && entry.cost.is_reachable())
            .count()
    }
}
