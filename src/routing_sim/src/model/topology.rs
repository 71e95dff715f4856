use std::fmt;
use std::ops::Add;

use crate::error::TopologyError;

pub type NodeId = usize;

/// Link or path cost. `Unreachable` orders after every finite cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    Finite(u64),
    Unreachable,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0);

    pub fn is_reachable(self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    pub fn finite(self) -> Option<u64> {
        match self {
            Cost::Finite(value) => Some(value),
            Cost::Unreachable => None,
        }
    }

    /// Value shown to operators, with `Unreachable` mapped back to the input sentinel.
    pub fn render(self, sentinel: u64) -> u64 {
        self.finite().unwrap_or(sentinel)
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => {
                a.checked_add(b).map_or(Cost::Unreachable, Cost::Finite)
            }
            _ => Cost::Unreachable,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(value) => write!(f, "{value}"),
            Cost::Unreachable => f.write_str("unreachable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    costs: Vec<Cost>,
}

impl CostMatrix {
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, TopologyError> {
        let size = rows.len();
        let mut costs = Vec::with_capacity(size * size);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != size {
                return Err(TopologyError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: size,
                });
            }
            costs.extend(entries);
        }
        Ok(Self { size, costs })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn cost(&self, from: NodeId, to: NodeId) -> Cost {
        self.costs[from * self.size + to]
    }

    pub fn row(&self, from: NodeId) -> &[Cost] {
        &self.costs[from * self.size..(from + 1) * self.size]
    }

    pub fn has_direct_link(&self, from: NodeId, to: NodeId) -> bool {
        from != to && self.cost(from, to).is_reachable()
    }

    pub fn neighbors(&self, from: NodeId) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.row(from)
            .iter()
            .enumerate()
            .filter(move |(to, _)| *to != from)
            .filter_map(|(to, cost)| cost.finite().map(|value| (to, value)))
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.cost(i, j) == self.cost(j, i)))
    }

    pub fn rows(&self) -> Vec<Vec<Cost>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }
}

#[cfg(test)]
pub(crate) fn matrix_from_raw(raw: &[&[u64]], sentinel: u64) -> CostMatrix {
    let rows = raw
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| {
                    if *value == sentinel {
                        Cost::Unreachable
                    } else {
                        Cost::Finite(*value)
                    }
                })
                .collect()
        })
        .collect();
    CostMatrix::from_rows(rows).expect("square test matrix")
}
