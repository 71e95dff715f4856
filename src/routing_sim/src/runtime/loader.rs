use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{SimError, TopologyError};
use crate::model::topology::{Cost, CostMatrix};

pub const DEFAULT_UNREACHABLE_COST: u64 = 9999;

/// Parses `N` followed by `N*N` row-major integer costs. A cost equal to
/// `sentinel` means there is no direct link.
pub fn parse_cost_matrix(text: &str, sentinel: u64) -> Result<CostMatrix, TopologyError> {
    let mut tokens = text.split_whitespace();

    let raw_count = tokens
        .next()
        .ok_or_else(|| TopologyError::MalformedInput("missing node count".to_string()))?;
    let nodes: usize = raw_count.parse().map_err(|_| {
        TopologyError::MalformedInput(format!("invalid node count {raw_count:?}"))
    })?;

    let mut rows = Vec::new();
    for from in 0..nodes {
        let mut row = Vec::new();
        for to in 0..nodes {
            let token = tokens.next().ok_or_else(|| {
                TopologyError::MalformedInput(format!(
                    "expected {} costs for {} nodes, input ends at row {} column {}",
                    nodes.saturating_mul(nodes),
                    nodes,
                    from,
                    to
                ))
            })?;
            let value: i64 = token.parse().map_err(|_| {
                TopologyError::MalformedInput(format!(
                    "invalid cost {token:?} at row {from} column {to}"
                ))
            })?;
            if value < 0 {
                return Err(TopologyError::NegativeCost {
                    from,
                    to,
                    cost: value,
                });
            }

            let value = value as u64;
            if from == to && value != 0 {
                warn!("node {} has non-zero self cost {}", from, value);
            }
            row.push(if value == sentinel {
                Cost::Unreachable
            } else {
                Cost::Finite(value)
            });
        }
        rows.push(row);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!("ignoring {} trailing tokens after cost matrix", trailing);
    }

    CostMatrix::from_rows(rows)
}

pub fn load_cost_matrix(path: &Path, sentinel: u64) -> Result<CostMatrix, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = parse_cost_matrix(&text, sentinel)?;
    info!(
        "loaded topology {}: nodes={} symmetric={}",
        path.display(),
        matrix.size(),
        matrix.is_symmetric()
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn parses_row_major_matrix_with_sentinel() {
        let matrix = parse_cost_matrix("3\n0 4 9999\n4 0 1\n9999 1 0\n", 9999).unwrap();
        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.cost(0, 1), Cost::Finite(4));
        assert_eq!(matrix.cost(0, 2), Cost::Unreachable);
        assert_eq!(matrix.cost(2, 1), Cost::Finite(1));
    }

    #[test]
    fn layout_is_free_form_whitespace() {
        let matrix = parse_cost_matrix("2 0\t7\n\n  3    0", 9999).unwrap();
        assert_eq!(matrix.cost(0, 1), Cost::Finite(7));
        assert_eq!(matrix.cost(1, 0), Cost::Finite(3));
    }

    #[test]
    fn custom_sentinel_is_honored() {
        let matrix = parse_cost_matrix("2 0 100 7 0", 100).unwrap();
        assert_eq!(matrix.cost(0, 1), Cost::Unreachable);
        assert_eq!(matrix.cost(1, 0), Cost::Finite(7));
    }

    #[test]
    fn empty_input_is_malformed() {
        let err = parse_cost_matrix("  \n", 9999).unwrap_err();
        assert_eq!(
            err,
            TopologyError::MalformedInput("missing node count".to_string())
        );
    }

    #[test]
    fn non_numeric_node_count_is_malformed() {
        let err = parse_cost_matrix("three 0 1", 9999).unwrap_err();
        assert!(matches!(err, TopologyError::MalformedInput(msg) if msg.contains("three")));
    }

    #[test]
    fn short_input_names_first_missing_cell() {
        let err = parse_cost_matrix("2\n0 1\n1", 9999).unwrap_err();
        assert_eq!(
            err,
            TopologyError::MalformedInput(
                "expected 4 costs for 2 nodes, input ends at row 1 column 1".to_string()
            )
        );
    }

    #[test]
    fn non_integer_cost_is_malformed() {
        let err = parse_cost_matrix("2\n0 1.5\n1 0", 9999).unwrap_err();
        assert_eq!(
            err,
            TopologyError::MalformedInput("invalid cost \"1.5\" at row 0 column 1".to_string())
        );
    }

    #[test]
    fn negative_cost_is_rejected() {
        let err = parse_cost_matrix("2\n0 1\n-3 0", 9999).unwrap_err();
        assert_eq!(
            err,
            TopologyError::NegativeCost {
                from: 1,
                to: 0,
                cost: -3
            }
        );
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let matrix = parse_cost_matrix("1\n0\n42 43", 9999).unwrap();
        assert_eq!(matrix.size(), 1);
        assert_eq!(matrix.cost(0, 0), Cost::ZERO);
    }

    #[test]
    fn zero_nodes_is_an_empty_matrix() {
        let matrix = parse_cost_matrix("0", 9999).unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = PathBuf::from("/nonexistent/routing_sim/topology.txt");
        let err = load_cost_matrix(&path, DEFAULT_UNREACHABLE_COST).unwrap_err();
        assert!(matches!(err, SimError::Io { path: ref p, .. } if *p == path));
        assert!(err.to_string().starts_with("could not open file"));
    }

    #[test]
    fn loads_matrix_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "routing_sim_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "2\n0 5\n5 0\n").unwrap();
        let matrix = load_cost_matrix(&path, DEFAULT_UNREACHABLE_COST);
        fs::remove_file(&path).unwrap();
        assert_eq!(matrix.unwrap().cost(1, 0), Cost::Finite(5));
    }
}
