use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::error::SimError;
use crate::model::routing::{Protocol, RoutingTable};
use crate::model::topology::CostMatrix;
use crate::protocols::{
    cost_disagreements, CostMismatch, DistanceVectorProtocol, LinkStateProtocol, RoutingProtocol,
};
use crate::runtime::config::{Algorithm, OutputFormat, SimConfig};
use crate::runtime::report::{protocol_report, write_json_report, write_text_report};

#[derive(Debug, Default)]
pub struct SimulationOutcome {
    pub tables: BTreeMap<Protocol, Vec<RoutingTable>>,
    pub mismatches: Vec<CostMismatch>,
}

pub fn build_protocol(algorithm: Algorithm, cfg: &SimConfig) -> Box<dyn RoutingProtocol> {
    match algorithm {
        Algorithm::Dvr => Box::new(DistanceVectorProtocol::new(cfg.dvr_max_passes)),
        Algorithm::Lsr => Box::new(LinkStateProtocol::new()),
    }
}

/// Runs the selected algorithms in order and writes their tables to `out`.
pub fn run_simulation<W: Write>(
    matrix: &CostMatrix,
    cfg: &SimConfig,
    out: &mut W,
) -> Result<SimulationOutcome> {
    let mut outcome = SimulationOutcome::default();
    let mut json_reports = Vec::new();

    for algorithm in &cfg.algorithms {
        let protocol = build_protocol(*algorithm, cfg);
        let tables = protocol
            .build_tables(matrix)
            .map_err(SimError::from)
            .with_context(|| format!("{} routing computation failed", protocol.name()))?;

        match cfg.output_format {
            OutputFormat::Text => {
                write_text_report(out, protocol.protocol(), &tables, cfg.unreachable_cost)
                    .context("failed to write routing tables")?;
            }
            OutputFormat::Json => {
                json_reports.push(protocol_report(
                    protocol.protocol(),
                    &tables,
                    cfg.unreachable_cost,
                ));
            }
        }
        outcome.tables.insert(protocol.protocol(), tables);
    }

    if cfg.output_format == OutputFormat::Json {
        write_json_report(out, &json_reports).context("failed to write routing tables")?;
    }

    if cfg.cross_check {
        outcome.mismatches = cross_check(&outcome.tables);
    }
    Ok(outcome)
}

fn cross_check(tables: &BTreeMap<Protocol, Vec<RoutingTable>>) -> Vec<CostMismatch> {
    let (Some(dv), Some(ls)) = (
        tables.get(&Protocol::DistanceVector),
        tables.get(&Protocol::LinkState),
    ) else {
        warn!("cross-check skipped: both dvr and lsr must be selected");
        return Vec::new();
    };

    let mismatches = cost_disagreements(dv, ls);
    if mismatches.is_empty() {
        info!("cross-check passed: dvr and lsr costs agree");
    }
    for mismatch in &mismatches {
        warn!(
            "cross-check mismatch {}->{}: dvr={} lsr={}",
            mismatch.source, mismatch.destination, mismatch.distance_vector, mismatch.link_state
        );
    }
    mismatches
}
