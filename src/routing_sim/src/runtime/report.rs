use std::io::{self, Write};

use serde::Serialize;

use crate::model::routing::{Protocol, RouteEntry, RoutingTable};
use crate::model::topology::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub destination: NodeId,
    pub cost: u64,
    pub reachable: bool,
    pub next_hop: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub router_id: NodeId,
    pub routes: Vec<RouteRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolReport {
    pub protocol: &'static str,
    pub tables: Vec<TableReport>,
}

fn section_header(protocol: Protocol) -> &'static str {
    match protocol {
        Protocol::DistanceVector => "--- Distance Vector Routing Simulation ---",
        Protocol::LinkState => "--- Link State Routing Simulation ---",
    }
}

fn next_hop_label(router_id: NodeId, entry: &RouteEntry) -> String {
    if entry.destination == router_id {
        return "-".to_string();
    }
    match entry.next_hop {
        Some(hop) => hop.to_string(),
        None => "none".to_string(),
    }
}

pub fn write_table<W: Write>(
    out: &mut W,
    table: &RoutingTable,
    sentinel: u64,
) -> io::Result<()> {
    writeln!(out, "Node {} Routing Table:", table.router_id())?;
    writeln!(out, "Dest\tCost\tNext Hop")?;
    for entry in table.entries() {
        writeln!(
            out,
            "{}\t{}\t{}",
            entry.destination,
            entry.cost.render(sentinel),
            next_hop_label(table.router_id(), entry)
        )?;
    }
    writeln!(out)
}

pub fn write_text_report<W: Write>(
    out: &mut W,
    protocol: Protocol,
    tables: &[RoutingTable],
    sentinel: u64,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", section_header(protocol))?;
    if protocol == Protocol::DistanceVector {
        writeln!(out, "--- DVR Final Tables ---")?;
    }
    for table in tables {
        write_table(out, table, sentinel)?;
    }
    Ok(())
}

pub fn protocol_report(
    protocol: Protocol,
    tables: &[RoutingTable],
    sentinel: u64,
) -> ProtocolReport {
    let tables = tables
        .iter()
        .map(|table| TableReport {
            router_id: table.router_id(),
            routes: table
                .entries()
                .map(|entry| RouteRow {
                    destination: entry.destination,
                    cost: entry.cost.render(sentinel),
                    reachable: entry.cost.is_reachable(),
                    next_hop: entry.next_hop,
                })
                .collect(),
        })
        .collect();

    ProtocolReport {
        protocol: protocol.as_str(),
        tables,
    }
}

pub fn write_json_report<W: Write>(out: &mut W, reports: &[ProtocolReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)
}
