use json::JsonValue;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt::Display;
use std::fs::read_to_string;
use std::io::{self, Write};

use crate::graph::FlowReport;
use crate::types::{Amount, Network};
use crate::FlowError;

/// A logistics network together with the role of its nodes.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_sink")]
    pub sink: String,
    pub entries: Vec<String>,
    #[serde(default)]
    pub intermediates: Vec<String>,
    pub exits: Vec<String>,
    pub edges: Vec<ScenarioEdge>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEdge {
    pub from: String,
    pub to: String,
    pub capacity: Amount,
}

fn default_source() -> String {
    "super_source".to_string()
}

fn default_sink() -> String {
    "super_sink".to_string()
}

impl Scenario {
    /// Builds the network and connects the virtual source and sink.
    pub fn network(&self) -> Result<Network<Amount>, FlowError> {
        let mut network = Network::new();
        for edge in &self.edges {
            network.add_edge(&edge.from, &edge.to, edge.capacity)?;
        }
        for node in &self.intermediates {
            network.add_node(node);
        }
        network.augment_with_virtual_terminals(
            &self.entries,
            &self.exits,
            &self.source,
            &self.sink,
        )?;
        Ok(network)
    }

    fn validate(&self) -> Result<(), FlowError> {
        let mut seen = HashSet::new();
        for node in self
            .entries
            .iter()
            .chain(self.intermediates.iter())
            .chain(self.exits.iter())
        {
            if !seen.insert(node.as_str()) {
                return Err(FlowError::InvalidScenario(format!(
                    "node {node} has more than one role"
                )));
            }
        }
        if self.entries.is_empty() || self.exits.is_empty() {
            return Err(FlowError::InvalidScenario(
                "at least one entry and one exit are required".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn read_scenario_json(path: &str) -> Result<Scenario, FlowError> {
    parse_scenario_json(&read_to_string(path)?)
}

pub fn parse_scenario_json(contents: &str) -> Result<Scenario, FlowError> {
    let scenario: Scenario = serde_json::from_str(contents)?;
    scenario.validate()?;
    Ok(scenario)
}

pub fn report_to_json(report: &FlowReport<Amount>) -> JsonValue {
    json::object! {
        maxFlowValue: report.value,
        augmentingPaths: report.augmentations,
        attributions: report.attributions.iter().map(|a| json::object! {
            entry: a.entry.as_str(),
            exit: a.exit.as_str(),
            value: a.amount,
        }).collect::<Vec<_>>(),
        minCut: report.min_cut.iter().map(|e| json::object! {
            from: e.from.as_str(),
            to: e.to.as_str(),
            capacity: e.capacity.finite().map_or(JsonValue::Null, JsonValue::from),
        }).collect::<Vec<_>>(),
    }
}

/// Writes the max flow value, one line per attributed (entry, exit) pair
/// and the edges of the minimum cut.
pub fn write_flow_table<F: Display, W: Write>(
    out: &mut W,
    report: &FlowReport<F>,
) -> Result<(), io::Error> {
    writeln!(out, "Max flow: {}", report.value)?;
    writeln!(out, "Attributed flow (entry - exit):")?;
    for a in &report.attributions {
        writeln!(out, "{} - {}: {} units", a.entry, a.exit, a.amount)?;
    }
    writeln!(out, "Minimum cut:")?;
    for e in &report.min_cut {
        writeln!(out, "{} -> {} ({})", e.from, e.to, e.capacity)?;
    }
    Ok(())
}
