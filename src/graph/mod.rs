use crate::call_context::CallContext;
use crate::types::{Edge, FlowValue, Network};
use crate::FlowError;

mod augmenting_path;
mod capacity_matrix;
mod decompose;
mod flow;

pub use crate::graph::capacity_matrix::{build, CapacityMatrix, NodeIndex};
pub use crate::graph::decompose::{decompose, Attribution};
pub use crate::graph::flow::{compute_flow, compute_flow_observed, FlowMatrix, MaxFlow};

// The pipeline over an augmented network is
//
// network -> (capacity matrix, node index) -> max flow -> attributions
//
// The virtual source and sink come from the network itself; entries and
// exits are the nodes they were connected to. Intermediate nodes are only
// needed for the attribution step and are supplied by the caller.

/// Everything a presentation layer needs from one computation.
#[derive(Debug, Clone)]
pub struct FlowReport<F> {
    pub value: F,
    pub augmentations: usize,
    pub attributions: Vec<Attribution<F>>,
    /// Saturated edges between the two sides of a minimum cut.
    pub min_cut: Vec<Edge<F>>,
    pub node_index: NodeIndex,
    pub flow: FlowMatrix<F>,
}

/// Runs the whole pipeline on a network that has virtual terminals.
pub fn solve<F: FlowValue, S: AsRef<str>>(
    network: &Network<F>,
    intermediates: &[S],
    call_context: &CallContext,
) -> Result<FlowReport<F>, FlowError> {
    let terminals = network.terminals().ok_or(FlowError::NotAugmented)?;
    let (capacity, node_index) = build(network)?;
    call_context.log_message(
        format!(
            "Capacity matrix: {} nodes, {} edges",
            node_index.len(),
            network.edge_count()
        )
        .as_str(),
    );

    let source = node_index.resolve(&terminals.source)?;
    let sink = node_index.resolve(&terminals.sink)?;
    let max_flow = compute_flow(&capacity, source, sink, call_context)?;

    let attributions = decompose(
        &max_flow.flow,
        &node_index,
        &terminals.entries,
        &intermediates
            .iter()
            .map(|n| n.as_ref().to_string())
            .collect::<Vec<_>>(),
        &terminals.exits,
    )?;
    call_context.log_message(format!("Attributed pairs: {}", attributions.len()).as_str());

    let min_cut = max_flow
        .min_cut_edges(&capacity)
        .into_iter()
        .map(|(i, j)| -> Result<Edge<F>, FlowError> {
            Ok(Edge {
                from: node_name(&node_index, i)?,
                to: node_name(&node_index, j)?,
                capacity: capacity.get(i, j),
            })
        })
        .collect::<Result<Vec<_>, FlowError>>()?;

    Ok(FlowReport {
        value: max_flow.value,
        augmentations: max_flow.augmentations,
        attributions,
        min_cut,
        node_index,
        flow: max_flow.flow,
    })
}

fn node_name(node_index: &NodeIndex, index: usize) -> Result<String, FlowError> {
    node_index
        .name_of(index)
        .map(str::to_string)
        .ok_or_else(|| FlowError::UnresolvedNode(format!("#{index}")))
}
