use crate::graph::capacity_matrix::CapacityMatrix;
use crate::graph::flow::FlowMatrix;
use crate::types::{Capacity, FlowValue};
use crate::FlowError;
use std::cmp::min;
use std::collections::VecDeque;

/// Breadth-first search for a shortest augmenting path in the residual graph.
///
/// Returns the bottleneck of the path and the path itself, from the sink
/// back to the source, or `None` if the sink is unreachable. The search
/// stops as soon as the sink is discovered. `source` and `sink` must be
/// valid indices into `capacity`.
pub(crate) fn augmenting_path<F: FlowValue>(
    capacity: &CapacityMatrix<F>,
    flow: &FlowMatrix<F>,
    source: usize,
    sink: usize,
) -> Result<Option<(Capacity<F>, Vec<usize>)>, FlowError> {
    let node_count = capacity.len();
    let mut parent: Vec<Option<usize>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    visited[source] = true;

    let mut queue = VecDeque::<(usize, Capacity<F>)>::new();
    queue.push_back((source, Capacity::Unbounded));
    while let Some((node, bottleneck)) = queue.pop_front() {
        for target in 0..node_count {
            if visited[target] {
                continue;
            }
            let residual = capacity.residual(flow, node, target)?;
            if residual.is_positive() {
                visited[target] = true;
                parent[target] = Some(node);
                let new_bottleneck = min(bottleneck, residual);
                if target == sink {
                    return Ok(Some((new_bottleneck, trace(&parent, source, sink))));
                }
                queue.push_back((target, new_bottleneck));
            }
        }
    }
    Ok(None)
}

/// Marks every node reachable from `source` through positive residual capacity.
pub(crate) fn residual_reachable<F: FlowValue>(
    capacity: &CapacityMatrix<F>,
    flow: &FlowMatrix<F>,
    source: usize,
) -> Result<Vec<bool>, FlowError> {
    let node_count = capacity.len();
    let mut reached = vec![false; node_count];
    reached[source] = true;
    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        for target in 0..node_count {
            if !reached[target] && capacity.residual(flow, node, target)?.is_positive() {
                reached[target] = true;
                queue.push_back(target);
            }
        }
    }
    Ok(reached)
}

// Every node discovered by the search has a parent, so the chain from the
// sink always ends at the source.
fn trace(parent: &[Option<usize>], source: usize, sink: usize) -> Vec<usize> {
    let mut t = vec![sink];
    let mut node = sink;
    while node != source {
        node = match parent[node] {
            Some(p) => p,
            None => unreachable!("node {node} was discovered without a parent"),
        };
        t.push(node);
    }
    t
}
