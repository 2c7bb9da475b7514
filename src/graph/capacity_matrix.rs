use crate::graph::flow::FlowMatrix;
use crate::types::{Capacity, FlowValue, Network};
use crate::FlowError;
use std::collections::HashMap;

/// Bijection between node names and dense indices in `[0, n)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeIndex {
    names: Vec<String>,
    indices: HashMap<String, usize>,
}

impl NodeIndex {
    pub fn new<S: AsRef<str>>(names: &[S]) -> NodeIndex {
        let mut index = NodeIndex::default();
        for name in names {
            let name = name.as_ref();
            if !index.indices.contains_key(name) {
                index.indices.insert(name.to_string(), index.names.len());
                index.names.push(name.to_string());
            }
        }
        index
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Result<usize, FlowError> {
        self.index_of(name)
            .ok_or_else(|| FlowError::UnresolvedNode(name.to_string()))
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}

/// Dense n×n capacity matrix. Pairs without an edge hold a zero capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityMatrix<F> {
    rows: Vec<Vec<Capacity<F>>>,
}

impl<F: FlowValue> CapacityMatrix<F> {
    pub fn new(node_count: usize) -> Self {
        CapacityMatrix {
            rows: vec![vec![Capacity::zero(); node_count]; node_count],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> Capacity<F> {
        self.rows[from][to]
    }

    pub fn set(&mut self, from: usize, to: usize, capacity: Capacity<F>) {
        self.rows[from][to] = capacity;
    }

    /// Residual capacity of the edge `from -> to` under `flow`.
    pub fn residual(
        &self,
        flow: &FlowMatrix<F>,
        from: usize,
        to: usize,
    ) -> Result<Capacity<F>, FlowError> {
        self.rows[from][to]
            .residual(flow.get(from, to))
            .ok_or(FlowError::Overflow)
    }
}

/// Enumerates the nodes of the network in insertion order and fills the
/// capacity matrix from its edges.
pub fn build<F: FlowValue>(
    network: &Network<F>,
) -> Result<(CapacityMatrix<F>, NodeIndex), FlowError> {
    let node_index = NodeIndex::new(network.nodes());
    let mut matrix = CapacityMatrix::new(node_index.len());
    for edge in network.edges() {
        let from = node_index.resolve(&edge.from)?;
        let to = node_index.resolve(&edge.to)?;
        matrix.set(from, to, edge.capacity);
    }
    Ok((matrix, node_index))
}
