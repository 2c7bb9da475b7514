use crate::call_context::CallContext;
use crate::graph::augmenting_path::{augmenting_path, residual_reachable};
use crate::graph::capacity_matrix::CapacityMatrix;
use crate::types::{Capacity, FlowValue};
use crate::FlowError;

/// Net flow between every ordered pair of nodes.
///
/// Always skew-symmetric: `get(i, j) == -get(j, i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowMatrix<F> {
    rows: Vec<Vec<F>>,
}

impl<F: FlowValue> FlowMatrix<F> {
    pub fn new(node_count: usize) -> Self {
        FlowMatrix {
            rows: vec![vec![F::zero(); node_count]; node_count],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> F {
        self.rows[from][to]
    }

    /// Pushes `amount` units from `from` to `to`. The matrix is left
    /// unchanged if either entry would overflow.
    pub fn push(&mut self, from: usize, to: usize, amount: F) -> Result<(), FlowError> {
        let forward = self.rows[from][to].checked_add(&amount);
        let backward = self.rows[to][from].checked_sub(&amount);
        match (forward, backward) {
            (Some(forward), Some(backward)) => {
                self.rows[from][to] = forward;
                self.rows[to][from] = backward;
                Ok(())
            }
            _ => Err(FlowError::Overflow),
        }
    }

    /// Flow leaving `node` minus flow entering it.
    pub fn net_outflow(&self, node: usize) -> F {
        self.rows[node]
            .iter()
            .fold(F::zero(), |total, f| total + *f)
    }

    pub fn is_skew_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (0..n).all(|j| self.rows[i][j] == F::zero() - self.rows[j][i]))
    }
}

/// Result of a max-flow computation.
#[derive(Debug, Clone)]
pub struct MaxFlow<F> {
    pub value: F,
    pub flow: FlowMatrix<F>,
    /// Number of augmenting paths used.
    pub augmentations: usize,
    /// Nodes still reachable from the source in the final residual graph;
    /// this is the source side of a minimum cut.
    pub source_side: Vec<bool>,
}

impl<F: FlowValue> MaxFlow<F> {
    /// Edges crossing from the source side to the sink side of the minimum cut.
    pub fn min_cut_edges(&self, capacity: &CapacityMatrix<F>) -> Vec<(usize, usize)> {
        let side = &self.source_side;
        (0..side.len())
            .filter(|i| side[*i])
            .flat_map(|i| {
                (0..side.len())
                    .filter(move |j| !side[*j])
                    .map(move |j| (i, j))
            })
            .filter(|(i, j)| capacity.get(*i, *j).is_positive())
            .collect()
    }
}

/// Computes a maximum flow from `source` to `sink` using Edmonds-Karp.
pub fn compute_flow<F: FlowValue>(
    capacity: &CapacityMatrix<F>,
    source: usize,
    sink: usize,
    call_context: &CallContext,
) -> Result<MaxFlow<F>, FlowError> {
    compute_flow_observed(capacity, source, sink, call_context, |_| {})
}

/// Same as `compute_flow`, but calls `observe` with the flow matrix after
/// every augmentation.
pub fn compute_flow_observed<F, O>(
    capacity: &CapacityMatrix<F>,
    source: usize,
    sink: usize,
    call_context: &CallContext,
    mut observe: O,
) -> Result<MaxFlow<F>, FlowError>
where
    F: FlowValue,
    O: FnMut(&FlowMatrix<F>),
{
    let node_count = capacity.len();
    if source >= node_count || sink >= node_count || source == sink {
        return Err(FlowError::InvalidEndpoints {
            source_index: source,
            sink_index: sink,
            node_count,
        });
    }

    let mut flow = FlowMatrix::new(node_count);
    let mut value = F::zero();
    let mut augmentations = 0;
    while let Some((bottleneck, parents)) = augmenting_path(capacity, &flow, source, sink)? {
        let new_flow = match bottleneck {
            Capacity::Finite(f) => f,
            Capacity::Unbounded => return Err(FlowError::UnboundedFlow),
        };
        for window in parents.windows(2) {
            if let [node, prev] = window {
                flow.push(*prev, *node, new_flow)?;
            }
        }
        value = value.checked_add(&new_flow).ok_or(FlowError::Overflow)?;
        augmentations += 1;
        observe(&flow);
    }

    call_context.log_message(
        format!("Max flow: {value:?} after {augmentations} augmenting paths").as_str(),
    );

    let source_side = residual_reachable(capacity, &flow, source)?;
    Ok(MaxFlow {
        value,
        flow,
        augmentations,
        source_side,
    })
}
