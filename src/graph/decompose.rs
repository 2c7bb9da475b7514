use crate::graph::capacity_matrix::NodeIndex;
use crate::graph::flow::FlowMatrix;
use crate::types::FlowValue;
use crate::FlowError;
use std::cmp::min;

/// Flow attributed to an entry node reaching an exit node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribution<F> {
    pub entry: String,
    pub exit: String,
    pub amount: F,
}

/// Attributes the flow to (entry, exit) pairs for reporting.
///
/// For each pair the amount is the sum, over all intermediate nodes `w`
/// with positive flow on both `entry -> w` and `w -> exit`, of the smaller
/// of the two flows. Pairs with nothing attributed are left out. The
/// result is ordered by entry, then by exit, as passed in.
///
/// This is a best-effort estimate, not an exact path decomposition: when
/// several entries or exits share an intermediate node the same units can
/// be counted for more than one pair, or not at all, so the amounts need
/// not add up to the max flow.
pub fn decompose<F: FlowValue, S: AsRef<str>>(
    flow: &FlowMatrix<F>,
    node_index: &NodeIndex,
    entries: &[S],
    intermediates: &[S],
    exits: &[S],
) -> Result<Vec<Attribution<F>>, FlowError> {
    let entries = resolve_all(flow, node_index, entries)?;
    let intermediates = resolve_all(flow, node_index, intermediates)?;
    let exits = resolve_all(flow, node_index, exits)?;

    let mut attributions = Vec::new();
    for (entry, e) in &entries {
        for (exit, x) in &exits {
            let amount = intermediates
                .iter()
                .map(|(_, w)| (flow.get(*e, *w), flow.get(*w, *x)))
                .filter(|(inbound, outbound)| *inbound > F::zero() && *outbound > F::zero())
                .try_fold(F::zero(), |total, (inbound, outbound)| {
                    total.checked_add(&min(inbound, outbound))
                })
                .ok_or(FlowError::Overflow)?;
            if amount > F::zero() {
                attributions.push(Attribution {
                    entry: entry.to_string(),
                    exit: exit.to_string(),
                    amount,
                });
            }
        }
    }
    Ok(attributions)
}

fn resolve_all<'a, F: FlowValue, S: AsRef<str>>(
    flow: &FlowMatrix<F>,
    node_index: &NodeIndex,
    names: &'a [S],
) -> Result<Vec<(&'a str, usize)>, FlowError> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            match node_index.resolve(name)? {
                i if i < flow.len() => Ok((name, i)),
                _ => Err(FlowError::UnresolvedNode(name.to_string())),
            }
        })
        .collect()
}
