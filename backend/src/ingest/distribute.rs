use common::model::agent::Agent;
use common::model::list::ListItem;

use crate::error::ApiError;

/// Splits `items` across `roster` round-robin: the item at index `i` goes to
/// the agent at roster index `i % M`.
///
/// Every agent receives an entry, empty if there are fewer items than agents,
/// and the output preserves roster order. The policy is deliberately this
/// simple: no weighting, no balancing against existing list sizes, and no
/// re-sorting of the roster, so assignment is a deterministic function of the
/// inputs.
pub fn distribute(
    items: Vec<ListItem>,
    roster: &[Agent],
) -> Result<Vec<(String, Vec<ListItem>)>, ApiError> {
    if roster.is_empty() {
        return Err(ApiError::EmptyRoster);
    }

    let mut groups: Vec<(String, Vec<ListItem>)> = roster
        .iter()
        .map(|agent| (agent.id.clone(), Vec::new()))
        .collect();

    for (i, item) in items.into_iter().enumerate() {
        groups[i % roster.len()].1.push(item);
    }

    Ok(groups)
}
