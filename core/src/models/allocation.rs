//! Allocation result model
//!
//! The allocation is the one value that outlives an auction run: it records
//! which agents were chosen, which pieces each of them received, and what the
//! received pieces are worth to their recipient. It owns all of its data
//! (names, pieces, realized values) so it can be stored, printed, or
//! serialized without keeping the agents alive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Agent, Piece};

/// One chosen agent's share of the cake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Display name of the receiving agent
    agent: String,

    /// Pieces awarded to the agent, in cake order
    pieces: Vec<Piece>,

    /// Value of `pieces` under the recipient's own valuation
    value: f64,
}

impl AllocationEntry {
    /// Name of the receiving agent.
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// Pieces awarded to the agent.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Realized value of the awarded pieces.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Outcome of a single auction run: the chosen agents and their pieces.
///
/// Agents that were not matched to any piece do not appear at all; an
/// allocation with no entries is a valid outcome (nobody valued anything).
///
/// # Example
/// ```
/// use cake_auction_core::{Allocation, Piece, PiecewiseConstantAgent};
///
/// let alice = PiecewiseConstantAgent::new("Alice".to_string(), vec![100.0, 1.0]);
/// let mut allocation = Allocation::new(vec!["Alice".to_string()]);
/// allocation.set_piece(0, vec![Piece::new(0.0, 1.0)], &alice);
///
/// assert_eq!(allocation.total_value(), 100.0);
/// assert_eq!(allocation.to_string(), "> Alice gets [(0, 1)] with value 100.00\n");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    entries: Vec<AllocationEntry>,
}

impl Allocation {
    /// Creates an allocation over an ordered sequence of chosen agents, each
    /// starting with no pieces.
    pub fn new(chosen_agents: Vec<String>) -> Self {
        let entries = chosen_agents
            .into_iter()
            .map(|agent| AllocationEntry {
                agent,
                pieces: Vec::new(),
                value: 0.0,
            })
            .collect();
        Self { entries }
    }

    /// The allocation in which no agent receives anything.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Assigns `pieces` to the chosen agent at `agent_index`, recording their
    /// value under the recipient's own valuation.
    ///
    /// # Panics
    ///
    /// Panics if `agent_index` is out of bounds.
    pub fn set_piece<A: Agent>(&mut self, agent_index: usize, pieces: Vec<Piece>, agent: &A) {
        assert!(
            agent_index < self.entries.len(),
            "agent index {agent_index} outside allocation of {} agents",
            self.entries.len()
        );
        let value = pieces.iter().map(|p| agent.eval(p.start(), p.end())).sum();
        let entry = &mut self.entries[agent_index];
        entry.pieces = pieces;
        entry.value = value;
    }

    /// Entries in chosen-agent order.
    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    /// Number of chosen agents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no agent was chosen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total realized welfare across all entries.
    pub fn total_value(&self) -> f64 {
        self.entries.iter().map(AllocationEntry::value).sum()
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "(empty allocation)");
        }
        for entry in &self.entries {
            let pieces = entry
                .pieces
                .iter()
                .map(Piece::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "> {} gets [{}] with value {:.2}",
                entry.agent, pieces, entry.value
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PiecewiseConstantAgent;

    #[test]
    fn test_new_allocation_has_empty_entries() {
        let allocation = Allocation::new(vec!["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(allocation.len(), 2);
        assert_eq!(allocation.entries()[0].agent(), "Alice");
        assert!(allocation.entries()[0].pieces().is_empty());
        assert_eq!(allocation.total_value(), 0.0);
    }

    #[test]
    fn test_set_piece_records_realized_value() {
        let bob = PiecewiseConstantAgent::new("Bob".to_string(), vec![2.0, 90.0]);
        let mut allocation = Allocation::new(vec!["Bob".to_string()]);
        allocation.set_piece(0, vec![Piece::new(1.0, 2.0)], &bob);

        assert_eq!(allocation.entries()[0].pieces(), &[Piece::new(1.0, 2.0)]);
        assert_eq!(allocation.entries()[0].value(), 90.0);
        assert_eq!(allocation.total_value(), 90.0);
    }

    #[test]
    fn test_set_piece_replaces_previous_assignment() {
        let bob = PiecewiseConstantAgent::new("Bob".to_string(), vec![2.0, 90.0]);
        let mut allocation = Allocation::new(vec!["Bob".to_string()]);
        allocation.set_piece(0, vec![Piece::new(0.0, 1.0)], &bob);
        allocation.set_piece(0, vec![Piece::new(1.0, 2.0)], &bob);

        assert_eq!(allocation.entries()[0].pieces().len(), 1);
        assert_eq!(allocation.entries()[0].value(), 90.0);
    }

    #[test]
    #[should_panic(expected = "outside allocation")]
    fn test_set_piece_rejects_bad_index() {
        let bob = PiecewiseConstantAgent::new("Bob".to_string(), vec![1.0]);
        let mut allocation = Allocation::new(vec!["Bob".to_string()]);
        allocation.set_piece(1, vec![Piece::new(0.0, 1.0)], &bob);
    }

    #[test]
    fn test_empty_allocation_display() {
        assert_eq!(Allocation::empty().to_string(), "(empty allocation)\n");
    }

    #[test]
    fn test_display_lists_each_entry() {
        let alice = PiecewiseConstantAgent::new("Alice".to_string(), vec![1.0, 1.0, 1.0]);
        let mut allocation = Allocation::new(vec!["Alice".to_string()]);
        allocation.set_piece(0, vec![Piece::new(0.0, 1.0), Piece::new(2.0, 3.0)], &alice);

        assert_eq!(
            allocation.to_string(),
            "> Alice gets [(0, 1), (2, 3)] with value 2.00\n"
        );
    }
}
