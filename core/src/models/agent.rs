//! Agent (valuation oracle) model
//!
//! An agent is a participant in the auction with a private valuation over the
//! cake. The algorithms never see the valuation itself; they interact with it
//! only through the query interface defined by the [`Agent`] trait:
//! - range value queries (`eval`)
//! - boundary queries (`mark`)
//! - two scalars describing the whole cake (`cake_length`, `cake_value`)
//!
//! Keeping the oracle behind a trait is what makes the mechanisms truthful to
//! implement against: the number of queries each algorithm issues per agent is
//! bounded, and nothing else about the valuation leaks.
//!
//! [`PiecewiseConstantAgent`] is the reference oracle: a density that is
//! constant on each unit cell `[i, i+1)` of the cake. It is what the tests
//! and the bundled runner use, and the natural model for valuations given as
//! a list of per-slot values.

use serde::{Deserialize, Serialize};

/// Query interface exposed by an agent's private valuation.
///
/// Implementations must be deterministic: repeated calls with the same
/// arguments return the same answer. Values are nonnegative and additive over
/// disjoint ranges, so `eval(a, c) == eval(a, b) + eval(b, c)` whenever
/// `a <= b <= c`.
pub trait Agent {
    /// Display name of the agent.
    fn name(&self) -> &str;

    /// Length of the cake in the agent's native coordinate units. Must be
    /// strictly positive.
    ///
    /// Partitions built on the normalized `[0, 1]` domain are scaled by the
    /// largest `cake_length` among the participating agents before any
    /// evaluation happens.
    fn cake_length(&self) -> f64;

    /// Total value the agent assigns to the whole cake.
    fn cake_value(&self) -> f64;

    /// Value of the range `[start, end)`.
    ///
    /// Ranges reaching outside the cake clamp to it; an empty or reversed
    /// range is worth 0.
    fn eval(&self, start: f64, end: f64) -> f64;

    /// Smallest `position >= start` such that `[start, position)` is worth
    /// exactly `desired_value`.
    ///
    /// Returns `None` when no such position exists within the cake, which
    /// callers treat as "no further boundary", not as a failure.
    /// `desired_value` must be nonnegative.
    fn mark(&self, start: f64, desired_value: f64) -> Option<f64>;
}

/// Borrowed agents answer queries exactly like the agents they borrow.
///
/// This is what lets an algorithm hand a sub-slice of `&A` references on to
/// another algorithm without cloning the underlying oracles.
impl<A: Agent + ?Sized> Agent for &A {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn cake_length(&self) -> f64 {
        (**self).cake_length()
    }

    fn cake_value(&self) -> f64 {
        (**self).cake_value()
    }

    fn eval(&self, start: f64, end: f64) -> f64 {
        (**self).eval(start, end)
    }

    fn mark(&self, start: f64, desired_value: f64) -> Option<f64> {
        (**self).mark(start, desired_value)
    }
}

/// An agent whose valuation density is constant on each unit cell of the cake.
///
/// The cake spans `[0, n)` where `n` is the number of values supplied; cell
/// `i` covers `[i, i+1)` and is worth `values[i]` in total, spread uniformly.
///
/// # Example
/// ```
/// use cake_auction_core::{Agent, PiecewiseConstantAgent};
///
/// let alice = PiecewiseConstantAgent::new("Alice".to_string(), vec![11.0, 22.0, 33.0, 44.0]);
/// assert_eq!(alice.cake_length(), 4.0);
/// assert_eq!(alice.cake_value(), 110.0);
/// assert_eq!(alice.eval(1.0, 3.0), 55.0);
/// assert_eq!(alice.mark(1.0, 77.0), Some(3.5));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiecewiseConstantAgent {
    /// Display name (e.g., "Alice")
    name: String,

    /// Per-cell densities; cell `i` covers `[i, i+1)`
    values: Vec<f64>,
}

impl PiecewiseConstantAgent {
    /// Creates an agent from its per-cell values.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or contains a value that is negative or
    /// not finite.
    pub fn new(name: String, values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "agent must value at least one cell");
        assert!(
            values.iter().all(|v| v.is_finite() && *v >= 0.0),
            "cell values must be finite and nonnegative"
        );
        Self { name, values }
    }
}

impl Agent for PiecewiseConstantAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn cake_length(&self) -> f64 {
        self.values.len() as f64
    }

    fn cake_value(&self) -> f64 {
        self.values.iter().sum()
    }

    fn eval(&self, start: f64, end: f64) -> f64 {
        let length = self.cake_length();
        let start = start.clamp(0.0, length);
        let end = end.clamp(0.0, length);
        if end <= start {
            return 0.0;
        }

        let first = start.floor() as usize;
        let last = (end.ceil() as usize).min(self.values.len());
        let mut total = 0.0;
        for (i, density) in self.values.iter().enumerate().take(last).skip(first) {
            let cell_start = i as f64;
            let overlap = end.min(cell_start + 1.0) - start.max(cell_start);
            total += density * overlap;
        }
        total
    }

    fn mark(&self, start: f64, desired_value: f64) -> Option<f64> {
        assert!(desired_value >= 0.0, "desired value must be nonnegative");

        let position = start.max(0.0);
        if position >= self.cake_length() {
            return None;
        }

        // Leading cell, possibly entered part-way through. When the target is
        // met exactly at a cell boundary the boundary itself is reported,
        // keeping reported positions on the integer grid whenever possible.
        let cell = position.floor() as usize;
        let available = self.values[cell] * (cell as f64 + 1.0 - position);
        if available == desired_value {
            return Some(cell as f64 + 1.0);
        }
        if available > desired_value {
            return Some(position + desired_value / self.values[cell]);
        }

        let mut remaining = desired_value - available;
        for (i, density) in self.values.iter().enumerate().skip(cell + 1) {
            if *density == remaining {
                return Some(i as f64 + 1.0);
            }
            if *density > remaining {
                return Some(i as f64 + remaining / density);
            }
            remaining -= density;
        }
        None
    }
}
