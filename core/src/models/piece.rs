//! Piece model
//!
//! A piece is a half-open interval `[start, end)` of the cake, the divisible
//! resource being auctioned. Pieces are plain values: the algorithms create
//! them in large numbers per invocation and discard them with the invocation,
//! so they are `Copy` and carry no identity beyond their endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` of the cake.
///
/// Invariant: `start < end`. Zero-length and reversed intervals are
/// construction errors, enforced by [`Piece::new`].
///
/// # Example
/// ```
/// use cake_auction_core::Piece;
///
/// let piece = Piece::new(0.0, 1.5);
/// assert_eq!(piece.start(), 0.0);
/// assert_eq!(piece.end(), 1.5);
/// assert_eq!(piece.length(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Left endpoint, inclusive
    start: f64,

    /// Right endpoint, exclusive
    end: f64,
}

impl Piece {
    /// Creates a piece spanning `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the endpoints are not finite or `start >= end`.
    pub fn new(start: f64, end: f64) -> Self {
        assert!(
            start.is_finite() && end.is_finite(),
            "piece endpoints must be finite"
        );
        assert!(
            start < end,
            "piece start must be strictly below its end (got [{start}, {end}))"
        );
        Self { start, end }
    }

    /// Left endpoint (inclusive).
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Right endpoint (exclusive).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length of the interval.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns this piece with both endpoints multiplied by `factor`.
    ///
    /// Used to map a piece laid out on the normalized `[0, 1]` domain onto
    /// the cake's native coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is not strictly positive.
    ///
    /// # Example
    /// ```
    /// use cake_auction_core::Piece;
    ///
    /// let unit = Piece::new(0.5, 1.0);
    /// assert_eq!(unit.scaled(2.0), Piece::new(1.0, 2.0));
    /// ```
    pub fn scaled(&self, factor: f64) -> Self {
        assert!(
            factor.is_finite() && factor > 0.0,
            "scale factor must be finite and positive"
        );
        Self::new(self.start * factor, self.end * factor)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_accessors() {
        let piece = Piece::new(0.25, 0.75);
        assert_eq!(piece.start(), 0.25);
        assert_eq!(piece.end(), 0.75);
        assert_eq!(piece.length(), 0.5);
    }

    #[test]
    #[should_panic(expected = "strictly below")]
    fn test_piece_rejects_empty_interval() {
        Piece::new(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "strictly below")]
    fn test_piece_rejects_reversed_interval() {
        Piece::new(2.0, 1.0);
    }

    #[test]
    fn test_piece_scaling() {
        let piece = Piece::new(0.4, 1.0);
        let scaled = piece.scaled(5.0);
        assert_eq!(scaled.start(), 2.0);
        assert_eq!(scaled.end(), 5.0);
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::new(0.0, 1.0).to_string(), "(0, 1)");
        assert_eq!(Piece::new(0.5, 2.0).to_string(), "(0.5, 2)");
    }
}
