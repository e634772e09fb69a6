//! Partition construction
//!
//! Builds the piece sequences the auction algorithms match agents against.
//! Two operations cover every partition any algorithm needs:
//!
//! 1. `create_partition` - tile the normalized `[0, 1]` domain with pieces of
//!    one fixed size, starting at an arbitrary offset
//! 2. `coarsen_partition` - merge consecutive runs of `2^t` pieces of an
//!    existing partition into single larger pieces
//!
//! ```text
//! create_partition(0.4, 0.0):   |----|----|  ....     pieces (0,0.4) (0.4,0.8)
//! create_partition(0.4, 0.2):   ..|----|----|..       pieces (0.2,0.6) (0.6,1.0)
//! coarsen_partition(p, 1):      |----|----| → |---------|
//! ```
//!
//! # Critical Invariants
//!
//! - Pieces within one partition are disjoint and contiguous
//! - A trailing fragment shorter than the requested size is dropped, never
//!   emitted as a shorter final piece; partitions need not cover the domain
//! - Both operations are pure: same arguments, same output

use crate::models::Piece;

/// Tiles the normalized `[0, 1]` domain with consecutive pieces of exact
/// length `size`, the first one starting at `start`.
///
/// Tiling stops before a piece would cross 1; whatever remains of the domain
/// after the last full piece is left uncovered. The welfare an agent places
/// on that remainder is part of the approximation loss the algorithms already
/// account for.
///
/// # Arguments
///
/// * `size` - Piece length, in `(0, 1]`
/// * `start` - Offset of the first piece, in `[0, 1)`
///
/// # Panics
///
/// Panics if `size` is outside `(0, 1]` or `start` is outside `[0, 1)`.
///
/// # Example
/// ```
/// use cake_auction_core::partition::create_partition;
/// use cake_auction_core::Piece;
///
/// let tiling = create_partition(0.5, 0.0);
/// assert_eq!(tiling, vec![Piece::new(0.0, 0.5), Piece::new(0.5, 1.0)]);
/// ```
pub fn create_partition(size: f64, start: f64) -> Vec<Piece> {
    assert!(
        size > 0.0 && size <= 1.0,
        "piece size must be in (0, 1], got {size}"
    );
    assert!(
        (0.0..1.0).contains(&start),
        "tiling offset must be in [0, 1), got {start}"
    );

    let mut pieces = Vec::new();
    let mut piece_start = start;
    let mut piece_end = piece_start + size;
    while piece_end <= 1.0 {
        pieces.push(Piece::new(piece_start, piece_end));
        piece_start = piece_end;
        piece_end = piece_start + size;
    }
    pieces
}

/// Merges consecutive runs of `2^t` pieces into one piece each, spanning from
/// the start of the run's first piece to the end of its last.
///
/// An incomplete trailing run (fewer than `2^t` pieces) is dropped, so the
/// result holds exactly `floor(len / 2^t)` pieces. `t = 0` copies the
/// partition unchanged.
///
/// # Example
/// ```
/// use cake_auction_core::partition::{coarsen_partition, create_partition};
/// use cake_auction_core::Piece;
///
/// let fine = create_partition(0.25, 0.0);
/// let coarse = coarsen_partition(&fine, 1);
/// assert_eq!(coarse, vec![Piece::new(0.0, 0.5), Piece::new(0.5, 1.0)]);
/// ```
pub fn coarsen_partition(partition: &[Piece], t: u32) -> Vec<Piece> {
    assert!(t < usize::BITS, "coarsening level {t} overflows a usize");

    let run = 1usize << t;
    partition
        .chunks_exact(run)
        .map(|pieces| Piece::new(pieces[0].start(), pieces[run - 1].end()))
        .collect()
}
