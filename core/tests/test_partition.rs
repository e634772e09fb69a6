//! Tests for tiling construction and power-of-two coarsening
//!
//! Partitions are pure data: the same arguments always produce the same
//! pieces, trailing fragments that do not fit are dropped, and coarsening
//! only ever merges complete runs.

use proptest::prelude::*;

use cake_auction_core::{coarsen_partition, create_partition, Piece};

fn unit_pieces(n: usize) -> Vec<Piece> {
    (0..n)
        .map(|i| Piece::new(i as f64, i as f64 + 1.0))
        .collect()
}

#[test]
fn test_quarters_tile_the_whole_cake() {
    let pieces = create_partition(0.25, 0.0);

    assert_eq!(pieces.len(), 4);
    assert_eq!(pieces[0], Piece::new(0.0, 0.25));
    assert_eq!(pieces[3], Piece::new(0.75, 1.0));
}

#[test]
fn test_trailing_fragment_is_dropped() {
    let pieces = create_partition(0.4, 0.0);

    // Two pieces fit; the remaining 0.2 is not offered to anyone.
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[1].end(), 0.8);
}

#[test]
fn test_offset_shifts_the_tiling() {
    let pieces = create_partition(0.5, 0.25);

    assert_eq!(pieces, vec![Piece::new(0.25, 0.75)]);
}

#[test]
fn test_no_room_after_offset_yields_no_pieces() {
    assert!(create_partition(0.5, 0.75).is_empty());
}

#[test]
fn test_tiling_is_contiguous() {
    let pieces = create_partition(0.125, 0.0);

    assert_eq!(pieces.len(), 8);
    for pair in pieces.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
}

#[test]
fn test_same_arguments_same_tiling() {
    assert_eq!(create_partition(0.3, 0.1), create_partition(0.3, 0.1));
}

#[test]
fn test_coarsen_level_zero_is_identity() {
    let pieces = unit_pieces(5);

    assert_eq!(coarsen_partition(&pieces, 0), pieces);
}

#[test]
fn test_coarsen_merges_runs() {
    let pieces = unit_pieces(4);
    let coarse = coarsen_partition(&pieces, 1);

    assert_eq!(coarse, vec![Piece::new(0.0, 2.0), Piece::new(2.0, 4.0)]);
}

#[test]
fn test_coarsen_drops_incomplete_run() {
    let pieces = unit_pieces(5);
    let coarse = coarsen_partition(&pieces, 2);

    // One run of four; the fifth piece has no complete run to join.
    assert_eq!(coarse, vec![Piece::new(0.0, 4.0)]);
}

#[test]
fn test_coarsen_beyond_length_yields_no_pieces() {
    assert!(coarsen_partition(&unit_pieces(3), 2).is_empty());
}

#[test]
#[should_panic]
fn test_zero_piece_size_panics() {
    let _ = create_partition(0.0, 0.0);
}

#[test]
#[should_panic]
fn test_offset_at_cake_end_panics() {
    let _ = create_partition(0.5, 1.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_tiling_is_contiguous_and_inside_the_cake(
        size in 0.01f64..=1.0,
        start in 0.0f64..0.99,
    ) {
        let pieces = create_partition(size, start);

        for pair in pieces.windows(2) {
            prop_assert_eq!(pair[0].end(), pair[1].start());
        }
        for piece in &pieces {
            prop_assert!(piece.end() <= 1.0);
            prop_assert!((piece.length() - size).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_tiling_stops_exactly_when_the_next_piece_overflows(
        size in 0.01f64..=1.0,
        start in 0.0f64..0.99,
    ) {
        let pieces = create_partition(size, start);

        match pieces.last() {
            Some(last) => prop_assert!(last.end() + size > 1.0),
            None => prop_assert!(start + size > 1.0),
        }
    }

    #[test]
    fn prop_coarsen_keeps_complete_runs_only(m in 1usize..200, t in 0u32..8) {
        let pieces = unit_pieces(m);
        let coarse = coarsen_partition(&pieces, t);
        let run = 1usize << t;

        prop_assert_eq!(coarse.len(), m / run);
        for (j, piece) in coarse.iter().enumerate() {
            prop_assert_eq!(piece.start(), (j * run) as f64);
            prop_assert_eq!(piece.end(), (j * run + run) as f64);
        }
    }
}
