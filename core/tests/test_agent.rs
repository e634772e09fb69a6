//! Tests for the piecewise-constant valuation oracle
//!
//! Agents answer exactly two kinds of queries: eval (value of a range) and
//! mark (where a range of a desired value ends). Everything the mechanisms
//! learn about an agent goes through these two.

use cake_auction_core::{Agent, PiecewiseConstantAgent};

#[test]
fn test_cake_scalars() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    assert_eq!(agent.name(), "Alice");
    assert_eq!(agent.cake_length(), 3.0);
    assert_eq!(agent.cake_value(), 12.0);
}

#[test]
fn test_eval_whole_cake() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    assert_eq!(agent.eval(0.0, 3.0), 12.0);
}

#[test]
fn test_eval_fractional_range() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    // 2*0.5 + 8*1 + 2*0.5
    assert_eq!(agent.eval(0.5, 2.5), 10.0);
}

#[test]
fn test_eval_clamps_to_cake() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    assert_eq!(agent.eval(-5.0, 99.0), 12.0);
    assert_eq!(agent.eval(2.0, 99.0), 2.0);
}

#[test]
fn test_eval_empty_or_inverted_range() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    assert_eq!(agent.eval(1.0, 1.0), 0.0);
    assert_eq!(agent.eval(2.0, 1.0), 0.0);
}

#[test]
fn test_mark_lands_on_cell_boundary() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    // The first cell holds exactly 2, so the boundary itself is reported.
    assert_eq!(agent.mark(0.0, 2.0), Some(1.0));
}

#[test]
fn test_mark_interpolates_inside_cell() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    // 2 from the first cell, the remaining 4 from half of the second.
    assert_eq!(agent.mark(0.0, 6.0), Some(1.5));
}

#[test]
fn test_mark_from_fractional_start() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    // 1 left in the first cell, the remaining 4 from half of the second.
    assert_eq!(agent.mark(0.5, 5.0), Some(1.5));
}

#[test]
fn test_mark_skips_worthless_cells() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![0.0, 4.0]);

    assert_eq!(agent.mark(0.0, 2.0), Some(1.5));
}

#[test]
fn test_mark_unattainable_value() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    // Only 1 of value remains past 2.5.
    assert_eq!(agent.mark(2.5, 10.0), None);
}

#[test]
fn test_mark_past_cake_end() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);

    assert_eq!(agent.mark(3.0, 1.0), None);
}

#[test]
fn test_mark_then_eval_recovers_value() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![5.0, 5.0, 5.0]);

    for start in [0.0, 0.25, 1.0, 1.75] {
        for value in [1.25, 2.5, 5.0] {
            let end = agent.mark(start, value).unwrap();
            assert!(
                (agent.eval(start, end) - value).abs() < 1e-9,
                "eval({start}, {end}) should be {value}"
            );
        }
    }
}

#[test]
fn test_oracle_works_through_references() {
    let agent = PiecewiseConstantAgent::new("Alice".to_string(), vec![2.0, 8.0, 2.0]);
    let by_ref: &dyn Agent = &agent;

    assert_eq!(by_ref.eval(0.0, 3.0), 12.0);
    assert_eq!(by_ref.mark(0.0, 2.0), Some(1.0));
}

#[test]
#[should_panic(expected = "at least one cell")]
fn test_empty_values_panic() {
    let _ = PiecewiseConstantAgent::new("Alice".to_string(), Vec::new());
}

#[test]
#[should_panic(expected = "finite and nonnegative")]
fn test_negative_values_panic() {
    let _ = PiecewiseConstantAgent::new("Alice".to_string(), vec![1.0, -1.0]);
}
