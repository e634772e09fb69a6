//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. All randomness in the auction algorithms goes through an
//! explicitly passed [`RngManager`]; nothing draws from process-wide state.

mod xorshift;

pub use xorshift::RngManager;
