//! Domain models for the cake auction

pub mod agent;
pub mod allocation;
pub mod piece;

// Re-exports
pub use agent::{Agent, PiecewiseConstantAgent};
pub use allocation::{Allocation, AllocationEntry};
pub use piece::Piece;
