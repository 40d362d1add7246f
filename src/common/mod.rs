//! Common, shared types.

pub mod error;
pub mod geometry;
pub mod rng;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
