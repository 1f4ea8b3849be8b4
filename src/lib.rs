//! Loop Layout
//!
//! Layout engine for an infinitely looping horizontal carousel.
//!
//! This is the library root. The pure core lives in `geometry` and `layout`;
//! `config`, `logging` and `simulation` form the impure shell used by the
//! `looplayout` binary.

pub mod config;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod simulation;

pub use layout::{LoopLayout, PassOutcome, ViewportContext};

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
