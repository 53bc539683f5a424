//! Round-robin roster generation.
//!
//! Produces a full period of weekly slots from two independently sized
//! rotation pools, applies the manual override table, and annotates each
//! week with its holidays.
//!
//! # Algorithm
//!
//! `RotationGenerator` walks Monday-start weeks between the period bounds
//! and picks `pool[index mod len]` for each role. It is deterministic and
//! side-effect free.

mod generator;
mod pool;

pub use generator::{generate, RotationGenerator};
pub use pool::RotationPool;
