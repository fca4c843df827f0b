//! # basket-ranking
//!
//! Greedy diversity ranking: a base quota of slots is open to any
//! candidate, after which same-category repeats must clear a score floor.
//! Unfilled slots are backfilled in score order.

pub mod diversity;

pub use diversity::DiversityRanker;
