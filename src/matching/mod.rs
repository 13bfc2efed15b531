//! Script/film cross-reference engine.
//!
//! This module provides the core matching functionality:
//!
//! - [`CrossrefEngine`]: Main entry point, borrows the two indexes
//! - [`CrossrefReport`]: Matches, disjoint sets, and summary statistics
//!
//! ## Matching Algorithm
//!
//! Matching is exact on normalized keys, one linear pass per side:
//!
//! 1. every script key found in the film index yields a
//!    [`MatchRecord`](crate::core::types::MatchRecord); the rest go to
//!    `unmatched_scripts`;
//! 2. every film key absent from the script index goes to
//!    `unmatched_films`.
//!
//! No fuzzy fallback, no ranking: a key either matches or it does not.

pub mod engine;

pub use engine::{CrossrefEngine, CrossrefReport};
