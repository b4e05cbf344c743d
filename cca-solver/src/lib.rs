#![warn(missing_docs)]
//! A solver for two-resource combinatorial auctions.
//!
//! Every bidder submits a bid made of mutually exclusive bundles, each asking
//! for some quantity of two scarce resources at an offer price. Clearing the
//! auction picks exactly one bundle per bidder (possibly the null bundle) so
//! that total revenue is maximal without exceeding the available supply.
//!
//! The problem is solved exactly by dynamic programming over the states
//! `(bidder, remaining resource 1, remaining resource 2)`. Two evaluation
//! orders are provided behind the [`Solver`] trait, and [`BruteForce`]
//! offers an exhaustive oracle for cross-checking small instances.

/**
 * These are implementations of the clearing engine.
 */
mod impls;
pub use impls::*;

/**
 * These are the core data types the implementations operate on.
 */
mod types;
pub use types::*;

mod table;

mod brute;
pub use brute::BruteForce;

/// Reading and writing the line-oriented bid file format
pub mod io;

/// Synthesizing random bid files for testing
pub mod generate;
