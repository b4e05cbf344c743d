mod bundle;
pub use bundle::*;

mod bidset;
pub use bidset::*;

mod outcome;
pub use outcome::*;

/// The Solver trait defines the interface for auction-clearing engines.
///
/// A Solver takes the bids of every bidder together with the available supply
/// of each resource, and computes the revenue-maximizing choice of exactly one
/// bundle per bidder.
///
/// Implementations may evaluate the underlying recurrence in different orders,
/// but must agree on the optimal value.
pub trait Solver {
    /// Clear the auction for the given bids and supply
    ///
    /// # Parameters
    /// * `bids` - The validated bids of every bidder
    /// * `supply` - The available quantity of each resource
    ///
    /// # Returns
    /// * `Solution` - The outcome (an allocation or infeasibility) along with performance counters
    /// * `ClearingFault` - Only if the engine's internal bookkeeping is inconsistent
    fn solve(&self, bids: &BidSet, supply: Supply) -> Result<Solution, ClearingFault>;
}

/// The value of leaving the remaining supply unallocated.
///
/// Under free disposal unsold inventory carries neither a penalty nor a bonus.
pub fn disposal(_supply: Supply) -> u64 {
    0
}
