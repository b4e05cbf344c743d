use super::{BidderId, Bundle, Supply};
use thiserror::Error;

/// The bundle won by a single bidder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Award {
    /// The winning bidder
    pub bidder: BidderId,
    /// The position of the winning bundle within the bidder's bid
    pub index: usize,
    /// The winning bundle itself
    pub bundle: Bundle,
}

/// One winning bundle per bidder, together with the revenue they produce.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// The optimal revenue
    pub value: u64,
    /// The awards, in ascending bidder order (null bundles included)
    pub awards: Vec<Award>,
}

impl Allocation {
    /// The total allocated units of each resource and the total price paid
    pub fn totals(&self) -> (u64, u64, u64) {
        self.awards.iter().fold((0, 0, 0), |(q1, q2, price), award| {
            (
                q1 + award.bundle.q1 as u64,
                q2 + award.bundle.q2 as u64,
                price + award.bundle.price,
            )
        })
    }

    /// The awards of bidders that won something other than the null bundle
    pub fn winners(&self) -> impl Iterator<Item = &Award> {
        self.awards.iter().filter(|award| !award.bundle.is_null())
    }
}

/// The result of clearing an auction.
///
/// Infeasibility is a legitimate outcome: it arises when some bidder has no
/// bundle compatible with the supply (e.g. their bid omits the null bundle).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// An optimal allocation was found
    Cleared(Allocation),
    /// No choice of one bundle per bidder fits within the supply
    Infeasible,
}

impl Outcome {
    /// The optimal revenue, if the auction is feasible
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::Cleared(allocation) => Some(allocation.value),
            Self::Infeasible => None,
        }
    }
}

/// Performance counters for a single clearing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Evaluations of the recurrence, including base cases
    pub calls: u64,
    /// Distinct states computed and stored in the table
    pub entries: u64,
    /// Evaluations answered from the table
    pub hits: u64,
    /// The total number of cells in the table
    pub cells: u64,
}

impl Stats {
    /// The share of the table that was filled, in percent
    pub fn entries_pct(&self) -> f64 {
        percent(self.entries, self.cells)
    }

    /// The share of evaluations answered from the table, in percent
    pub fn hits_pct(&self) -> f64 {
        percent(self.hits, self.calls)
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

/// Everything a solver reports about one run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The supply the auction was cleared against
    pub supply: Supply,
    /// The allocation, or infeasibility
    pub outcome: Outcome,
    /// Performance counters
    pub stats: Stats,
}

/// Inconsistencies between the forward pass and backtracking.
///
/// These indicate a defect in the engine, never a problem with the input.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ClearingFault {
    /// Backtracking reached a state that was never assigned a winning bundle
    #[error("no winning bundle recorded for bidder {bidder} with supply ({n1}, {n2})")]
    MissingChoice {
        /// The bidder being backtracked
        bidder: BidderId,
        /// Remaining units of resource 1
        n1: u32,
        /// Remaining units of resource 2
        n2: u32,
    },
    /// The reconstructed allocation disagrees with the optimal value or exceeds supply
    #[error(
        "allocation totals (resource1 {q1}, resource2 {q2}, value {price}) do not reconcile with optimum {value} and supply ({n1}, {n2})"
    )]
    Reconciliation {
        /// Allocated units of resource 1
        q1: u64,
        /// Allocated units of resource 2
        q2: u64,
        /// Total price of the allocation
        price: u64,
        /// The optimal value from the forward pass
        value: u64,
        /// Supply of resource 1
        n1: u32,
        /// Supply of resource 2
        n2: u32,
    },
}
