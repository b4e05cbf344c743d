use crate::{BidSet, BidderId, Supply};
use tracing::{Level, event};

/// An exhaustive oracle for cross-checking the clearing engine.
///
/// It enumerates every way of choosing one bundle per bidder, without any
/// memoization, so its cost grows exponentially with the number of bidders.
/// Only use it on auctions that pass [`BruteForce::eligible`].
#[derive(Debug, Clone, Copy)]
pub struct BruteForce {
    threshold: usize,
}

impl Default for BruteForce {
    fn default() -> Self {
        Self { threshold: 8 }
    }
}

impl BruteForce {
    /// Create an oracle accepting auctions with fewer than `threshold` bidders
    /// and fewer than `threshold` bundles per bid
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Whether the auction is small enough to enumerate
    pub fn eligible(&self, bids: &BidSet) -> bool {
        (bids.bidders() as usize) < self.threshold && bids.max_bundles() < self.threshold
    }

    /// The best total price over all feasible combinations, or `None` if there is none
    pub fn optimum(&self, bids: &BidSet, supply: Supply) -> Option<u64> {
        enumerate(bids, bids.bidders(), supply)
    }

    /// Whether exhaustive enumeration agrees with the `value` reported by a solver
    pub fn verify(&self, bids: &BidSet, supply: Supply, value: Option<u64>) -> bool {
        let optimum = self.optimum(bids, supply);
        let confirmed = optimum == value;
        if confirmed {
            event!(Level::DEBUG, ?optimum, "brute force confirmed");
        } else {
            event!(Level::ERROR, ?optimum, ?value, "brute force disagrees");
        }
        confirmed
    }
}

fn enumerate(bids: &BidSet, t: u32, rest: Supply) -> Option<u64> {
    if t == 0 {
        return Some(0);
    }
    bids.bundles(BidderId(t))
        .iter()
        .filter_map(|bundle| {
            let next = bundle.take_from(rest)?;
            Some(enumerate(bids, t - 1, next)? + bundle.price)
        })
        .max()
}
