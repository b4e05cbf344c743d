use crate::{Allocation, Award, BidSet, BidderId, Bundle, ClearingFault, Supply};
use tracing::{Level, event};

/// A memoized state of the recurrence.
///
/// Keeping "not yet computed" and "infeasible" as distinct variants means
/// neither can ever be mistaken for the other, or for a legitimate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
    Unknown,
    Infeasible,
    Value { value: u64, choice: usize },
}

impl Cell {
    /// Evaluate one step of the recurrence for a bidder with the given bundles.
    ///
    /// `lookup` receives the supply that would remain after granting a bundle
    /// (`None` if the bundle over-consumes) and returns the best feasible value
    /// for the preceding bidders, if any. Ties keep the earliest bundle.
    pub(crate) fn best(
        bundles: &[Bundle],
        supply: Supply,
        mut lookup: impl FnMut(Option<Supply>) -> Option<u64>,
    ) -> Self {
        let mut best = Self::Infeasible;
        for (choice, bundle) in bundles.iter().enumerate() {
            let Some(value) = lookup(bundle.take_from(supply)) else {
                continue;
            };
            let value = value + bundle.price;
            match best {
                Self::Value { value: max, .. } if max >= value => {}
                _ => best = Self::Value { value, choice },
            }
        }
        best
    }

    /// The feasible value held by this cell, if any
    pub(crate) fn value(&self) -> Option<u64> {
        match self {
            Self::Value { value, .. } => Some(*value),
            Self::Unknown | Self::Infeasible => None,
        }
    }
}

/// Dense storage for every state `(t, n1, n2)` with `1 ≤ t ≤ T`, `n1 ≤ N1` and `n2 ≤ N2`.
///
/// The table is sized to a single run and starts out entirely `Unknown`.
pub(crate) struct Table {
    bidders: u32,
    supply: Supply,
    cells: Vec<Cell>,
}

impl Table {
    pub(crate) fn new(bidders: u32, supply: Supply) -> Self {
        let len = bidders as usize * (supply.n1 as usize + 1) * (supply.n2 as usize + 1);
        Self {
            bidders,
            supply,
            cells: vec![Cell::Unknown; len],
        }
    }

    pub(crate) fn len(&self) -> u64 {
        self.cells.len() as u64
    }

    fn index(&self, t: u32, rest: Supply) -> usize {
        debug_assert!(1 <= t && t <= self.bidders);
        debug_assert!(rest.n1 <= self.supply.n1 && rest.n2 <= self.supply.n2);
        let stride = self.supply.n2 as usize + 1;
        ((t as usize - 1) * (self.supply.n1 as usize + 1) + rest.n1 as usize) * stride
            + rest.n2 as usize
    }

    pub(crate) fn get(&self, t: u32, rest: Supply) -> Cell {
        self.cells[self.index(t, rest)]
    }

    pub(crate) fn set(&mut self, t: u32, rest: Supply, cell: Cell) {
        let index = self.index(t, rest);
        debug_assert_eq!(self.cells[index], Cell::Unknown);
        self.cells[index] = cell;
    }

    /// Replay the memoized choices from `(T, N1, N2)` down to the first bidder.
    ///
    /// The resulting totals must reconcile exactly with `value` and the supply.
    pub(crate) fn backtrack(&self, bids: &BidSet, value: u64) -> Result<Allocation, ClearingFault> {
        let mut rest = self.supply;
        let mut awards = Vec::with_capacity(self.bidders as usize);

        for t in (1..=self.bidders).rev() {
            let bidder = BidderId(t);
            let missing = ClearingFault::MissingChoice {
                bidder,
                n1: rest.n1,
                n2: rest.n2,
            };
            let Cell::Value { choice, .. } = self.get(t, rest) else {
                return Err(missing);
            };
            let Some(&bundle) = bids.bundles(bidder).get(choice) else {
                return Err(missing);
            };
            awards.push(Award {
                bidder,
                index: choice,
                bundle,
            });
            match bundle.take_from(rest) {
                Some(next) => rest = next,
                None => break,
            }
        }
        awards.reverse();

        let allocation = Allocation { value, awards };
        let (q1, q2, price) = allocation.totals();
        let reconciles = allocation.awards.len() == self.bidders as usize
            && price == value
            && q1 <= self.supply.n1 as u64
            && q2 <= self.supply.n2 as u64;
        if !reconciles {
            event!(Level::ERROR, q1, q2, price, value, "allocation does not reconcile");
            return Err(ClearingFault::Reconciliation {
                q1,
                q2,
                price,
                value,
                n1: self.supply.n1,
                n2: self.supply.n2,
            });
        }

        Ok(allocation)
    }
}
