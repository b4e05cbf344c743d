use crate::table::{Cell, Table};
use crate::{BidSet, BidderId, ClearingFault, Outcome, Solution, Solver, Stats, Supply, disposal};
use tracing::{Level, event};

/// Clears the auction by filling the whole table bottom-up, one bidder at a time.
///
/// Each layer `t` only reads layer `t - 1`, so no recursion is involved and the
/// evaluation order is explicit. Every cell is computed exactly once, including
/// those the memoized recursion would never reach.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularSolver;

impl Solver for TabularSolver {
    fn solve(&self, bids: &BidSet, supply: Supply) -> Result<Solution, ClearingFault> {
        let bidders = bids.bidders();
        event!(
            Level::DEBUG,
            bidders,
            n1 = supply.n1,
            n2 = supply.n2,
            "clearing by bottom-up fill"
        );

        let mut table = Table::new(bidders, supply);
        let mut stats = Stats {
            cells: table.len(),
            ..Default::default()
        };

        for t in 1..=bidders {
            let bundles = bids.bundles(BidderId(t));
            for n1 in 0..=supply.n1 {
                for n2 in 0..=supply.n2 {
                    let rest = Supply::new(n1, n2);
                    let cell = Cell::best(bundles, rest, |next| {
                        stats.calls += 1;
                        let next = next?;
                        if t == 1 {
                            Some(disposal(next))
                        } else {
                            stats.hits += 1;
                            table.get(t - 1, next).value()
                        }
                    });
                    table.set(t, rest, cell);
                    stats.entries += 1;
                }
            }
        }

        let top = if bidders == 0 {
            Some(disposal(supply))
        } else {
            table.get(bidders, supply).value()
        };
        let outcome = match top {
            Some(value) => Outcome::Cleared(table.backtrack(bids, value)?),
            None => Outcome::Infeasible,
        };

        event!(
            Level::DEBUG,
            calls = stats.calls,
            entries = stats.entries,
            hits = stats.hits,
            "bottom-up fill finished"
        );

        Ok(Solution {
            supply,
            outcome,
            stats,
        })
    }
}
