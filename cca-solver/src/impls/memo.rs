use crate::table::{Cell, Table};
use crate::{BidSet, BidderId, ClearingFault, Outcome, Solution, Solver, Stats, Supply, disposal};
use tracing::{Level, event};

/// Clears the auction by recursing from the last bidder down to the first,
/// memoizing every state it visits.
///
/// Only states reachable from `(T, N1, N2)` are ever computed, which is often a
/// small fraction of the table. Recursion depth is bounded by the bidder count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoSolver;

impl Solver for MemoSolver {
    fn solve(&self, bids: &BidSet, supply: Supply) -> Result<Solution, ClearingFault> {
        event!(
            Level::DEBUG,
            bidders = bids.bidders(),
            n1 = supply.n1,
            n2 = supply.n2,
            "clearing by memoized recursion"
        );

        // Every run gets its own, freshly initialized table
        let mut run = Run {
            bids,
            table: Table::new(bids.bidders(), supply),
            stats: Stats::default(),
        };
        run.stats.cells = run.table.len();

        let outcome = match run.value(bids.bidders(), Some(supply)) {
            Some(value) => Outcome::Cleared(run.table.backtrack(bids, value)?),
            None => Outcome::Infeasible,
        };

        let Run { stats, .. } = run;
        event!(
            Level::DEBUG,
            calls = stats.calls,
            entries = stats.entries,
            hits = stats.hits,
            "memoized recursion finished"
        );

        Ok(Solution {
            supply,
            outcome,
            stats,
        })
    }
}

struct Run<'a> {
    bids: &'a BidSet,
    table: Table,
    stats: Stats,
}

impl Run<'_> {
    // The best total price of bidders 1..=t given the remaining supply,
    // where `None` stands for a supply that has already been overdrawn.
    fn value(&mut self, t: u32, rest: Option<Supply>) -> Option<u64> {
        self.stats.calls += 1;
        let rest = rest?;
        if t == 0 {
            return Some(disposal(rest));
        }

        match self.table.get(t, rest) {
            Cell::Unknown => {}
            cell => {
                self.stats.hits += 1;
                return cell.value();
            }
        }

        let bids = self.bids;
        let cell = Cell::best(bids.bundles(BidderId(t)), rest, |next| {
            self.value(t - 1, next)
        });
        self.table.set(t, rest, cell);
        self.stats.entries += 1;
        cell.value()
    }
}
