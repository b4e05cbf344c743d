use cca_solver::{
    Allocation, Award, BidSet, BidderId, BruteForce, Bundle, Limits, Outcome, Solution, Solver,
    Supply,
};
use rstest::*;
use rstest_reuse::{self, *};

use all_solvers::all_solvers;

fn bids(lines: &[(i64, i64, i64, i64)]) -> BidSet {
    let mut bids = BidSet::default();
    for &(bidder, q1, q2, price) in lines {
        bids.add_bundle(bidder, q1, q2, price).unwrap();
    }
    bids
}

fn award(bidder: u32, index: usize, q1: u32, q2: u32, price: u64) -> Award {
    Award {
        bidder: BidderId(bidder),
        index,
        bundle: Bundle { q1, q2, price },
    }
}

// Bidder 1 wants a unit of resource 1, bidder 2 a unit of resource 2, and
// either may walk away with nothing.
#[fixture]
pub fn two_bidders() -> BidSet {
    bids(&[(1, 1, 0, 5), (1, 0, 0, 0), (2, 0, 1, 3), (2, 0, 0, 0)])
}

#[apply(all_solvers)]
#[rstest]
fn should_award_both(solver: impl Solver, two_bidders: BidSet) {
    let Solution { outcome, .. } = solver.solve(&two_bidders, Supply::new(1, 1)).unwrap();

    assert_eq!(
        outcome,
        Outcome::Cleared(Allocation {
            value: 8,
            awards: vec![award(1, 0, 1, 0, 5), award(2, 0, 0, 1, 3)],
        })
    );
}

#[apply(all_solvers)]
#[rstest]
fn should_award_nothing_without_supply(solver: impl Solver, two_bidders: BidSet) {
    let Solution { outcome, .. } = solver.solve(&two_bidders, Supply::new(0, 0)).unwrap();

    let Outcome::Cleared(allocation) = outcome else {
        panic!("expected a feasible outcome");
    };
    assert_eq!(allocation.value, 0);
    assert_eq!(
        allocation.awards,
        vec![award(1, 1, 0, 0, 0), award(2, 1, 0, 0, 0)]
    );
    assert_eq!(allocation.winners().count(), 0);
}

#[apply(all_solvers)]
#[rstest]
fn should_fall_back_to_null_bundle(solver: impl Solver, two_bidders: BidSet) {
    let Solution { outcome, .. } = solver.solve(&two_bidders, Supply::new(0, 1)).unwrap();

    let Outcome::Cleared(allocation) = outcome else {
        panic!("expected a feasible outcome");
    };
    assert_eq!(allocation.value, 3);
    assert_eq!(allocation.awards[0], award(1, 1, 0, 0, 0));
    assert_eq!(allocation.awards[1], award(2, 0, 0, 1, 3));
    assert_eq!(allocation.totals(), (0, 1, 3));
}

#[apply(all_solvers)]
#[rstest]
fn should_prefer_two_small_winners(solver: impl Solver) {
    // One bidder wants everything of resource 1, two others share it
    let bids = bids(&[
        (1, 2, 0, 7),
        (1, 0, 0, 0),
        (2, 1, 0, 4),
        (2, 0, 0, 0),
        (3, 1, 1, 5),
        (3, 0, 0, 0),
    ]);

    let Solution { outcome, .. } = solver.solve(&bids, Supply::new(2, 1)).unwrap();
    let Outcome::Cleared(allocation) = outcome else {
        panic!("expected a feasible outcome");
    };
    assert_eq!(allocation.value, 9);
    assert_eq!(
        allocation.winners().copied().collect::<Vec<_>>(),
        vec![award(2, 0, 1, 0, 4), award(3, 0, 1, 1, 5)]
    );

    // With a second unit of resource 2 to spare, nothing changes
    let Solution { outcome, .. } = solver.solve(&bids, Supply::new(2, 2)).unwrap();
    assert_eq!(outcome.value(), Some(9));

    // With enough of resource 1, the big bidder joins in
    let Solution { outcome, .. } = solver.solve(&bids, Supply::new(4, 1)).unwrap();
    assert_eq!(outcome.value(), Some(16));
}

#[apply(all_solvers)]
#[rstest]
fn should_pick_best_bundle_within_a_bid(solver: impl Solver) {
    let bids = bids(&[(1, 1, 1, 3), (1, 2, 0, 4), (1, 2, 2, 6), (1, 0, 0, 0)]);

    let Solution { outcome, .. } = solver.solve(&bids, Supply::new(2, 1)).unwrap();
    let Outcome::Cleared(allocation) = outcome else {
        panic!("expected a feasible outcome");
    };
    assert_eq!(allocation.awards, vec![award(1, 1, 2, 0, 4)]);
}

#[apply(all_solvers)]
#[rstest]
fn should_report_infeasible(solver: impl Solver) {
    // Bidder 2 insists on two units of resource 2 and has no null bundle
    let bids = bids(&[(1, 1, 0, 5), (1, 0, 0, 0), (2, 0, 2, 3)]);

    let Solution { outcome, .. } = solver.solve(&bids, Supply::new(1, 1)).unwrap();
    assert_eq!(outcome, Outcome::Infeasible);
    assert_eq!(BruteForce::default().optimum(&bids, Supply::new(1, 1)), None);

    // Once the supply is there, bidder 2 must win
    let Solution { outcome, .. } = solver.solve(&bids, Supply::new(0, 2)).unwrap();
    assert_eq!(outcome.value(), Some(3));
}

#[apply(all_solvers)]
#[rstest]
fn should_report_infeasible_for_missing_bidder(solver: impl Solver) {
    // Bidder 2 never bid, so there is nothing to award them
    let bids = bids(&[(1, 0, 0, 0), (3, 0, 0, 0)]);
    assert_eq!(bids.bidders(), 3);

    let Solution { outcome, .. } = solver.solve(&bids, Supply::new(5, 5)).unwrap();
    assert_eq!(outcome, Outcome::Infeasible);
}

#[apply(all_solvers)]
#[rstest]
fn should_clear_empty_auction(solver: impl Solver) {
    let Solution { outcome, stats, .. } = solver
        .solve(&BidSet::default(), Supply::new(3, 2))
        .unwrap();
    assert_eq!(outcome, Outcome::Cleared(Allocation::default()));
    assert_eq!(stats.cells, 0);
    assert_eq!(stats.entries, 0);
}

#[apply(all_solvers)]
#[rstest]
fn should_sum_largest_prices(solver: impl Solver) {
    // Every bidder of the largest auction offers the largest price
    let limits = Limits::default();
    let max_price = limits.max_price as i64;
    let mut bids = BidSet::new(limits);
    for bidder in 1..=limits.max_bidders as i64 {
        bids.add_bundle(bidder, 1, 0, max_price).unwrap();
    }

    let supply = Supply::new(limits.max_quantity, 0);
    let Solution { outcome, .. } = solver.solve(&bids, supply).unwrap();
    assert_eq!(outcome.value(), Some(limits.max_bidders as u64 * limits.max_price));
}

#[apply(all_solvers)]
#[rstest]
fn should_not_leak_between_runs(solver: impl Solver, two_bidders: BidSet) {
    let first = solver.solve(&two_bidders, Supply::new(1, 1)).unwrap();
    let _ = solver.solve(&two_bidders, Supply::new(0, 1)).unwrap();
    let again = solver.solve(&two_bidders, Supply::new(1, 1)).unwrap();
    assert_eq!(first, again);
}

#[rstest]
fn should_serialize_solution(two_bidders: BidSet) {
    let solution = cca_solver::memo::MemoSolver
        .solve(&two_bidders, Supply::new(1, 1))
        .unwrap();
    let json = serde_json::to_value(&solution).unwrap();
    assert_eq!(json["outcome"]["Cleared"]["value"], 8);
    assert_eq!(json["supply"]["n1"], 1);

    let infeasible = serde_json::to_value(&Outcome::Infeasible).unwrap();
    assert_eq!(infeasible, serde_json::json!("Infeasible"));
}
