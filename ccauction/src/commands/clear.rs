use cca_solver::{
    BidSet, ClearingFault, Solution, Solver as _, Supply, memo::MemoSolver,
    tabular::TabularSolver,
};
use clap::ValueEnum;

// This explicitly articulates the available strategies for the `clear` subcommand
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum SolverLib {
    Memo,
    Tabular,
}

// Conveniently, we can use the same enum to handle the particulars of calling into
// the various solver implementations
impl SolverLib {
    pub fn solve(&self, bids: &BidSet, supply: Supply) -> Result<Solution, ClearingFault> {
        match self {
            SolverLib::Memo => MemoSolver.solve(bids, supply),
            SolverLib::Tabular => TabularSolver.solve(bids, supply),
        }
    }
}
