use super::{IOArgs, PathOrStd};
use clap::Subcommand;

mod clear;
pub use clear::SolverLib;

mod generate;
pub(crate) use generate::generate;

#[derive(Subcommand)]
pub enum Commands {
    /// Clear the auction and report the winning bundles
    ///
    /// If both supplies are zero, the parsed bids are echoed back instead.
    Clear {
        #[command(flatten)]
        io: IOArgs,

        /// Available units of resource 1
        n1: u32,

        /// Available units of resource 2
        n2: u32,

        /// Request a specific evaluation strategy
        #[arg(short, long, default_value = "memo")]
        lib: SolverLib,

        /// The report format
        #[arg(short, long, default_value = "text")]
        format: crate::ReportFormat,

        /// Skip the brute force cross-check, even for small auctions
        #[arg(long)]
        no_verify: bool,

        /// Exit with status 2 when no feasible allocation exists
        #[arg(long)]
        strict: bool,
    },

    /// Write a random bid file, where every bid ends with the null bundle
    Generate {
        /// The number of bidders
        bidders: u32,

        /// The number of bundles per bid, including the null bundle
        bundles: u32,

        /// The largest quantity of either resource in a bundle
        quantity: u32,

        /// The largest offer price
        price: u64,

        /// Seed for the random number generator (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// The output file ("-" implies stdout)
        #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
        output: PathOrStd,
    },
}

