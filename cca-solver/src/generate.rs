//! Random auctions are handy for exercising the solvers at scale, and for
//! comparing them against the exhaustive oracle.

use rand::Rng;
use std::io::Write;
use thiserror::Error;

/// The shape of a randomly generated auction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    /// The number of bidders
    pub bidders: u32,
    /// The number of bundles in each bid, including the trailing null bundle
    pub bundles: u32,
    /// The largest quantity of either resource in a bundle
    pub quantity: u32,
    /// The largest offer price
    pub price: u64,
}

impl Generator {
    /// Validate the parameters, all of which must be positive
    pub fn new(
        bidders: u32,
        bundles: u32,
        quantity: u32,
        price: u64,
    ) -> Result<Self, GeneratorError> {
        if bidders == 0 || bundles == 0 || quantity == 0 || price == 0 {
            return Err(GeneratorError::NonPositive {
                bidders,
                bundles,
                quantity,
                price,
            });
        }
        Ok(Self {
            bidders,
            bundles,
            quantity,
            price,
        })
    }

    /// Write a bid file to `writer`.
    ///
    /// Every bid holds `bundles - 1` random offers followed by the null bundle,
    /// so any auction generated this way is feasible for any supply.
    pub fn write<R: Rng, W: Write>(&self, rng: &mut R, writer: &mut W) -> std::io::Result<()> {
        for bidder in 1..=self.bidders {
            for _ in 1..self.bundles {
                writeln!(
                    writer,
                    "{} {} {} {}",
                    bidder,
                    rng.random_range(1..=self.quantity),
                    rng.random_range(1..=self.quantity),
                    rng.random_range(1..=self.price),
                )?;
            }
            writeln!(writer, "{bidder} 0 0 0")?;
        }
        Ok(())
    }
}

/// Errors that can occur when configuring a Generator
#[derive(Debug, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Error when any parameter is zero
    #[error("all parameters must be positive: {bidders} {bundles} {quantity} {price}")]
    NonPositive {
        /// The number of bidders
        bidders: u32,
        /// The number of bundles per bid
        bundles: u32,
        /// The largest quantity
        quantity: u32,
        /// The largest price
        price: u64,
    },
}
