use super::{BidderId, Bundle};
use thiserror::Error;

/// Upper bounds on the size of an acceptable auction.
///
/// These only guard the input; the clearing tables are sized to the actual
/// auction being solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Limits {
    /// The largest accepted bidder identifier
    pub max_bidders: u32,
    /// The largest number of bundles in any one bid
    pub max_bundles: usize,
    /// The largest quantity of either resource, in a bundle or in the supply
    pub max_quantity: u32,
    /// The largest offer price of a bundle.
    ///
    /// `max_bidders * max_price` must fit in a `u64`, since revenues are summed over bidders.
    pub max_price: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_bidders: 100,
            max_bundles: 100,
            max_quantity: 100,
            max_price: i32::MAX as u64,
        }
    }
}

/// The bids of every bidder, indexed by their dense identifiers `1..=T`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BidSet {
    limits: Limits,
    // bids[t - 1] is the bid of bidder t
    bids: Vec<Vec<Bundle>>,
    max_bundles: usize,
}

impl BidSet {
    /// An empty bid set accepting bundles within `limits`
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            bids: Vec::new(),
            max_bundles: 0,
        }
    }

    /// Append a bundle to `bidder`'s bid.
    ///
    /// The arguments are signed since they typically come straight from
    /// untrusted input; every bound is checked here.
    pub fn add_bundle(
        &mut self,
        bidder: i64,
        q1: i64,
        q2: i64,
        price: i64,
    ) -> Result<(), BidError> {
        let max_bidders = self.limits.max_bidders;
        let bidder = u32::try_from(bidder)
            .ok()
            .filter(|t| (1..=max_bidders).contains(t))
            .ok_or(BidError::BidderOutOfRange {
                bidder,
                max: max_bidders,
            })?;

        if q1 < 0 || q2 < 0 || price < 0 {
            return Err(BidError::Negative);
        }

        let max_quantity = self.limits.max_quantity;
        let (q1, q2) = match (u32::try_from(q1), u32::try_from(q2)) {
            (Ok(q1), Ok(q2)) if q1 <= max_quantity && q2 <= max_quantity => (q1, q2),
            _ => {
                return Err(BidError::QuantityOutOfRange {
                    q1,
                    q2,
                    max: max_quantity,
                });
            }
        };
        let price = price as u64;
        if price > self.limits.max_price {
            return Err(BidError::PriceOutOfRange {
                price,
                max: self.limits.max_price,
            });
        }

        let offer = (q1 > 0 || q2 > 0) && price > 0;
        let null = q1 == 0 && q2 == 0 && price == 0;
        if !(offer || null) {
            return Err(BidError::NotAnOffer { q1, q2, price });
        }

        let index = bidder as usize - 1;
        if self.bids.get(index).map_or(0, Vec::len) >= self.limits.max_bundles {
            return Err(BidError::TooManyBundles {
                bidder: BidderId(bidder),
                max: self.limits.max_bundles,
            });
        }
        if self.bids.len() <= index {
            self.bids.resize_with(index + 1, Vec::new);
        }
        let bid = &mut self.bids[index];
        bid.push(Bundle { q1, q2, price });
        self.max_bundles = self.max_bundles.max(bid.len());

        Ok(())
    }

    /// The bundles bid by `bidder`, in insertion order
    pub fn bundles(&self, bidder: BidderId) -> &[Bundle] {
        bidder
            .0
            .checked_sub(1)
            .and_then(|index| self.bids.get(index as usize))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The number of bidders, i.e. the largest bidder identifier seen
    pub fn bidders(&self) -> u32 {
        self.bids.len() as u32
    }

    /// The largest number of bundles in any bid
    pub fn max_bundles(&self) -> usize {
        self.max_bundles
    }

    /// Whether no bundles have been added
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }

    /// The limits this bid set was validated against
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Iterate over every bidder and its bid, in ascending bidder order
    pub fn iter(&self) -> impl Iterator<Item = (BidderId, &[Bundle])> {
        self.bids
            .iter()
            .enumerate()
            .map(|(index, bid)| (BidderId(index as u32 + 1), bid.as_slice()))
    }
}

/// An enumeration of the ways a bundle may be rejected
#[derive(Debug, PartialEq, Eq, Error)]
pub enum BidError {
    /// The bidder identifier is outside `1..=max`
    #[error("bidder {bidder} is outside the supported range 1..={max}")]
    BidderOutOfRange {
        /// The offending identifier
        bidder: i64,
        /// The largest accepted identifier
        max: u32,
    },
    /// A quantity, or the price, is negative
    #[error("quantities and price must be non-negative")]
    Negative,
    /// A quantity exceeds the supported maximum
    #[error("quantities ({q1}, {q2}) exceed the supported maximum {max}")]
    QuantityOutOfRange {
        /// The requested units of resource 1
        q1: i64,
        /// The requested units of resource 2
        q2: i64,
        /// The largest accepted quantity
        max: u32,
    },
    /// The price exceeds the supported maximum
    #[error("price {price} exceeds the supported maximum {max}")]
    PriceOutOfRange {
        /// The offer price
        price: u64,
        /// The largest accepted price
        max: u64,
    },
    /// The bundle is neither a priced offer nor the null bundle
    #[error(
        "bundle ({q1}, {q2}) at price {price} must either request goods at a positive price or be the null bundle"
    )]
    NotAnOffer {
        /// Units of resource 1
        q1: u32,
        /// Units of resource 2
        q2: u32,
        /// The offer price
        price: u64,
    },
    /// The bidder already submitted as many bundles as allowed
    #[error("bidder {bidder} exceeds the maximum of {max} bundles per bid")]
    TooManyBundles {
        /// The bidder
        bidder: BidderId,
        /// The largest accepted bid length
        max: usize,
    },
}
