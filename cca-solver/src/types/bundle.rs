use std::fmt;

/// A dense bidder identifier, ranging over `1..=T`
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BidderId(pub u32);

impl fmt::Display for BidderId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An offer to buy `q1` units of resource 1 and `q2` units of resource 2 for `price`.
///
/// A bundle is either a genuine offer (some positive quantity at a positive price)
/// or the null bundle, which asks for nothing and pays nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bundle {
    /// Units of resource 1
    pub q1: u32,
    /// Units of resource 2
    pub q2: u32,
    /// The offer price
    pub price: u64,
}

impl Bundle {
    /// The bundle that grants nothing and costs nothing
    pub const NULL: Self = Self {
        q1: 0,
        q2: 0,
        price: 0,
    };

    /// Whether this is the null bundle
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// The supply left over after granting this bundle, if there is enough of it
    pub fn take_from(&self, supply: Supply) -> Option<Supply> {
        Some(Supply {
            n1: supply.n1.checked_sub(self.q1)?,
            n2: supply.n2.checked_sub(self.q2)?,
        })
    }
}

/// Available (or remaining) units of each resource
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Supply {
    /// Units of resource 1
    pub n1: u32,
    /// Units of resource 2
    pub n2: u32,
}

impl Supply {
    /// Shorthand constructor
    pub fn new(n1: u32, n2: u32) -> Self {
        Self { n1, n2 }
    }

    /// Whether no units of either resource are available
    pub fn is_empty(&self) -> bool {
        self.n1 == 0 && self.n2 == 0
    }
}
