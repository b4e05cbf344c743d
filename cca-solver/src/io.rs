//! The bid file holds one bundle per line, as four whitespace-separated
//! integers: `bidder q1 q2 price`. Blank lines are ignored.

use crate::{BidError, BidSet, Limits};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{Level, event};

/// Parse a bid file, validating every bundle against `limits`
pub fn read_bids<R: BufRead>(reader: R, limits: Limits) -> Result<BidSet, LoadError> {
    let mut bids = BidSet::new(limits);
    let mut count = 0usize;

    for (index, text) in reader.lines().enumerate() {
        let text = text?;
        let line = index + 1;
        if text.trim().is_empty() {
            continue;
        }

        let [bidder, q1, q2, price] = parse_line(&text).ok_or_else(|| LoadError::Malformed {
            line,
            text: text.clone(),
        })?;
        bids.add_bundle(bidder, q1, q2, price)
            .map_err(|source| LoadError::Invalid { line, source })?;
        count += 1;
    }

    event!(
        Level::INFO,
        bundles = count,
        bidders = bids.bidders(),
        max_bundles = bids.max_bundles(),
        "loaded bids"
    );
    Ok(bids)
}

fn parse_line(text: &str) -> Option<[i64; 4]> {
    let mut fields = text.split_whitespace().map(str::parse::<i64>);
    let mut values = [0i64; 4];
    for value in values.iter_mut() {
        *value = fields.next()?.ok()?;
    }
    // anything beyond the fourth field is malformed as well
    fields.next().is_none().then_some(values)
}

/// Write the bids back out in the bid file format.
///
/// Bundles are written in bidder order, then in the order they were bid, so
/// reading the output yields an identical `BidSet`.
pub fn write_bids<W: Write>(bids: &BidSet, writer: &mut W) -> std::io::Result<()> {
    for (bidder, bundles) in bids.iter() {
        for bundle in bundles {
            writeln!(
                writer,
                "{} {} {} {}",
                bidder, bundle.q1, bundle.q2, bundle.price
            )?;
        }
    }
    Ok(())
}

/// Errors that can occur while reading a bid file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying reader failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The line is not four integers
    #[error("input line {line}: expected 'bidder q1 q2 price', found '{text}'")]
    Malformed {
        /// The 1-based line number
        line: usize,
        /// The offending text
        text: String,
    },
    /// The line parsed, but the bundle it describes is not acceptable
    #[error("input line {line}: {source}")]
    Invalid {
        /// The 1-based line number
        line: usize,
        /// The violated condition
        source: BidError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BidderId, Bundle};

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("1 2 3 4"), Some([1, 2, 3, 4]));
        assert_eq!(parse_line("  1\t2 3   4  "), Some([1, 2, 3, 4]));
        assert_eq!(parse_line("1 -2 3 4"), Some([1, -2, 3, 4]));
        assert_eq!(parse_line("1 2 3"), None);
        assert_eq!(parse_line("1 2 3 4 5"), None);
        assert_eq!(parse_line("1 2 x 4"), None);
    }

    #[test]
    fn test_reads_with_blank_lines() {
        let input = "1 1 0 5\n\n1 0 0 0\n2 0 1 3\n";
        let bids = read_bids(input.as_bytes(), Limits::default()).unwrap();
        assert_eq!(bids.bidders(), 2);
        assert_eq!(bids.bundles(BidderId(1))[1], Bundle::NULL);
    }

    #[test]
    fn test_malformed_line_number() {
        let input = "1 1 0 5\n1 0 0\n";
        match read_bids(input.as_bytes(), Limits::default()) {
            Err(LoadError::Malformed { line, text }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "1 0 0");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_line_number() {
        let input = "1 1 0 5\n\n2 1 0 0\n";
        match read_bids(input.as_bytes(), Limits::default()) {
            Err(LoadError::Invalid { line, source }) => {
                assert_eq!(line, 3);
                assert!(matches!(source, BidError::NotAnOffer { .. }));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
