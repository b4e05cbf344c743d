use cca_solver::{BidderId, Bundle, Outcome, Solution, Stats, Supply};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

// Per-bidder results are keyed by bidder, in ascending order
type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// The result of cross-checking a solution by exhaustive enumeration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verification {
    /// The optimum found by enumeration (`None` if infeasible)
    pub optimum: Option<u64>,
    /// Whether it matches the solver's value
    pub confirmed: bool,
}

/// Everything reported about one clearing run
#[derive(Debug, Clone)]
pub struct Report {
    pub solution: Solution,
    pub verification: Option<Verification>,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn write<W: Write + ?Sized>(&self, report: &Report, buffer: &mut W) -> anyhow::Result<()> {
        match self {
            Self::Text => write_text(report, buffer)?,
            Self::Json => {
                serde_json::to_writer_pretty(&mut *buffer, &JsonReport::from(report))?;
                writeln!(buffer)?;
            }
        }
        Ok(())
    }
}

fn write_text<W: Write + ?Sized>(report: &Report, out: &mut W) -> std::io::Result<()> {
    let Solution { outcome, stats, .. } = &report.solution;

    writeln!(
        out,
        "calls: {}  entries: {} {:.6}%  hits: {} {:.6}%",
        stats.calls,
        stats.entries,
        stats.entries_pct(),
        stats.hits,
        stats.hits_pct()
    )?;

    match outcome {
        Outcome::Infeasible => writeln!(out, "no feasible solution")?,
        Outcome::Cleared(allocation) => {
            writeln!(out, "value of optimal solution: {}", allocation.value)?;
            for award in allocation.winners() {
                writeln!(
                    out,
                    "bidder {} bid {} q1 {} q2 {} price {}",
                    award.bidder, award.index, award.bundle.q1, award.bundle.q2, award.bundle.price
                )?;
            }
            let (q1, q2, price) = allocation.totals();
            writeln!(out, "check:  resource1 {q1} resource2 {q2} value {price}")?;
        }
    }

    if let Some(Verification { optimum, confirmed }) = report.verification {
        let status = if confirmed { "confirmed" } else { "ERROR" };
        match optimum {
            Some(value) => writeln!(out, "{status}: brute force yields {value}")?,
            None => writeln!(out, "{status}: brute force finds no feasible solution")?,
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct Totals {
    resource1: u64,
    resource2: u64,
    value: u64,
}

#[derive(Serialize)]
struct Winner {
    index: usize,
    #[serde(flatten)]
    bundle: Bundle,
}

#[derive(Serialize)]
struct JsonReport {
    supply: Supply,
    stats: Stats,
    feasible: bool,
    value: Option<u64>,
    winners: Map<BidderId, Winner>,
    totals: Option<Totals>,
    verification: Option<Verification>,
}

impl From<&Report> for JsonReport {
    fn from(report: &Report) -> Self {
        let Solution {
            supply,
            outcome,
            stats,
        } = &report.solution;

        let (winners, totals) = match outcome {
            Outcome::Cleared(allocation) => {
                let winners = allocation
                    .winners()
                    .map(|award| {
                        (
                            award.bidder,
                            Winner {
                                index: award.index,
                                bundle: award.bundle,
                            },
                        )
                    })
                    .collect();
                let (resource1, resource2, value) = allocation.totals();
                (
                    winners,
                    Some(Totals {
                        resource1,
                        resource2,
                        value,
                    }),
                )
            }
            Outcome::Infeasible => (Map::default(), None),
        };

        Self {
            supply: *supply,
            stats: *stats,
            feasible: outcome.value().is_some(),
            value: outcome.value(),
            winners,
            totals,
            verification: report.verification,
        }
    }
}
