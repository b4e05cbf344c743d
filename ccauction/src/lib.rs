use cca_solver::{
    BruteForce, Outcome, Supply,
    generate::Generator,
    io::{read_bids, write_bids},
};
use clap::Parser;
use std::{io::Write as _, path::PathBuf, process::ExitCode};
use tracing::{Level, event};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod config;
pub use config::*;

mod report;
pub use report::*;

// The top-level arguments: an optional config file and the subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "CCA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<ExitCode> {
        let AppConfig { limits, verify } = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Clear {
                io,
                n1,
                n2,
                lib,
                format,
                no_verify,
                strict,
            } => {
                if n1 > limits.max_quantity || n2 > limits.max_quantity {
                    return Err(CliError::SupplyOutOfRange {
                        n1,
                        n2,
                        max: limits.max_quantity,
                    })?;
                }
                let supply = Supply::new(n1, n2);

                let bids = read_bids(io.read()?, limits)?;
                let mut output = io.write()?;

                // With nothing to allocate, echo the parsed bids instead
                if supply.is_empty() {
                    write_bids(&bids, &mut output)?;
                    output.flush()?;
                    return Ok(ExitCode::SUCCESS);
                }

                let solution = lib.solve(&bids, supply)?;

                let brute = BruteForce::new(verify.threshold);
                let verification = (!no_verify && brute.eligible(&bids)).then(|| {
                    let value = solution.outcome.value();
                    let confirmed = brute.verify(&bids, supply, value);
                    // Only a disagreement needs the oracle's own optimum spelled out
                    let optimum = if confirmed {
                        value
                    } else {
                        brute.optimum(&bids, supply)
                    };
                    Verification { optimum, confirmed }
                });

                let infeasible = solution.outcome == Outcome::Infeasible;
                let report = Report {
                    solution,
                    verification,
                };
                format.write(&report, &mut output)?;
                output.flush()?;

                if let Some(Verification {
                    optimum,
                    confirmed: false,
                }) = report.verification
                {
                    return Err(CliError::VerificationMismatch {
                        value: report.solution.outcome.value(),
                        optimum,
                    })?;
                }

                if infeasible {
                    event!(Level::WARN, n1, n2, "no feasible solution");
                    if strict {
                        return Ok(ExitCode::from(2));
                    }
                }
            }
            Commands::Generate {
                bidders,
                bundles,
                quantity,
                price,
                seed,
                output,
            } => {
                let generator = Generator::new(bidders, bundles, quantity, price)?;
                generate(generator, seed, &output)?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("supply ({n1}, {n2}) exceeds the supported maximum {max}")]
    SupplyOutOfRange { n1: u32, n2: u32, max: u32 },
    #[error("brute force yields {optimum:?} but the solver reported {value:?}")]
    VerificationMismatch {
        value: Option<u64>,
        optimum: Option<u64>,
    },
}
