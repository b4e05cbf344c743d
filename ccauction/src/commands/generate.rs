use crate::PathOrStd;
use cca_solver::generate::Generator;
use rand::{SeedableRng as _, rngs::StdRng};
use std::io::Write as _;
use tracing::{Level, event};

pub(crate) fn generate(
    generator: Generator,
    seed: Option<u64>,
    output: &PathOrStd,
) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    event!(Level::INFO, seed, ?generator, "generating bids");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut output = output.writer()?;
    generator.write(&mut rng, &mut output)?;
    output.flush()?;
    Ok(())
}
