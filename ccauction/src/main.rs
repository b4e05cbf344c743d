use ccauction::BaseArgs;
use clap::Parser as _;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub fn main() -> anyhow::Result<ExitCode> {
    // Library events are routed to stderr, leaving stdout to the report (or
    // the echoed bids), which may well be piped somewhere.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = BaseArgs::parse();
    args.evaluate()
}
