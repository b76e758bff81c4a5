//! EC2 model inspector
//!
//! Usage:
//!   ec2-inspect shapes [--requests]
//!   ec2-inspect schema CreatePlacementGroupRequest
//!   ec2-inspect show CreatePlacementGroupRequest --input request.json
//!   ec2-inspect dry-run RunInstancesRequest < request.json
//!
//! `RUST_LOG` overrides the log filter; `--verbose` raises the default to debug.

use anyhow::Result;
use clap::Parser;
use ec2_inspect::{Args, run};
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    run(&args.command, &mut io::stdin().lock(), &mut io::stdout().lock())
}
