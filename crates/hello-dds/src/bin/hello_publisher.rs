// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! hello-publisher - Publish HelloWorld samples.
//!
//! Usage:
//!   hello-publisher
//!   hello-publisher --count 20 --domain 5
//!   hello-publisher --binding dynamic --qos best-effort

use anyhow::{bail, Context};
use hello_dds::cli::{self, PublisherArgs, FAILURE_EXIT_CODE};
use hello_dds::publisher;

fn main() {
    let args: PublisherArgs = cli::parse_or_exit();
    cli::init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(FAILURE_EXIT_CODE);
    }
}

fn run(args: &PublisherArgs) -> anyhow::Result<()> {
    let running = cli::interrupt_flag().context("installing Ctrl+C handler")?;
    let config = args.config();

    let report = publisher::run(&config, &running)
        .with_context(|| format!("publishing on domain {}", config.domain_id))?;

    if !report.is_complete() {
        bail!(
            "published {} of {} samples",
            report.sent,
            report.expected
        );
    }
    Ok(())
}
