// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! hello-subscriber - Receive HelloWorld samples as JSON lines.
//!
//! Usage:
//!   hello-subscriber --count 10 --timeout 30
//!   hello-subscriber --domain 5 --output received.jsonl

use anyhow::{bail, Context};
use hello_dds::cli::{self, SubscriberArgs, FAILURE_EXIT_CODE};
use hello_dds::subscriber;

fn main() {
    let args: SubscriberArgs = cli::parse_or_exit();
    cli::init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(FAILURE_EXIT_CODE);
    }
}

fn run(args: &SubscriberArgs) -> anyhow::Result<()> {
    let running = cli::interrupt_flag().context("installing Ctrl+C handler")?;
    let config = args.config();

    let report = subscriber::run(&config, &running)
        .with_context(|| format!("subscribing on domain {}", config.domain_id))?;

    if !report.is_complete() {
        bail!(
            "received {} of {} samples",
            report.received,
            report.expected
        );
    }
    Ok(())
}
