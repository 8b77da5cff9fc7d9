// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Command-line front ends shared by the `hello-publisher` and
//! `hello-subscriber` binaries.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{
    PublisherConfig, SubscriberConfig, Transport, TypeBinding, DEFAULT_COUNT, MAX_DOMAIN_ID,
};
use crate::qos::{EndpointQos, QosProfile};
use crate::sample::DEFAULT_MESSAGE;

/// Exit code for argument errors and runtime failures alike.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Publish HelloWorld samples over DDS
#[derive(Parser, Debug)]
#[command(name = "hello-publisher")]
#[command(version)]
#[command(about = "Publish HelloWorld samples over DDS")]
pub struct PublisherArgs {
    /// Number of samples (zero or negative publishes nothing)
    #[arg(
        short,
        long,
        default_value_t = i64::from(DEFAULT_COUNT),
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(..=i64::from(i32::MAX))
    )]
    pub count: i64,

    /// DDS domain ID
    #[arg(
        short,
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DOMAIN_ID))
    )]
    pub domain: u32,

    /// Interval between samples in seconds
    #[arg(short, long, default_value = "0.5", value_parser = parse_seconds)]
    pub interval: Duration,

    /// Message carried by every sample
    #[arg(short, long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Type binding: typed, dynamic
    #[arg(short, long, default_value = "typed")]
    pub binding: TypeBinding,

    /// Transport mode: udp (multicast) or intra (in-process)
    #[arg(short, long, default_value = "udp")]
    pub transport: Transport,

    /// QoS profile: reliable, best-effort
    #[arg(short, long, default_value = "reliable")]
    pub qos: QosProfile,

    /// Override history with KEEP_LAST(depth)
    #[arg(long)]
    pub history_depth: Option<u32>,

    /// QoS profile file (.xml or .yaml), replaces --qos
    #[arg(long)]
    pub qos_file: Option<PathBuf>,

    /// Profile name inside --qos-file
    #[arg(long, requires = "qos_file")]
    pub qos_profile: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl PublisherArgs {
    pub fn config(&self) -> PublisherConfig {
        PublisherConfig::new()
            .domain_id(self.domain)
            .count(self.count.max(0) as u32)
            .message(self.message.clone())
            .interval(self.interval)
            .transport(self.transport)
            .binding(self.binding)
            .qos(endpoint_qos(
                self.qos,
                self.history_depth,
                self.qos_file.as_ref(),
                self.qos_profile.as_ref(),
            ))
    }
}

/// Receive HelloWorld samples and print them as JSON lines
#[derive(Parser, Debug)]
#[command(name = "hello-subscriber")]
#[command(version)]
#[command(about = "Receive HelloWorld samples and print them as JSON lines")]
pub struct SubscriberArgs {
    /// Expected sample count
    #[arg(short, long, visible_short_alias = 'n', default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// DDS domain ID
    #[arg(
        short,
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DOMAIN_ID))
    )]
    pub domain: u32,

    /// Timeout in seconds
    #[arg(short, long, default_value = "30", value_parser = parse_seconds)]
    pub timeout: Duration,

    /// Output file for JSON lines (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Transport mode: udp (multicast) or intra (in-process)
    #[arg(long, default_value = "udp")]
    pub transport: Transport,

    /// QoS profile: reliable, best-effort
    #[arg(short, long, default_value = "reliable")]
    pub qos: QosProfile,

    /// Override history with KEEP_LAST(depth)
    #[arg(long)]
    pub history_depth: Option<u32>,

    /// QoS profile file (.xml or .yaml), replaces --qos
    #[arg(long)]
    pub qos_file: Option<PathBuf>,

    /// Profile name inside --qos-file
    #[arg(long, requires = "qos_file")]
    pub qos_profile: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl SubscriberArgs {
    pub fn config(&self) -> SubscriberConfig {
        let config = SubscriberConfig::new()
            .domain_id(self.domain)
            .expected(self.count)
            .timeout(self.timeout)
            .transport(self.transport)
            .qos(endpoint_qos(
                self.qos,
                self.history_depth,
                self.qos_file.as_ref(),
                self.qos_profile.as_ref(),
            ));
        match &self.output {
            Some(path) => config.output(path),
            None => config,
        }
    }
}

fn endpoint_qos(
    profile: QosProfile,
    history_depth: Option<u32>,
    qos_file: Option<&PathBuf>,
    qos_profile: Option<&String>,
) -> EndpointQos {
    let mut qos = EndpointQos::new(profile);
    if let Some(depth) = history_depth {
        qos = qos.history_depth(depth);
    }
    if let Some(path) = qos_file {
        qos = qos.file(path, qos_profile.cloned());
    }
    qos
}

/// Parse a non-negative number of seconds.
pub fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("invalid number of seconds: {}", s))
}

/// Exit code for a failed parse: help and version are successes.
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => FAILURE_EXIT_CODE,
    }
}

/// Parse the process arguments. Malformed input exits with code 1.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = parse_exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

/// Install the stderr fmt subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Flag cleared on Ctrl+C.
pub fn interrupt_flag() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;
    Ok(running)
}
