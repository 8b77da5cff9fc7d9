// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HelloWorld publisher.
//!
//! Creates a participant and a writer, waits for discovery, writes
//! `count` samples with counts `1..=count`, then lingers so that reliable
//! delivery can finish before the participant is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use hdds::Participant;
use tracing::{info, warn};

use crate::config::PublisherConfig;
use crate::error::Result;
use crate::sample::SampleSequence;
use crate::writer::{HelloWriter, SampleWriter};

/// Participant name announced by the publisher.
pub const PARTICIPANT_NAME: &str = "hello-publisher";

/// Outcome of a publish run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishReport {
    /// Samples handed to the writer.
    pub sent: u32,
    /// Samples requested.
    pub expected: u32,
}

impl PublishReport {
    pub fn is_complete(&self) -> bool {
        self.sent == self.expected
    }
}

/// Write `config.count` samples through `writer`, pacing them by
/// `config.interval`. No delay follows the last sample.
///
/// Clearing `running` stops the loop before the next write.
pub fn publish_samples<W: SampleWriter>(
    writer: &W,
    config: &PublisherConfig,
    running: &AtomicBool,
) -> Result<PublishReport> {
    config.validate()?;

    let total = config.count as i32;
    let mut sent = 0u32;

    for sample in SampleSequence::new(config.message.as_str(), total) {
        if !running.load(Ordering::SeqCst) {
            warn!("Interrupted");
            break;
        }

        writer.write_sample(&sample)?;
        sent += 1;
        info!(
            "Published: message='{}', count={}",
            sample.message, sample.count
        );

        if sample.count < total && !config.interval.is_zero() {
            thread::sleep(config.interval);
        }
    }

    Ok(PublishReport {
        sent,
        expected: config.count,
    })
}

/// Run a full publisher session on the configured domain.
pub fn run(config: &PublisherConfig, running: &AtomicBool) -> Result<PublishReport> {
    config.validate()?;
    let qos = config.qos.resolve()?;

    let participant = Participant::builder(PARTICIPANT_NAME)
        .domain_id(config.domain_id)
        .with_transport(config.transport.mode())
        .build()?;

    let writer = HelloWriter::create(&participant, config.binding, qos)?;

    info!(
        "Publisher started on domain {} ({} binding, {} transport)",
        config.domain_id, config.binding, config.transport
    );

    if !config.discovery_wait.is_zero() {
        info!("Waiting for discovery...");
        thread::sleep(config.discovery_wait);
    }

    let report = publish_samples(&writer, config, running)?;

    if !config.linger.is_zero() {
        info!("Waiting for delivery...");
        thread::sleep(config.linger);
    }

    info!("Published {} samples", report.sent);
    Ok(report)
}
