// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HelloWorld verification subscriber.
//!
//! Waits on the reader's status condition and emits one JSON object per
//! received sample:
//!
//! ```json
//! {"topic":"HelloWorld","seq":1,"data":{"message":"Hello, World!","count":1}}
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use hdds::{DataReader, Participant, QoS, WaitSet};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::SubscriberConfig;
use crate::error::Result;
use crate::sample::{HelloWorld, TOPIC_NAME};

/// Participant name announced by the subscriber.
pub const PARTICIPANT_NAME: &str = "hello-subscriber";

/// Longest single wait, so interruption and the deadline are honoured.
pub const WAIT_SLICE: Duration = Duration::from_secs(1);

/// One line of subscriber output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedRecord {
    pub topic: String,
    /// 1-based receive order.
    pub seq: u32,
    pub data: HelloWorld,
}

/// Outcome of a receive run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiveReport {
    pub received: u32,
    pub expected: u32,
    pub elapsed: Duration,
}

impl ReceiveReport {
    pub fn is_complete(&self) -> bool {
        self.received >= self.expected
    }
}

/// Source of HelloWorld samples.
pub trait SampleSource {
    /// Block up to `timeout` and return whatever arrived (possibly nothing).
    fn next_batch(&mut self, timeout: Duration) -> Result<Vec<HelloWorld>>;
}

/// Typed reader driven by a WaitSet.
pub struct ReaderSource {
    reader: DataReader<HelloWorld>,
    waitset: WaitSet,
}

impl ReaderSource {
    pub fn create(participant: &Arc<Participant>, qos: QoS) -> Result<Self> {
        let reader = participant
            .topic::<HelloWorld>(TOPIC_NAME)?
            .reader()
            .qos(qos)
            .build()?;
        let waitset = WaitSet::new();
        waitset.attach_condition(reader.get_status_condition())?;
        Ok(Self { reader, waitset })
    }

    /// Underlying middleware reader.
    pub fn inner(&self) -> &DataReader<HelloWorld> {
        &self.reader
    }

    fn drain(&self) -> Result<Vec<HelloWorld>> {
        let mut batch = Vec::new();
        while let Some(sample) = self.reader.take()? {
            batch.push(sample);
        }
        Ok(batch)
    }
}

impl SampleSource for ReaderSource {
    fn next_batch(&mut self, timeout: Duration) -> Result<Vec<HelloWorld>> {
        match self.waitset.wait(Some(timeout)) {
            Ok(triggered) if !triggered.is_empty() => self.drain(),
            Ok(_) | Err(hdds::Error::WouldBlock) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Receive until `expected` samples were written to `out` or `timeout`
/// elapsed. Each record is flushed as soon as it is written.
pub fn receive_samples<S: SampleSource, W: Write>(
    source: &mut S,
    out: &mut W,
    expected: u32,
    timeout: Duration,
    running: &AtomicBool,
) -> Result<ReceiveReport> {
    let start = Instant::now();
    let mut received = 0u32;

    info!(
        "Waiting for {} samples (timeout: {:.1}s)...",
        expected,
        timeout.as_secs_f64()
    );

    'outer: while received < expected {
        if !running.load(Ordering::SeqCst) {
            warn!("Interrupted");
            break;
        }

        let remaining = timeout.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            warn!("Timeout after receiving {} samples", received);
            break;
        }

        for sample in source.next_batch(remaining.min(WAIT_SLICE))? {
            received += 1;
            info!("  Received [{}]: count={}", received, sample.count);

            let record = ReceivedRecord {
                topic: TOPIC_NAME.to_string(),
                seq: received,
                data: sample,
            };
            serde_json::to_writer(&mut *out, &record)?;
            out.write_all(b"\n")?;
            out.flush()?;

            if received >= expected {
                break 'outer;
            }
        }
    }

    let report = ReceiveReport {
        received,
        expected,
        elapsed: start.elapsed(),
    };
    info!(
        "Received {}/{} samples in {:.1}s",
        report.received,
        report.expected,
        report.elapsed.as_secs_f64()
    );
    Ok(report)
}

/// Run a full subscriber session on the configured domain.
pub fn run(config: &SubscriberConfig, running: &AtomicBool) -> Result<ReceiveReport> {
    config.validate()?;
    let qos = config.qos.resolve()?;

    let participant = Participant::builder(PARTICIPANT_NAME)
        .domain_id(config.domain_id)
        .with_transport(config.transport.mode())
        .build()?;

    let mut source = ReaderSource::create(&participant, qos)?;
    info!("Subscriber started on domain {}", config.domain_id);

    match &config.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            receive_samples(&mut source, &mut out, config.expected, config.timeout, running)
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            receive_samples(&mut source, &mut out, config.expected, config.timeout, running)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays scripted batches, then reports empty waits.
    struct ScriptedSource {
        batches: VecDeque<Vec<HelloWorld>>,
        waits: usize,
    }

    impl ScriptedSource {
        fn new(batches: Vec<Vec<HelloWorld>>) -> Self {
            Self {
                batches: batches.into(),
                waits: 0,
            }
        }
    }

    impl SampleSource for ScriptedSource {
        fn next_batch(&mut self, timeout: Duration) -> Result<Vec<HelloWorld>> {
            self.waits += 1;
            match self.batches.pop_front() {
                Some(batch) => Ok(batch),
                None => {
                    std::thread::sleep(timeout.min(Duration::from_millis(5)));
                    Ok(Vec::new())
                }
            }
        }
    }

    fn samples(counts: std::ops::RangeInclusive<i32>) -> Vec<HelloWorld> {
        counts.map(HelloWorld::greeting).collect()
    }

    fn parse_lines(out: &[u8]) -> Vec<ReceivedRecord> {
        std::str::from_utf8(out)
            .expect("utf8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect()
    }

    #[test]
    fn test_record_json_shape() {
        let record = ReceivedRecord {
            topic: TOPIC_NAME.to_string(),
            seq: 1,
            data: HelloWorld::greeting(1),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(
            json,
            r#"{"topic":"HelloWorld","seq":1,"data":{"message":"Hello, World!","count":1}}"#
        );
    }

    #[test]
    fn test_receives_across_batches() {
        let mut source = ScriptedSource::new(vec![samples(1..=2), vec![], samples(3..=4)]);
        let mut out = Vec::new();
        let running = AtomicBool::new(true);

        let report = receive_samples(
            &mut source,
            &mut out,
            4,
            Duration::from_secs(5),
            &running,
        )
        .expect("receive");

        assert!(report.is_complete());
        assert_eq!(report.received, 4);
        let records = parse_lines(&out);
        let seqs: Vec<u32> = records.iter().map(|r| r.seq).collect();
        let counts: Vec<i32> = records.iter().map(|r| r.data.count).collect();
        assert_eq!(seqs, vec![1, 2, 3, 4]);
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_stops_at_expected_within_batch() {
        let mut source = ScriptedSource::new(vec![samples(1..=5)]);
        let mut out = Vec::new();
        let running = AtomicBool::new(true);

        let report = receive_samples(
            &mut source,
            &mut out,
            3,
            Duration::from_secs(5),
            &running,
        )
        .expect("receive");

        assert_eq!(report.received, 3);
        assert_eq!(parse_lines(&out).len(), 3);
    }

    #[test]
    fn test_seq_is_receive_order() {
        let mut source = ScriptedSource::new(vec![vec![
            HelloWorld::greeting(7),
            HelloWorld::greeting(3),
        ]]);
        let mut out = Vec::new();
        let running = AtomicBool::new(true);

        receive_samples(
            &mut source,
            &mut out,
            2,
            Duration::from_secs(5),
            &running,
        )
        .expect("receive");

        let records = parse_lines(&out);
        assert_eq!(records[0].seq, 1);
        assert_eq!(records[0].data.count, 7);
        assert_eq!(records[1].seq, 2);
        assert_eq!(records[1].data.count, 3);
    }

    #[test]
    fn test_timeout_reports_partial() {
        let mut source = ScriptedSource::new(vec![samples(1..=2)]);
        let mut out = Vec::new();
        let running = AtomicBool::new(true);

        let report = receive_samples(
            &mut source,
            &mut out,
            10,
            Duration::from_millis(50),
            &running,
        )
        .expect("receive");

        assert_eq!(report.received, 2);
        assert!(!report.is_complete());
        assert!(report.elapsed >= Duration::from_millis(50));
    }

    #[test]
    fn test_interrupted_before_first_wait() {
        let mut source = ScriptedSource::new(vec![samples(1..=3)]);
        let mut out = Vec::new();
        let running = AtomicBool::new(false);

        let report = receive_samples(
            &mut source,
            &mut out,
            3,
            Duration::from_secs(5),
            &running,
        )
        .expect("receive");

        assert_eq!(report.received, 0);
        assert_eq!(source.waits, 0);
        assert!(out.is_empty());
    }
}
