// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic binding over UDP: a raw writer fed with dynamic-data CDR must be
//! readable by the typed reader.

use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::{Duration, Instant};

use hdds::{Participant, TransportMode};
use hello_dds::publisher::publish_samples;
use hello_dds::subscriber::ReaderSource;
use hello_dds::writer::DynamicWriter;
use hello_dds::{EndpointQos, PublisherConfig, SampleSource};

const DOMAIN: u32 = 77;

#[test]
#[ignore] // Ignore by default (requires UDP multicast permissions)
fn test_dynamic_writer_reaches_typed_reader() {
    let qos = EndpointQos::default().resolve().expect("qos");

    let pub_participant = Participant::builder("hello_dynamic_pub")
        .domain_id(DOMAIN)
        .with_transport(TransportMode::UdpMulticast)
        .build()
        .expect("Failed to create publisher participant");
    let sub_participant = Participant::builder("hello_dynamic_sub")
        .domain_id(DOMAIN)
        .with_transport(TransportMode::UdpMulticast)
        .build()
        .expect("Failed to create subscriber participant");

    let mut reader = ReaderSource::create(&sub_participant, qos.clone()).expect("reader");
    let writer = DynamicWriter::create(&pub_participant, qos).expect("dynamic writer");

    thread::sleep(Duration::from_secs(1));

    let config = PublisherConfig::new()
        .count(3)
        .no_delays()
        .interval(Duration::from_millis(50));
    let running = AtomicBool::new(true);
    let report = publish_samples(&writer, &config, &running).expect("publish");
    assert!(report.is_complete());

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut counts = Vec::new();
    while Instant::now() < deadline {
        for sample in reader
            .next_batch(Duration::from_millis(200))
            .expect("next_batch")
        {
            assert_eq!(sample.message, "Hello, World!");
            counts.push(sample.count);
        }
        counts.sort_unstable();
        counts.dedup();
        if counts.len() >= 3 {
            break;
        }
    }

    // Duplicate deliveries are tolerated, missing counts are not.
    assert_eq!(counts, vec![1, 2, 3]);
}
