// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HelloWorld over HDDS
//!
//! A publisher that writes a fixed number of `HelloWorld { message, count }`
//! samples, and the subscriber used to verify it.
//!
//! # Quick Start
//!
//! ```bash
//! # Terminal 1 - subscriber, JSON lines on stdout
//! hello-subscriber --domain 0 --count 10
//!
//! # Terminal 2 - publisher
//! hello-publisher --domain 0 --count 10
//! ```
//!
//! # Type Bindings
//!
//! | Binding   | Type source                    | Writer                 |
//! |-----------|--------------------------------|------------------------|
//! | `typed`   | `#[derive(hdds::DDS)]` struct  | `DataWriter<HelloWorld>` |
//! | `dynamic` | runtime `TypeDescriptor`       | `RawDataWriter`        |

pub mod cli;
pub mod config;
pub mod error;
pub mod publisher;
pub mod qos;
pub mod sample;
pub mod subscriber;
pub mod writer;

pub use config::{PublisherConfig, SubscriberConfig, Transport, TypeBinding};
pub use error::{Error, Result};
pub use publisher::PublishReport;
pub use qos::{EndpointQos, QosProfile};
pub use sample::{HelloWorld, SampleSequence, TOPIC_NAME};
pub use subscriber::{ReceiveReport, ReceivedRecord, SampleSource};
pub use writer::{HelloWriter, SampleWriter};
