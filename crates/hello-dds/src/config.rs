// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Publisher and subscriber configuration.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use hdds::TransportMode;

use crate::error::{Error, Result};
use crate::qos::EndpointQos;
use crate::sample::{DEFAULT_MESSAGE, MESSAGE_BOUND};

/// Highest DDS domain id accepted by the RTPS port mapping.
pub const MAX_DOMAIN_ID: u32 = 232;

pub const DEFAULT_COUNT: u32 = 10;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_DISCOVERY_WAIT: Duration = Duration::from_secs(2);
pub const DEFAULT_LINGER: Duration = Duration::from_secs(2);
pub const DEFAULT_RECEIVE_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport used by the participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// UDP multicast discovery and data (separate processes or hosts).
    #[default]
    Udp,
    /// In-process only.
    Intra,
}

impl Transport {
    pub fn mode(self) -> TransportMode {
        match self {
            Transport::Udp => TransportMode::UdpMulticast,
            Transport::Intra => TransportMode::IntraProcess,
        }
    }
}

impl std::str::FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "udp" | "multicast" => Ok(Transport::Udp),
            "intra" | "intra-process" | "local" => Ok(Transport::Intra),
            _ => Err(format!("Unknown transport: {}", s)),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Udp => write!(f, "udp"),
            Transport::Intra => write!(f, "intra"),
        }
    }
}

/// How the HelloWorld type is handed to the middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeBinding {
    /// Compile-time type deriving `hdds::DDS`.
    #[default]
    Typed,
    /// Runtime type descriptor + dynamic data over a raw writer.
    Dynamic,
}

impl std::str::FromStr for TypeBinding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typed" | "idl" => Ok(TypeBinding::Typed),
            "dynamic" | "dyn" => Ok(TypeBinding::Dynamic),
            _ => Err(format!("Unknown type binding: {}", s)),
        }
    }
}

impl fmt::Display for TypeBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeBinding::Typed => write!(f, "typed"),
            TypeBinding::Dynamic => write!(f, "dynamic"),
        }
    }
}

fn validate_domain(domain_id: u32) -> Result<()> {
    if domain_id > MAX_DOMAIN_ID {
        return Err(Error::InvalidConfig(format!(
            "domain id {} out of range (0-{})",
            domain_id, MAX_DOMAIN_ID
        )));
    }
    Ok(())
}

fn validate_count(count: u32) -> Result<()> {
    if i32::try_from(count).is_err() {
        return Err(Error::InvalidConfig(format!(
            "sample count {} exceeds the 32-bit counter",
            count
        )));
    }
    Ok(())
}

/// Publisher configuration.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// DDS domain ID.
    pub domain_id: u32,

    /// Number of samples to publish.
    pub count: u32,

    /// Text carried by each sample.
    pub message: String,

    /// Delay between two consecutive samples.
    pub interval: Duration,

    /// Delay before the first sample, to let subscribers be discovered.
    pub discovery_wait: Duration,

    /// Delay after the last sample, to let reliable delivery complete.
    pub linger: Duration,

    pub transport: Transport,

    pub binding: TypeBinding,

    /// Writer QoS.
    pub qos: EndpointQos,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            domain_id: 0,
            count: DEFAULT_COUNT,
            message: DEFAULT_MESSAGE.to_string(),
            interval: DEFAULT_INTERVAL,
            discovery_wait: DEFAULT_DISCOVERY_WAIT,
            linger: DEFAULT_LINGER,
            transport: Transport::default(),
            binding: TypeBinding::default(),
            qos: EndpointQos::default(),
        }
    }
}

impl PublisherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain_id(mut self, domain_id: u32) -> Self {
        self.domain_id = domain_id;
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn discovery_wait(mut self, wait: Duration) -> Self {
        self.discovery_wait = wait;
        self
    }

    pub fn linger(mut self, linger: Duration) -> Self {
        self.linger = linger;
        self
    }

    /// Zero every pacing delay.
    pub fn no_delays(self) -> Self {
        self.interval(Duration::ZERO)
            .discovery_wait(Duration::ZERO)
            .linger(Duration::ZERO)
    }

    pub fn transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn binding(mut self, binding: TypeBinding) -> Self {
        self.binding = binding;
        self
    }

    pub fn qos(mut self, qos: EndpointQos) -> Self {
        self.qos = qos;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_domain(self.domain_id)?;
        validate_count(self.count)?;
        if self.message.len() > MESSAGE_BOUND {
            return Err(Error::InvalidConfig(format!(
                "message is {} bytes, bound is {}",
                self.message.len(),
                MESSAGE_BOUND
            )));
        }
        self.qos.validate()
    }
}

/// Subscriber configuration.
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    pub domain_id: u32,

    /// Samples to receive before exiting successfully.
    pub expected: u32,

    /// Overall receive deadline.
    pub timeout: Duration,

    /// JSON lines destination (`None` = stdout).
    pub output: Option<PathBuf>,

    pub transport: Transport,

    /// Reader QoS.
    pub qos: EndpointQos,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            domain_id: 0,
            expected: DEFAULT_COUNT,
            timeout: DEFAULT_RECEIVE_TIMEOUT,
            output: None,
            transport: Transport::default(),
            qos: EndpointQos::default(),
        }
    }
}

impl SubscriberConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain_id(mut self, domain_id: u32) -> Self {
        self.domain_id = domain_id;
        self
    }

    pub fn expected(mut self, expected: u32) -> Self {
        self.expected = expected;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn qos(mut self, qos: EndpointQos) -> Self {
        self.qos = qos;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_domain(self.domain_id)?;
        self.qos.validate()
    }
}
