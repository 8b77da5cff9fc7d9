// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type shared by the publisher and subscriber.

use hdds::dynamic::DynamicCdrError;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or running a HelloWorld endpoint.
#[derive(Debug, Error)]
pub enum Error {
    #[error("DDS error: {0}")]
    Dds(#[from] hdds::Error),

    #[error("Dynamic data error: {0}")]
    DynamicData(String),

    #[error("CDR encoding error: {0}")]
    Cdr(#[from] DynamicCdrError),

    #[error("Failed to load QoS from {path}: {reason}")]
    QosFile { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
