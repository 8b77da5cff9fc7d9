// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HelloWorld sample type.
//!
//! ```idl
//! struct HelloWorld {
//!     string<256> message;
//!     long count;
//! };
//! ```
//!
//! The same type is exposed two ways: as a Rust struct deriving
//! [`hdds::DDS`] (typed binding) and as a runtime
//! [`TypeDescriptor`](hdds::dynamic::TypeDescriptor) filled through
//! [`DynamicData`] (dynamic binding).

use std::sync::Arc;

use hdds::dynamic::{
    decode_dynamic, encode_dynamic, DynamicData, PrimitiveKind, TypeDescriptor,
    TypeDescriptorBuilder,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Topic the HelloWorld samples are published on.
pub const TOPIC_NAME: &str = "HelloWorld";

/// DDS type name announced in discovery.
pub const TYPE_NAME: &str = "HelloWorld";

/// Text carried by every sample unless overridden.
pub const DEFAULT_MESSAGE: &str = "Hello, World!";

/// Upper bound of the `message` field (IDL `string<256>`).
pub const MESSAGE_BOUND: usize = 256;

/// One HelloWorld sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, hdds::DDS)]
pub struct HelloWorld {
    pub message: String,
    pub count: i32,
}

impl HelloWorld {
    pub fn new(message: impl Into<String>, count: i32) -> Self {
        Self {
            message: message.into(),
            count,
        }
    }

    /// Sample carrying [`DEFAULT_MESSAGE`].
    pub fn greeting(count: i32) -> Self {
        Self::new(DEFAULT_MESSAGE, count)
    }
}

/// Yields `total` samples with counts `1..=total`, in order.
#[derive(Debug, Clone)]
pub struct SampleSequence {
    message: String,
    next: i64,
    total: i64,
}

impl SampleSequence {
    pub fn new(message: impl Into<String>, total: i32) -> Self {
        Self {
            message: message.into(),
            next: 1,
            total: i64::from(total.max(0)),
        }
    }
}

impl Iterator for SampleSequence {
    type Item = HelloWorld;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.total {
            return None;
        }
        let sample = HelloWorld::new(self.message.clone(), self.next as i32);
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleSequence {}

/// Runtime descriptor of the HelloWorld struct for the dynamic binding.
pub fn hello_world_descriptor() -> Arc<TypeDescriptor> {
    Arc::new(
        TypeDescriptorBuilder::new(TYPE_NAME)
            .bounded_string_field("message", MESSAGE_BOUND)
            .field("count", PrimitiveKind::I32)
            .build(),
    )
}

/// Copy a typed sample into dynamic data built on `descriptor`.
pub fn to_dynamic(sample: &HelloWorld, descriptor: &Arc<TypeDescriptor>) -> Result<DynamicData> {
    let mut data = DynamicData::new(descriptor);
    data.set("message", sample.message.as_str())
        .map_err(|e| Error::DynamicData(e.to_string()))?;
    data.set("count", sample.count)
        .map_err(|e| Error::DynamicData(e.to_string()))?;
    Ok(data)
}

/// Read a typed sample back out of dynamic data.
pub fn from_dynamic(data: &DynamicData) -> Result<HelloWorld> {
    let message = data
        .get::<String>("message")
        .map_err(|e| Error::DynamicData(e.to_string()))?;
    let count = data
        .get::<i32>("count")
        .map_err(|e| Error::DynamicData(e.to_string()))?;
    Ok(HelloWorld { message, count })
}

/// CDR payload of `sample` as written by the dynamic binding.
pub fn encode_sample(sample: &HelloWorld, descriptor: &Arc<TypeDescriptor>) -> Result<Vec<u8>> {
    let data = to_dynamic(sample, descriptor)?;
    Ok(encode_dynamic(&data)?)
}

/// Inverse of [`encode_sample`].
pub fn decode_sample(bytes: &[u8], descriptor: &Arc<TypeDescriptor>) -> Result<HelloWorld> {
    let data = decode_dynamic(bytes, descriptor)?;
    from_dynamic(&data)
}
