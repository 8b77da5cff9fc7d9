// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HelloWorld writers for both type bindings.

use std::sync::Arc;

use hdds::dynamic::TypeDescriptor;
use hdds::{DataWriter, DdsTrait, Participant, QoS, RawDataWriter};

use crate::config::TypeBinding;
use crate::error::Result;
use crate::sample::{encode_sample, hello_world_descriptor, HelloWorld, TOPIC_NAME, TYPE_NAME};

/// Sink for HelloWorld samples.
pub trait SampleWriter {
    fn write_sample(&self, sample: &HelloWorld) -> Result<()>;
}

/// Writer over the compile-time `HelloWorld` type.
pub struct TypedWriter {
    inner: DataWriter<HelloWorld>,
}

impl TypedWriter {
    pub fn create(participant: &Arc<Participant>, qos: QoS) -> Result<Self> {
        let inner = participant
            .topic::<HelloWorld>(TOPIC_NAME)?
            .writer()
            .qos(qos)
            .build()?;
        Ok(Self { inner })
    }

    /// Underlying middleware writer.
    pub fn inner(&self) -> &DataWriter<HelloWorld> {
        &self.inner
    }
}

impl SampleWriter for TypedWriter {
    fn write_sample(&self, sample: &HelloWorld) -> Result<()> {
        self.inner.write(sample)?;
        Ok(())
    }
}

/// Writer that builds each sample as dynamic data and ships the CDR bytes
/// through a raw writer announcing the `HelloWorld` type.
///
/// Raw writers need a network transport; in intra-process mode the
/// middleware rejects them with `InvalidState`.
pub struct DynamicWriter {
    inner: RawDataWriter,
    descriptor: Arc<TypeDescriptor>,
}

impl DynamicWriter {
    pub fn create(participant: &Arc<Participant>, qos: QoS) -> Result<Self> {
        let inner = participant.create_raw_writer_with_type(
            TOPIC_NAME,
            TYPE_NAME,
            Some(qos),
            HelloWorld::get_type_object(),
        )?;
        Ok(Self {
            inner,
            descriptor: hello_world_descriptor(),
        })
    }
}

impl SampleWriter for DynamicWriter {
    fn write_sample(&self, sample: &HelloWorld) -> Result<()> {
        let payload = encode_sample(sample, &self.descriptor)?;
        self.inner.write_raw(&payload)?;
        Ok(())
    }
}

/// Writer for either binding, chosen at runtime.
pub enum HelloWriter {
    Typed(TypedWriter),
    Dynamic(DynamicWriter),
}

impl HelloWriter {
    pub fn create(participant: &Arc<Participant>, binding: TypeBinding, qos: QoS) -> Result<Self> {
        tracing::debug!("Creating {} writer on topic {}", binding, TOPIC_NAME);
        match binding {
            TypeBinding::Typed => Ok(HelloWriter::Typed(TypedWriter::create(participant, qos)?)),
            TypeBinding::Dynamic => Ok(HelloWriter::Dynamic(DynamicWriter::create(
                participant,
                qos,
            )?)),
        }
    }
}

impl SampleWriter for HelloWriter {
    fn write_sample(&self, sample: &HelloWorld) -> Result<()> {
        match self {
            HelloWriter::Typed(w) => w.write_sample(sample),
            HelloWriter::Dynamic(w) => w.write_sample(sample),
        }
    }
}
