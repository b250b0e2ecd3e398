//! Reconstructed span headers and the id-generation capability behind them.
//!
//! The types here describe a trace context after it has been read off an
//! inbound message: they carry identity and the sampling decision, not span
//! lifecycle. See [`crate::propagation`] for the extraction itself.

mod id_generator;
mod span_descriptor;

pub use id_generator::{IdGenerator, RandomIdGenerator};
pub use span_descriptor::{SpanDescriptor, SpanDescriptorBuilder};
