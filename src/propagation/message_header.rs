use crate::propagation::{Extractor, PropagationError, PropagationResult};
use crate::trace::{IdGenerator, RandomIdGenerator, SpanDescriptor};
use crate::{SpanId, TraceId};
use tracing::debug;

/// Trace id of the conversation the message belongs to. Hex encoded.
pub const TRACE_ID_HEADER: &str = "X-B3-TraceId";
/// Id of the span the sender created for this message. Hex encoded.
pub const SPAN_ID_HEADER: &str = "X-B3-SpanId";
/// Id of the sender span's parent, when it had one. Hex encoded.
pub const PARENT_ID_HEADER: &str = "X-B3-ParentSpanId";
/// Opaque identifier of the originating process.
pub const PROCESS_ID_HEADER: &str = "X-Process-Id";
/// Name the sender gave the propagated span.
pub const SPAN_NAME_HEADER: &str = "X-Span-Name";
/// Marker downgrading the sampling decision. Presence alone downgrades;
/// the value is ignored. There is no positive counterpart.
pub const NOT_SAMPLED_HEADER: &str = "X-B3-NotSampled";

/// Rebuilds [`SpanDescriptor`]s from the metadata headers of inbound
/// messages.
///
/// Any two processes exchanging messages through instrumented channels must
/// agree on the header names above and on the hex encoding of numeric ids
/// for trace continuity to work.
///
/// Extraction is pure and reentrant; a single propagator may serve messages
/// arriving concurrently on any number of threads.
#[derive(Clone, Debug, Default)]
pub struct MessageHeaderPropagator<G = RandomIdGenerator> {
    id_generator: G,
}

impl MessageHeaderPropagator {
    /// Create a propagator backed by the default random id generator.
    pub fn new() -> Self {
        MessageHeaderPropagator::default()
    }
}

impl<G: IdGenerator> MessageHeaderPropagator<G> {
    /// Create a propagator with a custom [`IdGenerator`].
    pub fn with_id_generator(id_generator: G) -> Self {
        MessageHeaderPropagator { id_generator }
    }

    /// Rebuild the trace context carried on an inbound message, if any.
    ///
    /// Returns `Ok(None)` when the message carries no context, that is when
    /// either the trace id or the span id header is missing; the caller
    /// should then start a fresh trace. A present id header whose value is
    /// not a valid 64-bit hex id fails the whole extraction with
    /// [`PropagationError::MalformedId`].
    ///
    /// Optional headers (parent id, process id, span name, the not-sampled
    /// marker) default independently when absent. Rebuilt descriptors are
    /// always marked remote.
    pub fn extract(&self, extractor: &dyn Extractor) -> PropagationResult<Option<SpanDescriptor>> {
        if !extractor.has(TRACE_ID_HEADER) || !extractor.has(SPAN_ID_HEADER) {
            debug!("message carries no trace context");
            return Ok(None); // cannot rebuild a context without both ids
        }

        let trace_id = decode_trace_id(extractor.get(TRACE_ID_HEADER).unwrap_or_default())?;
        // The gate above guarantees a span id value today; the generation
        // arm serves callers that relax the gate.
        let span_id = match extractor.get(SPAN_ID_HEADER) {
            Some(value) => decode_span_id(SPAN_ID_HEADER, value)?,
            None => self.id_generator.new_span_id(),
        };

        let mut builder = SpanDescriptor::builder(trace_id, span_id);
        if extractor.has(NOT_SAMPLED_HEADER) {
            builder = builder.sampled(false);
        }
        if let Some(parent_id) = extractor.get(PARENT_ID_HEADER) {
            builder = builder.with_parent_id(decode_span_id(PARENT_ID_HEADER, parent_id)?);
        }
        if let Some(process_id) = extractor.get(PROCESS_ID_HEADER) {
            builder = builder.with_process_id(process_id);
        }
        if let Some(name) = extractor.get(SPAN_NAME_HEADER) {
            builder = builder.with_name(name);
        }

        let descriptor = builder.remote(true).build();
        debug!(
            trace_id = %descriptor.trace_id(),
            span_id = %descriptor.span_id(),
            sampled = descriptor.is_sampled(),
            "rebuilt remote trace context"
        );
        Ok(Some(descriptor))
    }
}

fn decode_trace_id(value: &str) -> PropagationResult<TraceId> {
    TraceId::from_hex(value).map_err(|source| PropagationError::MalformedId {
        header: TRACE_ID_HEADER,
        source,
    })
}

fn decode_span_id(header: &'static str, value: &str) -> PropagationResult<SpanId> {
    SpanId::from_hex(value).map_err(|source| PropagationError::MalformedId { header, source })
}
