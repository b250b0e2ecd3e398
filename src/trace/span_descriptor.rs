use crate::{SpanId, TraceId};

/// Reconstructed header of a span carried as metadata on an inbound message.
///
/// A descriptor links the receiving side of a message exchange to the trace
/// the sender participates in. It only describes the span; starting, timing
/// and closing the span is the caller's concern.
///
/// Descriptors are immutable once built and are not reused across messages.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpanDescriptor {
    trace_id: TraceId,
    span_id: SpanId,
    parent_id: Option<SpanId>,
    process_id: Option<String>,
    name: Option<String>,
    sampled: bool,
    remote: bool,
}

impl SpanDescriptor {
    /// Start building a descriptor from the two required ids.
    pub fn builder(trace_id: TraceId, span_id: SpanId) -> SpanDescriptorBuilder {
        SpanDescriptorBuilder {
            trace_id,
            span_id,
            parent_id: None,
            process_id: None,
            name: None,
            sampled: true,
            remote: false,
        }
    }

    /// The [`TraceId`] shared by every span in this trace.
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// The [`SpanId`] of this span.
    pub fn span_id(&self) -> SpanId {
        self.span_id
    }

    /// The [`SpanId`] of the parent span, if one was propagated.
    pub fn parent_id(&self) -> Option<SpanId> {
        self.parent_id
    }

    /// Opaque identifier of the originating process, if one was propagated.
    pub fn process_id(&self) -> Option<&str> {
        self.process_id.as_deref()
    }

    /// The propagated span name. Callers apply their own default when absent.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` unless the sender downgraded the sampling decision.
    pub fn is_sampled(&self) -> bool {
        self.sampled
    }

    /// Returns `true` if the context arrived from another process.
    pub fn is_remote(&self) -> bool {
        self.remote
    }
}

/// Builder for [`SpanDescriptor`].
#[derive(Clone, Debug)]
pub struct SpanDescriptorBuilder {
    trace_id: TraceId,
    span_id: SpanId,
    parent_id: Option<SpanId>,
    process_id: Option<String>,
    name: Option<String>,
    sampled: bool,
    remote: bool,
}

impl SpanDescriptorBuilder {
    /// Assign the parent span id.
    pub fn with_parent_id(mut self, parent_id: SpanId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Assign the originating process id.
    pub fn with_process_id<T: Into<String>>(mut self, process_id: T) -> Self {
        self.process_id = Some(process_id.into());
        self
    }

    /// Assign the span name.
    pub fn with_name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the sampling decision. Defaults to `true`.
    pub fn sampled(mut self, sampled: bool) -> Self {
        self.sampled = sampled;
        self
    }

    /// Mark the span as received from another process. Defaults to `false`.
    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    /// Assemble the descriptor.
    pub fn build(self) -> SpanDescriptor {
        SpanDescriptor {
            trace_id: self.trace_id,
            span_id: self.span_id,
            parent_id: self.parent_id,
            process_id: self.process_id,
            name: self.name,
            sampled: self.sampled,
            remote: self.remote,
        }
    }
}
