//! Carrier access and context extraction for message-borne trace metadata.
//!
//! The propagator never depends on a concrete metadata container. Transport
//! adapters expose an inbound message's string-keyed metadata through the
//! narrow [`Extractor`] trait and hand it to
//! [`MessageHeaderPropagator::extract`].

use std::collections::HashMap;
use std::num::ParseIntError;
use thiserror::Error;

mod message_header;

pub use message_header::{
    MessageHeaderPropagator, NOT_SAMPLED_HEADER, PARENT_ID_HEADER, PROCESS_ID_HEADER,
    SPAN_ID_HEADER, SPAN_NAME_HEADER, TRACE_ID_HEADER,
};

/// Describe the result of propagation operations.
pub type PropagationResult<T> = Result<T, PropagationError>;

/// Errors returned while reconstructing a trace context from a carrier.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PropagationError {
    /// A present id-bearing header did not hold a valid 64-bit hex id.
    ///
    /// Entirely absent optional headers are not errors; this only covers
    /// values that are present but syntactically invalid.
    #[error("malformed hex id in {header}: {source}")]
    MalformedId {
        /// Name of the offending header.
        header: &'static str,
        /// Failure reported by the hex codec.
        #[source]
        source: ParseIntError,
    },
}

/// Extractor provides read access to the string-keyed metadata of an
/// inbound message.
pub trait Extractor {
    /// Get a value for a key from the underlying data.
    fn get(&self, key: &str) -> Option<&str>;

    /// Returns `true` if the underlying data contains the key.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: std::hash::BuildHasher> Extractor for HashMap<String, String, S> {
    /// Get a value for a key from the HashMap.
    fn get(&self, key: &str) -> Option<&str> {
        self.get(key).map(|v| v.as_str())
    }
}
