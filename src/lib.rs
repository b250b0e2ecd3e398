//! Trace-context reconstruction for instrumented message channels.
//!
//! Processes that exchange messages over instrumented channels carry their
//! trace context out of band, as string-keyed metadata headers. This crate
//! rebuilds that context on the receiving side and derives span names from
//! the channels messages travel on. The transport itself (delivery,
//! interceptor registration, thread handoff) stays with the caller, which
//! only has to expose message metadata through the narrow
//! [`propagation::Extractor`] trait and channels through
//! [`channel::MessageChannel`].
//!
//! # Getting started
//!
//! ```
//! use messaging_trace_propagator::propagation::{
//!     MessageHeaderPropagator, SPAN_ID_HEADER, TRACE_ID_HEADER,
//! };
//! use std::collections::HashMap;
//!
//! let mut headers = HashMap::new();
//! headers.insert(TRACE_ID_HEADER.to_string(), "1a".to_string());
//! headers.insert(SPAN_ID_HEADER.to_string(), "2b".to_string());
//!
//! let propagator = MessageHeaderPropagator::new();
//! let descriptor = propagator.extract(&headers).unwrap().unwrap();
//!
//! assert_eq!(descriptor.trace_id().to_u64(), 26);
//! assert!(descriptor.is_remote());
//! ```
//!
//! When either required id header is missing, [`extract`] returns
//! `Ok(None)` and the caller starts a fresh trace, typically named after
//! the channel via [`channel::message_channel_name`].
//!
//! [`extract`]: propagation::MessageHeaderPropagator::extract
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod channel;
pub mod propagation;
pub mod trace;
mod trace_context;

pub use trace_context::{SpanId, TraceId};
