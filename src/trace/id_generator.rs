use crate::SpanId;
use rand::{rngs, Rng, SeedableRng};
use std::cell::RefCell;
use std::fmt;

/// Interface for generating span ids.
///
/// The extraction path only consults a generator when an inbound message
/// carries a trace id without a span id, which a strict presence gate never
/// allows through. Implementations must be safe for concurrent use from
/// multiple threads.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// Generate a new `SpanId`.
    fn new_span_id(&self) -> SpanId;
}

/// Default [`IdGenerator`] implementation.
///
/// Generates span ids using a random number generator.
#[derive(Clone, Debug, Default)]
pub struct RandomIdGenerator {
    _private: (),
}

impl IdGenerator for RandomIdGenerator {
    fn new_span_id(&self) -> SpanId {
        CURRENT_RNG.with(|rng| SpanId::from(rng.borrow_mut().gen::<u64>()))
    }
}

thread_local! {
    /// Store random number generator for each thread
    static CURRENT_RNG: RefCell<rngs::SmallRng> = RefCell::new(rngs::SmallRng::from_entropy());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_independent() {
        let generator = RandomIdGenerator::default();
        let first = generator.new_span_id();
        let second = generator.new_span_id();
        assert_ne!(first, second);
    }
}
