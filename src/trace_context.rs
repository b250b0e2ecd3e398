use std::fmt;
use std::num::ParseIntError;

/// An 8-byte value which identifies a given trace.
///
/// Every span reconstructed from the same inbound conversation carries the
/// same trace id.
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub struct TraceId(u64);

impl TraceId {
    /// Converts a string in base 16 to a trace id.
    ///
    /// Strings shorter than 16 hex digits are accepted without padding.
    /// Non-hex characters and values exceeding 64 bits of magnitude are
    /// rejected rather than truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use messaging_trace_propagator::TraceId;
    ///
    /// assert!(TraceId::from_hex("42").is_ok());
    /// assert!(TraceId::from_hex("58406520a0066491").is_ok());
    ///
    /// assert!(TraceId::from_hex("not_hex").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ParseIntError> {
        u64::from_str_radix(hex, 16).map(TraceId)
    }

    /// Return the trace id as a `u64`.
    pub const fn to_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for TraceId {
    fn from(value: u64) -> Self {
        TraceId(value)
    }
}

impl fmt::Debug for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:016x}", self.0))
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:016x}", self.0))
    }
}

impl fmt::LowerHex for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// An 8-byte value which identifies a given span.
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub struct SpanId(u64);

impl SpanId {
    /// Converts a string in base 16 to a span id.
    ///
    /// Uses the same codec as [`TraceId::from_hex`]: short strings are
    /// accepted, non-hex input and overlong values signal a format error.
    ///
    /// # Examples
    ///
    /// ```
    /// use messaging_trace_propagator::SpanId;
    ///
    /// assert!(SpanId::from_hex("42").is_ok());
    /// assert!(SpanId::from_hex("58406520a0066491").is_ok());
    ///
    /// assert!(SpanId::from_hex("not_hex").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ParseIntError> {
        u64::from_str_radix(hex, 16).map(SpanId)
    }

    /// Return the span id as a `u64`.
    pub const fn to_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for SpanId {
    fn from(value: u64) -> Self {
        SpanId(value)
    }
}

impl fmt::Debug for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:016x}", self.0))
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:016x}", self.0))
    }
}

impl fmt::LowerHex for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
