//! Deriving span names from transport channels.
//!
//! Channel implementations differ in which identity facilities they expose,
//! so naming degrades through fixed tiers instead of failing: a component
//! name when the channel has a non-empty one, then a fully qualified name,
//! then the channel's plain textual form.

use std::fmt;

/// If a span comes from messaging components then it will have this value
/// as a prefix to its name.
///
/// Example of a span name: `message:foo`, where `message` is the prefix and
/// `foo` is the channel name.
pub const MESSAGE_COMPONENT: &str = "message";

/// A transport channel, seen only through its identity facilities.
///
/// The `Display` impl is the channel's generic textual form and the last
/// naming tier; the optional accessors expose the richer facilities when a
/// channel implementation has them.
pub trait MessageChannel: fmt::Display {
    /// Component-level display name, when the channel has one.
    fn component_name(&self) -> Option<&str> {
        None
    }

    /// Fully qualified name within a hierarchical channel namespace.
    fn full_channel_name(&self) -> Option<&str> {
        None
    }
}

/// Derive a display name for the channel.
///
/// Resolution order, first match wins: non-empty component name, fully
/// qualified name, generic textual form. Always produces some string.
pub fn channel_name(channel: &dyn MessageChannel) -> String {
    match (channel.component_name(), channel.full_channel_name()) {
        (Some(name), _) if !name.is_empty() => name.to_owned(),
        (_, Some(full_name)) => full_name.to_owned(),
        _ => channel.to_string(),
    }
}

/// The channel's display name under the messaging span-name prefix.
///
/// Spans named this way are recognizable as messaging-originated, as
/// opposed to spans created by other instrumentation categories.
pub fn message_channel_name(channel: &dyn MessageChannel) -> String {
    format!("{}:{}", MESSAGE_COMPONENT, channel_name(channel))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedChannel {
        component_name: &'static str,
        full_channel_name: &'static str,
    }

    impl MessageChannel for NamedChannel {
        fn component_name(&self) -> Option<&str> {
            Some(self.component_name)
        }

        fn full_channel_name(&self) -> Option<&str> {
            Some(self.full_channel_name)
        }
    }

    impl fmt::Display for NamedChannel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "NamedChannel@1f2e3d")
        }
    }

    struct QualifiedChannel;

    impl MessageChannel for QualifiedChannel {
        fn full_channel_name(&self) -> Option<&str> {
            Some("application.orders.input")
        }
    }

    impl fmt::Display for QualifiedChannel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "QualifiedChannel@4b5c6a")
        }
    }

    struct PlainChannel;

    impl MessageChannel for PlainChannel {}

    impl fmt::Display for PlainChannel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "PlainChannel@7d8e9f")
        }
    }

    #[test]
    fn component_name_wins() {
        let channel = NamedChannel {
            component_name: "orders",
            full_channel_name: "application.orders.input",
        };
        assert_eq!(channel_name(&channel), "orders");
    }

    #[test]
    fn empty_component_name_falls_through() {
        let channel = NamedChannel {
            component_name: "",
            full_channel_name: "application.orders.input",
        };
        assert_eq!(channel_name(&channel), "application.orders.input");
    }

    #[test]
    fn full_channel_name_when_unnamed() {
        assert_eq!(channel_name(&QualifiedChannel), "application.orders.input");
    }

    #[test]
    fn textual_form_as_last_resort() {
        assert_eq!(channel_name(&PlainChannel), "PlainChannel@7d8e9f");
    }

    #[test]
    fn message_channel_name_is_prefixed_for_every_tier() {
        let named = NamedChannel {
            component_name: "orders",
            full_channel_name: "application.orders.input",
        };

        let names = vec![
            message_channel_name(&named),
            message_channel_name(&QualifiedChannel),
            message_channel_name(&PlainChannel),
        ];

        assert_eq!(names[0], "message:orders");
        for name in names {
            let rest = name.strip_prefix("message:").unwrap();
            assert!(!rest.is_empty());
        }
    }
}
