//! Static description of the task's configuration fields.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use slack_notify::{ChannelType, ColorType};

/// One configurable field as presented to the pipeline host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    #[serde(skip)]
    pub key: &'static str,
    #[serde(rename = "display-name")]
    pub display_name: &'static str,
    #[serde(rename = "default-value")]
    pub default_value: &'static str,
    /// Sent as a string, which is what the host expects.
    #[serde(rename = "display-order", serialize_with = "display_order_string")]
    pub display_order: u32,
    pub required: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's serialize_with signature
fn display_order_string<S: Serializer>(order: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(order)
}

const fn field(
    key: &'static str,
    display_name: &'static str,
    default_value: &'static str,
    display_order: u32,
    required: bool,
) -> FieldDefinition {
    FieldDefinition {
        key,
        display_name,
        default_value,
        display_order,
        required,
    }
}

/// Every field, in display order.
pub static FIELDS: [FieldDefinition; 9] = [
    field("WebhookUrl", "Webhook URL", "", 0, true),
    field("Channel", "Channel", "", 1, true),
    field("ChannelType", "Channel Type", ChannelType::Channel.as_str(), 2, true),
    field("Title", "Title", "", 3, false),
    field("IconOrEmoji", "Icon or Emoji", "", 4, false),
    field("Message", "Message", "", 5, false),
    field("DisplayName", "Display Name", "", 6, false),
    field("ColorType", "Color Type", ColorType::None.as_str(), 7, false),
    field("Color", "Color", "", 8, false),
];

/// The ordered configuration schema.
#[must_use]
pub fn describe_configuration() -> &'static [FieldDefinition] {
    &FIELDS
}

/// Host wire form of the schema: an object keyed by field key.
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationResponse(pub &'static [FieldDefinition]);

impl Serialize for ConfigurationResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in self.0 {
            map.serialize_entry(field.key, field)?;
        }
        map.end()
    }
}
