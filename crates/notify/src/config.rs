//! Task configuration as submitted by the pipeline host.
//!
//! The host sends every setting as a property object keyed by field name:
//!
//! ```json
//! { "WebhookUrl": { "value": "https://hooks.slack.com/services/..." },
//!   "Channel": { "value": "#builds" },
//!   "ColorType": { "value": "GOOD" } }
//! ```
//!
//! [`RawTaskConfig`] mirrors that shape; [`TaskConfig`] is the checked,
//! typed form used to build a message.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::color::ColorType;
use crate::error::ConfigError;

/// Whether the channel identifier names a channel or a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelType {
    #[default]
    Channel,
    User,
}

impl ChannelType {
    /// Host-facing name of this channel type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Channel => "CHANNEL",
            Self::User => "USER",
        }
    }
}

impl FromStr for ChannelType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHANNEL" => Ok(Self::Channel),
            "USER" => Ok(Self::User),
            other => Err(ConfigError::UnknownChannelType(other.to_string())),
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single host property. Only `value` matters here; `secure` and
/// `required` echo the schema and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub value: Option<String>,
}

impl Property {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// The value, treating blank strings as unset.
    #[must_use]
    pub fn non_blank(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// Configuration exactly as the host submitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTaskConfig {
    #[serde(rename = "WebhookUrl", default)]
    pub webhook_url: Property,
    #[serde(rename = "Channel", default)]
    pub channel: Property,
    #[serde(rename = "ChannelType", default)]
    pub channel_type: Property,
    #[serde(rename = "Title", default)]
    pub title: Property,
    #[serde(rename = "IconOrEmoji", default)]
    pub icon_or_emoji: Property,
    #[serde(rename = "Message", default)]
    pub message: Property,
    #[serde(rename = "DisplayName", default)]
    pub display_name: Property,
    #[serde(rename = "ColorType", default)]
    pub color_type: Property,
    #[serde(rename = "Color", default)]
    pub color: Property,
}

impl RawTaskConfig {
    /// Check every field and collect all problems instead of stopping at the
    /// first one.
    #[must_use]
    pub fn problems(&self) -> Vec<ConfigError> {
        let mut problems = Vec::new();
        if self.webhook_url.non_blank().is_none() {
            problems.push(ConfigError::MissingField("WebhookUrl"));
        }
        if self.channel.non_blank().is_none() {
            problems.push(ConfigError::MissingField("Channel"));
        }
        if let Err(e) = parse_or_default::<ChannelType>(&self.channel_type) {
            problems.push(e);
        }
        if let Err(e) = parse_or_default::<ColorType>(&self.color_type) {
            problems.push(e);
        }
        problems
    }
}

/// Blank enum values fall back to the schema default.
fn parse_or_default<T>(property: &Property) -> Result<T, ConfigError>
where
    T: FromStr<Err = ConfigError> + Default,
{
    property
        .non_blank()
        .map_or_else(|| Ok(T::default()), |v| v.trim().parse())
}

fn optional(property: Property) -> Option<String> {
    property.value.filter(|v| !v.is_empty())
}

/// Validated task configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskConfig {
    pub webhook_url: String,
    pub channel: String,
    pub channel_type: ChannelType,
    pub title: Option<String>,
    pub message: Option<String>,
    pub icon_or_emoji: Option<String>,
    pub display_name: Option<String>,
    pub color_type: ColorType,
    pub color: Option<String>,
}

impl TaskConfig {
    /// The attachment color this configuration asks for.
    #[must_use]
    pub fn resolved_color(&self) -> Option<String> {
        self.color_type.resolve(self.color.as_deref())
    }
}

impl TryFrom<RawTaskConfig> for TaskConfig {
    type Error = ConfigError;

    fn try_from(raw: RawTaskConfig) -> Result<Self, Self::Error> {
        let webhook_url = raw
            .webhook_url
            .non_blank()
            .ok_or(ConfigError::MissingField("WebhookUrl"))?
            .trim()
            .to_string();
        let channel = raw
            .channel
            .non_blank()
            .ok_or(ConfigError::MissingField("Channel"))?
            .to_string();
        let channel_type = parse_or_default(&raw.channel_type)?;
        let color_type = parse_or_default(&raw.color_type)?;

        Ok(Self {
            webhook_url,
            channel,
            channel_type,
            title: optional(raw.title),
            message: optional(raw.message),
            icon_or_emoji: optional(raw.icon_or_emoji),
            display_name: optional(raw.display_name),
            color_type,
            color: optional(raw.color),
        })
    }
}

/// Execution context supplied alongside the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskContext {
    #[serde(default)]
    pub environment_variables: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}
