//! Error types for the notification system.

use thiserror::Error;

/// Errors raised while turning host configuration into a typed [`TaskConfig`].
///
/// [`TaskConfig`]: crate::config::TaskConfig
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field was absent or blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The channel type is not one of the known values
    #[error("Unknown channel type '{0}', expected CHANNEL or USER")]
    UnknownChannelType(String),

    /// The color type is not one of the known values
    #[error("Unknown color type '{0}', expected NONE, GOOD, WARNING, DANGER or CUSTOM")]
    UnknownColorType(String),
}

impl ConfigError {
    /// Key of the configuration field this error is about.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => *field,
            Self::UnknownChannelType(_) => "ChannelType",
            Self::UnknownColorType(_) => "ColorType",
        }
    }
}

/// Errors that can occur when delivering a message to a channel.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// HTTP request failed (connection refused, timeout, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Webhook URL could not be parsed
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(String),

    /// The webhook answered with a non-success status
    #[error("Slack returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

// The webhook URL embeds its token, so it never travels inside an error.
impl From<reqwest::Error> for ChannelError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.without_url())
    }
}
