//! Slack incoming-webhook channel.

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ChannelType, TaskConfig};
use crate::error::ChannelError;
use crate::message::SlackMessage;
use crate::NotifyChannel;

/// Posts messages to a Slack incoming webhook.
///
/// The webhook URL carries its own token, so it is treated as a secret and
/// only its host is ever logged.
#[derive(Debug, Clone)]
pub struct SlackChannel {
    webhook_url: String,
    channel_type: ChannelType,
    channel: String,
    client: reqwest::Client,
}

impl SlackChannel {
    /// Create a Slack channel posting to `webhook_url`.
    ///
    /// `client` is shared so concurrent tasks reuse one connection pool;
    /// its timeouts bound how long a delivery may hang.
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        webhook_url: impl Into<String>,
        channel_type: ChannelType,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            channel_type,
            channel: channel.into(),
            client,
        }
    }

    /// Create a Slack channel from task configuration.
    #[must_use]
    pub fn from_config(client: reqwest::Client, config: &TaskConfig) -> Self {
        Self::new(
            client,
            config.webhook_url.clone(),
            config.channel_type,
            config.channel.clone(),
        )
    }

    /// Build the webhook payload for a message.
    fn format_payload<'a>(&'a self, message: &'a SlackMessage) -> SlackPayload<'a> {
        let (channel, user) = match self.channel_type {
            ChannelType::Channel => (Some(self.channel.as_str()), None),
            ChannelType::User => (None, Some(self.channel.as_str())),
        };

        // A leading colon marks an emoji code such as `:rocket:`.
        let (icon_emoji, icon_url) = match message.icon_or_emoji() {
            Some(icon) if icon.starts_with(':') => (Some(icon), None),
            Some(icon) => (None, Some(icon)),
            None => (None, None),
        };

        SlackPayload {
            channel,
            user,
            icon_emoji,
            icon_url,
            username: message.display_name(),
            attachments: [SlackAttachment {
                title: message.title(),
                text: message.text(),
                color: message.color(),
            }],
        }
    }
}

#[async_trait]
impl NotifyChannel for SlackChannel {
    fn name(&self) -> &'static str {
        "slack"
    }

    async fn send(&self, message: &SlackMessage) -> Result<(), ChannelError> {
        let url = Url::parse(&self.webhook_url)
            .map_err(|e| ChannelError::InvalidUrl(format!("{e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ChannelError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }
        let host = url.host_str().unwrap_or_default().to_string();

        let payload = self.format_payload(message);

        debug!(
            channel = "slack",
            host = %host,
            target_type = self.channel_type.as_str(),
            "Sending notification"
        );

        let response = self.client.post(url).json(&payload).send().await?;

        if response.status().is_success() {
            debug!(channel = "slack", host = %host, "Notification sent successfully");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            warn!(
                channel = "slack",
                host = %host,
                status = %status,
                body = %body,
                "Slack webhook request failed"
            );

            Err(ChannelError::Status { status, body })
        }
    }
}

// =============================================================================
// Slack API types
// =============================================================================

#[derive(Debug, Serialize)]
struct SlackPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_emoji: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    attachments: [SlackAttachment<'a>; 1],
}

#[derive(Debug, Serialize)]
struct SlackAttachment<'a> {
    title: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message(icon: Option<&str>) -> SlackMessage {
        SlackMessage::new(
            "app #17",
            "Build passed",
            icon.map(str::to_string),
            Some("good".to_string()),
            None,
        )
    }

    fn payload_json(channel: &SlackChannel, message: &SlackMessage) -> serde_json::Value {
        serde_json::to_value(channel.format_payload(message)).unwrap()
    }

    #[test]
    fn test_payload_targets_channel() {
        let slack = SlackChannel::new(
            reqwest::Client::new(),
            "https://hooks.example/abc",
            ChannelType::Channel,
            "#builds",
        );
        assert_eq!(
            payload_json(&slack, &message(None)),
            json!({
                "channel": "#builds",
                "attachments": [{ "title": "app #17", "text": "Build passed", "color": "good" }]
            })
        );
    }

    #[test]
    fn test_payload_targets_user() {
        let slack = SlackChannel::new(
            reqwest::Client::new(),
            "https://hooks.example/abc",
            ChannelType::User,
            "@alice",
        );
        let payload = payload_json(&slack, &message(None));
        assert_eq!(payload["user"], "@alice");
        assert!(payload.get("channel").is_none());
    }

    #[test]
    fn test_payload_icon_selection() {
        let slack = SlackChannel::new(
            reqwest::Client::new(),
            "https://hooks.example/abc",
            ChannelType::Channel,
            "#builds",
        );

        let payload = payload_json(&slack, &message(Some(":rocket:")));
        assert_eq!(payload["icon_emoji"], ":rocket:");
        assert!(payload.get("icon_url").is_none());

        let payload = payload_json(&slack, &message(Some("https://example.com/go.png")));
        assert_eq!(payload["icon_url"], "https://example.com/go.png");
        assert!(payload.get("icon_emoji").is_none());
    }

    #[test]
    fn test_payload_optional_fields() {
        let slack = SlackChannel::new(
            reqwest::Client::new(),
            "https://hooks.example/abc",
            ChannelType::Channel,
            "#builds",
        );
        let bare = SlackMessage::new("", "", None, None, None);
        let payload = payload_json(&slack, &bare);
        assert!(payload.get("username").is_none());
        assert_eq!(payload["attachments"], json!([{ "title": "", "text": "" }]));

        let named = SlackMessage::new("t", "b", None, None, Some("GoCD".to_string()));
        assert_eq!(payload_json(&slack, &named)["username"], "GoCD");
    }

    #[tokio::test]
    async fn test_send_posts_json_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/services/T000/B000/XXX"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "channel": "#builds",
                "icon_emoji": ":rocket:",
                "attachments": [{ "title": "app #17", "text": "Build passed", "color": "good" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let slack = SlackChannel::new(
            reqwest::Client::new(),
            format!("{}/services/T000/B000/XXX", server.uri()),
            ChannelType::Channel,
            "#builds",
        );

        slack.send(&message(Some(":rocket:"))).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_non_success_status_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no_service"))
            .expect(1)
            .mount(&server)
            .await;

        let slack = SlackChannel::new(
            reqwest::Client::new(),
            server.uri(),
            ChannelType::Channel,
            "#builds",
        );

        let err = slack.send(&message(None)).await.unwrap_err();
        match err {
            ChannelError::Status { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body, "no_service");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_invalid_url() {
        let slack = SlackChannel::new(
            reqwest::Client::new(),
            "not a url",
            ChannelType::Channel,
            "#builds",
        );
        assert!(matches!(
            slack.send(&message(None)).await,
            Err(ChannelError::InvalidUrl(_))
        ));

        let slack = SlackChannel::new(
            reqwest::Client::new(),
            "ftp://hooks.example/abc",
            ChannelType::Channel,
            "#builds",
        );
        assert!(matches!(
            slack.send(&message(None)).await,
            Err(ChannelError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_send_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let slack = SlackChannel::new(
            reqwest::Client::new(),
            format!("http://{addr}/services/T000/B000/SECRETTOKEN"),
            ChannelType::Channel,
            "#builds",
        );
        let err = slack.send(&message(None)).await.unwrap_err();
        assert!(matches!(err, ChannelError::Http(_)));

        let rendered = format!("{err} {err:?}");
        assert!(!rendered.contains("SECRETTOKEN"), "token leaked: {rendered}");
    }
}
