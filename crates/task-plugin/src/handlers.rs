//! Handlers for the four host operations.

use reqwest::Url;
use slack_notify::{NotifyChannel, RawTaskConfig, SlackChannel, SlackMessage, TaskConfig};
use tracing::{debug, error, info, warn};

use crate::error::PluginError;
use crate::request::{
    ExecuteRequest, ExecuteResult, PluginResponse, RequestName, ValidationResult, ViewResult,
};
use crate::schema::{describe_configuration, ConfigurationResponse};
use crate::settings::PluginSettings;
use crate::view::ViewTemplates;

/// Label the host shows for this task.
pub const DISPLAY_VALUE: &str = "Slack";

/// The task plugin: stateless apart from the shared HTTP client and the
/// template location, so one instance serves any number of concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct SlackTaskPlugin {
    http: reqwest::Client,
    views: ViewTemplates,
}

impl SlackTaskPlugin {
    #[must_use]
    pub fn new(http: reqwest::Client, views: ViewTemplates) -> Self {
        Self { http, views }
    }

    /// Build a plugin from process settings.
    pub fn from_settings(settings: &PluginSettings) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            settings.http_client()?,
            settings.view_templates(),
        ))
    }

    /// Dispatch a host request by name.
    ///
    /// Never fails: every error becomes a response for the host.
    pub async fn handle(&self, request_name: &str, body: &str) -> PluginResponse {
        info!(request = request_name, "Handle received message");

        let result = match request_name.parse::<RequestName>() {
            Ok(RequestName::Configuration) => Ok(Self::configuration()),
            Ok(RequestName::Validate) => Self::validate(body),
            Ok(RequestName::Execute) => self.execute(body).await,
            Ok(RequestName::View) => Ok(self.view().await),
            Err(e) => Err(e),
        };

        result.unwrap_or_else(|e| {
            warn!(request = request_name, error = %e, "Request rejected");
            PluginResponse::from(e)
        })
    }

    fn configuration() -> PluginResponse {
        PluginResponse::ok(&ConfigurationResponse(describe_configuration()))
    }

    fn validate(body: &str) -> Result<PluginResponse, PluginError> {
        let raw: RawTaskConfig = serde_json::from_str(body)?;
        let result = validate_config(&raw);
        if !result.is_valid() {
            debug!(errors = ?result.errors, "Configuration has problems");
        }
        Ok(PluginResponse::ok(&result))
    }

    async fn execute(&self, body: &str) -> Result<PluginResponse, PluginError> {
        let request: ExecuteRequest = serde_json::from_str(body)?;

        let config = match TaskConfig::try_from(request.config) {
            Ok(config) => config,
            Err(e) => {
                warn!(field = e.field(), error = %e, "Invalid task configuration");
                return Ok(PluginResponse::ok(&ExecuteResult::failure(e.to_string())));
            }
        };

        let message = SlackMessage::render(&config, &request.context);
        let channel = SlackChannel::from_config(self.http.clone(), &config);
        let result = deliver(&channel, &message, &config.channel).await;

        Ok(PluginResponse::ok(&result))
    }

    async fn view(&self) -> PluginResponse {
        match self.views.task_template().await {
            Ok(template) => PluginResponse::ok(&ViewResult {
                display_value: DISPLAY_VALUE,
                template,
            }),
            Err(e) => {
                let message = format!("Failed to find template: {e}");
                error!(error = %e, "{message}");
                let mut response = PluginResponse::internal_error(message);
                response.body["displayValue"] = DISPLAY_VALUE.into();
                response
            }
        }
    }
}

/// Check a submitted configuration field by field.
#[must_use]
pub fn validate_config(raw: &RawTaskConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    for problem in raw.problems() {
        result.errors.insert(problem.field(), problem.to_string());
    }

    if let Some(url) = raw.webhook_url.non_blank() {
        let usable = Url::parse(url.trim())
            .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.has_host());
        if !usable {
            result.errors.insert(
                "WebhookUrl",
                "WebhookUrl must be an absolute http or https URL".to_string(),
            );
        }
    }

    result
}

/// Send `message` once and report the outcome in the host's terms.
pub async fn deliver(
    channel: &dyn NotifyChannel,
    message: &SlackMessage,
    target: &str,
) -> ExecuteResult {
    match channel.send(message).await {
        Ok(()) => {
            info!(channel = channel.name(), channel_id = target, "Message delivered");
            ExecuteResult::success(format!("Message sent to Slack {target}"))
        }
        Err(e) => {
            error!(
                channel = channel.name(),
                channel_id = target,
                error = %e,
                "Could not send message"
            );
            ExecuteResult::failure(format!("Could not send message to Slack: {e}"))
        }
    }
}
