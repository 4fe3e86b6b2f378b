//! Process settings shared by the `serve` and `handle` commands.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::view::ViewTemplates;

#[derive(Debug, Clone, Args)]
pub struct PluginSettings {
    /// Directory holding a `task.template.html` that replaces the bundled one
    #[arg(long, env = "SLACK_TASK_VIEWS_DIR")]
    pub views_dir: Option<PathBuf>,

    /// Overall timeout for a webhook request, in seconds
    #[arg(long, env = "SLACK_TASK_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// Connect timeout for a webhook request, in seconds
    #[arg(long, env = "SLACK_TASK_CONNECT_TIMEOUT_SECS", default_value_t = 10)]
    pub connect_timeout_secs: u64,
}

impl PluginSettings {
    /// Where the task view template comes from.
    #[must_use]
    pub fn view_templates(&self) -> ViewTemplates {
        self.views_dir
            .clone()
            .map_or_else(ViewTemplates::bundled, ViewTemplates::from_dir)
    }

    /// HTTP client used for every webhook delivery.
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .timeout(Duration::from_secs(self.http_timeout_secs))
            .build()
    }
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            views_dir: None,
            http_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_settings_serve_bundled_template() {
        let settings = PluginSettings::default();
        assert!(settings.views_dir.is_none());
        let template = settings.view_templates().task_template().await.unwrap();
        assert!(template.contains("WebhookUrl"));
    }
}
