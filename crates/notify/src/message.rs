//! The fully resolved message handed to a channel.

use crate::config::{TaskConfig, TaskContext};
use crate::format::MessageFormatter;

/// A message with every placeholder and color already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackMessage {
    title: String,
    text: String,
    icon_or_emoji: Option<String>,
    color: Option<String>,
    display_name: Option<String>,
}

impl SlackMessage {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        icon_or_emoji: Option<String>,
        color: Option<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            icon_or_emoji: icon_or_emoji.filter(|i| !i.is_empty()),
            color,
            display_name: display_name.filter(|n| !n.is_empty()),
        }
    }

    /// Render `config` against the task's environment variables.
    ///
    /// Title, message and display name are templated; the icon and color
    /// are used literally.
    #[must_use]
    pub fn render(config: &TaskConfig, context: &TaskContext) -> Self {
        let formatter = MessageFormatter::new(&context.environment_variables);

        Self::new(
            formatter.format(config.title.as_deref()),
            formatter.format(config.message.as_deref()),
            config.icon_or_emoji.clone(),
            config.resolved_color(),
            Some(formatter.format(config.display_name.as_deref())),
        )
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn icon_or_emoji(&self) -> Option<&str> {
        self.icon_or_emoji.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}
