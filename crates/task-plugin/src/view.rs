//! Task view template loading.

use std::path::PathBuf;

use crate::error::PluginError;

pub const TEMPLATE_FILE: &str = "task.template.html";

/// Template compiled into the binary.
const BUNDLED_TEMPLATE: &str = include_str!("../views/task.template.html");

/// Source of the task view template.
///
/// The bundled copy is used unless an override directory is set, in which
/// case the template is read from it on each request.
#[derive(Debug, Clone, Default)]
pub struct ViewTemplates {
    dir: Option<PathBuf>,
}

impl ViewTemplates {
    /// Serve the template compiled into the binary.
    #[must_use]
    pub const fn bundled() -> Self {
        Self { dir: None }
    }

    /// Read `task.template.html` from `dir` instead of the bundled copy.
    #[must_use]
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub async fn task_template(&self) -> Result<String, PluginError> {
        let Some(dir) = &self.dir else {
            return Ok(BUNDLED_TEMPLATE.to_string());
        };

        let path = dir.join(TEMPLATE_FILE);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| PluginError::Template { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bundled_template() {
        let template = ViewTemplates::bundled().task_template().await.unwrap();
        for key in ["WebhookUrl", "Channel", "ChannelType", "ColorType", "Color"] {
            assert!(template.contains(key), "template is missing {key}");
        }
    }

    #[tokio::test]
    async fn test_override_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TEMPLATE_FILE), "<div>custom</div>").unwrap();
        let template = ViewTemplates::from_dir(dir.path())
            .task_template()
            .await
            .unwrap();
        assert_eq!(template, "<div>custom</div>");
    }

    #[tokio::test]
    async fn test_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewTemplates::from_dir(dir.path())
            .task_template()
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::Template { .. }));
        assert!(err.to_string().contains(TEMPLATE_FILE));
    }
}
