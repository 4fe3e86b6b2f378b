//! Host request names and the response envelope.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};
use slack_notify::{RawTaskConfig, TaskContext};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PluginError;

/// Operations the pipeline host can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestName {
    Configuration,
    Validate,
    Execute,
    View,
}

impl RequestName {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Validate => "validate",
            Self::Execute => "execute",
            Self::View => "view",
        }
    }
}

impl FromStr for RequestName {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "configuration" => Ok(Self::Configuration),
            "validate" => Ok(Self::Validate),
            "execute" => Ok(Self::Execute),
            "view" => Ok(Self::View),
            other => Err(PluginError::UnhandledRequest(other.to_string())),
        }
    }
}

impl fmt::Display for RequestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an `execute` request.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub config: RawTaskConfig,
    #[serde(default)]
    pub context: TaskContext,
}

/// Outcome of an `execute` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecuteResult {
    pub success: bool,
    pub message: String,
}

impl ExecuteResult {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Outcome of a `validate` request: field key to problem description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: BTreeMap<&'static str, String>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Body of a `view` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResult {
    pub display_value: &'static str,
    pub template: String,
}

/// What goes back to the host: a response code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginResponse {
    pub code: StatusCode,
    pub body: Value,
}

impl PluginResponse {
    /// A 200 response with `body` serialized to JSON.
    #[must_use]
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self {
                code: StatusCode::OK,
                body,
            },
            Err(e) => Self::internal_error(format!("Failed to serialize response: {e}")),
        }
    }

    #[must_use]
    pub fn internal_error(exception: impl Into<String>) -> Self {
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "exception": exception.into() }),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }
}

impl From<PluginError> for PluginResponse {
    fn from(error: PluginError) -> Self {
        Self {
            code: error.status(),
            body: json!({ "error": error.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_names() {
        for name in [
            RequestName::Configuration,
            RequestName::Validate,
            RequestName::Execute,
            RequestName::View,
        ] {
            assert_eq!(name.as_str().parse::<RequestName>().unwrap(), name);
        }
        assert!(matches!(
            "go.cd.task.execute".parse::<RequestName>(),
            Err(PluginError::UnhandledRequest(_))
        ));
    }

    #[test]
    fn test_error_response() {
        let response = PluginResponse::from(PluginError::UnhandledRequest("nope".to_string()));
        assert_eq!(response.code, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "Unhandled request type: nope");
    }

    #[test]
    fn test_view_result_wire_names() {
        let body = serde_json::to_value(ViewResult {
            display_value: "Slack",
            template: "<div/>".to_string(),
        })
        .unwrap();
        assert_eq!(body["displayValue"], "Slack");
        assert_eq!(body["template"], "<div/>");
    }
}
