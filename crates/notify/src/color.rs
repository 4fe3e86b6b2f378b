//! Attachment color selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How the attachment color is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorType {
    /// No color on the attachment
    #[default]
    None,
    /// Slack's green severity color
    Good,
    /// Slack's yellow severity color
    Warning,
    /// Slack's red severity color
    Danger,
    /// The user-supplied color value
    Custom,
}

impl ColorType {
    /// Host-facing name of this color type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Good => "GOOD",
            Self::Warning => "WARNING",
            Self::Danger => "DANGER",
            Self::Custom => "CUSTOM",
        }
    }

    /// Resolve the attachment color.
    ///
    /// Named severities always win over `raw`. Only [`ColorType::Custom`]
    /// looks at `raw`; it is trimmed and a blank value counts as no color.
    #[must_use]
    pub fn resolve(self, raw: Option<&str>) -> Option<String> {
        match self {
            Self::None => None,
            Self::Good => Some("good".to_string()),
            Self::Warning => Some("warning".to_string()),
            Self::Danger => Some("danger".to_string()),
            Self::Custom => raw
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }
}

impl FromStr for ColorType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "GOOD" => Ok(Self::Good),
            "WARNING" => Ok(Self::Warning),
            "DANGER" => Ok(Self::Danger),
            "CUSTOM" => Ok(Self::Custom),
            other => Err(ConfigError::UnknownColorType(other.to_string())),
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_color() {
        assert_eq!(
            ColorType::Custom.resolve(Some("F00F00")).as_deref(),
            Some("F00F00")
        );
        assert_eq!(ColorType::Custom.resolve(None), None);
        assert_eq!(ColorType::Custom.resolve(Some("")), None);
    }

    #[test]
    fn test_custom_color_is_trimmed() {
        assert_eq!(ColorType::Custom.resolve(Some("   ")), None);
        assert_eq!(
            ColorType::Custom.resolve(Some(" #36a64f ")).as_deref(),
            Some("#36a64f")
        );
    }

    #[test]
    fn test_no_color() {
        assert_eq!(ColorType::None.resolve(Some("F00F00")), None);
        assert_eq!(ColorType::None.resolve(None), None);
    }

    #[test]
    fn test_named_colors_ignore_raw_value() {
        let cases = [
            (ColorType::Good, "good"),
            (ColorType::Warning, "warning"),
            (ColorType::Danger, "danger"),
        ];
        for (color_type, expected) in cases {
            assert_eq!(color_type.resolve(Some("F00F00")).as_deref(), Some(expected));
            assert_eq!(color_type.resolve(None).as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("DANGER".parse::<ColorType>(), Ok(ColorType::Danger));
        assert_eq!(
            "purple".parse::<ColorType>(),
            Err(ConfigError::UnknownColorType("purple".to_string()))
        );
    }
}
