//! Formatting choices applied across a generated document

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How section headers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Hierarchical numbering (1., 1.1., 1.1.1.)
    Numbered,
    /// Unadorned header text
    Plain,
    /// Leading icon per header
    Icon,
}

impl HeaderStyle {
    pub const ALLOWED: &'static str = "numbered, plain, icon";

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderStyle::Numbered => "numbered",
            HeaderStyle::Plain => "plain",
            HeaderStyle::Icon => "icon",
        }
    }
}

impl fmt::Display for HeaderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HeaderStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "numbered" => Ok(HeaderStyle::Numbered),
            "plain" => Ok(HeaderStyle::Plain),
            "icon" => Ok(HeaderStyle::Icon),
            _ => Err(ConfigError::UnknownChoice {
                kind: "header style",
                value: s.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Visual treatment for callout boxes (notes, warnings, tips).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutStyle {
    /// Confluence-style info panels
    Confluence,
    /// GitHub-style blockquote admonitions
    Github,
    /// Plain bordered boxes
    Minimal,
}

impl CalloutStyle {
    pub const ALLOWED: &'static str = "confluence, github, minimal";

    pub fn as_str(&self) -> &'static str {
        match self {
            CalloutStyle::Confluence => "confluence",
            CalloutStyle::Github => "github",
            CalloutStyle::Minimal => "minimal",
        }
    }
}

impl fmt::Display for CalloutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CalloutStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "confluence" => Ok(CalloutStyle::Confluence),
            "github" => Ok(CalloutStyle::Github),
            "minimal" => Ok(CalloutStyle::Minimal),
            _ => Err(ConfigError::UnknownChoice {
                kind: "callout style",
                value: s.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Where screenshot placeholders sit relative to the text they illustrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenshotPlacement {
    /// In the text flow, directly after the step
    Inline,
    /// In a side column next to the step
    Sidebar,
    /// Full-width with annotation markers
    Annotated,
}

impl ScreenshotPlacement {
    pub const ALLOWED: &'static str = "inline, sidebar, annotated";

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenshotPlacement::Inline => "inline",
            ScreenshotPlacement::Sidebar => "sidebar",
            ScreenshotPlacement::Annotated => "annotated",
        }
    }
}

impl fmt::Display for ScreenshotPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScreenshotPlacement {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "inline" => Ok(ScreenshotPlacement::Inline),
            "sidebar" => Ok(ScreenshotPlacement::Sidebar),
            "annotated" => Ok(ScreenshotPlacement::Annotated),
            _ => Err(ConfigError::UnknownChoice {
                kind: "screenshot placement",
                value: s.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Color theme for rendered code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockTheme {
    /// Light background
    Light,
    /// Dark background
    Dark,
    /// Follow the destination's theme
    Auto,
}

impl CodeBlockTheme {
    pub const ALLOWED: &'static str = "light, dark, auto";

    pub fn as_str(&self) -> &'static str {
        match self {
            CodeBlockTheme::Light => "light",
            CodeBlockTheme::Dark => "dark",
            CodeBlockTheme::Auto => "auto",
        }
    }
}

impl fmt::Display for CodeBlockTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CodeBlockTheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "light" => Ok(CodeBlockTheme::Light),
            "dark" => Ok(CodeBlockTheme::Dark),
            "auto" => Ok(CodeBlockTheme::Auto),
            _ => Err(ConfigError::UnknownChoice {
                kind: "code block theme",
                value: s.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// The formatting choices applied across a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingOptions {
    /// Section header rendering
    pub header_style: HeaderStyle,
    /// Callout box treatment
    pub callout_style: CalloutStyle,
    /// Screenshot placeholder placement
    pub screenshot_placement: ScreenshotPlacement,
    /// Code block color theme
    pub code_block_theme: CodeBlockTheme,
}

impl FormattingOptions {
    /// Wire-format names of every formatting field, as accepted by field overrides.
    pub const FIELDS: [&'static str; 4] = [
        "headerStyle",
        "calloutStyle",
        "screenshotPlacement",
        "codeBlockTheme",
    ];
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            header_style: HeaderStyle::Numbered,
            callout_style: CalloutStyle::Confluence,
            screenshot_placement: ScreenshotPlacement::Inline,
            code_block_theme: CodeBlockTheme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_serde_is_lowercase() {
        let options = FormattingOptions {
            header_style: HeaderStyle::Icon,
            callout_style: CalloutStyle::Github,
            screenshot_placement: ScreenshotPlacement::Annotated,
            code_block_theme: CodeBlockTheme::Auto,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"headerStyle\":\"icon\""));
        assert!(json.contains("\"calloutStyle\":\"github\""));
        assert!(json.contains("\"screenshotPlacement\":\"annotated\""));
        assert!(json.contains("\"codeBlockTheme\":\"auto\""));
    }

    #[test]
    fn test_parse_rejects_unknown_choice() {
        let result = "fancy".parse::<HeaderStyle>();
        assert!(matches!(
            result,
            Err(ConfigError::UnknownChoice { kind: "header style", .. })
        ));
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("numbered".parse::<HeaderStyle>().unwrap(), HeaderStyle::Numbered);
        assert_eq!("minimal".parse::<CalloutStyle>().unwrap(), CalloutStyle::Minimal);
        assert_eq!(
            "sidebar".parse::<ScreenshotPlacement>().unwrap(),
            ScreenshotPlacement::Sidebar
        );
        assert_eq!("dark".parse::<CodeBlockTheme>().unwrap(), CodeBlockTheme::Dark);
    }

    #[test]
    fn test_field_names_round_trip() {
        let value = serde_json::to_value(FormattingOptions::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), FormattingOptions::FIELDS.len());
        for field in FormattingOptions::FIELDS {
            assert!(object.contains_key(field), "missing key: {}", field);
        }
    }
}
