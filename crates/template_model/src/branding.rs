//! Brand identity settings carried across every document a team generates

use crate::error::{ConfigError, ConfigResult};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Brand identity applied to generated documents.
///
/// Only the primary color is required; the optional fields stay `None`
/// until a team fills them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    /// Primary brand color as a hex string (e.g. "#0052CC")
    pub primary_color: String,
    /// Accent color as a hex string
    pub secondary_color: Option<String>,
    /// Reference to an uploaded logo asset
    pub logo: Option<String>,
    /// Footer line printed on every page
    pub footer_text: Option<String>,
    /// Company name used in headers and cover pages
    pub company_name: Option<String>,
}

impl Branding {
    /// Wire-format names of every branding field, as accepted by field overrides.
    pub const FIELDS: [&'static str; 5] = [
        "primaryColor",
        "secondaryColor",
        "logo",
        "footerText",
        "companyName",
    ];

    /// Check the color fields and the required primary color.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.primary_color.is_empty() {
            return Err(ConfigError::MissingPrimaryColor);
        }
        if !is_valid_hex_color(&self.primary_color) {
            return Err(ConfigError::InvalidColor {
                field: "primaryColor",
                value: self.primary_color.clone(),
            });
        }
        if let Some(secondary) = &self.secondary_color {
            if !is_valid_hex_color(secondary) {
                return Err(ConfigError::InvalidColor {
                    field: "secondaryColor",
                    value: secondary.clone(),
                });
            }
        }
        Ok(())
    }

    /// Merge a preset underneath the current branding.
    ///
    /// Values already set here survive unchanged; the preset only fills
    /// fields that are still unset. The primary color always has a value,
    /// so the current one always wins.
    pub fn merge_preset(&self, preset: &Branding) -> Branding {
        Branding {
            primary_color: self.primary_color.clone(),
            secondary_color: self
                .secondary_color
                .clone()
                .or_else(|| preset.secondary_color.clone()),
            logo: self.logo.clone().or_else(|| preset.logo.clone()),
            footer_text: self
                .footer_text
                .clone()
                .or_else(|| preset.footer_text.clone()),
            company_name: self
                .company_name
                .clone()
                .or_else(|| preset.company_name.clone()),
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            primary_color: "#0052CC".to_string(),
            secondary_color: None,
            logo: None,
            footer_text: None,
            company_name: None,
        }
    }
}

/// Check whether a string is a `#RGB`, `#RRGGBB`, or `#RRGGBBAA` hex color.
pub fn is_valid_hex_color(value: &str) -> bool {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}
