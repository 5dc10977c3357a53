//! Schema-checked single-field overrides
//!
//! Config edits arrive from the UI one field at a time, addressed by the
//! config group and the field's wire name. Every override is checked
//! against the fixed schema before anything is written, so a bad edit
//! fails fast and the original configuration is never half-updated.

use crate::branding::{is_valid_hex_color, Branding};
use crate::config::TemplateConfig;
use crate::error::ConfigError;
use crate::formatting::FormattingOptions;
use crate::layout::LayoutOptions;
use crate::sections::SectionToggles;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four config groups a field override can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigGroup {
    Layout,
    Sections,
    Formatting,
    Branding,
}

impl fmt::Display for ConfigGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigGroup::Layout => "layout",
            ConfigGroup::Sections => "sections",
            ConfigGroup::Formatting => "formatting",
            ConfigGroup::Branding => "branding",
        };
        write!(f, "{}", name)
    }
}

/// A value supplied for a single field override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Toggle value for layout and section fields
    Bool(bool),
    /// Text value for formatting choices and branding fields
    Text(String),
    /// Clears an optional branding field
    Clear,
}

impl TryFrom<&serde_json::Value> for FieldValue {
    type Error = PatchError;

    fn try_from(value: &serde_json::Value) -> Result<Self, PatchError> {
        match value {
            serde_json::Value::Bool(b) => Ok(FieldValue::Bool(*b)),
            serde_json::Value::String(s) => Ok(FieldValue::Text(s.clone())),
            serde_json::Value::Null => Ok(FieldValue::Clear),
            other => Err(PatchError::UnsupportedValue {
                kind: json_kind(other),
            }),
        }
    }
}

/// Errors produced when a field override fails its schema check.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Unknown field {field:?} in {group} config")]
    UnknownField { group: ConfigGroup, field: String },

    #[error("Field {field:?} in {group} config expects {expected}")]
    TypeMismatch {
        group: ConfigGroup,
        field: String,
        expected: &'static str,
    },

    #[error("Field {field:?} is required and cannot be cleared")]
    RequiredField { field: &'static str },

    #[error("Unsupported override value of type {kind}")]
    UnsupportedValue { kind: &'static str },

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

pub type PatchResult<T> = std::result::Result<T, PatchError>;

impl TemplateConfig {
    /// Return a copy of this configuration with one field overridden.
    ///
    /// The override is checked against the group's schema first: an unknown
    /// field name, a value of the wrong shape, or a formatting choice outside
    /// its closed set all fail without touching anything. On success exactly
    /// the addressed field differs from `self`.
    pub fn with_field(
        &self,
        group: ConfigGroup,
        field: &str,
        value: FieldValue,
    ) -> PatchResult<TemplateConfig> {
        let mut next = self.clone();
        match group {
            ConfigGroup::Layout => set_layout_field(&mut next.layout, field, value)?,
            ConfigGroup::Sections => set_section_field(&mut next.sections, field, value)?,
            ConfigGroup::Formatting => set_formatting_field(&mut next.formatting, field, value)?,
            ConfigGroup::Branding => set_branding_field(&mut next.branding, field, value)?,
        }
        Ok(next)
    }

    /// [`with_field`](Self::with_field) for a raw JSON value, as received
    /// over the wire.
    pub fn with_json_field(
        &self,
        group: ConfigGroup,
        field: &str,
        value: &serde_json::Value,
    ) -> PatchResult<TemplateConfig> {
        self.with_field(group, field, FieldValue::try_from(value)?)
    }
}

fn set_layout_field(layout: &mut LayoutOptions, field: &str, value: FieldValue) -> PatchResult<()> {
    let slot = match field {
        "includeTableOfContents" => &mut layout.include_table_of_contents,
        "includeSummary" => &mut layout.include_summary,
        "includePrerequisites" => &mut layout.include_prerequisites,
        "includeLearningObjectives" => &mut layout.include_learning_objectives,
        "includeScreenshots" => &mut layout.include_screenshots,
        "includeStepNumbers" => &mut layout.include_step_numbers,
        "includeTimeEstimates" => &mut layout.include_time_estimates,
        "includeRoleIndicators" => &mut layout.include_role_indicators,
        "includeVersionInfo" => &mut layout.include_version_info,
        "includeRelatedDocs" => &mut layout.include_related_docs,
        _ => {
            return Err(PatchError::UnknownField {
                group: ConfigGroup::Layout,
                field: field.to_string(),
            })
        }
    };
    match value {
        FieldValue::Bool(on) => {
            *slot = on;
            Ok(())
        }
        _ => Err(PatchError::TypeMismatch {
            group: ConfigGroup::Layout,
            field: field.to_string(),
            expected: "a boolean",
        }),
    }
}

fn set_section_field(
    sections: &mut SectionToggles,
    field: &str,
    value: FieldValue,
) -> PatchResult<()> {
    let slot = match field {
        "introduction" => &mut sections.introduction,
        "overview" => &mut sections.overview,
        "prerequisites" => &mut sections.prerequisites,
        "stepByStep" => &mut sections.step_by_step,
        "bestPractices" => &mut sections.best_practices,
        "troubleshooting" => &mut sections.troubleshooting,
        "faqs" => &mut sections.faqs,
        "glossary" => &mut sections.glossary,
        "appendix" => &mut sections.appendix,
        _ => {
            return Err(PatchError::UnknownField {
                group: ConfigGroup::Sections,
                field: field.to_string(),
            })
        }
    };
    match value {
        FieldValue::Bool(on) => {
            *slot = on;
            Ok(())
        }
        _ => Err(PatchError::TypeMismatch {
            group: ConfigGroup::Sections,
            field: field.to_string(),
            expected: "a boolean",
        }),
    }
}

fn set_formatting_field(
    formatting: &mut FormattingOptions,
    field: &str,
    value: FieldValue,
) -> PatchResult<()> {
    // Unknown names are reported as such even when the value is also wrong
    if !FormattingOptions::FIELDS.contains(&field) {
        return Err(PatchError::UnknownField {
            group: ConfigGroup::Formatting,
            field: field.to_string(),
        });
    }
    let text = match value {
        FieldValue::Text(text) => text,
        _ => {
            return Err(PatchError::TypeMismatch {
                group: ConfigGroup::Formatting,
                field: field.to_string(),
                expected: "a style name",
            })
        }
    };
    match field {
        "headerStyle" => formatting.header_style = text.parse()?,
        "calloutStyle" => formatting.callout_style = text.parse()?,
        "screenshotPlacement" => formatting.screenshot_placement = text.parse()?,
        "codeBlockTheme" => formatting.code_block_theme = text.parse()?,
        _ => {
            return Err(PatchError::UnknownField {
                group: ConfigGroup::Formatting,
                field: field.to_string(),
            })
        }
    }
    Ok(())
}

fn set_branding_field(branding: &mut Branding, field: &str, value: FieldValue) -> PatchResult<()> {
    match field {
        "primaryColor" => match value {
            FieldValue::Text(color) => {
                if color.is_empty() {
                    return Err(ConfigError::MissingPrimaryColor.into());
                }
                if !is_valid_hex_color(&color) {
                    return Err(ConfigError::InvalidColor {
                        field: "primaryColor",
                        value: color,
                    }
                    .into());
                }
                branding.primary_color = color;
            }
            FieldValue::Clear => {
                return Err(PatchError::RequiredField {
                    field: "primaryColor",
                })
            }
            FieldValue::Bool(_) => {
                return Err(PatchError::TypeMismatch {
                    group: ConfigGroup::Branding,
                    field: field.to_string(),
                    expected: "a color string",
                })
            }
        },
        "secondaryColor" => match value {
            FieldValue::Text(color) => {
                if !is_valid_hex_color(&color) {
                    return Err(ConfigError::InvalidColor {
                        field: "secondaryColor",
                        value: color,
                    }
                    .into());
                }
                branding.secondary_color = Some(color);
            }
            FieldValue::Clear => branding.secondary_color = None,
            FieldValue::Bool(_) => {
                return Err(PatchError::TypeMismatch {
                    group: ConfigGroup::Branding,
                    field: field.to_string(),
                    expected: "a color string",
                })
            }
        },
        "logo" => match value {
            FieldValue::Text(logo) => branding.logo = Some(logo),
            FieldValue::Clear => branding.logo = None,
            FieldValue::Bool(_) => {
                return Err(PatchError::TypeMismatch {
                    group: ConfigGroup::Branding,
                    field: field.to_string(),
                    expected: "text",
                })
            }
        },
        "footerText" => match value {
            FieldValue::Text(footer) => branding.footer_text = Some(footer),
            FieldValue::Clear => branding.footer_text = None,
            FieldValue::Bool(_) => {
                return Err(PatchError::TypeMismatch {
                    group: ConfigGroup::Branding,
                    field: field.to_string(),
                    expected: "text",
                })
            }
        },
        "companyName" => match value {
            FieldValue::Text(company) => branding.company_name = Some(company),
            FieldValue::Clear => branding.company_name = None,
            FieldValue::Bool(_) => {
                return Err(PatchError::TypeMismatch {
                    group: ConfigGroup::Branding,
                    field: field.to_string(),
                    expected: "text",
                })
            }
        },
        _ => {
            return Err(PatchError::UnknownField {
                group: ConfigGroup::Branding,
                field: field.to_string(),
            })
        }
    }
    Ok(())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_type::DocumentType;
    use crate::formatting::HeaderStyle;

    #[test]
    fn test_layout_override_changes_one_field() {
        let base = TemplateConfig::preset(DocumentType::UserManual);
        let updated = base
            .with_field(
                ConfigGroup::Layout,
                "includeTableOfContents",
                FieldValue::Bool(false),
            )
            .unwrap();

        assert!(!updated.layout.include_table_of_contents);
        // Everything else is untouched
        assert_eq!(
            LayoutOptions {
                include_table_of_contents: true,
                ..updated.layout.clone()
            },
            base.layout
        );
        assert_eq!(updated.sections, base.sections);
        assert_eq!(updated.formatting, base.formatting);
        assert_eq!(updated.branding, base.branding);
        // And the original is unchanged
        assert!(base.layout.include_table_of_contents);
    }

    #[test]
    fn test_section_override() {
        let base = TemplateConfig::preset(DocumentType::Sop);
        let updated = base
            .with_field(ConfigGroup::Sections, "stepByStep", FieldValue::Bool(false))
            .unwrap();
        assert!(!updated.sections.step_by_step);
    }

    #[test]
    fn test_formatting_override_parses_choice() {
        let base = TemplateConfig::preset(DocumentType::UserManual);
        let updated = base
            .with_field(
                ConfigGroup::Formatting,
                "headerStyle",
                FieldValue::Text("icon".to_string()),
            )
            .unwrap();
        assert_eq!(updated.formatting.header_style, HeaderStyle::Icon);
    }

    #[test]
    fn test_unknown_field_rejected_per_group() {
        let base = TemplateConfig::preset(DocumentType::UserManual);
        for group in [
            ConfigGroup::Layout,
            ConfigGroup::Sections,
            ConfigGroup::Formatting,
            ConfigGroup::Branding,
        ] {
            let result = base.with_field(group, "bogusField", FieldValue::Bool(true));
            match result {
                Err(PatchError::UnknownField { group: g, field }) => {
                    assert_eq!(g, group);
                    assert_eq!(field, "bogusField");
                }
                other => panic!("expected UnknownField for {}, got {:?}", group, other),
            }
        }
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let base = TemplateConfig::preset(DocumentType::UserManual);

        let result = base.with_field(
            ConfigGroup::Layout,
            "includeSummary",
            FieldValue::Text("yes".to_string()),
        );
        assert!(matches!(result, Err(PatchError::TypeMismatch { .. })));

        let result = base.with_field(ConfigGroup::Formatting, "headerStyle", FieldValue::Bool(true));
        assert!(matches!(result, Err(PatchError::TypeMismatch { .. })));
    }

    #[test]
    fn test_unknown_formatting_choice_rejected() {
        let base = TemplateConfig::preset(DocumentType::UserManual);
        let result = base.with_field(
            ConfigGroup::Formatting,
            "calloutStyle",
            FieldValue::Text("fancy".to_string()),
        );
        assert!(matches!(
            result,
            Err(PatchError::Invalid(ConfigError::UnknownChoice { .. }))
        ));
    }

    #[test]
    fn test_branding_color_overrides() {
        let base = TemplateConfig::preset(DocumentType::UserManual);

        let updated = base
            .with_field(
                ConfigGroup::Branding,
                "primaryColor",
                FieldValue::Text("#112233".to_string()),
            )
            .unwrap();
        assert_eq!(updated.branding.primary_color, "#112233");

        let result = base.with_field(
            ConfigGroup::Branding,
            "primaryColor",
            FieldValue::Text("112233".to_string()),
        );
        assert!(matches!(
            result,
            Err(PatchError::Invalid(ConfigError::InvalidColor { .. }))
        ));
    }

    #[test]
    fn test_clear_optional_branding_field() {
        let base = TemplateConfig::preset(DocumentType::Sop);
        assert!(base.branding.footer_text.is_some());

        let updated = base
            .with_field(ConfigGroup::Branding, "footerText", FieldValue::Clear)
            .unwrap();
        assert_eq!(updated.branding.footer_text, None);
    }

    #[test]
    fn test_primary_color_cannot_be_cleared() {
        let base = TemplateConfig::preset(DocumentType::UserManual);
        let result = base.with_field(ConfigGroup::Branding, "primaryColor", FieldValue::Clear);
        assert!(matches!(
            result,
            Err(PatchError::RequiredField { field: "primaryColor" })
        ));
    }

    #[test]
    fn test_json_value_overrides() {
        let base = TemplateConfig::preset(DocumentType::UserManual);

        let updated = base
            .with_json_field(
                ConfigGroup::Layout,
                "includeScreenshots",
                &serde_json::json!(false),
            )
            .unwrap();
        assert!(!updated.layout.include_screenshots);

        let updated = base
            .with_json_field(ConfigGroup::Branding, "secondaryColor", &serde_json::Value::Null)
            .unwrap();
        assert_eq!(updated.branding.secondary_color, None);

        let result = base.with_json_field(
            ConfigGroup::Layout,
            "includeScreenshots",
            &serde_json::json!(42),
        );
        assert!(matches!(
            result,
            Err(PatchError::UnsupportedValue { kind: "number" })
        ));
    }
}
