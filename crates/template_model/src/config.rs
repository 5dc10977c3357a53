//! The template configuration aggregate

use crate::branding::Branding;
use crate::document_type::DocumentType;
use crate::error::{ConfigError, ConfigResult};
use crate::formatting::FormattingOptions;
use crate::layout::LayoutOptions;
use crate::sections::SectionToggles;
use serde::{Deserialize, Serialize};

/// A complete template configuration for one document type.
///
/// Holds the four config sub-records together with the identity fields
/// shown in template pickers. Instances start from a per-type preset and
/// diverge through field overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    /// Unique configuration identifier
    pub id: String,
    /// Display name of the template
    pub name: String,
    /// Description of what the template is for
    pub description: String,
    /// Document type this configuration targets
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Optional document regions
    pub layout: LayoutOptions,
    /// Narrative sections
    pub sections: SectionToggles,
    /// Document-wide formatting choices
    pub formatting: FormattingOptions,
    /// Brand identity
    pub branding: Branding,
}

impl TemplateConfig {
    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check identity fields and branding colors.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.id.is_empty() {
            return Err(ConfigError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        self.branding.validate()
    }

    /// Re-target this configuration at a different document type.
    ///
    /// Layout, sections, and formatting are replaced wholesale by the new
    /// type's preset; a mid-edit layout tuned for one document shape is not
    /// meaningful for another. Branding is the exception: it belongs to the
    /// team, not the document type, so values already set here survive and
    /// the preset only fills the gaps (see [`Branding::merge_preset`]).
    pub fn switch_type(&self, new_type: DocumentType) -> TemplateConfig {
        let preset = TemplateConfig::preset(new_type);
        TemplateConfig {
            branding: self.branding.merge_preset(&preset.branding),
            ..preset
        }
    }
}
