//! Flattened on-disk record shape for saved templates
//!
//! Records written by this store always carry complete config blobs.
//! Records written by older builds can arrive with fields missing, so
//! each config group has a stored mirror with every field optional: a
//! partial blob still parses, and completeness is judged field by field
//! afterwards instead of failing the whole read.

use crate::category::TemplateCategory;
use crate::error::{StoreError, StoreResult};
use crate::saved::SavedTemplate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use template_model::{
    branding_defaults, formatting_defaults, layout_defaults, section_defaults, Branding,
    CalloutStyle, CodeBlockTheme, DocumentType, FormattingOptions, HeaderStyle, LayoutOptions,
    ScreenshotPlacement, SectionToggles, TemplateConfig,
};

/// How to treat stored blobs with missing fields when loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Fail with [`StoreError::Incomplete`]
    Strict,
    /// Fill missing fields from the type preset and log what was filled
    Backfill,
}

/// Tolerant stored mirror of [`LayoutOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLayout {
    pub include_table_of_contents: Option<bool>,
    pub include_summary: Option<bool>,
    pub include_prerequisites: Option<bool>,
    pub include_learning_objectives: Option<bool>,
    pub include_screenshots: Option<bool>,
    pub include_step_numbers: Option<bool>,
    pub include_time_estimates: Option<bool>,
    pub include_role_indicators: Option<bool>,
    pub include_version_info: Option<bool>,
    pub include_related_docs: Option<bool>,
}

impl StoredLayout {
    /// Wire names of the fields this blob does not carry.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.include_table_of_contents.is_none() {
            missing.push("includeTableOfContents");
        }
        if self.include_summary.is_none() {
            missing.push("includeSummary");
        }
        if self.include_prerequisites.is_none() {
            missing.push("includePrerequisites");
        }
        if self.include_learning_objectives.is_none() {
            missing.push("includeLearningObjectives");
        }
        if self.include_screenshots.is_none() {
            missing.push("includeScreenshots");
        }
        if self.include_step_numbers.is_none() {
            missing.push("includeStepNumbers");
        }
        if self.include_time_estimates.is_none() {
            missing.push("includeTimeEstimates");
        }
        if self.include_role_indicators.is_none() {
            missing.push("includeRoleIndicators");
        }
        if self.include_version_info.is_none() {
            missing.push("includeVersionInfo");
        }
        if self.include_related_docs.is_none() {
            missing.push("includeRelatedDocs");
        }
        missing
    }

    /// The complete layout, if every field is present.
    pub fn complete(&self) -> Option<LayoutOptions> {
        Some(LayoutOptions {
            include_table_of_contents: self.include_table_of_contents?,
            include_summary: self.include_summary?,
            include_prerequisites: self.include_prerequisites?,
            include_learning_objectives: self.include_learning_objectives?,
            include_screenshots: self.include_screenshots?,
            include_step_numbers: self.include_step_numbers?,
            include_time_estimates: self.include_time_estimates?,
            include_role_indicators: self.include_role_indicators?,
            include_version_info: self.include_version_info?,
            include_related_docs: self.include_related_docs?,
        })
    }

    /// Fill gaps from `defaults`, returning the result and the wire names
    /// of the fields that were filled.
    pub fn backfill(&self, defaults: &LayoutOptions) -> (LayoutOptions, Vec<&'static str>) {
        let filled = self.missing_fields();
        let layout = LayoutOptions {
            include_table_of_contents: self
                .include_table_of_contents
                .unwrap_or(defaults.include_table_of_contents),
            include_summary: self.include_summary.unwrap_or(defaults.include_summary),
            include_prerequisites: self
                .include_prerequisites
                .unwrap_or(defaults.include_prerequisites),
            include_learning_objectives: self
                .include_learning_objectives
                .unwrap_or(defaults.include_learning_objectives),
            include_screenshots: self
                .include_screenshots
                .unwrap_or(defaults.include_screenshots),
            include_step_numbers: self
                .include_step_numbers
                .unwrap_or(defaults.include_step_numbers),
            include_time_estimates: self
                .include_time_estimates
                .unwrap_or(defaults.include_time_estimates),
            include_role_indicators: self
                .include_role_indicators
                .unwrap_or(defaults.include_role_indicators),
            include_version_info: self
                .include_version_info
                .unwrap_or(defaults.include_version_info),
            include_related_docs: self
                .include_related_docs
                .unwrap_or(defaults.include_related_docs),
        };
        (layout, filled)
    }
}

impl From<&LayoutOptions> for StoredLayout {
    fn from(layout: &LayoutOptions) -> Self {
        Self {
            include_table_of_contents: Some(layout.include_table_of_contents),
            include_summary: Some(layout.include_summary),
            include_prerequisites: Some(layout.include_prerequisites),
            include_learning_objectives: Some(layout.include_learning_objectives),
            include_screenshots: Some(layout.include_screenshots),
            include_step_numbers: Some(layout.include_step_numbers),
            include_time_estimates: Some(layout.include_time_estimates),
            include_role_indicators: Some(layout.include_role_indicators),
            include_version_info: Some(layout.include_version_info),
            include_related_docs: Some(layout.include_related_docs),
        }
    }
}

/// Tolerant stored mirror of [`SectionToggles`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSections {
    pub introduction: Option<bool>,
    pub overview: Option<bool>,
    pub prerequisites: Option<bool>,
    pub step_by_step: Option<bool>,
    pub best_practices: Option<bool>,
    pub troubleshooting: Option<bool>,
    pub faqs: Option<bool>,
    pub glossary: Option<bool>,
    pub appendix: Option<bool>,
}

impl StoredSections {
    /// Wire names of the fields this blob does not carry.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.introduction.is_none() {
            missing.push("introduction");
        }
        if self.overview.is_none() {
            missing.push("overview");
        }
        if self.prerequisites.is_none() {
            missing.push("prerequisites");
        }
        if self.step_by_step.is_none() {
            missing.push("stepByStep");
        }
        if self.best_practices.is_none() {
            missing.push("bestPractices");
        }
        if self.troubleshooting.is_none() {
            missing.push("troubleshooting");
        }
        if self.faqs.is_none() {
            missing.push("faqs");
        }
        if self.glossary.is_none() {
            missing.push("glossary");
        }
        if self.appendix.is_none() {
            missing.push("appendix");
        }
        missing
    }

    /// The complete section toggles, if every field is present.
    pub fn complete(&self) -> Option<SectionToggles> {
        Some(SectionToggles {
            introduction: self.introduction?,
            overview: self.overview?,
            prerequisites: self.prerequisites?,
            step_by_step: self.step_by_step?,
            best_practices: self.best_practices?,
            troubleshooting: self.troubleshooting?,
            faqs: self.faqs?,
            glossary: self.glossary?,
            appendix: self.appendix?,
        })
    }

    /// Fill gaps from `defaults`, returning the result and the wire names
    /// of the fields that were filled.
    pub fn backfill(&self, defaults: &SectionToggles) -> (SectionToggles, Vec<&'static str>) {
        let filled = self.missing_fields();
        let sections = SectionToggles {
            introduction: self.introduction.unwrap_or(defaults.introduction),
            overview: self.overview.unwrap_or(defaults.overview),
            prerequisites: self.prerequisites.unwrap_or(defaults.prerequisites),
            step_by_step: self.step_by_step.unwrap_or(defaults.step_by_step),
            best_practices: self.best_practices.unwrap_or(defaults.best_practices),
            troubleshooting: self.troubleshooting.unwrap_or(defaults.troubleshooting),
            faqs: self.faqs.unwrap_or(defaults.faqs),
            glossary: self.glossary.unwrap_or(defaults.glossary),
            appendix: self.appendix.unwrap_or(defaults.appendix),
        };
        (sections, filled)
    }
}

impl From<&SectionToggles> for StoredSections {
    fn from(sections: &SectionToggles) -> Self {
        Self {
            introduction: Some(sections.introduction),
            overview: Some(sections.overview),
            prerequisites: Some(sections.prerequisites),
            step_by_step: Some(sections.step_by_step),
            best_practices: Some(sections.best_practices),
            troubleshooting: Some(sections.troubleshooting),
            faqs: Some(sections.faqs),
            glossary: Some(sections.glossary),
            appendix: Some(sections.appendix),
        }
    }
}

/// Tolerant stored mirror of [`FormattingOptions`].
///
/// Missing keys are tolerated; a present key with a value outside the
/// closed choice set still fails the record parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFormatting {
    pub header_style: Option<HeaderStyle>,
    pub callout_style: Option<CalloutStyle>,
    pub screenshot_placement: Option<ScreenshotPlacement>,
    pub code_block_theme: Option<CodeBlockTheme>,
}

impl StoredFormatting {
    /// Wire names of the fields this blob does not carry.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.header_style.is_none() {
            missing.push("headerStyle");
        }
        if self.callout_style.is_none() {
            missing.push("calloutStyle");
        }
        if self.screenshot_placement.is_none() {
            missing.push("screenshotPlacement");
        }
        if self.code_block_theme.is_none() {
            missing.push("codeBlockTheme");
        }
        missing
    }

    /// The complete formatting options, if every field is present.
    pub fn complete(&self) -> Option<FormattingOptions> {
        Some(FormattingOptions {
            header_style: self.header_style?,
            callout_style: self.callout_style?,
            screenshot_placement: self.screenshot_placement?,
            code_block_theme: self.code_block_theme?,
        })
    }

    /// Fill gaps from `defaults`, returning the result and the wire names
    /// of the fields that were filled.
    pub fn backfill(&self, defaults: &FormattingOptions) -> (FormattingOptions, Vec<&'static str>) {
        let filled = self.missing_fields();
        let formatting = FormattingOptions {
            header_style: self.header_style.unwrap_or(defaults.header_style),
            callout_style: self.callout_style.unwrap_or(defaults.callout_style),
            screenshot_placement: self
                .screenshot_placement
                .unwrap_or(defaults.screenshot_placement),
            code_block_theme: self.code_block_theme.unwrap_or(defaults.code_block_theme),
        };
        (formatting, filled)
    }
}

impl From<&FormattingOptions> for StoredFormatting {
    fn from(formatting: &FormattingOptions) -> Self {
        Self {
            header_style: Some(formatting.header_style),
            callout_style: Some(formatting.callout_style),
            screenshot_placement: Some(formatting.screenshot_placement),
            code_block_theme: Some(formatting.code_block_theme),
        }
    }
}

/// Tolerant stored mirror of [`Branding`].
///
/// The optional branding fields are legitimately absent in a valid blob,
/// so only a missing primary color counts as incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBranding {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub logo: Option<String>,
    pub footer_text: Option<String>,
    pub company_name: Option<String>,
}

impl StoredBranding {
    /// Wire names of the required fields this blob does not carry.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        if self.primary_color.is_none() {
            vec!["primaryColor"]
        } else {
            Vec::new()
        }
    }

    /// The complete branding, if the primary color is present.
    pub fn complete(&self) -> Option<Branding> {
        Some(Branding {
            primary_color: self.primary_color.clone()?,
            secondary_color: self.secondary_color.clone(),
            logo: self.logo.clone(),
            footer_text: self.footer_text.clone(),
            company_name: self.company_name.clone(),
        })
    }

    /// Fill a missing primary color from `defaults`, returning the result
    /// and the wire names of the fields that were filled. Optional fields
    /// pass through untouched; absence there is user data, not a gap.
    pub fn backfill(&self, defaults: &Branding) -> (Branding, Vec<&'static str>) {
        let filled = self.missing_fields();
        let branding = Branding {
            primary_color: self
                .primary_color
                .clone()
                .unwrap_or_else(|| defaults.primary_color.clone()),
            secondary_color: self.secondary_color.clone(),
            logo: self.logo.clone(),
            footer_text: self.footer_text.clone(),
            company_name: self.company_name.clone(),
        };
        (branding, filled)
    }
}

impl From<&Branding> for StoredBranding {
    fn from(branding: &Branding) -> Self {
        Self {
            primary_color: Some(branding.primary_color.clone()),
            secondary_color: branding.secondary_color.clone(),
            logo: branding.logo.clone(),
            footer_text: branding.footer_text.clone(),
            company_name: branding.company_name.clone(),
        }
    }
}

/// The flattened record written to disk, one JSON file per template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Template identifier (also the file stem)
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Document type the template targets
    pub doc_type: DocumentType,
    /// Category (stored as a plain string)
    pub category: TemplateCategory,
    /// Layout blob
    pub layout_config: StoredLayout,
    /// Sections blob
    pub sections_config: StoredSections,
    /// Formatting blob
    pub formatting_config: StoredFormatting,
    /// Branding blob
    pub branding_config: StoredBranding,
    /// Whether the template is offered in pickers
    pub is_active: bool,
    /// Whether this is the default for its document type
    pub is_default: bool,
    /// Owning account
    pub owner: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&SavedTemplate> for TemplateRecord {
    fn from(saved: &SavedTemplate) -> Self {
        Self {
            id: saved.config.id.clone(),
            name: saved.config.name.clone(),
            description: saved.config.description.clone(),
            doc_type: saved.config.doc_type,
            category: saved.category.clone(),
            layout_config: StoredLayout::from(&saved.config.layout),
            sections_config: StoredSections::from(&saved.config.sections),
            formatting_config: StoredFormatting::from(&saved.config.formatting),
            branding_config: StoredBranding::from(&saved.config.branding),
            is_active: saved.is_active,
            is_default: saved.is_default,
            owner: saved.owner.clone(),
            created_at: saved.created_at,
            updated_at: saved.updated_at,
        }
    }
}

impl TemplateRecord {
    /// Wire names of config fields missing across all four blobs.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = self.layout_config.missing_fields();
        missing.extend(self.sections_config.missing_fields());
        missing.extend(self.formatting_config.missing_fields());
        missing.extend(self.branding_config.missing_fields());
        missing
    }

    /// Rebuild the saved template this record describes.
    ///
    /// Under `Strict` a record with missing config fields fails with
    /// [`StoreError::Incomplete`]. Under `Backfill` the gaps are filled
    /// from the record's type preset and a warning names the fields.
    /// Either way the rebuilt config must pass validation.
    pub fn into_saved(self, policy: LoadPolicy) -> StoreResult<SavedTemplate> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            match policy {
                LoadPolicy::Strict => {
                    return Err(StoreError::Incomplete {
                        id: self.id,
                        fields: missing,
                    });
                }
                LoadPolicy::Backfill => {
                    tracing::warn!(
                        "Template {} is missing stored fields {:?}, backfilling from the {} preset",
                        self.id,
                        missing,
                        self.doc_type
                    );
                }
            }
        }

        let (layout, _) = self.layout_config.backfill(&layout_defaults(self.doc_type));
        let (sections, _) = self
            .sections_config
            .backfill(&section_defaults(self.doc_type));
        let (formatting, _) = self
            .formatting_config
            .backfill(&formatting_defaults(self.doc_type));
        let (branding, _) = self
            .branding_config
            .backfill(&branding_defaults(self.doc_type));

        let config = TemplateConfig {
            id: self.id,
            name: self.name,
            description: self.description,
            doc_type: self.doc_type,
            layout,
            sections,
            formatting,
            branding,
        };
        config.validate()?;

        Ok(SavedTemplate {
            config,
            category: self.category,
            is_active: self.is_active,
            is_default: self.is_default,
            owner: self.owner,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn record_round_trip_preserves_config(
            index in 0..DocumentType::ALL.len(),
            name in "[A-Za-z][A-Za-z ]{0,23}",
        ) {
            let doc_type = DocumentType::ALL[index];
            let config = TemplateConfig::preset(doc_type).with_name(name);
            let saved = SavedTemplate::new(config.clone());

            let record = TemplateRecord::from(&saved);
            let json = record.to_json().unwrap();
            let parsed = TemplateRecord::from_json(&json).unwrap();
            let restored = parsed.into_saved(LoadPolicy::Strict).unwrap();

            prop_assert_eq!(restored.config, config);
        }
    }
}
