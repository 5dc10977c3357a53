//! Built-in preset tables seeding one starting configuration per document type
//!
//! Presets are constructed fresh on every call, so callers always receive
//! an independent value and nothing they do to it can leak back into the
//! table. The tables themselves are code, not data files: the closed
//! document-type enum keeps every match here exhaustive.

use crate::branding::Branding;
use crate::config::TemplateConfig;
use crate::document_type::DocumentType;
use crate::formatting::{
    CalloutStyle, CodeBlockTheme, FormattingOptions, HeaderStyle, ScreenshotPlacement,
};
use crate::layout::LayoutOptions;
use crate::sections::SectionToggles;

impl TemplateConfig {
    /// The built-in starting configuration for a document type.
    ///
    /// Returns a fresh, fully populated value every call. Preset ids are
    /// stable (`preset-<slug>`) so a caller can tell an untouched preset
    /// from a saved template.
    pub fn preset(doc_type: DocumentType) -> TemplateConfig {
        TemplateConfig {
            id: format!("preset-{}", doc_type.slug()),
            name: doc_type.display_name().to_string(),
            description: preset_description(doc_type).to_string(),
            doc_type,
            layout: layout_defaults(doc_type),
            sections: section_defaults(doc_type),
            formatting: formatting_defaults(doc_type),
            branding: branding_defaults(doc_type),
        }
    }

    /// Presets for every document type, in presentation order.
    pub fn all_presets() -> Vec<TemplateConfig> {
        DocumentType::ALL.into_iter().map(Self::preset).collect()
    }
}

/// Default layout toggles for a document type.
pub fn layout_defaults(doc_type: DocumentType) -> LayoutOptions {
    match doc_type {
        DocumentType::TrainingGuide => LayoutOptions {
            include_learning_objectives: true,
            include_time_estimates: true,
            include_role_indicators: true,
            include_version_info: false,
            ..Default::default()
        },
        DocumentType::UserManual => LayoutOptions {
            include_prerequisites: false,
            ..Default::default()
        },
        DocumentType::Sop => LayoutOptions {
            include_screenshots: false,
            include_time_estimates: true,
            include_role_indicators: true,
            include_related_docs: false,
            ..Default::default()
        },
        DocumentType::QuickStart => LayoutOptions {
            include_table_of_contents: false,
            include_summary: false,
            include_time_estimates: true,
            include_version_info: false,
            include_related_docs: false,
            ..Default::default()
        },
        DocumentType::TechnicalDoc => LayoutOptions {
            include_screenshots: false,
            ..Default::default()
        },
        DocumentType::JobAid => LayoutOptions {
            include_table_of_contents: false,
            include_prerequisites: false,
            include_role_indicators: true,
            include_version_info: false,
            include_related_docs: false,
            ..Default::default()
        },
        DocumentType::ReleaseNotes => LayoutOptions {
            include_table_of_contents: false,
            include_prerequisites: false,
            include_step_numbers: false,
            ..Default::default()
        },
        DocumentType::ImplementationGuide => LayoutOptions {
            include_learning_objectives: true,
            include_time_estimates: true,
            include_role_indicators: true,
            ..Default::default()
        },
        DocumentType::ReferenceGuide => LayoutOptions {
            include_summary: false,
            include_prerequisites: false,
            include_screenshots: false,
            include_step_numbers: false,
            ..Default::default()
        },
        DocumentType::PolicyDocument => LayoutOptions {
            include_prerequisites: false,
            include_screenshots: false,
            include_step_numbers: false,
            include_role_indicators: true,
            include_related_docs: false,
            ..Default::default()
        },
        DocumentType::FaqDocument => LayoutOptions {
            include_table_of_contents: false,
            include_summary: false,
            include_prerequisites: false,
            include_step_numbers: false,
            include_version_info: false,
            ..Default::default()
        },
    }
}

/// Default section toggles for a document type.
pub fn section_defaults(doc_type: DocumentType) -> SectionToggles {
    match doc_type {
        DocumentType::TrainingGuide => SectionToggles {
            faqs: true,
            appendix: false,
            ..Default::default()
        },
        DocumentType::UserManual => SectionToggles {
            prerequisites: false,
            faqs: true,
            ..Default::default()
        },
        DocumentType::Sop => SectionToggles {
            troubleshooting: false,
            glossary: false,
            ..Default::default()
        },
        DocumentType::QuickStart => SectionToggles {
            overview: false,
            best_practices: false,
            glossary: false,
            appendix: false,
            ..Default::default()
        },
        DocumentType::TechnicalDoc => SectionToggles::default(),
        DocumentType::JobAid => SectionToggles {
            introduction: false,
            prerequisites: false,
            troubleshooting: false,
            glossary: false,
            appendix: false,
            ..Default::default()
        },
        DocumentType::ReleaseNotes => SectionToggles {
            prerequisites: false,
            step_by_step: false,
            best_practices: false,
            troubleshooting: false,
            faqs: true,
            glossary: false,
            appendix: false,
            ..Default::default()
        },
        DocumentType::ImplementationGuide => SectionToggles {
            faqs: true,
            ..Default::default()
        },
        DocumentType::ReferenceGuide => SectionToggles {
            introduction: false,
            prerequisites: false,
            step_by_step: false,
            best_practices: false,
            troubleshooting: false,
            ..Default::default()
        },
        DocumentType::PolicyDocument => SectionToggles {
            prerequisites: false,
            step_by_step: false,
            best_practices: false,
            troubleshooting: false,
            faqs: true,
            ..Default::default()
        },
        DocumentType::FaqDocument => SectionToggles {
            overview: false,
            prerequisites: false,
            step_by_step: false,
            best_practices: false,
            faqs: true,
            glossary: false,
            appendix: false,
            ..Default::default()
        },
    }
}

/// Default formatting choices for a document type.
pub fn formatting_defaults(doc_type: DocumentType) -> FormattingOptions {
    match doc_type {
        DocumentType::TrainingGuide | DocumentType::UserManual => FormattingOptions::default(),
        DocumentType::Sop => FormattingOptions {
            callout_style: CalloutStyle::Minimal,
            screenshot_placement: ScreenshotPlacement::Annotated,
            ..Default::default()
        },
        DocumentType::QuickStart => FormattingOptions {
            header_style: HeaderStyle::Plain,
            callout_style: CalloutStyle::Minimal,
            code_block_theme: CodeBlockTheme::Auto,
            ..Default::default()
        },
        DocumentType::TechnicalDoc => FormattingOptions {
            callout_style: CalloutStyle::Github,
            code_block_theme: CodeBlockTheme::Dark,
            ..Default::default()
        },
        DocumentType::JobAid => FormattingOptions {
            header_style: HeaderStyle::Icon,
            callout_style: CalloutStyle::Minimal,
            screenshot_placement: ScreenshotPlacement::Annotated,
            ..Default::default()
        },
        DocumentType::ReleaseNotes => FormattingOptions {
            header_style: HeaderStyle::Plain,
            callout_style: CalloutStyle::Github,
            code_block_theme: CodeBlockTheme::Auto,
            ..Default::default()
        },
        DocumentType::ImplementationGuide => FormattingOptions {
            screenshot_placement: ScreenshotPlacement::Annotated,
            code_block_theme: CodeBlockTheme::Dark,
            ..Default::default()
        },
        DocumentType::ReferenceGuide => FormattingOptions {
            header_style: HeaderStyle::Plain,
            screenshot_placement: ScreenshotPlacement::Sidebar,
            code_block_theme: CodeBlockTheme::Auto,
            ..Default::default()
        },
        DocumentType::PolicyDocument => FormattingOptions {
            callout_style: CalloutStyle::Minimal,
            screenshot_placement: ScreenshotPlacement::Sidebar,
            ..Default::default()
        },
        DocumentType::FaqDocument => FormattingOptions {
            header_style: HeaderStyle::Plain,
            code_block_theme: CodeBlockTheme::Auto,
            ..Default::default()
        },
    }
}

/// Default branding for a document type.
///
/// Presets only suggest colors and, for controlled documents, a footer.
/// Logo and company name are always left for the team to supply.
pub fn branding_defaults(doc_type: DocumentType) -> Branding {
    match doc_type {
        DocumentType::TrainingGuide => Branding {
            secondary_color: Some("#172B4D".to_string()),
            ..Default::default()
        },
        DocumentType::UserManual => Branding {
            secondary_color: Some("#6B778C".to_string()),
            ..Default::default()
        },
        DocumentType::Sop => Branding {
            primary_color: "#00875A".to_string(),
            secondary_color: Some("#172B4D".to_string()),
            footer_text: Some("Controlled document. Printed copies are uncontrolled.".to_string()),
            ..Default::default()
        },
        DocumentType::QuickStart => Branding {
            primary_color: "#36B37E".to_string(),
            ..Default::default()
        },
        DocumentType::TechnicalDoc => Branding {
            primary_color: "#403294".to_string(),
            secondary_color: Some("#172B4D".to_string()),
            ..Default::default()
        },
        DocumentType::JobAid => Branding {
            primary_color: "#FF8B00".to_string(),
            ..Default::default()
        },
        DocumentType::ReleaseNotes => Branding {
            primary_color: "#6554C0".to_string(),
            secondary_color: Some("#172B4D".to_string()),
            ..Default::default()
        },
        DocumentType::ImplementationGuide => Branding {
            primary_color: "#0747A6".to_string(),
            secondary_color: Some("#00B8D9".to_string()),
            ..Default::default()
        },
        DocumentType::ReferenceGuide => Branding {
            primary_color: "#42526E".to_string(),
            ..Default::default()
        },
        DocumentType::PolicyDocument => Branding {
            primary_color: "#172B4D".to_string(),
            secondary_color: Some("#6B778C".to_string()),
            footer_text: Some(
                "Internal use only. Check the policy register for the current revision."
                    .to_string(),
            ),
            ..Default::default()
        },
        DocumentType::FaqDocument => Branding {
            primary_color: "#00B8D9".to_string(),
            ..Default::default()
        },
    }
}

/// One-line description shown next to a preset in the template picker.
pub fn preset_description(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::TrainingGuide => {
            "Lesson-structured guide with objectives, timing, and practice checkpoints"
        }
        DocumentType::UserManual => {
            "Full product manual covering features end to end for everyday users"
        }
        DocumentType::Sop => {
            "Controlled procedure document with numbered steps and role assignments"
        }
        DocumentType::QuickStart => {
            "Short walkthrough that gets a new user productive in minutes"
        }
        DocumentType::TechnicalDoc => {
            "System documentation for administrators and integrators"
        }
        DocumentType::JobAid => "One-page task reference designed to sit next to the work",
        DocumentType::ReleaseNotes => {
            "What changed, why it matters, and what users need to do"
        }
        DocumentType::ImplementationGuide => {
            "Phase-by-phase rollout playbook for project teams"
        }
        DocumentType::ReferenceGuide => {
            "Organized lookup material with glossary and appendices"
        }
        DocumentType::PolicyDocument => {
            "Formal policy statement with scope, definitions, and review history"
        }
        DocumentType::FaqDocument => "Curated questions and answers grouped by topic",
    }
}
