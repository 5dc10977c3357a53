//! The closed set of document types a template can target

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document categories supported by the generator.
///
/// The set is closed: every type carries its own preset configuration and
/// generation guidance, so adding a variant means seeding both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Structured lesson material for onboarding and skill building
    TrainingGuide,
    /// Comprehensive product or feature manual
    UserManual,
    /// Standard operating procedure
    Sop,
    /// Short get-started walkthrough
    QuickStart,
    /// Architecture or system documentation for technical readers
    TechnicalDoc,
    /// Single-task cheat sheet kept at hand during work
    JobAid,
    /// Version change summary for an audience of existing users
    ReleaseNotes,
    /// Rollout playbook for admins deploying a system
    ImplementationGuide,
    /// Lookup-oriented reference material
    ReferenceGuide,
    /// Formal policy statement
    PolicyDocument,
    /// Question-and-answer collection
    FaqDocument,
}

impl DocumentType {
    /// Every supported document type, in presentation order.
    pub const ALL: [DocumentType; 11] = [
        DocumentType::TrainingGuide,
        DocumentType::UserManual,
        DocumentType::Sop,
        DocumentType::QuickStart,
        DocumentType::TechnicalDoc,
        DocumentType::JobAid,
        DocumentType::ReleaseNotes,
        DocumentType::ImplementationGuide,
        DocumentType::ReferenceGuide,
        DocumentType::PolicyDocument,
        DocumentType::FaqDocument,
    ];

    /// Stable identifier used in storage keys and over the wire.
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentType::TrainingGuide => "training_guide",
            DocumentType::UserManual => "user_manual",
            DocumentType::Sop => "sop",
            DocumentType::QuickStart => "quick_start",
            DocumentType::TechnicalDoc => "technical_doc",
            DocumentType::JobAid => "job_aid",
            DocumentType::ReleaseNotes => "release_notes",
            DocumentType::ImplementationGuide => "implementation_guide",
            DocumentType::ReferenceGuide => "reference_guide",
            DocumentType::PolicyDocument => "policy_document",
            DocumentType::FaqDocument => "faq_document",
        }
    }

    /// Human-readable name shown in pickers and template listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::TrainingGuide => "Training Guide",
            DocumentType::UserManual => "User Manual",
            DocumentType::Sop => "Standard Operating Procedure",
            DocumentType::QuickStart => "Quick Start Guide",
            DocumentType::TechnicalDoc => "Technical Documentation",
            DocumentType::JobAid => "Job Aid",
            DocumentType::ReleaseNotes => "Release Notes",
            DocumentType::ImplementationGuide => "Implementation Guide",
            DocumentType::ReferenceGuide => "Reference Guide",
            DocumentType::PolicyDocument => "Policy Document",
            DocumentType::FaqDocument => "FAQ Document",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for DocumentType {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        DocumentType::ALL
            .into_iter()
            .find(|doc_type| doc_type.slug() == s)
            .ok_or_else(|| ConfigError::UnknownDocumentType(s.to_string()))
    }
}
