//! Saved template aggregate and listing projection

use crate::category::TemplateCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use template_model::{DocumentType, TemplateConfig};

/// A template configuration persisted by a team, with storage metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTemplate {
    /// The configuration itself
    pub config: TemplateConfig,
    /// Category the template is filed under
    pub category: TemplateCategory,
    /// Whether the template is offered in pickers
    pub is_active: bool,
    /// Whether this is the default template for its document type
    pub is_default: bool,
    /// Account that owns the template
    pub owner: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl SavedTemplate {
    /// Wrap a configuration for storage, filed under its document type.
    pub fn new(config: TemplateConfig) -> Self {
        Self {
            category: TemplateCategory::Type(config.doc_type),
            config,
            is_active: true,
            is_default: false,
            owner: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: TemplateCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the owner
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Update the modified timestamp
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Summary information for template listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSummary {
    /// Template ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Category (string form)
    pub category: String,
    /// Document type the template targets
    pub doc_type: DocumentType,
    /// Whether the template is offered in pickers
    pub is_active: bool,
    /// Whether this is the default for its document type
    pub is_default: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&SavedTemplate> for TemplateSummary {
    fn from(saved: &SavedTemplate) -> Self {
        Self {
            id: saved.config.id.clone(),
            name: saved.config.name.clone(),
            description: saved.config.description.clone(),
            category: saved.category.to_string(),
            doc_type: saved.config.doc_type,
            is_active: saved.is_active,
            is_default: saved.is_default,
            created_at: saved.created_at,
            updated_at: saved.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_saved_template_defaults() {
        let config = TemplateConfig::preset(DocumentType::TrainingGuide);
        let saved = SavedTemplate::new(config);

        assert_eq!(
            saved.category,
            TemplateCategory::Type(DocumentType::TrainingGuide)
        );
        assert!(saved.is_active);
        assert!(!saved.is_default);
        assert_eq!(saved.owner, None);
        assert_eq!(saved.updated_at, None);
    }

    #[test]
    fn test_builders_and_touch() {
        let config = TemplateConfig::preset(DocumentType::Sop);
        let mut saved = SavedTemplate::new(config)
            .with_category(TemplateCategory::Custom("compliance".to_string()))
            .with_owner("hr-team");

        assert_eq!(
            saved.category,
            TemplateCategory::Custom("compliance".to_string())
        );
        assert_eq!(saved.owner.as_deref(), Some("hr-team"));

        saved.touch();
        assert!(saved.updated_at.is_some());
    }

    #[test]
    fn test_summary_projection() {
        let config = TemplateConfig::preset(DocumentType::FaqDocument)
            .with_name("Benefits FAQ")
            .with_description("Answers for open enrollment");
        let saved = SavedTemplate::new(config);
        let summary = TemplateSummary::from(&saved);

        assert_eq!(summary.id, "preset-faq_document");
        assert_eq!(summary.name, "Benefits FAQ");
        assert_eq!(summary.description, "Answers for open enrollment");
        assert_eq!(summary.category, "faq_document");
        assert_eq!(summary.doc_type, DocumentType::FaqDocument);
        assert!(summary.is_active);
    }
}
