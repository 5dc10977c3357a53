//! Template categories for organizing saved templates

use serde::{Deserialize, Serialize};
use template_model::DocumentType;

/// Category a saved template is filed under.
///
/// Known categories are the document types themselves, so saved templates
/// and presets sort together in pickers. Anything else is carried as a
/// custom label rather than rejected: the stored value is free text, the
/// Rust type just names which case it landed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateCategory {
    /// One of the known document types
    Type(DocumentType),
    /// Free-form label
    Custom(String),
}

impl TemplateCategory {
    /// The document type behind a known category.
    pub fn doc_type(&self) -> Option<DocumentType> {
        match self {
            Self::Type(doc_type) => Some(*doc_type),
            Self::Custom(_) => None,
        }
    }
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(doc_type) => write!(f, "{}", doc_type.slug()),
            Self::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for TemplateCategory {
    fn from(s: &str) -> Self {
        match s.parse::<DocumentType>() {
            Ok(doc_type) => Self::Type(doc_type),
            Err(_) => Self::Custom(s.to_string()),
        }
    }
}

impl From<String> for TemplateCategory {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TemplateCategory> for String {
    fn from(category: TemplateCategory) -> Self {
        category.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slug_parses_as_type() {
        assert_eq!(
            TemplateCategory::from("user_manual"),
            TemplateCategory::Type(DocumentType::UserManual)
        );
        assert_eq!(
            TemplateCategory::from("sop"),
            TemplateCategory::Type(DocumentType::Sop)
        );
    }

    #[test]
    fn test_unknown_label_becomes_custom() {
        assert_eq!(
            TemplateCategory::from("compliance"),
            TemplateCategory::Custom("compliance".to_string())
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let known = TemplateCategory::Type(DocumentType::QuickStart);
        assert_eq!(serde_json::to_string(&known).unwrap(), "\"quick_start\"");

        let custom = TemplateCategory::Custom("onboarding".to_string());
        assert_eq!(serde_json::to_string(&custom).unwrap(), "\"onboarding\"");
    }

    #[test]
    fn test_string_round_trip() {
        for category in [
            TemplateCategory::Type(DocumentType::PolicyDocument),
            TemplateCategory::Custom("benefits".to_string()),
        ] {
            let json = serde_json::to_string(&category).unwrap();
            let parsed: TemplateCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_doc_type_accessor() {
        let known = TemplateCategory::Type(DocumentType::JobAid);
        assert_eq!(known.doc_type(), Some(DocumentType::JobAid));
        assert_eq!(TemplateCategory::Custom("misc".to_string()).doc_type(), None);
    }
}
