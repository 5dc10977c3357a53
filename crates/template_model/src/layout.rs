//! Layout toggles controlling which optional regions a document includes

use serde::{Deserialize, Serialize};

/// On/off switches for the optional regions of a generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Table of contents at the top of the document
    pub include_table_of_contents: bool,
    /// Executive summary before the main body
    pub include_summary: bool,
    /// Prerequisites readers should satisfy before starting
    pub include_prerequisites: bool,
    /// Learning objectives block for training material
    pub include_learning_objectives: bool,
    /// Screenshot placeholders alongside instructions
    pub include_screenshots: bool,
    /// Numbered step markers inside procedures
    pub include_step_numbers: bool,
    /// Estimated completion time per section
    pub include_time_estimates: bool,
    /// Role or audience badges on sections
    pub include_role_indicators: bool,
    /// Document version and revision information
    pub include_version_info: bool,
    /// Links to related documents at the end
    pub include_related_docs: bool,
}

impl LayoutOptions {
    /// Wire-format names of every layout field, as accepted by field overrides.
    pub const FIELDS: [&'static str; 10] = [
        "includeTableOfContents",
        "includeSummary",
        "includePrerequisites",
        "includeLearningObjectives",
        "includeScreenshots",
        "includeStepNumbers",
        "includeTimeEstimates",
        "includeRoleIndicators",
        "includeVersionInfo",
        "includeRelatedDocs",
    ];
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            include_table_of_contents: true,
            include_summary: true,
            include_prerequisites: true,
            include_learning_objectives: false,
            include_screenshots: true,
            include_step_numbers: true,
            include_time_estimates: false,
            include_role_indicators: false,
            include_version_info: true,
            include_related_docs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&LayoutOptions::default()).unwrap();
        assert!(json.contains("\"includeTableOfContents\":true"));
        assert!(json.contains("\"includeTimeEstimates\":false"));
    }

    #[test]
    fn test_field_names_round_trip() {
        // Every wire name in FIELDS must be a key the struct serializes.
        let value = serde_json::to_value(LayoutOptions::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), LayoutOptions::FIELDS.len());
        for field in LayoutOptions::FIELDS {
            assert!(object.contains_key(field), "missing key: {}", field);
        }
    }
}
