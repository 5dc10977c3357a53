//! Section toggles controlling which narrative sections a document includes

use serde::{Deserialize, Serialize};

/// On/off switches for the standard narrative sections of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionToggles {
    /// Opening introduction
    pub introduction: bool,
    /// High-level overview of the subject
    pub overview: bool,
    /// Prerequisites section in the body
    pub prerequisites: bool,
    /// Step-by-step procedure section
    pub step_by_step: bool,
    /// Best practices and recommendations
    pub best_practices: bool,
    /// Troubleshooting guidance
    pub troubleshooting: bool,
    /// Frequently asked questions
    pub faqs: bool,
    /// Glossary of terms
    pub glossary: bool,
    /// Appendix for supporting material
    pub appendix: bool,
}

impl SectionToggles {
    /// Wire-format names of every section field, as accepted by field overrides.
    pub const FIELDS: [&'static str; 9] = [
        "introduction",
        "overview",
        "prerequisites",
        "stepByStep",
        "bestPractices",
        "troubleshooting",
        "faqs",
        "glossary",
        "appendix",
    ];
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            introduction: true,
            overview: true,
            prerequisites: true,
            step_by_step: true,
            best_practices: true,
            troubleshooting: true,
            faqs: false,
            glossary: true,
            appendix: true,
        }
    }
}
