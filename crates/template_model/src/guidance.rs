//! Per-type guidance text for AI-assisted draft generation

use crate::document_type::DocumentType;

/// Guidance text seeding an AI generation call for the given type.
///
/// Covers audience, tone, and structure in a few sentences. Returns
/// `None` only for types with no guidance on file; every current type
/// carries text.
pub fn generation_guidance(doc_type: DocumentType) -> Option<&'static str> {
    let text = match doc_type {
        DocumentType::TrainingGuide => {
            "Write for employees encountering this process for the first time. \
             Use an encouraging, instructional tone. Open each lesson with what \
             the learner will be able to do afterwards, keep steps short, and \
             close sections with a quick practice task or knowledge check."
        }
        DocumentType::UserManual => {
            "Write for everyday users who reach for the manual when something is \
             unclear. Stay neutral and task-focused. Organize by feature, lead \
             each topic with the outcome, and keep procedures scannable with one \
             action per step."
        }
        DocumentType::Sop => {
            "Write for operators who must perform the procedure the same way \
             every time. Use imperative, unambiguous language with no optional \
             phrasing. State the responsible role for each step and call out \
             quality checks and escalation points explicitly."
        }
        DocumentType::QuickStart => {
            "Write for a new user with five minutes and no patience. Be direct \
             and friendly. Cover only the shortest path to the first success and \
             defer everything else to links. Never explain background concepts."
        }
        DocumentType::TechnicalDoc => {
            "Write for administrators and integration engineers. Be precise and \
             assume platform fluency. Lead with architecture context, document \
             interfaces and limits exactly, and include working configuration \
             examples."
        }
        DocumentType::JobAid => {
            "Write for someone mid-task who needs a reminder, not a lesson. Use \
             the fewest words that remove doubt. Prefer tables and checklists \
             over paragraphs."
        }
        DocumentType::ReleaseNotes => {
            "Write for existing users deciding whether the change affects them. \
             Lead with impact, not implementation. Group entries under new, \
             improved, and fixed, and flag anything that requires user action."
        }
        DocumentType::ImplementationGuide => {
            "Write for the project team running a rollout. Structure the guide \
             by phase with entry and exit criteria for each. Surface decision \
             points, owner roles, and rollback paths."
        }
        DocumentType::ReferenceGuide => {
            "Write for readers who arrive from search knowing what they are \
             looking for. Favor completeness and a consistent entry structure \
             over narrative. Define every term once and cross-reference instead \
             of repeating."
        }
        DocumentType::PolicyDocument => {
            "Write in formal, obligation-centered language suitable for \
             compliance review. State scope and definitions before requirements. \
             Use must and may deliberately and keep examples out of normative \
             text."
        }
        DocumentType::FaqDocument => {
            "Write questions the way users actually ask them, then answer in the \
             first sentence. Keep each answer self-contained. Group related \
             questions by topic and link to deeper material rather than \
             duplicating it."
        }
    };
    Some(text)
}
