//! Template Model - Document template configuration types and semantics
//!
//! This crate provides the configuration model for the document template
//! system: the closed document-type enum, the four fixed-schema config
//! groups, per-type preset tables, schema-checked field overrides, the
//! type-switch merge rule, and generation guidance text.

mod document_type;
mod layout;
mod sections;
mod formatting;
mod branding;
mod config;
mod presets;
mod patch;
mod guidance;
mod error;

pub use document_type::*;
pub use layout::*;
pub use sections::*;
pub use formatting::*;
pub use branding::*;
pub use config::*;
pub use presets::*;
pub use patch::*;
pub use guidance::*;
pub use error::*;
