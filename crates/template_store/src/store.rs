//! Directory-backed store for saved template records
//!
//! One JSON record file per template, named `<id>.json`. Every operation
//! has an async primary and a `_sync` variant for startup paths that run
//! before the runtime is up.

use crate::category::TemplateCategory;
use crate::error::{StoreError, StoreResult};
use crate::record::{LoadPolicy, TemplateRecord};
use crate::saved::{SavedTemplate, TemplateSummary};
use chrono::Utc;
use std::path::{Path, PathBuf};
use template_model::DocumentType;

/// File extension for template record files
pub const RECORD_EXTENSION: &str = "json";

/// Manages saved templates in a directory.
#[derive(Debug)]
pub struct TemplateStore {
    /// Directory where template records are stored
    templates_dir: PathBuf,
}

impl TemplateStore {
    /// Create a new template store rooted at the given directory.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Get the templates directory path
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Record file path for a template id.
    ///
    /// Validates the id first, so every returned path stays inside the
    /// store directory.
    fn template_path(&self, template_id: &str) -> StoreResult<PathBuf> {
        validate_template_id(template_id)?;
        Ok(self
            .templates_dir
            .join(format!("{}.{}", template_id, RECORD_EXTENSION)))
    }

    /// Ensure the templates directory exists
    pub async fn ensure_directory(&self) -> StoreResult<()> {
        if !self.templates_dir.exists() {
            tokio::fs::create_dir_all(&self.templates_dir).await?;
        }
        Ok(())
    }

    /// Ensure the templates directory exists (synchronous)
    pub fn ensure_directory_sync(&self) -> StoreResult<()> {
        if !self.templates_dir.exists() {
            std::fs::create_dir_all(&self.templates_dir)?;
        }
        Ok(())
    }

    /// Check if a template record exists
    pub fn template_exists(&self, template_id: &str) -> bool {
        self.template_path(template_id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Save a new template.
    ///
    /// Generates an id when the config carries none, validates the config,
    /// stamps the creation time, and rejects an id that already has a
    /// record. Returns the stored id.
    pub async fn save_template(&self, template: SavedTemplate) -> StoreResult<String> {
        let template = self.prepare_save(template)?;
        let path = self.template_path(&template.config.id)?;
        if path.exists() {
            return Err(StoreError::AlreadyExists(template.config.id));
        }

        self.ensure_directory().await?;
        let content = TemplateRecord::from(&template).to_json()?;
        tokio::fs::write(&path, content).await?;

        tracing::info!(
            "Saved template {} ({})",
            template.config.id,
            template.config.doc_type
        );
        Ok(template.config.id)
    }

    /// Save a new template (synchronous)
    pub fn save_template_sync(&self, template: SavedTemplate) -> StoreResult<String> {
        let template = self.prepare_save(template)?;
        let path = self.template_path(&template.config.id)?;
        if path.exists() {
            return Err(StoreError::AlreadyExists(template.config.id));
        }

        self.ensure_directory_sync()?;
        let content = TemplateRecord::from(&template).to_json()?;
        std::fs::write(&path, content)?;

        tracing::info!(
            "Saved template {} ({})",
            template.config.id,
            template.config.doc_type
        );
        Ok(template.config.id)
    }

    /// Overwrite an existing template, stamping its update time.
    pub async fn update_template(&self, template: SavedTemplate) -> StoreResult<()> {
        let template = self.prepare_update(template)?;
        let path = self.template_path(&template.config.id)?;
        let content = TemplateRecord::from(&template).to_json()?;
        tokio::fs::write(&path, content).await?;

        tracing::info!("Updated template {}", template.config.id);
        Ok(())
    }

    /// Overwrite an existing template (synchronous)
    pub fn update_template_sync(&self, template: SavedTemplate) -> StoreResult<()> {
        let template = self.prepare_update(template)?;
        let path = self.template_path(&template.config.id)?;
        let content = TemplateRecord::from(&template).to_json()?;
        std::fs::write(&path, content)?;

        tracing::info!("Updated template {}", template.config.id);
        Ok(())
    }

    /// Load a template, backfilling missing stored fields from its type
    /// preset (backfills are logged).
    pub async fn load_template(&self, template_id: &str) -> StoreResult<SavedTemplate> {
        self.read_record(template_id)
            .await?
            .into_saved(LoadPolicy::Backfill)
    }

    /// Load a template (synchronous)
    pub fn load_template_sync(&self, template_id: &str) -> StoreResult<SavedTemplate> {
        self.read_record_sync(template_id)?
            .into_saved(LoadPolicy::Backfill)
    }

    /// Load a template, failing with [`StoreError::Incomplete`] when the
    /// stored record is missing config fields.
    pub async fn load_template_strict(&self, template_id: &str) -> StoreResult<SavedTemplate> {
        self.read_record(template_id)
            .await?
            .into_saved(LoadPolicy::Strict)
    }

    /// Strict load (synchronous)
    pub fn load_template_strict_sync(&self, template_id: &str) -> StoreResult<SavedTemplate> {
        self.read_record_sync(template_id)?
            .into_saved(LoadPolicy::Strict)
    }

    /// Delete a template record.
    pub async fn delete_template(&self, template_id: &str) -> StoreResult<()> {
        let path = self.template_path(template_id)?;
        if !path.exists() {
            return Err(StoreError::NotFound(template_id.to_string()));
        }
        tokio::fs::remove_file(&path).await?;

        tracing::info!("Deleted template {}", template_id);
        Ok(())
    }

    /// Delete a template record (synchronous)
    pub fn delete_template_sync(&self, template_id: &str) -> StoreResult<()> {
        let path = self.template_path(template_id)?;
        if !path.exists() {
            return Err(StoreError::NotFound(template_id.to_string()));
        }
        std::fs::remove_file(&path)?;

        tracing::info!("Deleted template {}", template_id);
        Ok(())
    }

    /// List every readable template, sorted by name.
    ///
    /// Entries that fail to parse are skipped with a warning so one bad
    /// record cannot hide the rest of the library.
    pub async fn list_templates(&self) -> StoreResult<Vec<TemplateSummary>> {
        self.ensure_directory().await?;

        let mut summaries = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.templates_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !is_record_file(&path) {
                continue;
            }
            let parsed = tokio::fs::read_to_string(&path)
                .await
                .map_err(StoreError::from)
                .and_then(|content| parse_summary(&content));
            match parsed {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    tracing::warn!("Skipping unreadable template record {:?}: {}", path, e);
                }
            }
        }

        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    /// List every readable template (synchronous)
    pub fn list_templates_sync(&self) -> StoreResult<Vec<TemplateSummary>> {
        self.ensure_directory_sync()?;

        let mut summaries = Vec::new();
        for entry in std::fs::read_dir(&self.templates_dir)? {
            let path = entry?.path();
            if !is_record_file(&path) {
                continue;
            }
            let parsed = std::fs::read_to_string(&path)
                .map_err(StoreError::from)
                .and_then(|content| parse_summary(&content));
            match parsed {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    tracing::warn!("Skipping unreadable template record {:?}: {}", path, e);
                }
            }
        }

        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    /// Search templates by name or description, case-insensitive.
    pub async fn search_templates(&self, query: &str) -> StoreResult<Vec<TemplateSummary>> {
        let summaries = self.list_templates().await?;
        Ok(filter_by_query(summaries, query))
    }

    /// Search templates (synchronous)
    pub fn search_templates_sync(&self, query: &str) -> StoreResult<Vec<TemplateSummary>> {
        let summaries = self.list_templates_sync()?;
        Ok(filter_by_query(summaries, query))
    }

    /// List the templates filed under a category.
    pub async fn templates_in_category(
        &self,
        category: &TemplateCategory,
    ) -> StoreResult<Vec<TemplateSummary>> {
        let summaries = self.list_templates().await?;
        Ok(filter_by_category(summaries, category))
    }

    /// List the templates filed under a category (synchronous)
    pub fn templates_in_category_sync(
        &self,
        category: &TemplateCategory,
    ) -> StoreResult<Vec<TemplateSummary>> {
        let summaries = self.list_templates_sync()?;
        Ok(filter_by_category(summaries, category))
    }

    /// The default template for a document type, if one is marked.
    pub async fn default_for_type(
        &self,
        doc_type: DocumentType,
    ) -> StoreResult<Option<SavedTemplate>> {
        for summary in self.list_templates().await? {
            if summary.doc_type == doc_type && summary.is_default {
                return Ok(Some(self.load_template(&summary.id).await?));
            }
        }
        Ok(None)
    }

    /// The default template for a document type (synchronous)
    pub fn default_for_type_sync(
        &self,
        doc_type: DocumentType,
    ) -> StoreResult<Option<SavedTemplate>> {
        for summary in self.list_templates_sync()? {
            if summary.doc_type == doc_type && summary.is_default {
                return Ok(Some(self.load_template_sync(&summary.id)?));
            }
        }
        Ok(None)
    }

    /// Mark a template as the default for its document type.
    ///
    /// Any other template of the same type loses the flag, so at most one
    /// default exists per type.
    pub async fn set_default_template(&self, template_id: &str) -> StoreResult<()> {
        let mut target = self.load_template(template_id).await?;
        let doc_type = target.config.doc_type;

        for summary in self.list_templates().await? {
            if summary.id != template_id && summary.doc_type == doc_type && summary.is_default {
                let mut other = self.load_template(&summary.id).await?;
                other.is_default = false;
                self.update_template(other).await?;
            }
        }

        target.is_default = true;
        self.update_template(target).await
    }

    /// Mark a template as the default for its document type (synchronous)
    pub fn set_default_template_sync(&self, template_id: &str) -> StoreResult<()> {
        let mut target = self.load_template_sync(template_id)?;
        let doc_type = target.config.doc_type;

        for summary in self.list_templates_sync()? {
            if summary.id != template_id && summary.doc_type == doc_type && summary.is_default {
                let mut other = self.load_template_sync(&summary.id)?;
                other.is_default = false;
                self.update_template_sync(other)?;
            }
        }

        target.is_default = true;
        self.update_template_sync(target)
    }

    /// Validate and stamp an incoming template before its first write.
    fn prepare_save(&self, mut template: SavedTemplate) -> StoreResult<SavedTemplate> {
        if template.config.id.is_empty() {
            template.config.id = uuid::Uuid::new_v4().to_string();
        }
        validate_template_id(&template.config.id)?;
        template.config.validate()?;
        template.created_at = Utc::now();
        Ok(template)
    }

    /// Validate an incoming template and stamp its update time.
    fn prepare_update(&self, mut template: SavedTemplate) -> StoreResult<SavedTemplate> {
        validate_template_id(&template.config.id)?;
        template.config.validate()?;
        if !self.template_exists(&template.config.id) {
            return Err(StoreError::NotFound(template.config.id));
        }
        template.touch();
        Ok(template)
    }

    async fn read_record(&self, template_id: &str) -> StoreResult<TemplateRecord> {
        let path = self.template_path(template_id)?;
        if !path.exists() {
            return Err(StoreError::NotFound(template_id.to_string()));
        }
        let content = tokio::fs::read_to_string(&path).await?;
        TemplateRecord::from_json(&content)
    }

    fn read_record_sync(&self, template_id: &str) -> StoreResult<TemplateRecord> {
        let path = self.template_path(template_id)?;
        if !path.exists() {
            return Err(StoreError::NotFound(template_id.to_string()));
        }
        let content = std::fs::read_to_string(&path)?;
        TemplateRecord::from_json(&content)
    }
}

fn is_record_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == RECORD_EXTENSION)
        .unwrap_or(false)
}

fn parse_summary(content: &str) -> StoreResult<TemplateSummary> {
    let saved = TemplateRecord::from_json(content)?.into_saved(LoadPolicy::Backfill)?;
    Ok(TemplateSummary::from(&saved))
}

fn filter_by_query(summaries: Vec<TemplateSummary>, query: &str) -> Vec<TemplateSummary> {
    let query_lower = query.to_lowercase();
    summaries
        .into_iter()
        .filter(|summary| {
            summary.name.to_lowercase().contains(&query_lower)
                || summary.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}

fn filter_by_category(
    summaries: Vec<TemplateSummary>,
    category: &TemplateCategory,
) -> Vec<TemplateSummary> {
    let category_lower = category.to_string().to_lowercase();
    summaries
        .into_iter()
        .filter(|summary| summary.category.to_lowercase() == category_lower)
        .collect()
}

/// Template ids double as file stems, so only filesystem-safe names pass.
fn validate_template_id(id: &str) -> StoreResult<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidId(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use template_model::TemplateConfig;
    use tempfile::tempdir;

    fn saved(doc_type: DocumentType, id: &str, name: &str) -> SavedTemplate {
        let mut config = TemplateConfig::preset(doc_type).with_name(name);
        config.id = id.to_string();
        SavedTemplate::new(config)
    }

    #[test]
    fn test_store_creation() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());
        assert_eq!(store.templates_dir(), dir.path());
    }

    #[test]
    fn test_save_and_load_template() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        let template = saved(DocumentType::TrainingGuide, "onboarding-v1", "Onboarding");
        let id = store.save_template_sync(template).unwrap();
        assert_eq!(id, "onboarding-v1");
        assert!(store.template_exists("onboarding-v1"));

        let loaded = store.load_template_sync("onboarding-v1").unwrap();
        assert_eq!(loaded.config.name, "Onboarding");
        assert_eq!(loaded.config.doc_type, DocumentType::TrainingGuide);
    }

    #[test]
    fn test_save_generates_id_when_empty() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        let template = saved(DocumentType::JobAid, "", "Badge Printing");
        let id = store.save_template_sync(template).unwrap();
        assert!(!id.is_empty());
        assert!(store.template_exists(&id));
    }

    #[test]
    fn test_duplicate_save_rejected() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template_sync(saved(DocumentType::Sop, "duplicate", "First"))
            .unwrap();
        let result = store.save_template_sync(saved(DocumentType::Sop, "duplicate", "Second"));
        assert!(matches!(result, Err(StoreError::AlreadyExists(_))));
    }

    #[test]
    fn test_invalid_id_rejected() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        let result = store.save_template_sync(saved(DocumentType::Sop, "../escape", "Bad"));
        assert!(matches!(result, Err(StoreError::InvalidId(_))));
    }

    #[test]
    fn test_ids_cannot_escape_store_directory() {
        let dir = tempdir().unwrap();
        let outer = TemplateStore::new(dir.path());
        outer
            .save_template_sync(saved(DocumentType::Sop, "outside", "Outside"))
            .unwrap();

        // A store nested one level down must not reach the outer record
        let store = TemplateStore::new(dir.path().join("inner"));
        assert!(!store.template_exists("../outside"));
        assert!(matches!(
            store.load_template_sync("../outside"),
            Err(StoreError::InvalidId(_))
        ));
        assert!(matches!(
            store.load_template_strict_sync("../outside"),
            Err(StoreError::InvalidId(_))
        ));
        assert!(matches!(
            store.delete_template_sync("../outside"),
            Err(StoreError::InvalidId(_))
        ));
        assert!(dir.path().join("outside.json").exists());
    }

    #[test]
    fn test_not_found_errors() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        assert!(matches!(
            store.load_template_sync("missing"),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_template_sync("missing"),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.update_template_sync(saved(DocumentType::Sop, "missing", "Ghost")),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_template() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template_sync(saved(DocumentType::UserManual, "manual", "Manual v1"))
            .unwrap();

        let mut loaded = store.load_template_sync("manual").unwrap();
        assert_eq!(loaded.updated_at, None);
        loaded.config = loaded.config.with_name("Manual v2");
        store.update_template_sync(loaded).unwrap();

        let reloaded = store.load_template_sync("manual").unwrap();
        assert_eq!(reloaded.config.name, "Manual v2");
        assert!(reloaded.updated_at.is_some());
    }

    #[test]
    fn test_delete_template() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template_sync(saved(DocumentType::QuickStart, "to-delete", "Delete Me"))
            .unwrap();
        assert!(store.template_exists("to-delete"));

        store.delete_template_sync("to-delete").unwrap();
        assert!(!store.template_exists("to-delete"));
    }

    #[test]
    fn test_list_templates_sorted_by_name() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template_sync(saved(DocumentType::Sop, "b", "Beta"))
            .unwrap();
        store
            .save_template_sync(saved(DocumentType::Sop, "a", "Alpha"))
            .unwrap();
        store
            .save_template_sync(saved(DocumentType::Sop, "c", "Gamma"))
            .unwrap();

        let names: Vec<_> = store
            .list_templates_sync()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_list_skips_unreadable_records() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template_sync(saved(DocumentType::Sop, "good", "Good"))
            .unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

        let summaries = store.list_templates_sync().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "good");
    }

    #[test]
    fn test_search_templates() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        let mut expense = saved(DocumentType::QuickStart, "expense", "Expense Reports");
        expense.config = expense
            .config
            .with_description("Filing travel expenses in the portal");
        store.save_template_sync(expense).unwrap();
        store
            .save_template_sync(saved(DocumentType::QuickStart, "leave", "Leave Requests"))
            .unwrap();

        let results = store.search_templates_sync("expense").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "expense");

        // Description text is searched too
        let results = store.search_templates_sync("TRAVEL").unwrap();
        assert_eq!(results.len(), 1);

        let results = store.search_templates_sync("payroll").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_templates_in_category() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template_sync(saved(DocumentType::Sop, "sop-1", "Payroll Run"))
            .unwrap();
        store
            .save_template_sync(
                saved(DocumentType::Sop, "custom-1", "Audit Prep")
                    .with_category(TemplateCategory::Custom("compliance".to_string())),
            )
            .unwrap();

        let sops = store
            .templates_in_category_sync(&TemplateCategory::Type(DocumentType::Sop))
            .unwrap();
        assert_eq!(sops.len(), 1);
        assert_eq!(sops[0].id, "sop-1");

        let compliance = store
            .templates_in_category_sync(&TemplateCategory::Custom("compliance".to_string()))
            .unwrap();
        assert_eq!(compliance.len(), 1);
        assert_eq!(compliance[0].id, "custom-1");
    }

    #[test]
    fn test_single_default_per_type() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template_sync(saved(DocumentType::UserManual, "first", "First"))
            .unwrap();
        store
            .save_template_sync(saved(DocumentType::UserManual, "second", "Second"))
            .unwrap();
        // A different type keeps its own default
        store
            .save_template_sync(saved(DocumentType::Sop, "sop-default", "Sop"))
            .unwrap();
        store.set_default_template_sync("sop-default").unwrap();

        store.set_default_template_sync("first").unwrap();
        let default = store
            .default_for_type_sync(DocumentType::UserManual)
            .unwrap()
            .unwrap();
        assert_eq!(default.config.id, "first");

        // Moving the flag clears it on the previous holder
        store.set_default_template_sync("second").unwrap();
        let default = store
            .default_for_type_sync(DocumentType::UserManual)
            .unwrap()
            .unwrap();
        assert_eq!(default.config.id, "second");

        let first = store.load_template_sync("first").unwrap();
        assert!(!first.is_default);

        // The sop default is untouched
        let sop_default = store
            .default_for_type_sync(DocumentType::Sop)
            .unwrap()
            .unwrap();
        assert_eq!(sop_default.config.id, "sop-default");
    }

    #[test]
    fn test_no_default_for_type() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template_sync(saved(DocumentType::FaqDocument, "faq", "FAQ"))
            .unwrap();
        let default = store.default_for_type_sync(DocumentType::FaqDocument).unwrap();
        assert!(default.is_none());
    }

    #[test]
    fn test_strict_load_surfaces_incomplete() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template_sync(saved(DocumentType::UserManual, "partial", "Partial"))
            .unwrap();

        // Simulate a record written by an older build: drop one layout key
        let path = dir.path().join("partial.json");
        let mut value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        value["layout_config"]
            .as_object_mut()
            .unwrap()
            .remove("includeSummary");
        std::fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();

        let result = store.load_template_strict_sync("partial");
        match result {
            Err(StoreError::Incomplete { id, fields }) => {
                assert_eq!(id, "partial");
                assert_eq!(fields, vec!["includeSummary"]);
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }

        // The default load path backfills from the user_manual preset
        let loaded = store.load_template_sync("partial").unwrap();
        assert!(loaded.config.layout.include_summary);
    }

    #[tokio::test]
    async fn test_async_store_round_trip() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        let id = store
            .save_template(saved(DocumentType::ReleaseNotes, "notes", "July Release"))
            .await
            .unwrap();
        assert_eq!(id, "notes");

        let loaded = store.load_template("notes").await.unwrap();
        assert_eq!(loaded.config.name, "July Release");

        let mut updated = loaded;
        updated.config = updated.config.with_description("What shipped in July");
        store.update_template(updated).await.unwrap();

        let summaries = store.list_templates().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].description, "What shipped in July");

        store.delete_template("notes").await.unwrap();
        assert!(!store.template_exists("notes"));
    }

    #[tokio::test]
    async fn test_async_default_management() {
        let dir = tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        store
            .save_template(saved(DocumentType::PolicyDocument, "pol-a", "Policy A"))
            .await
            .unwrap();
        store
            .save_template(saved(DocumentType::PolicyDocument, "pol-b", "Policy B"))
            .await
            .unwrap();

        store.set_default_template("pol-a").await.unwrap();
        store.set_default_template("pol-b").await.unwrap();

        let default = store
            .default_for_type(DocumentType::PolicyDocument)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(default.config.id, "pol-b");

        let previous = store.load_template("pol-a").await.unwrap();
        assert!(!previous.is_default);
    }
}
