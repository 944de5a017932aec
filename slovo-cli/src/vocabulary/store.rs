//! JSON-file vocabulary store

use super::entry::{VocabularyEntry, WordType, STUDY_LISTS};
use crate::error::CliError;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Number of export records kept in the history
pub const EXPORT_HISTORY_LIMIT: usize = 10;

/// One completed export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub platform: String,
    /// Study list that was exported, or "all"
    pub category: String,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreData {
    #[serde(default)]
    vocabulary: Vec<VocabularyEntry>,
    #[serde(default)]
    export_history: Vec<ExportRecord>,
}

/// Filters for listing entries; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub list: Option<String>,
    pub word_type: Option<WordType>,
    pub search: Option<String>,
}

impl EntryFilter {
    fn matches(&self, entry: &VocabularyEntry) -> bool {
        self.list
            .as_deref()
            .map_or(true, |list| list == "all" || entry.category == list)
            && self.word_type.map_or(true, |t| entry.word_type == t)
            && self
                .search
                .as_deref()
                .map_or(true, |needle| entry.matches_search(needle))
    }
}

/// How `import` treats existing entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Keep existing entries, add imported ones with unseen ids
    Merge,
    /// Discard existing entries
    Replace,
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
}

/// Entry counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyStats {
    pub total: usize,
    /// Per study list; the standard lists are always present
    pub by_list: BTreeMap<String, usize>,
    pub by_type: BTreeMap<WordType, usize>,
    pub exports: usize,
}

/// Vocabulary entries and export history backed by one JSON file
#[derive(Debug)]
pub struct VocabularyStore {
    path: PathBuf,
    data: StoreData,
}

impl VocabularyStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::StoreError(format!("{}: {e}", path.display())))?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::StoreError(format!("{}: {e}", path.display())))?
        } else {
            log::info!("Starting new vocabulary store at {}", path.display());
            StoreData::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Write the store back to its file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| CliError::StoreError(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)
            .map_err(|e| CliError::StoreError(format!("{}: {e}", self.path.display())))?;
        log::debug!(
            "Saved {} entries to {}",
            self.data.vocabulary.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.data.vocabulary
    }

    pub fn len(&self) -> usize {
        self.data.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.vocabulary.is_empty()
    }

    /// One past the largest id in use
    ///
    /// Fails when the largest id is already `u64::MAX`.
    pub fn next_id(&self) -> Result<u64> {
        match self.data.vocabulary.iter().map(|entry| entry.id).max() {
            None => Ok(1),
            Some(id) => id.checked_add(1).ok_or_else(|| {
                CliError::StoreError(format!(
                    "{}: no id left after {id}",
                    self.path.display()
                ))
                .into()
            }),
        }
    }

    /// Add `entry` under a fresh id and return that id
    pub fn insert(&mut self, mut entry: VocabularyEntry) -> Result<u64> {
        entry.id = self.next_id()?;
        let id = entry.id;
        self.data.vocabulary.push(entry);
        Ok(id)
    }

    pub fn get(&self, id: u64) -> Option<&VocabularyEntry> {
        self.data.vocabulary.iter().find(|entry| entry.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut VocabularyEntry> {
        self.data.vocabulary.iter_mut().find(|entry| entry.id == id)
    }

    /// Remove the entry with `id`
    pub fn remove(&mut self, id: u64) -> Result<VocabularyEntry> {
        let position = self
            .data
            .vocabulary
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CliError::EntryNotFound(id))?;
        Ok(self.data.vocabulary.remove(position))
    }

    /// Drop every entry and the export history; returns the entry count
    pub fn clear(&mut self) -> usize {
        let count = self.data.vocabulary.len();
        self.data.vocabulary.clear();
        self.data.export_history.clear();
        count
    }

    /// Entries matching `filter`, newest first
    pub fn query(&self, filter: &EntryFilter) -> Vec<&VocabularyEntry> {
        let mut entries: Vec<&VocabularyEntry> = self
            .data
            .vocabulary
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect();
        entries.sort_by(|a, b| b.date_added.cmp(&a.date_added).then(b.id.cmp(&a.id)));
        entries
    }

    /// Entries on `list` (or every entry for "all"), in insertion order
    pub fn select_list(&self, list: &str) -> Vec<&VocabularyEntry> {
        self.data
            .vocabulary
            .iter()
            .filter(|entry| list == "all" || entry.category == list)
            .collect()
    }

    /// Bring in entries from a backup
    pub fn import(&mut self, entries: Vec<VocabularyEntry>, mode: ImportMode) -> ImportSummary {
        match mode {
            ImportMode::Replace => {
                let added = entries.len();
                self.data.vocabulary = entries;
                ImportSummary { added, skipped: 0 }
            }
            ImportMode::Merge => {
                let mut seen: HashSet<u64> =
                    self.data.vocabulary.iter().map(|entry| entry.id).collect();
                let total = entries.len();
                let fresh: Vec<VocabularyEntry> = entries
                    .into_iter()
                    .filter(|entry| seen.insert(entry.id))
                    .collect();
                let added = fresh.len();
                self.data.vocabulary.extend(fresh);
                ImportSummary {
                    added,
                    skipped: total - added,
                }
            }
        }
    }

    /// Record an export, keeping the most recent ones first
    pub fn record_export(&mut self, platform: &str, list: &str, count: usize, at: DateTime<Utc>) {
        self.data.export_history.insert(
            0,
            ExportRecord {
                platform: platform.to_string(),
                category: list.to_string(),
                count,
                timestamp: at,
            },
        );
        self.data.export_history.truncate(EXPORT_HISTORY_LIMIT);
    }

    pub fn export_history(&self) -> &[ExportRecord] {
        &self.data.export_history
    }

    pub fn stats(&self) -> VocabularyStats {
        let mut by_list: BTreeMap<String, usize> = STUDY_LISTS
            .iter()
            .map(|list| (list.to_string(), 0))
            .collect();
        let mut by_type: BTreeMap<WordType, usize> = BTreeMap::new();

        for entry in &self.data.vocabulary {
            *by_list.entry(entry.category.clone()).or_default() += 1;
            *by_type.entry(entry.word_type).or_default() += 1;
        }

        VocabularyStats {
            total: self.data.vocabulary.len(),
            by_list,
            by_type,
            exports: self.data.export_history.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::entry::test_support::entry;
    use tempfile::TempDir;

    fn store_with(entries: Vec<VocabularyEntry>) -> (TempDir, VocabularyStore) {
        let dir = TempDir::new().unwrap();
        let mut store = VocabularyStore::open(&dir.path().join("vocab.json")).unwrap();
        store.import(entries, ImportMode::Replace);
        (dir, store)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = VocabularyStore::open(&dir.path().join("none.json")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.next_id().unwrap(), 1);
    }

    #[test]
    fn test_open_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, "{ not json").unwrap();
        let err = VocabularyStore::open(&path).unwrap_err();
        assert!(err.to_string().starts_with("Vocabulary store error"));
    }

    #[test]
    fn test_insert_assigns_max_plus_one() {
        let (_dir, mut store) = store_with(vec![
            entry(7, "вода", "water", "review", "2024-01-01"),
            entry(3, "рыбак", "fisherman", "review", "2024-01-02"),
        ]);
        let id = store
            .insert(entry(0, "голова", "head", "lesson", "2024-01-03"))
            .unwrap();
        assert_eq!(id, 8);
        assert_eq!(store.get(8).unwrap().word, "голова");
    }

    #[test]
    fn test_insert_after_max_id_is_an_error() {
        let (_dir, mut store) =
            store_with(vec![entry(u64::MAX, "вода", "water", "review", "2024-01-01")]);
        let err = store
            .insert(entry(0, "голова", "head", "lesson", "2024-01-03"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::StoreError(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("vocab.json");

        let mut store = VocabularyStore::open(&path).unwrap();
        store
            .insert(entry(0, "вода", "water", "review", "2024-01-01"))
            .unwrap();
        store.record_export("Anki", "all", 1, Utc::now());
        store.save().unwrap();

        let reopened = VocabularyStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.entries()[0].id, 1);
        assert_eq!(reopened.export_history().len(), 1);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"exportHistory\""));
        assert!(raw.contains("\"vocabulary\""));
    }

    #[test]
    fn test_remove() {
        let (_dir, mut store) = store_with(vec![entry(1, "вода", "water", "review", "2024-01-01")]);
        assert_eq!(store.remove(1).unwrap().word, "вода");
        let err = store.remove(1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::EntryNotFound(1))
        ));
    }

    #[test]
    fn test_query_filters_and_orders_newest_first() {
        let mut verb = entry(3, "читать", "to read", "lesson", "2024-02-01");
        verb.word_type = WordType::Verb;
        let (_dir, store) = store_with(vec![
            entry(1, "вода", "water", "review", "2024-01-01"),
            entry(2, "голова", "head", "review", "2024-03-01"),
            verb,
        ]);

        let all: Vec<u64> = store.query(&EntryFilter::default()).iter().map(|e| e.id).collect();
        assert_eq!(all, vec![2, 3, 1]);

        let review = store.query(&EntryFilter {
            list: Some("review".to_string()),
            ..Default::default()
        });
        assert_eq!(review.len(), 2);

        let verbs = store.query(&EntryFilter {
            word_type: Some(WordType::Verb),
            ..Default::default()
        });
        assert_eq!(verbs.len(), 1);
        assert_eq!(verbs[0].word, "читать");

        let searched = store.query(&EntryFilter {
            search: Some("HEAD".to_string()),
            ..Default::default()
        });
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].id, 2);
    }

    #[test]
    fn test_select_list_keeps_insertion_order() {
        let (_dir, store) = store_with(vec![
            entry(1, "вода", "water", "review", "2024-05-01"),
            entry(2, "голова", "head", "lesson", "2024-01-01"),
            entry(3, "рыбак", "fisherman", "review", "2024-03-01"),
        ]);
        let ids: Vec<u64> = store.select_list("review").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.select_list("all").len(), 3);
        assert!(store.select_list("critical").is_empty());
    }

    #[test]
    fn test_import_merge_skips_known_ids() {
        let (_dir, mut store) = store_with(vec![entry(1, "вода", "water", "review", "2024-01-01")]);
        let summary = store.import(
            vec![
                entry(1, "вода", "water", "review", "2024-01-01"),
                entry(2, "рыбак", "fisherman", "review", "2024-01-02"),
                entry(2, "рыбак", "fisherman", "review", "2024-01-02"),
            ],
            ImportMode::Merge,
        );
        assert_eq!(summary, ImportSummary { added: 1, skipped: 2 });
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_import_replace() {
        let (_dir, mut store) = store_with(vec![entry(1, "вода", "water", "review", "2024-01-01")]);
        let summary = store.import(
            vec![entry(5, "голова", "head", "lesson", "2024-01-01")],
            ImportMode::Replace,
        );
        assert_eq!(summary.added, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].id, 5);
    }

    #[test]
    fn test_export_history_is_capped() {
        let (_dir, mut store) = store_with(Vec::new());
        for count in 0..12 {
            store.record_export("Quizlet", "review", count, Utc::now());
        }
        let history = store.export_history();
        assert_eq!(history.len(), EXPORT_HISTORY_LIMIT);
        assert_eq!(history[0].count, 11);
    }

    #[test]
    fn test_stats() {
        let mut verb = entry(3, "читать", "to read", "custom", "2024-02-01");
        verb.word_type = WordType::Verb;
        let (_dir, store) = store_with(vec![
            entry(1, "вода", "water", "review", "2024-01-01"),
            entry(2, "голова", "head", "review", "2024-03-01"),
            verb,
        ]);

        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_list["review"], 2);
        assert_eq!(stats.by_list["critical"], 0);
        assert_eq!(stats.by_list["custom"], 1);
        assert_eq!(stats.by_type[&WordType::Noun], 2);
        assert_eq!(stats.by_type[&WordType::Verb], 1);
    }

    #[test]
    fn test_clear() {
        let (_dir, mut store) = store_with(vec![entry(1, "вода", "water", "review", "2024-01-01")]);
        store.record_export("Anki", "all", 1, Utc::now());
        assert_eq!(store.clear(), 1);
        assert!(store.is_empty());
        assert!(store.export_history().is_empty());
    }
}
