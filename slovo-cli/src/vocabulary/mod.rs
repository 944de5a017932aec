//! Saved vocabulary: entries, the JSON store and export formats

pub mod entry;
pub mod export;
pub mod store;

pub use entry::{VocabularyEntry, WordType, STUDY_LISTS};
pub use export::ExportFormat;
pub use store::{EntryFilter, ExportRecord, ImportMode, ImportSummary, VocabularyStats, VocabularyStore};
