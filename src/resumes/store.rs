// src/resumes/store.rs
//! In-memory resume collection and its view projection.
//!
//! The store owns the records outright; the HTTP layer shares it behind the
//! application state lock. `visible` is a pure projection over the current
//! records, while `archive` and `remove` are the only mutation paths.

use thiserror::Error;

use super::models::{ResumeRecord, ResumeStatus, SortKey, ViewOptions};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate resume id in seed collection: {0}")]
    DuplicateId(String),
    #[error("match score {score} out of range for resume {id} (expected 0-100)")]
    ScoreOutOfRange { id: String, score: u8 },
}

#[derive(Debug, Clone)]
pub struct ResumeStore {
    records: Vec<ResumeRecord>,
}

impl ResumeStore {
    /// Build a store from seeded records, enforcing the collection
    /// invariants: unique ids and match scores within 0-100.
    pub fn new(records: Vec<ResumeRecord>) -> Result<Self, StoreError> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
            if let Some(score) = record.match_score {
                if score > 100 {
                    return Err(StoreError::ScoreOutOfRange {
                        id: record.id.clone(),
                        score,
                    });
                }
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ResumeRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ResumeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Compute the filtered, sorted projection of the collection.
    ///
    /// Never mutates stored state; calling it repeatedly with the same
    /// options yields the same sequence. The sort is stable, so records
    /// with equal keys keep their seeded relative order.
    pub fn visible(&self, options: &ViewOptions) -> Vec<ResumeRecord> {
        let needle = options.search.trim().to_lowercase();
        let mut visible: Vec<ResumeRecord> = self
            .records
            .iter()
            .filter(|r| matches_search(r, &needle))
            .filter(|r| options.status.allows(r.status))
            .filter(|r| options.bracket.matches(&r.experience))
            .cloned()
            .collect();

        match options.sort {
            SortKey::Name => {
                visible.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
            SortKey::MatchScore => visible.sort_by(|a, b| {
                b.match_score
                    .unwrap_or(0)
                    .cmp(&a.match_score.unwrap_or(0))
            }),
            SortKey::UploadDate => visible.sort_by(|a, b| b.upload_date.cmp(&a.upload_date)),
        }

        visible
    }

    /// Set the matching record's status to archived, leaving every other
    /// field untouched. Returns false when the id is absent.
    pub fn archive(&mut self, id: &str) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.status = ResumeStatus::Archived;
                true
            }
            None => false,
        }
    }

    /// Remove the matching record permanently. Returns false when the id
    /// is absent, so a repeated remove is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }
}

/// Case-insensitive substring match against name, position, or any skill.
/// An empty needle matches every record.
fn matches_search(record: &ResumeRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(needle)
        || record.position.to_lowercase().contains(needle)
        || record
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
}
