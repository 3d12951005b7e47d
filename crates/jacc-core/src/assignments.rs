//! Ordered assignment collection with insert-if-absent and first-match completion.

use crate::error::{JaccError, JaccResult, RecordKind};
use crate::records::{Assignment, AssignmentStatus, NewAssignment};

/// Insertion order is preserved; the most recent record is last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentStore {
    items: Vec<Assignment>,
}

impl AssignmentStore {
    pub fn new(items: Vec<Assignment>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[Assignment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Duplicate check and id assignment happen together; on rejection nothing changes.
    pub fn add(&mut self, candidate: NewAssignment) -> JaccResult<Assignment> {
        candidate.validate()?;
        if self.items.iter().any(|existing| existing.collides_with(&candidate)) {
            return Err(JaccError::DuplicateEntry {
                kind: RecordKind::Assignment,
            });
        }
        let record = candidate.into_record();
        self.items.push(record.clone());
        Ok(record)
    }

    /// Marks one record Completed. An exact id match anywhere wins; otherwise the first
    /// record (in stored order) whose title contains `query`, case-insensitively.
    pub fn complete(&mut self, query: &str) -> bool {
        let Some(index) = self.find_target(query) else {
            return false;
        };
        self.items[index].status = AssignmentStatus::Completed;
        true
    }

    fn find_target(&self, query: &str) -> Option<usize> {
        if let Some(i) = self.items.iter().position(|a| a.id == query) {
            return Some(i);
        }
        let needle = query.to_lowercase();
        self.items
            .iter()
            .position(|a| a.title.to_lowercase().contains(&needle))
    }

    pub fn by_status(&self, status: AssignmentStatus) -> Vec<Assignment> {
        self.items
            .iter()
            .filter(|a| a.status == status)
            .cloned()
            .collect()
    }
}
