//! Ordered reminder collection.

use crate::error::{JaccError, JaccResult, RecordKind};
use crate::records::{NewReminder, Reminder};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderStore {
    items: Vec<Reminder>,
}

impl ReminderStore {
    pub fn new(items: Vec<Reminder>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[Reminder] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, candidate: NewReminder) -> JaccResult<Reminder> {
        candidate.validate()?;
        if self.items.iter().any(|existing| existing.collides_with(&candidate)) {
            return Err(JaccError::DuplicateEntry {
                kind: RecordKind::Reminder,
            });
        }
        let record = candidate.into_record();
        self.items.push(record.clone());
        Ok(record)
    }

    /// Removes the record with `id`. Returns whether anything was removed; absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() != before
    }

    /// Earliest first; reminders on the same date keep insertion order.
    pub fn sorted_by_date(&self) -> Vec<Reminder> {
        let mut out = self.items.clone();
        out.sort_by_key(|r| r.date);
        out
    }
}
