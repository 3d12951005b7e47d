//! Data provider: the single read/write interface over assignments and reminders.
//!
//! Loads both collections once at construction and writes the full affected
//! collection back after every successful mutation, in call order.

use tracing::{debug, info};

use crate::assignments::AssignmentStore;
use crate::error::JaccResult;
use crate::records::{Assignment, AssignmentStatus, NewAssignment, NewReminder, Reminder};
use crate::reminders::ReminderStore;
use crate::storage::{Persistence, ASSIGNMENTS_STORAGE_KEY, REMINDERS_STORAGE_KEY};

pub struct CollegeData {
    assignments: AssignmentStore,
    reminders: ReminderStore,
    persistence: Persistence,
}

impl CollegeData {
    /// `seed` is used when no assignment snapshot is stored (or it is unreadable).
    /// The seed is not written back until the first assignment mutation.
    pub fn open(persistence: Persistence, seed: Vec<Assignment>) -> Self {
        let assignments = persistence.load(ASSIGNMENTS_STORAGE_KEY, seed);
        let reminders = persistence.load(REMINDERS_STORAGE_KEY, Vec::new());
        info!(
            assignments = assignments.len(),
            reminders = reminders.len(),
            persisted = persistence.is_attached(),
            "college data loaded"
        );
        Self {
            assignments: AssignmentStore::new(assignments),
            reminders: ReminderStore::new(reminders),
            persistence,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        self.assignments.as_slice()
    }

    pub fn assignments_with_status(&self, status: AssignmentStatus) -> Vec<Assignment> {
        self.assignments.by_status(status)
    }

    pub fn reminders(&self) -> &[Reminder] {
        self.reminders.as_slice()
    }

    pub fn reminders_by_date(&self) -> Vec<Reminder> {
        self.reminders.sorted_by_date()
    }

    pub fn add_assignment(&mut self, candidate: NewAssignment) -> JaccResult<Assignment> {
        let record = self.assignments.add(candidate)?;
        debug!(id = %record.id, title = %record.title, "assignment added");
        self.persist_assignments();
        Ok(record)
    }

    pub fn complete_assignment(&mut self, id_or_title: &str) -> bool {
        let updated = self.assignments.complete(id_or_title);
        if updated {
            debug!(query = id_or_title, "assignment completed");
            self.persist_assignments();
        } else {
            debug!(query = id_or_title, "no assignment matched");
        }
        updated
    }

    pub fn add_reminder(&mut self, candidate: NewReminder) -> JaccResult<Reminder> {
        let record = self.reminders.add(candidate)?;
        debug!(id = %record.id, title = %record.title, "reminder added");
        self.persist_reminders();
        Ok(record)
    }

    /// Removing an unknown id is a no-op; the snapshot is still rewritten.
    pub fn delete_reminder(&mut self, id: &str) {
        if self.reminders.remove(id) {
            debug!(id, "reminder deleted");
        }
        self.persist_reminders();
    }

    fn persist_assignments(&self) {
        self.persistence
            .save(ASSIGNMENTS_STORAGE_KEY, self.assignments.as_slice());
    }

    fn persist_reminders(&self) {
        self.persistence
            .save(REMINDERS_STORAGE_KEY, self.reminders.as_slice());
    }
}
