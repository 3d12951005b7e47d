//! Assignment and reminder records, their candidates, and id generation.
//!
//! JSON field names follow the persisted layout (`dueDate`, optional `note`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{JaccError, JaccResult};

/// Assignment status. `Pending -> Completed` is the only transition the store performs;
/// `Overdue` is carried as a label from seed or stored data and never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Pending,
    Completed,
    Overdue,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }

    /// Exact, case-sensitive match on the label (as the status filter does).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Pending" => Some(Self::Pending),
            "Completed" => Some(Self::Completed),
            "Overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    /// Older stored data may carry "Critical"; it loads as High.
    #[serde(alias = "Critical")]
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub priority: Priority,
}

impl Assignment {
    /// Case-insensitive (title, subject) plus exact due date.
    pub(crate) fn collides_with(&self, candidate: &NewAssignment) -> bool {
        self.title.to_lowercase() == candidate.title.to_lowercase()
            && self.subject.to_lowercase() == candidate.subject.to_lowercase()
            && self.due_date == candidate.due_date
    }
}

/// Input for `add_assignment`. Status is not part of the candidate: new records start Pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub title: String,
    pub subject: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
}

impl NewAssignment {
    pub fn new(title: impl Into<String>, subject: impl Into<String>, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            due_date,
            priority,
        }
    }

    pub(crate) fn validate(&self) -> JaccResult<()> {
        require_title(&self.title)
    }

    pub(crate) fn into_record(self) -> Assignment {
        Assignment {
            id: fresh_id("assignment"),
            title: self.title,
            subject: self.subject,
            due_date: self.due_date,
            status: AssignmentStatus::Pending,
            priority: self.priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Reminder {
    pub(crate) fn collides_with(&self, candidate: &NewReminder) -> bool {
        self.title.to_lowercase() == candidate.title.to_lowercase() && self.date == candidate.date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReminder {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewReminder {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub(crate) fn validate(&self) -> JaccResult<()> {
        require_title(&self.title)
    }

    pub(crate) fn into_record(self) -> Reminder {
        Reminder {
            id: fresh_id("reminder"),
            title: self.title,
            date: self.date,
            note: self.note,
        }
    }
}

fn require_title(title: &str) -> JaccResult<()> {
    if title.trim().is_empty() {
        return Err(JaccError::InvalidRecord("title must not be empty".to_string()));
    }
    Ok(())
}

fn fresh_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn assignment_json_uses_persisted_field_names() {
        let a = NewAssignment::new("NLP Report", "NLP", date("2026-02-15"), Priority::High).into_record();
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["dueDate"], "2026-02-15");
        assert_eq!(v["status"], "Pending");
        assert_eq!(v["priority"], "High");
        assert!(a.id.starts_with("assignment-"));
    }

    #[test]
    fn critical_priority_loads_as_high() {
        let raw = r#"{"id":"2","title":"ML Model Implementation","subject":"Machine Learning","dueDate":"2026-02-12","status":"Pending","priority":"Critical"}"#;
        let a: Assignment = serde_json::from_str(raw).unwrap();
        assert_eq!(a.priority, Priority::High);
    }

    #[test]
    fn missing_priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        let p: Priority = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn reminder_note_is_omitted_when_absent() {
        let r = NewReminder::new("Submit project", date("2026-02-20")).into_record();
        let v = serde_json::to_value(&r).unwrap();
        assert!(v.get("note").is_none());
        assert_ne!(r.id, NewReminder::new("Submit project", date("2026-02-20")).into_record().id);
    }

    #[test]
    fn blank_title_is_rejected() {
        let c = NewAssignment::new("   ", "NLP", date("2026-02-15"), Priority::Low);
        assert!(matches!(c.validate(), Err(JaccError::InvalidRecord(_))));
    }
}
