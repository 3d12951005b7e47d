//! Academic alerts and notifications.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Info" => Some(Self::Info),
            "Warning" => Some(Self::Warning),
            "Critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertCategory {
    Security,
    System,
    Personnel,
    Mission,
    Academic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub category: AlertCategory,
}

impl Catalog {
    /// Alerts newest first, optionally restricted to one severity.
    pub fn alerts(&self, severity: Option<Severity>) -> Vec<Alert> {
        let mut out = match severity {
            Some(s) => self.alerts.filter(&|a| a.severity == s),
            None => self.alerts.list(),
        };
        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        out
    }

    pub fn unread_alert_count(&self) -> usize {
        self.alerts.filter(&|a| !a.is_read).len()
    }
}

pub fn builtin_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            id: "a1".to_string(),
            title: "Assignment Due Soon".to_string(),
            message: "Machine Learning assignment is due in 2 days. Make sure to submit before the deadline.".to_string(),
            severity: Severity::Warning,
            timestamp: now - Duration::minutes(15),
            is_read: false,
            category: AlertCategory::Academic,
        },
        Alert {
            id: "a2".to_string(),
            title: "Class Schedule Update".to_string(),
            message: "Tomorrow's Data Structures class has been moved to Room 301.".to_string(),
            severity: Severity::Info,
            timestamp: now - Duration::hours(2),
            is_read: false,
            category: AlertCategory::Academic,
        },
        Alert {
            id: "a3".to_string(),
            title: "Exam Reminder".to_string(),
            message: "Database Management exam is scheduled for next week. Start your revision!".to_string(),
            severity: Severity::Info,
            timestamp: now - Duration::hours(5),
            is_read: true,
            category: AlertCategory::Academic,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticSource;
    use std::sync::Arc;

    #[test]
    fn alerts_sorted_newest_first_and_filtered() {
        let now = Utc::now();
        let mut c = Catalog::builtin(now);
        let mut shuffled = builtin_alerts(now);
        shuffled.reverse();
        c.alerts = Arc::new(StaticSource::new(shuffled));

        let ids: Vec<_> = c.alerts(None).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["a1", "a2", "a3"]);

        let info: Vec<_> = c.alerts(Some(Severity::Info)).into_iter().map(|a| a.id).collect();
        assert_eq!(info, ["a2", "a3"]);
        assert!(c.alerts(Some(Severity::Critical)).is_empty());
        assert_eq!(c.unread_alert_count(), 2);
    }
}
