//! Aggregate views over live college data and the catalog.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::catalog::{current_or_next_class, Catalog, ScheduleEntry};
use crate::provider::CollegeData;
use crate::records::{Assignment, AssignmentStatus, Reminder};

/// Pending assignments due within this many days count as urgent.
pub const URGENT_WINDOW_DAYS: i64 = 2;

/// Reminders within this many days show as upcoming.
pub const REMINDER_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_assignments: usize,
    pub completed_assignments: usize,
    pub upcoming_classes: usize,
    pub upcoming_exams: usize,
    pub active_reminders: usize,
    pub active_alerts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub day: String,
    pub pending_assignments: usize,
    pub completed_assignments: usize,
    pub urgent_assignments: Vec<Assignment>,
    pub upcoming_reminders: Vec<Reminder>,
    pub classes_today: usize,
    pub current_or_next_class: Option<ScheduleEntry>,
}

pub fn statistics(data: &CollegeData, catalog: &Catalog, now: NaiveDateTime) -> Statistics {
    let today = now.date();
    Statistics {
        total_assignments: data.assignments().len(),
        completed_assignments: count_status(data.assignments(), AssignmentStatus::Completed),
        upcoming_classes: classes(&catalog.today_schedule(today).schedule),
        upcoming_exams: catalog.upcoming_exams(today).len(),
        active_reminders: data.reminders().iter().filter(|r| r.date >= today).count(),
        active_alerts: catalog.unread_alert_count(),
    }
}

pub fn summary(data: &CollegeData, catalog: &Catalog, now: NaiveDateTime) -> DashboardSummary {
    let today = now.date();
    let urgent_until = today + Duration::days(URGENT_WINDOW_DAYS);
    let reminders_until = today + Duration::days(REMINDER_WINDOW_DAYS);
    let schedule = catalog.today_schedule(today);

    let urgent_assignments = data
        .assignments()
        .iter()
        .filter(|a| a.status == AssignmentStatus::Pending)
        .filter(|a| a.due_date >= today && a.due_date <= urgent_until)
        .cloned()
        .collect();
    let upcoming_reminders = data
        .reminders_by_date()
        .into_iter()
        .filter(|r| r.date >= today && r.date <= reminders_until)
        .collect();

    DashboardSummary {
        pending_assignments: count_status(data.assignments(), AssignmentStatus::Pending),
        completed_assignments: count_status(data.assignments(), AssignmentStatus::Completed),
        urgent_assignments,
        upcoming_reminders,
        classes_today: classes(&schedule.schedule),
        current_or_next_class: current_or_next_class(&schedule.schedule, now.time()).cloned(),
        day: schedule.day,
    }
}

fn count_status(items: &[Assignment], status: AssignmentStatus) -> usize {
    items.iter().filter(|a| a.status == status).count()
}

fn classes(schedule: &[ScheduleEntry]) -> usize {
    schedule.iter().filter(|e| !e.is_break()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{NewAssignment, NewReminder, Priority};
    use crate::seed::ymd;
    use crate::storage::Persistence;
    use chrono::{TimeZone, Utc};

    fn fixture() -> (CollegeData, Catalog, NaiveDateTime) {
        let now = ymd(2026, 2, 9).and_hms_opt(10, 0, 0).unwrap();
        let catalog = Catalog::builtin(Utc.from_utc_datetime(&now));
        let mut data = CollegeData::open(Persistence::detached(), Vec::new());
        data.add_assignment(NewAssignment::new("Due tomorrow", "PA", ymd(2026, 2, 10), Priority::High))
            .unwrap();
        data.add_assignment(NewAssignment::new("Due next week", "PA", ymd(2026, 2, 16), Priority::Low))
            .unwrap();
        data.add_assignment(NewAssignment::new("Done", "PA", ymd(2026, 2, 10), Priority::Low))
            .unwrap();
        data.complete_assignment("Done");
        data.add_reminder(NewReminder::new("Soon", ymd(2026, 2, 11))).unwrap();
        data.add_reminder(NewReminder::new("Later", ymd(2026, 2, 20))).unwrap();
        data.add_reminder(NewReminder::new("Past", ymd(2026, 2, 1))).unwrap();
        (data, catalog, now)
    }

    #[test]
    fn statistics_reflect_live_data() {
        let (data, catalog, now) = fixture();
        let stats = statistics(&data, &catalog, now);
        assert_eq!(stats.total_assignments, 3);
        assert_eq!(stats.completed_assignments, 1);
        // Monday: eight slots, one of them lunch.
        assert_eq!(stats.upcoming_classes, 7);
        assert_eq!(stats.upcoming_exams, 6);
        assert_eq!(stats.active_reminders, 2);
        assert_eq!(stats.active_alerts, 2);
    }

    #[test]
    fn summary_windows() {
        let (data, catalog, now) = fixture();
        let s = summary(&data, &catalog, now);
        assert_eq!(s.day, "Monday");
        assert_eq!(s.pending_assignments, 2);
        assert_eq!(s.urgent_assignments.len(), 1);
        assert_eq!(s.urgent_assignments[0].title, "Due tomorrow");
        assert_eq!(s.upcoming_reminders.len(), 1);
        assert_eq!(s.upcoming_reminders[0].title, "Soon");
        assert_eq!(s.current_or_next_class.unwrap().id, "mon-1");
    }
}
