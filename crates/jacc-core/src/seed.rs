//! Default assignment collection used when nothing is stored yet.

use chrono::NaiveDate;

use crate::records::{Assignment, AssignmentStatus, Priority};

/// Calendar date from constant components. Callers pass valid dates only.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn seeded(
    id: &str,
    title: &str,
    subject: &str,
    due_date: NaiveDate,
    status: AssignmentStatus,
    priority: Priority,
) -> Assignment {
    Assignment {
        id: id.to_string(),
        title: title.to_string(),
        subject: subject.to_string(),
        due_date,
        status,
        priority,
    }
}

pub fn seed_assignments() -> Vec<Assignment> {
    use AssignmentStatus::*;
    vec![
        seeded("1", "Cloud Security Project Report", "Cloud Security", ymd(2026, 2, 15), Pending, Priority::High),
        seeded("2", "ML Model Implementation", "Machine Learning", ymd(2026, 2, 12), Pending, Priority::High),
        seeded("3", "Database Design Document", "Database Systems", ymd(2026, 2, 20), Pending, Priority::Medium),
        seeded("4", "Web Portfolio", "Web Development", ymd(2026, 1, 28), Completed, Priority::Medium),
        seeded("5", "Network Topology Analysis", "Network Security", ymd(2026, 2, 10), Pending, Priority::High),
    ]
}
