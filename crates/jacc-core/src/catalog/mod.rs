//! Read-only datasets (timetable, exams, study plans, alerts) behind an injected data-source trait.
//!
//! Nothing here is ambient global state: consumers receive a [`Catalog`] and tests can
//! build one from fixtures with [`StaticSource`].

mod alerts;
mod exams;
mod study_plan;
mod timetable;

use chrono::{DateTime, Utc};
use std::sync::Arc;

pub use alerts::{builtin_alerts, Alert, AlertCategory, Severity};
pub use exams::{builtin_exams, time_left, Exam, TimeLeft, Urgency};
pub use study_plan::{builtin_study_plans, StudyPlan, StudyPlanEntry, DEFAULT_PLAN_DAYS, DEFAULT_PLAN_TOPIC};
pub use timetable::{
    builtin_timetable, current_or_next_class, weekday_name, ScheduleEntry, SubjectInfo, TodaySchedule,
    DEFAULT_TIMETABLE_DAY,
};

/// A read-only collection of records.
pub trait DataSource<T>: Send + Sync {
    /// All records in source order.
    fn list(&self) -> Vec<T>;

    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.list().into_iter().filter(|item| predicate(item)).collect()
    }
}

/// Data source over an owned vector.
pub struct StaticSource<T> {
    items: Vec<T>,
}

impl<T> StaticSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone + Send + Sync> DataSource<T> for StaticSource<T> {
    fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.items.iter().filter(|item| predicate(*item)).cloned().collect()
    }
}

/// The read-only side of the assistant: everything the chat tools can look up but never change.
#[derive(Clone)]
pub struct Catalog {
    pub timetable: Arc<dyn DataSource<ScheduleEntry>>,
    pub exams: Arc<dyn DataSource<Exam>>,
    pub study_plans: Arc<dyn DataSource<StudyPlan>>,
    pub alerts: Arc<dyn DataSource<Alert>>,
}

impl Catalog {
    /// The bundled demo datasets. Alert timestamps are relative to `now`.
    pub fn builtin(now: DateTime<Utc>) -> Self {
        Self {
            timetable: Arc::new(StaticSource::new(builtin_timetable())),
            exams: Arc::new(StaticSource::new(builtin_exams())),
            study_plans: Arc::new(StaticSource::new(builtin_study_plans())),
            alerts: Arc::new(StaticSource::new(builtin_alerts(now))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_filter_keeps_order() {
        let src = StaticSource::new(vec![1, 2, 3, 4]);
        assert_eq!(src.filter(&|n| n % 2 == 0), vec![2, 4]);
        assert_eq!(src.list(), vec![1, 2, 3, 4]);
    }
}
