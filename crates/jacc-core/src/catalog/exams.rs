//! Exam schedule and countdowns.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::seed::ymd;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
    /// Filled in relative to a reference date by `next_exam` / `upcoming_exams`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syllabus: Vec<String>,
}

impl Exam {
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    fn with_days_remaining(mut self, today: NaiveDate) -> Self {
        self.days_remaining = Some(self.days_until(today));
        self
    }
}

/// Time until an exam starts (midnight of its date). Negative `days` once it has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Passed,
    Urgent,
    Approaching,
    Scheduled,
}

impl TimeLeft {
    pub fn urgency(&self) -> Urgency {
        match self.days {
            d if d < 0 => Urgency::Passed,
            0..=2 => Urgency::Urgent,
            3..=7 => Urgency::Approaching,
            _ => Urgency::Scheduled,
        }
    }
}

/// Floors to whole days; hours and minutes are the non-negative remainder.
pub fn time_left(exam_date: NaiveDate, now: NaiveDateTime) -> TimeLeft {
    let start = exam_date.and_time(chrono::NaiveTime::MIN);
    let total_minutes = (start - now).num_minutes();
    let rem = total_minutes.rem_euclid(24 * 60);
    TimeLeft {
        days: total_minutes.div_euclid(24 * 60),
        hours: rem / 60,
        minutes: rem % 60,
    }
}

impl Catalog {
    /// All exams, earliest first.
    pub fn all_exams(&self) -> Vec<Exam> {
        let mut exams = self.exams.list();
        exams.sort_by_key(|e| e.date);
        exams
    }

    /// Exams on or after `today`, earliest first, with `days_remaining` set.
    pub fn upcoming_exams(&self, today: NaiveDate) -> Vec<Exam> {
        let mut exams: Vec<Exam> = self
            .exams
            .filter(&|e| e.date >= today)
            .into_iter()
            .map(|e| e.with_days_remaining(today))
            .collect();
        exams.sort_by_key(|e| e.date);
        exams
    }

    pub fn next_exam(&self, today: NaiveDate) -> Option<Exam> {
        self.upcoming_exams(today).into_iter().next()
    }
}

fn final_exam(id: &str, subject: &str, code: &str, date: NaiveDate, syllabus: [&str; 4]) -> Exam {
    Exam {
        id: id.to_string(),
        subject: subject.to_string(),
        code: Some(code.to_string()),
        date,
        time: "09:00 AM - 12:00 PM".to_string(),
        location: "Exam Hall".to_string(),
        duration: Some("3 hours".to_string()),
        exam_type: Some("Final".to_string()),
        days_remaining: None,
        syllabus: syllabus.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn builtin_exams() -> Vec<Exam> {
    vec![
        final_exam(
            "exam-1",
            "Predictive Analytics",
            "23A3261T",
            ymd(2026, 2, 9),
            ["Regression Analysis", "Time Series Forecasting", "Machine Learning Models", "Model Evaluation"],
        ),
        final_exam(
            "exam-2",
            "Introduction to Cloud Computing",
            "23A326DT",
            ymd(2026, 2, 10),
            ["AWS Services", "Azure Fundamentals", "Docker Containers", "Kubernetes Orchestration"],
        ),
        final_exam(
            "exam-3",
            "Computational Language Processing",
            "23A3063T",
            ymd(2026, 2, 11),
            ["NLP Fundamentals", "Transformers Architecture", "BERT & GPT", "Text Processing"],
        ),
        final_exam(
            "exam-4",
            "Network Security & Cryptography",
            "23A326AT",
            ymd(2026, 2, 12),
            ["Cryptographic Algorithms", "Network Protocols", "Security Architecture", "Threat Analysis"],
        ),
        final_exam(
            "exam-5",
            "Data Visualization",
            "23A3262T",
            ymd(2026, 2, 13),
            ["D3.js Fundamentals", "Tableau Basics", "Python Visualization Tools", "Chart Design Principles"],
        ),
        final_exam(
            "exam-6",
            "Disaster Management",
            "23A016GT",
            ymd(2026, 2, 16),
            ["Disaster Preparedness", "Crisis Management", "Risk Assessment", "Emergency Response"],
        ),
    ]
}
