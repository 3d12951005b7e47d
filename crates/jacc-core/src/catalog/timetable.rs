//! Weekly class timetable, today's schedule, and subject lookup.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Catalog;

pub const DEFAULT_TIMETABLE_DAY: &str = "Monday";

static CODE_IN_PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("valid regex"));
static SLOT_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{2})(?:\s*-\s*(\d{1,2}):(\d{2}))?").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    /// Slot label such as "09:15-10:05". Afternoon hours are written 01:30 etc.
    pub time: String,
    /// Display label, usually "Name (CODE)".
    pub subject: String,
    pub instructor: String,
    pub location: String,
    pub day: String,
}

impl ScheduleEntry {
    pub fn is_break(&self) -> bool {
        self.subject.trim().eq_ignore_ascii_case("lunch")
    }

    /// Start and end of the slot in minutes since midnight. A missing end means one hour.
    pub fn minutes(&self) -> Option<(u32, u32)> {
        let caps = SLOT_RANGE.captures(&self.time)?;
        let start = clock_minutes(caps.get(1)?.as_str(), caps.get(2)?.as_str())?;
        let end = match (caps.get(3), caps.get(4)) {
            (Some(h), Some(m)) => clock_minutes(h.as_str(), m.as_str())?,
            _ => start + 60,
        };
        Some((start, end))
    }
}

/// Slot labels use a 12-hour clock without a marker; 01:00–07:59 are afternoon.
fn clock_minutes(hour: &str, minute: &str) -> Option<u32> {
    let mut h: u32 = hour.parse().ok()?;
    let m: u32 = minute.parse().ok()?;
    if (1..8).contains(&h) {
        h += 12;
    }
    Some(h * 60 + m)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySchedule {
    pub day: String,
    pub schedule: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub subject: String,
    pub code: String,
    pub faculty: String,
    pub location: String,
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The slot in progress at `now`, else the next one to start; `None` once the day is over.
pub fn current_or_next_class(schedule: &[ScheduleEntry], now: NaiveTime) -> Option<&ScheduleEntry> {
    let current = now.hour() * 60 + now.minute();
    schedule.iter().find(|entry| match entry.minutes() {
        Some((_, end)) => current < end,
        None => false,
    })
}

impl Catalog {
    /// Slots for `day` (case-insensitive), Monday when no day is given.
    pub fn timetable_for(&self, day: Option<&str>) -> Vec<ScheduleEntry> {
        let day = day
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_TIMETABLE_DAY)
            .to_string();
        self.timetable.filter(&|e| e.day.eq_ignore_ascii_case(&day))
    }

    pub fn today_schedule(&self, today: NaiveDate) -> TodaySchedule {
        let day = weekday_name(today);
        TodaySchedule {
            day: day.to_string(),
            schedule: self.timetable_for(Some(day)),
        }
    }

    /// First timetable slot whose subject label contains `query` (case-insensitive),
    /// also trying the label with parentheses removed so "(23A3261T)" style codes match.
    pub fn subject_info(&self, query: &str) -> Option<SubjectInfo> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        let entry = self.timetable.list().into_iter().find(|e| {
            let label = e.subject.to_lowercase();
            label.contains(&query) || label.replace(['(', ')'], "").contains(&query)
        })?;
        let code = CODE_IN_PARENS
            .captures(&entry.subject)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let subject = entry
            .subject
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        Some(SubjectInfo {
            subject,
            code,
            faculty: entry.instructor,
            location: entry.location,
        })
    }
}

fn slot(id: &str, time: &str, subject: &str, instructor: &str, location: &str, day: &str) -> ScheduleEntry {
    ScheduleEntry {
        id: id.to_string(),
        time: time.to_string(),
        subject: subject.to_string(),
        instructor: instructor.to_string(),
        location: location.to_string(),
        day: day.to_string(),
    }
}

const PA: &str = "Predictive Analytics (23A3261T)";
const CLP: &str = "Computational Language Processing (23A3063T)";
const DM: &str = "Disaster Management (23A016GT)";
const ICC: &str = "Introduction to Cloud Computing (23A326DT)";
const DV: &str = "Data Visualization (23A3262T)";
const NSC: &str = "Network Security & Cryptography (23A326AT)";
const TPW: &str = "Technical Paper Writing & IPR (23AHS67T)";

const GOUD: &str = "B. Venkatesu Goud";
const BABU: &str = "A. Ramesh Babu";
const NAGARAJ: &str = "M. Nagaraj";
const RAJU: &str = "B. Panduranga Raju";
const SWATHI: &str = "N. Swathi";
const RENUKA: &str = "P. Renuka";
const KUMAR: &str = "M. Nagaraju Kumar";
const SOFT_SKILLS_STAFF: &str = "B. Jaheer, S. Saiyam";

const ROOM: &str = "B. Ed 410";

pub fn builtin_timetable() -> Vec<ScheduleEntry> {
    vec![
        slot("mon-1", "09:15-10:05", PA, GOUD, ROOM, "Monday"),
        slot("mon-2", "10:05-10:55", CLP, BABU, ROOM, "Monday"),
        slot("mon-3", "10:55-11:45", DM, NAGARAJ, ROOM, "Monday"),
        slot("mon-4", "11:45-12:35", ICC, RAJU, ROOM, "Monday"),
        slot("mon-5", "12:35-01:30", "LUNCH", "-", "-", "Monday"),
        slot("mon-6", "01:30-02:20", DV, SWATHI, ROOM, "Monday"),
        slot("mon-7", "02:20-03:10", NSC, RENUKA, ROOM, "Monday"),
        slot("mon-8", "03:10-04:00", TPW, KUMAR, ROOM, "Monday"),
        slot("tue-1", "09:15-10:55", "Soft Skills Lab (23AHS65L)", SOFT_SKILLS_STAFF, "BELL LAB", "Tuesday"),
        slot("tue-2", "10:55-11:45", NSC, RENUKA, ROOM, "Tuesday"),
        slot("tue-3", "11:45-12:35", ICC, RAJU, ROOM, "Tuesday"),
        slot("tue-4", "12:35-01:30", "LUNCH", "-", "-", "Tuesday"),
        slot("tue-5", "01:30-02:20", "Soft Skills (23AHS65L)", SOFT_SKILLS_STAFF, ROOM, "Tuesday"),
        slot("tue-6", "02:20-03:10", CLP, BABU, ROOM, "Tuesday"),
        slot("tue-7", "03:10-04:00", DV, SWATHI, ROOM, "Tuesday"),
        slot("wed-1", "09:15-10:05", ICC, RAJU, ROOM, "Wednesday"),
        slot("wed-2", "10:05-10:55", PA, GOUD, ROOM, "Wednesday"),
        slot("wed-3", "10:55-11:45", CLP, BABU, ROOM, "Wednesday"),
        slot("wed-4", "11:45-12:35", NSC, RENUKA, ROOM, "Wednesday"),
        slot("wed-5", "12:35-01:30", "LUNCH", "-", "-", "Wednesday"),
        slot("wed-6", "01:30-02:20", DV, SWATHI, ROOM, "Wednesday"),
        slot("wed-7", "02:20-03:10", CLP, BABU, ROOM, "Wednesday"),
        slot("wed-8", "03:10-04:00", DM, NAGARAJ, ROOM, "Wednesday"),
        slot("thu-1", "09:15-10:05", NSC, RENUKA, ROOM, "Thursday"),
        slot("thu-2", "10:05-10:55", ICC, RAJU, ROOM, "Thursday"),
        slot("thu-3", "10:55-11:45", DM, NAGARAJ, ROOM, "Thursday"),
        slot("thu-4", "11:45-12:35", PA, GOUD, ROOM, "Thursday"),
        slot("thu-5", "12:35-01:30", "LUNCH", "-", "-", "Thursday"),
        slot("thu-6", "01:30-03:10", "NLP & Data Visualization Lab (23A3263L)", SWATHI, "PR LAB", "Thursday"),
        slot("fri-1", "09:15-10:05", DM, NAGARAJ, ROOM, "Friday"),
        slot("fri-2", "10:05-10:55", CLP, BABU, ROOM, "Friday"),
        slot("fri-3", "10:55-11:45", DV, SWATHI, ROOM, "Friday"),
        slot("fri-4", "11:45-12:35", ICC, RAJU, ROOM, "Friday"),
        slot("fri-5", "12:35-01:30", "LUNCH", "-", "-", "Friday"),
        slot("fri-6", "01:30-02:20", NSC, RENUKA, ROOM, "Friday"),
        slot("fri-7", "02:20-03:10", PA, GOUD, ROOM, "Friday"),
        slot("sat-1", "09:15-10:05", TPW, KUMAR, ROOM, "Saturday"),
        slot("sat-2", "10:05-10:55", DV, SWATHI, ROOM, "Saturday"),
        slot("sat-3", "10:55-11:45", PA, GOUD, ROOM, "Saturday"),
        slot("sat-4", "11:45-12:35", DM, NAGARAJ, ROOM, "Saturday"),
        slot("sat-5", "12:35-01:30", "LUNCH", "-", "-", "Saturday"),
        slot("sat-6", "01:30-04:00", "Predictive Analytics Lab (23A3261L)", GOUD, "PR LAB", "Saturday"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticSource;
    use chrono::Utc;
    use std::sync::Arc;

    fn catalog() -> Catalog {
        Catalog::builtin(Utc::now())
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn timetable_defaults_to_monday_and_ignores_case() {
        let c = catalog();
        assert_eq!(c.timetable_for(None).len(), 8);
        assert_eq!(c.timetable_for(Some("thursday")).len(), 6);
        assert!(c.timetable_for(Some("Sunday")).is_empty());
    }

    #[test]
    fn today_schedule_uses_weekday() {
        let c = catalog();
        // 2026-02-09 is a Monday; 2026-02-15 a Sunday.
        let monday = c.today_schedule(NaiveDate::from_ymd_opt(2026, 2, 9).unwrap());
        assert_eq!(monday.day, "Monday");
        assert_eq!(monday.schedule[0].id, "mon-1");
        let sunday = c.today_schedule(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
        assert_eq!(sunday.day, "Sunday");
        assert!(sunday.schedule.is_empty());
    }

    #[test]
    fn subject_info_by_name_or_code() {
        let c = catalog();
        let info = c.subject_info("predictive").unwrap();
        assert_eq!(info.subject, "Predictive Analytics");
        assert_eq!(info.code, "23A3261T");
        assert_eq!(info.faculty, GOUD);
        assert_eq!(info.location, ROOM);

        let by_code = c.subject_info("23a326at").unwrap();
        assert_eq!(by_code.subject, "Network Security & Cryptography");
        assert!(c.subject_info("underwater basket weaving").is_none());
        assert!(c.subject_info("   ").is_none());
    }

    #[test]
    fn subject_info_reads_injected_fixture() {
        let mut c = catalog();
        c.timetable = Arc::new(StaticSource::new(vec![slot(
            "x-1", "09:00-10:00", "Compilers", "Dr. Who", "Lab 9", "Monday",
        )]));
        let info = c.subject_info("compilers").unwrap();
        assert_eq!(info.code, "");
        assert_eq!(info.subject, "Compilers");
    }

    #[test]
    fn afternoon_slots_are_ordered_after_noon() {
        let monday = catalog().timetable_for(Some("Monday"));
        let lunch = &monday[4];
        assert!(lunch.is_break());
        assert_eq!(lunch.minutes(), Some((12 * 60 + 35, 13 * 60 + 30)));

        assert_eq!(current_or_next_class(&monday, at(8, 0)).unwrap().id, "mon-1");
        assert_eq!(current_or_next_class(&monday, at(9, 30)).unwrap().id, "mon-1");
        assert_eq!(current_or_next_class(&monday, at(14, 0)).unwrap().id, "mon-6");
        assert!(current_or_next_class(&monday, at(16, 30)).is_none());
    }
}
