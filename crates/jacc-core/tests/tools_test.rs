//! Integration test: chat tools over a shared in-memory store.
//!
//! Mutating tools must leave a snapshot behind that a fresh provider picks up.

use chrono::{NaiveDate, TimeZone, Utc};
use jacc_core::{
    Catalog, CollegeData, KeyValueStore, MemoryStore, Persistence, ToolContext, ToolRegistry,
    ASSIGNMENTS_STORAGE_KEY, REMINDERS_STORAGE_KEY,
};
use serde_json::json;
use std::sync::Arc;

#[test]
fn tool_mutations_are_persisted() {
    let store = MemoryStore::new();
    let now = NaiveDate::from_ymd_opt(2026, 2, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let catalog = Catalog::builtin(Utc.from_utc_datetime(&now));
    let registry = ToolRegistry::default();

    let mut data = CollegeData::open(Persistence::new(Arc::new(store.clone())), jacc_core::seed_assignments());
    assert!(store.get(ASSIGNMENTS_STORAGE_KEY).unwrap().is_none());

    {
        let mut ctx = ToolContext { data: &mut data, catalog: &catalog, now };
        registry
            .invoke("complete-assignment", &mut ctx, json!({ "title": "Cloud" }))
            .unwrap();
        registry
            .invoke(
                "add-reminder",
                &mut ctx,
                json!({ "title": "Lab viva", "date": "12/02/2026", "note": "bring record" }),
            )
            .unwrap();
    }
    assert!(store.get(ASSIGNMENTS_STORAGE_KEY).unwrap().is_some());
    assert!(store.get(REMINDERS_STORAGE_KEY).unwrap().is_some());

    let mut reloaded = CollegeData::open(Persistence::new(Arc::new(store.clone())), Vec::new());
    assert_eq!(reloaded.assignments(), data.assignments());
    let mut ctx = ToolContext { data: &mut reloaded, catalog: &catalog, now };
    let reminders = registry.invoke("get-reminders", &mut ctx, json!(null)).unwrap();
    assert_eq!(reminders[0]["date"], "2026-02-12");
    assert_eq!(reminders[0]["note"], "bring record");
}

#[test]
fn statistics_follow_live_data() {
    let now = NaiveDate::from_ymd_opt(2026, 2, 9)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let catalog = Catalog::builtin(Utc.from_utc_datetime(&now));
    let registry = ToolRegistry::default();
    let mut data = CollegeData::open(Persistence::detached(), Vec::new());
    let mut ctx = ToolContext { data: &mut data, catalog: &catalog, now };

    let before = registry.invoke("get-statistics", &mut ctx, json!({})).unwrap();
    registry
        .invoke(
            "add-assignment",
            &mut ctx,
            json!({ "title": "Essay", "subject": "English", "dueDate": "2026-02-20" }),
        )
        .unwrap();
    let after = registry.invoke("get-statistics", &mut ctx, json!({})).unwrap();
    assert_eq!(
        after["totalAssignments"].as_u64().unwrap(),
        before["totalAssignments"].as_u64().unwrap() + 1
    );
}
