//! Chat tools: named operations an assistant can call with JSON parameters.
//!
//! Read-only tools consult the [`Catalog`] or the provider's snapshots. Mutating tools
//! go through the provider interface only, so duplicate and lifecycle rules hold.

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::catalog::{time_left, Catalog, Severity};
use crate::dashboard;
use crate::dates::parse_date;
use crate::error::{JaccError, JaccResult};
use crate::provider::CollegeData;
use crate::records::{AssignmentStatus, NewAssignment, NewReminder, Priority};

/// Everything a tool may touch during one call.
pub struct ToolContext<'a> {
    pub data: &'a mut CollegeData,
    pub catalog: &'a Catalog,
    pub now: NaiveDateTime,
}

pub trait CollegeTool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Whether the tool writes through the provider.
    fn mutates(&self) -> bool {
        false
    }

    fn execute(&self, ctx: &mut ToolContext<'_>, params: Value) -> JaccResult<Value>;
}

type ToolFn = fn(&mut ToolContext<'_>, Value) -> JaccResult<Value>;

/// A tool backed by a plain function.
pub struct BuiltinTool {
    name: &'static str,
    description: &'static str,
    mutates: bool,
    run: ToolFn,
}

impl CollegeTool for BuiltinTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn mutates(&self) -> bool {
        self.mutates
    }

    fn execute(&self, ctx: &mut ToolContext<'_>, params: Value) -> JaccResult<Value> {
        (self.run)(ctx, params)
    }
}

pub struct ToolRegistry {
    tools: Vec<Arc<dyn CollegeTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registers a tool; a later registration with the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn CollegeTool>) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CollegeTool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// (name, description) pairs in registration order.
    pub fn list(&self) -> Vec<(String, String)> {
        self.tools
            .iter()
            .map(|t| (t.name().to_string(), t.description().to_string()))
            .collect()
    }

    pub fn invoke(&self, name: &str, ctx: &mut ToolContext<'_>, params: Value) -> JaccResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| JaccError::UnknownTool(name.to_string()))?;
        debug!(tool = name, mutates = tool.mutates(), "invoking tool");
        let result = tool.execute(ctx, params);
        if let Err(ref e) = result {
            warn!(tool = name, error = %e, "tool call failed");
        }
        result
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for tool in builtin_tools() {
            registry.register(Arc::new(tool));
        }
        registry
    }
}

fn builtin_tools() -> Vec<BuiltinTool> {
    vec![
        BuiltinTool {
            name: "get-statistics",
            description: "Dashboard statistics: assignment counts, today's classes, upcoming exams, active reminders and unread alerts.",
            mutates: false,
            run: get_statistics,
        },
        BuiltinTool {
            name: "get-dashboard",
            description: "Academic summary: pending work, urgent assignments, upcoming reminders and the current or next class.",
            mutates: false,
            run: get_dashboard,
        },
        BuiltinTool {
            name: "get-alerts",
            description: "Alerts and notifications, newest first. Optional severity: Info, Warning or Critical.",
            mutates: false,
            run: get_alerts,
        },
        BuiltinTool {
            name: "get-timetable",
            description: "Class timetable for a day of the week (default Monday).",
            mutates: false,
            run: get_timetable,
        },
        BuiltinTool {
            name: "get-today-schedule",
            description: "Today's classes, detecting the current day.",
            mutates: false,
            run: get_today_schedule,
        },
        BuiltinTool {
            name: "get-subject-info",
            description: "Faculty, code and location for a subject name or code.",
            mutates: false,
            run: get_subject_info,
        },
        BuiltinTool {
            name: "generate-study-plan",
            description: "Day-by-day study plan for a topic (default Cloud Security, 5 days).",
            mutates: false,
            run: generate_study_plan,
        },
        BuiltinTool {
            name: "get-next-exam",
            description: "The next upcoming exam with days remaining, or null.",
            mutates: false,
            run: get_next_exam,
        },
        BuiltinTool {
            name: "get-exams",
            description: "All exams with a countdown and urgency label.",
            mutates: false,
            run: get_exams,
        },
        BuiltinTool {
            name: "get-assignments",
            description: "Tracked assignments. Optional status: Pending, Completed or Overdue.",
            mutates: false,
            run: get_assignments,
        },
        BuiltinTool {
            name: "get-reminders",
            description: "Reminders sorted by date.",
            mutates: false,
            run: get_reminders,
        },
        BuiltinTool {
            name: "add-assignment",
            description: "Add an assignment (title, subject, dueDate as YYYY-MM-DD or DD-MM-YYYY, priority). Rejects duplicates.",
            mutates: true,
            run: add_assignment,
        },
        BuiltinTool {
            name: "complete-assignment",
            description: "Mark the assignment with this id, or the first whose title contains the text, as completed.",
            mutates: true,
            run: complete_assignment,
        },
        BuiltinTool {
            name: "add-reminder",
            description: "Add a reminder (title, date, optional note). Rejects duplicates.",
            mutates: true,
            run: add_reminder,
        },
        BuiltinTool {
            name: "delete-reminder",
            description: "Delete a reminder by id.",
            mutates: true,
            run: delete_reminder,
        },
    ]
}

/// Null params are treated as an empty object.
fn params<T: DeserializeOwned>(value: Value) -> JaccResult<T> {
    let value = if value.is_null() { json!({}) } else { value };
    serde_json::from_value(value).map_err(|e| JaccError::InvalidParams(e.to_string()))
}

#[derive(Deserialize)]
struct NoParams {}

#[derive(Deserialize)]
struct SeverityParams {
    severity: Option<String>,
}

#[derive(Deserialize)]
struct DayParams {
    day: Option<String>,
}

#[derive(Deserialize)]
struct QueryParams {
    query: String,
}

#[derive(Deserialize)]
struct StudyPlanParams {
    topic: Option<String>,
    days: Option<usize>,
}

#[derive(Deserialize)]
struct StatusParams {
    status: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddAssignmentParams {
    title: String,
    subject: String,
    due_date: String,
    #[serde(default)]
    priority: Priority,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompleteParams {
    #[serde(alias = "id", alias = "title")]
    id_or_title: String,
}

#[derive(Deserialize)]
struct AddReminderParams {
    title: String,
    date: String,
    note: Option<String>,
}

#[derive(Deserialize)]
struct IdParams {
    id: String,
}

fn get_statistics(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let _: NoParams = params(p)?;
    Ok(serde_json::to_value(dashboard::statistics(ctx.data, ctx.catalog, ctx.now))?)
}

fn get_dashboard(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let _: NoParams = params(p)?;
    Ok(serde_json::to_value(dashboard::summary(ctx.data, ctx.catalog, ctx.now))?)
}

fn get_alerts(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let SeverityParams { severity } = params(p)?;
    let alerts = match severity.as_deref() {
        None => ctx.catalog.alerts(None),
        Some(label) => match Severity::from_label(label) {
            Some(s) => ctx.catalog.alerts(Some(s)),
            None => Vec::new(),
        },
    };
    Ok(serde_json::to_value(alerts)?)
}

fn get_timetable(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let DayParams { day } = params(p)?;
    Ok(serde_json::to_value(ctx.catalog.timetable_for(day.as_deref()))?)
}

fn get_today_schedule(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let _: NoParams = params(p)?;
    Ok(serde_json::to_value(ctx.catalog.today_schedule(ctx.now.date()))?)
}

fn get_subject_info(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let QueryParams { query } = params(p)?;
    Ok(serde_json::to_value(ctx.catalog.subject_info(&query))?)
}

fn generate_study_plan(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let StudyPlanParams { topic, days } = params(p)?;
    Ok(serde_json::to_value(ctx.catalog.study_plan(topic.as_deref(), days))?)
}

fn get_next_exam(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let _: NoParams = params(p)?;
    Ok(serde_json::to_value(ctx.catalog.next_exam(ctx.now.date()))?)
}

fn get_exams(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let _: NoParams = params(p)?;
    let rows: Vec<Value> = ctx
        .catalog
        .all_exams()
        .into_iter()
        .map(|exam| {
            let left = time_left(exam.date, ctx.now);
            json!({ "exam": exam, "timeLeft": left, "urgency": left.urgency() })
        })
        .collect();
    Ok(Value::Array(rows))
}

fn get_assignments(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let StatusParams { status } = params(p)?;
    let assignments = match status.as_deref() {
        None => ctx.data.assignments().to_vec(),
        Some(label) => match AssignmentStatus::from_label(label) {
            Some(s) => ctx.data.assignments_with_status(s),
            None => Vec::new(),
        },
    };
    Ok(serde_json::to_value(assignments)?)
}

fn get_reminders(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let _: NoParams = params(p)?;
    Ok(serde_json::to_value(ctx.data.reminders_by_date())?)
}

fn add_assignment(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let AddAssignmentParams {
        title,
        subject,
        due_date,
        priority,
    } = params(p)?;
    let candidate = NewAssignment::new(title, subject, parse_date(&due_date)?, priority);
    Ok(serde_json::to_value(ctx.data.add_assignment(candidate)?)?)
}

fn complete_assignment(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let CompleteParams { id_or_title } = params(p)?;
    let completed = ctx.data.complete_assignment(&id_or_title);
    Ok(json!({ "completed": completed }))
}

fn add_reminder(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let AddReminderParams { title, date, note } = params(p)?;
    let mut candidate = NewReminder::new(title, parse_date(&date)?);
    candidate.note = note.filter(|n| !n.trim().is_empty());
    Ok(serde_json::to_value(ctx.data.add_reminder(candidate)?)?)
}

fn delete_reminder(ctx: &mut ToolContext<'_>, p: Value) -> JaccResult<Value> {
    let IdParams { id } = params(p)?;
    ctx.data.delete_reminder(&id);
    Ok(json!({ "deleted": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::ymd;
    use crate::storage::Persistence;
    use chrono::{TimeZone, Utc};

    fn setup() -> (CollegeData, Catalog, NaiveDateTime) {
        let now = ymd(2026, 2, 9).and_hms_opt(8, 0, 0).unwrap();
        let catalog = Catalog::builtin(Utc.from_utc_datetime(&now));
        (CollegeData::open(Persistence::detached(), Vec::new()), catalog, now)
    }

    #[test]
    fn default_registry_lists_every_builtin() {
        let reg = ToolRegistry::default();
        let names: Vec<_> = reg.list().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names.len(), 15);
        assert!(names.contains(&"add-assignment".to_string()));
        assert!(reg.get("get-subject-info").is_some());
        assert!(reg.get("complete-assignment").unwrap().mutates());
    }

    #[test]
    fn add_then_complete_through_tools() {
        let (mut data, catalog, now) = setup();
        let reg = ToolRegistry::default();
        let mut ctx = ToolContext { data: &mut data, catalog: &catalog, now };

        let added = reg
            .invoke(
                "add-assignment",
                &mut ctx,
                json!({"title": "NLP Report", "subject": "NLP", "dueDate": "15-02-2026", "priority": "High"}),
            )
            .unwrap();
        assert_eq!(added["dueDate"], "2026-02-15");
        assert_eq!(added["status"], "Pending");

        let dup = reg.invoke(
            "add-assignment",
            &mut ctx,
            json!({"title": "nlp report", "subject": "nlp", "dueDate": "2026-02-15"}),
        );
        assert!(dup.unwrap_err().is_duplicate());

        let done = reg
            .invoke("complete-assignment", &mut ctx, json!({"idOrTitle": "NLP"}))
            .unwrap();
        assert_eq!(done["completed"], true);
        let pending = reg
            .invoke("get-assignments", &mut ctx, json!({"status": "Pending"}))
            .unwrap();
        assert_eq!(pending.as_array().unwrap().len(), 0);
    }

    #[test]
    fn reminder_tools_round_trip() {
        let (mut data, catalog, now) = setup();
        let reg = ToolRegistry::default();
        let mut ctx = ToolContext { data: &mut data, catalog: &catalog, now };
        let r = reg
            .invoke("add-reminder", &mut ctx, json!({"title": "Submit project", "date": "2026-02-20"}))
            .unwrap();
        let id = r["id"].as_str().unwrap().to_string();
        reg.invoke("delete-reminder", &mut ctx, json!({ "id": id })).unwrap();
        let left = reg.invoke("get-reminders", &mut ctx, Value::Null).unwrap();
        assert_eq!(left, json!([]));
    }

    #[test]
    fn read_only_tools_answer_from_catalog() {
        let (mut data, catalog, now) = setup();
        let reg = ToolRegistry::default();
        let mut ctx = ToolContext { data: &mut data, catalog: &catalog, now };

        let info = reg
            .invoke("get-subject-info", &mut ctx, json!({"query": "cloud"}))
            .unwrap();
        assert_eq!(info["faculty"], "B. Panduranga Raju");

        let today = reg.invoke("get-today-schedule", &mut ctx, json!({})).unwrap();
        assert_eq!(today["day"], "Monday");

        let next = reg.invoke("get-next-exam", &mut ctx, Value::Null).unwrap();
        assert_eq!(next["id"], "exam-1");
        assert_eq!(next["daysRemaining"], 0);

        let warnings = reg
            .invoke("get-alerts", &mut ctx, json!({"severity": "Warning"}))
            .unwrap();
        assert_eq!(warnings.as_array().unwrap().len(), 1);
        let bogus = reg
            .invoke("get-alerts", &mut ctx, json!({"severity": "Apocalyptic"}))
            .unwrap();
        assert_eq!(bogus, json!([]));
    }

    #[test]
    fn unknown_tool_and_bad_params() {
        let (mut data, catalog, now) = setup();
        let reg = ToolRegistry::default();
        let mut ctx = ToolContext { data: &mut data, catalog: &catalog, now };
        assert!(matches!(
            reg.invoke("launch-rocket", &mut ctx, Value::Null),
            Err(JaccError::UnknownTool(_))
        ));
        assert!(matches!(
            reg.invoke("get-subject-info", &mut ctx, json!({})),
            Err(JaccError::InvalidParams(_))
        ));
        assert!(matches!(
            reg.invoke(
                "add-assignment",
                &mut ctx,
                json!({"title": "X", "subject": "Y", "dueDate": "someday"})
            ),
            Err(JaccError::InvalidRecord(_))
        ));
    }
}
