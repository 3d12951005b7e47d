//! jacc: command-line front-end for the college assistant.
//!
//! Usage:
//!   jacc assignments [--status Pending|Completed|Overdue]
//!   jacc add-assignment --title T --subject S --due 2026-02-15 [--priority High]
//!   jacc complete <id-or-title-fragment>
//!   jacc reminders | add-reminder --title T --date D [--note N] | delete-reminder <id>
//!   jacc timetable [DAY] | today | subject <query> | exams | next-exam
//!   jacc study-plan [--topic T] [--days N] | alerts [--severity S] | stats | dashboard
//!   jacc tools | tool <name> [json-params]
//!
//! Every command is a call into the tool registry; output is pretty-printed JSON.
//! Storage: JACC__STORAGE_PATH or `storage_path` in config/jacc.toml (default ./data).

use jacc_core::{open_college_data, Catalog, JaccConfig, ToolContext, ToolRegistry};
use serde_json::{json, Map, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[jacc] .env not loaded: {}", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    };
    std::process::exit(code);
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };

    let registry = ToolRegistry::default();
    if command == "tools" {
        for (name, description) in registry.list() {
            println!("{:<22} {}", name, description);
        }
        return Ok(());
    }

    let (tool, params) = match to_tool_call(command, rest)? {
        Some(call) => call,
        None => {
            print_usage();
            return Ok(());
        }
    };

    let config = JaccConfig::load()?;
    tracing::debug!(storage_path = %config.storage_path, tool = %tool, "running command");
    let mut data = open_college_data(&config);
    let now = chrono::Local::now();
    let catalog = Catalog::builtin(now.with_timezone(&chrono::Utc));
    let mut ctx = ToolContext {
        data: &mut data,
        catalog: &catalog,
        now: now.naive_local(),
    };

    let output = registry.invoke(&tool, &mut ctx, params)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Maps a command line onto (tool name, JSON params). `None` for unknown commands.
fn to_tool_call(command: &str, rest: &[String]) -> Result<Option<(String, Value)>, Box<dyn std::error::Error>> {
    let (flags, positional) = split_flags(rest);
    let first = positional.first().cloned();
    let call = match command {
        "assignments" => ("get-assignments", flags),
        "add-assignment" => ("add-assignment", rename(flags, "due", "dueDate")),
        "complete" => ("complete-assignment", json!({ "idOrTitle": required(first, "id or title")? })),
        "reminders" => ("get-reminders", json!({})),
        "add-reminder" => ("add-reminder", flags),
        "delete-reminder" => ("delete-reminder", json!({ "id": required(first, "reminder id")? })),
        "timetable" => ("get-timetable", json!({ "day": first })),
        "today" => ("get-today-schedule", json!({})),
        "subject" => ("get-subject-info", json!({ "query": required(first, "subject query")? })),
        "exams" => ("get-exams", json!({})),
        "next-exam" => ("get-next-exam", json!({})),
        "study-plan" => ("generate-study-plan", numeric(flags, "days")),
        "alerts" => ("get-alerts", flags),
        "stats" => ("get-statistics", json!({})),
        "dashboard" => ("get-dashboard", json!({})),
        "tool" => {
            let name = required(first, "tool name")?;
            let params = match positional.get(1) {
                Some(raw) => serde_json::from_str(raw)?,
                None => Value::Null,
            };
            return Ok(Some((name, params)));
        }
        _ => return Ok(None),
    };
    Ok(Some((call.0.to_string(), call.1)))
}

/// `--key value` pairs into a JSON object; everything else is positional.
fn split_flags(args: &[String]) -> (Value, Vec<String>) {
    let mut flags = Map::new();
    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.strip_prefix("--") {
            Some(key) => {
                let value = iter.next().cloned().unwrap_or_default();
                flags.insert(key.to_string(), Value::String(value));
            }
            None => positional.push(arg.clone()),
        }
    }
    (Value::Object(flags), positional)
}

fn rename(mut flags: Value, from: &str, to: &str) -> Value {
    if let Some(obj) = flags.as_object_mut() {
        if let Some(v) = obj.remove(from) {
            obj.insert(to.to_string(), v);
        }
    }
    flags
}

fn numeric(mut flags: Value, key: &str) -> Value {
    if let Some(obj) = flags.as_object_mut() {
        if let Some(n) = obj.get(key).and_then(Value::as_str).and_then(|s| s.parse::<u64>().ok()) {
            obj.insert(key.to_string(), json!(n));
        }
    }
    flags
}

fn required(value: Option<String>, what: &str) -> Result<String, String> {
    value.ok_or_else(|| format!("missing {}", what))
}

fn print_usage() {
    eprintln!("jacc: college assistant");
    eprintln!("  assignments [--status S]            List assignments");
    eprintln!("  add-assignment --title T --subject S --due D [--priority P]");
    eprintln!("  complete <id|title>                 Mark an assignment completed");
    eprintln!("  reminders                           List reminders by date");
    eprintln!("  add-reminder --title T --date D [--note N]");
    eprintln!("  delete-reminder <id>");
    eprintln!("  timetable [DAY] | today | subject <query>");
    eprintln!("  exams | next-exam | study-plan [--topic T] [--days N]");
    eprintln!("  alerts [--severity S] | stats | dashboard");
    eprintln!("  tools                               List chat tools");
    eprintln!("  tool <name> [json]                  Call a chat tool directly");
}
