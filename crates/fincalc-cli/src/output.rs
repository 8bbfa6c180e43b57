//! Rendering of solve reports. Presentation rounding (two decimals for the
//! table and minimal formats) happens here and only here; the JSON and CSV
//! formats carry full precision.

use serde_json::Value;
use tabled::{builder::Builder, Table};

use crate::OutputFormat;

/// Dispatch a report to the selected formatter.
pub fn render(format: &OutputFormat, report: &Value) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => print_table(report),
        OutputFormat::Csv => print_csv(report),
        OutputFormat::Minimal => print_minimal(report),
    }
}

fn print_json(report: &Value) {
    match serde_json::to_string_pretty(report) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

fn print_table(report: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);

    if let Some(Value::Object(result)) = report.get("result") {
        for (key, val) in result {
            builder.push_record([key.as_str(), &display_value(val, true)]);
        }
    }
    if let Some(Value::Object(inputs)) = report.get("inputs") {
        for (key, val) in inputs {
            if !val.is_null() {
                builder.push_record([key.as_str(), &display_value(val, false)]);
            }
        }
    }

    let table = Table::from(builder);
    println!("{}", table);
}

fn print_csv(report: &Value) {
    let stdout = std::io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["field", "value"]);
    if let Some(Value::Object(result)) = report.get("result") {
        for (key, val) in result {
            let _ = wtr.write_record([key.as_str(), &display_value(val, false)]);
        }
    }
    if let Some(Value::Object(inputs)) = report.get("inputs") {
        for (key, val) in inputs {
            if !val.is_null() {
                let _ = wtr.write_record([key.as_str(), &display_value(val, false)]);
            }
        }
    }
    let _ = wtr.flush();
}

/// Print only the computed value, rounded the way the calculator displays it.
fn print_minimal(report: &Value) {
    let value = report
        .get("unknown")
        .and_then(Value::as_str)
        .and_then(|unknown| report.get("result")?.get(unknown));

    match value {
        Some(v) => println!("{}", display_value(v, true)),
        None => println!("{}", report),
    }
}

fn display_value(value: &Value, rounded: bool) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if rounded => format!("{:.2}", f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
