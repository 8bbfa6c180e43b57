pub mod amortization;
pub mod compound;
pub mod savings;

use serde_json::{json, Map, Value};

/// Assemble the solve report consumed by every output format: the computed
/// field under `result`, the echoed inputs, and the unknown's name so the
/// minimal formatter knows which value to print.
pub(crate) fn report(
    instrument: &'static str,
    unknown: &'static str,
    value: f64,
    extra: Option<(&'static str, f64)>,
    inputs: Value,
) -> Value {
    let mut result = Map::new();
    result.insert(unknown.to_string(), json!(value));
    if let Some((key, v)) = extra {
        result.insert(key.to_string(), json!(v));
    }

    json!({
        "instrument": instrument,
        "unknown": unknown,
        "result": Value::Object(result),
        "inputs": inputs,
    })
}
