//! Structural checks of wire documents

use serde::Serialize;
use serde_json::{Map, Value};

use super::CliError;
use crate::catalog;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Wire document (JSON)
    pub input: Option<String>,
    /// Pretty-print the report
    pub pretty: bool,
}

/// A problem found at one location of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// JSON path, `$` being the document root
    pub path: String,
    pub message: String,
}

/// Result of a check operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    /// Number of operation nodes seen
    pub operations: usize,
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckReport, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document: Value = serde_json::from_str(json_str)?;
    Ok(check_document(&document))
}

/// Walks a wire document and reports nodes the engine would not recognize.
pub fn check_document(document: &Value) -> CheckReport {
    let mut report = CheckReport::default();
    walk(document, "$", &mut report);
    report
}

/// Wire literals whose payload is not an expression
const OPAQUE_TAGS: &[&str] = &["@ref", "@ts", "@date", "@bytes"];

fn walk(value: &Value, path: &str, report: &mut CheckReport) {
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                walk(item, &format!("{path}[{i}]"), report);
            }
        }
        Value::Object(map) => walk_object(map, path, report),
        _ => {}
    }
}

fn walk_object(map: &Map<String, Value>, path: &str, report: &mut CheckReport) {
    if map.len() == 1 {
        if let Some((key, payload)) = map.iter().next() {
            if key == "object" || key == "@obj" {
                walk_fields(payload, &format!("{path}.{key}"), report);
                return;
            }
            if OPAQUE_TAGS.contains(&key.as_str()) {
                return;
            }
        }
    }

    let tags: Vec<&String> = map.keys().filter(|k| catalog::is_known_tag(k)).collect();
    if tags.is_empty() {
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        report.issues.push(Issue {
            path: path.to_string(),
            message: format!(
                "unrecognized node with keys [{}]; wrap data in an object literal",
                keys.join(", ")
            ),
        });
        return;
    }

    report.operations += 1;
    for tag in tags {
        let empty_operands = matches!(map.get(tag.as_str()), Some(Value::Array(items)) if items.is_empty());
        if empty_operands && catalog::lookup(tag).is_some_and(|spec| spec.variadic) {
            report.issues.push(Issue {
                path: format!("{path}.{tag}"),
                message: format!("{tag} needs at least one operand"),
            });
        }
    }

    for (key, value) in map {
        let child = format!("{path}.{key}");
        match key.as_str() {
            "let" => walk_bindings(value, &child, report),
            // Binding names, not expressions
            "lambda" if !value.is_object() => {}
            _ => walk(value, &child, report),
        }
    }
}

/// Walks the values of an object-literal payload.
fn walk_fields(payload: &Value, path: &str, report: &mut CheckReport) {
    match payload {
        Value::Object(fields) => {
            for (name, value) in fields {
                walk(value, &format!("{path}.{name}"), report);
            }
        }
        _ => report.issues.push(Issue {
            path: path.to_string(),
            message: "object literal payload must be an object".to_string(),
        }),
    }
}

/// Let bindings are `[{"name": value}, ...]`, or a single object of bindings.
fn walk_bindings(value: &Value, path: &str, report: &mut CheckReport) {
    match value {
        Value::Array(bindings) => {
            for (i, binding) in bindings.iter().enumerate() {
                let binding_path = format!("{path}[{i}]");
                match binding {
                    Value::Object(_) => walk_fields(binding, &binding_path, report),
                    _ => report.issues.push(Issue {
                        path: binding_path,
                        message: "let binding must be an object of one name".to_string(),
                    }),
                }
            }
        }
        Value::Object(_) => walk_fields(value, path, report),
        _ => report.issues.push(Issue {
            path: path.to_string(),
            message: "let bindings must be an array or an object".to_string(),
        }),
    }
}
