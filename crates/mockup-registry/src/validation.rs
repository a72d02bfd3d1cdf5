// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Structured validation results.
//!
//! Validators are structural only: they check presence and JSON types of
//! fields, never semantics (URL reachability, message ordering).

use core::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;

/// What is wrong with one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Problem {
    /// Required field is absent (or `null`).
    Missing,
    /// Field has the wrong JSON type.
    WrongType {
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type found.
        found: &'static str,
    },
    /// Config name does not match the registered key.
    NameMismatch {
        /// Registered name.
        expected: String,
    },
    /// String value outside the allowed set.
    NotAllowed {
        /// Accepted values.
        allowed: &'static [&'static str],
    },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::WrongType { expected, found } => write!(f, "expected {expected}, found {found}"),
            Self::NameMismatch { expected } => write!(f, "expected name {expected}"),
            Self::NotAllowed { allowed } => write!(f, "expected one of {}", allowed.join("|")),
        }
    }
}

/// One violated field, addressed by a dotted path (`options.messages[2].text`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Path of the offending field.
    pub field: String,
    /// What is wrong with it.
    pub problem: Problem,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// Validation outcome: ok, or the list of violated fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Report with no violations.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Returns `true` when nothing was violated.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violated fields in the order they were found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Records a violation.
    pub fn push(&mut self, field: impl Into<String>, problem: Problem) {
        self.violations.push(Violation {
            field: field.into(),
            problem,
        });
    }

    /// Checks that `config` names `expected` exactly.
    pub fn check_name(&mut self, config: &AppConfig, expected: &str) {
        match config.app_name() {
            None => self.push("name", Problem::Missing),
            Some(name) if name != expected => self.push(
                "name",
                Problem::NameMismatch {
                    expected: expected.to_owned(),
                },
            ),
            Some(_) => {}
        }
    }

    /// Checks that `value` is present and an object; returns it when it is.
    pub fn require_object<'v>(
        &mut self,
        field: &str,
        value: Option<&'v Value>,
    ) -> Option<&'v serde_json::Map<String, Value>> {
        match value {
            None | Some(Value::Null) => {
                self.push(field, Problem::Missing);
                None
            }
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                self.wrong_type(field, "object", other);
                None
            }
        }
    }

    /// Checks that `value` is present and an array; returns it when it is.
    pub fn require_array<'v>(&mut self, field: &str, value: Option<&'v Value>) -> Option<&'v [Value]> {
        match value {
            None | Some(Value::Null) => {
                self.push(field, Problem::Missing);
                None
            }
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.wrong_type(field, "array", other);
                None
            }
        }
    }

    /// Checks that `value` is present and a boolean.
    pub fn require_bool(&mut self, field: &str, value: Option<&Value>) {
        match value {
            None | Some(Value::Null) => self.push(field, Problem::Missing),
            Some(Value::Bool(_)) => {}
            Some(other) => self.wrong_type(field, "boolean", other),
        }
    }

    /// Checks that `value` is present and a string.
    pub fn require_string(&mut self, field: &str, value: Option<&Value>) {
        match value {
            None | Some(Value::Null) => self.push(field, Problem::Missing),
            Some(Value::String(_)) => {}
            Some(other) => self.wrong_type(field, "string", other),
        }
    }

    /// When present and non-null, `value` must be a string.
    pub fn optional_string(&mut self, field: &str, value: Option<&Value>) {
        match value {
            None | Some(Value::Null | Value::String(_)) => {}
            Some(other) => self.wrong_type(field, "string", other),
        }
    }

    /// When present and non-null, `value` must be one of `allowed`.
    pub fn optional_one_of(
        &mut self,
        field: &str,
        value: Option<&Value>,
        allowed: &'static [&'static str],
    ) {
        match value {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) if allowed.contains(&s.as_str()) => {}
            Some(Value::String(_)) => self.push(field, Problem::NotAllowed { allowed }),
            Some(other) => self.wrong_type(field, "string", other),
        }
    }

    fn wrong_type(&mut self, field: &str, expected: &'static str, found: &Value) {
        self.push(
            field,
            Problem::WrongType {
                expected,
                found: json_type(found),
            },
        );
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return f.write_str("ok");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_every_violation() {
        let mut report = ValidationReport::ok();
        report.require_bool("a", Some(&json!("yes")));
        report.require_string("b", None);
        report.optional_one_of("c", Some(&json!("gif")), &["image", "video"]);
        assert!(!report.is_ok());
        assert_eq!(report.violations().len(), 3);
        assert_eq!(
            report.to_string(),
            "a: expected boolean, found string; b: missing; c: expected one of image|video"
        );
    }

    #[test]
    fn name_must_match_exactly() {
        let mut report = ValidationReport::ok();
        report.check_name(&AppConfig::new("whatsapp", json!({})), "Whatsapp");
        assert_eq!(
            report.violations()[0].problem,
            Problem::NameMismatch {
                expected: "Whatsapp".into()
            }
        );
    }

    #[test]
    fn optional_fields_accept_absence_and_null() {
        let mut report = ValidationReport::ok();
        report.optional_string("x", None);
        report.optional_string("y", Some(&Value::Null));
        report.optional_one_of("z", None, &["pdf"]);
        assert!(report.is_ok());
    }
}
