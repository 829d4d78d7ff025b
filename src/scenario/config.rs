//! Scenario file types
//!
//! Defines the data structures for deserializing YAML comparison scenarios.

use serde::Deserialize;
use std::path::PathBuf;

/// A complete scenario loaded from a YAML file
#[derive(Deserialize, Debug)]
pub struct Scenario {
    /// Name of the scenario
    pub name: String,
    /// Optional description of what the scenario verifies
    pub description: Option<String>,
    /// Comparisons to run, in order
    pub cases: Vec<Case>,
}

/// A single comparison
#[derive(Deserialize, Debug)]
#[serde(tag = "compare", rename_all = "snake_case")]
pub enum Case {
    /// Two blocks of text compared line by line
    Text {
        name: String,
        expected: String,
        actual: String,
    },
    /// Two explicit lists of lines
    Lines {
        name: String,
        #[serde(default)]
        expected: Vec<String>,
        #[serde(default)]
        actual: Vec<String>,
    },
    /// Two lists compared as sets of strings
    Set {
        name: String,
        #[serde(default)]
        expected: Vec<String>,
        #[serde(default)]
        actual: Vec<String>,
    },
    /// Two scalars compared by their string forms
    Value {
        name: String,
        expected: serde_yaml::Value,
        actual: serde_yaml::Value,
    },
    /// Two files compared line by line, relative to the scenario file
    Files {
        name: String,
        expected_file: PathBuf,
        actual_file: PathBuf,
    },
}

impl Case {
    pub fn name(&self) -> &str {
        match self {
            Case::Text { name, .. }
            | Case::Lines { name, .. }
            | Case::Set { name, .. }
            | Case::Value { name, .. }
            | Case::Files { name, .. } => name,
        }
    }

    /// Comparison kind as written in the scenario file
    pub fn kind(&self) -> &'static str {
        match self {
            Case::Text { .. } => "text",
            Case::Lines { .. } => "lines",
            Case::Set { .. } => "set",
            Case::Value { .. } => "value",
            Case::Files { .. } => "files",
        }
    }
}

/// String form of a YAML scalar as it would be written
pub fn value_text(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario() {
        let yaml = r#"
name: report output
description: checks the rendered report
cases:
  - compare: text
    name: body
    expected: "a\nb"
    actual: "a\nc"
  - compare: lines
    name: list
    expected: [one, two]
    actual: [one, two]
  - compare: set
    name: tags
    expected: [x, y]
    actual: [y, x]
  - compare: value
    name: count
    expected: 3
    actual: "3"
  - compare: files
    name: golden
    expected_file: golden/expected.txt
    actual_file: /tmp/actual.txt
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.name, "report output");
        assert_eq!(scenario.cases.len(), 5);

        let kinds: Vec<_> = scenario.cases.iter().map(Case::kind).collect();
        assert_eq!(kinds, vec!["text", "lines", "set", "value", "files"]);
        assert_eq!(scenario.cases[4].name(), "golden");

        match &scenario.cases[0] {
            Case::Text { expected, .. } => assert_eq!(expected, "a\nb"),
            other => panic!("Expected Text case, got {:?}", other),
        }
        match &scenario.cases[3] {
            Case::Value { expected, actual, .. } => {
                assert_eq!(value_text(expected), value_text(actual));
            }
            other => panic!("Expected Value case, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_line_lists_default() {
        let yaml = "name: empty\ncases:\n  - compare: lines\n    name: none\n";
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        match &scenario.cases[0] {
            Case::Lines { expected, actual, .. } => {
                assert!(expected.is_empty());
                assert!(actual.is_empty());
            }
            other => panic!("Expected Lines case, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_compare_kind() {
        let yaml = "name: bad\ncases:\n  - compare: bytes\n    name: blob\n";
        assert!(serde_yaml::from_str::<Scenario>(yaml).is_err());
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&serde_yaml::Value::Null), "null");
        assert_eq!(value_text(&serde_yaml::Value::Bool(true)), "true");
        assert_eq!(value_text(&serde_yaml::Value::from(1.5)), "1.5");
        assert_eq!(value_text(&serde_yaml::Value::from("s")), "s");
    }
}
