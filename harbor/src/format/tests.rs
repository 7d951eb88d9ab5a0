use super::*;
use chrono::Duration;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
struct TestData {
    name: String,
    value: i32,
}

impl Formattable for TestData {
    fn format_pretty(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

#[derive(tabled::Tabled)]
struct Row {
    #[tabled(rename = "NAME")]
    name: &'static str,
    #[tabled(rename = "COUNT")]
    count: u32,
}

fn data() -> TestData {
    TestData {
        name: "test".to_string(),
        value: 42,
    }
}

#[test]
fn test_output_format_from_string() {
    assert_eq!(OutputFormat::from("pretty"), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from("YAML"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("yml"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("invalid"), OutputFormat::Pretty);
}

#[test]
fn test_format_pretty() {
    assert_eq!(format_output(&data(), OutputFormat::Pretty).unwrap(), "test: 42");
}

#[test]
fn test_format_json() {
    let output = format_output(&data(), OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["name"], "test");
    assert_eq!(json["value"], 42);
}

#[test]
fn test_format_yaml() {
    let output = format_output(&data(), OutputFormat::Yaml).unwrap();
    assert!(output.contains("name: test"));
    assert!(output.contains("value: 42"));
}

#[test]
fn test_table_has_headers_and_rows() {
    let output = table(
        vec![
            Row {
                name: "library",
                count: 3,
            },
            Row {
                name: "dev",
                count: 1,
            },
        ],
        "nothing",
    );
    assert!(output.contains("NAME"));
    assert!(output.contains("COUNT"));
    assert!(output.contains("library"));
    assert!(output.contains("dev"));
}

#[test]
fn test_table_empty_uses_note() {
    let rows: Vec<Row> = Vec::new();
    assert_eq!(table(rows, "No projects found."), "No projects found.");
}

#[test]
fn test_format_size() {
    assert_eq!(format_size(1024), "1 KiB");
    assert_eq!(format_size(5 * 1024 * 1024), "5 MiB");
}

#[test]
fn test_format_timestamp() {
    let one_day_ago = Utc::now() - Duration::days(1);
    assert_eq!(format_timestamp(Some(&one_day_ago)), "a day ago");
    assert_eq!(format_timestamp(None), "N/A");
}
