use serde::Serialize;

use crate::item::Item;

/// Per-day snapshots of the whole collection, written once a run completes.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Report {
    pub result: Vec<Vec<Item>>,
}

impl Report {
    pub fn new(result: Vec<Vec<Item>>) -> Self {
        Self { result }
    }

    pub fn days(&self) -> usize {
        self.result.len()
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::names;

    #[test]
    fn report_nests_snapshots_under_result() {
        let report = Report::new(vec![
            vec![Item::new(names::FERVEX, 11, 36)],
            vec![Item::new(names::FERVEX, 10, 37)],
        ]);
        let json = report.to_pretty_json().expect("report serializes");
        assert!(json.ends_with("}\n"));

        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let days = value
            .get("result")
            .and_then(|v| v.as_array())
            .expect("result is array");
        assert_eq!(days.len(), 2);
        let second = days[1].as_array().expect("snapshot is array");
        assert_eq!(second[0].get("expiresIn").and_then(|v| v.as_i64()), Some(10));
        assert_eq!(second[0].get("benefit").and_then(|v| v.as_u64()), Some(37));
    }

    #[test]
    fn report_uses_two_space_indent() {
        let report = Report::new(vec![vec![Item::new("Doliprane", 1, 2)]]);
        let json = report.to_pretty_json().expect("report serializes");
        assert!(json.starts_with("{\n  \"result\": [\n    [\n      {\n"));
    }

    #[test]
    fn empty_report_serializes() {
        let json = Report::default().to_pretty_json().expect("report serializes");
        assert_eq!(json, "{\n  \"result\": []\n}\n");
    }
}
