use crate::error::{CheckResult, GraphCheckError};
use crate::graph::model::GraphRequest;
use serde::Serialize;
use std::path::Path;

pub fn to_json<T: Serialize>(value: &T) -> CheckResult<String> {
    serde_json::to_string_pretty(value).map_err(|error| GraphCheckError::Validation(error.to_string()))
}

pub fn from_json(raw: &str) -> CheckResult<GraphRequest> {
    serde_json::from_str::<GraphRequest>(raw).map_err(|error| GraphCheckError::Validation(error.to_string()))
}

pub fn load_request(path: &Path) -> CheckResult<GraphRequest> {
    let payload = std::fs::read_to_string(path)
        .map_err(|error| GraphCheckError::Io(format!("{}: {}", path.display(), error)))?;
    from_json(&payload)
}

/// Re-indents a response body for display, falling back to the raw text.
pub fn pretty_body(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_request_reads_camel_case_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"networkNodes":[{{"name":"X","parameters":[1],"connectedNodes":["Y"]}},{{"name":"Y"}}]}}"#
        )
        .unwrap();

        let request = load_request(file.path()).unwrap();
        assert_eq!(request.network_nodes.len(), 2);
        assert_eq!(request.network_nodes[0].connected_nodes, vec!["Y"]);
        assert!(request.network_nodes[1].parameters.is_empty());
    }

    #[test]
    fn load_request_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_request(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(GraphCheckError::Io(_))));
    }

    #[test]
    fn from_json_requires_network_nodes() {
        assert!(matches!(
            from_json(r#"{"nodes":[]}"#),
            Err(GraphCheckError::Validation(_))
        ));
    }

    #[test]
    fn pretty_body_keeps_non_json_text() {
        assert_eq!(pretty_body("Internal Server Error"), "Internal Server Error");
        assert_eq!(pretty_body(r#"{"id":1}"#), "{\n  \"id\": 1\n}");
    }
}
