use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use super::model::{EmployeeNode, OrgChart};

#[derive(Debug, Deserialize)]
struct RawDocument {
    root: EmployeeNode,
    #[serde(default)]
    expanded: Option<HashMap<String, bool>>,
}

pub fn load_org_chart(path: &Path) -> Result<OrgChart> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read org data from {}", path.display()))?;
    let chart = parse_org_chart(&raw)
        .with_context(|| format!("failed to parse org data from {}", path.display()))?;

    info!(
        path = %path.display(),
        employees = chart.node_count(),
        "loaded organization chart"
    );
    Ok(chart)
}

/// Accepts either `{ "root": <node>, "expanded": {...} }` or a bare root node.
pub fn parse_org_chart(raw: &str) -> Result<OrgChart> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON in org data")?;
    let object = parsed
        .as_object()
        .ok_or_else(|| anyhow!("org data must be a JSON object"))?;

    let (root, expanded) = if object.contains_key("root") {
        let document = RawDocument::deserialize(&parsed).context("invalid org document")?;
        (document.root, document.expanded)
    } else {
        let root = EmployeeNode::deserialize(&parsed).context("invalid root employee")?;
        (root, None)
    };

    if root.id.trim().is_empty() {
        return Err(anyhow!("root employee has an empty id"));
    }

    let chart = OrgChart::new(root, expanded);
    let duplicates = chart.duplicate_ids();
    if !duplicates.is_empty() {
        warn!(
            ?duplicates,
            "employee ids are not unique; expansion state will be shared between them"
        );
    }

    Ok(chart)
}
