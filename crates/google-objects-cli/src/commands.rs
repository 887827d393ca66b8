//! Subcommand handlers. Results go to stdout as JSON; logs go to stderr.

use serde_json::{json, Value};
use tracing::{info, warn};

use google_objects::{
    BatchUpdate, Config, GoogleClient, NamedRange, SheetsApi, SlidesApi, Spreadsheet,
};

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One named range; a range that cannot be rendered in A1 reports its error
fn named_range_summary(range: &NamedRange, spreadsheet: &Spreadsheet) -> Value {
    match range.as_a1(spreadsheet) {
        Ok(a1) => json!({"id": range.id(), "name": range.name(), "range": a1}),
        Err(e) => {
            warn!("Cannot render named range {}: {}", range.name(), e);
            json!({
                "id": range.id(),
                "name": range.name(),
                "range": null,
                "error": e.to_string(),
            })
        }
    }
}

pub async fn spreadsheet(client: GoogleClient, config: &Config, id: &str) -> anyhow::Result<()> {
    let spreadsheet = SheetsApi::from_config(client, config)
        .get_spreadsheet(id)
        .await?;

    let sheets: Vec<Value> = spreadsheet
        .iter()
        .map(|s| json!({"id": s.id(), "title": s.title(), "index": s.index()}))
        .collect();

    let named_ranges: Vec<Value> = spreadsheet
        .named_ranges()
        .iter()
        .map(|range| named_range_summary(range, &spreadsheet))
        .collect();

    print_json(&json!({
        "id": spreadsheet.id(),
        "title": spreadsheet.title(),
        "url": spreadsheet.url(),
        "sheets": sheets,
        "namedRanges": named_ranges,
    }))
}

pub async fn values(
    client: GoogleClient,
    config: &Config,
    id: &str,
    range: &str,
) -> anyhow::Result<()> {
    let block = SheetsApi::from_config(client, config)
        .get_values(id, range)
        .await?;

    for row in &block {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

pub async fn append(
    client: GoogleClient,
    config: &Config,
    id: &str,
    range: &str,
    cells: Vec<String>,
) -> anyhow::Result<()> {
    let row: Vec<Value> = cells.into_iter().map(Value::String).collect();
    let response = SheetsApi::from_config(client, config)
        .append_values(id, range, &[row])
        .await?;

    if let Some(updated) = response.updates.as_ref().and_then(|u| u.updated_range.as_deref()) {
        info!("Appended to {}", updated);
    }
    print_json(&serde_json::to_value(&response)?)
}

pub async fn presentation(client: GoogleClient, config: &Config, id: &str) -> anyhow::Result<()> {
    let presentation = SlidesApi::from_config(client, config)
        .get_presentation(id)
        .await?;

    let pages: Vec<Value> = presentation
        .iter()
        .map(|page| {
            let elements: Vec<Value> = page
                .iter()
                .map(|e| json!({"id": e.id(), "kind": e.kind().name()}))
                .collect();
            json!({"id": page.id(), "type": page.page_type(), "elements": elements})
        })
        .collect();

    print_json(&json!({
        "id": presentation.id(),
        "title": presentation.title(),
        "slides": pages,
        "masters": presentation.masters().len(),
        "layouts": presentation.layouts().len(),
    }))
}

pub async fn tags(
    client: GoogleClient,
    config: &Config,
    id: &str,
    pattern: &str,
) -> anyhow::Result<()> {
    let presentation = SlidesApi::from_config(client, config)
        .get_presentation(id)
        .await?;

    for tag in presentation.find_tags(pattern)? {
        println!("{}", tag);
    }
    Ok(())
}

pub async fn replace(
    client: GoogleClient,
    config: &Config,
    id: &str,
    find: &str,
    replace: &str,
    match_case: bool,
) -> anyhow::Result<()> {
    let mut presentation = SlidesApi::from_config(client, config)
        .get_presentation(id)
        .await?;

    let queued = presentation
        .scoped(|p| p.replace_text(find, replace, match_case))
        .await?;

    if !queued {
        anyhow::bail!("nothing to replace: search text is empty");
    }
    info!("Replaced {:?} with {:?} in {}", find, replace, id);
    Ok(())
}
