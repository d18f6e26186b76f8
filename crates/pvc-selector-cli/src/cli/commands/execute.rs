//! `pvc-remove-selector execute` – run a plugin on one item read from a file or stdin.

use super::print_json;
use anyhow::{Context, Result};
use pvc_selector_core::selector::resource_for_kind;
use pvc_selector_core::{ExecuteInput, PluginServer, RestoreItem};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub fn run_execute(
    server: &PluginServer,
    plugin: &str,
    resource: Option<&str>,
    path: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let raw = match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read item from stdin")?;
            buf
        }
    };
    let updated = transform(server, plugin, resource, &raw)?;
    print_json(&updated, pretty)
}

fn transform(
    server: &PluginServer,
    plugin: &str,
    resource: Option<&str>,
    raw: &str,
) -> Result<Value> {
    let item = RestoreItem::from_json_str(raw).context("decode item")?;
    let resource = match resource {
        Some(r) => r.to_string(),
        None => resource_for_kind(item.as_object().map(|u| u.kind()).unwrap_or_default()),
    };
    tracing::debug!("execute {} on resource {:?}", plugin, resource);

    let output = server
        .execute(plugin, &resource, &ExecuteInput::new(item))
        .with_context(|| format!("execute {plugin}"))?;
    Ok(output.updated_item.into_value())
}
