//! `pvc-remove-selector applies-to` – print a plugin's resource selector.

use super::print_json;
use anyhow::{Context, Result};
use pvc_selector_core::PluginServer;

pub fn run_applies_to(server: &PluginServer, plugin: &str, pretty: bool) -> Result<()> {
    let selector = server
        .applies_to(plugin)
        .with_context(|| format!("applies-to {plugin}"))?;
    print_json(&serde_json::to_value(&selector)?, pretty)
}
