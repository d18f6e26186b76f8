//! CLI entry point: registers the plugins and dispatches a command against them.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pvc_selector_core::config::PluginConfig;
use pvc_selector_core::{
    PluginError, PluginServer, PvcRemoveSelector, RestoreItemAction, PLUGIN_NAME,
};
use std::path::PathBuf;

use commands::{run_applies_to, run_execute, run_list};

#[derive(Debug, Parser)]
#[command(name = "pvc-remove-selector")]
#[command(
    about = "Restore item action that strips spec.selector and status from PVCs",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List registered plugins.
    List,

    /// Print the resource selector of a plugin as JSON.
    AppliesTo {
        /// Registered plugin name.
        #[arg(long, default_value = PLUGIN_NAME)]
        plugin: String,
    },

    /// Run a plugin on one item (JSON) and print the updated item.
    Execute {
        /// Registered plugin name.
        #[arg(long, default_value = PLUGIN_NAME)]
        plugin: String,

        /// Resource of the item (e.g. persistentvolumeclaims). Derived from `kind` when omitted.
        #[arg(long)]
        resource: Option<String>,

        /// File holding the item; stdin when omitted.
        path: Option<PathBuf>,
    },
}

/// Registration table served by this binary.
pub fn plugin_server() -> PluginServer {
    PluginServer::new().register_restore_item_action(PLUGIN_NAME, new_pvc_restore_item_action)
}

fn new_pvc_restore_item_action() -> Result<Box<dyn RestoreItemAction>, PluginError> {
    Ok(Box::new(PvcRemoveSelector::new()))
}

impl CliCommand {
    pub fn run_from_args(cfg: &PluginConfig) -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("loaded config: {:?}", cfg);
        let server = plugin_server();

        match cli.command {
            CliCommand::List => run_list(&server),
            CliCommand::AppliesTo { plugin } => run_applies_to(&server, &plugin, cfg.pretty_output)?,
            CliCommand::Execute {
                plugin,
                resource,
                path,
            } => run_execute(
                &server,
                &plugin,
                resource.as_deref(),
                path.as_deref(),
                cfg.pretty_output,
            )?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
