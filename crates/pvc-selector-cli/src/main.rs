use pvc_selector_core::config::{self, PluginConfig};
use pvc_selector_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Config decides where logs go, so load it before logging is up and report problems after.
    let (cfg, cfg_err) = match config::load_or_default() {
        Ok(cfg) => (cfg, None),
        Err(err) => (PluginConfig::default(), Some(err)),
    };

    if !cfg.log_to_file || logging::init_logging(&cfg).is_err() {
        logging::init_logging_stderr(&cfg);
    }
    if let Some(err) = cfg_err {
        tracing::warn!("ignoring config file, using defaults: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args(&cfg) {
        eprintln!("pvc-remove-selector error: {:#}", err);
        std::process::exit(1);
    }
}
