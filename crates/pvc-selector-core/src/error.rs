//! Error type shared by the action contract and the registration table.

use thiserror::Error;

/// Errors surfaced to the host entry point.
///
/// The PVC transform itself never produces one of these; they come from
/// registration (bad or duplicate names), lookup of an unknown plugin, or
/// decoding raw item JSON.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin name is not of the form `<dns-subdomain>/<name>`.
    #[error("invalid plugin name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A plugin with this name is already registered.
    #[error("plugin {0:?} is already registered")]
    DuplicateName(String),

    /// No plugin registered under this name.
    #[error("no plugin registered as {0:?}")]
    UnknownPlugin(String),

    /// Plugin factory failed to build an instance.
    #[error("failed to instantiate plugin {name:?}: {reason}")]
    Factory { name: String, reason: String },

    /// Item JSON could not be decoded or encoded.
    #[error("item json: {0}")]
    Json(#[from] serde_json::Error),
}
