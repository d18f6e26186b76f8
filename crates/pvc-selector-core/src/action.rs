//! Restore item action contract between the host and a plugin.
//!
//! The host calls `applies_to` to learn which resources an action handles,
//! then `execute` once per matching item. Calls may arrive concurrently for
//! different items, so actions are shared as `&self` and must be `Send + Sync`.

use crate::error::PluginError;
use crate::item::RestoreItem;
use crate::selector::ResourceSelector;
use serde::{Deserialize, Serialize};

/// Arguments for one `execute` call.
#[derive(Debug, Clone)]
pub struct ExecuteInput {
    /// Item about to be restored (possibly already modified by earlier actions).
    pub item: RestoreItem,
    /// The same item exactly as stored in the backup.
    pub item_from_backup: Option<RestoreItem>,
    /// Name of the restore being run, when the host provides it.
    pub restore_name: Option<String>,
}

impl ExecuteInput {
    pub fn new(item: RestoreItem) -> Self {
        Self {
            item,
            item_from_backup: None,
            restore_name: None,
        }
    }
}

/// Identifies an extra object the host should restore alongside an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    pub group_resource: String,
    pub namespace: String,
    pub name: String,
}

/// Result of one `execute` call.
#[derive(Debug, Clone)]
pub struct ExecuteOutput {
    /// Item the host applies in place of the input.
    pub updated_item: RestoreItem,
    pub additional_items: Vec<ResourceIdentifier>,
    /// Ask the host not to restore this item at all.
    pub skip_restore: bool,
}

impl ExecuteOutput {
    pub fn new(updated_item: RestoreItem) -> Self {
        Self {
            updated_item,
            additional_items: Vec::new(),
            skip_restore: false,
        }
    }
}

/// A restore-time item transform.
pub trait RestoreItemAction: Send + Sync {
    /// Resources this action wants to be called for.
    fn applies_to(&self) -> Result<ResourceSelector, PluginError>;

    /// Transform one item. Must not retain or mutate `input`.
    fn execute(&self, input: &ExecuteInput) -> Result<ExecuteOutput, PluginError>;
}
