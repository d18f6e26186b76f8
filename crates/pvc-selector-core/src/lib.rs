pub mod config;
pub mod logging;

pub mod action;
pub mod error;
pub mod item;
pub mod pvc;
pub mod selector;
pub mod server;

pub use action::{ExecuteInput, ExecuteOutput, ResourceIdentifier, RestoreItemAction};
pub use error::PluginError;
pub use item::{RestoreItem, Unstructured};
pub use pvc::{PvcRemoveSelector, PLUGIN_NAME, PVC_RESOURCE};
pub use selector::ResourceSelector;
pub use server::{PluginKind, PluginServer};
