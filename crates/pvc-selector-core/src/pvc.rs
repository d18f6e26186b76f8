//! PersistentVolumeClaim restore action: drop `spec.selector` and `status`.
//!
//! A restored claim that keeps its label selector can only bind to a volume
//! carrying those labels, which usually no longer exists in the target
//! cluster. Dropping the selector lets the provisioner bind a fresh volume.
//! `status` is owned by the API server and is dropped as well.

use crate::action::{ExecuteInput, ExecuteOutput, RestoreItemAction};
use crate::error::PluginError;
use crate::item::{path, RestoreItem, Unstructured};
use crate::selector::ResourceSelector;

/// Name the action is registered under.
pub const PLUGIN_NAME: &str = "mpryc.io/pvc-remove-selector";

/// The only resource the action handles.
pub const PVC_RESOURCE: &str = "persistentvolumeclaims";

/// What `strip_selector_and_status` removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripOutcome {
    pub selector_removed: bool,
    pub status_removed: bool,
}

/// Remove `spec.selector` (only when it is a mapping) and top-level `status` in place.
///
/// A selector of any other shape, including null, is treated as absent and
/// left untouched.
pub fn strip_selector_and_status(item: &mut Unstructured) -> StripOutcome {
    let obj = item.object_mut();
    let mut outcome = StripOutcome::default();

    if path::nested_map(obj, &["spec", "selector"]).is_some() {
        tracing::info!("removing spec.selector from PVC");
        outcome.selector_removed = path::remove_nested_field(obj, &["spec", "selector"]).is_some();
    }

    outcome.status_removed = path::remove_nested_field(obj, &["status"]).is_some();
    outcome
}

/// Restore item action for PVCs. Stateless; one instance may serve many items concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct PvcRemoveSelector;

impl PvcRemoveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl RestoreItemAction for PvcRemoveSelector {
    fn applies_to(&self) -> Result<ResourceSelector, PluginError> {
        Ok(ResourceSelector::for_resources(&[PVC_RESOURCE]))
    }

    fn execute(&self, input: &ExecuteInput) -> Result<ExecuteOutput, PluginError> {
        tracing::info!("processing PVC for selector removal");

        let original = match &input.item {
            RestoreItem::Object(u) => u,
            RestoreItem::Opaque(_) => {
                tracing::error!("restore item is not a structured object; passing it through unchanged");
                return Ok(ExecuteOutput::new(input.item.clone()));
            }
        };

        let mut item = original.deep_copy();
        tracing::info!("processing PVC: {}/{}", item.namespace(), item.name());

        let outcome = strip_selector_and_status(&mut item);
        tracing::debug!(
            selector_removed = outcome.selector_removed,
            status_removed = outcome.status_removed,
            "PVC stripped"
        );

        Ok(ExecuteOutput::new(RestoreItem::Object(item)))
    }
}
