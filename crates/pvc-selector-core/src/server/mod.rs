//! Plugin registration table.
//!
//! The process entry point builds a `PluginServer`, registers each action
//! under its name, and the host dispatches calls to it by name. The table is
//! built once at startup and only read afterwards.

mod name;

pub use name::validate_plugin_name;

use crate::action::{ExecuteInput, ExecuteOutput, RestoreItemAction};
use crate::error::PluginError;
use crate::selector::ResourceSelector;
use std::collections::BTreeMap;
use std::fmt;

/// Builds one action instance.
pub type ActionFactory =
    Box<dyn Fn() -> Result<Box<dyn RestoreItemAction>, PluginError> + Send + Sync>;

/// Kinds of plugin the table can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    RestoreItemAction,
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginKind::RestoreItemAction => write!(f, "RestoreItemAction"),
        }
    }
}

#[derive(Default)]
pub struct PluginServer {
    restore_item_actions: BTreeMap<String, ActionFactory>,
}

impl fmt::Debug for PluginServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginServer")
            .field("restore_item_actions", &self.names())
            .finish()
    }
}

impl PluginServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a restore item action, returning an error on a bad or duplicate name.
    pub fn try_register_restore_item_action<F>(
        &mut self,
        name: &str,
        factory: F,
    ) -> Result<&mut Self, PluginError>
    where
        F: Fn() -> Result<Box<dyn RestoreItemAction>, PluginError> + Send + Sync + 'static,
    {
        validate_plugin_name(name)?;
        if self.restore_item_actions.contains_key(name) {
            return Err(PluginError::DuplicateName(name.to_string()));
        }
        self.restore_item_actions
            .insert(name.to_string(), Box::new(factory));
        tracing::debug!("registered {} {}", PluginKind::RestoreItemAction, name);
        Ok(self)
    }

    /// Builder form of [`try_register_restore_item_action`](Self::try_register_restore_item_action).
    /// Registration errors are programming errors in the entry point; they are logged and the
    /// registration is skipped so that `names()` reflects what is actually served.
    pub fn register_restore_item_action<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn RestoreItemAction>, PluginError> + Send + Sync + 'static,
    {
        if let Err(e) = self.try_register_restore_item_action(name, factory) {
            tracing::error!("skipping registration: {}", e);
        }
        self
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.restore_item_actions.keys().map(String::as_str).collect()
    }

    pub fn kind_of(&self, name: &str) -> Option<PluginKind> {
        self.restore_item_actions
            .contains_key(name)
            .then_some(PluginKind::RestoreItemAction)
    }

    /// Instantiate the action registered as `name`.
    pub fn restore_item_action(&self, name: &str) -> Result<Box<dyn RestoreItemAction>, PluginError> {
        let factory = self
            .restore_item_actions
            .get(name)
            .ok_or_else(|| PluginError::UnknownPlugin(name.to_string()))?;
        factory()
    }

    pub fn applies_to(&self, name: &str) -> Result<ResourceSelector, PluginError> {
        self.restore_item_action(name)?.applies_to()
    }

    /// Run `name` on an item of `resource`, as the host would.
    ///
    /// Items the action's selector does not cover are returned unchanged
    /// without calling the action.
    pub fn execute(
        &self,
        name: &str,
        resource: &str,
        input: &ExecuteInput,
    ) -> Result<ExecuteOutput, PluginError> {
        let action = self.restore_item_action(name)?;
        let selector = action.applies_to()?;
        let namespace = input.item.as_object().map(|u| u.namespace()).unwrap_or_default();

        if !selector.includes_resource(resource) || !selector.includes_namespace(namespace) {
            tracing::debug!(
                plugin = name,
                resource,
                namespace,
                "item not selected; returning it unchanged"
            );
            return Ok(ExecuteOutput::new(input.item.clone()));
        }

        let span = tracing::info_span!("execute", plugin = name, resource);
        let _enter = span.enter();
        action.execute(input)
    }
}
