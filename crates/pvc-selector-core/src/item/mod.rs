//! Restore item model: one Kubernetes API object as read from a backup.
//!
//! Items arrive as an untyped tree (`serde_json::Value`). At the boundary an
//! item is either a recognized object (a top-level mapping) or something
//! opaque that actions pass through untouched.

pub mod path;

use crate::error::PluginError;
use serde_json::{Map, Value};

/// A Kubernetes object held as an untyped mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Unstructured {
    object: Map<String, Value>,
}

impl Unstructured {
    pub fn new(object: Map<String, Value>) -> Self {
        Self { object }
    }

    pub fn object(&self) -> &Map<String, Value> {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.object
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }

    /// `metadata.namespace`, or "" for cluster-scoped or malformed items.
    pub fn namespace(&self) -> &str {
        path::nested_str(&self.object, &["metadata", "namespace"]).unwrap_or_default()
    }

    /// `metadata.name`, or "" when absent.
    pub fn name(&self) -> &str {
        path::nested_str(&self.object, &["metadata", "name"]).unwrap_or_default()
    }

    pub fn kind(&self) -> &str {
        path::nested_str(&self.object, &["kind"]).unwrap_or_default()
    }

    pub fn api_version(&self) -> &str {
        path::nested_str(&self.object, &["apiVersion"]).unwrap_or_default()
    }

    /// Independent copy of the whole tree.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
}

/// An item as handed over by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreItem {
    /// Top-level mapping: eligible for transformation.
    Object(Unstructured),
    /// Anything else; returned as-is.
    Opaque(Value),
}

impl RestoreItem {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => RestoreItem::Object(Unstructured::new(map)),
            other => RestoreItem::Opaque(other),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, PluginError> {
        let value: Value = serde_json::from_str(s)?;
        Ok(Self::from_value(value))
    }

    pub fn as_object(&self) -> Option<&Unstructured> {
        match self {
            RestoreItem::Object(u) => Some(u),
            RestoreItem::Opaque(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            RestoreItem::Object(u) => u.into_value(),
            RestoreItem::Opaque(v) => v,
        }
    }
}

impl From<Unstructured> for RestoreItem {
    fn from(u: Unstructured) -> Self {
        RestoreItem::Object(u)
    }
}

impl From<Value> for RestoreItem {
    fn from(v: Value) -> Self {
        RestoreItem::from_value(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_splits_object_and_opaque() {
        let item = RestoreItem::from_value(json!({"kind": "PersistentVolumeClaim"}));
        assert_eq!(item.as_object().map(|u| u.kind()), Some("PersistentVolumeClaim"));

        for v in [json!(null), json!([1, 2]), json!("pvc"), json!(3)] {
            assert!(matches!(RestoreItem::from_value(v), RestoreItem::Opaque(_)));
        }
    }

    #[test]
    fn metadata_accessors_default_to_empty() {
        let item = RestoreItem::from_value(json!({
            "apiVersion": "v1",
            "metadata": {"name": "data", "namespace": 7}
        }));
        let u = item.as_object().unwrap();
        assert_eq!(u.name(), "data");
        assert_eq!(u.namespace(), "");
        assert_eq!(u.api_version(), "v1");
        assert_eq!(u.kind(), "");
    }

    #[test]
    fn deep_copy_is_independent() {
        let original = match RestoreItem::from_value(json!({"spec": {"selector": {}}})) {
            RestoreItem::Object(u) => u,
            RestoreItem::Opaque(_) => unreachable!(),
        };
        let mut copy = original.deep_copy();
        path::remove_nested_field(copy.object_mut(), &["spec", "selector"]);
        assert!(path::nested_map(original.object(), &["spec", "selector"]).is_some());
        assert!(path::nested_map(copy.object(), &["spec", "selector"]).is_none());
    }

    #[test]
    fn from_json_str_rejects_garbage() {
        assert!(RestoreItem::from_json_str("{not json").is_err());
        let item = RestoreItem::from_json_str(r#"{"metadata":{"name":"a"}}"#).unwrap();
        assert_eq!(item.into_value(), json!({"metadata": {"name": "a"}}));
    }
}
