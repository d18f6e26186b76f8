//! Path lookups over an untyped object tree.
//!
//! Every helper walks mappings only. A missing segment, or an intermediate
//! value that is not a mapping, ends the walk quietly: lookups return `None`
//! and removals do nothing.

use serde_json::{Map, Value};

/// Value at `fields` under `obj`, if every intermediate segment is a mapping.
pub fn nested_field<'a>(obj: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    let (last, parents) = fields.split_last()?;
    let parent = walk(obj, parents)?;
    parent.get(*last)
}

/// Mapping at `fields`. Null and any other shape count as absent.
pub fn nested_map<'a>(
    obj: &'a Map<String, Value>,
    fields: &[&str],
) -> Option<&'a Map<String, Value>> {
    nested_field(obj, fields).and_then(Value::as_object)
}

/// String at `fields`.
pub fn nested_str<'a>(obj: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a str> {
    nested_field(obj, fields).and_then(Value::as_str)
}

/// Remove the field at `fields` from its parent mapping and return it.
pub fn remove_nested_field(obj: &mut Map<String, Value>, fields: &[&str]) -> Option<Value> {
    let (last, parents) = fields.split_last()?;
    let parent = walk_mut(obj, parents)?;
    parent.remove(*last)
}

fn walk<'a>(obj: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Map<String, Value>> {
    fields
        .iter()
        .try_fold(obj, |m, field| m.get(*field).and_then(Value::as_object))
}

fn walk_mut<'a>(
    obj: &'a mut Map<String, Value>,
    fields: &[&str],
) -> Option<&'a mut Map<String, Value>> {
    let mut current = obj;
    for field in fields {
        current = current.get_mut(*field)?.as_object_mut()?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn nested_field_walks_mappings() {
        let o = obj(json!({"spec": {"resources": {"requests": {"storage": "10Gi"}}}}));
        assert_eq!(
            nested_str(&o, &["spec", "resources", "requests", "storage"]),
            Some("10Gi")
        );
        assert!(nested_map(&o, &["spec", "resources"]).is_some());
    }

    #[test]
    fn nested_field_missing_segment_is_none() {
        let o = obj(json!({"spec": {"accessModes": ["ReadWriteOnce"]}}));
        assert!(nested_field(&o, &["spec", "selector"]).is_none());
        assert!(nested_field(&o, &["status", "phase"]).is_none());
        assert!(nested_field(&o, &[]).is_none());
    }

    #[test]
    fn nested_field_through_non_mapping_is_none() {
        let o = obj(json!({"spec": "not-a-map"}));
        assert!(nested_field(&o, &["spec", "selector"]).is_none());
    }

    #[test]
    fn nested_map_rejects_null_and_other_shapes() {
        let o = obj(json!({"spec": {"a": null, "b": "x", "c": [1], "d": {}}}));
        assert!(nested_map(&o, &["spec", "a"]).is_none());
        assert!(nested_map(&o, &["spec", "b"]).is_none());
        assert!(nested_map(&o, &["spec", "c"]).is_none());
        assert!(nested_map(&o, &["spec", "d"]).is_some());
    }

    #[test]
    fn remove_nested_field_keeps_siblings() {
        let mut o = obj(json!({"spec": {"selector": {"matchLabels": {}}, "volumeName": "pv-1"}}));
        let removed = remove_nested_field(&mut o, &["spec", "selector"]);
        assert_eq!(removed, Some(json!({"matchLabels": {}})));
        assert_eq!(Value::Object(o), json!({"spec": {"volumeName": "pv-1"}}));
    }

    #[test]
    fn remove_nested_field_missing_is_noop() {
        let mut o = obj(json!({"metadata": {"name": "data"}}));
        let before = o.clone();
        assert!(remove_nested_field(&mut o, &["spec", "selector"]).is_none());
        assert!(remove_nested_field(&mut o, &["metadata", "name", "x"]).is_none());
        assert!(remove_nested_field(&mut o, &[]).is_none());
        assert_eq!(o, before);
    }
}
