//! Shared PVC fixtures.

use serde_json::{json, Value};

pub fn pvc_with_selector() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "PersistentVolumeClaim",
        "metadata": {"name": "test-pvc", "namespace": "test-namespace"},
        "spec": {
            "selector": {"matchLabels": {"environment": "production"}},
            "accessModes": ["ReadWriteOnce"],
            "resources": {"requests": {"storage": "10Gi"}}
        },
        "status": {"phase": "Bound"}
    })
}

pub fn pvc_without_selector() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "PersistentVolumeClaim",
        "metadata": {"name": "test-pvc", "namespace": "test-namespace"},
        "spec": {"accessModes": ["ReadWriteOnce"]}
    })
}
