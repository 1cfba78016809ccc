use crate::diagram::NodeInstance;
use itertools::Itertools;
use serde_json::{Map, Value};

/// Defines the contract for turning a node of a specific block into its pipeline fragment.
///
/// Implementations must be deterministic: the same name and properties always
/// produce the same fragment, and different property bags never collide.
pub trait FragmentWriter: Send + Sync {
    fn block_name(&self) -> &str;
    fn write(&self, node: &NodeInstance) -> String;
}

/// Writes the default fragment for a node.
///
/// A node without properties is written as its bare block name. Otherwise the
/// name is followed by a space and the properties as canonical JSON:
///
/// ```text
/// http_source {"headers":{"a":"1","b":"2"},"url":"http://x"}
/// ```
pub fn write_fragment(node: &NodeInstance) -> String {
    if node.properties.is_empty() {
        node.name.clone()
    } else {
        format!("{} {}", node.name, canonical_json(&node.properties))
    }
}

/// Compact JSON with object keys sorted at every depth, so the output does not
/// depend on the order properties were inserted in.
pub fn canonical_json(properties: &Map<String, Value>) -> String {
    let mut out = String::new();
    write_object(properties, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => write_object(map, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        // Scalars already have a single compact representation.
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_object(map: &Map<String, Value>, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in map.iter().sorted_by(|a, b| a.0.cmp(b.0)).enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&Value::String(key.clone()).to_string());
        out.push(':');
        write_value(value, out);
    }
    out.push('}');
}

