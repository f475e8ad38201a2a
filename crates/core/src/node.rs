//! Untyped input model: a tagged union over parsed JSON (or YAML) values.
//!
//! Rules never see `serde_json::Value` directly. They walk a [`Node`] with
//! shape-checking accessors, and a missing key is always [`Node::Absent`]
//! rather than an error.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

use crate::error::Result;

static ABSENT: Node = Node::Absent;

/// A loosely-typed configuration value as authored by the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// Object with insertion-ordered keys.
    Mapping(IndexMap<String, Node>),
    Sequence(Vec<Node>),
    String(String),
    Number(Number),
    Bool(bool),
    /// Explicit `null` in the source document.
    Null,
    /// Key not present at all.
    #[default]
    Absent,
}

/// The variant of a [`Node`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Mapping,
    Sequence,
    String,
    Number,
    Boolean,
    Null,
    Absent,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Mapping => write!(f, "mapping"),
            NodeKind::Sequence => write!(f, "sequence"),
            NodeKind::String => write!(f, "string"),
            NodeKind::Number => write!(f, "number"),
            NodeKind::Boolean => write!(f, "boolean"),
            NodeKind::Null => write!(f, "null"),
            NodeKind::Absent => write!(f, "absent"),
        }
    }
}

impl Node {
    /// Parse already-loaded JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(value.into())
    }

    /// Parse already-loaded YAML text. Mapping keys must be strings.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Child of a mapping. Missing keys and lookups on non-mappings yield
    /// [`Node::Absent`].
    pub fn get(&self, key: &str) -> &Node {
        match self {
            Node::Mapping(map) => map.get(key).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Mapping(_) => NodeKind::Mapping,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::String(_) => NodeKind::String,
            Node::Number(_) => NodeKind::Number,
            Node::Bool(_) => NodeKind::Boolean,
            Node::Null => NodeKind::Null,
            Node::Absent => NodeKind::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Non-negative integer value; `None` for floats and negatives.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Node::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Keys of a mapping in document order (empty for any other variant).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.as_mapping()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => Node::Number(n),
            serde_json::Value::String(s) => Node::String(s),
            serde_json::Value::Array(items) => {
                Node::Sequence(items.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(map) => Node::Mapping(
                map.into_iter().map(|(k, v)| (k, Node::from(v))).collect(),
            ),
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Node::from)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Node::Mapping(map) => {
                let present = map.values().filter(|v| !v.is_absent()).count();
                let mut state = serializer.serialize_map(Some(present))?;
                for (key, value) in map.iter().filter(|(_, v)| !v.is_absent()) {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
            Node::Sequence(items) => serializer.collect_seq(items),
            Node::String(s) => serializer.serialize_str(s),
            Node::Number(n) => n.serialize(serializer),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Null | Node::Absent => serializer.serialize_unit(),
        }
    }
}
