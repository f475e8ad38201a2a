//! Shape-checking accessors shared by rule implementations.
//!
//! Every helper maps [`Node::Absent`] to `Ok(None)` so optional values fall
//! through, and reports anything else that does not fit as a [`RuleError`].

use agentcfg_core::Node;

use super::error::RuleError;

/// Dotted path of a field inside a section.
pub(crate) fn path(section: &str, field: &str) -> String {
    format!("{}.{}", section, field)
}

/// The section itself when it is a mapping; `None` when absent.
pub(crate) fn mapping<'a>(key: &str, node: &'a Node) -> Result<Option<&'a Node>, RuleError> {
    match node {
        Node::Absent => Ok(None),
        Node::Mapping(_) => Ok(Some(node)),
        other => Err(RuleError::InvalidShape {
            key: key.to_string(),
            expected: "mapping",
            found: other.kind().to_string(),
        }),
    }
}

pub(crate) fn string(key: &str, node: &Node) -> Result<Option<String>, RuleError> {
    match node {
        Node::Absent => Ok(None),
        Node::String(s) => Ok(Some(s.clone())),
        other => Err(RuleError::InvalidValue {
            key: key.to_string(),
            expected: "a string",
            found: other.kind().to_string(),
        }),
    }
}

/// Like [`string`] but the field must be present.
pub(crate) fn required_string(section: &str, field: &str, parent: &Node) -> Result<String, RuleError> {
    let key = path(section, field);
    string(&key, parent.get(field))?.ok_or(RuleError::UnknownRequiredKey {
        key,
        section: section.to_string(),
        expected: "a string",
    })
}

pub(crate) fn boolean(key: &str, node: &Node) -> Result<Option<bool>, RuleError> {
    match node {
        Node::Absent => Ok(None),
        Node::Bool(b) => Ok(Some(*b)),
        other => Err(RuleError::InvalidValue {
            key: key.to_string(),
            expected: "a boolean",
            found: other.kind().to_string(),
        }),
    }
}

/// Sequence of strings. Element errors carry an indexed path (`key[2]`).
pub(crate) fn string_list(key: &str, node: &Node) -> Result<Option<Vec<String>>, RuleError> {
    let items = match node {
        Node::Absent => return Ok(None),
        Node::Sequence(items) => items,
        other => {
            return Err(RuleError::InvalidShape {
                key: key.to_string(),
                expected: "sequence",
                found: other.kind().to_string(),
            })
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let item_key = format!("{}[{}]", key, i);
            string(&item_key, item)?.ok_or(RuleError::InvalidValue {
                key: item_key,
                expected: "a string",
                found: item.kind().to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
