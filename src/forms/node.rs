//! Nested form trees built from flat `(path, value)` entries

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use thiserror::Error;

use super::path::{PathSpec, is_index, parse_index, parse_path};

/// Why a strict set could not store its value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("target is not an object or array")]
    NotAContainer,

    #[error("path has no segments")]
    EmptyPath,

    #[error("segment '{segment}' cannot index an array")]
    NotAnIndex { segment: String },
}

/// A node of a form tree.
///
/// Objects keep their keys in insertion order so a serialized submission
/// lists fields the way the form declared them. Array holes left by
/// out-of-order indexes are `Null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNode {
    Object(Vec<(String, FormNode)>),
    Array(Vec<FormNode>),
    Scalar(String),
    Null,
}

impl FormNode {
    pub fn empty_object() -> Self {
        FormNode::Object(Vec::new())
    }

    pub fn empty_array() -> Self {
        FormNode::Array(Vec::new())
    }

    pub fn is_container(&self) -> bool {
        matches!(self, FormNode::Object(_) | FormNode::Array(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormNode::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Look up a direct child by key (objects) or index segment (arrays)
    pub fn get(&self, key: &str) -> Option<&FormNode> {
        match self {
            FormNode::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            FormNode::Array(items) => parse_index(key).and_then(|index| items.get(index)),
            _ => None,
        }
    }

    /// Follow a dot/bracket path down the tree
    pub fn get_path(&self, path: &str) -> Option<&FormNode> {
        parse_path(path)
            .iter()
            .try_fold(self, |node, segment| node.get(segment))
    }

    /// Mutable slot for `key`, created as `Null` when missing
    fn slot_mut(&mut self, key: &str) -> Result<&mut FormNode, PathError> {
        match self {
            FormNode::Object(entries) => {
                let position = match entries.iter().position(|(k, _)| k == key) {
                    Some(position) => position,
                    None => {
                        entries.push((key.to_string(), FormNode::Null));
                        entries.len() - 1
                    }
                };
                Ok(&mut entries[position].1)
            }
            FormNode::Array(items) => {
                let index = parse_index(key).ok_or_else(|| PathError::NotAnIndex {
                    segment: key.to_string(),
                })?;
                let len = index.checked_add(1).ok_or_else(|| PathError::NotAnIndex {
                    segment: key.to_string(),
                })?;
                if items.len() < len {
                    items.resize(len, FormNode::Null);
                }
                Ok(&mut items[index])
            }
            _ => Err(PathError::NotAContainer),
        }
    }

    /// Descend into the container at `key`, creating one when the slot is
    /// empty or holds a scalar.
    fn child_container(&mut self, key: &str, as_array: bool) -> Result<&mut FormNode, PathError> {
        let slot = self.slot_mut(key)?;
        if !slot.is_container() {
            *slot = if as_array {
                FormNode::empty_array()
            } else {
                FormNode::empty_object()
            };
        }
        Ok(slot)
    }
}

impl From<&str> for FormNode {
    fn from(value: &str) -> Self {
        FormNode::Scalar(value.to_string())
    }
}

impl From<String> for FormNode {
    fn from(value: String) -> Self {
        FormNode::Scalar(value)
    }
}

impl Serialize for FormNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FormNode::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            FormNode::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            FormNode::Scalar(value) => serializer.serialize_str(value),
            FormNode::Null => serializer.serialize_unit(),
        }
    }
}

impl From<FormNode> for serde_json::Value {
    fn from(node: FormNode) -> Self {
        match node {
            FormNode::Object(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
            FormNode::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            FormNode::Scalar(value) => serde_json::Value::String(value),
            FormNode::Null => serde_json::Value::Null,
        }
    }
}

/// Set `value` at `path` inside `target`, reporting why nothing was stored.
///
/// Every segment but the last names a container. A missing or scalar slot
/// becomes an array when the following segment is an index and an object
/// otherwise. The last segment is overwritten.
pub fn try_deep_set<P>(
    target: &mut FormNode,
    path: P,
    value: impl Into<FormNode>,
) -> Result<(), PathError>
where
    P: PathSpec,
{
    if !target.is_container() {
        return Err(PathError::NotAContainer);
    }

    let segments = path.segments();
    let Some((last, parents)) = segments.split_last() else {
        return Err(PathError::EmptyPath);
    };

    let mut cursor = target;
    for (position, segment) in parents.iter().enumerate() {
        let next = &segments[position + 1];
        cursor = cursor.child_container(segment, is_index(next))?;
    }

    *cursor.slot_mut(last)? = value.into();
    Ok(())
}

/// Permissive [`try_deep_set`]: a call that cannot store its value leaves the
/// target as it was. Returns the target for chaining.
pub fn deep_set<P>(target: &mut FormNode, path: P, value: impl Into<FormNode>) -> &mut FormNode
where
    P: PathSpec,
{
    if let Err(error) = try_deep_set(&mut *target, path, value) {
        tracing::trace!(%error, "form path ignored");
    }
    target
}

/// Fold form entries, in the order given, into one object tree
pub fn form_data_object<I, K, V>(entries: I) -> FormNode
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<FormNode>,
{
    let mut root = FormNode::empty_object();
    for (path, value) in entries {
        deep_set(&mut root, path.as_ref(), value);
    }
    root
}
