use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Scalar label identifying a node among its siblings.
///
/// Names are one of the four JSON scalar shapes that occur in annotation
/// logs. The string form (via `Display`) is what canonical ordering and the
/// pretty-printer operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeName {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeName::Bool(b) => write!(f, "{}", b),
            NodeName::Int(i) => write!(f, "{}", i),
            NodeName::Float(x) => write!(f, "{}", x),
            NodeName::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for NodeName {
    fn from(s: &str) -> Self {
        NodeName::Str(s.to_string())
    }
}

impl From<String> for NodeName {
    fn from(s: String) -> Self {
        NodeName::Str(s)
    }
}

impl From<i64> for NodeName {
    fn from(i: i64) -> Self {
        NodeName::Int(i)
    }
}

impl From<f64> for NodeName {
    fn from(x: f64) -> Self {
        NodeName::Float(x)
    }
}

impl From<bool> for NodeName {
    fn from(b: bool) -> Self {
        NodeName::Bool(b)
    }
}

impl NodeName {
    /// Reads a name from a JSON scalar. Objects, arrays and null are not
    /// valid node names.
    pub fn from_value(value: &Value) -> TreeResult<Self> {
        match value {
            Value::Bool(b) => Ok(NodeName::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(NodeName::Int(i))
                } else if let Some(x) = n.as_f64() {
                    Ok(NodeName::Float(x))
                } else {
                    Err(TreeError::TypeMismatch {
                        field: "name",
                        expected: "scalar",
                    })
                }
            }
            Value::String(s) => Ok(NodeName::Str(s.clone())),
            _ => Err(TreeError::TypeMismatch {
                field: "name",
                expected: "scalar",
            }),
        }
    }
}

/// A node in an ordered, labeled tree.
///
/// Children keep insertion order and have unique names among siblings; the
/// name-uniqueness invariant is maintained by [`TreeNode::add_child`], which
/// replaces an existing same-named child in place. The `data` map carries an
/// open domain payload (e.g. attributes of the entity the node represents)
/// and is never part of the serialized form.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub name: NodeName,
    children: Vec<TreeNode>,
    pub data: Map<String, Value>,
}

impl TreeNode {
    pub fn new(name: impl Into<NodeName>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            data: Map::new(),
        }
    }

    /// Builds a node from an ordered list of children.
    ///
    /// If two supplied children share a name, the later one silently replaces
    /// the earlier, keeping the earlier position. This mirrors keyed-map
    /// construction and is relied upon by log readers that emit duplicate
    /// path segments.
    pub fn with_children(name: impl Into<NodeName>, children: Vec<TreeNode>) -> Self {
        let mut node = Self::new(name);
        for child in children {
            node.add_child(child);
        }
        node
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Appends a child, or replaces the existing child of the same name
    /// without changing its position.
    pub fn add_child(&mut self, child: TreeNode) {
        match self.children.iter_mut().find(|c| c.name == child.name) {
            Some(existing) => *existing = child,
            None => self.children.push(child),
        }
    }

    pub fn child(&self, name: &NodeName) -> Option<&TreeNode> {
        self.children.iter().find(|c| &c.name == name)
    }

    pub fn child_mut(&mut self, name: &NodeName) -> Option<&mut TreeNode> {
        self.children.iter_mut().find(|c| &c.name == name)
    }

    /// Children in current iteration order (insertion order unless
    /// [`TreeNode::canonicalise_order`] has been applied).
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Serializes the subtree into `{"name": .., "children": [..]}`.
    ///
    /// The `data` payload is deliberately NOT serialized; round-tripping a
    /// tree through [`TreeNode::to_value`] / [`TreeNode::from_value`] drops
    /// every node's payload.
    pub fn to_value(&self) -> Value {
        let children: Vec<Value> = self.children.iter().map(|c| c.to_value()).collect();
        json!({"name": &self.name, "children": children})
    }

    /// Reconstructs a tree bottom-up from a nested `{"name", "children"}`
    /// structure. An optional `"data"` object is copied into the node;
    /// absent `"data"` yields an empty payload.
    #[instrument(level = "trace", skip(value))]
    pub fn from_value(value: &Value) -> TreeResult<Self> {
        let obj = value.as_object().ok_or(TreeError::TypeMismatch {
            field: "node",
            expected: "object",
        })?;
        let name = obj
            .get("name")
            .ok_or(TreeError::MissingKey { key: "name" })?;
        let children = obj
            .get("children")
            .ok_or(TreeError::MissingKey { key: "children" })?
            .as_array()
            .ok_or(TreeError::TypeMismatch {
                field: "children",
                expected: "array",
            })?;

        let mut node = TreeNode::new(NodeName::from_value(name)?);
        for child in children {
            node.add_child(TreeNode::from_value(child)?);
        }
        if let Some(data) = obj.get("data") {
            node.data = data
                .as_object()
                .ok_or(TreeError::TypeMismatch {
                    field: "data",
                    expected: "object",
                })?
                .clone();
        }
        Ok(node)
    }

    /// Pre-order iterator over the nodes of the subtree. Each call yields a
    /// fresh, restartable iterator.
    pub fn descendants(&self, include_self: bool) -> Descendants<'_> {
        Descendants::new(self, include_self)
    }

    /// Pre-order iterator over root-to-node paths. Every yielded path is a
    /// freshly allocated `Vec`, so callers may retain paths across steps.
    pub fn dfs_paths(&self, include_self: bool) -> DfsPaths<'_> {
        DfsPaths::new(self, include_self)
    }

    /// All descendants (including self) with no children, in traversal order.
    pub fn leaves(&self) -> Vec<&TreeNode> {
        self.descendants(true).filter(|n| n.is_leaf()).collect()
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Recursively re-sorts children ascending by the string form of their
    /// names, children before parent. In-place and idempotent.
    #[instrument(level = "trace", skip(self))]
    pub fn canonicalise_order(&mut self) {
        for child in &mut self.children {
            child.canonicalise_order();
        }
        self.children.sort_by_key(|child| child.name.to_string());
    }
}

/// Structural equality: names and payloads equal, children equal as sets of
/// (name, recursively-equal child) pairs regardless of iteration order.
impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.data == other.data
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .all(|c| other.child(&c.name).is_some_and(|o| c == o))
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TreeNode name={} with {} children>",
            self.name,
            self.children.len()
        )
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Descendants<'a> {
    fn new(root: &'a TreeNode, include_self: bool) -> Self {
        let stack = if include_self {
            vec![root]
        } else {
            root.children.iter().rev().collect()
        };
        Self { stack }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

pub struct DfsPaths<'a> {
    stack: Vec<Vec<&'a TreeNode>>,
}

impl<'a> DfsPaths<'a> {
    fn new(root: &'a TreeNode, include_self: bool) -> Self {
        let stack = if include_self {
            vec![vec![root]]
        } else {
            root.children
                .iter()
                .rev()
                .map(|child| vec![root, child])
                .collect()
        };
        Self { stack }
    }
}

impl<'a> Iterator for DfsPaths<'a> {
    type Item = Vec<&'a TreeNode>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.stack.pop()?;
        let node = *path.last()?;
        for child in node.children.iter().rev() {
            let mut child_path = path.clone();
            child_path.push(child);
            self.stack.push(child_path);
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      R
    //     / \
    //    a   b
    //    |
    //    c
    fn sample() -> TreeNode {
        TreeNode::with_children(
            "R",
            vec![
                TreeNode::with_children("a", vec![TreeNode::new("c")]),
                TreeNode::new("b"),
            ],
        )
    }

    #[test]
    fn test_descendants_preorder() {
        let tree = sample();
        let names: Vec<String> = tree
            .descendants(true)
            .map(|n| n.name.to_string())
            .collect();
        assert_eq!(names, vec!["R", "a", "c", "b"]);
    }

    #[test]
    fn test_descendants_excludes_self_by_request() {
        let tree = sample();
        let names: Vec<String> = tree
            .descendants(false)
            .map(|n| n.name.to_string())
            .collect();
        assert_eq!(names, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_dfs_paths_start_at_invoking_node() {
        let tree = sample();
        let paths: Vec<Vec<String>> = tree
            .dfs_paths(true)
            .map(|p| p.iter().map(|n| n.name.to_string()).collect())
            .collect();
        assert_eq!(
            paths,
            vec![
                vec!["R".to_string()],
                vec!["R".to_string(), "a".to_string()],
                vec!["R".to_string(), "a".to_string(), "c".to_string()],
                vec!["R".to_string(), "b".to_string()],
            ]
        );
    }

    #[test]
    fn test_display_repr() {
        let tree = sample();
        assert_eq!(format!("{}", tree), "<TreeNode name=R with 2 children>");
    }

    #[test]
    fn test_node_name_string_forms() {
        assert_eq!(NodeName::from(3i64).to_string(), "3");
        assert_eq!(NodeName::from(true).to_string(), "true");
        assert_eq!(NodeName::from("x.y").to_string(), "x.y");
    }
}
