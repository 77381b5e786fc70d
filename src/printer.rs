//! Path-compressing tree rendering.
//!
//! A maximal run of single-child ancestors is collapsed onto one dotted line;
//! indentation reflects only true branching depth. A dialog state like
//! `R -> a -> b -> {c, d}` renders as:
//!
//! ```text
//! R.a.b
//!     .c
//!     .d
//! ```

use crate::escape::escape_node_name;
use crate::node::{NodeName, TreeNode};

/// Formats one emitted line from the current path, indent level and the
/// number of trailing path nodes not yet printed on an earlier line.
///
/// Leading whitespace is four spaces per indent level; a literal "." marks
/// lines whose path prefix was already printed above.
pub fn format_path_line(
    path: &[&TreeNode],
    indent_level: usize,
    num_unprinted: usize,
    format_name: impl Fn(&TreeNode) -> String,
) -> String {
    let mut line = " ".repeat(4 * indent_level);
    let unprinted = &path[path.len().saturating_sub(num_unprinted)..];
    if unprinted.len() != path.len() {
        line.push('.');
    }
    let names: Vec<String> = unprinted.iter().map(|node| format_name(node)).collect();
    line.push_str(&names.join("."));
    line
}

fn default_format_line(path: &[&TreeNode], indent_level: usize, num_unprinted: usize) -> String {
    format_path_line(path, indent_level, num_unprinted, |node| {
        escape_node_name(&node.name.to_string())
    })
}

/// Renders a [`TreeNode`] as a compressed, indented multi-line string.
///
/// Customizable via a line formatter (receives path, indent level and the
/// unprinted-suffix length) and a sort key ordering children at each branch.
/// Without a sort key children render in current iteration order.
pub struct PrettyPrinter<'a> {
    format_line: Box<dyn Fn(&[&TreeNode], usize, usize) -> String + 'a>,
    sort_key: Option<Box<dyn Fn(&NodeName) -> String + 'a>>,
}

impl Default for PrettyPrinter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PrettyPrinter<'a> {
    pub fn new() -> Self {
        Self {
            format_line: Box::new(default_format_line),
            sort_key: None,
        }
    }

    pub fn with_format_line(
        mut self,
        format_line: impl Fn(&[&TreeNode], usize, usize) -> String + 'a,
    ) -> Self {
        self.format_line = Box::new(format_line);
        self
    }

    pub fn with_sort_key(mut self, sort_key: impl Fn(&NodeName) -> String + 'a) -> Self {
        self.sort_key = Some(Box::new(sort_key));
        self
    }

    pub fn render(&self, root: &TreeNode) -> String {
        let mut lines = Vec::new();
        let mut path = Vec::new();
        self.walk(root, &mut path, 0, 0, &mut lines);
        lines.join("\n")
    }

    fn walk<'t>(
        &self,
        node: &'t TreeNode,
        path: &mut Vec<&'t TreeNode>,
        num_unprinted: usize,
        indent_level: usize,
        lines: &mut Vec<String>,
    ) {
        path.push(node);
        let num_unprinted = num_unprinted + 1;

        // A single child defers the line; its name joins a later dotted run.
        let (next_indent, next_unprinted) = if node.num_children() == 1 {
            (indent_level, num_unprinted)
        } else {
            lines.push((self.format_line)(path.as_slice(), indent_level, num_unprinted));
            (indent_level + 1, 0)
        };

        match &self.sort_key {
            None => {
                for child in node.children() {
                    self.walk(child, path, next_unprinted, next_indent, lines);
                }
            }
            Some(sort_key) => {
                let mut children: Vec<&TreeNode> = node.children().iter().collect();
                children.sort_by_key(|child| sort_key(&child.name));
                for child in children {
                    self.walk(child, path, next_unprinted, next_indent, lines);
                }
            }
        }
        path.pop();
    }
}
