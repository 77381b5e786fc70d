//! Tests for the path-compressing pretty-printer.

use dstree::node::TreeNode;
use dstree::printer::{format_path_line, PrettyPrinter};

// ============================================================
// Compression Tests
// ============================================================

#[test]
fn given_single_child_chain_when_rendering_then_chain_compresses_to_dotted_line() {
    //  R -> a -> b -> {c, d}
    let tree = TreeNode::with_children(
        "R",
        vec![TreeNode::with_children(
            "a",
            vec![TreeNode::with_children(
                "b",
                vec![TreeNode::new("c"), TreeNode::new("d")],
            )],
        )],
    );

    let rendered = PrettyPrinter::new().render(&tree);
    assert_eq!(rendered, "R.a.b\n    .c\n    .d");
}

#[test]
fn given_nested_branches_when_rendering_then_indent_reflects_branching_depth_only() {
    // root -> {left -> l1 -> {x, y}, right}
    let tree = TreeNode::with_children(
        "root",
        vec![
            TreeNode::with_children(
                "left",
                vec![TreeNode::with_children(
                    "l1",
                    vec![TreeNode::new("x"), TreeNode::new("y")],
                )],
            ),
            TreeNode::new("right"),
        ],
    );

    let rendered = PrettyPrinter::new().render(&tree);
    let expected = "root\n    .left.l1\n        .x\n        .y\n    .right";
    assert_eq!(rendered, expected);
}

#[test]
fn given_finite_tree_when_rendering_then_line_count_equals_branch_points_and_leaves() {
    let tree = TreeNode::with_children(
        "root",
        vec![
            TreeNode::with_children("a", vec![TreeNode::new("a1"), TreeNode::new("a2")]),
            TreeNode::with_children("b", vec![TreeNode::new("b1")]),
        ],
    );

    let rendered = PrettyPrinter::new().render(&tree);
    let expected_lines = tree
        .descendants(true)
        .filter(|n| n.num_children() != 1)
        .count();
    assert_eq!(rendered.lines().count(), expected_lines);
}

// ============================================================
// Escaping Tests
// ============================================================

#[test]
fn given_name_with_period_when_rendering_then_period_is_escaped_in_compressed_line() {
    let tree = TreeNode::with_children(
        "R",
        vec![TreeNode::with_children(
            "x.y",
            vec![TreeNode::new("z")],
        )],
    );

    assert_eq!(PrettyPrinter::new().render(&tree), r"R.x\.y.z");
}

#[test]
fn given_name_with_pipe_when_rendering_then_pipe_is_escaped() {
    let tree = TreeNode::with_children("R", vec![TreeNode::new("a|b"), TreeNode::new("c")]);

    let rendered = PrettyPrinter::new().render(&tree);
    assert_eq!(rendered, "R\n    .a\\|b\n    .c");
}

// ============================================================
// Customization Tests
// ============================================================

#[test]
fn given_reverse_sort_key_when_rendering_then_branch_order_reverses() {
    let tree = TreeNode::with_children(
        "root",
        vec![TreeNode::new("a"), TreeNode::new("b"), TreeNode::new("c")],
    );

    let rendered = PrettyPrinter::new()
        .with_sort_key(|name| {
            // Reverse lexicographic order via negated bytes
            name.to_string()
                .bytes()
                .map(|b| (255 - b) as char)
                .collect()
        })
        .render(&tree);

    assert_eq!(rendered, "root\n    .c\n    .b\n    .a");
}

#[test]
fn given_sorted_render_when_inspecting_tree_then_tree_order_is_untouched() {
    let tree = TreeNode::with_children("root", vec![TreeNode::new("b"), TreeNode::new("a")]);

    let _ = PrettyPrinter::new()
        .with_sort_key(|name| name.to_string())
        .render(&tree);

    let names: Vec<String> = tree.children().iter().map(|c| c.name.to_string()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn given_custom_line_formatter_when_rendering_then_formatter_receives_walk_state() {
    let tree = TreeNode::with_children(
        "R",
        vec![TreeNode::with_children(
            "a",
            vec![TreeNode::new("b"), TreeNode::new("c")],
        )],
    );

    let rendered = PrettyPrinter::new()
        .with_format_line(|path, indent, num_unprinted| {
            format!("{}:{}:{}", path.len(), indent, num_unprinted)
        })
        .render(&tree);

    // Line per branch point: R.a (path len 2), then leaves b and c (path len 3).
    assert_eq!(rendered, "2:0:2\n3:1:1\n3:1:1");
}

#[test]
fn given_annotating_formatter_when_rendering_then_helper_keeps_indent_and_marker() {
    let tree = TreeNode::with_children("R", vec![TreeNode::new("a"), TreeNode::new("b")]);

    let rendered = PrettyPrinter::new()
        .with_format_line(|path, indent, num_unprinted| {
            format_path_line(path, indent, num_unprinted, |node| {
                format!("[{}]", node.name)
            })
        })
        .render(&tree);

    assert_eq!(rendered, "[R]\n    .[a]\n    .[b]");
}
