//! Escaping for the two characters the dotted path syntax reserves:
//! "." joins path segments and "|" separates alternations.

/// Escapes any special characters in an ontology node name.
///
/// Substitutions are applied sequentially ("|" first, then "."), so escaping
/// an already-escaped name is not idempotent. Apply exactly once per name.
pub fn escape_node_name(name: &str) -> String {
    name.replace('|', r"\|").replace('.', r"\.")
}

/// Unescapes any special characters in an ontology node name.
/// Exact inverse of [`escape_node_name`].
pub fn unescape_node_name(name: &str) -> String {
    name.replace(r"\|", "|").replace(r"\.", ".")
}
