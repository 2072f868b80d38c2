//! Treeviz formatter for structure trees

use super::truncate;
use crate::yaml::structure::{Node, YamlStructure};

pub fn to_treeviz_str(structure: &YamlStructure, max_chars: usize) -> String {
    let mut result = String::new();
    append_children(&mut result, structure.root(), "", max_chars);
    result
}

fn display_label(node: Node<'_>, max_chars: usize) -> String {
    match node.key() {
        Some(key) => truncate(key, max_chars),
        None if node.text().trim().is_empty() => "(blank)".to_string(),
        None => truncate(node.text().trim(), max_chars),
    }
}

fn append_node(result: &mut String, node: Node<'_>, prefix: &str, is_last: bool, max_chars: usize) {
    let connector = if is_last { "└─" } else { "├─" };
    let node_type = match (node.is_key(), node.is_real()) {
        (true, _) => "Key",
        (false, true) => "Raw",
        (false, false) => "Unreal",
    };

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node_type,
        display_label(node, max_chars)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node, &new_prefix, max_chars);
}

fn append_children(result: &mut String, node: Node<'_>, prefix: &str, max_chars: usize) {
    let count = node.child_count();
    for (i, child) in node.children().enumerate() {
        append_node(result, child, prefix, i + 1 == count, max_chars);
    }
}
