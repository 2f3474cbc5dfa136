//! Console rendering for [`BinaryTree`].
//!
//! Two renderings are provided: [`diagram`] draws the classic fixed-width
//! triangle with `/` and `\` branch rows, and [`ToTermTree`] converts to a
//! [`termtree::Tree`] for the indented one-node-per-line form. The diagram
//! is a debug aid for small trees; deep or very unbalanced trees distort
//! because every level is laid out on a power-of-two grid.

use std::fmt;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::tree::BinaryTree;

/// Renders the tree as a level-by-level ASCII diagram.
///
/// Returns an empty string for an empty tree. Spacing per level is driven
/// by `floor = levels_remaining`: `2^floor - 1` leading spaces,
/// `2^(floor+1) - 1` between nodes, and `2^(floor-1)` rows of branch
/// characters underneath.
#[instrument(level = "debug", skip_all)]
pub fn diagram<T: fmt::Display>(tree: &BinaryTree<T>) -> String {
    let Some(root) = tree.root() else {
        return String::new();
    };
    let levels = tree.height() + 1;
    let mut out = String::new();
    render_level(tree, &[Some(root)], 1, levels, &mut out);
    out
}

/// Writes the diagram to stdout.
pub fn pretty_print<T: fmt::Display>(tree: &BinaryTree<T>) {
    print!("{}", diagram(tree));
}

fn render_level<T: fmt::Display>(
    tree: &BinaryTree<T>,
    level_nodes: &[Option<Index>],
    current_level: usize,
    max_level: usize,
    out: &mut String,
) {
    if level_nodes.iter().all(Option::is_none) {
        return;
    }

    let floor = max_level.saturating_sub(current_level);
    let edge_lines = 1usize << floor.saturating_sub(1);
    let first_spaces = (1usize << floor) - 1;
    let between_spaces = (1usize << (floor + 1)) - 1;

    push_spaces(out, first_spaces);
    let mut next_level = Vec::with_capacity(level_nodes.len() * 2);
    for slot in level_nodes {
        match slot.and_then(|idx| tree.get(idx)) {
            Some(node) => {
                out.push_str(&node.element.to_string());
                next_level.push(node.left());
                next_level.push(node.right());
            }
            None => {
                next_level.push(None);
                next_level.push(None);
                push_spaces(out, 1);
            }
        }
        push_spaces(out, between_spaces);
    }
    out.push('\n');

    for i in 1..=edge_lines {
        for slot in level_nodes {
            push_spaces(out, first_spaces.saturating_sub(i));
            match slot.and_then(|idx| tree.get(idx)) {
                None => {
                    push_spaces(out, edge_lines * 2 + i + 1);
                }
                Some(node) => {
                    if node.left().is_some() {
                        out.push('/');
                    } else {
                        push_spaces(out, 1);
                    }
                    push_spaces(out, i * 2 - 1);
                    if node.right().is_some() {
                        out.push('\\');
                    } else {
                        push_spaces(out, 1);
                    }
                    push_spaces(out, (edge_lines * 2).saturating_sub(i));
                }
            }
        }
        out.push('\n');
    }

    render_level(tree, &next_level, current_level + 1, max_level, out);
}

fn push_spaces(out: &mut String, n: usize) {
    for _ in 0..n {
        out.push(' ');
    }
}

/// Conversion into the indented `termtree` rendering.
pub trait ToTermTree {
    fn to_termtree(&self) -> Tree<String>;
}

impl<T: fmt::Display> ToTermTree for BinaryTree<T> {
    fn to_termtree(&self) -> Tree<String> {
        fn build<T: fmt::Display>(tree: &BinaryTree<T>, node: Index, parent: &mut Tree<String>) {
            for child_idx in tree.children(node) {
                if let Some(child) = tree.get(child_idx) {
                    let mut child_tree = Tree::new(child.element.to_string());
                    build(tree, child_idx, &mut child_tree);
                    parent.push(child_tree);
                }
            }
        }

        match self.root().and_then(|root| self.get(root).map(|n| (root, n))) {
            Some((root_idx, root)) => {
                let mut tree = Tree::new(root.element.to_string());
                build(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("(empty)".to_string()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_termtree())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::init_test_setup;

    fn trimmed_lines(s: &str) -> Vec<String> {
        s.lines().map(|l| l.trim_end().to_string()).collect()
    }

    #[test]
    fn test_diagram_of_empty_tree_is_empty() {
        init_test_setup();
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(diagram(&tree), "");
    }

    #[test]
    fn test_diagram_of_single_node() {
        init_test_setup();
        let mut tree = BinaryTree::new();
        tree.add_root('x').unwrap();
        assert_eq!(trimmed_lines(&diagram(&tree)), vec!["x", ""]);
    }

    #[test]
    fn test_diagram_of_two_levels() {
        init_test_setup();
        let mut tree = BinaryTree::new();
        let root = tree.add_root(1).unwrap();
        tree.add_left(root, 2).unwrap();
        tree.add_right(root, 3).unwrap();

        assert_eq!(
            trimmed_lines(&diagram(&tree)),
            vec![" 1", "/ \\", "2 3", ""]
        );
    }

    #[test]
    fn test_termtree_lists_children_indented() {
        init_test_setup();
        let mut tree = BinaryTree::new();
        let root = tree.add_root("a").unwrap();
        tree.add_left(root, "b").unwrap();
        tree.add_right(root, "c").unwrap();

        let rendered = tree.to_termtree().to_string();
        assert!(rendered.starts_with('a'));
        assert!(rendered.contains("b"));
        assert!(rendered.contains("c"));
        // left child is listed before the right child
        assert!(rendered.find('b').unwrap() < rendered.find('c').unwrap());
    }
}
