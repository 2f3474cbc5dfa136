//! Derived queries and structural utilities on [`BinaryTree`].

use generational_arena::Index;
use itertools::Itertools;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::tree::BinaryTree;

impl<T> BinaryTree<T> {
    /// Height of the whole tree, 0 for an empty tree.
    #[instrument(level = "debug", skip_all)]
    pub fn height(&self) -> usize {
        self.root().map(|root| self.height_of(root)).unwrap_or(0)
    }

    /// Height of the subtree rooted at `node`: 0 for a leaf, else one more
    /// than the tallest present child. An absent child is excluded from
    /// the max rather than counted as -1, so a half node is always exactly
    /// one level taller than its single child.
    pub fn height_of(&self, node: Index) -> usize {
        self.children(node)
            .map(|child| self.height_of(child))
            .max()
            .map(|h| h + 1)
            .unwrap_or(0)
    }

    /// Number of ancestors of `node`: 0 for the root.
    pub fn depth(&self, node: Index) -> usize {
        match self.parent(node) {
            Some(parent) => 1 + self.depth(parent),
            None => 0,
        }
    }

    /// Swaps the left and right child slots of `node`. The children keep
    /// their identity and their own subtrees; only the slot assignment
    /// changes.
    #[instrument(level = "trace", skip(self))]
    pub fn flip_node(&mut self, node: Index) -> TreeResult<()> {
        let n = self.get_mut(node).ok_or(TreeError::NodeGone)?;
        std::mem::swap(&mut n.left, &mut n.right);
        Ok(())
    }

    /// Mirrors the subtree rooted at `node`: swaps the slots at `node`,
    /// then recurses into both children.
    #[instrument(level = "debug", skip(self))]
    pub fn flip_subtree(&mut self, node: Index) -> TreeResult<()> {
        self.flip_node(node)?;
        let n = self.get(node).ok_or(TreeError::NodeGone)?;
        let (left, right) = (n.left(), n.right());
        if let Some(left) = left {
            self.flip_subtree(left)?;
        }
        if let Some(right) = right {
            self.flip_subtree(right)?;
        }
        Ok(())
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Largest element in the tree under the natural ordering.
    ///
    /// Fails with [`TreeError::EmptyTree`] if there is nothing to compare.
    #[instrument(level = "debug", skip_all)]
    pub fn max_element(&self) -> TreeResult<&T> {
        self.elements().max().ok_or(TreeError::EmptyTree)
    }

    /// Smallest element in the tree under the natural ordering.
    ///
    /// Fails with [`TreeError::EmptyTree`] if there is nothing to compare.
    #[instrument(level = "debug", skip_all)]
    pub fn min_element(&self) -> TreeResult<&T> {
        self.elements().min().ok_or(TreeError::EmptyTree)
    }

    /// Whether the inorder element sequence is non-decreasing, i.e. the
    /// tree satisfies the search-tree ordering. Trivially true for empty
    /// and single-node trees.
    #[instrument(level = "debug", skip_all)]
    pub fn is_ordered(&self) -> bool {
        self.inorder()
            .map(|(_, node)| &node.element)
            .tuple_windows()
            .all(|(a, b)| a <= b)
    }

    /// Inorder elements `e` with `start <= e < stop`.
    pub fn elements_in_range<'a>(
        &'a self,
        start: &'a T,
        stop: &'a T,
    ) -> impl Iterator<Item = &'a T> + 'a {
        self.inorder()
            .map(|(_, node)| &node.element)
            .filter(move |e| start <= *e && *e < stop)
    }
}
