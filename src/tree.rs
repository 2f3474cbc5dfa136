use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{Side, TreeError, TreeResult};

/// Node in the arena-backed binary tree.
///
/// Links are arena indices, never owning references. The parent index is
/// navigational only and must not be used to extend a node's lifetime.
#[derive(Debug)]
pub struct Node<T> {
    /// Element stored at this node
    pub element: T,
    pub(crate) parent: Option<Index>,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl<T> Node<T> {
    /// Index of the parent node, `None` for the root.
    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    /// Index of the left child, if present.
    pub fn left(&self) -> Option<Index> {
        self.left
    }

    /// Index of the right child, if present.
    pub fn right(&self) -> Option<Index> {
        self.right
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-backed binary tree.
///
/// The arena owns every node; positions are handed out as
/// `generational_arena::Index` values, so a stale index from a deleted
/// node is detected instead of resolving to unrelated data. The structure
/// is connected and acyclic: each non-root node is referenced by exactly
/// one parent slot, and its parent back-reference points at that parent.
#[derive(Debug)]
pub struct BinaryTree<T> {
    /// Arena storage for all tree nodes
    arena: Arena<Node<T>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
    /// Total node count, kept in step with every insert/delete/attach
    size: usize,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get(&self, node: Index) -> Option<&Node<T>> {
        self.arena.get(node)
    }

    pub fn get_mut(&mut self, node: Index) -> Option<&mut Node<T>> {
        self.arena.get_mut(node)
    }

    /// Element stored at `node`, if the index is still live.
    pub fn element(&self, node: Index) -> Option<&T> {
        self.get(node).map(|n| &n.element)
    }

    pub fn parent(&self, node: Index) -> Option<Index> {
        self.get(node).and_then(|n| n.parent)
    }

    pub fn left(&self, node: Index) -> Option<Index> {
        self.get(node).and_then(|n| n.left)
    }

    pub fn right(&self, node: Index) -> Option<Index> {
        self.get(node).and_then(|n| n.right)
    }

    /// Present children of `node`, left before right.
    pub fn children(&self, node: Index) -> impl Iterator<Item = Index> {
        let slots = self
            .get(node)
            .map(|n| [n.left, n.right])
            .unwrap_or([None, None]);
        slots.into_iter().flatten()
    }

    /// Number of children of `node`: 0, 1, or 2.
    pub fn num_children(&self, node: Index) -> usize {
        self.children(node).count()
    }

    /// Identity comparison against the root index, not element equality.
    pub fn is_root(&self, node: Index) -> bool {
        self.root == Some(node)
    }

    pub fn is_leaf(&self, node: Index) -> bool {
        self.get(node).map(Node::is_leaf).unwrap_or(false)
    }

    /// The other child of `node`'s parent, `None` for the root or an only
    /// child.
    pub fn sibling(&self, node: Index) -> Option<Index> {
        let parent = self.parent(node)?;
        let pn = self.get(parent)?;
        if pn.left == Some(node) {
            pn.right
        } else {
            pn.left
        }
    }

    /// Collects the indices of all leaf nodes, in preorder position.
    #[instrument(level = "debug", skip_all)]
    pub fn leaf_nodes(&self) -> Vec<Index> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, node: Index, leaves: &mut Vec<Index>) {
        if let Some(n) = self.get(node) {
            if n.is_leaf() {
                leaves.push(node);
            } else {
                for child in self.children(node) {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }

    /// Places `element` at the root of an empty tree.
    ///
    /// Fails with [`TreeError::RootExists`] if the tree already has a root.
    #[instrument(level = "trace", skip_all)]
    pub fn add_root(&mut self, element: T) -> TreeResult<Index> {
        if self.root.is_some() {
            return Err(TreeError::RootExists);
        }
        let idx = self.arena.insert(Node {
            element,
            parent: None,
            left: None,
            right: None,
        });
        self.root = Some(idx);
        self.size = 1;
        Ok(idx)
    }

    /// Creates a new left child of `node` holding `element`.
    ///
    /// Fails with [`TreeError::ChildOccupied`] if the slot is taken.
    #[instrument(level = "trace", skip_all)]
    pub fn add_left(&mut self, node: Index, element: T) -> TreeResult<Index> {
        self.add_child(node, Side::Left, element)
    }

    /// Creates a new right child of `node` holding `element`.
    ///
    /// Fails with [`TreeError::ChildOccupied`] if the slot is taken.
    #[instrument(level = "trace", skip_all)]
    pub fn add_right(&mut self, node: Index, element: T) -> TreeResult<Index> {
        self.add_child(node, Side::Right, element)
    }

    fn add_child(&mut self, node: Index, side: Side, element: T) -> TreeResult<Index> {
        let parent = self.get(node).ok_or(TreeError::NodeGone)?;
        let slot = match side {
            Side::Left => parent.left,
            Side::Right => parent.right,
        };
        if slot.is_some() {
            return Err(TreeError::ChildOccupied(side));
        }
        let idx = self.arena.insert(Node {
            element,
            parent: Some(node),
            left: None,
            right: None,
        });
        // Slot checked above, parent still live
        if let Some(parent) = self.arena.get_mut(node) {
            match side {
                Side::Left => parent.left = Some(idx),
                Side::Right => parent.right = Some(idx),
            }
        }
        self.size += 1;
        Ok(idx)
    }

    /// Swaps a new element into `node`, returning the old one.
    #[instrument(level = "trace", skip_all)]
    pub fn replace(&mut self, node: Index, element: T) -> TreeResult<T> {
        let n = self.arena.get_mut(node).ok_or(TreeError::NodeGone)?;
        Ok(std::mem::replace(&mut n.element, element))
    }

    /// Deletes `node`, splicing its single child (if any) into its place,
    /// and returns the element that was stored there.
    ///
    /// Fails with [`TreeError::DeleteFullNode`] if `node` has two children;
    /// the tree is left unchanged in that case.
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, node: Index) -> TreeResult<T> {
        let n = self.get(node).ok_or(TreeError::NodeGone)?;
        if n.left.is_some() && n.right.is_some() {
            return Err(TreeError::DeleteFullNode);
        }
        let child = n.left.or(n.right);
        let parent = n.parent;

        if let Some(child) = child {
            if let Some(c) = self.arena.get_mut(child) {
                c.parent = parent;
            }
        }
        match parent {
            None => self.root = child,
            Some(parent) => {
                if let Some(p) = self.arena.get_mut(parent) {
                    if p.left == Some(node) {
                        p.left = child;
                    } else {
                        p.right = child;
                    }
                }
            }
        }
        let removed = self.arena.remove(node).ok_or(TreeError::NodeGone)?;
        self.size -= 1;
        Ok(removed.element)
    }

    /// Attaches `left` and `right` as the left and right subtrees of the
    /// leaf `node`, draining both donors.
    ///
    /// Donor nodes move into this tree's arena (their indices are
    /// re-issued); an empty donor is skipped. Fails with
    /// [`TreeError::AttachToNonLeaf`] if `node` has a child.
    #[instrument(level = "debug", skip_all)]
    pub fn attach(
        &mut self,
        node: Index,
        left: &mut BinaryTree<T>,
        right: &mut BinaryTree<T>,
    ) -> TreeResult<()> {
        let target = self.get(node).ok_or(TreeError::NodeGone)?;
        if !target.is_leaf() {
            return Err(TreeError::AttachToNonLeaf);
        }

        if let Some(donor_root) = left.root.take() {
            let grafted = self.graft(left, donor_root, node)?;
            if let Some(n) = self.arena.get_mut(node) {
                n.left = Some(grafted);
            }
            left.size = 0;
        }
        if let Some(donor_root) = right.root.take() {
            let grafted = self.graft(right, donor_root, node)?;
            if let Some(n) = self.arena.get_mut(node) {
                n.right = Some(grafted);
            }
            right.size = 0;
        }
        Ok(())
    }

    /// Moves the donor subtree rooted at `donor_node` into this arena,
    /// returning the re-issued index of its root.
    fn graft(
        &mut self,
        donor: &mut BinaryTree<T>,
        donor_node: Index,
        parent: Index,
    ) -> TreeResult<Index> {
        let moved = donor.arena.remove(donor_node).ok_or(TreeError::NodeGone)?;
        let idx = self.arena.insert(Node {
            element: moved.element,
            parent: Some(parent),
            left: None,
            right: None,
        });
        self.size += 1;
        if let Some(child) = moved.left {
            let grafted = self.graft(donor, child, idx)?;
            if let Some(n) = self.arena.get_mut(idx) {
                n.left = Some(grafted);
            }
        }
        if let Some(child) = moved.right {
            let grafted = self.graft(donor, child, idx)?;
            if let Some(n) = self.arena.get_mut(idx) {
                n.right = Some(grafted);
            }
        }
        Ok(idx)
    }
}
