//! Arena-backed binary trees.
//!
//! A [`BinaryTree`] owns all of its nodes in a generational arena and
//! hands out positions as arena indices. Each node stores an element, the
//! indices of its (up to two) children, and a navigational back-reference
//! to its parent. On top of the structural core sit the four classic
//! traversals (preorder, inorder, postorder, breadth-first) as lazy
//! iterators, derived queries (height, depth, extrema, subtree flip), and
//! two console renderings: a fixed-width ASCII diagram and an indented
//! [`termtree`] conversion.
//!
//! ```
//! use rstree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! let root = tree.add_root(1)?;
//! tree.add_left(root, 2)?;
//! tree.add_right(root, 3)?;
//!
//! let level_order: Vec<i32> = tree.breadth_first().map(|(_, n)| n.element).collect();
//! assert_eq!(level_order, vec![1, 2, 3]);
//! assert_eq!(tree.height(), 1);
//! # Ok::<(), rstree::TreeError>(())
//! ```

pub mod errors;
mod ops;
pub mod render;
pub mod traverse;
pub mod tree;
pub mod util;

pub use errors::{Side, TreeError, TreeResult};
pub use generational_arena::Index;
pub use render::{diagram, pretty_print, ToTermTree};
pub use traverse::{BreadthFirst, Elements, Inorder, Postorder, Preorder};
pub use tree::{BinaryTree, Node};
