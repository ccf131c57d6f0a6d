//! A mutable BST owning its nodes through `Option<Box<Node>>` links.
//! `insert` and `find` descend iteratively; the structural queries
//! (traversals, height, minimum, equality) recurse over the owned
//! structure the way one would write them on paper.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1));
//!
//! tree.insert(1);
//! assert!(tree.find(&1));
//!
//! // Inserting the same value again leaves the tree untouched.
//! tree.insert(1);
//!
//! let mut visited = Vec::new();
//! tree.traverse_in_order(|v| visited.push(*v));
//! assert_eq!(visited, [1]);
//! ```

use std::cmp::{self, Ordering};

/// Errors returned by tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs at least one node but the tree has none.
    #[error("tree is empty")]
    EmptyTree,
}

/// An owned-or-absent link to a subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one value and owns up to two children. Nodes are an
/// implementation detail - they are created by [`Tree::insert`] and never
/// handed out.
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced Binary Search Tree. This can be used for inserting and
/// finding values, traversing them in the three canonical depth-first
/// orders, and asking structural questions (height, minimum, equality).
///
/// Ordering-dependent operations require `T: Ord`; purely structural ones
/// do not.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the given value into the tree, keeping the BST ordering
    /// invariant. Inserting a value that is already present leaves the
    /// tree unchanged.
    ///
    /// No rebalancing is done, so a sorted insertion sequence degrades
    /// the tree to a linked list.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert!(tree.find(&1));
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut cur = &mut self.root;
        while let Some(ref mut node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
                // Already present - the tree stays as it is.
                Ordering::Equal => return,
            }
        }
        *cur = Some(Box::new(Node::new(value)));
    }

    /// Returns whether the given value is present in the tree.
    ///
    /// This descends from the root comparing as it goes, so it costs
    /// `O(height)` and touches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut cur = &self.root;
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = &node.left,
                Ordering::Greater => cur = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Visits every value in pre-order (root, left subtree, right subtree),
    /// calling `visit` once per value.
    ///
    /// The sink is pluggable so callers decide what "visiting" means:
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for v in [2, 1, 3] {
    ///     tree.insert(v);
    /// }
    ///
    /// // Prints "Node = 2", "Node = 1", "Node = 3".
    /// tree.traverse_pre_order(|v| println!("Node = {}", v));
    /// ```
    pub fn traverse_pre_order(&self, mut visit: impl FnMut(&T)) {
        pre_order(&self.root, &mut visit);
    }

    /// Visits every value in in-order (left subtree, root, right subtree).
    /// For any tree built through [`insert`][Tree::insert] this yields the
    /// values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for v in [5, 3, 8, 1] {
    ///     tree.insert(v);
    /// }
    ///
    /// let mut sorted = Vec::new();
    /// tree.traverse_in_order(|v| sorted.push(*v));
    /// assert_eq!(sorted, [1, 3, 5, 8]);
    /// ```
    pub fn traverse_in_order(&self, mut visit: impl FnMut(&T)) {
        in_order(&self.root, &mut visit);
    }

    /// Visits every value in post-order (left subtree, right subtree, root).
    pub fn traverse_post_order(&self, mut visit: impl FnMut(&T)) {
        post_order(&self.root, &mut visit);
    }

    /// Returns the height of the tree: the number of edges on the longest
    /// path from the root to a leaf. An empty tree has height `-1` and a
    /// single node has height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        height_of(&self.root)
    }

    /// Returns the smallest value in the tree by scanning every node,
    /// without leaning on the BST ordering invariant.
    ///
    /// This costs `O(N)` where [`min_value_of_bst`][Tree::min_value_of_bst]
    /// costs `O(height)`; the two always agree on a tree built through
    /// [`insert`][Tree::insert].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree has no nodes.
    pub fn min_value(&self) -> Result<&T, Error>
    where
        T: Ord,
    {
        self.root.as_deref().map(min_in).ok_or(Error::EmptyTree)
    }

    /// Returns the smallest value in the tree by walking the left spine:
    /// in a BST the minimum is always the leftmost node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min_value_of_bst(), Err(Error::EmptyTree));
    ///
    /// tree.insert(5);
    /// tree.insert(3);
    /// assert_eq!(tree.min_value_of_bst(), Ok(&3));
    /// ```
    pub fn min_value_of_bst(&self) -> Result<&T, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }
}

/// Structural equality: two trees are equal when they have the same shape
/// and the same value at every corresponding position. Comparison
/// short-circuits on the first mismatch.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        links_equal(&self.root, &other.root)
    }
}

impl<T: Eq> Eq for Tree<T> {}

fn pre_order<T>(link: &Link<T>, visit: &mut impl FnMut(&T)) {
    if let Some(node) = link {
        visit(&node.value);
        pre_order(&node.left, visit);
        pre_order(&node.right, visit);
    }
}

fn in_order<T>(link: &Link<T>, visit: &mut impl FnMut(&T)) {
    if let Some(node) = link {
        in_order(&node.left, visit);
        visit(&node.value);
        in_order(&node.right, visit);
    }
}

fn post_order<T>(link: &Link<T>, visit: &mut impl FnMut(&T)) {
    if let Some(node) = link {
        post_order(&node.left, visit);
        post_order(&node.right, visit);
        visit(&node.value);
    }
}

/// A missing child contributes `-1`, which makes the leaf case fall out of
/// the general `1 + max(...)` formula with no special branch.
fn height_of<T>(link: &Link<T>) -> isize {
    match link {
        None => -1,
        Some(node) => 1 + cmp::max(height_of(&node.left), height_of(&node.right)),
    }
}

/// Minimum over the whole subtree rooted at `node`. A missing child is
/// simply absent from the minimum, so one-sided nodes are fine.
fn min_in<T: Ord>(node: &Node<T>) -> &T {
    let mut min = &node.value;
    if let Some(left) = node.left.as_deref() {
        min = cmp::min(min, min_in(left));
    }
    if let Some(right) = node.right.as_deref() {
        min = cmp::min(min, min_in(right));
    }
    min
}

fn links_equal<T: PartialEq>(a: &Link<T>, b: &Link<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.value == b.value
                && links_equal(&a.left, &b.left)
                && links_equal(&a.right, &b.right)
        }
        _ => false,
    }
}
