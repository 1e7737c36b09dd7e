//! A binary tree magma whose operation fuses two trees under a fresh root.

use std::any::Any;

use rand::Rng;
use static_assertions::assert_not_impl_any;

use crate::algebra::{Magma, Semigroup, Testable};

/// Maximum recursion depth for randomly grown trees.
const MAX_RANDOM_DEPTH: usize = 8;

/// Chance that a grown node carries a child on a given side.
const CHILD_PROBABILITY: f64 = 0.5;

/// A binary tree with an optional numeric payload at every node.
///
/// The magma-only example: [`fuse`](Tree::fuse) wraps its operands under a
/// fresh payload-free root, so the operation is closed but shape-creating.
/// `(a fuse b) fuse c` and `a fuse (b fuse c)` put the extra roots in
/// different places, which is why `Tree` never claims associativity.
///
/// # Examples
///
/// ```
/// use magmoid::entities::Tree;
///
/// let left = Tree::leaf(1.0);
/// let right = Tree::leaf(2.0);
/// let fused = left.clone().fuse(right.clone());
///
/// assert_eq!(fused.value(), None);
/// assert_eq!(fused.left(), Some(&left));
/// assert_eq!(fused.right(), Some(&right));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    value: Option<f64>,
    left: Option<Box<Tree>>,
    right: Option<Box<Tree>>,
}

impl Tree {
    /// Creates a childless node carrying `value`.
    #[must_use]
    pub const fn leaf(value: f64) -> Self {
        Self {
            value: Some(value),
            left: None,
            right: None,
        }
    }

    /// Creates a node with an optional payload and optional children.
    #[must_use]
    pub fn node(value: Option<f64>, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The payload at this node, when present.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// The left child, when present.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, when present.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Number of edges on the longest path from this node down to a
    /// descendant. A childless node has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |child| 1 + child.depth());
        let right = self.right.as_ref().map_or(0, |child| 1 + child.depth());
        left.max(right)
    }

    /// Fuses two trees under a fresh payload-free root, `self` on the left
    /// and `other` on the right.
    #[must_use]
    pub fn fuse(self, other: Self) -> Self {
        Self::node(None, Some(self), Some(other))
    }
}

/// Grows a random tree, spending one unit of `budget` per level.
fn grow(budget: usize) -> Tree {
    let mut generator = rand::rng();
    let value = Some(generator.random::<f64>());
    if budget == 0 {
        return Tree::node(value, None, None);
    }
    let left = generator
        .random_bool(CHILD_PROBABILITY)
        .then(|| grow(budget - 1));
    let right = generator
        .random_bool(CHILD_PROBABILITY)
        .then(|| grow(budget - 1));
    Tree::node(value, left, right)
}

impl Testable for Tree {
    const NAME: &'static str = "Tree";

    fn make_random() -> Self {
        grow(MAX_RANDOM_DEPTH)
    }

    fn describes(value: &dyn Any) -> bool {
        value.downcast_ref::<Self>().is_some()
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Magma for Tree {
    const OPERATION: &'static str = "fuse";

    fn combine(self, other: Self) -> Self {
        self.fuse(other)
    }
}

// Fusing always adds a root, so no grouping of three trees can agree.
assert_not_impl_any!(Tree: Semigroup);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::laws::check_magma;

    #[rstest]
    fn fuse_places_operands_as_ordered_children() {
        let first = Tree::leaf(1.0);
        let second = Tree::leaf(2.0);
        let fused = first.clone().fuse(second.clone());

        assert_eq!(fused.value(), None);
        assert_eq!(fused.left(), Some(&first));
        assert_eq!(fused.right(), Some(&second));
    }

    #[rstest]
    fn combine_is_fuse() {
        let first = Tree::leaf(3.5);
        let second = Tree::leaf(4.5);
        assert_eq!(first.clone().combine(second.clone()), first.fuse(second));
    }

    #[rstest]
    fn fusing_is_not_associative() {
        let first = Tree::leaf(1.0);
        let second = Tree::leaf(2.0);
        let third = Tree::leaf(3.0);

        let grouped_left = first.clone().fuse(second.clone()).fuse(third.clone());
        let grouped_right = first.fuse(second.fuse(third));
        assert_ne!(grouped_left, grouped_right);
    }

    #[rstest]
    fn depth_counts_edges() {
        assert_eq!(Tree::leaf(0.0).depth(), 0);

        let two_levels = Tree::node(None, Some(Tree::leaf(1.0)), None);
        assert_eq!(two_levels.depth(), 1);

        let lopsided = Tree::node(
            Some(0.5),
            Some(Tree::node(None, Some(Tree::leaf(1.0)), None)),
            Some(Tree::leaf(2.0)),
        );
        assert_eq!(lopsided.depth(), 2);
    }

    #[rstest]
    fn random_trees_respect_the_depth_budget() {
        for _ in 0..50 {
            assert!(Tree::make_random().depth() <= MAX_RANDOM_DEPTH);
        }
    }

    #[rstest]
    fn describes_rejects_foreign_values() {
        assert!(Tree::describes(&Tree::leaf(1.0)));
        assert!(!Tree::describes(&1.0_f64));
        assert!(!Tree::describes(&"tree"));
    }

    #[rstest]
    fn registers_as_a_magma() {
        let report = check_magma::<Tree>();
        assert!(report.passed(), "{report}");
    }
}
