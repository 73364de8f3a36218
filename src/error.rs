use thiserror::Error;

/// A structural property of an [`AvlTree`](crate::AvlTree) that does not hold. Returned by
/// [`AvlTree::validate`](crate::AvlTree::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A key is not strictly greater than the key visited before it in order. This covers both
    /// misplaced keys and duplicates.
    #[error("keys are not in strictly ascending order")]
    OutOfOrder,

    /// A node's cached height disagrees with the height of the subtree below it.
    #[error("cached height {cached} does not match measured height {actual}")]
    StaleHeight {
        /// The height stored on the node.
        cached: isize,
        /// The height of the node's subtree, measured by walking it.
        actual: isize,
    },

    /// A node's subtrees differ in height by more than one.
    #[error("balance factor {balance_factor} is outside -1..=1")]
    Unbalanced {
        /// Left subtree height minus right subtree height.
        balance_factor: isize,
    },
}
