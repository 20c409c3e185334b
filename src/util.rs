/// What happened while deleting a key from a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeleteResult {
    /// The key wasn't found so nothing was deleted.
    NotFound,
    /// The node holding the key was removed (or had its key replaced by its successor's).
    Removed,
}
