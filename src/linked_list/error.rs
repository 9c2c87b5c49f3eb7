use thiserror::Error;

use super::value::ValueKind;

/// Errors returned by the fallible [`LinkedList`](super::list::LinkedList) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("list is empty")]
    EmptyList,
    #[error("node does not exist")]
    NodeNotFound,
    /// Only raised by lists built in typed mode.
    #[error("cannot insert value of type ({found}) into list having type ({expected})")]
    MismatchedTypes {
        found: ValueKind,
        expected: ValueKind,
    },
}
