/// A slot in the list arena.
///
/// `next` holds the arena index of the successor, `None` marks the last node.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Option<usize>,
}

impl<T> Node<T> {
    pub(crate) const fn new(data: T) -> Self {
        Self { data, next: None }
    }
}

/// Arena storage entry. Vacant slots chain through the free-list.
#[derive(Debug, Clone)]
pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

impl<T> Slot<T> {
    #[inline]
    pub(crate) fn node(&self) -> Option<&Node<T>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<T>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }
}
