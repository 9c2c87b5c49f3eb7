use alloc::vec::Vec;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;

use hashbrown::DefaultHashBuilder;
use hashbrown::hash_table::HashTable;

use super::cursor::{Iter, Range};
use super::display::DisplayRow;
use super::error::ListError;
use super::node::{Node, Slot};
use super::value::{Kinded, ValueKind};

/// A singly linked list backed by an arena of slots.
///
/// Links are arena indices, so unlinking a node never aliases a live reference.
/// Vacated slots drop their value immediately and are recycled by later inserts.
///
/// When built in typed mode, every insert after the first must carry the same
/// [`ValueKind`] as the head value.
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
    typed: bool,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    ///
    /// # Arguments
    /// * `typed` - Whether inserts must match the kind of the head value
    pub const fn new(typed: bool) -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
            typed,
        }
    }

    pub(crate) fn with_capacity(typed: bool, capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new(typed)
        }
    }

    /// Check if the list has no head.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Get the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this list was built in typed mode.
    #[inline]
    pub fn is_typed(&self) -> bool {
        self.typed
    }

    /// Get the value stored in the head node.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).data)
    }

    /// Get a borrowing iterator over the values in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Begin a manual traversal of the list.
    ///
    /// Each call returns an independent cursor, so any number of traversals
    /// may be active at once.
    ///
    /// # Errors
    /// Returns [`ListError::EmptyList`] if the list has no head.
    pub fn range(&self) -> Result<Range<'_, T>, ListError> {
        self.check_empty()?;
        Ok(Range::new(self))
    }

    /// Removes every node from the list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    /// Collect the rows printed by [`display`](Self::display).
    ///
    /// # Errors
    /// Returns [`ListError::EmptyList`] if the list has no head.
    pub fn display_rows(&self) -> Result<Vec<DisplayRow<'_, T>>, ListError> {
        self.check_empty()?;
        let mut rows = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(idx) = current {
            let node = self.node(idx);
            rows.push(DisplayRow {
                index: rows.len() + 1,
                value: &node.data,
                next: node.next,
            });
            current = node.next;
        }
        Ok(rows)
    }

    pub(crate) fn head_index(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn node(&self, idx: usize) -> &Node<T> {
        match self.slots[idx].node() {
            Some(node) => node,
            None => unreachable!("link to vacant slot {idx}"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match self.slots[idx].node_mut() {
            Some(node) => node,
            None => unreachable!("link to vacant slot {idx}"),
        }
    }

    fn check_empty(&self) -> Result<(), ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        Ok(())
    }

    /// Place a node in the arena, reusing a vacant slot when one is free.
    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(idx) => {
                if let Slot::Vacant { next_free } =
                    mem::replace(&mut self.slots[idx], Slot::Occupied(node))
                {
                    self.free = next_free;
                }
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacate a slot that is no longer linked and return its value.
    fn release(&mut self, idx: usize) -> T {
        let slot = mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(idx);
        self.len -= 1;
        match slot {
            Slot::Occupied(node) => node.data,
            Slot::Vacant { .. } => unreachable!("double release of slot {idx}"),
        }
    }

    /// Detach `idx` by pointing its predecessor (or the head) at its successor.
    fn unlink(&mut self, prev: Option<usize>, idx: usize) -> T {
        let next = self.node(idx).next;
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        if self.tail == Some(idx) {
            self.tail = prev;
        }
        self.release(idx)
    }
}

impl<T: Kinded> LinkedList<T> {
    /// Build a list from a sequence of values, stopping at the first rejected insert.
    pub fn from_values<I>(typed: bool, values: I) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new(typed);
        list.try_extend(values)?;
        Ok(list)
    }

    /// The kind every insert must match, if the list is typed and non-empty.
    pub fn kind(&self) -> Option<ValueKind> {
        if !self.typed {
            return None;
        }
        self.head().map(Kinded::kind)
    }

    /// Append a value at the end of the list.
    ///
    /// # Errors
    /// Returns [`ListError::MismatchedTypes`] if the list is typed and the kind of
    /// `value` differs from the kind of the head value. The list is left unchanged.
    pub fn insert(&mut self, value: T) -> Result<(), ListError> {
        if let Some(expected) = self.kind() {
            let found = value.kind();
            if found != expected {
                return Err(ListError::MismatchedTypes { found, expected });
            }
        }

        let idx = self.alloc(Node::new(value));
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        tracing::trace!(slot = idx, len = self.len, "inserted node");
        Ok(())
    }

    /// Insert each value in order, stopping at the first error.
    ///
    /// Values inserted before the failing one stay in the list.
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(value)?;
        }
        Ok(())
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Check whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|data| data == value)
    }

    /// Remove the first node whose value equals `value` and return the stored value.
    ///
    /// # Errors
    /// Returns [`ListError::EmptyList`] if the list is empty, or
    /// [`ListError::NodeNotFound`] if no node matches.
    pub fn remove_node(&mut self, value: &T) -> Result<T, ListError> {
        self.check_empty()?;

        let mut prev = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let node = self.node(idx);
            if node.data == *value {
                let removed = self.unlink(prev, idx);
                tracing::trace!(slot = idx, len = self.len, "removed node");
                return Ok(removed);
            }
            prev = Some(idx);
            current = node.next;
        }
        Err(ListError::NodeNotFound)
    }
}

impl<T: Eq + Hash> LinkedList<T> {
    /// Remove every node whose value already appeared earlier in the list.
    ///
    /// The first occurrence of each value is kept in place. Returns the number of
    /// removed nodes.
    ///
    /// # Errors
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn remove_duplicates(&mut self) -> Result<usize, ListError> {
        self.check_empty()?;

        let hasher = DefaultHashBuilder::default();
        let mut seen: HashTable<usize> = HashTable::with_capacity(self.len);
        let mut removed = 0;
        let mut prev: Option<usize> = None;
        let mut current = self.head;

        while let Some(idx) = current {
            let next = self.node(idx).next;
            let hash = hasher.hash_one(&self.node(idx).data);
            let duplicate = seen
                .find(hash, |&kept| self.node(kept).data == self.node(idx).data)
                .is_some();

            if duplicate {
                // The head is always a first occurrence, so `prev` is set here.
                if let Some(prev) = prev {
                    self.node_mut(prev).next = next;
                }
                self.release(idx);
                removed += 1;
            } else {
                seen.insert_unique(hash, idx, |&kept| hasher.hash_one(&self.node(kept).data));
                prev = Some(idx);
            }
            current = next;
        }

        self.tail = prev;
        tracing::debug!(removed, len = self.len, "removed duplicates");
        Ok(removed)
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Display> LinkedList<T> {
    /// Print the list as a table to standard output.
    ///
    /// # Errors
    /// Returns [`ListError::EmptyList`] if the list has no head.
    pub fn display(&self) -> Result<(), ListError> {
        self.check_empty()?;
        std::print!("{self}");
        Ok(())
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = match self.display_rows() {
            Ok(rows) => rows,
            Err(_) => return Ok(()),
        };
        super::display::write_table(f, &rows)
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
