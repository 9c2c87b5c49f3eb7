use super::list::LinkedList;

/// Builder for [`LinkedList`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedListBuilder {
    typed: bool,
    capacity: usize,
}

impl LinkedListBuilder {
    /// Create a new builder for an untyped list with no preallocated slots.
    pub const fn new() -> Self {
        Self {
            typed: false,
            capacity: 0,
        }
    }

    /// Require every insert to match the kind of the head value.
    ///
    /// # Arguments
    /// * `typed` - Whether the list checks kinds on insert
    ///
    /// # Returns
    /// The builder instance for method chaining
    pub const fn typed(mut self, typed: bool) -> Self {
        self.typed = typed;
        self
    }

    /// Preallocate arena slots.
    ///
    /// # Arguments
    /// * `capacity` - The number of nodes to reserve room for
    ///
    /// # Returns
    /// The builder instance for method chaining
    ///
    /// # Panics
    /// [`build`](Self::build) panics if the reserved arena exceeds `isize::MAX` bytes
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the list with the specified parameters.
    ///
    /// # Panics
    /// Panics if the requested capacity overflows the arena allocation
    pub fn build<T>(self) -> LinkedList<T> {
        LinkedList::with_capacity(self.typed, self.capacity)
    }
}
