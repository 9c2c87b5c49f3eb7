use super::list::LinkedList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    At(usize),
    Done,
}

/// A manual traversal cursor returned by [`LinkedList::range`].
///
/// [`advance`](Range::advance) follows the `(finished, value)` protocol: the call
/// after the last value reports `finished` together with that last value again,
/// so callers must stop before treating it as new data:
///
/// ```
/// use mola_list::LinkedList;
///
/// let list = LinkedList::from_values(false, [10, 20, 30]).unwrap();
/// let mut range = list.range().unwrap();
/// let mut seen = vec![];
/// loop {
///     let (finished, value) = range.advance();
///     if finished {
///         break;
///     }
///     seen.extend(value.copied());
/// }
/// assert_eq!(seen, vec![10, 20, 30]);
/// ```
///
/// The cursor also implements [`Iterator`], which yields every value exactly once.
#[derive(Debug)]
pub struct Range<'a, T> {
    list: &'a LinkedList<T>,
    state: State,
}

impl<'a, T> Range<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            list,
            state: State::Start,
        }
    }

    /// Step the cursor, returning `(finished, value)`.
    ///
    /// Once exhausted the cursor keeps returning `(true, None)`; a new traversal
    /// needs a fresh [`LinkedList::range`] call.
    pub fn advance(&mut self) -> (bool, Option<&'a T>) {
        let list = self.list;
        match self.state {
            State::Start => match list.head_index() {
                Some(head) => {
                    self.state = State::At(head);
                    (false, Some(&list.node(head).data))
                }
                None => {
                    self.state = State::Done;
                    (true, None)
                }
            },
            State::At(idx) => {
                let node = list.node(idx);
                match node.next {
                    Some(next) => {
                        self.state = State::At(next);
                        (false, Some(&list.node(next).data))
                    }
                    None => {
                        self.state = State::Done;
                        (true, Some(&node.data))
                    }
                }
            }
            State::Done => (true, None),
        }
    }

    /// Whether the cursor has reported completion.
    pub fn is_finished(&self) -> bool {
        self.state == State::Done
    }
}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            state: self.state,
        }
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            (false, value) => value,
            (true, _) => None,
        }
    }
}

/// A borrowing iterator over a [`LinkedList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            list,
            current: list.head_index(),
            remaining: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        self.current.map(|idx| {
            let node = list.node(idx);
            self.current = node.next;
            self.remaining -= 1;
            &node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
