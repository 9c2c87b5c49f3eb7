use core::fmt;

/// One line of the diagnostic table printed by
/// [`LinkedList::display`](super::list::LinkedList::display).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRow<'a, T> {
    /// 1-based position in traversal order.
    pub index: usize,
    pub value: &'a T,
    /// Arena slot of the successor, `None` for the last node.
    pub next: Option<usize>,
}

impl<T> DisplayRow<'_, T> {
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

impl<T: fmt::Display> fmt::Display for DisplayRow<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {:<13} ", self.index, self.value)?;
        match self.next {
            Some(next) => write!(f, "@{next}"),
            None => f.write_str("<nil>"),
        }
    }
}

pub(crate) fn write_table<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    rows: &[DisplayRow<'_, T>],
) -> fmt::Result {
    writeln!(f, "Node {:3} | Value {:5} | Next Address", "", "")?;
    for row in rows {
        writeln!(f, "{row}")?;
    }
    Ok(())
}
