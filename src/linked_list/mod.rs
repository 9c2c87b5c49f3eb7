//! A singly linked list with an optional run-time homogeneity check.
//!
//! Nodes are stored in an arena owned by the list and linked by index. A list
//! built in typed mode rejects inserts whose [`ValueKind`](value::ValueKind)
//! differs from the head value's kind; mixed-kind lists use [`Value`](value::Value).
//!
//! # Examples
//!
//! ```
//! use mola_list::{LinkedList, ListError, Value, ValueKind};
//!
//! let mut list = LinkedList::<Value>::new(true);
//! list.insert(Value::from(1)).unwrap();
//! list.insert(Value::from(2)).unwrap();
//! list.insert(Value::from(2)).unwrap();
//!
//! assert_eq!(
//!     list.insert(Value::from("three")),
//!     Err(ListError::MismatchedTypes {
//!         found: ValueKind::Str,
//!         expected: ValueKind::Int,
//!     })
//! );
//!
//! assert_eq!(list.remove_duplicates(), Ok(1));
//! let values: Vec<_> = list.iter().cloned().collect();
//! assert_eq!(values, vec![Value::Int(1), Value::Int(2)]);
//! ```

pub mod builder;
pub mod cursor;
pub mod display;
pub mod error;
pub mod list;
mod node;
pub mod value;

#[cfg(test)]
mod tests;
