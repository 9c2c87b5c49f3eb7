#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod linked_list;

pub use linked_list::{
    builder::LinkedListBuilder,
    cursor::{Iter, Range},
    display::DisplayRow,
    error::ListError,
    list::LinkedList,
    value::{Kinded, Value, ValueKind},
};
