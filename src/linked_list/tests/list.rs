extern crate std;

use alloc::{format, string::String, vec::Vec};
use std::vec;

use crate::linked_list::{
    builder::LinkedListBuilder,
    error::ListError,
    list::LinkedList,
    value::{Kinded, Value, ValueKind},
};

fn values<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_insert_into_empty_list() {
    for typed in [false, true] {
        let mut list = LinkedList::<Value>::new(typed);
        assert!(list.is_empty());
        assert_eq!(list.is_typed(), typed);

        list.insert(Value::from("first")).unwrap();
        assert!(!list.is_empty());
        assert_eq!(list.len(), 1);
        assert_eq!(list.head(), Some(&Value::from("first")));
        assert_eq!(values(&list), vec![Value::from("first")]);
    }
}

#[test]
fn test_typed_insert_rejects_other_kinds() {
    let mut list = LinkedList::<Value>::new(true);
    list.insert(Value::Int(1)).unwrap();
    list.insert(Value::Int(2)).unwrap();
    assert_eq!(list.kind(), Some(ValueKind::Int));

    let before = values(&list);
    for wrong in [
        Value::Float(1.0),
        Value::UInt(1),
        Value::from("1"),
        Value::Bool(true),
        Value::Unit,
    ] {
        let found = wrong.kind();
        assert_eq!(
            list.insert(wrong),
            Err(ListError::MismatchedTypes {
                found,
                expected: ValueKind::Int,
            })
        );
        assert_eq!(list.len(), 2);
        assert_eq!(values(&list), before);
    }

    // Matching kinds still go in after a rejection.
    list.insert(Value::Int(3)).unwrap();
    assert_eq!(values(&list), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_typed_kind_follows_head() {
    let mut list = LinkedList::<Value>::new(true);
    list.insert(Value::Int(1)).unwrap();
    list.insert(Value::Int(2)).unwrap();

    // Once the head is gone the list is re-anchored on the new head.
    list.remove_node(&Value::Int(1)).unwrap();
    list.remove_node(&Value::Int(2)).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.kind(), None);

    list.insert(Value::from("a")).unwrap();
    assert_eq!(list.kind(), Some(ValueKind::Str));
    assert!(list.insert(Value::Int(1)).is_err());
}

#[test]
fn test_untyped_insert_accepts_mixed_kinds() {
    let mut list = LinkedList::<Value>::new(false);
    let mixed = vec![
        Value::Int(-1),
        Value::UInt(1),
        Value::Float(0.5),
        Value::Bool(false),
        Value::Char('x'),
        Value::from("str"),
        Value::Unit,
    ];
    for value in mixed.iter().cloned() {
        list.insert(value).unwrap();
    }
    assert_eq!(list.kind(), None);
    assert_eq!(values(&list), mixed);
}

#[test]
fn test_len_and_order_match_inserts() {
    let mut list = LinkedList::new(true);
    for i in 0..100u32 {
        list.insert(i).unwrap();
        assert_eq!(list.len(), i as usize + 1);
    }
    assert_eq!(values(&list), (0..100).collect::<Vec<_>>());
    assert_eq!(list.iter().len(), 100);
}

#[test]
fn test_from_values_stops_at_first_error() {
    let list = LinkedList::from_values(true, [Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(list.len(), 2);

    let err = LinkedList::from_values(true, [Value::Int(1), Value::Bool(true), Value::Int(3)]);
    assert_eq!(
        err,
        Err(ListError::MismatchedTypes {
            found: ValueKind::Bool,
            expected: ValueKind::Int,
        })
    );

    let mut list = LinkedList::new(true);
    let result = list.try_extend([Value::Int(1), Value::Char('c'), Value::Int(3)]);
    assert!(result.is_err());
    assert_eq!(values(&list), vec![Value::Int(1)]);
}

#[test]
fn test_builder() {
    let mut list: LinkedList<String> = LinkedListBuilder::new().typed(true).with_capacity(16).build();
    assert!(list.is_typed());
    assert!(list.is_empty());
    list.insert(String::from("a")).unwrap();
    assert_eq!(list.len(), 1);

    let list: LinkedList<i32> = LinkedListBuilder::new().build();
    assert!(!list.is_typed());
    assert!(!LinkedList::<i32>::default().is_typed());
}

#[test]
fn test_slots_are_reused_in_order() {
    let mut list = LinkedList::from_values(false, [1, 2, 3, 4]).unwrap();
    list.remove_node(&2).unwrap();
    list.remove_node(&4).unwrap();
    list.insert(5).unwrap();
    list.insert(6).unwrap();
    list.insert(7).unwrap();
    assert_eq!(values(&list), vec![1, 3, 5, 6, 7]);
    assert_eq!(list.len(), 5);
}

#[test]
fn test_clear() {
    let mut list = LinkedList::from_values(true, [Value::Int(1), Value::Int(2)]).unwrap();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.iter().next(), None);

    list.insert(Value::Bool(true)).unwrap();
    assert_eq!(list.kind(), Some(ValueKind::Bool));
}

#[test]
fn test_contains_eq_and_debug() {
    let list = LinkedList::from_values(false, [1, 2, 3]).unwrap();
    assert!(list.contains(&2));
    assert!(!list.contains(&4));

    let other = LinkedList::from_values(true, [1, 2, 3]).unwrap();
    assert_eq!(list, other);
    let shorter = LinkedList::from_values(false, [1, 2]).unwrap();
    assert_ne!(list, shorter);

    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    let collected: Vec<_> = (&list).into_iter().copied().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_lists_are_eq() {
    fn same<T: Eq>(a: &T, b: &T) -> bool {
        a == b
    }

    let list = LinkedList::from_values(false, [Value::Int(1), Value::from("a")]).unwrap();
    let mut other = LinkedList::from_values(false, [Value::Int(1), Value::Int(2)]).unwrap();
    assert!(!same(&list, &other));

    other.remove_node(&Value::Int(2)).unwrap();
    other.insert(Value::from("a")).unwrap();
    assert!(same(&list, &other));
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_builder_capacity_overflow_panics() {
    let _list: LinkedList<u64> = LinkedListBuilder::new().with_capacity(usize::MAX).build();
}
