extern crate std;

use crate::linked_list::owned::{
    stack::Stack,
    traits::{Container, RemoveFront},
};

#[test]
fn test_stack_starts_empty() {
    let stack = Stack::<i32>::new();
    assert!(stack.is_empty());
    assert_eq!(stack.count(), 0);
    assert!(stack.peek().is_none());
}

#[test]
fn test_stack_add_makes_non_empty() {
    let mut stack = Stack::new();
    stack.add(1);
    assert!(!stack.is_empty());
    assert_eq!(stack.peek(), Some(&1));
}

#[test]
fn test_stack_lifo_order() {
    let mut stack = Stack::new();
    stack.add(1);
    stack.add(2);
    stack.add(3);

    assert_eq!(stack.peek(), Some(&3));
    stack.remove();
    assert_eq!(stack.peek(), Some(&2));
    stack.remove();
    assert_eq!(stack.peek(), Some(&1));
    stack.remove();
    assert!(stack.is_empty());
    assert!(stack.peek().is_none());
}

#[test]
fn test_stack_remove_from_empty() {
    let mut stack = Stack::<i32>::new();
    stack.remove();
    assert!(stack.is_empty());
    assert_eq!(stack.count(), 0);
}

#[test]
fn test_stack_single_element() {
    let mut stack = Stack::new();
    stack.add(42);
    assert_eq!(stack.peek(), Some(&42));
    assert_eq!(stack.count(), 1);

    stack.remove();
    assert!(stack.is_empty());
    assert!(stack.peek().is_none());
}

#[test]
fn test_stack_count_tracks_mutations() {
    let mut stack = Stack::new();
    for i in 0..5 {
        stack.add(i);
    }
    assert_eq!(stack.count(), 5);

    stack.remove();
    stack.remove();
    assert_eq!(stack.count(), 3);
    assert_eq!(stack.peek(), Some(&2));
}
