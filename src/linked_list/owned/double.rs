use core::ptr::NonNull;

use alloc::boxed::Box;

use super::{
    iter::Iter,
    node::DoubleNode,
    traits::{Container, RemoveByValue},
};

/// A doubly linked list.
///
/// Each cell carries a back-reference to its predecessor, so a cell located
/// by the removal scan can be spliced out without re-walking the chain for
/// the cell before it.
#[derive(Debug)]
pub struct DoublyLinkedList<T> {
    pub(super) head: Option<Box<DoubleNode<T>>>,
    pub(super) tail: Option<NonNull<DoubleNode<T>>>,
    pub(super) count: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        DoublyLinkedList {
            head: None,
            tail: None,
            count: 0,
        }
    }

    /// Get an iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, DoubleNode<T>> {
        Iter::new(self.head.as_deref())
    }
}

impl<T> Container for DoublyLinkedList<T> {
    type Item = T;

    fn add(&mut self, value: T) {
        let mut node = Box::new(DoubleNode::new(value));
        node.prev = self.tail;
        let node_ptr = NonNull::from(&mut *node);
        match self.tail {
            // The tail cursor always points at the last cell of the owned
            // chain, and box contents do not move.
            Some(mut tail) => unsafe { tail.as_mut() }.next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node_ptr);
        self.count += 1;
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn count(&self) -> usize {
        self.count
    }
}

impl<T: PartialEq> RemoveByValue for DoublyLinkedList<T> {
    fn remove(&mut self, value: &T) {
        let mut cursor = self.head.as_deref_mut().map(NonNull::from);
        while let Some(mut current) = cursor {
            // The cursor always points into the owned chain.
            let node = unsafe { current.as_mut() };
            if node.data != *value {
                cursor = node.next.as_deref_mut().map(NonNull::from);
                continue;
            }

            // Exactly one branch fires per removal.
            match node.prev {
                // The match is the head: advance the ownership root.
                None => {
                    let removed = self.head.take();
                    self.head = removed.and_then(|mut node| node.next.take());
                    match self.head.as_deref_mut() {
                        Some(new_head) => new_head.prev = None,
                        None => self.tail = None,
                    }
                }
                // The match is the tail: retreat the cursor and let the
                // predecessor drop it.
                Some(mut prev) if node.next.is_none() => {
                    self.tail = Some(prev);
                    unsafe { prev.as_mut() }.next = None;
                }
                // The match is in the middle: splice the neighbors together.
                Some(mut prev) => {
                    let prev_ref = unsafe { prev.as_mut() };
                    let removed = prev_ref.next.take();
                    prev_ref.next = removed.and_then(|mut node| node.next.take());
                    if let Some(next) = prev_ref.next.as_deref_mut() {
                        next.prev = Some(prev);
                    }
                }
            }
            self.count -= 1;
            return;
        }
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink front to back so dropping a long chain does not recurse one
        // stack frame per cell. Back-references are never read here.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}
