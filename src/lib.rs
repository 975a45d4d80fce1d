//! Linked containers built from heap-owned node cells: singly and doubly
//! linked lists, plus queue and stack adapters sharing the same cell
//! representation.

#![no_std]

extern crate alloc;

pub mod linked_list;
