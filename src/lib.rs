//! # Introduction
//!
//! clox-warmup is the warmup program of a bytecode-interpreter project. The
//! binary prints a greeting; the library holds the doubly-linked list of
//! strings that the warmup exercise builds.
//!
//! ## Layout
//!
//! 1. [`greeting`]: the fixed line the binary writes to stdout.
//! 2. [`list`]: [`list::DoubleLinkedList`] with insert, find, remove and
//!    traversal from either end, plus [`list::render`] for text dumps.
//! 3. [`memory`]: the generational [`memory::Arena`] that owns every node;
//!    links between nodes are [`memory::NodeId`] handles.
//! 4. [`logging`]: `tracing` subscriber setup (stderr, `RUST_LOG`).
//!
//! ## Example
//!
//! ```
//! use clox_warmup::list::DoubleLinkedList;
//!
//! let mut list = DoubleLinkedList::from_strs(["one", "three"]);
//! let one = list.find("one").unwrap();
//! list.insert_after(one, Some("two".to_string())).unwrap();
//!
//! assert_eq!(list.to_string(), r#"["one" <-> "two" <-> "three"]"#);
//! assert!(list.validate().is_ok());
//! ```

pub mod greeting;
pub mod list;
pub mod logging;
pub mod memory;
