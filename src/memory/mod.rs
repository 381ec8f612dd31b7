//! Node storage for the linked list
//!
//! This module provides the backing store that stands in for `malloc`/`free`:
//! - [`arena`]: generational slot arena addressed by [`arena::NodeId`]
//!
//! # Links
//!
//! Nodes are owned by one [`arena::Arena`] and refer to each other through
//! copyable handles, so `prev`/`next` are plain `Option<NodeId>`.

pub mod arena;

pub use arena::{Arena, ArenaError, NodeId};
