//! Doubly-linked list of optional strings
//!
//! This module provides the list and its parts:
//! - [`DoubleLinkedList`]: handle pair for the first and last node, plus the arena owning every node
//! - [`Node`]: one element with optional `prev`/`next` links and an optional payload
//! - [`errors`]: handle and invariant errors
//! - [`render`]: text dump of a list
//!
//! # Invariants
//!
//! Every public operation preserves these; [`DoubleLinkedList::validate`] checks them:
//! - `first` and `last` are both `None` iff the list is empty
//! - walking `next` from `first` reaches `last`, walking `prev` from `last` reaches `first`
//! - `first.prev` and `last.next` are `None`
//! - `a.next == b` iff `b.prev == a`
//! - the walk visits exactly `len()` nodes
//!
//! # Handles
//!
//! Operations address nodes by [`NodeId`]. Removing a node invalidates its handle
//! permanently; passing it again yields [`ListError::InvalidNode`] rather than
//! touching whatever node later reuses the slot.
//!
//! A handle is not tied to the list that issued it. Passing a handle from one
//! list to another is a caller bug: it is rejected only if no node with the
//! same slot and generation exists there.

pub mod errors;
mod node;
pub mod render;

pub use errors::{LinkDirection, ListError};
pub use node::Node;

use crate::memory::{Arena, NodeId};
use rustc_hash::FxHashSet;
use std::iter::FusedIterator;
use tracing::debug;

/// A doubly-linked list whose nodes live in an arena
#[derive(Debug, Clone, Default)]
pub struct DoubleLinkedList {
    nodes: Arena<Node>,
    first: Option<NodeId>,
    last: Option<NodeId>,
}

impl DoubleLinkedList {
    pub fn new() -> Self {
        DoubleLinkedList {
            nodes: Arena::new(),
            first: None,
            last: None,
        }
    }

    /// Create a list with room for `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        DoubleLinkedList {
            nodes: Arena::with_capacity(capacity),
            first: None,
            last: None,
        }
    }

    /// Build a list from borrowed strings, none of them NULL
    pub fn from_strs<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        items.into_iter().map(|s| Some(s.to_string())).collect()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.first
    }

    pub fn last(&self) -> Option<NodeId> {
        self.last
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Check whether a node with this handle's slot and generation is live
    ///
    /// Handles carry no list identity, so a handle issued by another list can
    /// match here.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Result<&Node, ListError> {
        Ok(self.nodes.get(id)?)
    }

    /// Payload of a node (`Ok(None)` for a NULL payload)
    pub fn data(&self, id: NodeId) -> Result<Option<&str>, ListError> {
        Ok(self.nodes.get(id)?.data())
    }

    /// Replace a node's payload, returning the old one
    pub fn set_data(
        &mut self,
        id: NodeId,
        data: Option<String>,
    ) -> Result<Option<String>, ListError> {
        let node = self.nodes.get_mut(id)?;
        Ok(std::mem::replace(&mut node.data, data))
    }

    /// Insert a node at the front
    pub fn push_front(&mut self, data: Option<String>) -> NodeId {
        let id = self.nodes.insert(Node::new(data));
        self.splice(id, None, self.first);
        debug!(node = %id, "pushed node to front");
        id
    }

    /// Insert a node at the back
    pub fn push_back(&mut self, data: Option<String>) -> NodeId {
        let id = self.nodes.insert(Node::new(data));
        self.splice(id, self.last, None);
        debug!(node = %id, "pushed node to back");
        id
    }

    /// Insert a node directly after `anchor`
    pub fn insert_after(
        &mut self,
        anchor: NodeId,
        data: Option<String>,
    ) -> Result<NodeId, ListError> {
        let next = self.nodes.get(anchor)?.next;
        let id = self.nodes.insert(Node::new(data));
        self.splice(id, Some(anchor), next);
        debug!(node = %id, anchor = %anchor, "inserted node after anchor");
        Ok(id)
    }

    /// Insert a node directly before `anchor`
    pub fn insert_before(
        &mut self,
        anchor: NodeId,
        data: Option<String>,
    ) -> Result<NodeId, ListError> {
        let prev = self.nodes.get(anchor)?.prev;
        let id = self.nodes.insert(Node::new(data));
        self.splice(id, prev, Some(anchor));
        debug!(node = %id, anchor = %anchor, "inserted node before anchor");
        Ok(id)
    }

    /// First node, scanning from the front, whose payload equals `needle`
    ///
    /// NULL payloads never match.
    pub fn find(&self, needle: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, data)| *data == Some(needle))
            .map(|(id, _)| id)
    }

    /// Like [`find`](Self::find), scanning from the back
    pub fn rfind(&self, needle: &str) -> Option<NodeId> {
        self.iter()
            .rev()
            .find(|(_, data)| *data == Some(needle))
            .map(|(id, _)| id)
    }

    /// Unlink and free a node, returning its payload
    pub fn remove(&mut self, id: NodeId) -> Result<Option<String>, ListError> {
        let node = self.nodes.remove(id)?;

        match node.prev {
            Some(prev) => self.linked_mut(prev).next = node.next,
            None => self.first = node.next,
        }
        match node.next {
            Some(next) => self.linked_mut(next).prev = node.prev,
            None => self.last = node.prev,
        }

        debug!(node = %id, remaining = self.len(), "removed node");
        Ok(node.data)
    }

    /// Remove the front node. The outer `None` means the list was empty.
    pub fn pop_front(&mut self) -> Option<Option<String>> {
        let id = self.first?;
        self.remove(id).ok()
    }

    /// Remove the back node. The outer `None` means the list was empty.
    pub fn pop_back(&mut self) -> Option<Option<String>> {
        let id = self.last?;
        self.remove(id).ok()
    }

    /// Free every node. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.first = None;
        self.last = None;
        debug!("cleared list");
    }

    /// Walk the links from either end
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.first,
            back: self.last,
            remaining: self.len(),
        }
    }

    /// Payloads in order, cloned
    pub fn to_vec(&self) -> Vec<Option<String>> {
        self.iter()
            .map(|(_, data)| data.map(str::to_string))
            .collect()
    }

    /// Check every structural invariant, reporting the first violation
    pub fn validate(&self) -> Result<(), ListError> {
        let (first, last) = match (self.first, self.last) {
            (None, None) => {
                return match self.len() {
                    0 => Ok(()),
                    expected => Err(ListError::LengthMismatch { expected, found: 0 }),
                };
            }
            (Some(first), Some(last)) => (first, last),
            (first, last) => return Err(ListError::EmptinessMismatch { first, last }),
        };

        if let Some(target) = self.nodes.get(first)?.prev {
            return Err(ListError::DanglingEnd {
                node: first,
                direction: LinkDirection::Prev,
                target,
            });
        }
        if let Some(target) = self.nodes.get(last)?.next {
            return Err(ListError::DanglingEnd {
                node: last,
                direction: LinkDirection::Next,
                target,
            });
        }

        let mut visited = FxHashSet::default();
        let mut prev: Option<NodeId> = None;
        let mut cursor = Some(first);

        while let Some(id) = cursor {
            if !visited.insert(id) {
                return Err(ListError::Cycle {
                    node: id,
                    direction: LinkDirection::Next,
                });
            }
            let node = self.nodes.get(id)?;
            if let Some(before) = prev {
                if node.prev != Some(before) {
                    return Err(ListError::BrokenLink {
                        node: before,
                        direction: LinkDirection::Next,
                        target: id,
                    });
                }
            }
            prev = Some(id);
            cursor = node.next;
        }

        if prev != Some(last) {
            return Err(ListError::EndNotReached {
                reached: prev.unwrap_or(first),
                direction: LinkDirection::Next,
            });
        }

        if visited.len() != self.len() {
            return Err(ListError::LengthMismatch {
                expected: self.len(),
                found: visited.len(),
            });
        }

        Ok(())
    }

    /// Link a freshly inserted node between `prev` and `next`
    fn splice(&mut self, id: NodeId, prev: Option<NodeId>, next: Option<NodeId>) {
        let node = self.linked_mut(id);
        node.prev = prev;
        node.next = next;

        match prev {
            Some(prev) => self.linked_mut(prev).next = Some(id),
            None => self.first = Some(id),
        }
        match next {
            Some(next) => self.linked_mut(next).prev = Some(id),
            None => self.last = Some(id),
        }
    }

    /// Node reached through a link; links only ever name live nodes
    fn linked(&self, id: NodeId) -> &Node {
        match self.nodes.get(id) {
            Ok(node) => node,
            Err(e) => unreachable!("list link names a dead node: {e}"),
        }
    }

    fn linked_mut(&mut self, id: NodeId) -> &mut Node {
        match self.nodes.get_mut(id) {
            Ok(node) => node,
            Err(e) => unreachable!("list link names a dead node: {e}"),
        }
    }
}

impl FromIterator<Option<String>> for DoubleLinkedList {
    fn from_iter<I: IntoIterator<Item = Option<String>>>(iter: I) -> Self {
        let mut list = DoubleLinkedList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Option<String>> for DoubleLinkedList {
    fn extend<I: IntoIterator<Item = Option<String>>>(&mut self, iter: I) {
        for data in iter {
            self.push_back(data);
        }
    }
}

impl<'a> IntoIterator for &'a DoubleLinkedList {
    type Item = (NodeId, Option<&'a str>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Double-ended iterator over `(handle, payload)` pairs in link order
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a DoubleLinkedList,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let node = self.list.linked(id);
        self.front = node.next;
        self.remaining -= 1;
        Some((id, node.data()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let node = self.list.linked(id);
        self.back = node.prev;
        self.remaining -= 1;
        Some((id, node.data()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
