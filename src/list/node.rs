use crate::memory::NodeId;

/// One element of a doubly-linked list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) data: Option<String>, // NULL payload is None
}

impl Node {
    pub(crate) fn new(data: Option<String>) -> Self {
        Node {
            prev: None,
            next: None,
            data,
        }
    }

    /// Previous node, or None at the front
    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    /// Next node, or None at the back
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}
