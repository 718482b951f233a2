//! A doubly-linked list addressed by stable node handles.
//!
//! Nodes live in a generational arena and link to each other by key, so
//! removing a node invalidates every retained copy of its handle instead
//! of leaving it dangling. Handles returned by [`LinkedList::push_front`]
//! and [`LinkedList::push_back`] can later be passed to
//! [`LinkedList::move_to_front`], [`LinkedList::move_to_back`] and
//! [`LinkedList::remove`] without re-searching, which is the access
//! pattern an LRU cache needs.
//!
//! A handle is only meaningful for the list that issued it; passing a
//! handle from one list into another is not detected (same discipline as
//! raw `slotmap` keys).

use slotmap::{new_key_type, Key, SlotMap};

new_key_type! {
    /// Stable handle to a node in a [`LinkedList`].
    pub struct NodeId;
}

/// Errors returned by the fallible list operations.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The list has no elements to remove.
    EmptyList,
    /// The handle does not refer to a live node of this list.
    NodeNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyList => write!(f, "list is empty"),
            Error::NodeNotFound => write!(f, "node not found in list"),
        }
    }
}

impl std::error::Error for Error {}

/// A list node. `prev`/`next` are arena keys; the null key marks a
/// boundary.
struct Node<T> {
    value: T,
    prev: NodeId,
    next: NodeId,
}

/// A doubly-linked list over a generational node arena.
pub struct LinkedList<T> {
    nodes: SlotMap<NodeId, Node<T>>,
    head: NodeId,
    tail: NodeId,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: NodeId::null(),
            tail: NodeId::null(),
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handle of the first node, if any.
    pub fn head(&self) -> Option<NodeId> {
        if self.head.is_null() {
            None
        } else {
            Some(self.head)
        }
    }

    /// Handle of the last node, if any.
    pub fn tail(&self) -> Option<NodeId> {
        if self.tail.is_null() {
            None
        } else {
            Some(self.tail)
        }
    }

    /// Returns a reference to the front value.
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head).map(|node| &node.value)
    }

    /// Returns a reference to the back value.
    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.tail).map(|node| &node.value)
    }

    /// Returns a reference to the value of a live node.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value of a live node.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Returns true if the handle refers to a live node of this list.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Inserts a value at the front of the list and returns its handle.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = self.nodes.insert(Node {
            value,
            prev: NodeId::null(),
            next: self.head,
        });
        if let Some(old_head) = self.nodes.get_mut(self.head) {
            old_head.prev = id;
        } else {
            self.tail = id;
        }
        self.head = id;
        id
    }

    /// Inserts a value at the back of the list and returns its handle.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let id = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: NodeId::null(),
        });
        if let Some(old_tail) = self.nodes.get_mut(self.tail) {
            old_tail.next = id;
        } else {
            self.head = id;
        }
        self.tail = id;
        id
    }

    /// Removes the front node and returns its value.
    ///
    /// Fails with [`Error::EmptyList`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, Error> {
        let id = self.head;
        self.unlink(id).ok_or(Error::EmptyList)
    }

    /// Removes the back node and returns its value.
    ///
    /// Fails with [`Error::EmptyList`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T, Error> {
        let id = self.tail;
        self.unlink(id).ok_or(Error::EmptyList)
    }

    /// Removes the given node and returns its value, closing the gap
    /// around it. All retained copies of the handle become invalid.
    ///
    /// Fails with [`Error::NodeNotFound`] if the handle is not live; the
    /// list is left unchanged in that case.
    pub fn remove(&mut self, id: NodeId) -> Result<T, Error> {
        self.unlink(id).ok_or(Error::NodeNotFound)
    }

    /// Relocates the given node to the front of the list. The handle
    /// stays valid and the length does not change. Relocating the head
    /// is a no-op.
    ///
    /// Fails with [`Error::NodeNotFound`] if the handle is not live; the
    /// list is left unchanged in that case.
    pub fn move_to_front(&mut self, id: NodeId) -> Result<(), Error> {
        if !self.nodes.contains_key(id) {
            return Err(Error::NodeNotFound);
        }
        if self.head == id {
            return Ok(());
        }

        let (prev, next) = {
            let node = &self.nodes[id];
            (node.prev, node.next)
        };

        // Not the head, so a predecessor exists and takes over `next`.
        self.nodes[prev].next = next;
        if let Some(next_node) = self.nodes.get_mut(next) {
            next_node.prev = prev;
        } else {
            self.tail = prev;
        }

        let old_head = self.head;
        self.nodes[old_head].prev = id;
        let node = &mut self.nodes[id];
        node.prev = NodeId::null();
        node.next = old_head;
        self.head = id;
        Ok(())
    }

    /// Relocates the given node to the back of the list. The handle
    /// stays valid and the length does not change. Relocating the tail
    /// is a no-op.
    ///
    /// Fails with [`Error::NodeNotFound`] if the handle is not live; the
    /// list is left unchanged in that case.
    pub fn move_to_back(&mut self, id: NodeId) -> Result<(), Error> {
        if !self.nodes.contains_key(id) {
            return Err(Error::NodeNotFound);
        }
        if self.tail == id {
            return Ok(());
        }

        let (prev, next) = {
            let node = &self.nodes[id];
            (node.prev, node.next)
        };

        // Not the tail, so a successor exists and takes over `prev`.
        self.nodes[next].prev = prev;
        if let Some(prev_node) = self.nodes.get_mut(prev) {
            prev_node.next = next;
        } else {
            self.head = next;
        }

        let old_tail = self.tail;
        self.nodes[old_tail].next = id;
        let node = &mut self.nodes[id];
        node.next = NodeId::null();
        node.prev = old_tail;
        self.tail = id;
        Ok(())
    }

    /// Returns a reference to the largest value in the list, or `None`
    /// if the list is empty. Ties resolve to the value closest to the
    /// front.
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        let mut best: Option<&T> = None;
        let mut cursor = self.head;
        while let Some(node) = self.nodes.get(cursor) {
            if best.map_or(true, |b| node.value > *b) {
                best = Some(&node.value);
            }
            cursor = node.next;
        }
        best
    }

    /// Removes all nodes. Every previously issued handle becomes
    /// invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NodeId::null();
        self.tail = NodeId::null();
    }

    /// Removes a node from the arena and patches its neighbors, falling
    /// back to `head`/`tail` when a side was the boundary. Returns
    /// `None` (without mutating) if the handle is not live.
    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let node = self.nodes.remove(id)?;
        if let Some(prev_node) = self.nodes.get_mut(node.prev) {
            prev_node.next = node.next;
        } else {
            self.head = node.next;
        }
        if let Some(next_node) = self.nodes.get_mut(node.next) {
            next_node.prev = node.prev;
        } else {
            self.tail = node.prev;
        }
        Some(node.value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for LinkedList<T> {
    /// Creates a single-node list wrapping the value. The node's handle
    /// is recoverable via [`LinkedList::head`].
    fn from(value: T) -> Self {
        let mut list = Self::new();
        list.push_front(value);
        list
    }
}
