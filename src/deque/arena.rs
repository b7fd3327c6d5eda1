//! Node storage for the linked deque.
//!
//! Nodes live in a `Vec` of slots and refer to each other by index, so the
//! list needs neither raw pointers nor shared ownership. Removing a node pushes
//! its slot onto an intrusive free list; the next insertion reuses it.

use core::mem;
use core::ops::{Index, IndexMut};

/// Stable handle to a node inside an [`Arena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// One element and its two links
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// Toward the head
    pub(crate) prev: Option<NodeId>,
    /// Toward the tail
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(value: T, prev: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self { value, prev, next }
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    // Most recently vacated slot
    free: Option<usize>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            occupied: 0,
        }
    }

    /// Store `node`, reusing a vacant slot when there is one
    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeId {
        self.occupied += 1;
        match self.free {
            Some(index) => {
                let slot = mem::replace(&mut self.slots[index], Slot::Occupied(node));
                self.free = match slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {}", index),
                };
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Take the node out of its slot and put the slot on the free list
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a live node.
    pub(crate) fn remove(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant { next_free: self.free };
        match mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id.0);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { next_free } => {
                // Put the slot back as it was before reporting the stale id
                self.slots[id.0] = Slot::Vacant { next_free };
                panic!("removing vacant node {:?}", id)
            }
        }
    }

    /// Drop every node at once
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    /// Number of slots ever allocated, live or vacant
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node {:?}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node {:?}", id),
        }
    }
}
