//! Mutex-Guarded Linked Deque
//!
//! This module implements [`Deque`], a double-ended queue stored as a doubly
//! linked list of arena nodes behind a single mutex.
//!
//! ## Design
//!
//! All mutable state lives in one `Chain`: the node arena, the `head` and
//! `tail` links and the length. Every public operation locks the chain once,
//! works on it, and releases the guard on every exit path. Work that happens
//! while the lock is already held (eviction inside `append`, raw appends
//! while copying) calls `Chain` methods directly and never locks again; the
//! mutex is not reentrant.
//!
//! Capacity never changes after construction, so it is kept outside the lock.
//!
//! ```text
//!  head                                       tail
//!   |                                           |
//!   v                                           v
//! [ a ] <--prev-- [ b ] <--prev-- [ c ] <--prev-- [ d ]
//!       --next-->       --next-->       --next-->
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `append` / `append_left` | O(1), including eviction |
//! | `try_pop` / `try_pop_left` | O(1) |
//! | `try_peek(i)` | O(min(i, len - 1 - i)) |
//! | `count` | O(n) |
//! | `rotate(n)` | O(min(k, len - k)) where k = n mod len |
//! | `clear` | O(n) drop of the arena, no relinking |
//!
//! ## Iteration and Locking
//!
//! [`Deque::values`] and [`Deque::all`] return iterators that own the mutex
//! guard. The lock is taken when the iterator is created and released exactly
//! once, when the iterator is dropped, whether it ran to the end or was
//! abandoned early. Other threads block on the deque meanwhile, and the
//! iterating thread must not call back into the same deque until the
//! iterator is gone.

use super::arena::{Arena, Node, NodeId};
use super::capacity::Capacity;
use crate::metrics::{AtomicMetrics, DequeMetrics, MetricsCollector};
use crate::sync::{Mutex, MutexGuard};
use crate::{CapacityError, PeekError, PopError};
use core::fmt;
use core::iter::FusedIterator;
use core::sync::atomic::{AtomicBool, Ordering};

/// The lock-protected state of a [`Deque`]
///
/// Methods here assume the caller holds the deque's lock (or owns the chain
/// outright, as while building a new deque).
pub(crate) struct Chain<T> {
    arena: Arena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    capacity: Capacity,
}

impl<T> Chain<T> {
    fn new(capacity: Capacity) -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
            capacity,
        }
    }

    fn with_arena_capacity(capacity: Capacity, nodes: usize) -> Self {
        Self {
            arena: Arena::with_capacity(nodes),
            ..Self::new(capacity)
        }
    }

    /// Link `value` as the new tail, evicting the head if the bound is exceeded
    fn push_back(&mut self, value: T) -> Option<T> {
        let id = self.arena.insert(Node::new(value, self.tail, None));
        match self.tail {
            Some(tail) => self.arena[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;

        if self.capacity.is_exceeded_by(self.len) {
            self.pop_front()
        } else {
            None
        }
    }

    /// Link `value` as the new head, evicting the tail if the bound is exceeded
    fn push_front(&mut self, value: T) -> Option<T> {
        let id = self.arena.insert(Node::new(value, None, self.head));
        match self.head {
            Some(head) => self.arena[head].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;

        if self.capacity.is_exceeded_by(self.len) {
            self.pop_back()
        } else {
            None
        }
    }

    fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let node = self.arena.remove(tail);
        match node.prev {
            Some(prev) => self.arena[prev].next = None,
            None => self.head = None,
        }
        self.tail = node.prev;
        self.len -= 1;
        Some(node.value)
    }

    fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.arena.remove(head);
        match node.next {
            Some(next) => self.arena[next].prev = None,
            None => self.tail = None,
        }
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Element at `index`, walking from whichever end is closer
    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let id = if index < self.len / 2 {
            let mut id = self.head?;
            for _ in 0..index {
                id = self.arena[id].next?;
            }
            id
        } else {
            let mut id = self.tail?;
            for _ in 0..(self.len - 1 - index) {
                id = self.arena[id].prev?;
            }
            id
        };

        Some(&self.arena[id].value)
    }

    fn iter(&self) -> ChainIter<'_, T> {
        ChainIter {
            arena: &self.arena,
            cursor: self.head,
        }
    }

    fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Move the tail to the front. Requires `len >= 2`.
    fn rotate_right_once(&mut self) {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return;
        };
        let new_tail = self.arena[tail].prev;

        self.arena[tail].prev = None;
        self.arena[tail].next = Some(head);
        self.arena[head].prev = Some(tail);
        if let Some(new_tail) = new_tail {
            self.arena[new_tail].next = None;
        }

        self.head = Some(tail);
        self.tail = new_tail;
    }

    /// Move the head to the back. Requires `len >= 2`.
    fn rotate_left_once(&mut self) {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return;
        };
        let new_head = self.arena[head].next;

        self.arena[head].next = None;
        self.arena[head].prev = Some(tail);
        self.arena[tail].next = Some(head);
        if let Some(new_head) = new_head {
            self.arena[new_head].prev = None;
        }

        self.head = new_head;
        self.tail = Some(head);
    }

    /// Rotate right by `n` (left when negative) and return the single steps taken
    ///
    /// `n` is reduced modulo the length and then performed in whichever
    /// direction needs fewer steps; the resulting order is the same as
    /// stepping `|n|` times.
    fn rotate(&mut self, n: isize) -> usize {
        if self.len < 2 {
            return 0;
        }

        let steps = n.unsigned_abs() % self.len;
        if steps == 0 {
            return 0;
        }

        let right = if n > 0 { steps } else { self.len - steps };
        if right <= self.len / 2 {
            for _ in 0..right {
                self.rotate_right_once();
            }
            right
        } else {
            let left = self.len - right;
            for _ in 0..left {
                self.rotate_left_once();
            }
            left
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing walk from head to tail over a chain the caller has locked
struct ChainIter<'a, T> {
    arena: &'a Arena<T>,
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.arena[self.cursor?];
        self.cursor = node.next;
        Some(&node.value)
    }
}

/// A thread-safe double-ended queue backed by a doubly linked list
///
/// The deque is either unbounded or bounded. A bounded deque never holds more
/// than its capacity: inserting into a full deque evicts one element from the
/// opposite end and hands it back to the caller.
///
/// # Type Parameters
///
/// * `T` - The type of elements stored in the deque
///
/// # Examples
///
/// ```rust
/// use linkdeque::Deque;
///
/// let deque = Deque::bounded(3);
/// deque.append(1);
/// deque.append(2);
/// deque.append_left(0);
///
/// // Full: appending on the right evicts from the left
/// assert_eq!(deque.append(3), Some(0));
/// assert_eq!(deque.values().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// deque.rotate(1);
/// assert_eq!(deque.peek(0), 3);
/// ```
///
/// # Thread Safety
///
/// `Deque<T>` is `Send + Sync` when `T: Send`. Share it across threads with
/// an `Arc`; every operation takes the internal lock for its whole duration.
pub struct Deque<T> {
    chain: Mutex<Chain<T>>,

    // Immutable after construction, read without locking
    capacity: Capacity,

    metrics: AtomicMetrics,
    metrics_enabled: AtomicBool,
}

impl<T> Deque<T> {
    /// Create an empty deque with the given capacity
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkdeque::{Capacity, Deque};
    ///
    /// let deque: Deque<u8> = Deque::new(Capacity::Bounded(16));
    /// assert_eq!(deque.capacity(), Capacity::Bounded(16));
    /// assert!(deque.is_empty());
    /// ```
    pub fn new(capacity: Capacity) -> Self {
        log::debug!("creating deque with capacity {}", capacity);
        Self::from_chain(Chain::new(capacity))
    }

    /// Create an empty deque holding at most `limit` elements
    ///
    /// A limit of zero is allowed: every insertion is evicted immediately and
    /// the deque stays empty.
    pub fn bounded(limit: usize) -> Self {
        Self::new(Capacity::Bounded(limit))
    }

    /// Create an empty deque with no capacity limit
    pub fn unbounded() -> Self {
        Self::new(Capacity::Unbounded)
    }

    /// Create an empty deque from a signed capacity where `-1` means unbounded
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::Negative`] for any other negative value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkdeque::{CapacityError, Deque};
    ///
    /// assert!(Deque::<i32>::try_from_signed(-1).unwrap().is_unbounded());
    /// assert_eq!(
    ///     Deque::<i32>::try_from_signed(-3).unwrap_err(),
    ///     CapacityError::Negative(-3)
    /// );
    /// ```
    pub fn try_from_signed(raw: i64) -> Result<Self, CapacityError> {
        Capacity::from_signed(raw).map(Self::new)
    }

    /// Build a deque by appending every element of `iter` in order
    ///
    /// When the sequence is longer than a bounded capacity, the earliest
    /// elements are evicted as insertion proceeds and only the last
    /// `capacity` survive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkdeque::{Capacity, Deque};
    ///
    /// let deque = Deque::from_iter_with_capacity(0..10, Capacity::Bounded(3));
    /// assert_eq!(deque.values().collect::<Vec<_>>(), vec![7, 8, 9]);
    /// ```
    pub fn from_iter_with_capacity<I>(iter: I, capacity: Capacity) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let deque = Self::new(capacity);
        {
            let mut chain = deque.chain.lock();
            for value in iter {
                let evicted = chain.push_back(value);
                deque.metrics.record_append(evicted.is_some(), chain.len);
            }
        }
        deque
    }

    fn from_chain(chain: Chain<T>) -> Self {
        let capacity = chain.capacity;
        Self {
            chain: Mutex::new(chain),
            capacity,
            metrics: AtomicMetrics::default(),
            metrics_enabled: AtomicBool::new(true),
        }
    }

    #[inline]
    fn recorder(&self) -> Option<&AtomicMetrics> {
        if self.metrics_enabled.load(Ordering::Relaxed) {
            Some(&self.metrics)
        } else {
            None
        }
    }

    /// Current number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.lock().len
    }

    /// The capacity this deque was created with
    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Check if the deque has no capacity limit
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.capacity.is_unbounded()
    }

    /// Check if the deque is bounded and holds as many elements as its capacity
    ///
    /// Never true for an unbounded deque.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity.is_reached_by(self.len())
    }

    /// Check if the deque is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an element to the right end
    ///
    /// If the deque is bounded and this insertion takes it over capacity, one
    /// element is evicted from the left end and returned. Insertion and
    /// eviction happen under one lock acquisition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkdeque::Deque;
    ///
    /// let deque = Deque::bounded(2);
    /// assert_eq!(deque.append('a'), None);
    /// assert_eq!(deque.append('b'), None);
    /// assert_eq!(deque.append('c'), Some('a'));
    /// ```
    pub fn append(&self, value: T) -> Option<T> {
        let (evicted, len) = {
            let mut chain = self.chain.lock();
            let evicted = chain.push_back(value);
            (evicted, chain.len)
        };

        if let Some(metrics) = self.recorder() {
            metrics.record_append(evicted.is_some(), len);
        }
        if evicted.is_some() {
            log::trace!("append evicted from the left end (capacity {})", self.capacity);
        }
        evicted
    }

    /// Append an element to the left end
    ///
    /// If the deque is bounded and this insertion takes it over capacity, one
    /// element is evicted from the right end and returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkdeque::Deque;
    ///
    /// let deque = Deque::bounded(2);
    /// deque.append_left(1);
    /// deque.append_left(2);
    /// assert_eq!(deque.append_left(3), Some(1));
    /// assert_eq!(deque.peek(0), 3);
    /// ```
    pub fn append_left(&self, value: T) -> Option<T> {
        let (evicted, len) = {
            let mut chain = self.chain.lock();
            let evicted = chain.push_front(value);
            (evicted, chain.len)
        };

        if let Some(metrics) = self.recorder() {
            metrics.record_append(evicted.is_some(), len);
        }
        if evicted.is_some() {
            log::trace!("append_left evicted from the right end (capacity {})", self.capacity);
        }
        evicted
    }

    /// Remove and return the element at the right end
    ///
    /// # Errors
    ///
    /// Returns [`PopError`] if the deque is empty; the deque is left unchanged.
    pub fn try_pop(&self) -> Result<T, PopError> {
        let popped = self.chain.lock().pop_back();
        if let Some(metrics) = self.recorder() {
            metrics.record_pop(popped.is_some());
        }
        popped.ok_or(PopError)
    }

    /// Remove and return the element at the left end
    ///
    /// # Errors
    ///
    /// Returns [`PopError`] if the deque is empty; the deque is left unchanged.
    pub fn try_pop_left(&self) -> Result<T, PopError> {
        let popped = self.chain.lock().pop_front();
        if let Some(metrics) = self.recorder() {
            metrics.record_pop(popped.is_some());
        }
        popped.ok_or(PopError)
    }

    /// Remove every element
    ///
    /// The node storage is released in one step; capacity is unchanged.
    pub fn clear(&self) {
        let mut chain = self.chain.lock();
        let dropped = chain.len;
        chain.clear();
        drop(chain);
        log::debug!("cleared {} elements from deque", dropped);
    }

    /// Count the elements equal to `value`
    ///
    /// Scans the whole deque under one lock acquisition.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.chain.lock().iter().filter(|item| *item == value).count()
    }

    /// Rotate the deque `n` steps to the right, or `-n` steps to the left when
    /// `n` is negative
    ///
    /// One step to the right moves the tail element to the head. Rotating by
    /// any multiple of the length leaves the order unchanged, and deques with
    /// fewer than two elements are never affected. The whole rotation happens
    /// under one lock acquisition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkdeque::{Capacity, Deque};
    ///
    /// let deque = Deque::from_iter_with_capacity(0..5, Capacity::Unbounded);
    /// deque.rotate(2);
    /// assert_eq!(deque.values().collect::<Vec<_>>(), vec![3, 4, 0, 1, 2]);
    /// deque.rotate(-3);
    /// assert_eq!(deque.values().collect::<Vec<_>>(), vec![1, 2, 3, 4, 0]);
    /// ```
    pub fn rotate(&self, n: isize) {
        let steps = self.chain.lock().rotate(n);
        if steps > 0 {
            if let Some(metrics) = self.recorder() {
                metrics.record_rotation();
            }
            log::trace!("rotated deque by {} using {} relinks", n, steps);
        }
    }
}

impl<T: Clone> Deque<T> {
    /// Return a copy of the element at `index`, counted from the left end
    ///
    /// Walks from the head when `index` is in the first half, otherwise from
    /// the tail, so both ends are O(1).
    ///
    /// # Errors
    ///
    /// Returns [`PeekError`] carrying `index` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkdeque::{Deque, PeekError};
    ///
    /// let deque: Deque<_> = ["x", "y", "z"].into_iter().collect();
    /// assert_eq!(deque.try_peek(2), Ok("z"));
    /// assert_eq!(deque.try_peek(3), Err(PeekError { index: 3 }));
    /// ```
    pub fn try_peek(&self, index: usize) -> Result<T, PeekError> {
        let value = self.chain.lock().get(index).cloned();
        if let Some(metrics) = self.recorder() {
            metrics.record_peek(value.is_some());
        }
        value.ok_or(PeekError { index })
    }

    /// Return a copy of the element at `index`, counted from the left end
    ///
    /// Use this only where `index` is already known to be in bounds; otherwise
    /// prefer [`Deque::try_peek`].
    ///
    /// # Panics
    ///
    /// Panics with the [`PeekError`] message if `index >= len()`.
    ///
    /// ```rust,should_panic
    /// use linkdeque::Deque;
    ///
    /// let deque: Deque<i32> = Deque::unbounded();
    /// deque.peek(0); // panics: index 0 out of bounds
    /// ```
    #[track_caller]
    pub fn peek(&self, index: usize) -> T {
        match self.try_peek(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create an independent deque with the same capacity and elements
    ///
    /// The source stays locked while its elements are cloned into a fresh
    /// chain. The new deque starts with empty metrics.
    pub fn copy(&self) -> Self {
        let chain = {
            let source = self.chain.lock();
            let mut chain = Chain::with_arena_capacity(self.capacity, source.len);
            for value in source.iter() {
                // Source never exceeds the shared capacity, so nothing is evicted
                chain.push_back(value.clone());
            }
            chain
        };
        log::debug!("copied deque of {} elements", chain.len);
        Self::from_chain(chain)
    }

    /// Iterate over copies of the elements from left to right
    ///
    /// The deque stays locked until the returned iterator is dropped, so the
    /// sequence is a consistent snapshot. Other threads touching the deque
    /// block in the meantime; calling another method on the same deque from
    /// the iterating thread while the iterator is alive deadlocks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkdeque::Deque;
    ///
    /// let deque: Deque<_> = (1..=4).collect();
    /// let evens: Vec<_> = deque.values().filter(|v| v % 2 == 0).collect();
    /// assert_eq!(evens, vec![2, 4]);
    ///
    /// // The lock is released once the iterator is gone
    /// deque.append(5);
    /// ```
    pub fn values(&self) -> Values<'_, T> {
        let chain = self.chain.lock();
        Values {
            cursor: chain.head,
            remaining: chain.len,
            chain,
        }
    }

    /// Like [`Deque::values`], paired with each element's zero-based position
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkdeque::Deque;
    ///
    /// let deque: Deque<_> = "abc".chars().collect();
    /// let pairs: Vec<_> = deque.all().collect();
    /// assert_eq!(pairs, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    /// ```
    pub fn all(&self) -> All<'_, T> {
        All {
            values: self.values(),
            index: 0,
        }
    }
}

#[cfg(test)]
impl<T> Chain<T> {
    /// Panic unless the links, length and capacity agree
    pub(crate) fn assert_invariants(&self) {
        match self.len {
            0 => {
                assert!(self.head.is_none(), "empty chain has a head");
                assert!(self.tail.is_none(), "empty chain has a tail");
            }
            1 => {
                assert!(self.head.is_some());
                assert_eq!(self.head, self.tail, "single node must be head and tail");
            }
            _ => assert_ne!(self.head, self.tail),
        }

        let mut forward = Vec::with_capacity(self.len);
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            assert!(forward.len() < self.len, "forward walk longer than len");
            assert_eq!(self.arena[id].prev, prev, "broken prev link");
            forward.push(id);
            prev = Some(id);
            cursor = self.arena[id].next;
        }
        assert_eq!(forward.len(), self.len);
        assert_eq!(prev, self.tail);

        let mut backward = Vec::with_capacity(self.len);
        let mut cursor = self.tail;
        while let Some(id) = cursor {
            assert!(backward.len() < self.len, "backward walk longer than len");
            backward.push(id);
            cursor = self.arena[id].prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);

        assert_eq!(self.arena.len(), self.len, "arena holds unlinked nodes");
        if let Some(limit) = self.capacity.limit() {
            assert!(self.len <= limit, "len {} over capacity {}", self.len, limit);
        }
    }
}

#[cfg(test)]
impl<T> Deque<T> {
    pub(crate) fn assert_invariants(&self) {
        self.chain.lock().assert_invariants();
    }

    pub(crate) fn ends_absent(&self) -> bool {
        let chain = self.chain.lock();
        chain.head.is_none() && chain.tail.is_none()
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.chain.lock().arena.slot_count()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    /// Collect into an unbounded deque
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_capacity(iter, Capacity::Unbounded)
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.chain.lock();
        f.debug_struct("Deque")
            .field("capacity", &self.capacity)
            .field("len", &chain.len)
            .field("values", &*chain)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    /// Renders as `Deque{capacity: 3, chain: [a <-> b <-> c]}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.chain.lock();
        write!(f, "Deque{{capacity: {}, chain: [", self.capacity)?;
        for (i, value) in chain.iter().enumerate() {
            if i > 0 {
                f.write_str(" <-> ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]}")
    }
}

impl<T> MetricsCollector for Deque<T> {
    fn metrics(&self) -> DequeMetrics {
        self.metrics.snapshot()
    }

    fn reset_metrics(&self) {
        self.metrics.reset(self.len());
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.metrics_enabled.store(enabled, Ordering::Relaxed);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics_enabled.load(Ordering::Relaxed)
    }
}

/// Iterator over copies of a deque's elements, holding the deque's lock
///
/// Created by [`Deque::values`]. The lock is released when this is dropped.
pub struct Values<'a, T> {
    chain: MutexGuard<'a, Chain<T>>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T: Clone> Iterator for Values<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let id = self.cursor?;
        let node = &self.chain.arena[id];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(node.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Clone> ExactSizeIterator for Values<'a, T> {}

impl<'a, T: Clone> FusedIterator for Values<'a, T> {}

impl<'a, T> fmt::Debug for Values<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Iterator over `(index, value)` pairs, holding the deque's lock
///
/// Created by [`Deque::all`].
pub struct All<'a, T> {
    values: Values<'a, T>,
    index: usize,
}

impl<'a, T: Clone> Iterator for All<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<(usize, T)> {
        let value = self.values.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<'a, T: Clone> ExactSizeIterator for All<'a, T> {}

impl<'a, T: Clone> FusedIterator for All<'a, T> {}

impl<'a, T> fmt::Debug for All<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All")
            .field("index", &self.index)
            .field("remaining", &self.values.remaining)
            .finish()
    }
}
