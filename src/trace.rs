//! Fixed-capacity scroll buffer holding one axis' displayed history.
//!
//! A [`Trace`] passes through two states over its lifetime. While *filling*
//! (fewer points than capacity) a push appends, and the chart grows one point
//! per tick. Once the buffer is full it is *scrolling* for good: a push
//! overwrites the oldest slot and advances the head index, so the visible
//! window slides forward with every tick.
//!
//! A naive index-shifting buffer moves every element on each push;
//! the ring layout here (arena + head index) makes push O(1) while keeping
//! chronological iteration trivial.

/// Ring buffer of chart-space y values for one axis.
pub struct Trace {
    /// Backing arena; grows up to `capacity` during the filling phase.
    slots: Vec<f32>,
    /// Index of the oldest value once the buffer is scrolling. Always 0
    /// while filling.
    head: usize,
    /// Fixed upper bound on stored points (`window + 1` for a chart trace).
    capacity: usize,
}

impl Trace {
    /// Create an empty trace bounded to `capacity` points.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "trace capacity must be positive");
        Self {
            slots: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// Append a value, evicting the oldest once the buffer is full.
    pub fn push(&mut self, y: f32) {
        if self.slots.len() < self.capacity {
            self.slots.push(y);
        } else {
            self.slots[self.head] = y;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no points have been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True once the buffer has filled and every further push evicts the
    /// oldest point. The transition is permanent.
    pub fn is_scrolling(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Iterate stored values oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.slots.len()).map(move |i| self.slots[(self.head + i) % self.capacity])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
