use crate::journal::JournalError;
use std::sync::Mutex;

/// Fixed-capacity circular FIFO. When full, a push overwrites the oldest
/// element. Logical index 0 is always the oldest surviving element.
///
/// Every operation takes the per-instance lock, so a single buffer can be
/// shared between producers and consumers. Reads hand out clones; `range`
/// and `snapshot` copy the selected elements out under the lock, so the
/// returned sequences are point-in-time snapshots and never observe
/// concurrent pushes.
pub struct CircularBuffer<T> {
    inner: Mutex<Ring<T>>,
}

struct Ring<T> {
    slots: Box<[Option<T>]>,
    start: usize,
    len: usize,
}

impl<T> Ring<T> {
    fn physical(&self, index: usize) -> usize {
        (self.start + index) % self.slots.len()
    }
}

impl<T: Clone> CircularBuffer<T> {
    /// Creates a buffer holding at most `capacity` elements.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "circular buffer capacity must be positive");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        CircularBuffer {
            inner: Mutex::new(Ring {
                slots: slots.into_boxed_slice(),
                start: 0,
                len: 0,
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().unwrap().slots.len()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an element, evicting the oldest one when full. O(1).
    pub fn push(&self, item: T) {
        let mut ring = self.inner.lock().unwrap();
        let capacity = ring.slots.len();
        if ring.len < capacity {
            let slot = ring.physical(ring.len);
            ring.slots[slot] = Some(item);
            ring.len += 1;
        } else {
            // Full: the insertion point coincides with the oldest slot.
            let slot = ring.start;
            ring.slots[slot] = Some(item);
            ring.start = (ring.start + 1) % capacity;
        }
    }

    /// Returns the element at logical index `index`, oldest first.
    pub fn get(&self, index: usize) -> Result<T, JournalError> {
        let ring = self.inner.lock().unwrap();
        if index >= ring.len {
            return Err(JournalError::IndexOutOfRange {
                index,
                size: ring.len,
            });
        }
        let slot = ring.physical(index);
        Ok(ring.slots[slot].clone().unwrap())
    }

    /// Returns up to `count` elements starting at logical index `start`.
    /// An out-of-bounds `start` yields an empty sequence rather than an
    /// error; `count` is truncated at the end of the buffer.
    pub fn range(&self, start: usize, count: usize) -> Vec<T> {
        let ring = self.inner.lock().unwrap();
        if start >= ring.len {
            return Vec::new();
        }
        let end = (start + count).min(ring.len);
        (start..end)
            .map(|i| ring.slots[ring.physical(i)].clone().unwrap())
            .collect()
    }

    /// Copies out all elements oldest-to-newest.
    pub fn snapshot(&self) -> Vec<T> {
        let ring = self.inner.lock().unwrap();
        (0..ring.len)
            .map(|i| ring.slots[ring.physical(i)].clone().unwrap())
            .collect()
    }
}
