use core::fmt;

use crate::error::{Error, Result};
use crate::utils::fmt_sequence;

/// Fixed-capacity FIFO queue backed by an inline `heapless::Deque` ring buffer.
///
/// The queue never allocates. Once `N` elements are stored, [`enqueue`](Self::enqueue)
/// hands the rejected element back to the caller.
pub struct StaticArrayQueue<T, const N: usize> {
    buf: heapless::Deque<T, N>,
}

impl<T, const N: usize> StaticArrayQueue<T, N> {
    pub fn new() -> Self {
        Self {
            buf: heapless::Deque::new(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.buf.len() == N
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Appends `value` at the back, or returns it as `Err` when the queue is full.
    pub fn enqueue(&mut self, value: T) -> core::result::Result<(), T> {
        self.buf.push_back(value)
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.buf.pop_front().ok_or(Error::EmptyQueue)
    }

    pub fn peek(&self) -> Result<&T> {
        self.buf.front().ok_or(Error::EmptyQueue)
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Iterates from the front of the queue to the back, following the ring wrap-around.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.buf.iter()
    }
}

impl<T, const N: usize> Default for StaticArrayQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticArrayQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for StaticArrayQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_static_queue_basic() {
        let mut queue: StaticArrayQueue<i32, 5> = StaticArrayQueue::new();
        assert_eq!(queue.capacity(), 5);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.len(), 2);
        let rest: Vec<i32> = queue.iter().copied().collect();
        assert_eq!(rest, [2, 3]);
    }

    #[test]
    fn test_static_queue_full_rejects() {
        let mut queue: StaticArrayQueue<&str, 2> = StaticArrayQueue::new();
        assert_eq!(queue.enqueue("a"), Ok(()));
        assert_eq!(queue.enqueue("b"), Ok(()));
        assert!(queue.is_full());
        assert_eq!(queue.enqueue("c"), Err("c"));
        assert_eq!(queue.to_string(), "[a, b]");
    }

    #[test]
    fn test_static_queue_empty_errors() {
        let mut queue: StaticArrayQueue<u8, 4> = StaticArrayQueue::default();
        assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
        assert_eq!(queue.peek(), Err(Error::EmptyQueue));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_static_queue_wraps_around() {
        let mut queue: StaticArrayQueue<u32, 3> = StaticArrayQueue::new();
        for i in 0..3 {
            queue.enqueue(i).unwrap();
        }
        // Cycle through the ring several times so the head passes the buffer end.
        for i in 3..20 {
            assert_eq!(queue.dequeue(), Ok(i - 3));
            queue.enqueue(i).unwrap();
            assert!(queue.is_full());
        }
        assert_eq!(format!("{queue:?}"), "[17, 18, 19]");
        queue.clear();
        assert!(queue.is_empty());
        queue.enqueue(7).unwrap();
        assert_eq!(queue.peek(), Ok(&7));
    }

    #[test]
    fn test_static_queue_drops_elements() {
        let counter = Rc::new(RefCell::new(0));
        struct Dropper(Rc<RefCell<i32>>);
        impl Drop for Dropper {
            fn drop(&mut self) {
                *self.0.borrow_mut() += 1;
            }
        }

        {
            let mut queue: StaticArrayQueue<Dropper, 4> = StaticArrayQueue::new();
            for _ in 0..3 {
                assert!(queue.enqueue(Dropper(counter.clone())).is_ok());
            }
            drop(queue.dequeue());
            assert_eq!(*counter.borrow(), 1);
        }
        assert_eq!(*counter.borrow(), 3);
    }
}
