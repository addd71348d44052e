use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
///
/// A `Sequencer` stores the "to be visited" vertices during a traversal.
/// The implementation determines the traversal order:
///
/// - [`Queue`] (`VecDeque`) -> FIFO -> **BFS**
/// - [`Stack`] (`Vec`) -> LIFO -> **DFS**
pub trait Sequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(item: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns a clone of the next item without removing it.
    fn peek(&self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;

    /// Returns *true* if the frontier is exhausted.
    fn is_exhausted(&self) -> bool {
        self.cardinality() == 0
    }
}

/// Last-in-first-out frontier
pub type Stack<T> = Vec<T>;

/// First-in-first-out frontier
pub type Queue<T> = VecDeque<T>;

impl<T> Sequencer<T> for VecDeque<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn peek(&self) -> Option<T> {
        self.front().cloned()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> Sequencer<T> for Vec<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn peek(&self) -> Option<T> {
        self.last().cloned()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<S: Sequencer<u32>>(mut s: S) -> Vec<u32> {
        s.push(2);
        s.push(3);
        assert_eq!(s.cardinality(), 3);
        let mut out = Vec::new();
        while let Some(x) = s.pop() {
            out.push(x);
        }
        assert!(s.is_exhausted());
        out
    }

    #[test]
    fn stack_is_lifo() {
        let s: Stack<u32> = Sequencer::init(1);
        assert_eq!(s.peek(), Some(1));
        assert_eq!(drain(s), vec![3, 2, 1]);
    }

    #[test]
    fn queue_is_fifo() {
        let q: Queue<u32> = Sequencer::init(1);
        assert_eq!(q.peek(), Some(1));
        assert_eq!(drain(q), vec![1, 2, 3]);
    }
}
