/*!
# Vertex Identity

Every graph is parameterized by a three-way comparator over its vertex data. The comparator
decides vertex identity (`compare(a, b) == Equal`), the order of the vertex chain in the list
backend and the order of every adjacency list.

Closures of the form `Fn(&T, &T) -> Ordering` are comparators, and [`NaturalOrder`] uses
`T: Ord`.

```
use std::cmp::Ordering;
use adjgraphs::compare::*;

let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
assert_eq!(by_len.compare(&"ab", &"xy"), Ordering::Equal);
assert_eq!(NaturalOrder.compare(&"ab", &"xy"), Ordering::Less);
assert!(by_key(|s: &&str| s.len()).equal(&"ab", &"xy"));
```
*/

use std::cmp::Ordering;

/// A total-order three-way comparison over `T`
pub trait Compare<T: ?Sized> {
    /// Returns how `a` relates to `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns *true* if `a` and `b` denote the same vertex
    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Comparator delegating to `T: Ord`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T> Compare<T> for NaturalOrder
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Builds a comparator that orders vertices by an extracted key
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K,
    K: Ord,
{
    move |a, b| key(a).cmp(&key(b))
}
