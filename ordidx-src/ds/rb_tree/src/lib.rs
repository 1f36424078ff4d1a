//! An ordered index over totally-ordered keys, balanced as a red-black
//! tree.
//!
//! Equal keys are kept as distinct entries (the tree is a multiset).
//! Every node is allocated with `Box`; allocation failure aborts the
//! process as `Box` does.
//!
//! ```
//! use rb_tree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [10, 20, 5, 15, 30] {
//!     tree.insert(key);
//! }
//! assert!(tree.iter().eq(&[5, 10, 15, 20, 30]));
//! assert!(tree.contains(&15));
//! assert!(!tree.contains(&99));
//! ```

use std::{fmt, marker::PhantomData};

use node::{DyingNodeRef, ImmutNodeRef, Node, NodePtr, NodeRef};

mod node;
pub use node::Color;

mod debug;
mod insert;
mod iter;
mod rotate;
mod search;

pub use debug::Violation;
pub use iter::Iter;

/// Invariants holding between calls:
///
/// - the root is black;
/// - no red node has a red child;
/// - every path from a node down to a nil leaf passes through the same
///   number of black nodes;
/// - an in-order walk yields keys in non-decreasing order.
pub struct RbTree<K> {
    root: Option<NodePtr<K>>,
    len: usize,
    _marker: PhantomData<Box<Node<K>>>,
}

unsafe impl<K: Send> Send for RbTree<K> {}
unsafe impl<K: Sync> Sync for RbTree<K> {}

impl<K> RbTree<K> {
    pub fn new() -> Self { Self { root: None, len: 0, _marker: PhantomData } }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.root_ref().map_or(0, |root| root.height())
    }

    pub fn root(&self) -> Option<&K> { self.root_ref().map(|root| root.key()) }
    /// `Some(Color::Black)` for every non-empty tree between calls.
    pub fn root_color(&self) -> Option<Color> {
        self.root_ref().map(|root| root.color())
    }
    pub fn first(&self) -> Option<&K> {
        self.root_ref().map(|root| root.last_toward(node::Dir::Left).key())
    }
    pub fn last(&self) -> Option<&K> {
        self.root_ref().map(|root| root.last_toward(node::Dir::Right).key())
    }

    fn root_ref(&self) -> Option<ImmutNodeRef<'_, K>> {
        self.root.map(NodeRef::from_node)
    }
}

impl<K> Drop for RbTree<K> {
    fn drop(&mut self) {
        if let Some(root) = self.root.take() {
            DyingNodeRef::from_node(root).drop_subtree();
        }
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self { Self::new() }
}

impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;
    fn into_iter(self) -> Iter<'a, K> { self.iter() }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
fn init_logger() {
    use simplelog::{Config, LevelFilter, TestLogger};
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, rc::Rc};

    use maplit::btreemap;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use sorted_multiset::SortedMultiset;

    use super::*;

    fn height_bound(n: usize) -> f64 { 2.0 * ((n + 1) as f64).log2() }

    #[test]
    fn sanity_check() {
        init_logger();
        let mut tree = RbTree::new();
        for key in [10, 20, 5, 15, 30] {
            assert!(tree.insert(key));
            assert!(tree.check().is_ok());
        }
        assert_eq!(tree.in_order(), [&5, &10, &15, &20, &30]);
        assert!(tree.contains(&15));
        assert!(!tree.contains(&99));
        assert_eq!(tree.len(), 5);

        // 15 triggers a recolor that reaches the root, so 10 stays on top.
        assert_eq!(tree.root(), Some(&10));
        assert_eq!(tree.root_color(), Some(Color::Black));
        assert_eq!(tree.first(), Some(&5));
        assert_eq!(tree.last(), Some(&30));
    }

    #[test]
    fn empty() {
        let tree = RbTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.check(), Ok(0));
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.root_color(), None);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.iter().next(), None);
        assert!(!tree.contains(&0));
        assert_eq!(format!("{tree:?}"), "{}");
    }

    #[test]
    fn single() {
        let mut tree = RbTree::new();
        tree.insert(42);
        assert_eq!(tree.root(), Some(&42));
        assert_eq!(tree.root_color(), Some(Color::Black));
        assert_eq!(tree.check(), Ok(1));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn monotone() {
        init_logger();
        for n in [50, 64, 100, 1000] {
            let asc: RbTree<_> = (0..n).collect();
            let desc: RbTree<_> = (0..n).rev().collect();
            for tree in [&asc, &desc] {
                assert!(tree.check().is_ok());
                assert!(tree.iter().copied().eq(0..n));
                assert!(tree.height() as f64 <= height_bound(n));
            }
        }
    }

    #[test]
    fn monotone_stepwise() {
        let n = 200;
        let mut asc = RbTree::new();
        let mut desc = RbTree::new();
        for i in 0..n {
            asc.insert(i);
            desc.insert(n - i);
            for tree in [&asc, &desc] {
                assert!(tree.check().is_ok(), "{}", tree.visualize());
                assert!(tree.height() as f64 <= height_bound(tree.len()));
            }
        }
    }

    #[test]
    fn random() {
        init_logger();
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        for &(bound, len) in &[(10, 300), (100, 500), (1_000_000, 2000)] {
            let mut actual = RbTree::new();
            let mut expected = SortedMultiset::new();
            for _ in 0..len {
                let key = rng.gen_range(0..bound);
                actual.insert(key);
                expected.insert(key);
                if let Err(violation) = actual.check() {
                    panic!("{violation}\n{}", actual.visualize());
                }
            }
            assert_eq!(actual.len(), expected.len());
            assert!(actual.iter().eq(expected.iter()));
            assert!(actual.height() as f64 <= height_bound(len));
            for _ in 0..len {
                let key = rng.gen_range(0..bound + bound / 10);
                assert_eq!(actual.contains(&key), expected.contains(&key));
                let count = actual.iter().filter(|&&x| x == key).count();
                assert_eq!(count, expected.count(&key));
            }
        }
    }

    #[test]
    fn duplicates() {
        let keys = [3, 1, 3, 2, 3, 1];
        let tree: RbTree<_> = keys.into_iter().collect();
        let expected: SortedMultiset<_> = keys.into_iter().collect();
        assert!(tree.check().is_ok());

        let mut count = BTreeMap::new();
        for &key in &tree {
            *count.entry(key).or_insert(0) += 1;
        }
        assert_eq!(count, btreemap! { 1 => 2, 2 => 1, 3 => 3 });
        for key in 0..=4 {
            let actual = count.get(&key).copied().unwrap_or(0);
            assert_eq!(actual, expected.count(&key));
        }
        assert_eq!(format!("{tree:?}"), "{1, 1, 2, 3, 3, 3}");
    }

    #[test]
    fn all_equal() {
        let n = 100;
        let tree: RbTree<_> = std::iter::repeat(7).take(n).collect();
        assert!(tree.check().is_ok());
        assert_eq!(tree.len(), n);
        assert!(tree.height() as f64 <= height_bound(n));
        assert!(tree.contains(&7));
        assert!(!tree.contains(&6));
        assert!(!tree.contains(&8));
    }

    #[test]
    fn extend() {
        let mut tree: RbTree<_> = (0..10).step_by(2).collect();
        tree.extend((1..10).step_by(2));
        assert!(tree.check().is_ok());
        assert!(tree.iter().copied().eq(0..10));
    }

    #[test]
    fn drop_all() {
        let keys: Vec<_> = (0..100).map(Rc::new).collect();
        let tree: RbTree<_> = keys.iter().cloned().collect();
        assert!(keys.iter().all(|key| Rc::strong_count(key) == 2));
        drop(tree);
        assert!(keys.iter().all(|key| Rc::strong_count(key) == 1));
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RbTree<i32>>();
        assert_send_sync::<Iter<'_, i32>>();
    }
}
