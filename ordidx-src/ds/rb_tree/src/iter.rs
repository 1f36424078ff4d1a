use std::iter::FusedIterator;

use crate::{
    node::{Dir, ImmutNodeRef},
    RbTree,
};

/// In-order iterator over the keys of an [`RbTree`].
pub struct Iter<'a, K> {
    // Nodes whose left subtrees are exhausted, deepest on top.
    stack: Vec<ImmutNodeRef<'a, K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<ImmutNodeRef<'a, K>>, len: usize) -> Self {
        let mut res = Self { stack: vec![], remaining: len };
        res.push_left_spine(root);
        res
    }

    fn push_left_spine(&mut self, mut node: Option<ImmutNodeRef<'a, K>>) {
        while let Some(cur) = node {
            self.stack.push(cur);
            node = cur.child(Dir::Left);
        }
    }
}

impl<'a, K: 'a> Iterator for Iter<'a, K> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.child(Dir::Right));
        self.remaining -= 1;
        Some(node.key())
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a> ExactSizeIterator for Iter<'a, K> {}
impl<'a, K: 'a> FusedIterator for Iter<'a, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self { stack: self.stack.clone(), remaining: self.remaining }
    }
}

impl<K> RbTree<K> {
    pub fn iter(&self) -> Iter<'_, K> { Iter::new(self.root_ref(), self.len) }

    /// Collects the keys in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        fn dfs<'a, K>(
            node: Option<ImmutNodeRef<'a, K>>,
            res: &mut Vec<&'a K>,
        ) {
            if let Some(node) = node {
                dfs(node.child(Dir::Left), res);
                res.push(node.key());
                dfs(node.child(Dir::Right), res);
            }
        }

        let mut res = Vec::with_capacity(self.len);
        dfs(self.root_ref(), &mut res);
        res
    }
}
