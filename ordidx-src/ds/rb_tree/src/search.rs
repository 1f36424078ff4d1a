use std::{borrow::Borrow, cmp::Ordering};

use crate::{
    node::{Dir, ImmutNodeRef},
    RbTree,
};

impl<K: Ord> RbTree<K> {
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns the stored key equal to `key` closest to the root. Other
    /// equal keys may sit below it.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search(self.root_ref()?, key).map(|node| node.key())
    }
}

fn search<'a, K, Q>(
    node: ImmutNodeRef<'a, K>,
    key: &Q,
) -> Option<ImmutNodeRef<'a, K>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let dir = match key.cmp(node.key().borrow()) {
        Ordering::Equal => return Some(node),
        Ordering::Less => Dir::Left,
        Ordering::Greater => Dir::Right,
    };
    search(node.child(dir)?, key)
}
