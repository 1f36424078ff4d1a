pub struct SortedMultiset<K>(Vec<K>);

impl<K: Ord> SortedMultiset<K> {
    pub fn new() -> Self { Self(vec![]) }
    pub fn insert(&mut self, key: K) {
        let i = self.0.partition_point(|x| x <= &key);
        self.0.insert(i, key);
    }
    pub fn contains(&self, key: &K) -> bool {
        self.0.binary_search(key).is_ok()
    }
    pub fn count(&self, key: &K) -> usize {
        let lo = self.0.partition_point(|x| x < key);
        let hi = self.0.partition_point(|x| x <= key);
        hi - lo
    }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ { self.0.iter() }
}

impl<K: Ord> Default for SortedMultiset<K> {
    fn default() -> Self { Self::new() }
}

impl<K: Ord> FromIterator<K> for SortedMultiset<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut res = Self::new();
        for key in iter {
            res.insert(key);
        }
        res
    }
}

#[test]
fn sanity_check() {
    let ms: SortedMultiset<_> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    assert!(ms.iter().eq(&[1, 1, 2, 3, 4, 5, 6, 9]));
    assert_eq!(ms.len(), 8);
    assert_eq!(ms.count(&1), 2);
    assert_eq!(ms.count(&7), 0);
    assert!(ms.contains(&9));
    assert!(!ms.contains(&8));
}
