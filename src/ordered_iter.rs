use ::ordered_iter::{OrderedMapIterator, OrderedSetIterator};
use super::tree::{IntoIter, Iter, Keys};

impl<K, V> OrderedMapIterator for IntoIter<K, V> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<'a, K, V> OrderedMapIterator for Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

impl<'a, K, V> OrderedSetIterator for Keys<'a, K, V> where K: Ord {}
