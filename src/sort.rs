//! Stable in-place insertion sort for small arrays.

/// Sort `seq` in ascending order.
pub fn insertion_sort<T: PartialOrd>(seq: &mut [T]) {
    insertion_sort_by(seq, |a, b| a > b);
}

/// Sort `seq` so that no element is preceded by one it `is_greater` than.
///
/// An element only moves left past predecessors for which
/// `is_greater(predecessor, element)` holds, so equal elements keep their
/// relative order.
pub fn insertion_sort_by<T, F>(seq: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && is_greater(&seq[j - 1], &seq[j]) {
            seq.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sort an index permutation ascending by the keys it points at.
pub fn sort_permutation<K: PartialOrd>(perm: &mut [usize], keys: &[K]) {
    insertion_sort_by(perm, |&a, &b| keys[a] > keys[b]);
}

/// Sort an index permutation descending by the keys it points at.
pub fn sort_permutation_desc<K: PartialOrd>(perm: &mut [usize], keys: &[K]) {
    insertion_sort_by(perm, |&a, &b| keys[a] < keys[b]);
}
