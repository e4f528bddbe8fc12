use crate::normalize::normalize;

/// Rotate the first `n` elements of `s` left by `d` using three reversals.
///
/// Only needs swap access to the elements. Elements past `n` are untouched.
pub fn rotate_by_reversal<T>(s: &mut [T], n: usize, d: isize) {
    debug_assert!(n <= s.len(), "length {n} exceeds slice of {}", s.len());

    let d = normalize(n, d);
    if d == 0 {
        return;
    }

    let s = &mut s[..n];

    reverse(&mut s[..d]);
    reverse(&mut s[d..]);
    reverse(s);
}

/// Reverse a slice in place by swapping inward from both ends
pub fn reverse<T>(s: &mut [T]) {
    if s.len() < 2 {
        return;
    }

    let (mut i, mut j) = (0, s.len() - 1);
    while i < j {
        s.swap(i, j);
        i += 1;
        j -= 1;
    }
}
