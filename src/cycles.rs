use crate::mover::ElementMover;
use crate::normalize::{gcd, normalize};

/// Rotate `n` elements of `seq` left by `d` with the juggling algorithm.
///
/// The index permutation splits into `gcd(d, n)` disjoint cycles. Each cycle
/// is walked once: its first element is saved, every other element is copied
/// one step back along the cycle, and the saved element lands in the last
/// vacated slot. All element access goes through `mover`, which trusts `n`.
pub fn rotate_by_cycles<S, M>(seq: &mut S, n: usize, d: isize, mover: &mut M)
where
    S: ?Sized,
    M: ElementMover<S> + ?Sized,
{
    let d = normalize(n, d);
    if d == 0 {
        return;
    }

    // Stepping back by `n - d` avoids overflowing `j + d`
    let back = n - d;

    for i in 0..gcd(d, n) {
        mover.save(seq, i);

        let mut j = i;
        loop {
            let k = if j < back { j + d } else { j - back };
            if k == i {
                break;
            }

            mover.copy(seq, k, j);
            j = k;
        }

        mover.restore(seq, j);
    }
}
