/// Reduce a signed rotation distance to the equivalent forward distance in
/// `0..n`.
///
/// Positive distances shift left, negative distances shift right. Returns `0`
/// for `n <= 1`, in which case every rotation is a no-op.
pub fn normalize(n: usize, d: isize) -> usize {
    if n <= 1 {
        return 0;
    }

    // `unsigned_abs` keeps `isize::MIN` in range
    let rem = d.unsigned_abs() % n;

    if d < 0 && rem != 0 {
        n - rem
    } else {
        rem
    }
}

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
