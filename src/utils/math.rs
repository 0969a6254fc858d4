/// Iterative Euclidean GCD. `gcd(0, b) == b` and `gcd(a, 0) == a`.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }

    a
}

/// GCD folded over a sequence; 0 for an empty or all-zero sequence.
pub fn gcd_all(values: impl IntoIterator<Item = usize>) -> usize {
    values.into_iter().fold(0, gcd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_pairs() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_gcd_all() {
        assert_eq!(gcd_all([5, 1, 1]), 1);
        assert_eq!(gcd_all([4, 8, 12]), 4);
        assert_eq!(gcd_all([6, 0, 9]), 3);
        assert_eq!(gcd_all([]), 0);
        assert_eq!(gcd_all([0, 0]), 0);
    }
}
