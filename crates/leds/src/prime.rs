//! Trial-division primality test that only compares, adds and subtracts.
//!
//! thumbv6m (Cortex-M0+) has no divide instruction, so `%` would pull in a
//! libcall. The remainder is computed by repeated subtraction instead. That
//! makes the test O(n²), which is fine for the 8-bit candidates shown on the
//! LEDs.

/// `n mod d` by repeated subtraction. `d` must be non-zero.
fn remainder(n: u32, d: u32) -> u32 {
    let mut t = n;
    while t >= d {
        t -= d;
    }
    t
}

/// Returns `true` if `n` is prime.
///
/// Tries every divisor in `2..n` and stops at the first one that divides
/// evenly.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d < n {
        if remainder(n, d) == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// All primes that fit in the 8 LEDs, in ascending order.
pub fn primes() -> impl Iterator<Item = u8> + Clone {
    (2..=u8::MAX).filter(|&n| is_prime(n.into()))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use crate::prime::*;

    const PRIMES_BELOW_256: [u8; 54] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179,
        181, 191, 193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
    ];

    #[test]
    fn test_remainder() {
        assert_eq!(remainder(0, 3), 0);
        assert_eq!(remainder(2, 3), 2);
        assert_eq!(remainder(9, 3), 0);
        assert_eq!(remainder(10, 3), 1);
        assert_eq!(remainder(255, 16), 15);
    }

    #[test]
    fn test_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
    }

    #[test]
    fn test_upper_boundary() {
        assert!(is_prime(251));
        for n in 252..=255 {
            assert!(!is_prime(n), "{n} reported as prime");
        }
    }

    #[test]
    fn test_every_candidate() {
        for n in 0..=255_u32 {
            let expected = PRIMES_BELOW_256.contains(&(n as u8));
            assert_eq!(is_prime(n), expected, "n = {n}");
        }
    }

    #[test]
    fn test_deterministic() {
        for n in [0, 1, 2, 97, 221, 251] {
            assert_eq!(is_prime(n), is_prime(n));
        }
    }

    #[test]
    fn test_beyond_8_bits() {
        assert!(is_prime(257));
        assert!(!is_prime(1001)); // 7 * 11 * 13
        assert!(is_prime(1009));
    }

    #[test]
    fn test_primes() {
        let found = primes().collect::<Vec<_>>();
        assert_eq!(found.len(), 54);
        assert_eq!(found, PRIMES_BELOW_256);
        assert_eq!(primes().last(), Some(251));
    }
}
