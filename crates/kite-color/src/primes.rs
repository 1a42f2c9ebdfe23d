//! Prime source
//!
//! Primes are generated by trial division over odd candidates starting at 3,
//! with 2 prepended. Monzo indices are 0-based while prime indices are
//! 1-based: monzo slot `i` holds the exponent of `nth_prime(i + 1)`.

use crate::error::ColorError;

/// Returns the `n`-th prime, 1-indexed (`nth_prime(1) == 2`).
///
/// Computes from scratch on every call. Use [`PrimeCache`] when walking
/// increasing indices.
///
/// # Example
///
/// ```
/// use kite_color::primes::nth_prime;
///
/// assert_eq!(nth_prime(1).unwrap(), 2);
/// assert_eq!(nth_prime(4).unwrap(), 7);
/// ```
pub fn nth_prime(n: usize) -> Result<u64, ColorError> {
    PrimeCache::new().get(n)
}

/// Trial division by odd divisors up to the square root.
///
/// Only meaningful for odd `candidate >= 3`, which is all the generator feeds it.
fn is_odd_prime(candidate: u64) -> bool {
    let mut divisor = 3;
    while divisor * divisor <= candidate {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Memoizing prime generator.
///
/// Keeps every prime found so far; asking for a larger index extends the
/// list from the last odd candidate.
#[derive(Debug, Clone)]
pub struct PrimeCache {
    primes: Vec<u64>,
}

impl PrimeCache {
    /// Create a cache seeded with 2.
    pub fn new() -> Self {
        Self { primes: vec![2] }
    }

    /// Returns the `n`-th prime (1-indexed), extending the cache as needed.
    pub fn get(&mut self, n: usize) -> Result<u64, ColorError> {
        if n < 1 {
            return Err(ColorError::invalid(format!(
                "prime index must be at least 1, got {n}"
            )));
        }
        // Odd candidates only; 2 is the seed
        let mut candidate = match self.primes.last() {
            Some(&p) if p > 2 => p,
            _ => 1,
        };
        while self.primes.len() < n {
            candidate += 2;
            if is_odd_prime(candidate) {
                self.primes.push(candidate);
            }
        }
        Ok(self.primes[n - 1])
    }

    /// Number of primes currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Always false: the cache starts with 2.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}
