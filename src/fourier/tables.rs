use std::f64::consts::PI;
use std::sync::OnceLock;

/// Length of the shared sine table (2^18 samples of one full period).
pub(crate) const SINE_TABLE_LEN: usize = 1 << 18;

/// Largest power of two with a precomputed bit-reversal table.
pub(crate) const BITREV_MAX_POW: u32 = 18;

/// Maximum number of prime factors a u32 can carry (all-twos case).
pub(crate) const MAX_PRIME_FACTORS: usize = 32;

static SINE_TABLE: OnceLock<Vec<f64>> = OnceLock::new();
static BITREV_TABLES: OnceLock<Vec<Vec<usize>>> = OnceLock::new();

/// Shared table of sin(2*pi*k / 2^18), initialized on first use.
pub(crate) fn sine_table() -> &'static [f64] {
    SINE_TABLE.get_or_init(|| {
        (0..SINE_TABLE_LEN)
            .map(|k| (2.0 * PI * k as f64 / SINE_TABLE_LEN as f64).sin())
            .collect()
    })
}

fn build_bitrev(length: usize) -> Vec<usize> {
    let mut indexes = vec![0usize; length];
    let bits = length.trailing_zeros();
    for (k, slot) in indexes.iter_mut().enumerate() {
        *slot = (k.reverse_bits() >> (usize::BITS - bits)) & (length - 1);
    }
    indexes
}

/// Bit-reversal permutation for a power-of-two length. Tables up to 2^18
/// are built once and shared; longer permutations are computed per call.
pub(crate) fn bitrev_table(length: usize) -> std::borrow::Cow<'static, [usize]> {
    let pow = length.trailing_zeros();
    if pow >= 1 && pow <= BITREV_MAX_POW {
        let tables = BITREV_TABLES.get_or_init(|| {
            (0..=BITREV_MAX_POW)
                .map(|p| if p == 0 { Vec::new() } else { build_bitrev(1 << p) })
                .collect()
        });
        std::borrow::Cow::Borrowed(&tables[pow as usize])
    } else {
        std::borrow::Cow::Owned(build_bitrev(length))
    }
}

pub(crate) fn is_power2(x: usize) -> bool {
    x != 0 && x & (x - 1) == 0
}

/// Prime factors of `n` in ascending order.
pub(crate) fn prime_factorize(mut n: usize) -> Vec<usize> {
    if n < 4 {
        return vec![n];
    }
    let mut result = Vec::with_capacity(MAX_PRIME_FACTORS);
    let mut div = 2;
    while n > 1 {
        if n % div != 0 {
            div += 1;
        } else {
            n /= div;
            result.push(div);
        }
    }
    result
}

pub(crate) fn is_prime(n: usize) -> bool {
    prime_factorize(n).len() == 1
}

/// Modular exponentiation: base^exp mod modulus.
pub(crate) fn modpow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}

/// Smallest primitive root modulo the prime `n`.
///
/// g generates the multiplicative group when g^((n-1)/p) != 1 (mod n) for
/// every prime p dividing n-1.
pub(crate) fn primitive_root(n: usize) -> usize {
    if n == 2 {
        return 1;
    } else if n == 3 {
        return 2;
    }

    let primes = prime_factorize(n - 1);
    for g in 2..n {
        let is_generator = primes
            .iter()
            .all(|&p| modpow(g as u64, ((n - 1) / p) as u64, n as u64) != 1);
        if is_generator {
            return g;
        }
    }
    // n prime guarantees a generator exists.
    unreachable!("no primitive root found for {}", n)
}
