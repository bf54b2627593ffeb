//! Modular arithmetic over `u64` with `u128` intermediates

/// `(a * b) mod modulus` without overflow.
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(modulus)) as u64
}

/// `base^exp mod modulus` by square-and-multiply.
///
/// Returns 0 for `modulus == 1`, and treats `modulus == 0` the same way
/// rather than dividing by zero.
pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> u64 {
    if modulus <= 1 {
        return 0;
    }

    let mut result = 1;
    let mut base = base % modulus;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

/// Distinct prime factors of `n` in ascending order.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut divisor = 2u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            factors.push(divisor);
            while n % divisor == 0 {
                n /= divisor;
            }
        }
        divisor += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}
