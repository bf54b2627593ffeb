//! Safe-prime group parameter generation
//!
//! ```text
//! [lower, upper] ──descending──▶ q prime, p = 2q + 1 prime
//!                                      │
//!                                      ▼ GeneratorSearch
//!                               largest g of order p - 1
//!                                      │
//!                                      ▼
//!                         GroupParameters { p, q, g, m = p·q }
//! ```
//!
//! Selection is deterministic: the largest qualifying `q` wins, then the
//! largest generator of its group. Fixed test vectors depend on this.

use tracing::debug;

use crate::{
    arith::{mod_pow, mul_mod, prime_factors},
    config::{GeneratorStrategy, GroupConfig, MAX_EXHAUSTIVE_PRIME},
    error::ExchangeError,
};

/// Primality by trial division.
///
/// Tests every divisor `i` with `i * i <= n`. Values below 2 are not prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let mut divisor = 2u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Find the largest `q` in `[lower, upper]` such that `q` and `2q + 1` are
/// both prime.
///
/// Returns `(q, p)`.
///
/// # Errors
///
/// - `NoSafePrime`: if no candidate in the range qualifies
pub fn find_safe_prime(lower: u64, upper: u64) -> Result<(u64, u64), ExchangeError> {
    for q in (lower..=upper).rev() {
        let Some(p) = q.checked_mul(2).and_then(|d| d.checked_add(1)) else {
            continue;
        };
        if is_prime(q) && is_prime(p) {
            return Ok((q, p));
        }
    }
    Err(ExchangeError::NoSafePrime { lower, upper })
}

/// Whether `g` generates the whole multiplicative group modulo the prime `p`.
///
/// Compares `{g^k mod p : k in 1..p}` against `{1, ..., p - 1}`. Powers are
/// walked one multiplication at a time and the walk stops at the first
/// repeated residue, since a repeat means the set is short.
///
/// The walk keeps a `p`-entry bitmap, so above [`MAX_EXHAUSTIVE_PRIME`] the
/// answer comes from the factored order test instead. Both agree on every
/// prime.
pub fn is_generator(g: u64, p: u64) -> bool {
    if p < 2 {
        return false;
    }
    if p > MAX_EXHAUSTIVE_PRIME {
        return is_prime(p) && has_full_order(g, p, &prime_factors(p - 1));
    }

    let Ok(len) = usize::try_from(p) else {
        return false;
    };
    let mut seen = vec![false; len];
    let mut power = 1u64;
    for _ in 1..p {
        power = mul_mod(power, g, p);
        let Ok(slot) = usize::try_from(power) else {
            return false;
        };
        if power == 0 || seen[slot] {
            return false;
        }
        seen[slot] = true;
    }
    true
}

/// `g^((p-1)/f) != 1` for every prime factor `f` of `p - 1`.
fn has_full_order(g: u64, p: u64, factors: &[u64]) -> bool {
    let order = p - 1;
    g % p != 0 && factors.iter().all(|&f| mod_pow(g, order / f, p) != 1)
}

/// Strategy for locating the largest generator of a prime's group.
///
/// Implementations must return the largest `g` in `[2, p - 1]` of order
/// `p - 1`, or `None` if there is none.
pub trait GeneratorSearch {
    /// Largest full-order generator modulo the prime `p`.
    fn largest_generator(&self, p: u64) -> Option<u64>;

    /// Largest prime this search can handle in reasonable time and memory.
    fn max_prime(&self) -> u64 {
        u64::MAX
    }
}

/// Checks every candidate with [`is_generator`].
///
/// Quadratic in `p` and allocates `p` bytes per candidate. Only practical for
/// primes in the thousands; refuses anything above [`MAX_EXHAUSTIVE_PRIME`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch;

impl GeneratorSearch for ExhaustiveSearch {
    fn largest_generator(&self, p: u64) -> Option<u64> {
        (2..p).rev().find(|&g| is_generator(g, p))
    }

    fn max_prime(&self) -> u64 {
        MAX_EXHAUSTIVE_PRIME
    }
}

/// Accepts `g` when `g^((p-1)/f) != 1` for every prime factor `f` of `p - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoredOrderSearch;

impl GeneratorSearch for FactoredOrderSearch {
    fn largest_generator(&self, p: u64) -> Option<u64> {
        if p < 3 {
            return None;
        }

        let factors = prime_factors(p - 1);
        (2..p).rev().find(|&g| has_full_order(g, p, &factors))
    }
}

impl GeneratorSearch for GeneratorStrategy {
    fn largest_generator(&self, p: u64) -> Option<u64> {
        match self {
            Self::Exhaustive => ExhaustiveSearch.largest_generator(p),
            Self::FactoredOrder => FactoredOrderSearch.largest_generator(p),
        }
    }

    fn max_prime(&self) -> u64 {
        match self {
            Self::Exhaustive => ExhaustiveSearch.max_prime(),
            Self::FactoredOrder => FactoredOrderSearch.max_prime(),
        }
    }
}

/// Parameters of a safe-prime Diffie-Hellman group.
///
/// # Invariants
///
/// - `p == 2q + 1` with `p` and `q` prime
/// - `g` has order `p - 1` modulo `p`
/// - `m == p * q`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupParameters {
    p: u64,
    q: u64,
    g: u64,
    m: u64,
}

impl GroupParameters {
    /// Build parameters from values agreed out of band, checking every
    /// invariant.
    ///
    /// Verifying `g` uses [`FactoredOrderSearch`]'s order test, so this is
    /// cheap even for large primes.
    ///
    /// # Errors
    ///
    /// - `InvalidParameters`: if any invariant does not hold
    pub fn new(p: u64, q: u64, g: u64) -> Result<Self, ExchangeError> {
        let reject = |reason| Err(ExchangeError::InvalidParameters { reason });

        if !is_prime(q) {
            return reject("q is not prime");
        }
        if q.checked_mul(2).and_then(|d| d.checked_add(1)) != Some(p) {
            return reject("p is not 2q + 1");
        }
        if !is_prime(p) {
            return reject("p is not prime");
        }
        if g < 2 || g >= p {
            return reject("g is outside [2, p - 1]");
        }
        if !has_full_order(g, p, &prime_factors(p - 1)) {
            return reject("g does not generate the full group");
        }
        let Some(m) = p.checked_mul(q) else {
            return reject("p * q overflows");
        };

        Ok(Self { p, q, g, m })
    }

    /// The safe prime `p`.
    pub fn p(&self) -> u64 {
        self.p
    }

    /// The companion prime `q = (p - 1) / 2`.
    pub fn q(&self) -> u64 {
        self.q
    }

    /// Generator of the multiplicative group modulo `p`.
    pub fn g(&self) -> u64 {
        self.g
    }

    /// Modulus `p * q` for key-bit derivation.
    pub fn m(&self) -> u64 {
        self.m
    }

    /// Number of admissible private keys (`p - 1`).
    pub fn key_space(&self) -> u64 {
        self.p - 1
    }
}

/// Searches a range for group parameters.
///
/// Generic over the generator search so a faster strategy can be swapped in
/// without changing which parameters are selected.
#[derive(Debug, Clone)]
pub struct ParameterGenerator<S = GeneratorStrategy> {
    lower: u64,
    upper: u64,
    search: S,
}

impl ParameterGenerator {
    /// Generator over `[lower, upper]` with the default strategy.
    pub fn new(lower: u64, upper: u64) -> Self {
        Self { lower, upper, search: GeneratorStrategy::default() }
    }

    /// Generator configured from a [`GroupConfig`].
    pub fn from_config(config: &GroupConfig) -> Self {
        Self { lower: config.lower, upper: config.upper, search: config.strategy }
    }
}

impl Default for ParameterGenerator {
    fn default() -> Self {
        Self::from_config(&GroupConfig::default())
    }
}

impl<S: GeneratorSearch> ParameterGenerator<S> {
    /// Replace the generator search strategy.
    pub fn with_search<T: GeneratorSearch>(self, search: T) -> ParameterGenerator<T> {
        ParameterGenerator { lower: self.lower, upper: self.upper, search }
    }

    /// Run the search.
    ///
    /// # Errors
    ///
    /// - `InvalidRange`: if the range is empty, exceeds the supported size, or
    ///   could select a prime too large for the generator search
    /// - `NoSafePrime`: if the range holds no safe-prime pair
    /// - `NoGenerator`: if the selected prime has no generator
    pub fn generate(&self) -> Result<GroupParameters, ExchangeError> {
        GroupConfig {
            lower: self.lower,
            upper: self.upper,
            strategy: GeneratorStrategy::FactoredOrder,
        }
        .validate()?;

        // validate() caps upper well below u64::MAX / 2
        if 2 * self.upper + 1 > self.search.max_prime() {
            return Err(ExchangeError::InvalidRange {
                lower: self.lower,
                upper: self.upper,
                reason: "range exceeds what the generator search can handle",
            });
        }

        let (q, p) = find_safe_prime(self.lower, self.upper)?;
        let g = self.search.largest_generator(p).ok_or(ExchangeError::NoGenerator { prime: p })?;
        let m = p * q;

        debug!(p, q, g, m, lower = self.lower, upper = self.upper, "selected group parameters");

        Ok(GroupParameters { p, q, g, m })
    }
}
