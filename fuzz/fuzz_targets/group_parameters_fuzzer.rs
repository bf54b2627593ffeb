//! Fuzz target for GroupParameters validation and key agreement
//!
//! Builds parameters from arbitrary (p, q, g) triples. Anything accepted must
//! satisfy the group invariants, and two sessions over it must agree on the
//! shared secret.
//!
//! `q` is kept to 16 bits so trial division stays fast.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tessera_core::{GroupParameters, KeyExchange, SystemEnv, arith::mod_pow, is_prime};

#[derive(Debug, Clone, Arbitrary)]
struct GroupScenario {
    q: u16,
    g: u32,
    tweak_p: bool,
    a: u32,
    b: u32,
}

fuzz_target!(|scenario: GroupScenario| {
    let q = u64::from(scenario.q);
    let p = 2 * q + 1 + u64::from(scenario.tweak_p);
    let g = u64::from(scenario.g);

    let Ok(params) = GroupParameters::new(p, q, g) else {
        return;
    };

    assert!(is_prime(params.q()) && is_prime(params.p()));
    assert_eq!(params.p(), 2 * params.q() + 1);
    assert_eq!(params.m(), params.p() * params.q());

    let exchange = KeyExchange::new(params, SystemEnv::new());
    let a = 1 + u64::from(scenario.a) % params.key_space();
    let b = 1 + u64::from(scenario.b) % params.key_space();
    let public_a = mod_pow(params.g(), a, params.p());
    let public_b = mod_pow(params.g(), b, params.p());

    let (Ok(s1), Ok(s2)) =
        (exchange.compute_shared_secret(public_b, a), exchange.compute_shared_secret(public_a, b))
    else {
        unreachable!("powers of g are always valid public keys");
    };
    assert_eq!(s1, s2);
    assert!(exchange.derive_cipher_key(s1).is_ok());
});
