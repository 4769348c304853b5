// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Property-based tests for the algebraic invariants of `spec.md` §8,
//! items 1-12, exercised over random 32-byte inputs.

use curve25519_fe::field::FieldElement;
use proptest::prelude::*;

/// A strategy producing arbitrary 32-byte inputs with bit 255 cleared,
/// matching the precondition `from_bytes` documents for its input.
fn arb_bytes() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_map(|mut b| {
        b[31] &= 0x7f;
        b
    })
}

fn arb_fe() -> impl Strategy<Value = FieldElement> {
    arb_bytes().prop_map(|b| FieldElement::from_bytes(&b))
}

/// A strategy for nonzero field elements, for properties that require it
/// (multiplicative inverse).
fn arb_nonzero_fe() -> impl Strategy<Value = FieldElement> {
    arb_fe().prop_filter("must be nonzero", |f| bool::from(f.is_nonzero()))
}

proptest! {
    #[test]
    fn additive_identity(f in arb_fe()) {
        let h = f.add(&FieldElement::zero());
        prop_assert_eq!(h.to_bytes(), f.to_bytes());
    }

    #[test]
    fn add_is_commutative(f in arb_fe(), g in arb_fe()) {
        prop_assert_eq!(f.add(&g).to_bytes(), g.add(&f).to_bytes());
    }

    #[test]
    fn mul_is_commutative(f in arb_fe(), g in arb_fe()) {
        prop_assert_eq!(f.mul(&g).to_bytes(), g.mul(&f).to_bytes());
    }

    #[test]
    fn mul_is_associative(f in arb_fe(), g in arb_fe(), k in arb_fe()) {
        let lhs = f.mul(&g).mul(&k);
        let rhs = f.mul(&g.mul(&k));
        prop_assert_eq!(lhs.to_bytes(), rhs.to_bytes());
    }

    #[test]
    fn mul_distributes_over_add(f in arb_fe(), g in arb_fe(), k in arb_fe()) {
        let lhs = f.mul(&g.add(&k));
        let rhs = f.mul(&g).add(&f.mul(&k));
        prop_assert_eq!(lhs.to_bytes(), rhs.to_bytes());
    }

    #[test]
    fn additive_inverse(f in arb_fe()) {
        let h = f.add(&f.neg());
        prop_assert_eq!(h.to_bytes(), FieldElement::zero().to_bytes());
    }

    #[test]
    fn multiplicative_inverse(f in arb_nonzero_fe()) {
        let h = f.mul(&f.invert());
        prop_assert_eq!(h.to_bytes(), FieldElement::one().to_bytes());
    }

    #[test]
    fn square_consistency(f in arb_fe()) {
        prop_assert_eq!(f.sq().to_bytes(), f.mul(&f).to_bytes());
        prop_assert_eq!(f.sq2().to_bytes(), f.sq().add(&f.sq()).to_bytes());
    }

    #[test]
    fn scalar_consistency(f in arb_fe()) {
        let mut k_bytes = [0u8; 32];
        k_bytes[0] = 0x42;
        k_bytes[1] = 0xdb;
        k_bytes[2] = 0x01; // 121666 little-endian
        let k = FieldElement::from_bytes(&k_bytes);
        prop_assert_eq!(f.mul_small(121666).to_bytes(), f.mul(&k).to_bytes());
    }

    #[test]
    fn encoding_round_trip(b in arb_bytes()) {
        let f = FieldElement::from_bytes(&b);
        prop_assert_eq!(f.to_bytes(), b);
    }

    #[test]
    fn canonical_uniqueness(f in arb_fe(), g in arb_fe()) {
        let equal_bytes = f.to_bytes() == g.to_bytes();
        let diff_is_zero = f.add(&g.neg()).to_bytes() == FieldElement::zero().to_bytes();
        prop_assert_eq!(equal_bytes, diff_is_zero);
    }

    #[test]
    fn cmov_and_cswap_correctness(f in arb_fe(), g in arb_fe()) {
        let mut h = f;
        h.cmov(&g, 0.into());
        prop_assert_eq!(h.to_bytes(), f.to_bytes());

        let mut h = f;
        h.cmov(&g, 1.into());
        prop_assert_eq!(h.to_bytes(), g.to_bytes());

        let mut a = f;
        let mut b = g;
        FieldElement::cswap(&mut a, &mut b, 0.into());
        prop_assert_eq!(a.to_bytes(), f.to_bytes());
        prop_assert_eq!(b.to_bytes(), g.to_bytes());

        let mut a = f;
        let mut b = g;
        FieldElement::cswap(&mut a, &mut b, 1.into());
        prop_assert_eq!(a.to_bytes(), g.to_bytes());
        prop_assert_eq!(b.to_bytes(), f.to_bytes());
    }

    #[test]
    fn pow_p58_identity(f in arb_nonzero_fe()) {
        let t = f.pow_p58();
        let check = t.sq().sq().mul(&f);
        let z2 = f.sq();
        let matches_positive = check.to_bytes() == z2.to_bytes();
        let matches_negative = check.to_bytes() == z2.neg().to_bytes();
        prop_assert!(matches_positive || matches_negative);
    }
}
