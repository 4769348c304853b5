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

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\), using \\(32\\)-bit
//! signed limbs with \\(64\\)-bit products.
//!
//! A field element \\(x\\) is represented in radix \\(2\^{25.5}\\) as
//! ten `i32`s,
//! $$
//! x = \sum\_{i=0}\^9 x\_i 2\^{\lceil i \cdot 51 / 2 \rceil}
//!   = x\_0 + x\_1 2\^{26} + x\_2 2\^{51} + x\_3 2\^{77} + \cdots + x\_9 2\^{230},
//! $$
//! with even-indexed limbs carrying 26 bits of data and odd-indexed
//! limbs carrying 25. Limbs are signed and are allowed to grow beyond
//! their nominal width between reductions: *loose* bounds
//! (`|even| <= 1.01*2^26`, `|odd| <= 1.01*2^25`) hold after `mul`/`sq`,
//! and the wider *post-add* bounds (`|even| <= 1.1*2^26`,
//! `|odd| <= 1.1*2^25`) hold after `add`/`sub`/`neg`, which never carry.
//! The representation is not unique; only [`to_bytes`](FieldElement2625::to_bytes)
//! produces a canonical 32-byte encoding.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A `FieldElement2625` represents an element of the field
/// \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// In the 32-bit implementation, a `FieldElement` is represented in
/// radix \\(2\^{25.5}\\) as ten signed `i32`s. See the module
/// documentation for the exact layout.
///
/// # Note
///
/// The backend-specific type `FieldElement2625` should not be used
/// outside of the [`crate::field`] module; use
/// [`crate::field::FieldElement`] instead.
#[derive(Copy, Clone)]
pub struct FieldElement2625(pub(crate) [i32; 10]);

impl Debug for FieldElement2625 {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "FieldElement2625({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement2625 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl ConstantTimeEq for FieldElement2625 {
    /// Test equality between two field elements by comparing their
    /// canonical encodings. This goes through [`to_bytes`](FieldElement2625::to_bytes),
    /// so it is constant-time in the limbs of both operands.
    fn ct_eq(&self, other: &FieldElement2625) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl Eq for FieldElement2625 {}
impl PartialEq for FieldElement2625 {
    fn eq(&self, other: &FieldElement2625) -> bool {
        self.ct_eq(other).into()
    }
}

impl<'b> AddAssign<&'b FieldElement2625> for FieldElement2625 {
    /// `h = f + g`. Does not reduce; see [`FieldElement2625::add`].
    fn add_assign(&mut self, rhs: &'b FieldElement2625) {
        for i in 0..10 {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<'a, 'b> Add<&'b FieldElement2625> for &'a FieldElement2625 {
    type Output = FieldElement2625;
    fn add(self, rhs: &'b FieldElement2625) -> FieldElement2625 {
        self.add(rhs)
    }
}

impl<'b> SubAssign<&'b FieldElement2625> for FieldElement2625 {
    fn sub_assign(&mut self, rhs: &'b FieldElement2625) {
        *self = self.sub(rhs);
    }
}

impl<'a, 'b> Sub<&'b FieldElement2625> for &'a FieldElement2625 {
    type Output = FieldElement2625;
    fn sub(self, rhs: &'b FieldElement2625) -> FieldElement2625 {
        self.sub(rhs)
    }
}

impl<'b> MulAssign<&'b FieldElement2625> for FieldElement2625 {
    fn mul_assign(&mut self, rhs: &'b FieldElement2625) {
        *self = self.mul(rhs);
    }
}

impl<'a, 'b> Mul<&'b FieldElement2625> for &'a FieldElement2625 {
    type Output = FieldElement2625;
    fn mul(self, rhs: &'b FieldElement2625) -> FieldElement2625 {
        self.mul(rhs)
    }
}

impl<'a> Neg for &'a FieldElement2625 {
    type Output = FieldElement2625;
    fn neg(self) -> FieldElement2625 {
        FieldElement2625::neg(self)
    }
}

impl ConditionallySelectable for FieldElement2625 {
    /// `cmov`-equivalent: select `a` if `choice == 1`, else `b`.
    fn conditional_select(
        a: &FieldElement2625,
        b: &FieldElement2625,
        choice: Choice,
    ) -> FieldElement2625 {
        let mut out = [0i32; 10];
        for i in 0..10 {
            out[i] = i32::conditional_select(&b.0[i], &a.0[i], choice);
        }
        FieldElement2625(out)
    }

    fn conditional_assign(&mut self, other: &FieldElement2625, choice: Choice) {
        for i in 0..10 {
            self.0[i].conditional_assign(&other.0[i], choice);
        }
    }

    fn conditional_swap(a: &mut FieldElement2625, b: &mut FieldElement2625, choice: Choice) {
        for i in 0..10 {
            i32::conditional_swap(&mut a.0[i], &mut b.0[i], choice);
        }
    }
}

/// Multiply two 32-bit signed integers, producing a 64-bit signed result.
#[inline(always)]
fn m(x: i32, y: i32) -> i64 {
    (x as i64) * (y as i64)
}

/// Load the low 32 bits of a byte slice as a little-endian integer.
#[inline]
fn load4(b: &[u8]) -> i64 {
    (b[0] as i64) | ((b[1] as i64) << 8) | ((b[2] as i64) << 16) | ((b[3] as i64) << 24)
}

/// Load the low 24 bits of a byte slice as a little-endian integer.
#[inline]
fn load3(b: &[u8]) -> i64 {
    (b[0] as i64) | ((b[1] as i64) << 8) | ((b[2] as i64) << 16)
}

/// Propagate the carry out of limb `i` (0-indexed, even limbs hold 26
/// bits, odd limbs hold 25) into limb `i + 1`, using a bias so that
/// the arithmetic (sign-extending) right shift rounds to nearest
/// rather than toward zero. This is the step repeated twelve times by
/// [`carry_chain`] and, with a final fold through `h[0]`, by
/// [`FieldElement2625::to_bytes`].
#[inline(always)]
fn carry_step(h: &mut [i64; 10], i: usize) {
    if i % 2 == 0 {
        let c = (h[i] + (1i64 << 25)) >> 26;
        h[i + 1] += c;
        h[i] -= c << 26;
    } else {
        let c = (h[i] + (1i64 << 24)) >> 25;
        h[i + 1] += c;
        h[i] -= c << 25;
    }
}

/// The carry chain shared by `mul`, `sq`, `sq2`, and `from_bytes`
/// (spec.md §4.5): two interleaved passes over the low and high halves,
/// then a wraparound fold of limb 9's overflow into limb 0 via `* 19`
/// (closing the loop modulo \\(2\^{255} - 19\\)), then one more
/// settling step. Twelve carries total, with `h[0]` and `h[4]` each
/// carried twice — the double pass is load-bearing: it broadcasts
/// slack so the later carries cannot overflow `i64`.
fn carry_chain(h: &mut [i64; 10]) {
    carry_step(h, 0);
    carry_step(h, 4);
    carry_step(h, 1);
    carry_step(h, 5);
    carry_step(h, 2);
    carry_step(h, 6);
    carry_step(h, 3);
    carry_step(h, 7);
    carry_step(h, 4);
    carry_step(h, 8);

    let c9 = (h[9] + (1i64 << 24)) >> 25;
    h[0] += c9 * 19;
    h[9] -= c9 << 25;

    carry_step(h, 0);
}

/// Reduce ten unreduced 64-bit accumulators to a `FieldElement2625`
/// whose limbs satisfy the *loose* bounds.
fn reduce(mut h: [i64; 10]) -> FieldElement2625 {
    carry_chain(&mut h);
    FieldElement2625([
        h[0] as i32,
        h[1] as i32,
        h[2] as i32,
        h[3] as i32,
        h[4] as i32,
        h[5] as i32,
        h[6] as i32,
        h[7] as i32,
        h[8] as i32,
        h[9] as i32,
    ])
}

impl FieldElement2625 {
    /// Construct a field element directly from its limbs. Used by
    /// constant tables and tests; the limb layout is otherwise an
    /// implementation detail.
    pub(crate) const fn from_limbs(limbs: [i32; 10]) -> FieldElement2625 {
        FieldElement2625(limbs)
    }

    /// `h = 0`.
    pub fn zero() -> FieldElement2625 {
        FieldElement2625([0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    }

    /// `h = 1`.
    pub fn one() -> FieldElement2625 {
        FieldElement2625([1, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    }

    /// `h = f`. `FieldElement2625` is `Copy`, so this is only provided
    /// for parity with the spec's named operation surface; prefer a
    /// plain `let h = f;` or `*h = f` in new code.
    pub fn copy(&self) -> FieldElement2625 {
        *self
    }

    /// `h = f + g`. Does not reduce — the result satisfies only the
    /// wider post-add bound. Reduction happens lazily, the next time
    /// the value is consumed by `mul`/`sq`/`to_bytes`. Aliasing `f`/`g`
    /// with `self` is fine; this never reads `self` after it starts
    /// writing.
    pub fn add(&self, other: &FieldElement2625) -> FieldElement2625 {
        let mut out = *self;
        out += other;
        out
    }

    /// `h = f - g`. Same bounds and aliasing behavior as `add`.
    pub fn sub(&self, other: &FieldElement2625) -> FieldElement2625 {
        let mut out = [0i32; 10];
        for i in 0..10 {
            out[i] = self.0[i] - other.0[i];
        }
        FieldElement2625(out)
    }

    /// `h = -f`.
    pub fn neg(&self) -> FieldElement2625 {
        let mut out = [0i32; 10];
        for i in 0..10 {
            out[i] = -self.0[i];
        }
        FieldElement2625(out)
    }

    /// `h = f * k` for a small positive integer `k`. The only multiplier
    /// used by higher layers is `121666` (Curve25519's `(A+2)/4`), but
    /// the operation itself is generic in `k`, per spec.md §4.2.
    pub fn mul_small(&self, k: u32) -> FieldElement2625 {
        let k = k as i64;
        let mut h = [0i64; 10];
        for i in 0..10 {
            h[i] = (self.0[i] as i64) * k;
        }
        reduce(h)
    }

    /// `h = f * g`, schoolbook multiplication with reduction folded in
    /// as precomputed `x19`/`x2` scalings of the wrap-around partial
    /// products (spec.md §4.3). Inputs are snapshotted to locals before
    /// any write to `self`/`other`, so `h` may alias either operand.
    pub fn mul(&self, other: &FieldElement2625) -> FieldElement2625 {
        let f = &self.0;
        let g = &other.0;

        let g1_19 = 19 * g[1];
        let g2_19 = 19 * g[2];
        let g3_19 = 19 * g[3];
        let g4_19 = 19 * g[4];
        let g5_19 = 19 * g[5];
        let g6_19 = 19 * g[6];
        let g7_19 = 19 * g[7];
        let g8_19 = 19 * g[8];
        let g9_19 = 19 * g[9];
        let f1_2 = 2 * f[1];
        let f3_2 = 2 * f[3];
        let f5_2 = 2 * f[5];
        let f7_2 = 2 * f[7];
        let f9_2 = 2 * f[9];

        let f0g0 = m(f[0], g[0]);
        let f0g1 = m(f[0], g[1]);
        let f0g2 = m(f[0], g[2]);
        let f0g3 = m(f[0], g[3]);
        let f0g4 = m(f[0], g[4]);
        let f0g5 = m(f[0], g[5]);
        let f0g6 = m(f[0], g[6]);
        let f0g7 = m(f[0], g[7]);
        let f0g8 = m(f[0], g[8]);
        let f0g9 = m(f[0], g[9]);
        let f1g0 = m(f[1], g[0]);
        let f1g1_2 = m(f1_2, g[1]);
        let f1g2 = m(f[1], g[2]);
        let f1g3_2 = m(f1_2, g[3]);
        let f1g4 = m(f[1], g[4]);
        let f1g5_2 = m(f1_2, g[5]);
        let f1g6 = m(f[1], g[6]);
        let f1g7_2 = m(f1_2, g[7]);
        let f1g8 = m(f[1], g[8]);
        let f1g9_38 = m(f1_2, g9_19);
        let f2g0 = m(f[2], g[0]);
        let f2g1 = m(f[2], g[1]);
        let f2g2 = m(f[2], g[2]);
        let f2g3 = m(f[2], g[3]);
        let f2g4 = m(f[2], g[4]);
        let f2g5 = m(f[2], g[5]);
        let f2g6 = m(f[2], g[6]);
        let f2g7 = m(f[2], g[7]);
        let f2g8_19 = m(f[2], g8_19);
        let f2g9_19 = m(f[2], g9_19);
        let f3g0 = m(f[3], g[0]);
        let f3g1_2 = m(f3_2, g[1]);
        let f3g2 = m(f[3], g[2]);
        let f3g3_2 = m(f3_2, g[3]);
        let f3g4 = m(f[3], g[4]);
        let f3g5_2 = m(f3_2, g[5]);
        let f3g6 = m(f[3], g[6]);
        let f3g7_38 = m(f3_2, g7_19);
        let f3g8_19 = m(f[3], g8_19);
        let f3g9_38 = m(f3_2, g9_19);
        let f4g0 = m(f[4], g[0]);
        let f4g1 = m(f[4], g[1]);
        let f4g2 = m(f[4], g[2]);
        let f4g3 = m(f[4], g[3]);
        let f4g4 = m(f[4], g[4]);
        let f4g5 = m(f[4], g[5]);
        let f4g6_19 = m(f[4], g6_19);
        let f4g7_19 = m(f[4], g7_19);
        let f4g8_19 = m(f[4], g8_19);
        let f4g9_19 = m(f[4], g9_19);
        let f5g0 = m(f[5], g[0]);
        let f5g1_2 = m(f5_2, g[1]);
        let f5g2 = m(f[5], g[2]);
        let f5g3_2 = m(f5_2, g[3]);
        let f5g4 = m(f[5], g[4]);
        let f5g5_38 = m(f5_2, g5_19);
        let f5g6_19 = m(f[5], g6_19);
        let f5g7_38 = m(f5_2, g7_19);
        let f5g8_19 = m(f[5], g8_19);
        let f5g9_38 = m(f5_2, g9_19);
        let f6g0 = m(f[6], g[0]);
        let f6g1 = m(f[6], g[1]);
        let f6g2 = m(f[6], g[2]);
        let f6g3 = m(f[6], g[3]);
        let f6g4_19 = m(f[6], g4_19);
        let f6g5_19 = m(f[6], g5_19);
        let f6g6_19 = m(f[6], g6_19);
        let f6g7_19 = m(f[6], g7_19);
        let f6g8_19 = m(f[6], g8_19);
        let f6g9_19 = m(f[6], g9_19);
        let f7g0 = m(f[7], g[0]);
        let f7g1_2 = m(f7_2, g[1]);
        let f7g2 = m(f[7], g[2]);
        let f7g3_38 = m(f7_2, g3_19);
        let f7g4_19 = m(f[7], g4_19);
        let f7g5_38 = m(f7_2, g5_19);
        let f7g6_19 = m(f[7], g6_19);
        let f7g7_38 = m(f7_2, g7_19);
        let f7g8_19 = m(f[7], g8_19);
        let f7g9_38 = m(f7_2, g9_19);
        let f8g0 = m(f[8], g[0]);
        let f8g1 = m(f[8], g[1]);
        let f8g2_19 = m(f[8], g2_19);
        let f8g3_19 = m(f[8], g3_19);
        let f8g4_19 = m(f[8], g4_19);
        let f8g5_19 = m(f[8], g5_19);
        let f8g6_19 = m(f[8], g6_19);
        let f8g7_19 = m(f[8], g7_19);
        let f8g8_19 = m(f[8], g8_19);
        let f8g9_19 = m(f[8], g9_19);
        let f9g0 = m(f[9], g[0]);
        let f9g1_38 = m(f9_2, g1_19);
        let f9g2_19 = m(f[9], g2_19);
        let f9g3_38 = m(f9_2, g3_19);
        let f9g4_19 = m(f[9], g4_19);
        let f9g5_38 = m(f9_2, g5_19);
        let f9g6_19 = m(f[9], g6_19);
        let f9g7_38 = m(f9_2, g7_19);
        let f9g8_19 = m(f[9], g8_19);
        let f9g9_38 = m(f9_2, g9_19);

        let mut h = [0i64; 10];
        h[0] = f0g0 + f1g9_38 + f2g8_19 + f3g7_38 + f4g6_19 + f5g5_38 + f6g4_19 + f7g3_38
            + f8g2_19
            + f9g1_38;
        h[1] = f0g1 + f1g0 + f2g9_19 + f3g8_19 + f4g7_19 + f5g6_19 + f6g5_19 + f7g4_19 + f8g3_19
            + f9g2_19;
        h[2] = f0g2 + f1g1_2 + f2g0 + f3g9_38 + f4g8_19 + f5g7_38 + f6g6_19 + f7g5_38 + f8g4_19
            + f9g3_38;
        h[3] = f0g3 + f1g2 + f2g1 + f3g0 + f4g9_19 + f5g8_19 + f6g7_19 + f7g6_19 + f8g5_19
            + f9g4_19;
        h[4] = f0g4 + f1g3_2 + f2g2 + f3g1_2 + f4g0 + f5g9_38 + f6g8_19 + f7g7_38 + f8g6_19
            + f9g5_38;
        h[5] = f0g5 + f1g4 + f2g3 + f3g2 + f4g1 + f5g0 + f6g9_19 + f7g8_19 + f8g7_19 + f9g6_19;
        h[6] = f0g6 + f1g5_2 + f2g4 + f3g3_2 + f4g2 + f5g1_2 + f6g0 + f7g9_38 + f8g8_19
            + f9g7_38;
        h[7] = f0g7 + f1g6 + f2g5 + f3g4 + f4g3 + f5g2 + f6g1 + f7g0 + f8g9_19 + f9g8_19;
        h[8] = f0g8 + f1g7_2 + f2g6 + f3g5_2 + f4g4 + f5g3_2 + f6g2 + f7g1_2 + f8g0 + f9g9_38;
        h[9] = f0g9 + f1g8 + f2g7 + f3g6 + f4g5 + f5g4 + f6g3 + f7g2 + f8g1 + f9g0;

        reduce(h)
    }

    /// The ten partial-product accumulators shared by `sq` and `sq2`,
    /// before the carry chain runs. Exploits `f_i * f_j = f_j * f_i` to
    /// use roughly half the multiplications `mul` needs.
    fn square_inner(&self) -> [i64; 10] {
        let f = &self.0;
        let f0_2 = 2 * f[0];
        let f1_2 = 2 * f[1];
        let f2_2 = 2 * f[2];
        let f3_2 = 2 * f[3];
        let f4_2 = 2 * f[4];
        let f5_2 = 2 * f[5];
        let f6_2 = 2 * f[6];
        let f7_2 = 2 * f[7];
        let f5_38 = 38 * f[5];
        let f6_19 = 19 * f[6];
        let f7_38 = 38 * f[7];
        let f8_19 = 19 * f[8];
        let f9_38 = 38 * f[9];

        let f0f0 = m(f[0], f[0]);
        let f0f1_2 = m(f0_2, f[1]);
        let f0f2_2 = m(f0_2, f[2]);
        let f0f3_2 = m(f0_2, f[3]);
        let f0f4_2 = m(f0_2, f[4]);
        let f0f5_2 = m(f0_2, f[5]);
        let f0f6_2 = m(f0_2, f[6]);
        let f0f7_2 = m(f0_2, f[7]);
        let f0f8_2 = m(f0_2, f[8]);
        let f0f9_2 = m(f0_2, f[9]);
        let f1f1_2 = m(f1_2, f[1]);
        let f1f2_2 = m(f1_2, f[2]);
        let f1f3_4 = m(f1_2, f3_2);
        let f1f4_2 = m(f1_2, f[4]);
        let f1f5_4 = m(f1_2, f5_2);
        let f1f6_2 = m(f1_2, f[6]);
        let f1f7_4 = m(f1_2, f7_2);
        let f1f8_2 = m(f1_2, f[8]);
        let f1f9_76 = m(f1_2, f9_38);
        let f2f2 = m(f[2], f[2]);
        let f2f3_2 = m(f2_2, f[3]);
        let f2f4_2 = m(f2_2, f[4]);
        let f2f5_2 = m(f2_2, f[5]);
        let f2f6_2 = m(f2_2, f[6]);
        let f2f7_2 = m(f2_2, f[7]);
        let f2f8_38 = m(f2_2, f8_19);
        let f2f9_38 = m(f[2], f9_38);
        let f3f3_2 = m(f3_2, f[3]);
        let f3f4_2 = m(f3_2, f[4]);
        let f3f5_4 = m(f3_2, f5_2);
        let f3f6_2 = m(f3_2, f[6]);
        let f3f7_76 = m(f3_2, f7_38);
        let f3f8_38 = m(f3_2, f8_19);
        let f3f9_76 = m(f3_2, f9_38);
        let f4f4 = m(f[4], f[4]);
        let f4f5_2 = m(f4_2, f[5]);
        let f4f6_38 = m(f4_2, f6_19);
        let f4f7_38 = m(f[4], f7_38);
        let f4f8_38 = m(f4_2, f8_19);
        let f4f9_38 = m(f[4], f9_38);
        let f5f5_38 = m(f[5], f5_38);
        let f5f6_38 = m(f5_2, f6_19);
        let f5f7_76 = m(f5_2, f7_38);
        let f5f8_38 = m(f5_2, f8_19);
        let f5f9_76 = m(f5_2, f9_38);
        let f6f6_19 = m(f[6], f6_19);
        let f6f7_38 = m(f[6], f7_38);
        let f6f8_38 = m(f6_2, f8_19);
        let f6f9_38 = m(f[6], f9_38);
        let f7f7_38 = m(f[7], f7_38);
        let f7f8_38 = m(f7_2, f8_19);
        let f7f9_76 = m(f7_2, f9_38);
        let f8f8_19 = m(f[8], f8_19);
        let f8f9_38 = m(f[8], f9_38);
        let f9f9_38 = m(f[9], f9_38);

        let mut h = [0i64; 10];
        h[0] = f0f0 + f1f9_76 + f2f8_38 + f3f7_76 + f4f6_38 + f5f5_38;
        h[1] = f0f1_2 + f2f9_38 + f3f8_38 + f4f7_38 + f5f6_38;
        h[2] = f0f2_2 + f1f1_2 + f3f9_76 + f4f8_38 + f5f7_76 + f6f6_19;
        h[3] = f0f3_2 + f1f2_2 + f4f9_38 + f5f8_38 + f6f7_38;
        h[4] = f0f4_2 + f1f3_4 + f2f2 + f5f9_76 + f6f8_38 + f7f7_38;
        h[5] = f0f5_2 + f1f4_2 + f2f3_2 + f6f9_38 + f7f8_38;
        h[6] = f0f6_2 + f1f5_4 + f2f4_2 + f3f3_2 + f7f9_76 + f8f8_19;
        h[7] = f0f7_2 + f1f6_2 + f2f5_2 + f3f4_2 + f8f9_38;
        h[8] = f0f8_2 + f1f7_4 + f2f6_2 + f3f5_4 + f4f4 + f9f9_38;
        h[9] = f0f9_2 + f1f8_2 + f2f7_2 + f3f6_2 + f4f5_2;
        h
    }

    /// `h = f * f`.
    pub fn sq(&self) -> FieldElement2625 {
        reduce(self.square_inner())
    }

    /// `h = 2 * f * f`. Fuses the doubling into the squaring's carry
    /// chain, saving a reduction pass over computing `sq(f) + sq(f)`
    /// (Edwards point doubling needs `2*X^2` as a subexpression).
    pub fn sq2(&self) -> FieldElement2625 {
        let mut h = self.square_inner();
        for x in h.iter_mut() {
            *x += *x;
        }
        reduce(h)
    }

    /// Given `k > 0`, return `self^(2^k)` by repeated squaring.
    pub(crate) fn pow2k(&self, k: u32) -> FieldElement2625 {
        debug_assert!(k > 0);
        let mut z = self.sq();
        for _ in 1..k {
            z = z.sq();
        }
        z
    }

    /// Decode a field element from the low 255 bits of a 256-bit
    /// little-endian input. The top bit of `data[31]` is masked off and
    /// ignored (§6: "the high bit of byte 31 is ignored"); this does
    /// not check that the input was the canonical representative of its
    /// residue class — `s` and `s - p` (if `s >= p`) decode to the same
    /// field element, reduced mod p by the carry chain's wraparound.
    pub fn from_bytes(data: &[u8; 32]) -> FieldElement2625 {
        const LOW_23_BITS: i64 = (1 << 23) - 1;
        let mut h = [0i64; 10];
        h[0] = load4(&data[0..]);
        h[1] = load3(&data[4..]) << 6;
        h[2] = load3(&data[7..]) << 5;
        h[3] = load3(&data[10..]) << 3;
        h[4] = load3(&data[13..]) << 2;
        h[5] = load4(&data[16..]);
        h[6] = load3(&data[20..]) << 7;
        h[7] = load3(&data[23..]) << 5;
        h[8] = load3(&data[26..]) << 4;
        h[9] = (load3(&data[29..]) & LOW_23_BITS) << 2;

        reduce(h)
    }

    /// Encode this field element as its canonical 32-byte little-endian
    /// representative \\(r \in [0, p)\\). Unlike every other operation
    /// in this module, `to_bytes` normalizes its input: it computes the
    /// one-bit quotient `q = floor((h + 19) / 2^255)` (so `q` is 1 iff
    /// `h >= p`), subtracts `p * q`, and only then packs the result.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut h = self.0;

        // q = 1 iff the value represented by `h` is >= p. Computed as
        // the final carry bit of `h + 19`, since h < 2*p after any
        // sequence of ops bounded by the loose/post-add invariants.
        let mut q = (19 * h[9] + (1 << 24)) >> 25;
        q = (h[0] + q) >> 26;
        q = (h[1] + q) >> 25;
        q = (h[2] + q) >> 26;
        q = (h[3] + q) >> 25;
        q = (h[4] + q) >> 26;
        q = (h[5] + q) >> 25;
        q = (h[6] + q) >> 26;
        q = (h[7] + q) >> 25;
        q = (h[8] + q) >> 26;
        q = (h[9] + q) >> 25;
        debug_assert!(q == 0 || q == 1);

        // h - (2^255 - 19) * q = h + 19*q - 2^255*q: add 19*q, then
        // carry one-directionally and drop the final overflow out of
        // h[9] instead of folding it back (that overflow is exactly
        // 2^255 * q, which this subtraction is designed to cancel).
        h[0] += 19 * q;

        let mut carry = [0i32; 10];
        carry[0] = h[0] >> 26;
        h[1] += carry[0];
        h[0] -= carry[0] << 26;
        carry[1] = h[1] >> 25;
        h[2] += carry[1];
        h[1] -= carry[1] << 25;
        carry[2] = h[2] >> 26;
        h[3] += carry[2];
        h[2] -= carry[2] << 26;
        carry[3] = h[3] >> 25;
        h[4] += carry[3];
        h[3] -= carry[3] << 25;
        carry[4] = h[4] >> 26;
        h[5] += carry[4];
        h[4] -= carry[4] << 26;
        carry[5] = h[5] >> 25;
        h[6] += carry[5];
        h[5] -= carry[5] << 25;
        carry[6] = h[6] >> 26;
        h[7] += carry[6];
        h[6] -= carry[6] << 26;
        carry[7] = h[7] >> 25;
        h[8] += carry[7];
        h[7] -= carry[7] << 25;
        carry[8] = h[8] >> 26;
        h[9] += carry[8];
        h[8] -= carry[8] << 26;
        let carry9 = h[9] >> 25;
        h[9] -= carry9 << 25;
        // The discarded carry9 is exactly q*2^255/2^230 worth of
        // overflow out of h[9]; it cancels the 2^255*q we subtracted
        // above and is never folded back.

        let h = [
            h[0] as u32,
            h[1] as u32,
            h[2] as u32,
            h[3] as u32,
            h[4] as u32,
            h[5] as u32,
            h[6] as u32,
            h[7] as u32,
            h[8] as u32,
            h[9] as u32,
        ];

        let mut s = [0u8; 32];
        s[0] = h[0] as u8;
        s[1] = (h[0] >> 8) as u8;
        s[2] = (h[0] >> 16) as u8;
        s[3] = ((h[0] >> 24) | (h[1] << 2)) as u8;
        s[4] = (h[1] >> 6) as u8;
        s[5] = (h[1] >> 14) as u8;
        s[6] = ((h[1] >> 22) | (h[2] << 3)) as u8;
        s[7] = (h[2] >> 5) as u8;
        s[8] = (h[2] >> 13) as u8;
        s[9] = ((h[2] >> 21) | (h[3] << 5)) as u8;
        s[10] = (h[3] >> 3) as u8;
        s[11] = (h[3] >> 11) as u8;
        s[12] = ((h[3] >> 19) | (h[4] << 6)) as u8;
        s[13] = (h[4] >> 2) as u8;
        s[14] = (h[4] >> 10) as u8;
        s[15] = (h[4] >> 18) as u8;
        s[16] = h[5] as u8;
        s[17] = (h[5] >> 8) as u8;
        s[18] = (h[5] >> 16) as u8;
        s[19] = ((h[5] >> 24) | (h[6] << 1)) as u8;
        s[20] = (h[6] >> 7) as u8;
        s[21] = (h[6] >> 15) as u8;
        s[22] = ((h[6] >> 23) | (h[7] << 3)) as u8;
        s[23] = (h[7] >> 5) as u8;
        s[24] = (h[7] >> 13) as u8;
        s[25] = ((h[7] >> 21) | (h[8] << 4)) as u8;
        s[26] = (h[8] >> 4) as u8;
        s[27] = (h[8] >> 12) as u8;
        s[28] = ((h[8] >> 20) | (h[9] << 6)) as u8;
        s[29] = (h[9] >> 2) as u8;
        s[30] = (h[9] >> 10) as u8;
        s[31] = (h[9] >> 18) as u8;

        debug_assert_eq!(s[31] & 0b1000_0000, 0);

        s
    }

    /// The sign of this field element, defined as the low bit of its
    /// canonical encoding (spec.md §4.7). Goes through `to_bytes`, so
    /// it is constant-time in the limbs of `self`.
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// Returns `1` if `self != 0` and `0` if `self == 0`. Named
    /// `is_nonzero` rather than the historical `is_zero`, per the naming
    /// convention note in spec.md §9: the returned value is the
    /// *nonzero* indicator, and a function named after the condition it
    /// actually tests avoids the well-known off-by-negation confusion.
    /// This fills the "`is_zero`" slot in the operation inventory of
    /// spec.md §2/§6.
    pub fn is_nonzero(&self) -> Choice {
        let bytes = self.to_bytes();
        let mut r = 0u8;
        for b in bytes.iter() {
            r |= b;
        }
        r.ct_ne(&0)
    }

    /// `(f, g) <- (g, g)` if `choice == 1`, else unchanged. Data-oblivious:
    /// backed by [`subtle::ConditionallySelectable::conditional_assign`],
    /// which masks rather than branches.
    pub fn cmov(&mut self, other: &FieldElement2625, choice: Choice) {
        self.conditional_assign(other, choice);
    }

    /// `(f, g) <- (g, f)` if `choice == 1`, else unchanged. Backed by
    /// [`subtle::ConditionallySelectable::conditional_swap`].
    pub fn cswap(a: &mut FieldElement2625, b: &mut FieldElement2625, choice: Choice) {
        <FieldElement2625 as ConditionallySelectable>::conditional_swap(a, b, choice);
    }

    /// `z^(p-2) = z^(2^255 - 21) mod p`, the multiplicative inverse of
    /// `z` by Fermat's little theorem (`z` must be nonzero; `invert`
    /// does not check this — see spec.md §7). Follows the standard
    /// Curve25519 addition chain: build `z^(2^n - 1)` for
    /// `n in {2, 5, 10, 20, 50, 100, 250}`, each step one squaring
    /// ladder plus one multiplication, then five more squarings and a
    /// final multiply by `z^11`. 254 squarings, 11 multiplications, no
    /// allocation.
    pub fn invert(&self) -> FieldElement2625 {
        // z2 = z^2
        let z2 = self.sq();
        // z8 = z2^(2^2) = z^8
        let z8 = z2.pow2k(2);
        // z9 = z * z8 = z^9
        let z9 = self.mul(&z8);
        // z11 = z2 * z9 = z^11
        let z11 = z2.mul(&z9);
        // z22 = z11^2 = z^22
        let z22 = z11.sq();
        // z_5_0 = z9 * z22 = z^(2^5 - 1)
        let z_5_0 = z9.mul(&z22);

        let z_10_5 = z_5_0.pow2k(5);
        let z_10_0 = z_10_5.mul(&z_5_0);

        let z_20_10 = z_10_0.pow2k(10);
        let z_20_0 = z_20_10.mul(&z_10_0);

        let z_40_20 = z_20_0.pow2k(20);
        let z_40_0 = z_40_20.mul(&z_20_0);

        let z_50_10 = z_40_0.pow2k(10);
        let z_50_0 = z_50_10.mul(&z_10_0);

        let z_100_50 = z_50_0.pow2k(50);
        let z_100_0 = z_100_50.mul(&z_50_0);

        let z_200_100 = z_100_0.pow2k(100);
        let z_200_0 = z_200_100.mul(&z_100_0);

        let z_250_50 = z_200_0.pow2k(50);
        let z_250_0 = z_250_50.mul(&z_50_0);

        let z_255_5 = z_250_0.pow2k(5);
        z_255_5.mul(&z11)
    }

    /// `z^((p-5)/8) = z^(2^252 - 3) mod p`, used by higher layers to
    /// compute square roots / inverse square roots in Edwards
    /// arithmetic. Shares the first part of `invert`'s addition chain
    /// and terminates two steps earlier.
    pub fn pow_p58(&self) -> FieldElement2625 {
        let z2 = self.sq();
        let z8 = z2.pow2k(2);
        let z9 = self.mul(&z8);
        let z11 = z2.mul(&z9);
        let z22 = z11.sq();
        let z_5_0 = z9.mul(&z22);

        let z_10_5 = z_5_0.pow2k(5);
        let z_10_0 = z_10_5.mul(&z_5_0);

        let z_20_10 = z_10_0.pow2k(10);
        let z_20_0 = z_20_10.mul(&z_10_0);

        let z_40_20 = z_20_0.pow2k(20);
        let z_40_0 = z_40_20.mul(&z_20_0);

        let z_50_10 = z_40_0.pow2k(10);
        let z_50_0 = z_50_10.mul(&z_10_0);

        let z_100_50 = z_50_0.pow2k(50);
        let z_100_0 = z_100_50.mul(&z_50_0);

        let z_200_100 = z_100_0.pow2k(100);
        let z_200_0 = z_200_100.mul(&z_100_0);

        let z_250_50 = z_200_0.pow2k(50);
        let z_250_0 = z_250_50.mul(&z_50_0);

        let z_252_2 = z_250_0.pow2k(2);
        z_252_2.mul(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two() -> FieldElement2625 {
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        FieldElement2625::from_bytes(&bytes)
    }

    #[test]
    fn zero_encodes_to_zero() {
        assert_eq!(FieldElement2625::zero().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn one_encodes_to_one() {
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(FieldElement2625::one().to_bytes(), expected);
    }

    #[test]
    fn p_minus_one_round_trips_and_wraps() {
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0xec;
        bytes[31] = 0x7f;
        let p_minus_one = FieldElement2625::from_bytes(&bytes);
        assert_eq!(p_minus_one.to_bytes(), bytes);

        let wrapped = p_minus_one.add(&FieldElement2625::one());
        assert_eq!(wrapped.to_bytes(), [0u8; 32]);
    }

    #[test]
    fn non_canonical_input_reduces() {
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0xed;
        bytes[31] = 0x7f;
        let p = FieldElement2625::from_bytes(&bytes);
        assert_eq!(p.to_bytes(), [0u8; 32]);
    }

    #[test]
    fn high_bit_of_last_byte_is_ignored() {
        let mut with_bit = [0u8; 32];
        with_bit[0] = 7;
        with_bit[31] = 0x80;
        let mut without_bit = [0u8; 32];
        without_bit[0] = 7;

        assert_eq!(
            FieldElement2625::from_bytes(&with_bit).to_bytes(),
            FieldElement2625::from_bytes(&without_bit).to_bytes()
        );
    }

    #[test]
    fn invert_of_two() {
        let inv = two().invert();
        let mut expected = [0xffu8; 32];
        expected[0] = 0xf7;
        expected[31] = 0x3f;
        assert_eq!(inv.to_bytes(), expected);
    }

    #[test]
    fn cswap_toggles() {
        let f0 = two();
        let g0 = FieldElement2625::one();
        let mut f = f0;
        let mut g = g0;

        FieldElement2625::cswap(&mut f, &mut g, Choice::from(1));
        assert_eq!(f.to_bytes(), g0.to_bytes());
        assert_eq!(g.to_bytes(), f0.to_bytes());

        FieldElement2625::cswap(&mut f, &mut g, Choice::from(1));
        assert_eq!(f.to_bytes(), f0.to_bytes());
        assert_eq!(g.to_bytes(), g0.to_bytes());
    }

    #[test]
    fn cswap_noop_when_choice_is_zero() {
        let f0 = two();
        let g0 = FieldElement2625::one();
        let mut f = f0;
        let mut g = g0;

        FieldElement2625::cswap(&mut f, &mut g, Choice::from(0));
        assert_eq!(f.to_bytes(), f0.to_bytes());
        assert_eq!(g.to_bytes(), g0.to_bytes());
    }

    #[test]
    fn cmov_semantics() {
        let f0 = FieldElement2625::one();
        let g = two();

        let mut f = f0;
        f.cmov(&g, Choice::from(0));
        assert_eq!(f.to_bytes(), f0.to_bytes());

        let mut f = f0;
        f.cmov(&g, Choice::from(1));
        assert_eq!(f.to_bytes(), g.to_bytes());
    }

    #[test]
    fn sq_matches_mul_self() {
        let f = two();
        assert_eq!(f.sq().to_bytes(), f.mul(&f).to_bytes());
    }

    #[test]
    fn sq2_doubles_sq() {
        let f = two();
        let doubled = f.sq().add(&f.sq());
        assert_eq!(f.sq2().to_bytes(), doubled.to_bytes());
    }

    #[test]
    fn mul_small_matches_mul() {
        let f = two();
        let mut k_bytes = [0u8; 32];
        k_bytes[0] = 0x42;
        k_bytes[1] = 0xdb;
        k_bytes[2] = 0x01; // 121666 little-endian
        let k = FieldElement2625::from_bytes(&k_bytes);
        assert_eq!(f.mul_small(121666).to_bytes(), f.mul(&k).to_bytes());
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        let f = two();
        let product = f.mul(&f.invert());
        assert_eq!(product.to_bytes(), FieldElement2625::one().to_bytes());
    }

    #[test]
    fn is_negative_and_is_nonzero() {
        assert_eq!(FieldElement2625::zero().is_nonzero().unwrap_u8(), 0);
        assert_eq!(FieldElement2625::one().is_nonzero().unwrap_u8(), 1);
        // 1 is odd, so its canonical encoding has low bit set.
        assert_eq!(FieldElement2625::one().is_negative().unwrap_u8(), 1);
        // 2 is even.
        assert_eq!(two().is_negative().unwrap_u8(), 0);
    }
}
