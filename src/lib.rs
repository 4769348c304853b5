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

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/dalek-cryptography/curve25519-dalek/main/docs/assets/dalek-logo-clear.png"
)]
#![deny(missing_docs)]

//! A pure-Rust implementation of constant-time field arithmetic modulo
//! \\(p = 2\^{255} - 19\\), the prime underlying Curve25519 and
//! Edwards25519.
//!
//! This crate implements exactly the field layer: the
//! [`FieldElement`](field::FieldElement) type and the primitive
//! operations (`add`, `sub`, `neg`, `mul`, `sq`, `sq2`, `mul_small`,
//! `invert`, `pow_p58`, `cmov`/`cswap`, byte encode/decode, and the
//! zero/sign predicates) that a higher layer composes into point
//! arithmetic, Diffie-Hellman, and signatures. Those higher layers —
//! point addition, scalar multiplication, key agreement, hashing,
//! random-number sourcing — are explicitly out of scope here; see the
//! crate's `SPEC_FULL.md` for the full boundary.
//!
//! Every operation in this crate is a pure function of its inputs: there
//! is no shared mutable state, no I/O, and no allocation. The entire
//! surface is designed to execute a control-flow and memory-access
//! pattern independent of secret operand values (see the module docs on
//! [`field`] for which operations this applies to).

mod backend;

pub mod field;
