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

//! Pluggable implementations for the field arithmetic.
//!
//! The only backend implemented here is [`serial::u32`], a portable
//! ten-limb (mixed 26/25-bit radix) implementation. A wider-limb
//! (`u64`) or vectorized (SIMD) backend would live as a sibling module
//! under `serial` / a new `vector` module respectively — this crate
//! does not need them (see the Non-goals in `SPEC_FULL.md` §9), but the
//! module path is left where the next backend would go, matching the
//! layout `curve25519-dalek` itself uses.

pub(crate) mod serial;
