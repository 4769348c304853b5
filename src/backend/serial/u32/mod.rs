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

//! A 32-bit implementation of the field arithmetic, suitable for any
//! target where 64-bit multiplication of two 32-bit operands is cheap
//! (i.e. essentially everywhere — this is the portable fallback).

pub mod field;
