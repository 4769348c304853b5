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

//! The public field-element type.
//!
//! This module re-exports the current backend's implementation under a
//! single stable name, [`FieldElement`], the way `curve25519-dalek`
//! selects among its serial/vector backends. Only one backend
//! (`backend::serial::u32`) is implemented, so the selection is not
//! actually conditional today, but callers should depend on this path
//! rather than `crate::backend::*` directly.

use crate::backend::serial::u32::field::FieldElement2625;

/// An element of the field \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// See the [crate-level documentation](crate) for the scope of what
/// this type supports, and [`backend::serial::u32::field`] for the
/// representation and algorithms.
///
/// [`backend::serial::u32::field`]: crate::backend::serial::u32::field
pub type FieldElement = FieldElement2625;

#[cfg(feature = "serde")]
mod serde_support {
    use super::FieldElement;
    use serde::de::Visitor;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Field elements serialize to and from their canonical 32-byte
    /// little-endian encoding ([`FieldElement::to_bytes`] /
    /// [`FieldElement::from_bytes`]) — never the raw limb array, which
    /// is not a canonical representation of the value (see the crate's
    /// data-model notes).
    impl Serialize for FieldElement {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }

    struct FieldElementVisitor;

    impl<'de> Visitor<'de> for FieldElementVisitor {
        type Value = FieldElement;

        fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            formatter.write_str("32 bytes of data")
        }

        fn visit_bytes<E>(self, bytes: &[u8]) -> Result<FieldElement, E>
        where
            E: serde::de::Error,
        {
            if bytes.len() != 32 {
                return Err(serde::de::Error::invalid_length(bytes.len(), &self));
            }
            let mut arr = [0u8; 32];
            arr.copy_from_slice(bytes);
            Ok(FieldElement::from_bytes(&arr))
        }
    }

    impl<'de> Deserialize<'de> for FieldElement {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_bytes(FieldElementVisitor)
        }
    }
}
