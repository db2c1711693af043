//! Type tags for AVM memory values
//!
//! Every value held in AVM memory carries exactly one tag identifying its
//! kind: one of the fixed-width unsigned integer widths, or a native field
//! element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for the kind and width of a tagged memory value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    /// 8-bit unsigned integer
    Uint8,
    /// 16-bit unsigned integer
    Uint16,
    /// 32-bit unsigned integer
    Uint32,
    /// 64-bit unsigned integer
    Uint64,
    /// 128-bit unsigned integer
    Uint128,
    /// Native field element
    Field,
}

impl TypeTag {
    /// Bit width of an integral tag. `None` for `Field`.
    pub const fn bits(self) -> Option<u32> {
        match self {
            TypeTag::Uint8 => Some(8),
            TypeTag::Uint16 => Some(16),
            TypeTag::Uint32 => Some(32),
            TypeTag::Uint64 => Some(64),
            TypeTag::Uint128 => Some(128),
            TypeTag::Field => None,
        }
    }

    /// Whether this tag names a fixed-width unsigned integer.
    pub const fn is_integral(self) -> bool {
        !matches!(self, TypeTag::Field)
    }

    /// All-ones mask covering an integral tag's width. `None` for `Field`.
    pub const fn mask(self) -> Option<u128> {
        match self {
            TypeTag::Uint8 => Some(0xFF),
            TypeTag::Uint16 => Some(0xFFFF),
            TypeTag::Uint32 => Some(0xFFFF_FFFF),
            TypeTag::Uint64 => Some(0xFFFF_FFFF_FFFF_FFFF),
            TypeTag::Uint128 => Some(u128::MAX),
            TypeTag::Field => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Uint8 => "UINT8",
            TypeTag::Uint16 => "UINT16",
            TypeTag::Uint32 => "UINT32",
            TypeTag::Uint64 => "UINT64",
            TypeTag::Uint128 => "UINT128",
            TypeTag::Field => "FIELD",
        };
        write!(f, "{}", name)
    }
}
