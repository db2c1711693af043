//! Tagged values and their bitwise algebra
//!
//! An [`IntegralValue`] is a fixed-width unsigned integer carrying one of the
//! integral [`TypeTag`]s. Its magnitude always lies in `[0, 2^w - 1]` for the
//! tag's width `w`; every operation that could exceed that range truncates
//! modulo `2^w` before the result is observable. Operations are implemented
//! once over the shared `(tag, magnitude)` representation rather than per
//! width, so truncation is a single code path.
//!
//! Mixed-width operands are a hard [`TagError::TagMismatch`], never an
//! implicit coercion.

use crate::error::TagError;
use crate::field::FieldElement;
use crate::tag::TypeTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tagged, fixed-width unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegralValue {
    tag: TypeTag,
    value: u128,
}

impl IntegralValue {
    /// Create a value with the given integral tag, truncating the magnitude
    /// to the tag's width. Fails if `tag` is not integral.
    pub fn new(tag: TypeTag, value: u128) -> Result<Self, TagError> {
        let mask = tag.mask().ok_or(TagError::NotIntegral(tag))?;
        Ok(IntegralValue {
            tag,
            value: value & mask,
        })
    }

    pub fn uint8(value: u8) -> Self {
        IntegralValue {
            tag: TypeTag::Uint8,
            value: value as u128,
        }
    }

    pub fn uint16(value: u16) -> Self {
        IntegralValue {
            tag: TypeTag::Uint16,
            value: value as u128,
        }
    }

    pub fn uint32(value: u32) -> Self {
        IntegralValue {
            tag: TypeTag::Uint32,
            value: value as u128,
        }
    }

    pub fn uint64(value: u64) -> Self {
        IntegralValue {
            tag: TypeTag::Uint64,
            value: value as u128,
        }
    }

    pub fn uint128(value: u128) -> Self {
        IntegralValue {
            tag: TypeTag::Uint128,
            value,
        }
    }

    #[inline]
    pub const fn tag(self) -> TypeTag {
        self.tag
    }

    #[inline]
    pub const fn magnitude(self) -> u128 {
        self.value
    }

    /// Bit width of this value's tag.
    #[inline]
    pub fn bits(self) -> u32 {
        // tag is integral by construction
        self.tag.bits().unwrap_or(0)
    }

    #[inline]
    fn mask(self) -> u128 {
        self.tag.mask().unwrap_or(0)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    fn check_same_tag(self, rhs: Self) -> Result<(), TagError> {
        if self.tag != rhs.tag {
            return Err(TagError::TagMismatch {
                expected: self.tag,
                found: rhs.tag,
            });
        }
        Ok(())
    }

    /// Bitwise AND over matching tags.
    pub fn and(self, rhs: Self) -> Result<Self, TagError> {
        self.check_same_tag(rhs)?;
        Ok(IntegralValue {
            tag: self.tag,
            value: self.value & rhs.value,
        })
    }

    /// Bitwise OR over matching tags.
    pub fn or(self, rhs: Self) -> Result<Self, TagError> {
        self.check_same_tag(rhs)?;
        Ok(IntegralValue {
            tag: self.tag,
            value: self.value | rhs.value,
        })
    }

    /// Bitwise XOR over matching tags.
    pub fn xor(self, rhs: Self) -> Result<Self, TagError> {
        self.check_same_tag(rhs)?;
        Ok(IntegralValue {
            tag: self.tag,
            value: self.value ^ rhs.value,
        })
    }

    /// Bitwise complement restricted to the tag's width. Bits above the
    /// width stay zero; a 16-bit NOT never produces a value >= 2^16.
    pub fn not(self) -> Self {
        IntegralValue {
            tag: self.tag,
            value: !self.value & self.mask(),
        }
    }

    /// Logical left shift, truncated to the tag's width. A shift amount at
    /// or beyond the width yields zero; otherwise bits shifted past the
    /// width are dropped, never widened or saturated.
    pub fn shl(self, shift: Self) -> Result<Self, TagError> {
        self.check_same_tag(shift)?;
        let bits = self.bits() as u128;
        let value = if shift.value >= bits {
            0
        } else {
            (self.value << shift.value as u32) & self.mask()
        };
        Ok(IntegralValue {
            tag: self.tag,
            value,
        })
    }

    /// Logical right shift. A shift amount at or beyond the width yields
    /// zero.
    pub fn shr(self, shift: Self) -> Result<Self, TagError> {
        self.check_same_tag(shift)?;
        let bits = self.bits() as u128;
        let value = if shift.value >= bits {
            0
        } else {
            self.value >> shift.value as u32
        };
        Ok(IntegralValue {
            tag: self.tag,
            value,
        })
    }

    /// Interpret the magnitude as an unsigned integer reduced into the
    /// native field. The field modulus exceeds 2^128, so the reduction is
    /// value-preserving.
    pub fn to_field(self) -> FieldElement {
        FieldElement::from_u128(self.value)
    }
}

impl fmt::Display for IntegralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#x})", self.tag, self.value)
    }
}

/// A value held in one AVM memory slot: integral or field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaggedValue {
    Integral(IntegralValue),
    Field(FieldElement),
}

impl TaggedValue {
    pub fn tag(&self) -> TypeTag {
        match self {
            TaggedValue::Integral(v) => v.tag(),
            TaggedValue::Field(_) => TypeTag::Field,
        }
    }

    /// Extract the integral value, failing on a field slot.
    pub fn as_integral(&self) -> Result<IntegralValue, TagError> {
        match self {
            TaggedValue::Integral(v) => Ok(*v),
            TaggedValue::Field(_) => Err(TagError::NotIntegral(TypeTag::Field)),
        }
    }

    /// Convert to a field element: field values pass through, integral
    /// magnitudes are reduced into the field.
    pub fn to_field(&self) -> FieldElement {
        match self {
            TaggedValue::Integral(v) => v.to_field(),
            TaggedValue::Field(f) => *f,
        }
    }
}

impl From<IntegralValue> for TaggedValue {
    fn from(value: IntegralValue) -> Self {
        TaggedValue::Integral(value)
    }
}

impl From<FieldElement> for TaggedValue {
    fn from(value: FieldElement) -> Self {
        TaggedValue::Field(value)
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaggedValue::Integral(v) => write!(f, "{}", v),
            TaggedValue::Field(v) => write!(f, "FIELD({})", v),
        }
    }
}
