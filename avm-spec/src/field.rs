//! Native field elements for the AVM
//!
//! The rollup circuits operate over the BN254 scalar field:
//!
//! p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//!
//! Values are stored in canonical form (0 <= value < p) as four 64-bit
//! little-endian limbs. This core only needs construction, equality, and limb
//! access; field arithmetic belongs to the arithmetic instruction family and
//! lives elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;

/// BN254 scalar field modulus as little-endian u64 limbs.
pub const FIELD_MODULUS: [u64; 4] = [
    0x43E1_F593_F000_0001,
    0x2833_E848_79B9_7091,
    0xB850_45B6_8181_585D,
    0x3064_4E72_E131_A029,
];

/// A BN254 scalar field element in canonical form.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldElement {
    /// Little-endian limbs, always < FIELD_MODULUS
    limbs: [u64; 4],
}

impl FieldElement {
    pub const ZERO: Self = FieldElement { limbs: [0; 4] };
    pub const ONE: Self = FieldElement { limbs: [1, 0, 0, 0] };

    /// Create a field element from little-endian limbs, subtracting the
    /// modulus once if the value is out of canonical range. Inputs are
    /// expected to be at most one modulus above range.
    pub fn from_limbs(limbs: [u64; 4]) -> Self {
        if geq(&limbs, &FIELD_MODULUS) {
            FieldElement {
                limbs: sub(&limbs, &FIELD_MODULUS),
            }
        } else {
            FieldElement { limbs }
        }
    }

    /// Create a field element from a u128 magnitude. The modulus exceeds
    /// 2^253, so every u128 is already canonical.
    pub const fn from_u128(value: u128) -> Self {
        FieldElement {
            limbs: [value as u64, (value >> 64) as u64, 0, 0],
        }
    }

    /// Little-endian limb representation.
    pub const fn to_limbs(self) -> [u64; 4] {
        self.limbs
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.limbs[0] == 0 && self.limbs[1] == 0 && self.limbs[2] == 0 && self.limbs[3] == 0
    }
}

/// a >= b over little-endian limbs
fn geq(a: &[u64; 4], b: &[u64; 4]) -> bool {
    for i in (0..4).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

/// a - b over little-endian limbs, assuming a >= b
fn sub(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let mut out = [0u64; 4];
    let mut borrow = false;
    for i in 0..4 {
        let (d, b1) = a[i].overflowing_sub(b[i]);
        let (d, b2) = d.overflowing_sub(borrow as u64);
        out[i] = d;
        borrow = b1 || b2;
    }
    out
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FieldElement(0x{:016x}{:016x}{:016x}{:016x})",
            self.limbs[3], self.limbs[2], self.limbs[1], self.limbs[0]
        )
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            self.limbs[3], self.limbs[2], self.limbs[1], self.limbs[0]
        )
    }
}

impl From<u128> for FieldElement {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::from_u128(value as u128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_one() {
        assert!(FieldElement::ZERO.is_zero());
        assert!(!FieldElement::ONE.is_zero());
        assert_eq!(FieldElement::from_u128(0), FieldElement::ZERO);
        assert_eq!(FieldElement::from_u128(1), FieldElement::ONE);
    }

    #[test]
    fn test_from_u128_roundtrip() {
        let v = FieldElement::from_u128(u128::MAX);
        assert_eq!(v.to_limbs(), [u64::MAX, u64::MAX, 0, 0]);
    }

    #[test]
    fn test_from_limbs_reduces_modulus() {
        // p itself reduces to zero
        let p = FieldElement::from_limbs(FIELD_MODULUS);
        assert!(p.is_zero());

        // p + 1 reduces to one
        let mut limbs = FIELD_MODULUS;
        limbs[0] += 1;
        assert_eq!(FieldElement::from_limbs(limbs), FieldElement::ONE);
    }

    #[test]
    fn test_from_limbs_canonical_untouched() {
        let v = FieldElement::from_limbs([42, 0, 0, 0]);
        assert_eq!(v.to_limbs(), [42, 0, 0, 0]);
    }

    #[test]
    fn test_display() {
        let v = FieldElement::from_u128(0xAB);
        assert!(v.to_string().ends_with("ab"));
    }
}
