//! Tagged memory subsystem
//!
//! An offset-addressed map of tagged values, owned exclusively by one
//! machine state. Offsets are sparse; a slot exists only once written.
//! Reading a slot that was never written is a hard
//! [`RuntimeError::UninitializedRead`], never an implicit zero-fill, so
//! bytecode that relies on default memory contents is rejected rather than
//! silently replayed.

use crate::error::{Result, RuntimeError};
use avm_spec::{IntegralValue, MemoryOffset, TaggedValue};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TaggedMemory {
    slots: HashMap<MemoryOffset, TaggedValue>,
}

impl TaggedMemory {
    pub fn new() -> Self {
        TaggedMemory {
            slots: HashMap::new(),
        }
    }

    /// Read the tagged value at `offset`.
    pub fn get(&self, offset: MemoryOffset) -> Result<TaggedValue> {
        self.slots
            .get(&offset)
            .copied()
            .ok_or(RuntimeError::UninitializedRead { offset })
    }

    /// Read the value at `offset`, asserting it is an integral slot.
    pub fn get_integral(&self, offset: MemoryOffset) -> Result<IntegralValue> {
        let value = self.get(offset)?;
        value
            .as_integral()
            .map_err(|_| RuntimeError::ExpectedIntegral {
                offset,
                found: value.tag(),
            })
    }

    /// Write `value` to `offset`, replacing any prior value and tag.
    pub fn set(&mut self, offset: MemoryOffset, value: impl Into<TaggedValue>) {
        self.slots.insert(offset, value.into());
    }

    /// Read `length` values starting at `offset`, in increasing offset
    /// order. Fails on the first unset slot in range, or if the range runs
    /// past the addressable offset space.
    pub fn get_slice(&self, offset: MemoryOffset, length: u32) -> Result<Vec<TaggedValue>> {
        (0..length)
            .map(|i| {
                let slot = offset
                    .checked_add(i)
                    .ok_or(RuntimeError::SliceOutOfRange { offset, length })?;
                self.get(slot)
            })
            .collect()
    }

    /// Number of written slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
