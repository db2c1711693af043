//! Runtime error types for the AVM execution core
//!
//! Every error here is local to one instruction and unrecoverable: there is
//! no retry or partial-failure path. The driver receives a single terminal
//! error carrying the instruction mnemonic or operand offset needed to
//! diagnose malformed bytecode.

use avm_spec::{MemoryOffset, ProgramCounter, TagError, TypeTag};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Memory offset read before ever being written. Reads are never
    /// zero-filled.
    #[error("read of uninitialized memory at offset {offset}")]
    UninitializedRead { offset: MemoryOffset },

    /// A memory read expected an integral slot but found a field element.
    #[error("memory at offset {offset} holds {found}, expected an integral value")]
    ExpectedIntegral { offset: MemoryOffset, found: TypeTag },

    /// A slice read whose range extends past the addressable offset space.
    #[error("slice of {length} values at offset {offset} exceeds addressable memory")]
    SliceOutOfRange { offset: MemoryOffset, length: u32 },

    /// An operand's tag violated the executing instruction's tag contract.
    #[error("{opcode}: {source}")]
    Tag {
        opcode: &'static str,
        #[source]
        source: TagError,
    },

    /// INTERNALRETURN with an empty internal call stack: unbalanced
    /// call/return nesting in the bytecode.
    #[error("internal call stack underflow at pc {pc}")]
    CallStackUnderflow { pc: ProgramCounter },

    /// Advancing or pushing a return address would take the program counter
    /// past the addressable instruction space.
    #[error("program counter overflow past {pc}")]
    ProgramCounterOverflow { pc: ProgramCounter },

    /// Fetch position outside the decoded program.
    #[error("program counter {pc} outside program of {program_length} instructions")]
    InvalidProgramCounter {
        pc: ProgramCounter,
        program_length: usize,
    },

    /// Safety stop: the run executed more instructions than the driver
    /// allows without reaching a halt.
    #[error("instruction limit exceeded: {limit}")]
    InstructionLimitExceeded { limit: u64 },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_read_display() {
        let err = RuntimeError::UninitializedRead { offset: 12 };
        assert_eq!(err.to_string(), "read of uninitialized memory at offset 12");
    }

    #[test]
    fn test_tag_error_display_carries_opcode() {
        let err = RuntimeError::Tag {
            opcode: "AND",
            source: TagError::TagMismatch {
                expected: TypeTag::Uint32,
                found: TypeTag::Uint8,
            },
        };
        assert_eq!(err.to_string(), "AND: tag mismatch: expected UINT32, found UINT8");
    }

    #[test]
    fn test_slice_out_of_range_display() {
        let err = RuntimeError::SliceOutOfRange {
            offset: u32::MAX,
            length: 2,
        };
        assert_eq!(
            err.to_string(),
            "slice of 2 values at offset 4294967295 exceeds addressable memory"
        );
    }

    #[test]
    fn test_pc_overflow_display() {
        let err = RuntimeError::ProgramCounterOverflow { pc: u32::MAX };
        assert_eq!(
            err.to_string(),
            "program counter overflow past 4294967295"
        );
    }

    #[test]
    fn test_underflow_display() {
        let err = RuntimeError::CallStackUnderflow { pc: 9 };
        assert_eq!(err.to_string(), "internal call stack underflow at pc 9");
    }

    #[test]
    fn test_invalid_pc_display() {
        let err = RuntimeError::InvalidProgramCounter {
            pc: 40,
            program_length: 3,
        };
        assert_eq!(
            err.to_string(),
            "program counter 40 outside program of 3 instructions"
        );
    }
}
