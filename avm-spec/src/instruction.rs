//! AVM instruction set (bitwise and intra-program control flow)
//!
//! Instructions are immutable decoded operations: operands (memory offsets,
//! jump targets, a type tag) are captured once at decode time and never
//! change. All mutation happens through the machine state an instruction is
//! executed against. The set is a closed enum dispatched by one exhaustive
//! match in the runtime, so adding an opcode is a compile-time-checked
//! change.

use crate::tag::TypeTag;
use serde::{Deserialize, Serialize};

/// Offset into AVM memory.
pub type MemoryOffset = u32;

/// Position in the decoded instruction stream.
pub type ProgramCounter = u32;

/// A decoded AVM instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // ========== Bitwise ==========
    /// AND: mem[dst] = mem[lhs] & mem[rhs]
    And {
        lhs: MemoryOffset,
        rhs: MemoryOffset,
        dst: MemoryOffset,
        tag: TypeTag,
    },

    /// OR: mem[dst] = mem[lhs] | mem[rhs]
    Or {
        lhs: MemoryOffset,
        rhs: MemoryOffset,
        dst: MemoryOffset,
        tag: TypeTag,
    },

    /// XOR: mem[dst] = mem[lhs] ^ mem[rhs]
    Xor {
        lhs: MemoryOffset,
        rhs: MemoryOffset,
        dst: MemoryOffset,
        tag: TypeTag,
    },

    /// NOT: mem[dst] = complement of mem[src] within the tag's width
    Not {
        src: MemoryOffset,
        dst: MemoryOffset,
        tag: TypeTag,
    },

    /// SHL: mem[dst] = mem[src] << mem[shift], truncated to the tag's width
    Shl {
        src: MemoryOffset,
        shift: MemoryOffset,
        dst: MemoryOffset,
        tag: TypeTag,
    },

    /// SHR: mem[dst] = mem[src] >> mem[shift] (logical)
    Shr {
        src: MemoryOffset,
        shift: MemoryOffset,
        dst: MemoryOffset,
        tag: TypeTag,
    },

    // ========== Control flow ==========
    /// RETURN: halt, producing mem[offset .. offset + size] as field elements
    Return { offset: MemoryOffset, size: u32 },

    /// JUMP: pc = target
    Jump { target: ProgramCounter },

    /// JUMPI: pc = target if mem[cond] is nonzero, else fall through
    JumpI {
        target: ProgramCounter,
        cond: MemoryOffset,
    },

    /// INTERNALCALL: push pc + 1 onto the internal call stack, pc = target
    InternalCall { target: ProgramCounter },

    /// INTERNALRETURN: pc = popped return address
    InternalReturn,
}

impl Instruction {
    /// Mnemonic for diagnostics and error context.
    pub const fn name(&self) -> &'static str {
        match self {
            Instruction::And { .. } => "AND",
            Instruction::Or { .. } => "OR",
            Instruction::Xor { .. } => "XOR",
            Instruction::Not { .. } => "NOT",
            Instruction::Shl { .. } => "SHL",
            Instruction::Shr { .. } => "SHR",
            Instruction::Return { .. } => "RETURN",
            Instruction::Jump { .. } => "JUMP",
            Instruction::JumpI { .. } => "JUMPI",
            Instruction::InternalCall { .. } => "INTERNALCALL",
            Instruction::InternalReturn => "INTERNALRETURN",
        }
    }

    /// Decoded operand arity, the type tag included where one is carried.
    pub const fn number_of_operands(&self) -> usize {
        match self {
            Instruction::And { .. } | Instruction::Or { .. } | Instruction::Xor { .. } => 4,
            Instruction::Not { .. } => 3,
            Instruction::Shl { .. } | Instruction::Shr { .. } => 4,
            Instruction::Return { .. } => 2,
            Instruction::Jump { .. } => 1,
            Instruction::JumpI { .. } => 2,
            Instruction::InternalCall { .. } => 1,
            Instruction::InternalReturn => 0,
        }
    }

    /// Whether execution of this instruction can redirect or halt control
    /// flow instead of falling through to `pc + 1`.
    pub const fn is_control_flow(&self) -> bool {
        matches!(
            self,
            Instruction::Return { .. }
                | Instruction::Jump { .. }
                | Instruction::JumpI { .. }
                | Instruction::InternalCall { .. }
                | Instruction::InternalReturn
        )
    }
}
