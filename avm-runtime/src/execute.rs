//! Instruction execution for the AVM
//!
//! One exhaustive match over the closed instruction enum. Bitwise
//! instructions read their operands from memory, apply the tagged-value
//! algebra, write the destination slot, and fall through to `pc + 1`.
//! Control-flow instructions redirect `pc`, maintain the internal call
//! stack, or halt the machine with return data.

use crate::error::{Result, RuntimeError};
use crate::state::MachineState;
use crate::state_manager::StateManager;
use avm_spec::{Instruction, IntegralValue, MemoryOffset, TypeTag};
use tracing::trace;

/// Read an integral operand and enforce the instruction's tag on it.
fn read_tagged(
    state: &MachineState,
    offset: MemoryOffset,
    tag: TypeTag,
    opcode: &'static str,
) -> Result<IntegralValue> {
    let value = state.memory.get_integral(offset)?;
    if value.tag() != tag {
        return Err(RuntimeError::Tag {
            opcode,
            source: avm_spec::TagError::TagMismatch {
                expected: tag,
                found: value.tag(),
            },
        });
    }
    Ok(value)
}

/// Execute a single decoded instruction against the machine state.
///
/// The state manager is accepted to keep the dispatch signature uniform
/// across instruction families; neither family implemented here reads or
/// mutates it.
pub fn execute(
    instr: &Instruction,
    state: &mut MachineState,
    _state_manager: &mut dyn StateManager,
) -> Result<()> {
    trace!(pc = state.pc, op = instr.name(), "execute");

    match instr {
        // ========== Bitwise ==========
        Instruction::And { lhs, rhs, dst, tag } => {
            let a = read_tagged(state, *lhs, *tag, instr.name())?;
            let b = read_tagged(state, *rhs, *tag, instr.name())?;
            let result = a.and(b).map_err(|source| RuntimeError::Tag {
                opcode: instr.name(),
                source,
            })?;
            state.memory.set(*dst, result);
            state.increment_pc()?;
        }

        Instruction::Or { lhs, rhs, dst, tag } => {
            let a = read_tagged(state, *lhs, *tag, instr.name())?;
            let b = read_tagged(state, *rhs, *tag, instr.name())?;
            let result = a.or(b).map_err(|source| RuntimeError::Tag {
                opcode: instr.name(),
                source,
            })?;
            state.memory.set(*dst, result);
            state.increment_pc()?;
        }

        Instruction::Xor { lhs, rhs, dst, tag } => {
            let a = read_tagged(state, *lhs, *tag, instr.name())?;
            let b = read_tagged(state, *rhs, *tag, instr.name())?;
            let result = a.xor(b).map_err(|source| RuntimeError::Tag {
                opcode: instr.name(),
                source,
            })?;
            state.memory.set(*dst, result);
            state.increment_pc()?;
        }

        Instruction::Not { src, dst, tag } => {
            let a = read_tagged(state, *src, *tag, instr.name())?;
            state.memory.set(*dst, a.not());
            state.increment_pc()?;
        }

        Instruction::Shl {
            src,
            shift,
            dst,
            tag,
        } => {
            let a = read_tagged(state, *src, *tag, instr.name())?;
            let amount = read_tagged(state, *shift, *tag, instr.name())?;
            let result = a.shl(amount).map_err(|source| RuntimeError::Tag {
                opcode: instr.name(),
                source,
            })?;
            state.memory.set(*dst, result);
            state.increment_pc()?;
        }

        Instruction::Shr {
            src,
            shift,
            dst,
            tag,
        } => {
            let a = read_tagged(state, *src, *tag, instr.name())?;
            let amount = read_tagged(state, *shift, *tag, instr.name())?;
            let result = a.shr(amount).map_err(|source| RuntimeError::Tag {
                opcode: instr.name(),
                source,
            })?;
            state.memory.set(*dst, result);
            state.increment_pc()?;
        }

        // ========== Control flow ==========
        Instruction::Return { offset, size } => {
            let return_data = state
                .memory
                .get_slice(*offset, *size)?
                .iter()
                .map(|value| value.to_field())
                .collect();
            state.set_return_data(return_data);
            state.halt();
        }

        Instruction::Jump { target } => {
            state.jump(*target);
        }

        Instruction::JumpI { target, cond } => {
            // only the numeric magnitude matters; any integral width may
            // drive the condition
            let condition = state.memory.get_integral(*cond)?;
            if condition.is_zero() {
                state.increment_pc()?;
            } else {
                state.jump(*target);
            }
        }

        Instruction::InternalCall { target } => {
            let resume_pc = state
                .pc
                .checked_add(1)
                .ok_or(RuntimeError::ProgramCounterOverflow { pc: state.pc })?;
            state.internal_call_stack.push(resume_pc);
            state.jump(*target);
        }

        Instruction::InternalReturn => {
            let return_pc = state
                .internal_call_stack
                .pop()
                .ok_or(RuntimeError::CallStackUnderflow { pc: state.pc })?;
            state.jump(return_pc);
        }
    }

    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::state_manager::NoopStateManager;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_jumpi_jumps_iff_condition_nonzero(magnitude in any::<u128>()) {
            let mut state = MachineState::new();
            let mut manager = NoopStateManager;
            state.pc = 5;
            state.memory.set(0, IntegralValue::uint128(magnitude));

            let jumpi = Instruction::JumpI { target: 42, cond: 0 };
            execute(&jumpi, &mut state, &mut manager).unwrap();

            if magnitude == 0 {
                prop_assert_eq!(state.pc, 6);
            } else {
                prop_assert_eq!(state.pc, 42);
            }
        }

        #[test]
        fn test_bitwise_never_redirects_or_halts(a in any::<u64>(), b in any::<u64>()) {
            let mut state = MachineState::new();
            let mut manager = NoopStateManager;
            state.pc = 9;
            state.memory.set(0, IntegralValue::uint64(a));
            state.memory.set(1, IntegralValue::uint64(b));

            for instr in [
                Instruction::And { lhs: 0, rhs: 1, dst: 2, tag: TypeTag::Uint64 },
                Instruction::Or { lhs: 0, rhs: 1, dst: 2, tag: TypeTag::Uint64 },
                Instruction::Xor { lhs: 0, rhs: 1, dst: 2, tag: TypeTag::Uint64 },
                Instruction::Not { src: 0, dst: 2, tag: TypeTag::Uint64 },
                Instruction::Shl { src: 0, shift: 1, dst: 2, tag: TypeTag::Uint64 },
                Instruction::Shr { src: 0, shift: 1, dst: 2, tag: TypeTag::Uint64 },
            ] {
                let pc_before = state.pc;
                execute(&instr, &mut state, &mut manager).unwrap();
                prop_assert_eq!(state.pc, pc_before + 1);
                prop_assert!(!state.halted);
            }
        }
    }
}
