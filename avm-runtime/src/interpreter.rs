//! Fetch-dispatch driver for decoded AVM programs
//!
//! Repeatedly fetches the instruction at `pc`, executes it, and stops when
//! the machine halts. Fetching a `pc` outside the program is an error, which
//! is also where an out-of-range jump target surfaces: JUMP itself does not
//! validate targets, the next fetch does.

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::state::MachineState;
use crate::state_manager::StateManager;
use avm_spec::{FieldElement, Instruction};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Interpreter limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Safety stop for runs that never halt. Not a gas policy.
    pub max_instructions: u64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_instructions: 1_000_000,
        }
    }
}

/// Observable outcome of a halted run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Instructions executed before the halt
    pub instructions_executed: u64,

    /// Return data recorded by RETURN
    pub return_data: Vec<FieldElement>,
}

/// Interpreter over one decoded program.
pub struct Interpreter<'a> {
    program: &'a [Instruction],
    config: InterpreterConfig,
}

impl<'a> Interpreter<'a> {
    pub fn new(program: &'a [Instruction]) -> Self {
        Self::with_config(program, InterpreterConfig::default())
    }

    pub fn with_config(program: &'a [Instruction], config: InterpreterConfig) -> Self {
        Interpreter { program, config }
    }

    /// Run until the machine halts or a fatal error aborts the run.
    pub fn run(
        &self,
        state: &mut MachineState,
        state_manager: &mut dyn StateManager,
    ) -> Result<ExecutionResult> {
        let mut executed = 0u64;

        while !state.halted {
            if executed >= self.config.max_instructions {
                return Err(RuntimeError::InstructionLimitExceeded {
                    limit: self.config.max_instructions,
                });
            }

            let instr = self.program.get(state.pc as usize).ok_or(
                RuntimeError::InvalidProgramCounter {
                    pc: state.pc,
                    program_length: self.program.len(),
                },
            )?;

            execute(instr, state, state_manager)?;
            executed += 1;
        }

        trace!(instructions = executed, "halted");

        Ok(ExecutionResult {
            instructions_executed: executed,
            return_data: state.return_data.clone(),
        })
    }
}
