//! Machine state for one AVM execution
//!
//! One `MachineState` is created per program execution and discarded once
//! the driver observes the halted flag (or a fatal error). It exclusively
//! owns its memory; nothing is shared across concurrent executions.

use crate::error::{Result, RuntimeError};
use crate::memory::TaggedMemory;
use avm_spec::{FieldElement, ProgramCounter};

/// Mutable execution context for one run.
#[derive(Debug, Clone, Default)]
pub struct MachineState {
    /// Position of the next instruction to fetch
    pub pc: ProgramCounter,

    /// Return addresses for pending INTERNALCALLs, innermost last
    pub internal_call_stack: Vec<ProgramCounter>,

    /// Set by RETURN; no instruction executes afterwards
    pub halted: bool,

    /// Return data recorded at the halt boundary
    pub return_data: Vec<FieldElement>,

    /// Memory owned by this run
    pub memory: TaggedMemory,
}

impl MachineState {
    pub fn new() -> Self {
        MachineState {
            pc: 0,
            internal_call_stack: Vec::new(),
            halted: false,
            return_data: Vec::new(),
            memory: TaggedMemory::new(),
        }
    }

    /// Default post-condition of any instruction that does not redirect
    /// control flow. Fails rather than wrapping if the counter would leave
    /// the addressable instruction space.
    #[inline]
    pub fn increment_pc(&mut self) -> Result<()> {
        self.pc = self
            .pc
            .checked_add(1)
            .ok_or(RuntimeError::ProgramCounterOverflow { pc: self.pc })?;
        Ok(())
    }

    /// Explicit control-flow redirection; bypasses the default increment.
    #[inline]
    pub fn jump(&mut self, target: ProgramCounter) {
        self.pc = target;
    }

    /// Record return data for the driver to observe.
    pub fn set_return_data(&mut self, data: Vec<FieldElement>) {
        self.return_data = data;
    }

    /// Terminal state transition. Halted is never unset.
    pub fn halt(&mut self) {
        self.halted = true;
    }
}
