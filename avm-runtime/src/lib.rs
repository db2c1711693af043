//! # AVM Runtime
//!
//! Execution core of the AVM: tagged memory, machine state, and instruction
//! dispatch for the bitwise and intra-program control-flow families.
//!
//! Execution is deterministic and single-threaded per [`MachineState`]:
//! identical bytecode and initial memory always produce identical return
//! data and final memory. Independent runs own their state outright and may
//! proceed concurrently.
//!
//! ## Example
//!
//! ```rust
//! use avm_runtime::{Interpreter, MachineState, NoopStateManager};
//! use avm_spec::{Instruction, IntegralValue, TypeTag};
//!
//! let program = [
//!     Instruction::Xor { lhs: 0, rhs: 1, dst: 2, tag: TypeTag::Uint32 },
//!     Instruction::Return { offset: 2, size: 1 },
//! ];
//!
//! let mut state = MachineState::new();
//! state.memory.set(0, IntegralValue::uint32(0b1100));
//! state.memory.set(1, IntegralValue::uint32(0b1010));
//!
//! let result = Interpreter::new(&program)
//!     .run(&mut state, &mut NoopStateManager)
//!     .unwrap();
//! assert_eq!(result.return_data.len(), 1);
//! ```

pub mod error;
pub mod execute;
pub mod interpreter;
pub mod memory;
pub mod state;
pub mod state_manager;

use avm_spec::Instruction;

pub use error::{Result, RuntimeError};
pub use execute::execute;
pub use interpreter::{ExecutionResult, Interpreter, InterpreterConfig};
pub use memory::TaggedMemory;
pub use state::MachineState;
pub use state_manager::{NoopStateManager, StateManager};

/// Simple execution helper
///
/// Replays a decoded program against a fresh machine state with no storage
/// access and returns its return data.
pub fn simulate(program: &[Instruction]) -> Result<Vec<avm_spec::FieldElement>> {
    let mut state = MachineState::new();
    let mut manager = NoopStateManager;
    let result = Interpreter::new(program).run(&mut state, &mut manager)?;
    Ok(result.return_data)
}
