//! # AVM Specification
//!
//! Core data model for the AVM, the bytecode virtual machine that replays
//! and simulates contract execution for the rollup.
//!
//! ## Key Features
//! - Tagged memory values: fixed-width unsigned integers (8-128 bits) plus
//!   native field elements
//! - Width-exact bitwise algebra with truncation modulo 2^w
//! - Closed instruction enum for the bitwise and control-flow families
//! - BN254 scalar field elements at the return-data boundary
//!
//! Execution state and instruction dispatch live in `avm-runtime`.

pub mod error;
pub mod field;
pub mod instruction;
pub mod tag;
pub mod value;

pub use error::TagError;
pub use field::{FieldElement, FIELD_MODULUS};
pub use instruction::{Instruction, MemoryOffset, ProgramCounter};
pub use tag::TypeTag;
pub use value::{IntegralValue, TaggedValue};
