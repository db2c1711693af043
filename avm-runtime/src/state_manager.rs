//! State-manager capability threaded through instruction dispatch
//!
//! Every instruction execution receives a state manager so that the dispatch
//! signature stays uniform across families. The families implemented in this
//! crate (bitwise, intra-program control flow) never touch it; the storage,
//! world-state and external-call families define their access through
//! concrete implementations of this capability. Keeping it an explicit
//! parameter rather than ambient state leaves these instructions pure
//! functions of `(MachineState, operands)`.

/// Opaque capability mediating storage, contract, and world-state access.
///
/// Intentionally carries no methods at this layer; instruction families that
/// need real access downcast to the concrete manager they were dispatched
/// with.
pub trait StateManager {}

/// State manager for pure replay and unit tests: grants no access at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStateManager;

impl StateManager for NoopStateManager {}
