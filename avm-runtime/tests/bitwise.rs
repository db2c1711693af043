//! Bitwise instruction family integration tests

use avm_runtime::{execute, MachineState, NoopStateManager, RuntimeError, TaggedMemory};
use avm_spec::{Instruction, IntegralValue, TagError, TaggedValue, TypeTag};

fn setup() -> (MachineState, NoopStateManager) {
    (MachineState::new(), NoopStateManager)
}

fn expect_integral(memory: &TaggedMemory, offset: u32) -> IntegralValue {
    match memory.get(offset).unwrap() {
        TaggedValue::Integral(v) => v,
        other => panic!("expected integral at offset {}, got {}", offset, other),
    }
}

#[test]
fn and_over_integral_types() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint32(0b11111110010011100100));
    state.memory.set(1, IntegralValue::uint32(0b11100100111001001111));

    let and = Instruction::And {
        lhs: 0,
        rhs: 1,
        dst: 2,
        tag: TypeTag::Uint32,
    };
    execute(&and, &mut state, &mut manager).unwrap();

    assert_eq!(
        expect_integral(&state.memory, 2),
        IntegralValue::uint32(0b11100100010001000100)
    );
}

#[test]
fn or_over_integral_types() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint32(0b11111110010011100100));
    state.memory.set(1, IntegralValue::uint32(0b11100100111001001111));

    let or = Instruction::Or {
        lhs: 0,
        rhs: 1,
        dst: 2,
        tag: TypeTag::Uint32,
    };
    execute(&or, &mut state, &mut manager).unwrap();

    assert_eq!(
        expect_integral(&state.memory, 2),
        IntegralValue::uint32(0b11111110111011101111)
    );
}

#[test]
fn xor_over_integral_types() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint32(0b11111110010011100100));
    state.memory.set(1, IntegralValue::uint32(0b11100100111001001111));

    let xor = Instruction::Xor {
        lhs: 0,
        rhs: 1,
        dst: 2,
        tag: TypeTag::Uint32,
    };
    execute(&xor, &mut state, &mut manager).unwrap();

    assert_eq!(
        expect_integral(&state.memory, 2),
        IntegralValue::uint32(0b00011010101010101011)
    );
}

#[test]
fn shr_zero_positions_is_identity() {
    let (mut state, mut manager) = setup();
    let a = IntegralValue::uint32(0b11111110010011100100);
    state.memory.set(0, a);
    state.memory.set(1, IntegralValue::uint32(0));

    let shr = Instruction::Shr {
        src: 0,
        shift: 1,
        dst: 2,
        tag: TypeTag::Uint32,
    };
    execute(&shr, &mut state, &mut manager).unwrap();

    assert_eq!(expect_integral(&state.memory, 2), a);
}

#[test]
fn shr_two_positions() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint32(0b11111110010011100100));
    state.memory.set(1, IntegralValue::uint32(2));

    let shr = Instruction::Shr {
        src: 0,
        shift: 1,
        dst: 2,
        tag: TypeTag::Uint32,
    };
    execute(&shr, &mut state, &mut manager).unwrap();

    assert_eq!(
        expect_integral(&state.memory, 2),
        IntegralValue::uint32(0b00111111100100111001)
    );
}

#[test]
fn shr_nineteen_positions() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint32(0b11111110010011100100));
    state.memory.set(1, IntegralValue::uint32(19));

    let shr = Instruction::Shr {
        src: 0,
        shift: 1,
        dst: 2,
        tag: TypeTag::Uint32,
    };
    execute(&shr, &mut state, &mut manager).unwrap();

    assert_eq!(expect_integral(&state.memory, 2), IntegralValue::uint32(0b1));
}

#[test]
fn shl_zero_positions_is_identity() {
    let (mut state, mut manager) = setup();
    let a = IntegralValue::uint32(0b11111110010011100100);
    state.memory.set(0, a);
    state.memory.set(1, IntegralValue::uint32(0));

    let shl = Instruction::Shl {
        src: 0,
        shift: 1,
        dst: 2,
        tag: TypeTag::Uint32,
    };
    execute(&shl, &mut state, &mut manager).unwrap();

    assert_eq!(expect_integral(&state.memory, 2), a);
}

#[test]
fn shl_two_positions() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint32(0b11111110010011100100));
    state.memory.set(1, IntegralValue::uint32(2));

    let shl = Instruction::Shl {
        src: 0,
        shift: 1,
        dst: 2,
        tag: TypeTag::Uint32,
    };
    execute(&shl, &mut state, &mut manager).unwrap();

    assert_eq!(
        expect_integral(&state.memory, 2),
        IntegralValue::uint32(0b1111111001001110010000)
    );
}

#[test]
fn shl_past_bit_limit_is_zero() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint16(0b1110010011100111));
    state.memory.set(1, IntegralValue::uint16(17));

    let shl = Instruction::Shl {
        src: 0,
        shift: 1,
        dst: 2,
        tag: TypeTag::Uint16,
    };
    execute(&shl, &mut state, &mut manager).unwrap();

    assert_eq!(expect_integral(&state.memory, 2), IntegralValue::uint16(0));
}

#[test]
fn shl_truncates_at_width() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint16(0b1110010011100111));
    state.memory.set(1, IntegralValue::uint16(2));

    let shl = Instruction::Shl {
        src: 0,
        shift: 1,
        dst: 2,
        tag: TypeTag::Uint16,
    };
    execute(&shl, &mut state, &mut manager).unwrap();

    assert_eq!(
        expect_integral(&state.memory, 2),
        IntegralValue::uint16(0b1001001110011100)
    );
}

#[test]
fn not_over_integral_types() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint16(0b0110010011100100));

    let not = Instruction::Not {
        src: 0,
        dst: 1,
        tag: TypeTag::Uint16,
    };
    execute(&not, &mut state, &mut manager).unwrap();

    // the complement stays within 16 bits
    assert_eq!(
        expect_integral(&state.memory, 1),
        IntegralValue::uint16(0b1001101100011011)
    );
}

#[test]
fn mixed_operand_tags_fail() {
    let (mut state, mut manager) = setup();
    state.memory.set(0, IntegralValue::uint32(1));
    state.memory.set(1, IntegralValue::uint64(1));

    let xor = Instruction::Xor {
        lhs: 0,
        rhs: 1,
        dst: 2,
        tag: TypeTag::Uint32,
    };
    let err = execute(&xor, &mut state, &mut manager).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::Tag {
            opcode: "XOR",
            source: TagError::TagMismatch {
                expected: TypeTag::Uint32,
                found: TypeTag::Uint64,
            },
        }
    );
    // destination is never written on failure
    assert!(state.memory.get(2).is_err());
}
