use crate::consts::*;
use crate::instruction::{DecodeError, Decoded, Instruction, instructions_to_vec};
use crate::opcode::Opcode;
use crate::opcode_tests::ALL_OPCODES;

use std::io;

#[test]
fn encode() -> io::Result<()> {
    let pairs: &[(_, &[u8])] = &[
        (Instruction::new(Opcode::Gt, 0), &[GT]),
        (Instruction::new(Opcode::Div, 14), &[DIV]), // Lits are ignored for standalone opcodes
        (Instruction::new(Opcode::Push8, 0), &[PUSH8, 0]),
        (Instruction::new(Opcode::Push8, 155), &[PUSH8, 155]),
        (
            Instruction::new(Opcode::Push16, 0x12345), // Lits are truncated for shorter lits
            &[PUSH16, 0x23, 0x45],
        ),
        (
            Instruction::new(Opcode::Push16S, 0x8455), // Signed lits are written correctly
            &[PUSH16S, 0x84, 0x55],
        ),
        (
            Instruction::new(Opcode::Push32, 0xdeadbeef),
            &[PUSH32, 0xde, 0xad, 0xbe, 0xef],
        ),
        (
            Instruction::new(Opcode::Push64, 0xdeadbeef),
            &[PUSH64, 0, 0, 0, 0, 0xde, 0xad, 0xbe, 0xef],
        ),
    ];

    let mut stream = Vec::new();
    for (instr, bytes) in pairs {
        stream.clear();

        instr.encode_to_stream(&mut stream)?;
        assert_eq!(&stream, bytes);
    }

    Ok(())
}

#[test]
fn decode_successful() {
    let pairs: &[(_, &[u8])] = &[
        (Instruction::new(Opcode::Gt, 0), &[GT]),
        // Only decodes the instruction at the offset:
        (Instruction::new(Opcode::Div, 0), &[DIV, 3, 4, 5, 6]),
        (Instruction::new(Opcode::Push8, 0), &[PUSH8, 0]),
        (Instruction::new(Opcode::Push8, 155), &[PUSH8, 155, 3, 4, 5]),
        (
            Instruction::new(Opcode::Push16, 0x2345),
            &[PUSH16, 0x23, 0x45],
        ),
        (
            // Signed lits are sign-extended
            Instruction::new(Opcode::Push16S, 0xffffffffffff8455),
            &[PUSH16S, 0x84, 0x55],
        ),
        (
            Instruction::new(Opcode::Push32, 0xdeadbeef),
            &[PUSH32, 0xde, 0xad, 0xbe, 0xef],
        ),
        (
            // Unsigned lits are zero-extended
            Instruction::new(Opcode::Push64, 0xdeadbeef),
            &[PUSH64, 0, 0, 0, 0, 0xde, 0xad, 0xbe, 0xef],
        ),
    ];

    for (instr, bytes) in pairs {
        let (decoded, next) = Decoded::decode(bytes, 0).unwrap();
        assert_eq!(decoded, Decoded::Instr(*instr));
        assert_eq!(next, instr.encoded_len());
    }
}

#[test]
fn decode_at_offset() {
    let bytes: &[u8] = &[HALT, PUSH8S, 0xff, ADD];

    let (decoded, next) = Decoded::decode(bytes, 1).unwrap();
    assert_eq!(
        decoded,
        Decoded::Instr(Instruction::new(Opcode::Push8S, u64::MAX))
    );
    assert_eq!(next, 3);

    let (decoded, next) = Decoded::decode(bytes, 3).unwrap();
    assert_eq!(decoded, Decoded::Instr(Instruction::new(Opcode::Add, 0)));
    assert_eq!(next, 4);
}

#[test]
fn decode_reserved() {
    let (decoded, next) = Decoded::decode(&[0x07, PUSH8, 42], 0).unwrap();
    assert_eq!(decoded, Decoded::Reserved(0x07));
    assert_eq!(next, 1);
    assert_eq!(decoded.encoded_len(), 1);
}

#[test]
fn decode_end_of_program() {
    assert!(matches!(
        Decoded::decode(&[], 0),
        Err(DecodeError::EndOfProgram)
    ));
    assert!(matches!(
        Decoded::decode(&[HALT], 1),
        Err(DecodeError::EndOfProgram)
    ));
    // Offsets past the end also report end of program.
    assert!(matches!(
        Decoded::decode(&[HALT], 7),
        Err(DecodeError::EndOfProgram)
    ));
}

#[test]
fn decode_truncated_literal() {
    // Missing literal entirely
    let err = Decoded::decode(&[PUSH8], 0).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedLiteral {
            opcode: Opcode::Push8,
            needed: 1,
            remaining: 0,
        }
    ));

    // Incomplete literal
    let err = Decoded::decode(&[PUSH32, 1, 2, 3], 0).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedLiteral {
            opcode: Opcode::Push32,
            needed: 4,
            remaining: 3,
        }
    ));
}

#[test]
fn round_trip_all_opcodes() {
    // decode(encode(i)) is the identity once literals are normalized the
    // way decode normalizes them (truncate, then re-extend).
    for &opcode in ALL_OPCODES {
        let literal: u64 = match opcode.literal_len() {
            0 => 0,
            1 if opcode.literal_signed() => 0xffffffffffffff84,
            1 => 0x84,
            2 if opcode.literal_signed() => 0xffffffffffff8455,
            2 => 0x8455,
            4 if opcode.literal_signed() => 0xffffffff84551234,
            4 => 0x84551234,
            8 => 0x8455123490abcdef,
            _ => unreachable!(),
        };
        let instr = Instruction::new(opcode, literal);

        let mut bytes = Vec::new();
        instr.encode_to_stream(&mut bytes).unwrap();
        assert_eq!(bytes.len(), instr.encoded_len());

        let (decoded, next) = Decoded::decode(&bytes, 0).unwrap();
        assert_eq!(decoded, Decoded::Instr(instr), "{opcode}");
        assert_eq!(next, bytes.len());
    }
}

#[test]
fn encode_reproduces_program_bytes() {
    // encode(decode(b)) is the identity on any well-formed program.
    let program: &[u8] = &[
        PUSH8, 0x02, PUSH16S, 0x84, 0x55, ADD, 0x07, DUP0, PRINT, PUSH64, 1, 2, 3, 4, 5, 6, 7, 8,
        JUMP, HALT,
    ];

    let mut rebuilt = Vec::new();
    let mut offset = 0;
    loop {
        match Decoded::decode(program, offset) {
            Ok((Decoded::Instr(instr), next)) => {
                instr.encode_to_stream(&mut rebuilt).unwrap();
                offset = next;
            }
            Ok((Decoded::Reserved(byte), next)) => {
                rebuilt.push(byte);
                offset = next;
            }
            Err(DecodeError::EndOfProgram) => break,
            Err(e) => panic!("unexpected decode error: {e}"),
        }
    }

    assert_eq!(rebuilt, program);
}

#[test]
fn optimal_push_selects_narrowest_width() {
    assert_eq!(Instruction::optimal_push(0).opcode, Opcode::Push8);
    assert_eq!(Instruction::optimal_push(255).opcode, Opcode::Push8);
    assert_eq!(Instruction::optimal_push(256).opcode, Opcode::Push16);
    assert_eq!(Instruction::optimal_push(0xffff).opcode, Opcode::Push16);
    assert_eq!(Instruction::optimal_push(0x10000).opcode, Opcode::Push32);
    assert_eq!(Instruction::optimal_push(0xffffffff).opcode, Opcode::Push32);
    assert_eq!(Instruction::optimal_push(0x100000000).opcode, Opcode::Push64);
    assert_eq!(Instruction::optimal_push(u64::MAX).opcode, Opcode::Push64);
}

#[test]
fn optimal_pushs_selects_narrowest_width() {
    assert_eq!(Instruction::optimal_pushs(0).opcode, Opcode::Push8S);
    assert_eq!(Instruction::optimal_pushs(-128).opcode, Opcode::Push8S);
    assert_eq!(Instruction::optimal_pushs(127).opcode, Opcode::Push8S);
    assert_eq!(Instruction::optimal_pushs(128).opcode, Opcode::Push16S);
    assert_eq!(Instruction::optimal_pushs(-129).opcode, Opcode::Push16S);
    assert_eq!(Instruction::optimal_pushs(0x8000).opcode, Opcode::Push32S);
    assert_eq!(Instruction::optimal_pushs(i32::MIN as i64).opcode, Opcode::Push32S);
    assert_eq!(
        Instruction::optimal_pushs(i32::MAX as i64 + 1).opcode,
        Opcode::Push64
    );
    assert_eq!(Instruction::optimal_pushs(i64::MIN).opcode, Opcode::Push64);

    // The encoded form round-trips to the same bit pattern.
    let instr = Instruction::optimal_pushs(-2);
    let bytes = instructions_to_vec(&[instr]);
    assert_eq!(bytes, &[PUSH8S, 0xfe]);
}

#[test]
fn display() {
    assert_eq!(Instruction::new(Opcode::Add, 0).to_string(), "add");
    assert_eq!(
        Instruction::new(Opcode::Push8, 0x2a).to_string(),
        "push8 0x2a"
    );
    assert_eq!(
        Instruction::new(Opcode::Push16S, 0xffffffffffff8455).to_string(),
        "push16s 0x8455"
    );
    assert_eq!(
        Instruction::new(Opcode::Push64, 0xdeadbeef).to_string(),
        "push64 0x00000000deadbeef"
    );
    assert_eq!(Decoded::Reserved(0x07).to_string(), ".byte 0x07");
}

#[test]
fn combined_len() {
    let instrs = [
        Instruction::new(Opcode::Push8, 1),
        Instruction::new(Opcode::Push64, 2),
        Instruction::new(Opcode::Add, 0),
        Instruction::new(Opcode::Halt, 0),
    ];
    assert_eq!(Instruction::combined_len(&instrs), 2 + 9 + 1 + 1);
    assert_eq!(instructions_to_vec(&instrs).len(), 13);
}
