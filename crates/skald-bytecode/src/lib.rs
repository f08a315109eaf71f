//! # Skald bytecode definitions
//!
//! This crate provides types and functions for working with Skald bytecode:
//! writing and parsing instructions, querying information about opcodes, and
//! producing human-readable disassembly. Execution lives in the `skald-vm`
//! crate.
//!
//! A Skald program is a raw byte sequence with no header, addressed from
//! offset 0. Each instruction is one opcode byte, optionally followed by a
//! big-endian inline literal of 1, 2, 4, or 8 bytes. Byte values without an
//! assigned opcode are reserved and execute as no-ops.

pub mod colors;
pub mod consts;
pub mod dump;
pub mod instruction;
pub mod opcode;

#[cfg(test)]
mod instruction_tests;

// Re-export commonly used items at crate root
pub use colors::Colors;
pub use dump::dump;
pub use instruction::{
    DecodeError, Decoded, Instruction, instructions_to_vec, write_instructions,
};
pub use opcode::{InvalidOpcodeError, Opcode};
