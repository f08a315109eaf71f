//! Human-readable disassembly of raw programs.
//!
//! Output is line oriented: a hex offset column, the raw bytes of the
//! instruction, and its mnemonic form. Reserved bytes are rendered as
//! `.byte` rows. A program that ends inside an inline literal gets a
//! trailing note instead of a decoded row.

use std::fmt::Write as _;

use crate::colors::Colors;
use crate::instruction::{DecodeError, Decoded};

/// Width of the raw-bytes column: the widest instruction is `push64`, one
/// opcode byte plus eight literal bytes.
const BYTES_COL: usize = 9 * 3 - 1;

/// Generate a human-readable dump of a program.
pub fn dump(program: &[u8], colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();
    let mut offset = 0;

    loop {
        match Decoded::decode(program, offset) {
            Ok((decoded, next)) => {
                let raw = hex_bytes(&program[offset..next]);
                let text = match decoded {
                    Decoded::Instr(instr) => format!("{instr}"),
                    Decoded::Reserved(byte) => format!("{}.byte 0x{byte:02x}{}", c.dim, c.reset),
                };
                writeln!(
                    out,
                    "{}{offset:04x}{}  {raw:<width$}  {text}",
                    c.dim,
                    c.reset,
                    width = BYTES_COL
                )
                .unwrap();
                offset = next;
            }
            Err(DecodeError::EndOfProgram) => break,
            Err(err @ DecodeError::TruncatedLiteral { .. }) => {
                let raw = hex_bytes(&program[offset..]);
                writeln!(
                    out,
                    "{}{offset:04x}{}  {raw:<width$}  {}; {err}{}",
                    c.dim,
                    c.reset,
                    c.green,
                    c.reset,
                    width = BYTES_COL
                )
                .unwrap();
                break;
            }
        }
    }

    out
}

fn hex_bytes(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        write!(s, "{b:02x}").unwrap();
    }
    s
}
