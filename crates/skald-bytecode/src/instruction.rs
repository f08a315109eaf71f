//! Instruction encoding and decoding.
//!
//! Instructions are decoded from and encoded to the raw program form: one
//! opcode byte followed by the opcode's inline literal, if any. Multi-byte
//! literals are big-endian.

use std::fmt::{self, Display, Formatter};
use std::io;

use crate::opcode::Opcode;

/// A decoded bytecode instruction.
///
/// This includes the opcode and, if applicable, the literal value.
///
/// Every value of this struct has a literal, even though most opcodes do not
/// expect one, and the stored literal is of constant bit width even though
/// inline literals come in four widths. These apparent discrepancies are
/// handled as follows:
///
/// - During decoding, any opcode that does not expect a literal leaves the
///   `literal` field set to 0. Literals shorter than 64 bits are copied into
///   the low-order bits, with sign extension for the signed push opcodes.
/// - During encoding, any opcode that does not expect a literal ignores the
///   `literal` field. Literals shorter than 64 bits are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub opcode: Opcode,
    pub literal: u64,
}

/// A single decoded unit of the instruction stream.
///
/// The execution engine treats reserved bytes as no-ops, but tooling (the
/// disassembler in particular) needs to see them, so the decoder reports
/// them as a distinct variant rather than folding them into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A recognized instruction.
    Instr(Instruction),
    /// A reserved opcode byte; executes as a one-byte no-op.
    Reserved(u8),
}

/// Error returned by [`Decoded::decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The offset is at or past the end of the program. The engine uses
    /// this as its normal halt signal.
    #[error("end of program")]
    EndOfProgram,

    /// The opcode expects more literal bytes than remain in the program.
    #[error("truncated literal: {opcode} expects {needed} bytes, {remaining} remain")]
    TruncatedLiteral {
        opcode: Opcode,
        needed: usize,
        remaining: usize,
    },
}

impl Decoded {
    /// Decode a single instruction from `bytes` at `offset`.
    ///
    /// On success, returns the decoded unit together with the offset of the
    /// byte just past it.
    ///
    /// # Errors
    ///
    /// [`DecodeError::EndOfProgram`] if `offset` is at or past the end of
    /// `bytes`; [`DecodeError::TruncatedLiteral`] if the opcode's inline
    /// literal runs off the end.
    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let Some(&byte) = bytes.get(offset) else {
            return Err(DecodeError::EndOfProgram);
        };

        let Some(opcode) = Opcode::from_u8(byte) else {
            return Ok((Self::Reserved(byte), offset + 1));
        };

        let needed = opcode.literal_len();
        let lit_start = offset + 1;
        let remaining = bytes.len() - lit_start;
        if remaining < needed {
            return Err(DecodeError::TruncatedLiteral {
                opcode,
                needed,
                remaining,
            });
        }

        let lit = &bytes[lit_start..lit_start + needed];
        let literal = match opcode {
            Opcode::Push8 => lit[0] as u64,
            Opcode::Push8S => lit[0] as i8 as u64,
            Opcode::Push16 => u16::from_be_bytes(lit.try_into().unwrap()) as u64,
            Opcode::Push16S => i16::from_be_bytes(lit.try_into().unwrap()) as u64,
            Opcode::Push32 => u32::from_be_bytes(lit.try_into().unwrap()) as u64,
            Opcode::Push32S => i32::from_be_bytes(lit.try_into().unwrap()) as u64,
            Opcode::Push64 => u64::from_be_bytes(lit.try_into().unwrap()),
            _ => 0,
        };

        Ok((
            Self::Instr(Instruction { opcode, literal }),
            lit_start + needed,
        ))
    }

    /// Get the number of bytes this unit occupies in encoded form.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Instr(instr) => instr.encoded_len(),
            Self::Reserved(_) => 1,
        }
    }
}

impl Display for Decoded {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instr(instr) => instr.fmt(f),
            Self::Reserved(byte) => write!(f, ".byte 0x{byte:02x}"),
        }
    }
}

impl From<Opcode> for Instruction {
    fn from(value: Opcode) -> Self {
        Self::new(value, 0)
    }
}

impl Instruction {
    /// Create a new `Instruction`.
    pub fn new(opcode: Opcode, literal: u64) -> Self {
        Self { opcode, literal }
    }

    /// Encode this instruction into a stream.
    ///
    /// This function makes very small writes. It is recommended to use it on
    /// buffered streams to improve performance.
    ///
    /// # Errors
    ///
    /// Any errors returned from the stream are returned unmodified.
    pub fn encode_to_stream<W: io::Write>(&self, stream: &mut W) -> io::Result<()> {
        stream.write_all(&[self.opcode as u8])?;

        let lit_len = self.opcode.literal_len();
        if lit_len > 0 {
            let buf = self.literal.to_be_bytes();
            stream.write_all(&buf[8 - lit_len..])?;
        }

        Ok(())
    }

    /// Get the number of bytes in the encoded form of this instruction.
    pub fn encoded_len(&self) -> usize {
        1 + self.opcode.literal_len()
    }

    /// Get the combined encoded length of a series of instructions.
    pub fn combined_len(instructions: &[Self]) -> usize {
        instructions.iter().map(|inst| inst.encoded_len()).sum()
    }

    /// Construct an unsigned push instruction of optimal size for the value.
    pub fn optimal_push(value: u64) -> Self {
        let opcode = if value <= u8::MAX as u64 {
            Opcode::Push8
        } else if value <= u16::MAX as u64 {
            Opcode::Push16
        } else if value <= u32::MAX as u64 {
            Opcode::Push32
        } else {
            Opcode::Push64
        };

        Self::new(opcode, value)
    }

    /// Construct a signed push instruction of optimal size for the value.
    pub fn optimal_pushs(value: i64) -> Self {
        let opcode = if i8::MIN as i64 <= value && value <= i8::MAX as i64 {
            Opcode::Push8S
        } else if i16::MIN as i64 <= value && value <= i16::MAX as i64 {
            Opcode::Push16S
        } else if i32::MIN as i64 <= value && value <= i32::MAX as i64 {
            Opcode::Push32S
        } else {
            Opcode::Push64
        };

        Self::new(opcode, value as u64)
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode.mnemonic())?;
        match self.opcode.literal_len() {
            0 => Ok(()),
            1 => write!(f, " 0x{:02x}", self.literal as u8),
            2 => write!(f, " 0x{:04x}", self.literal as u16),
            4 => write!(f, " 0x{:08x}", self.literal as u32),
            8 => write!(f, " 0x{:016x}", self.literal),
            _ => unreachable!(),
        }
    }
}

/// Encode a series of instructions into a stream.
pub fn write_instructions<W: io::Write>(stream: &mut W, instrs: &[Instruction]) -> io::Result<()> {
    for instr in instrs {
        instr.encode_to_stream(stream)?;
    }

    Ok(())
}

/// Encode a series of instructions into a byte vector.
pub fn instructions_to_vec(instrs: &[Instruction]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(Instruction::combined_len(instrs));
    write_instructions(&mut bytes, instrs).unwrap();
    bytes
}
