//! Opcode table and per-opcode metadata.

use std::fmt::{self, Display, Formatter};

use crate::consts::*;

/// Opcodes recognized by the Skald VM.
///
/// This enum can be converted to the binary form of an opcode via `u8::from`
/// or primitive conversion to a `u8`. Conversely, binary forms can be parsed
/// into this enum via [`Opcode::from_u8`] or [`Opcode::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    VarSt = VARST,
    VarLd = VARLD,
    VarRes = VARRES,
    VarDisc = VARDISC,
    NumVars = NUMVARS,
    Push8 = PUSH8,
    Push8S = PUSH8S,
    Push16 = PUSH16,
    Push16S = PUSH16S,
    Push32 = PUSH32,
    Push32S = PUSH32S,
    Push64 = PUSH64,
    Dup0 = DUP0,
    Dup1 = DUP1,
    Dup2 = DUP2,
    Dup3 = DUP3,
    Pop = POP,
    Swap = SWAP,
    Add = ADD,
    Sub = SUB,
    Mul = MUL,
    Mod = MOD,
    Div = DIV,
    DivS = DIVS,
    Gt = GT,
    GtS = GTS,
    Lt = LT,
    LtS = LTS,
    Ge = GE,
    GeS = GES,
    Le = LE,
    LeS = LES,
    Eq = EQ,
    And = AND,
    Or = OR,
    Xor = XOR,
    Not = NOT,
    Inv = INV,
    Jump = JUMP,
    JCond = JCOND,
    Read = READ,
    ReadS = READS,
    Print = PRINT,
    PrintS = PRINTS,
    Halt = HALT,
}

impl Opcode {
    /// Convert an opcode encoded as a `u8` into an `Opcode`.
    ///
    /// Returns `None` if the given byte is reserved (not assigned a
    /// semantic).
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            VARST => Some(Self::VarSt),
            VARLD => Some(Self::VarLd),
            VARRES => Some(Self::VarRes),
            VARDISC => Some(Self::VarDisc),
            NUMVARS => Some(Self::NumVars),
            PUSH8 => Some(Self::Push8),
            PUSH8S => Some(Self::Push8S),
            PUSH16 => Some(Self::Push16),
            PUSH16S => Some(Self::Push16S),
            PUSH32 => Some(Self::Push32),
            PUSH32S => Some(Self::Push32S),
            PUSH64 => Some(Self::Push64),
            DUP0 => Some(Self::Dup0),
            DUP1 => Some(Self::Dup1),
            DUP2 => Some(Self::Dup2),
            DUP3 => Some(Self::Dup3),
            POP => Some(Self::Pop),
            SWAP => Some(Self::Swap),
            ADD => Some(Self::Add),
            SUB => Some(Self::Sub),
            MUL => Some(Self::Mul),
            MOD => Some(Self::Mod),
            DIV => Some(Self::Div),
            DIVS => Some(Self::DivS),
            GT => Some(Self::Gt),
            GTS => Some(Self::GtS),
            LT => Some(Self::Lt),
            LTS => Some(Self::LtS),
            GE => Some(Self::Ge),
            GES => Some(Self::GeS),
            LE => Some(Self::Le),
            LES => Some(Self::LeS),
            EQ => Some(Self::Eq),
            AND => Some(Self::And),
            OR => Some(Self::Or),
            XOR => Some(Self::Xor),
            NOT => Some(Self::Not),
            INV => Some(Self::Inv),
            JUMP => Some(Self::Jump),
            JCOND => Some(Self::JCond),
            READ => Some(Self::Read),
            READS => Some(Self::ReadS),
            PRINT => Some(Self::Print),
            PRINTS => Some(Self::PrintS),
            HALT => Some(Self::Halt),
            _ => None,
        }
    }

    /// Translate an opcode mnemonic into an `Opcode`.
    ///
    /// Accepts mnemonics spelled with any combination of upper or lower case
    /// letters, and with any amount of leading or trailing whitespace.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        let mut s = String::from(mnemonic);
        s.make_ascii_lowercase();
        match s.trim() {
            "varst" => Some(Self::VarSt),
            "varld" => Some(Self::VarLd),
            "varres" => Some(Self::VarRes),
            "vardisc" => Some(Self::VarDisc),
            "numvars" => Some(Self::NumVars),
            "push8" => Some(Self::Push8),
            "push8s" => Some(Self::Push8S),
            "push16" => Some(Self::Push16),
            "push16s" => Some(Self::Push16S),
            "push32" => Some(Self::Push32),
            "push32s" => Some(Self::Push32S),
            "push64" => Some(Self::Push64),
            "dup0" => Some(Self::Dup0),
            "dup1" => Some(Self::Dup1),
            "dup2" => Some(Self::Dup2),
            "dup3" => Some(Self::Dup3),
            "pop" => Some(Self::Pop),
            "swap" => Some(Self::Swap),
            "add" => Some(Self::Add),
            "sub" => Some(Self::Sub),
            "mul" => Some(Self::Mul),
            "mod" => Some(Self::Mod),
            "div" => Some(Self::Div),
            "divs" => Some(Self::DivS),
            "gt" => Some(Self::Gt),
            "gts" => Some(Self::GtS),
            "lt" => Some(Self::Lt),
            "lts" => Some(Self::LtS),
            "ge" => Some(Self::Ge),
            "ges" => Some(Self::GeS),
            "le" => Some(Self::Le),
            "les" => Some(Self::LeS),
            "eq" => Some(Self::Eq),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "xor" => Some(Self::Xor),
            "not" => Some(Self::Not),
            "inv" => Some(Self::Inv),
            "jump" => Some(Self::Jump),
            "jcond" => Some(Self::JCond),
            "read" => Some(Self::Read),
            "reads" => Some(Self::ReadS),
            "print" => Some(Self::Print),
            "prints" => Some(Self::PrintS),
            "halt" => Some(Self::Halt),
            _ => None,
        }
    }

    /// Get the lowercase mnemonic of this opcode.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::VarSt => "varst",
            Self::VarLd => "varld",
            Self::VarRes => "varres",
            Self::VarDisc => "vardisc",
            Self::NumVars => "numvars",
            Self::Push8 => "push8",
            Self::Push8S => "push8s",
            Self::Push16 => "push16",
            Self::Push16S => "push16s",
            Self::Push32 => "push32",
            Self::Push32S => "push32s",
            Self::Push64 => "push64",
            Self::Dup0 => "dup0",
            Self::Dup1 => "dup1",
            Self::Dup2 => "dup2",
            Self::Dup3 => "dup3",
            Self::Pop => "pop",
            Self::Swap => "swap",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Mod => "mod",
            Self::Div => "div",
            Self::DivS => "divs",
            Self::Gt => "gt",
            Self::GtS => "gts",
            Self::Lt => "lt",
            Self::LtS => "lts",
            Self::Ge => "ge",
            Self::GeS => "ges",
            Self::Le => "le",
            Self::LeS => "les",
            Self::Eq => "eq",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::Inv => "inv",
            Self::Jump => "jump",
            Self::JCond => "jcond",
            Self::Read => "read",
            Self::ReadS => "reads",
            Self::Print => "print",
            Self::PrintS => "prints",
            Self::Halt => "halt",
        }
    }

    /// Get the number of bytes in the inline literal expected by this opcode.
    ///
    /// This will be 0, 1, 2, 4, or 8. Only the push family carries a
    /// literal.
    pub fn literal_len(self) -> usize {
        match self {
            Opcode::Push8 | Opcode::Push8S => 1,
            Opcode::Push16 | Opcode::Push16S => 2,
            Opcode::Push32 | Opcode::Push32S => 4,
            Opcode::Push64 => 8,
            _ => 0,
        }
    }

    /// Whether the inline literal is sign-extended when decoded.
    pub fn literal_signed(self) -> bool {
        matches!(self, Opcode::Push8S | Opcode::Push16S | Opcode::Push32S)
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl From<Opcode> for u8 {
    fn from(value: Opcode) -> Self {
        value as u8
    }
}

/// Error returned by [`Opcode::try_from`].
#[derive(Debug, thiserror::Error)]
#[error("invalid opcode")]
pub struct InvalidOpcodeError;

impl TryFrom<u8> for Opcode {
    type Error = InvalidOpcodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Opcode::from_u8(value).ok_or(InvalidOpcodeError)
    }
}
