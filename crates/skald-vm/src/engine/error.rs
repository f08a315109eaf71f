//! Virtual machine runtime errors.
//!
//! Every runtime error is fatal to the current execution: the VM does not
//! retry and does not recover. The error carries the kind of failure plus
//! the program counter of the faulting instruction.

use std::io;

use skald_bytecode::Opcode;

/// A result type specialized to runtime errors.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failures of the `read`/`reads` input protocol.
#[derive(Debug, thiserror::Error)]
pub enum ReadFailure {
    /// The underlying stream returned an error.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// End of stream or whitespace-only input: no token to parse.
    #[error("empty token")]
    EmptyToken,

    /// The token contains something other than an optional sign and
    /// decimal digits.
    #[error("malformed integer {0:?}")]
    Malformed(String),

    /// The token is a well-formed decimal integer outside the 64-bit range
    /// of the variant that read it.
    #[error("integer out of range {0:?}")]
    OutOfRange(String),
}

/// Categories of runtime error.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("stack underflow: instruction needs {needed} values, stack has {depth}")]
    StackUnderflow { needed: usize, depth: usize },

    #[error("variable index {index} out of range ({len} reserved)")]
    VarOutOfRange { index: u64, len: usize },

    #[error("divide by zero")]
    DivideByZero,

    #[error("jump target {target} out of bounds (program is {len} bytes)")]
    JumpOutOfBounds { target: i128, len: usize },

    #[error("truncated literal: {opcode} expects {needed} bytes, {remaining} remain")]
    TruncatedLiteral {
        opcode: Opcode,
        needed: usize,
        remaining: usize,
    },

    #[error("read failed: {0}")]
    InputRead(#[from] ReadFailure),

    #[error("write failed: {0}")]
    OutputWrite(io::Error),

    #[error("cannot reserve {count} variable slots")]
    VarAllocation { count: u64 },
}

/// A fatal VM runtime error.
#[derive(Debug, thiserror::Error)]
#[error("runtime error at pc {pc}: {kind}")]
pub struct RuntimeError {
    kind: ErrorKind,
    pc: usize,
}

impl RuntimeError {
    /// Create an error for the instruction at `pc`.
    pub fn new(kind: ErrorKind, pc: usize) -> Self {
        Self { kind, pc }
    }

    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Get the value of the program counter at which the error occurred.
    pub fn pc(&self) -> usize {
        self.pc
    }
}
