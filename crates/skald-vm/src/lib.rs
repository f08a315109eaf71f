//! # The Skald Virtual Machine
//!
//! This crate implements the Skald VM execution engine: a stack machine over
//! 64-bit untyped slots with a dynamically sized local variable array,
//! byte-addressed program counter, and line-oriented integer I/O.
//!
//! A [`Vm`] is constructed from a program byte slice plus an input and an
//! output stream, and driven with [`Vm::run`] or single-stepped with
//! [`Vm::step`]. Every runtime error is fatal and reports the program
//! counter of the faulting instruction.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::error::{ErrorKind, ReadFailure, Result, RuntimeError};
pub use engine::trace::{NoopTracer, PrintTracer, Tracer, format_stack, format_vars};
pub use engine::value::Value;
pub use engine::vm::{Status, Vm};
