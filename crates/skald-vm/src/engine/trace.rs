//! Tracing infrastructure for debugging VM execution.
//!
//! The tracer is a zero-cost abstraction: [`NoopTracer`]'s methods are
//! `#[inline(always)]` empty functions, so untraced runs carry no
//! tracing-related work at all. [`PrintTracer`] renders a snapshot of the
//! machine before each instruction — program counter, the instruction about
//! to execute, the operand stack top-first, and the variable array.

use std::fmt::{self, Write as _};

use skald_bytecode::Decoded;

use super::value::Value;

/// Tracer trait for VM execution instrumentation.
///
/// Methods receive raw data the VM already has; formatting happens in the
/// tracer implementation.
pub trait Tracer {
    /// Called before executing each decoded unit, reserved bytes included.
    fn trace_instruction(&mut self, pc: usize, decoded: &Decoded, stack: &[Value], vars: &[Value]);

    /// Called when execution stops cleanly, with the pc of the halt site.
    fn trace_halt(&mut self, pc: usize);
}

/// A tracer that does nothing. All calls compile away.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_instruction(&mut self, _: usize, _: &Decoded, _: &[Value], _: &[Value]) {}

    #[inline(always)]
    fn trace_halt(&mut self, _: usize) {}
}

/// A tracer that renders a text snapshot of the machine per instruction.
#[derive(Default)]
pub struct PrintTracer {
    out: String,
}

impl PrintTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the tracer and return everything it rendered.
    pub fn into_output(self) -> String {
        self.out
    }
}

impl Tracer for PrintTracer {
    fn trace_instruction(&mut self, pc: usize, decoded: &Decoded, stack: &[Value], vars: &[Value]) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        writeln!(self.out, "pc {pc}").unwrap();
        writeln!(self.out, "{decoded}").unwrap();

        writeln!(self.out, "stack").unwrap();
        format_stack(&mut self.out, stack).unwrap();

        writeln!(self.out, "vars").unwrap();
        format_vars(&mut self.out, vars).unwrap();
    }

    fn trace_halt(&mut self, pc: usize) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        writeln!(self.out, "halted at pc {pc}").unwrap();
    }
}

/// Render the operand stack, top first. Each slot is shown as hex, as an
/// unsigned decimal, and as a signed decimal.
pub fn format_stack<W: fmt::Write>(stream: &mut W, stack: &[Value]) -> fmt::Result {
    for (i, v) in stack.iter().rev().enumerate() {
        writeln!(
            stream,
            " {i:2}: 0x{:016x}  {}  {}",
            v.as_u64(),
            v.as_u64(),
            v.as_i64()
        )?;
    }

    Ok(())
}

/// Render the variable array by index, in the same three forms as
/// [`format_stack`].
pub fn format_vars<W: fmt::Write>(stream: &mut W, vars: &[Value]) -> fmt::Result {
    for (i, v) in vars.iter().enumerate() {
        writeln!(
            stream,
            " {i:2}: 0x{:016x}  {}  {}",
            v.as_u64(),
            v.as_u64(),
            v.as_i64()
        )?;
    }

    Ok(())
}
