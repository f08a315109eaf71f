//! Virtual machine state and the fetch/decode/dispatch loop.

use std::io::{BufRead, Write};

use skald_bytecode::{DecodeError, Decoded, Opcode};

use super::error::{ErrorKind, Result, RuntimeError};
use super::io;
use super::trace::{NoopTracer, Tracer};
use super::value::Value;

/// Observable engine state after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// More instructions remain; call [`Vm::step`] again.
    Running,
    /// Execution finished cleanly, via `halt`, a jump to the end of the
    /// program, or the program counter advancing past the last instruction.
    Halted,
}

/// Virtual machine state for program execution.
///
/// The program is borrowed for the lifetime of the instance and never
/// mutated. All mutable state (operand stack, variable array, program
/// counter, streams) is owned by the VM. The stack and variables are
/// exposed read-only for inspection; the only mutation API is
/// [`step`](Self::step)/[`run`](Self::run).
pub struct Vm<'p, R, W> {
    program: &'p [u8],
    pc: usize,
    stack: Vec<Value>,
    vars: Vec<Value>,
    input: R,
    output: W,
    halted: bool,
}

impl<'p, R: BufRead, W: Write> Vm<'p, R, W> {
    /// Create a new VM over `program`, reading from `input` and writing to
    /// `output`.
    pub fn new(program: &'p [u8], input: R, output: W) -> Self {
        Self {
            program,
            pc: 0,
            stack: Vec::new(),
            vars: Vec::new(),
            input,
            output,
            halted: false,
        }
    }

    /// The current program counter: a byte index into the program.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// The operand stack, bottom first.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// The local variable array.
    pub fn vars(&self) -> &[Value] {
        &self.vars
    }

    /// Execute instructions until the program halts or fails.
    ///
    /// Output is flushed at halt. Errors are fatal: a VM that has returned
    /// an error must be discarded.
    pub fn run(&mut self) -> Result<()> {
        self.run_with(&mut NoopTracer)
    }

    /// Execute to completion with a tracer observing each instruction.
    pub fn run_with<T: Tracer>(&mut self, tracer: &mut T) -> Result<()> {
        while self.step_with(tracer)? == Status::Running {}
        Ok(())
    }

    /// Execute exactly one instruction.
    ///
    /// Once the VM has halted, further calls return [`Status::Halted`]
    /// without executing anything.
    pub fn step(&mut self) -> Result<Status> {
        self.step_with(&mut NoopTracer)
    }

    /// Execute exactly one instruction with a tracer observing it.
    pub fn step_with<T: Tracer>(&mut self, tracer: &mut T) -> Result<Status> {
        if self.halted {
            return Ok(Status::Halted);
        }

        let at = self.pc;
        let (decoded, next) = match Decoded::decode(self.program, at) {
            Ok(decoded) => decoded,
            // Walking off the end of the program is the normal halt.
            Err(DecodeError::EndOfProgram) => return self.halt(at, tracer),
            Err(DecodeError::TruncatedLiteral {
                opcode,
                needed,
                remaining,
            }) => {
                return Err(RuntimeError::new(
                    ErrorKind::TruncatedLiteral {
                        opcode,
                        needed,
                        remaining,
                    },
                    at,
                ));
            }
        };

        tracer.trace_instruction(at, &decoded, &self.stack, &self.vars);

        // Reserved bytes execute as no-ops: advance one byte, touch nothing.
        let instr = match decoded {
            Decoded::Instr(instr) => instr,
            Decoded::Reserved(_) => {
                self.pc = next;
                return Ok(Status::Running);
            }
        };

        self.pc = next;
        match instr.opcode {
            Opcode::VarSt => {
                let (value, index) = self.pop2(at)?;
                let slot = self.var_slot(index.as_u64(), at)?;
                *slot = value;
            }
            Opcode::VarLd => {
                let index = self.pop(at)?;
                let value = *self.var_slot(index.as_u64(), at)?;
                self.stack.push(value);
            }
            Opcode::VarRes => {
                let count = self.pop(at)?.as_u64();
                self.var_reserve(count, at)?;
            }
            Opcode::VarDisc => {
                let count = self.pop(at)?.as_u64();
                // Discarding more slots than exist clears the array.
                let count = usize::try_from(count).unwrap_or(usize::MAX);
                self.vars.truncate(self.vars.len().saturating_sub(count));
            }
            Opcode::NumVars => {
                self.stack.push(Value::from_u64(self.vars.len() as u64));
            }

            Opcode::Push8
            | Opcode::Push8S
            | Opcode::Push16
            | Opcode::Push16S
            | Opcode::Push32
            | Opcode::Push32S
            | Opcode::Push64 => {
                // The codec already extended the literal to 64 bits.
                self.stack.push(Value::from_u64(instr.literal));
            }

            Opcode::Dup0 => self.dup(0, at)?,
            Opcode::Dup1 => self.dup(1, at)?,
            Opcode::Dup2 => self.dup(2, at)?,
            Opcode::Dup3 => self.dup(3, at)?,
            Opcode::Pop => {
                self.pop(at)?;
            }
            Opcode::Swap => {
                let depth = self.stack.len();
                if depth < 2 {
                    return Err(RuntimeError::new(
                        ErrorKind::StackUnderflow { needed: 2, depth },
                        at,
                    ));
                }
                self.stack.swap(depth - 1, depth - 2);
            }

            Opcode::Add => self.binary(at, Value::add)?,
            Opcode::Sub => self.binary(at, Value::sub)?,
            Opcode::Mul => self.binary(at, Value::mul)?,
            Opcode::Mod => self.binary_checked(at, Value::rem_unsigned)?,
            Opcode::Div => self.binary_checked(at, Value::div_unsigned)?,
            Opcode::DivS => self.binary_checked(at, Value::div_signed)?,

            Opcode::Gt => self.binary(at, Value::greater_unsigned)?,
            Opcode::GtS => self.binary(at, Value::greater_signed)?,
            Opcode::Lt => self.binary(at, Value::less_unsigned)?,
            Opcode::LtS => self.binary(at, Value::less_signed)?,
            Opcode::Ge => self.binary(at, Value::greater_or_eq_unsigned)?,
            Opcode::GeS => self.binary(at, Value::greater_or_eq_signed)?,
            Opcode::Le => self.binary(at, Value::less_or_eq_unsigned)?,
            Opcode::LeS => self.binary(at, Value::less_or_eq_signed)?,
            Opcode::Eq => self.binary(at, Value::eq)?,
            Opcode::And => self.binary(at, Value::and)?,
            Opcode::Or => self.binary(at, Value::or)?,
            Opcode::Xor => self.binary(at, Value::xor)?,

            Opcode::Not => {
                let a = self.pop(at)?;
                self.stack.push(a.not());
            }
            Opcode::Inv => {
                let a = self.pop(at)?;
                self.stack.push(a.inv());
            }

            Opcode::Jump => {
                let offset = self.pop(at)?.as_i64();
                return self.jump(offset, at, tracer);
            }
            Opcode::JCond => {
                let (cond, offset) = self.pop2(at)?;
                if cond.is_truthy() {
                    return self.jump(offset.as_i64(), at, tracer);
                }
            }

            Opcode::Read => {
                let value = io::read_unsigned(&mut self.input)
                    .map_err(|failure| RuntimeError::new(failure.into(), at))?;
                self.stack.push(Value::from_u64(value));
            }
            Opcode::ReadS => {
                let value = io::read_signed(&mut self.input)
                    .map_err(|failure| RuntimeError::new(failure.into(), at))?;
                self.stack.push(Value::from_i64(value));
            }
            Opcode::Print => {
                let value = self.pop(at)?;
                io::write_unsigned(&mut self.output, value.as_u64())
                    .map_err(|err| RuntimeError::new(ErrorKind::OutputWrite(err), at))?;
            }
            Opcode::PrintS => {
                let value = self.pop(at)?;
                io::write_signed(&mut self.output, value.as_i64())
                    .map_err(|err| RuntimeError::new(ErrorKind::OutputWrite(err), at))?;
            }

            Opcode::Halt => return self.halt(at, tracer),
        }

        Ok(Status::Running)
    }

    /// Stop cleanly, flushing buffered output.
    fn halt<T: Tracer>(&mut self, at: usize, tracer: &mut T) -> Result<Status> {
        self.output
            .flush()
            .map_err(|err| RuntimeError::new(ErrorKind::OutputWrite(err), at))?;
        self.halted = true;
        tracer.trace_halt(at);
        Ok(Status::Halted)
    }

    /// Transfer control relative to the byte after the jump opcode.
    ///
    /// A target equal to the program length is a clean halt; anything else
    /// outside the program is an error. Arithmetic happens in i128 so a
    /// wild offset cannot wrap back into bounds.
    fn jump<T: Tracer>(&mut self, offset: i64, at: usize, tracer: &mut T) -> Result<Status> {
        let len = self.program.len();
        let target = at as i128 + 1 + offset as i128;

        if target == len as i128 {
            return self.halt(at, tracer);
        }
        if target < 0 || target > len as i128 {
            return Err(RuntimeError::new(
                ErrorKind::JumpOutOfBounds { target, len },
                at,
            ));
        }

        self.pc = target as usize;
        Ok(Status::Running)
    }

    fn pop(&mut self, at: usize) -> Result<Value> {
        match self.stack.pop() {
            Some(value) => Ok(value),
            None => Err(RuntimeError::new(
                ErrorKind::StackUnderflow { needed: 1, depth: 0 },
                at,
            )),
        }
    }

    /// Pop two values; the second of the pair was on top.
    fn pop2(&mut self, at: usize) -> Result<(Value, Value)> {
        let depth = self.stack.len();
        if depth < 2 {
            return Err(RuntimeError::new(
                ErrorKind::StackUnderflow { needed: 2, depth },
                at,
            ));
        }
        let top = self.stack[depth - 1];
        let below = self.stack[depth - 2];
        self.stack.truncate(depth - 2);
        Ok((below, top))
    }

    fn dup(&mut self, index: usize, at: usize) -> Result<()> {
        let depth = self.stack.len();
        if depth <= index {
            return Err(RuntimeError::new(
                ErrorKind::StackUnderflow {
                    needed: index + 1,
                    depth,
                },
                at,
            ));
        }
        let value = self.stack[depth - 1 - index];
        self.stack.push(value);
        Ok(())
    }

    fn binary(&mut self, at: usize, op: impl FnOnce(Value, Value) -> Value) -> Result<()> {
        let (a, b) = self.pop2(at)?;
        self.stack.push(op(a, b));
        Ok(())
    }

    fn binary_checked(
        &mut self,
        at: usize,
        op: impl FnOnce(Value, Value) -> std::result::Result<Value, ErrorKind>,
    ) -> Result<()> {
        let (a, b) = self.pop2(at)?;
        let value = op(a, b).map_err(|kind| RuntimeError::new(kind, at))?;
        self.stack.push(value);
        Ok(())
    }

    fn var_slot(&mut self, index: u64, at: usize) -> Result<&mut Value> {
        let len = self.vars.len();
        if index >= len as u64 {
            return Err(RuntimeError::new(
                ErrorKind::VarOutOfRange { index, len },
                at,
            ));
        }
        Ok(&mut self.vars[index as usize])
    }

    /// Append `count` zeroed slots to the variable array.
    fn var_reserve(&mut self, count: u64, at: usize) -> Result<()> {
        let additional = usize::try_from(count)
            .map_err(|_| RuntimeError::new(ErrorKind::VarAllocation { count }, at))?;
        self.vars
            .try_reserve(additional)
            .map_err(|_| RuntimeError::new(ErrorKind::VarAllocation { count }, at))?;
        self.vars
            .resize(self.vars.len() + additional, Value::default());
        Ok(())
    }
}
