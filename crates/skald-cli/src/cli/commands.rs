//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("skald")
        .about("Stack-based bytecode VM for the Skald scripting language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(run_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
        .subcommand(asm_command())
}

/// Execute a bytecode program.
pub fn run_command() -> Command {
    Command::new("run")
        .about("Execute a bytecode program against stdin/stdout")
        .after_help(
            r#"EXAMPLES:
  skald run game.skc                  # read from stdin, print to stdout
  echo '3 4' | skald run add.skc"#,
        )
        .arg(program_path_arg())
}

/// Disassemble a bytecode program.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Disassemble a bytecode program")
        .after_help(
            r#"EXAMPLES:
  skald dump game.skc
  skald dump game.skc --color never"#,
        )
        .arg(program_path_arg())
        .arg(color_arg())
}

/// Execute with a per-instruction machine trace.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Execute a program, tracing every instruction to stderr")
        .after_help(
            r#"EXAMPLES:
  skald trace game.skc 2>game.trace   # program output stays on stdout"#,
        )
        .arg(program_path_arg())
}

/// Assemble a mnemonic listing.
pub fn asm_command() -> Command {
    Command::new("asm")
        .about("Assemble a mnemonic listing into a bytecode file")
        .after_help(
            r#"EXAMPLES:
  skald asm add.ska                   # writes add.skc
  skald asm add.ska -o build/add.skc"#,
        )
        .arg(input_path_arg())
        .arg(output_path_arg())
}
