//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so the same arg definition is reused across commands.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// Bytecode program file (positional).
pub fn program_path_arg() -> Arg {
    Arg::new("program_path")
        .value_name("PROGRAM")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Bytecode program file")
}

/// Assembly listing file (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Assembly listing file")
}

/// Output bytecode file (-o/--output).
pub fn output_path_arg() -> Arg {
    Arg::new("output_path")
        .short('o')
        .long("output")
        .value_name("OUTPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Output file (defaults to INPUT with a .skc extension)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
