//! Disassemble a bytecode program.

use std::path::PathBuf;

use skald_bytecode::{Colors, dump};

use crate::util::load_program;

pub struct DumpArgs {
    pub program_path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let program = load_program(&args.program_path);
    print!("{}", dump(&program, Colors::new(args.color)));
}
