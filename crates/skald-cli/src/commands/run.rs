//! Execute a bytecode program against stdin/stdout.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use skald_vm::Vm;

use crate::util::load_program;

pub struct RunArgs {
    pub program_path: PathBuf,
}

pub fn run(args: RunArgs) {
    let program = load_program(&args.program_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut vm = Vm::new(&program, stdin.lock(), BufWriter::new(stdout.lock()));

    if let Err(err) = vm.run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
