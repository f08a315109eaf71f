//! Execute a program with a per-instruction machine trace.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use skald_vm::{PrintTracer, Vm};

use crate::util::load_program;

pub struct TraceArgs {
    pub program_path: PathBuf,
}

pub fn run(args: TraceArgs) {
    let program = load_program(&args.program_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut vm = Vm::new(&program, stdin.lock(), BufWriter::new(stdout.lock()));

    let mut tracer = PrintTracer::new();
    let result = vm.run_with(&mut tracer);
    drop(vm);

    // The trace goes to stderr so program output on stdout stays clean.
    eprint!("{}", tracer.into_output());

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
