mod cli;
mod commands;
mod util;

use cli::{AsmParams, DumpParams, RunParams, TraceParams};

fn main() {
    let matches = cli::build_cli().get_matches();

    match matches.subcommand() {
        Some(("run", m)) => commands::run::run(RunParams::from_matches(m).into()),
        Some(("dump", m)) => commands::dump::run(DumpParams::from_matches(m).into()),
        Some(("trace", m)) => commands::trace::run(TraceParams::from_matches(m).into()),
        Some(("asm", m)) => commands::asm::run(AsmParams::from_matches(m).into()),
        _ => unreachable!("subcommand is required"),
    }
}
