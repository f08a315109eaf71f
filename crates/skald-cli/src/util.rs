use std::fs;
use std::path::Path;
use std::process::exit;

/// Read a program file into memory, exiting with a usage error on failure.
pub fn load_program(path: &Path) -> Vec<u8> {
    match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", path.display());
            exit(2);
        }
    }
}
