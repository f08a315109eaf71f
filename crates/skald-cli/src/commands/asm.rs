//! Assemble a mnemonic listing into a bytecode file.
//!
//! The listing format is line oriented: one instruction per line, `#`
//! starts a comment, blank lines are ignored. Literals are decimal
//! (optionally negative) or `0x` hex, and are truncated to the opcode's
//! literal width exactly as [`Instruction`] encoding does.

use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::PathBuf;
use std::process::exit;

use skald_bytecode::{Instruction, Opcode, write_instructions};

pub struct AsmArgs {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
}

impl AsmArgs {
    fn output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => self.input_path.with_extension("skc"),
        }
    }
}

pub fn run(args: AsmArgs) {
    let source = match fs::read_to_string(&args.input_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", args.input_path.display());
            exit(2);
        }
    };

    let instructions = match assemble(&source) {
        Ok(instructions) => instructions,
        Err(err) => {
            eprintln!("error: {err}");
            exit(2);
        }
    };

    let output_path = args.output_path();
    let result = File::create(&output_path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write_instructions(&mut writer, &instructions)?;
        writer.flush()
    });
    if let Err(err) = result {
        eprintln!("error: cannot write {}: {err}", output_path.display());
        exit(2);
    }
}

/// Errors in a mnemonic listing, reported with 1-based line numbers.
#[derive(Debug, thiserror::Error)]
pub enum AsmError {
    #[error("line {line}: unknown mnemonic {mnemonic:?}")]
    UnknownMnemonic { line: usize, mnemonic: String },

    #[error("line {line}: {mnemonic} does not take a literal")]
    UnexpectedLiteral { line: usize, mnemonic: &'static str },

    #[error("line {line}: {mnemonic} requires a literal")]
    MissingLiteral { line: usize, mnemonic: &'static str },

    #[error("line {line}: invalid literal {literal:?}")]
    InvalidLiteral { line: usize, literal: String },

    #[error("line {line}: trailing tokens after instruction")]
    TrailingTokens { line: usize },
}

/// Parse a listing into instructions.
pub fn assemble(source: &str) -> Result<Vec<Instruction>, AsmError> {
    let mut instructions = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw_line.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let mut tokens = text.split_whitespace();
        let mnemonic = tokens.next().expect("non-empty line has a token");
        let Some(opcode) = Opcode::from_mnemonic(mnemonic) else {
            return Err(AsmError::UnknownMnemonic {
                line,
                mnemonic: mnemonic.to_string(),
            });
        };

        let literal_token = tokens.next();
        if tokens.next().is_some() {
            return Err(AsmError::TrailingTokens { line });
        }

        let literal = match (opcode.literal_len(), literal_token) {
            (0, None) => 0,
            (0, Some(_)) => {
                return Err(AsmError::UnexpectedLiteral {
                    line,
                    mnemonic: opcode.mnemonic(),
                });
            }
            (_, None) => {
                return Err(AsmError::MissingLiteral {
                    line,
                    mnemonic: opcode.mnemonic(),
                });
            }
            (_, Some(token)) => {
                parse_literal(token).ok_or_else(|| AsmError::InvalidLiteral {
                    line,
                    literal: token.to_string(),
                })?
            }
        };

        instructions.push(Instruction::new(opcode, literal));
    }

    Ok(instructions)
}

/// Parse a literal token: `0x` hex, negative decimal, or unsigned decimal.
/// Negative values carry their two's-complement bit pattern.
fn parse_literal(token: &str) -> Option<u64> {
    if let Some(hex) = token.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else if token.starts_with('-') {
        token.parse::<i64>().ok().map(|value| value as u64)
    } else {
        token.parse::<u64>().ok()
    }
}
