//! Line-oriented integer I/O for the `read`/`print` instruction family.
//!
//! The reader consumes one byte at a time and never consumes the first
//! whitespace byte after a token: that byte may delimit the next token for
//! a subsequent `read`. The single-byte lookahead this requires is built on
//! [`BufRead::fill_buf`]/[`BufRead::consume`].

use std::io::{self, BufRead, Write};

use super::error::ReadFailure;

/// Whitespace bytes recognized by the token reader: space, tab, CR, LF,
/// vertical tab, and form feed.
fn is_token_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | 0x0b | 0x0c)
}

/// Look at the next input byte without consuming it.
fn peek<R: BufRead>(input: &mut R) -> io::Result<Option<u8>> {
    let buf = input.fill_buf()?;
    Ok(buf.first().copied())
}

/// Read one whitespace-delimited token.
///
/// Leading whitespace is consumed and discarded. The terminating whitespace
/// byte, if any, is left in the stream. End of stream terminates a token
/// that has at least one byte; with no bytes accumulated it is reported as
/// an empty token.
fn read_token<R: BufRead>(input: &mut R) -> Result<String, ReadFailure> {
    while let Some(byte) = peek(input)? {
        if !is_token_whitespace(byte) {
            break;
        }
        input.consume(1);
    }

    let mut token = Vec::new();
    while let Some(byte) = peek(input)? {
        if is_token_whitespace(byte) {
            break;
        }
        token.push(byte);
        input.consume(1);
    }

    if token.is_empty() {
        return Err(ReadFailure::EmptyToken);
    }

    String::from_utf8(token)
        .map_err(|err| ReadFailure::Malformed(String::from_utf8_lossy(err.as_bytes()).into_owned()))
}

/// Read a decimal unsigned integer token.
///
/// Only ASCII digits are accepted: no sign, no `0x`, no underscores.
pub fn read_unsigned<R: BufRead>(input: &mut R) -> Result<u64, ReadFailure> {
    let token = read_token(input)?;
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReadFailure::Malformed(token));
    }
    token.parse().map_err(|_| ReadFailure::OutOfRange(token))
}

/// Read a decimal signed integer token.
///
/// An optional leading `-` is accepted; `+` is not.
pub fn read_signed<R: BufRead>(input: &mut R) -> Result<i64, ReadFailure> {
    let token = read_token(input)?;
    let digits = token.strip_prefix('-').unwrap_or(&token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReadFailure::Malformed(token));
    }
    token.parse().map_err(|_| ReadFailure::OutOfRange(token))
}

/// Write a decimal unsigned integer followed by a single LF.
pub fn write_unsigned<W: Write>(output: &mut W, value: u64) -> io::Result<()> {
    writeln!(output, "{value}")
}

/// Write a decimal signed integer followed by a single LF.
pub fn write_signed<W: Write>(output: &mut W, value: i64) -> io::Result<()> {
    writeln!(output, "{value}")
}
