//! Line-based prompts over any reader/writer pair.

use crate::errors::{AppError, AppResult};
use std::io::{BufRead, Write};

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Print `prompt`, read one line, return it trimmed and lowercased.
/// End of input is reported as [`AppError::InputClosed`].
pub fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> AppResult<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(line.trim().to_lowercase())
}

/// Ask until `parse` accepts the normalised answer.
///
/// `parse` defines the closed set of valid answers; anything it rejects
/// prints [`INVALID_INPUT`] and the question is asked again, with no
/// limit on attempts.
pub fn ask_choice<T, R, W, F>(input: &mut R, out: &mut W, prompt: &str, parse: F) -> AppResult<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let answer = read_answer(input, out, prompt)?;
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }
        log::debug!("rejected answer '{answer}'");
        writeln!(out, "{INVALID_INPUT}")?;
    }
}

/// True only for "yes" (any case).
pub fn ask_yes<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> AppResult<bool> {
    Ok(read_answer(input, out, prompt)? == "yes")
}
