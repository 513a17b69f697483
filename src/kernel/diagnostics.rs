//! Maps raw compiler/interpreter output onto an editor line.

use crate::kernel::problems::Diagnostic;
use crate::kernel::services::ports::surface::EditingSurface;
use regex::Regex;
use std::num::IntErrorKind;

const TRACEBACK_MARKER: &str = "traceback";

/// Resolves the 1-based document line an error message points at.
///
/// `pattern` picks the line from the language's usual output; when the message is a
/// traceback the last `generic` match wins instead, since the innermost frame is listed last.
/// Returns `None` when nothing usable is found, including a reported line of `0`.
pub fn resolve_error_line(
    error: &str,
    line_offset: i64,
    pattern: &Regex,
    generic: &Regex,
    total_lines: usize,
) -> Option<usize> {
    let reported = first_line_number(error, pattern)?;
    let mut line = shift_and_clamp(reported, line_offset, total_lines);

    if error.to_lowercase().contains(TRACEBACK_MARKER) {
        if let Some(last) = last_line_number(error, generic) {
            line = shift_and_clamp(last, line_offset, total_lines);
        }
    }

    Some(line)
}

/// Builds the single error diagnostic covering the resolved line.
pub fn map_error(
    error: &str,
    line_offset: i64,
    pattern: &Regex,
    generic: &Regex,
    surface: &dyn EditingSurface,
) -> Option<Diagnostic> {
    let total_lines = surface.line_count();
    let line = resolve_error_line(error, line_offset, pattern, generic, total_lines)?;
    let info = surface.line(line)?;
    Some(Diagnostic::error(info.from, info.to, error))
}

fn first_line_number(error: &str, pattern: &Regex) -> Option<u64> {
    let caps = pattern.captures(error)?;
    parse_line(caps.get(1)?.as_str()).filter(|line| *line != 0)
}

fn last_line_number(error: &str, pattern: &Regex) -> Option<u64> {
    pattern
        .captures_iter(error)
        .filter_map(|caps| caps.get(1))
        .last()
        .and_then(|m| parse_line(m.as_str()))
}

/// Numbers too large for `u64` saturate; they clamp to the last line like any other overshoot.
fn parse_line(digits: &str) -> Option<u64> {
    match digits.parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

fn shift_and_clamp(reported: u64, line_offset: i64, total_lines: usize) -> usize {
    let last = total_lines.max(1) as i128;
    let shifted = reported as i128 - line_offset as i128;
    shifted.clamp(1, last) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/diagnostics.rs"]
mod tests;
