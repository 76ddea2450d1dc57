//! Argument checks shared by the chunky and planar views.
//!
//! All checks run before the buffer is touched, so a failing call never
//! leaves a partial write behind.

use alloc::format;
use alloc::string::String;

use crate::error::PixelViewError;

/// Ensure `min <= value <= max`.
pub(crate) fn check_between(
    value: u64,
    min: u64,
    max: u64,
    context: &'static str,
) -> Result<(), PixelViewError> {
    if value < min || value > max {
        return Err(PixelViewError::OutOfRange {
            context,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Ensure `value` does not exceed an optional configured cap.
pub(crate) fn check_at_most(
    value: u64,
    max: Option<u64>,
    context: &'static str,
) -> Result<(), PixelViewError> {
    match max {
        Some(max) if value > max => Err(PixelViewError::LimitExceeded(format!(
            "{context} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

/// Ensure `value < end`. Used for coordinates, where `end` is the width or
/// height. An empty axis (`end == 0`) rejects every value.
#[inline]
pub(crate) fn check_below(value: u32, end: u32, context: &'static str) -> Result<(), PixelViewError> {
    if value >= end {
        return Err(PixelViewError::OutOfRange {
            context,
            value: u64::from(value),
            min: 0,
            max: u64::from(end).saturating_sub(1),
        });
    }
    Ok(())
}

/// Ensure `value` is one of `allowed`, returning its position in the list.
pub(crate) fn check_one_of(
    value: &str,
    allowed: &[&str],
    context: &'static str,
) -> Result<usize, PixelViewError> {
    allowed
        .iter()
        .position(|candidate| *candidate == value)
        .ok_or_else(|| PixelViewError::NotOneOf {
            context,
            value: format!("\"{value}\""),
            expected: conjunction(allowed),
        })
}

/// Ensure `needed` bytes fit in `buffer_len` after skipping `byte_offset`.
pub(crate) fn check_fits(
    needed: usize,
    buffer_len: usize,
    byte_offset: usize,
) -> Result<(), PixelViewError> {
    let available = buffer_len.saturating_sub(byte_offset);
    if byte_offset > buffer_len || needed > available {
        return Err(PixelViewError::BufferTooSmall {
            needed: needed.saturating_add(byte_offset),
            actual: buffer_len,
        });
    }
    Ok(())
}

/// Quote and join values into `"a", "b" or "c"`.
fn conjunction(values: &[&str]) -> String {
    match values {
        [] => String::new(),
        [only] => format!("\"{only}\""),
        [head @ .., last] => {
            let mut out = String::new();
            for (i, v) in head.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push('"');
                out.push_str(v);
                out.push('"');
            }
            out.push_str(&format!(" or \"{last}\""));
            out
        }
    }
}
