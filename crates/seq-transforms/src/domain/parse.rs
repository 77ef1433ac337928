//! Base-10 leading-prefix integer parsing
//!
//! Parsing follows the classic `parseInt(s, 10)` rules:
//! 1. Leading whitespace is skipped
//! 2. One optional `+` or `-` sign is accepted
//! 3. The longest run of ASCII digits is read; anything after it is ignored
//!
//! Input with no digits in that position fails. Values beyond the `i64`
//! range saturate.

use crate::constants::{PARSE_RADIX, PARSE_SENTINEL};
use thiserror::Error;

/// Integer prefix parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntPrefixError {
    /// Input is empty or whitespace only
    #[error("Cannot parse integer: input is empty")]
    Empty,
    /// Input does not start with an (optionally signed) digit
    #[error("Cannot parse integer: no leading digits in {input:?}")]
    NoDigits { input: String },
}

/// Parse the leading base-10 integer of `input`
pub fn parse_int_prefix(input: &str) -> Result<i64, ParseIntPrefixError> {
    let trimmed = input.trim_start_matches(is_parse_whitespace);
    if trimmed.is_empty() {
        return Err(ParseIntPrefixError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_len = unsigned.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_len == 0 {
        return Err(ParseIntPrefixError::NoDigits {
            input: input.to_string(),
        });
    }

    // Accumulate toward the sign so i64::MIN is reachable without overflow.
    let mut value: i64 = 0;
    for b in unsigned[..digit_len].bytes() {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(i64::from(PARSE_RADIX));
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }

    Ok(value)
}

/// Parse the leading base-10 integer of `input`, or return the sentinel
pub fn parse_int_or_sentinel(input: &str) -> i64 {
    match parse_int_prefix(input) {
        Ok(value) => value,
        Err(e) => {
            tracing::trace!(
                "Substituting {} for unparsable input: {}",
                PARSE_SENTINEL,
                e
            );
            PARSE_SENTINEL
        }
    }
}

/// Whitespace skipped before the sign
///
/// Unicode `White_Space` without NEL (U+0085), plus the byte order mark.
#[inline]
fn is_parse_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}
