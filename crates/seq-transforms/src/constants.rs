//! Sequence transform constants
//!
//! Literals that define the behavior of the transforms live here so that the
//! domain functions read as pure logic.

// =============================================================================
// Integer parsing
// =============================================================================

/// Radix used by every text-to-integer conversion
pub const PARSE_RADIX: u32 = 10;

/// Value substituted when a string has no leading integer
pub const PARSE_SENTINEL: i64 = 0;

/// Single currency prefix stripped by `remove_dollars`
pub const DOLLAR_PREFIX: char = '$';

// =============================================================================
// Message handling
// =============================================================================

/// Messages ending with this mark are shouted (uppercased)
pub const EXCLAIM_MARK: char = '!';

/// Messages ending with this mark are dropped
pub const QUESTION_MARK: char = '?';

// =============================================================================
// Word and color checks
// =============================================================================

/// Words strictly shorter than this many characters count as short
pub const SHORT_WORD_LIMIT: usize = 4;

/// Accepted color names (case-sensitive)
pub const RGB_COLORS: [&str; 3] = ["red", "blue", "green"];

// =============================================================================
// Arithmetic rendering
// =============================================================================

/// Rendering of the sum of an empty list of addends
pub const EMPTY_MATH: &str = "0=0";

/// Separator between the sum and the addends
pub const MATH_EQUALS: char = '=';

/// Separator between consecutive addends
pub const MATH_PLUS: char = '+';
