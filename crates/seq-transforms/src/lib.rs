//! seq-transforms - Small collection-processing transforms
//!
//! This crate provides pure, single-pass transforms over in-memory sequences:
//! - Number sequences: book-ending, tripling, equation rendering, sum injection
//! - Text sequences: lenient integer parsing, dollar stripping, shouting,
//!   short-word counting, RGB color checks
//!
//! No function mutates its input; every result is newly allocated.

pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use domain::numbers::{book_end_list, inject_positive, make_math, triple_numbers};
pub use domain::numeric::Numeric;
pub use domain::parse::{ParseIntPrefixError, parse_int_or_sentinel, parse_int_prefix};
pub use domain::text::{
    all_rgb, count_short_words, remove_dollars, shout_if_exclaiming, strings_to_integers,
};
