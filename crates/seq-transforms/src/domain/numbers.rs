//! Number sequence transforms
//!
//! Every function borrows its input and returns a newly allocated result.

use crate::constants::{EMPTY_MATH, MATH_EQUALS, MATH_PLUS};
use crate::domain::numeric::Numeric;

/// Return the first and last values
///
/// An empty input yields an empty result; a single value is repeated twice.
pub fn book_end_list<T: Numeric>(numbers: &[T]) -> Vec<T> {
    match (numbers.first(), numbers.last()) {
        (Some(&first), Some(&last)) => vec![first, last],
        _ => Vec::new(),
    }
}

/// Multiply every value by 3, preserving order
pub fn triple_numbers<T: Numeric>(numbers: &[T]) -> Vec<T> {
    numbers.iter().map(|&n| n.tripled()).collect()
}

/// Render the addends as an equation: `[1, 2, 3]` becomes `"6=1+2+3"`
///
/// The sum is rendered from the wide accumulator, so it is exact for every
/// integer input. An empty input renders as `"0=0"`.
pub fn make_math<T: Numeric>(addends: &[T]) -> String {
    if addends.is_empty() {
        return EMPTY_MATH.to_string();
    }

    let sum = sum_of(addends);
    let terms: Vec<String> = addends.iter().map(ToString::to_string).collect();
    let plus = MATH_PLUS.to_string();

    format!("{sum}{MATH_EQUALS}{}", terms.join(&plus))
}

/// Insert the sum of the non-negative prefix after the first negative value
///
/// Values are summed from the start while they are `>= 0`. The sum is placed
/// directly after the first value that is not (negative or NaN), or appended
/// when every value qualifies. An empty input yields `[0]`. A sum beyond the
/// range of `T` saturates at `T`'s maximum.
///
/// `[1, 9, -5, 7]` becomes `[1, 9, -5, 10, 7]`; `[1, 9, 7]` becomes `[1, 9, 7, 17]`.
pub fn inject_positive<T: Numeric>(values: &[T]) -> Vec<T> {
    let prefix_len = values.iter().take_while(|&&v| v >= T::ZERO).count();
    let prefix_sum = T::from_sum(sum_of(&values[..prefix_len]));

    let mut out = Vec::with_capacity(values.len() + 1);
    if prefix_len == values.len() {
        out.extend_from_slice(values);
        out.push(prefix_sum);
    } else {
        tracing::trace!(index = prefix_len, "First negative value found");
        let split = prefix_len + 1;
        out.extend_from_slice(&values[..split]);
        out.push(prefix_sum);
        out.extend_from_slice(&values[split..]);
    }

    out
}

fn sum_of<T: Numeric>(values: &[T]) -> T::Sum {
    values.iter().fold(T::SUM_ZERO, |acc, &v| v.accumulate(acc))
}
