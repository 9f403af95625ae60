//! Comma-joining for list-valued query parameters.

use std::fmt::Display;

/// Joins integer identifiers into a single comma-separated string.
///
/// Input order is kept and duplicates are not removed; an empty slice
/// yields an empty string.
pub fn join_int_slice(values: &[i64]) -> String {
    join_slice(values)
}

/// Joins any displayable values into a single comma-separated string.
pub fn join_slice<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
