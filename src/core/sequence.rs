//! Fibonacci sequence generation
//!
//! Terms follow the 0-indexed convention `[0, 1, 1, 2, 3, ...]`.

use crate::utils::error::{AppError, AppResult};

/// Generate the first `count` Fibonacci terms.
///
/// Returns an empty sequence for `count == 0` and rejects negative
/// counts. Terms are `u64`; requesting a term beyond the 64-bit range
/// (count > 94) is an error rather than a silent wrap.
pub fn fibonacci(count: i64) -> AppResult<Vec<u64>> {
    if count < 0 {
        return Err(AppError::InvalidArgument(format!(
            "Term count must be non-negative, got {}",
            count
        )));
    }

    let count = count as usize;
    let mut terms: Vec<u64> = Vec::with_capacity(count);
    for i in 0..count {
        let term = match i {
            0 => 0,
            1 => 1,
            _ => terms[i - 1].checked_add(terms[i - 2]).ok_or_else(|| {
                AppError::InvalidArgument(format!("Term {} exceeds the 64-bit range", i))
            })?,
        };
        terms.push(term);
    }

    Ok(terms)
}
