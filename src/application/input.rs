//! Parsing of raw user input into domain values.
//!
//! Every function returns a `Result` so callers branch on the outcome
//! instead of catching failures.

use chrono::NaiveDate;

use crate::domain::{format_cents, parse_cents, Cents, LedgerError, TransactionKind};

use super::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest single amount accepted: $1,000,000,000,000.00.
/// Ledger totals stay inside `i64` for up to 92,000 entries of this size.
pub const MAX_AMOUNT_CENTS: Cents = 100_000_000_000_000;

/// Parse a `yyyy-MM-dd` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(input.to_string()))
}

/// Parse a money amount into cents, between 0 and `MAX_AMOUNT_CENTS`.
pub fn parse_amount(input: &str) -> Result<Cents, AppError> {
    let input = input.trim();
    let cents = parse_cents(input)
        .map_err(|e| AppError::InvalidAmount(format!("{}: {}", input, e)))?;
    if cents < 0 {
        return Err(AppError::InvalidAmount(format!("{} is negative", input)));
    }
    if cents > MAX_AMOUNT_CENTS {
        return Err(AppError::InvalidAmount(format!(
            "{} exceeds the maximum of {}",
            input,
            format_cents(MAX_AMOUNT_CENTS)
        )));
    }
    Ok(cents)
}

/// Parse a transaction type. Exact, case-sensitive match.
pub fn parse_kind(input: &str) -> Result<TransactionKind, AppError> {
    TransactionKind::from_str(input)
        .ok_or_else(|| AppError::InvalidKind(input.to_string()))
}

/// Convert the 1-based number shown in listings into a 0-based ledger index.
/// `len` is the current ledger size; out-of-range numbers yield `IndexOutOfRange`.
pub fn parse_index(input: &str, len: usize) -> Result<usize, AppError> {
    let input = input.trim();
    let number: usize = input
        .parse()
        .map_err(|_| AppError::InvalidIndex(input.to_string()))?;

    // Listings start at 1, so 0 never names a transaction
    let index = number
        .checked_sub(1)
        .ok_or_else(|| AppError::InvalidIndex(input.to_string()))?;
    if index >= len {
        return Err(LedgerError::IndexOutOfRange { index, len }.into());
    }
    Ok(index)
}
