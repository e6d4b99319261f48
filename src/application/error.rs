use thiserror::Error;

use crate::domain::LedgerError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid date: {0} (expected yyyy-MM-dd)")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid transaction type: {0} (expected Income or Expense)")]
    InvalidKind(String),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
