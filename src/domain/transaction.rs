use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{format_dollars, Cents};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money coming in (salary, refunds, gifts)
    Income,
    /// Money going out (groceries, rent, bills)
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    /// Strict, case-sensitive match: only "Income" and "Expense" are accepted.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Income" => Some(TransactionKind::Income),
            "Expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    /// Contribution of `amount` to a running balance.
    pub fn signed(&self, amount: Cents) -> Cents {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense record.
/// Transactions are never edited in place; the ledger replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    /// Free-form label used for grouping (e.g., "Food", "Salary")
    pub category: String,
    /// Amount in cents (never negative)
    pub amount_cents: Cents,
    /// Calendar day the transaction happened
    pub date: NaiveDate,
    pub description: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount_cents: Cents,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount_cents,
            date,
            description: description.into(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Signed effect of this transaction on the balance.
    pub fn signed_amount(&self) -> Cents {
        self.kind.signed(self.amount_cents)
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.kind,
            self.category,
            format_dollars(self.amount_cents),
            self.date.format("%Y-%m-%d"),
            self.description
        )
    }
}
